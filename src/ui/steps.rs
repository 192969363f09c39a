//! Step views - one block of lines per wizard step

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::Context;
use crate::domain::project::{
    Choice, ReviewSummary, Step, CHECKLIST, DISCLAIMER, MILESTONES,
};
use crate::modules::post_project::{Field, PostProject};

pub const CROSS_CHAIN_BLURB: &str = "This project will be created on multiple Avalanche blockchains, allowing freelancers from different chains to participate.";

pub fn step_lines(wizard: &PostProject, ctx: &Context) -> Vec<Line<'static>> {
    let step = wizard.step();
    let mut lines = vec![
        Line::from(Span::styled(
            step.title(),
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    match step {
        Step::Details | Step::Skills => {
            for field in wizard.fields() {
                lines.extend(field_lines(wizard, field, ctx));
            }
            if step == Step::Skills {
                lines.insert(
                    4,
                    Line::from(Span::styled(
                        "  Separate skills with commas",
                        Style::default().fg(Color::DarkGray),
                    )),
                );
            }
        }
        Step::Budget => {
            for field in wizard.fields() {
                if field == Field::CrossChain {
                    lines.push(Line::from(Span::styled(
                        "─".repeat(40),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
                if field == Field::DestinationChain {
                    lines.push(Line::from(Span::styled(
                        CROSS_CHAIN_BLURB,
                        Style::default().fg(Color::LightBlue),
                    )));
                }
                lines.extend(field_lines(wizard, field, ctx));
            }
        }
        Step::Review => lines.extend(review_lines(wizard, ctx)),
    }

    lines
}

fn focus_marker(focused: bool) -> Span<'static> {
    if focused {
        Span::styled("> ", Style::default().fg(Color::Cyan))
    } else {
        Span::raw("  ")
    }
}

fn field_lines(wizard: &PostProject, field: Field, ctx: &Context) -> Vec<Line<'static>> {
    let state = wizard.state();
    let draft = &state.draft;
    let focused = wizard.focused_field() == Some(field);
    let editing = focused && wizard.is_editing();
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let value_spans: Vec<Span<'static>> = match field {
        Field::Title | Field::Description | Field::Skills | Field::Budget => {
            let value = match field {
                Field::Title => &draft.title,
                Field::Description => &draft.description,
                Field::Skills => &draft.skills,
                _ => &draft.budget,
            };
            let mut spans = if value.is_empty() && !editing {
                vec![Span::styled(
                    field.placeholder(),
                    Style::default().fg(Color::DarkGray),
                )]
            } else {
                vec![Span::raw(value.replace('\n', " ⏎ "))]
            };
            if editing {
                spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
            }
            spans
        }
        Field::Category => choice_spans(draft.category.label(), focused),
        Field::Experience => choice_spans(draft.experience.label(), focused),
        Field::BudgetType => choice_spans(draft.budget_type.label(), focused),
        Field::Duration => choice_spans(draft.duration.label(), focused),
        Field::CrossChain => {
            let mark = if state.is_cross_chain { "[x] " } else { "[ ] " };
            return vec![Line::from(vec![
                focus_marker(focused),
                Span::styled(mark, Style::default().fg(Color::LightCyan)),
                Span::styled(field.label(), label_style),
            ])];
        }
        Field::DestinationChain => {
            let chosen = state
                .destination_chain_id
                .map(|id| ctx.chain_label(id))
                .unwrap_or_else(|| "None selected".to_string());
            vec![
                Span::raw(chosen),
                Span::styled("  (Enter to choose)", Style::default().fg(Color::DarkGray)),
            ]
        }
    };

    let mut value_line = vec![Span::raw("    ")];
    value_line.extend(value_spans);
    vec![
        Line::from(vec![focus_marker(focused), Span::styled(field.label(), label_style)]),
        Line::from(value_line),
    ]
}

fn choice_spans(label: &'static str, focused: bool) -> Vec<Span<'static>> {
    let arrow_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    vec![
        Span::styled("‹ ", arrow_style),
        Span::raw(label),
        Span::styled(" ›", arrow_style),
    ]
}

fn review_lines(wizard: &PostProject, ctx: &Context) -> Vec<Line<'static>> {
    let summary = ReviewSummary::from_state(wizard.state());
    let dim = Style::default().fg(Color::DarkGray);
    let heading = Style::default().add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled(
            "Confirm the summary below before publishing your project.",
            dim,
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Budget  ", dim),
            Span::styled(summary.budget.clone(), heading),
            Span::raw("  "),
            Span::styled(
                " Escrow protected ",
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ),
        ]),
        Line::from(Span::styled(format!("        {}", summary.budget_note), dim)),
        Line::from(""),
    ];

    for (label, value) in &summary.details {
        lines.push(Line::from(vec![
            Span::styled(format!("{label:<12}"), dim),
            Span::raw(value.clone()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Milestones", heading)));
    for milestone in MILESTONES {
        lines.push(Line::from(vec![
            Span::raw(format!("  • {}", milestone.name)),
            Span::styled(
                format!(
                    "  ETA · {} days · {}",
                    milestone.eta_days,
                    milestone.status.label()
                ),
                dim,
            ),
        ]));
    }

    if let Some(destination) = summary.cross_chain_destination {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "⛓ Cross-chain project enabled",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!(
                "Destination chain ID: {destination}. Talent from multiple Avalanche networks can participate."
            ),
            Style::default().fg(Color::LightCyan),
        )));
        if let Some(current) = ctx.current_chain_id {
            lines.push(Line::from(Span::styled(
                format!(
                    "Source: {}  →  Destination: {}",
                    ctx.chain_label(current),
                    ctx.chain_label(destination)
                ),
                dim,
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Before you post", heading)));
    for item in CHECKLIST {
        lines.push(Line::from(vec![
            Span::styled("  • ", Style::default().fg(Color::Cyan)),
            Span::raw(item),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(DISCLAIMER, dim)));
    lines
}
