use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub mod layout;
pub mod steps;
pub mod widgets;

use crate::app::App;
use crate::core::{NotifyLevel, Route, Router};
use crate::modules::post_project::{Field, PostProject};
use layout::{centered_fixed, centered_rect};
use widgets::StepProgress;

pub const SUBMIT_LABEL: &str = "Post Project";
pub const SUBMITTING_LABEL: &str = "Posting...";

/// State of the three navigation buttons under the step view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavControls {
    pub back_enabled: bool,
    /// Next is shown on steps 1-3, Submit on step 4
    pub next_visible: bool,
    pub submit_visible: bool,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
}

pub fn nav_controls(wizard: &PostProject) -> NavControls {
    let state = wizard.state();
    let last = state.step.is_last();
    NavControls {
        back_enabled: !state.step.is_first(),
        next_visible: !last,
        submit_visible: last,
        submit_enabled: state.can_submit(),
        submit_label: if state.is_loading {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        },
    }
}

pub fn draw(f: &mut Frame, app: &App) {
    let areas = layout::areas(f.size());

    draw_header(f, areas.header, app);
    match (app.route(), app.wizard()) {
        (Route::PostProject, Some(wizard)) => {
            f.render_widget(
                StepProgress::new(wizard.step()),
                Rect {
                    y: areas.progress.y + areas.progress.height / 2,
                    height: areas.progress.height.min(1),
                    ..areas.progress
                },
            );
            draw_step(f, areas.content, app, wizard);
            draw_controls(f, areas.controls, wizard);
            if let Some(selector) = wizard.selector() {
                selector.render(f, centered_fixed(52, 10, areas.size));
            }
        }
        _ => draw_home(
            f,
            Rect {
                height: areas.progress.height + areas.content.height + areas.controls.height,
                ..areas.progress
            },
        ),
    }
    draw_status_line(f, areas.status_line, app);
    draw_hint_line(f, areas.hint_line, app);

    if app.help_open {
        draw_help_popup(f, areas.size, app);
    }
    if let Some(notice) = app.notice() {
        draw_notice(f, areas.size, &notice.text, notice.level);
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let title = Line::from(vec![
        Span::styled(
            "Post a Project",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            "Find the perfect freelancer for your project",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(
        Paragraph::new(title).block(Block::default().borders(Borders::ALL)),
        chunks[0],
    );

    let chain = Line::from(vec![
        Span::styled("Chain ", Style::default().fg(Color::DarkGray)),
        Span::raw(app.ctx.current_chain_label()),
    ]);
    f.render_widget(
        Paragraph::new(chain)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Right),
        chunks[1],
    );
}

fn draw_home(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Hire freelancers across Avalanche chains",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("p", Style::default().fg(Color::Cyan)),
            Span::raw(" to post a project"),
        ]),
    ];
    f.render_widget(
        Paragraph::new(Text::from(lines))
            .block(Block::default().borders(Borders::ALL).title("Home"))
            .alignment(Alignment::Center),
        area,
    );
}

fn draw_step(f: &mut Frame, area: Rect, app: &App, wizard: &PostProject) {
    let step = wizard.step();
    let title = format!(
        "Step {} of {}: {}",
        step.number(),
        crate::domain::project::Step::ALL.len(),
        step.title()
    );
    let paragraph = Paragraph::new(Text::from(steps::step_lines(wizard, &app.ctx)))
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false })
        .scroll((wizard.scroll(), 0));
    f.render_widget(paragraph, area);
}

fn button(label: &str, enabled: bool, primary: bool) -> Paragraph<'_> {
    let style = match (enabled, primary) {
        (false, _) => Style::default().fg(Color::DarkGray),
        (true, true) => Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(Color::White),
    };
    Paragraph::new(Line::from(Span::styled(label, style)))
        .block(Block::default().borders(Borders::ALL).border_style(style))
        .alignment(Alignment::Center)
}

fn draw_controls(f: &mut Frame, area: Rect, wizard: &PostProject) {
    let controls = nav_controls(wizard);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Min(0),
            Constraint::Length(18),
        ])
        .split(area);

    f.render_widget(button("Back", controls.back_enabled, false), chunks[0]);
    if controls.next_visible {
        f.render_widget(button("Next", true, true), chunks[2]);
    } else if controls.submit_visible {
        f.render_widget(
            button(controls.submit_label, controls.submit_enabled, true),
            chunks[2],
        );
    }
}

fn level_color(level: NotifyLevel) -> Color {
    match level {
        NotifyLevel::Info => Color::LightGreen,
        NotifyLevel::Warn => Color::LightYellow,
        NotifyLevel::Error => Color::LightRed,
    }
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let line = match app.status_text() {
        Some((text, level)) => Line::from(vec![
            Span::styled("msg: ", Style::default().fg(Color::DarkGray)),
            Span::styled(text.to_string(), Style::default().fg(level_color(level))),
        ]),
        None => Line::from(vec![
            Span::styled("Page ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{}  ", app.current_path())),
            Span::styled("Source ", Style::default().fg(Color::DarkGray)),
            Span::raw(if app.ctx.network_source.is_empty() {
                "--".to_string()
            } else {
                app.ctx.network_source.clone()
            }),
        ]),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn draw_hint_line(f: &mut Frame, area: Rect, app: &App) {
    let hint = match app.wizard() {
        Some(wizard) if wizard.selector().is_some() => "↑/↓ choose  Enter select  Esc cancel",
        Some(wizard)
            if wizard.is_editing() && wizard.focused_field() == Some(Field::Description) =>
        {
            "type to edit  Enter new line  Tab done  Esc stop editing"
        }
        Some(wizard) if wizard.is_editing() => "type to edit  Enter/Tab done  Esc stop editing",
        Some(wizard) if wizard.step().is_last() => {
            "Enter/s post  [ back  PgUp/PgDn scroll  Esc leave  ? help  q quit"
        }
        Some(_) => "Tab move  Enter edit/toggle  ←/→ change  ] next  [ back  Esc leave  ? help",
        None => "p post a project  r refresh chain  ? help  q quit",
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray),
        ))),
        area,
    );
}

fn draw_notice(f: &mut Frame, area: Rect, text: &str, level: NotifyLevel) {
    let popup_area = centered_fixed(60, 7, area);
    f.render_widget(Clear, popup_area);
    let color = level_color(level);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(text.to_string(), Style::default().fg(color))),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title("Notice")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, popup_area);
}

fn draw_help_popup(f: &mut Frame, area: Rect, app: &App) {
    let popup_area = centered_rect(70, 70, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Home"),
        Line::from("  p / Enter  Post a project"),
        Line::from(""),
        Line::from("Wizard"),
        Line::from("  ] / n      Next step"),
        Line::from("  [ / b      Previous step"),
        Line::from("  Tab / j/k  Move between fields"),
        Line::from("  Enter      Edit text / toggle / open picker"),
        Line::from("  ← / →      Change a choice"),
        Line::from("  PgUp/PgDn  Scroll the step"),
        Line::from("  Enter / s  Post (review step)"),
        Line::from("  Esc        Back to home"),
        Line::from(""),
        Line::from("General"),
        Line::from("  r          Detect the chain again"),
        Line::from("  ?          Toggle help"),
        Line::from("  q          Quit"),
        Line::from(""),
        Line::from(format!("Current chain: {}", app.ctx.current_chain_label())),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, popup_area);
}
