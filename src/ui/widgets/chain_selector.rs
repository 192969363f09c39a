//! Destination chain picker shown as a popup over the budget step

use alloy_primitives::ChainId;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::block::{Position, Title};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState};
use ratatui::Frame;

use crate::core::{Action, Context, Module};
use crate::domain::chain::ChainInfo;

/// Inputs the selector is opened with
#[derive(Debug, Clone)]
pub struct ChainSelectorProps {
    pub chains: Vec<ChainInfo>,
    pub selected: Option<ChainId>,
    pub current: Option<ChainId>,
    pub exclude_current: bool,
    pub label: &'static str,
}

#[derive(Debug, Clone)]
pub struct ChainSelector {
    props: ChainSelectorProps,
    highlighted: usize,
}

impl ChainSelector {
    pub fn new(props: ChainSelectorProps) -> Self {
        let mut selector = Self {
            props,
            highlighted: 0,
        };
        let preselected = selector
            .props
            .selected
            .and_then(|selected| selector.options().iter().position(|c| c.id == selected));
        selector.highlighted = preselected.unwrap_or(0);
        selector
    }

    /// Chains the user may pick from
    pub fn options(&self) -> Vec<&ChainInfo> {
        self.props
            .chains
            .iter()
            .filter(|chain| {
                !(self.props.exclude_current && Some(chain.id) == self.props.current)
            })
            .collect()
    }

    pub fn highlighted(&self) -> Option<&ChainInfo> {
        self.options().get(self.highlighted).copied()
    }

    fn move_highlight(&mut self, down: bool) {
        let len = self.options().len();
        if len == 0 {
            return;
        }
        self.highlighted = if down {
            (self.highlighted + 1).min(len - 1)
        } else {
            self.highlighted.saturating_sub(1)
        };
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        f.render_widget(Clear, area);

        let options = self.options();
        let items: Vec<ListItem> = if options.is_empty() {
            vec![ListItem::new(Line::from(Span::styled(
                "No other chains available",
                Style::default().fg(Color::DarkGray),
            )))]
        } else {
            options
                .iter()
                .map(|chain| {
                    let marker = if Some(chain.id) == self.props.selected {
                        "● "
                    } else {
                        "  "
                    };
                    ListItem::new(Line::from(vec![
                        Span::styled(marker, Style::default().fg(Color::LightCyan)),
                        Span::raw(chain.name.clone()),
                        Span::styled(
                            format!("  {}", chain.id),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]))
                })
                .collect()
        };

        let title = match self.props.current {
            Some(current) if self.props.exclude_current => {
                format!("{} (current {current} hidden)", self.props.label)
            }
            _ => self.props.label.to_string(),
        };

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .title(Title::from("Enter=select  Esc=cancel").position(Position::Bottom))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(">> ");

        let mut state = ListState::default();
        if !options.is_empty() {
            state.select(Some(self.highlighted));
        }
        f.render_stateful_widget(list, area, &mut state);
    }
}

impl Module for ChainSelector {
    fn handle_key(&mut self, key: KeyEvent, _ctx: &Context) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_highlight(false);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_highlight(true);
                Action::None
            }
            KeyCode::Enter => match self.highlighted() {
                Some(chain) => Action::SelectChain(chain.id),
                None => Action::CloseOverlay,
            },
            KeyCode::Esc => Action::CloseOverlay,
            _ => Action::None,
        }
    }

    fn captures_input(&self) -> bool {
        true
    }
}
