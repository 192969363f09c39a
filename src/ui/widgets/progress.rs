//! Step progress indicator

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use crate::domain::project::Step;

/// A single-line row of numbered step markers joined by connectors
pub struct StepProgress {
    current: Step,
    reached_style: Style,
    pending_style: Style,
}

impl StepProgress {
    pub fn new(current: Step) -> Self {
        Self {
            current,
            reached_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            pending_style: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Completed steps show a check mark, the rest their number
pub fn marker_label(step: Step, current: Step) -> String {
    if step < current {
        " ✓ ".to_string()
    } else {
        format!(" {} ", step.number())
    }
}

impl Widget for StepProgress {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let segment = area.width / Step::ALL.len() as u16;
        let connector_fg = self.reached_style.bg.unwrap_or(Color::Cyan);

        for (i, step) in Step::ALL.iter().copied().enumerate() {
            let x = area.x + segment * i as u16;
            let marker = marker_label(step, self.current);
            let style = if step <= self.current {
                self.reached_style
            } else {
                self.pending_style
            };
            buf.set_string(x, area.y, &marker, style);

            // Connector fills the rest of the segment, leaving one blank column
            let start = x + marker.chars().count() as u16 + 1;
            let len = segment.saturating_sub(marker.chars().count() as u16 + 2);
            if step.is_last() || len == 0 {
                continue;
            }
            let connector_style = if step < self.current {
                Style::default().fg(connector_fg)
            } else {
                self.pending_style
            };
            buf.set_string(start, area.y, "─".repeat(len as usize), connector_style);
        }
    }
}
