use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    pub header: Rect,
    pub progress: Rect,
    pub content: Rect,
    pub controls: Rect,
    pub status_line: Rect,
    pub hint_line: Rect,
}

/// Page layout for the wizard. The home page reuses header, content and the
/// footer lines.
pub fn areas(size: Rect) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(3),
            Constraint::Length(2),
        ])
        .split(size);

    let footer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(vertical[4]);

    UiAreas {
        size,
        header: vertical[0],
        progress: vertical[1],
        content: vertical[2],
        controls: vertical[3],
        status_line: footer_chunks[0],
        hint_line: footer_chunks[1],
    }
}

/// Rectangle of fixed size centered in `r`, shrunk to fit
pub fn centered_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
