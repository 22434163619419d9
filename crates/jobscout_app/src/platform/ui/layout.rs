use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct ScreenAreas {
    pub title: Rect,
    pub form: Rect,
    pub pager_top: Rect,
    pub results: Rect,
    pub pager_bottom: Rect,
    pub hints: Rect,
}

pub fn screen_areas(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    ScreenAreas {
        title: chunks[0],
        form: chunks[1],
        pager_top: chunks[2],
        results: chunks[3],
        pager_bottom: chunks[4],
        hints: chunks[5],
    }
}

/// Description and location inputs side by side, toggle on the right.
pub fn form_columns(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(40),
            Constraint::Percentage(20),
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}
