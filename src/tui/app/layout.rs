//! Layout of the comparison screen.

use ratatui::layout::{Constraint, Layout, Rect};

/// Areas of the comparison screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareLayout {
    pub header: Rect,
    pub failures: Rect,
    pub tabs: Rect,
    pub content: Rect,
    pub status: Rect,
    pub footer: Rect,
}

/// Split the screen: header (2 rows), failure summary (`failure_rows`,
/// possibly 0), tab bar (1), content (rest), status line (1), footer (1).
pub fn build_compare_layout(area: Rect, failure_rows: u16) -> CompareLayout {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(failure_rows),
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(area);
    CompareLayout {
        header: chunks[0],
        failures: chunks[1],
        tabs: chunks[2],
        content: chunks[3],
        status: chunks[4],
        footer: chunks[5],
    }
}

/// One equal-width column per panel.
pub fn panel_columns(area: Rect, panels: usize) -> Vec<Rect> {
    if panels == 0 {
        return Vec::new();
    }
    let count = panels as u32;
    Layout::horizontal((0..panels).map(|_| Constraint::Ratio(1, count)))
        .split(area)
        .to_vec()
}
