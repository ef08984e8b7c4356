//! Modal overlays for the comparison screen
//!
//! Provides `center_modal()` plus the help and model picker overlays.

use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::selection::{SelectionSet, MODEL_OPTIONS};
use crate::theme::current_theme;

/// Calculate a centered modal area within the given parent area.
///
/// Constrains the modal to the given `width` and `height`, centered
/// both horizontally and vertically. Clamps to fit within the parent
/// area with at least 2 cells of margin on each side.
pub fn center_modal(area: Rect, width: u16, height: u16) -> Rect {
    let modal_width = width.min(area.width.saturating_sub(4));
    let modal_height = height.min(area.height.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(modal_width)) / 2;
    let y = area.y + (area.height.saturating_sub(modal_height)) / 2;
    Rect::new(x, y, modal_width, modal_height)
}

const HELP_KEYS: [(&str, &str); 10] = [
    ("←/→ Tab", "Previous/next tab"),
    ("1-5", "Jump to tab"),
    ("↑/↓", "Scroll panels"),
    ("PgUp/PgDn", "Scroll a page"),
    ("m", "Choose models"),
    ("r", "Resubmit document"),
    ("e", "Export JSON and CSV"),
    ("?", "This help"),
    ("q/Esc", "Quit"),
    ("Ctrl-C", "Quit immediately"),
];

/// Render the keyboard shortcut overlay.
pub fn render_help_modal(frame: &mut Frame, area: Rect) {
    let theme = current_theme();
    let modal_area = center_modal(area, 48, HELP_KEYS.len() as u16 + 6);

    frame.render_widget(Clear, modal_area);

    let mut lines = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            theme.accent_style().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (key, action) in HELP_KEYS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<12}", key), theme.accent_style()),
            Span::styled(action, theme.text_style()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        theme.text_secondary_style(),
    )));

    let help = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.accent_style())
                .title(" Help "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help, modal_area);
}

/// Render the model picker with a checkbox per catalog entry.
pub fn render_model_picker_modal(
    frame: &mut Frame,
    area: Rect,
    selection: &SelectionSet,
    cursor: usize,
    max_selected: usize,
) {
    let theme = current_theme();
    let modal_area = center_modal(area, 56, MODEL_OPTIONS.len() as u16 + 6);

    frame.render_widget(Clear, modal_area);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Select up to {} models", max_selected),
            theme.accent_style().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (idx, option) in MODEL_OPTIONS.iter().enumerate() {
        let checked = option
            .backend_id()
            .map(|id| selection.contains(&id))
            .unwrap_or(false);
        let mark = if checked { "[x]" } else { "[ ]" };
        let badge = option.badge.map(|b| format!("  {}", b)).unwrap_or_default();
        let text = format!(" {} {}{}", mark, option.label, badge);
        let style = if idx == cursor {
            theme.highlight_style()
        } else if checked {
            theme.accent_style()
        } else {
            theme.text_style()
        };
        lines.push(Line::from(Span::styled(text, style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("{} selected", selection.len()),
        theme.text_secondary_style(),
    )));

    let picker = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.accent_style())
            .title(" Models "),
    );

    frame.render_widget(picker, modal_area);
}
