//! Rendering of the comparison screen on a test backend

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use resume_compare::tui::{CompareScreen, Mode};
use resume_compare::{ComparisonState, LabelResolver, SelectionSet, Tab, TabPolicy};

use crate::helpers::sample_envelope;

fn screen() -> CompareScreen {
    CompareScreen::new(
        ComparisonState::with_envelope(sample_envelope(), TabPolicy::ResetOnSubmit),
        LabelResolver::builtin(),
        SelectionSet::defaults(),
    )
}

fn render(screen: &CompareScreen, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| screen.render(frame)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut output = String::new();
    for y in 0..height {
        for x in 0..width {
            output.push_str(buffer[(x, y)].symbol());
        }
        output.push('\n');
    }
    output
}

fn press(screen: &mut CompareScreen, code: KeyCode) {
    screen.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn panels_render_side_by_side() {
    let text = render(&screen(), 120, 32);
    let panel_row = text
        .lines()
        .find(|line| line.contains("GPT-4o  OPENAI"))
        .expect("panel headers on one row");
    assert!(panel_row.contains("GPT-OSS-120B  HUGGINGFACE (groq)"));

    assert!(text.contains("Comparing 2 models (providers: openai, huggingface/groq)"));
    assert!(text.contains("Unknown — worker crashed"));
    assert!(text.contains("1 Contact"));
    assert!(text.contains("5 Other"));
    assert!(text.contains("Name: A. Lovelace, Countess"));
}

#[test]
fn tab_switch_changes_panel_bodies() {
    let mut screen = screen();
    press(&mut screen, KeyCode::Char('4'));
    assert_eq!(screen.state().active_tab(), Tab::Skills);

    let text = render(&screen, 120, 32);
    assert!(text.contains("• Python [Programming]"));
    assert!(text.contains("No language data found"));
    assert!(!text.contains("Name: Ada Lovelace"));
}

#[test]
fn picker_overlay_lists_catalog() {
    let mut screen = screen();
    press(&mut screen, KeyCode::Char('m'));
    assert_eq!(screen.mode(), Mode::ModelPicker);

    let text = render(&screen, 120, 32);
    assert!(text.contains("[x] GPT-4o (OpenAI)"));
    assert!(text.contains("[ ] Gemini 3 Pro Preview"));
    assert!(text.contains("2 selected"));
}

#[test]
fn narrow_terminal_does_not_panic() {
    let text = render(&screen(), 20, 8);
    assert_eq!(text.lines().count(), 8);
}

#[test]
fn empty_state_prompts_for_submission() {
    let screen = CompareScreen::new(
        ComparisonState::new(TabPolicy::ResetOnSubmit),
        LabelResolver::builtin(),
        SelectionSet::defaults(),
    );
    let text = render(&screen, 80, 20);
    assert!(text.contains("No results yet. Press r to submit."));
    assert!(text.contains("2 model(s) selected"));
}
