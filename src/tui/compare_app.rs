//! Interactive comparison screen
//!
//! `CompareScreen` holds all screen state and renders into any ratatui
//! frame, so it runs headless under `TestBackend`. `CompareApp` binds it to
//! the real terminal and the event thread.
//!
//! Resubmissions run on a worker thread. The outcome comes back over an
//! `mpsc` channel that is polled on every tick; the loading flag is cleared
//! whatever the outcome, including a worker that vanished.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};
use tracing::{info, warn};

use super::app::layout::{build_compare_layout, panel_columns};
use super::app::modals::{render_help_modal, render_model_picker_modal};
use super::app::status_footer::{render_footer, render_status_line};
use super::app::App;
use super::event::Event;
use crate::client::{submit_and_aggregate, Document, ParseService, TransportError};
use crate::envelope::ResponseEnvelope;
use crate::export::{write_artifacts, ExportFormat};
use crate::labels::LabelResolver;
use crate::selection::{SelectionSet, ToggleOutcome, DEFAULT_MAX_SELECTED, MODEL_OPTIONS};
use crate::theme::current_theme;
use crate::view::panel::{entry_panel, failure_summary, subtitle, TITLE};
use crate::view::{ComparisonState, Tab};

const TICK_RATE: Duration = Duration::from_millis(150);
const PAGE_SCROLL: u16 = 10;

type Outcome = Result<ResponseEnvelope, TransportError>;

/// Screen modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Help,
    ModelPicker,
}

/// Document and transport needed to resubmit.
#[derive(Clone)]
pub struct Submission {
    pub document: Document,
    pub service: Arc<dyn ParseService>,
}

/// Headless state of the comparison screen.
pub struct CompareScreen {
    state: ComparisonState,
    resolver: LabelResolver,
    selection: SelectionSet,
    max_selected: usize,
    submission: Option<Submission>,
    pending: Option<Receiver<Outcome>>,
    export_dir: PathBuf,
    mode: Mode,
    scroll: u16,
    picker_cursor: usize,
    status_message: Option<String>,
    should_quit: bool,
}

impl CompareScreen {
    pub fn new(state: ComparisonState, resolver: LabelResolver, selection: SelectionSet) -> Self {
        Self {
            state,
            resolver,
            selection,
            max_selected: DEFAULT_MAX_SELECTED,
            submission: None,
            pending: None,
            export_dir: PathBuf::from("."),
            mode: Mode::Normal,
            scroll: 0,
            picker_cursor: 0,
            status_message: None,
            should_quit: false,
        }
    }

    /// Attach a document so `r` can resubmit it.
    pub fn with_submission(mut self, submission: Submission) -> Self {
        self.submission = Some(submission);
        self
    }

    pub fn with_export_dir(mut self, dir: PathBuf) -> Self {
        self.export_dir = dir;
        self
    }

    pub fn with_max_selected(mut self, max: usize) -> Self {
        self.max_selected = max.max(1);
        self
    }

    pub fn state(&self) -> &ComparisonState {
        &self.state
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.mode {
            Mode::Normal => self.handle_normal_key(key),
            Mode::Help => self.mode = Mode::Normal,
            Mode::ModelPicker => self.handle_picker_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Right | KeyCode::Tab => self.select_tab(self.state.active_tab().next()),
            KeyCode::Left | KeyCode::BackTab => self.select_tab(self.state.active_tab().prev()),
            KeyCode::Char(c @ '1'..='5') => {
                if let Some(tab) = c.to_digit(10).and_then(|n| Tab::from_number(n as usize)) {
                    self.select_tab(tab);
                }
            }
            KeyCode::Down => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(PAGE_SCROLL),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(PAGE_SCROLL),
            KeyCode::Char('m') => {
                self.status_message = None;
                self.mode = Mode::ModelPicker;
            }
            KeyCode::Char('r') => self.resubmit(),
            KeyCode::Char('e') => self.export(),
            KeyCode::Char('?') => self.mode = Mode::Help,
            _ => {}
        }
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.picker_cursor = self.picker_cursor.saturating_sub(1),
            KeyCode::Down => {
                self.picker_cursor = (self.picker_cursor + 1).min(MODEL_OPTIONS.len() - 1);
            }
            KeyCode::Char(' ') => self.toggle_model(self.picker_cursor),
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('m') => self.mode = Mode::Normal,
            _ => {}
        }
    }

    fn select_tab(&mut self, tab: Tab) {
        self.state.select_tab(tab);
        self.scroll = 0;
    }

    /// Toggle a catalog entry, honouring the picker's selection limit.
    fn toggle_model(&mut self, index: usize) {
        let Some(option) = MODEL_OPTIONS.get(index) else {
            return;
        };
        let Ok(id) = option.backend_id() else {
            return;
        };
        if !self.selection.contains(&id) && self.selection.len() >= self.max_selected {
            self.status_message = Some(format!(
                "You can select up to {} models",
                self.max_selected
            ));
            return;
        }
        self.status_message = match self.selection.toggle(&id) {
            ToggleOutcome::KeptLast => Some("At least one model must stay selected".to_string()),
            ToggleOutcome::Added | ToggleOutcome::Removed => None,
        };
    }

    /// Start a background resubmission with the current selection.
    pub fn resubmit(&mut self) {
        let Some(submission) = self.submission.clone() else {
            self.status_message =
                Some("No document attached; open one with `rcmp parse`".to_string());
            return;
        };
        if !self.state.begin_submission() {
            self.status_message = Some("A submission is already in progress".to_string());
            return;
        }

        info!(models = %self.selection.to_query_value(), "resubmitting document");
        let selection = self.selection.clone();
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let outcome = submit_and_aggregate(
                submission.service.as_ref(),
                &submission.document,
                &selection,
            );
            let _ = tx.send(outcome);
        });
        self.pending = Some(rx);
        self.scroll = 0;
        self.status_message = None;
    }

    /// Collect a finished submission, if any.
    pub fn poll_submission(&mut self) {
        let Some(rx) = &self.pending else {
            return;
        };
        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                warn!("submission worker exited without a result");
                Err(TransportError::Interrupted)
            }
        };
        self.pending = None;
        self.state.finish_submission(outcome);
    }

    /// Write JSON and CSV artifacts for the installed envelope.
    fn export(&mut self) {
        let Some(envelope) = self.state.envelope() else {
            self.status_message = Some("Nothing to export yet".to_string());
            return;
        };
        let message = match write_artifacts(
            envelope,
            &self.resolver,
            &self.export_dir,
            ExportFormat::Both,
        ) {
            Ok(summary) => {
                let mut written: Vec<String> = summary
                    .json
                    .iter()
                    .chain(summary.csv.iter())
                    .map(|p| p.display().to_string())
                    .collect();
                if summary.csv_skipped {
                    written.push("CSV skipped: no successful results".to_string());
                }
                format!("Exported {}", written.join(", "))
            }
            Err(e) => {
                warn!(error = %e, "export failed");
                format!("Export failed: {}", e)
            }
        };
        self.status_message = Some(message);
    }

    pub fn render(&self, frame: &mut Frame) {
        let theme = current_theme();
        let area = frame.area();

        let failures = self
            .state
            .envelope()
            .map(|e| failure_summary(e.failures(), &theme))
            .unwrap_or_default();
        let layout = build_compare_layout(area, failures.len() as u16);

        let header_sub = match self.state.envelope() {
            Some(envelope) => subtitle(envelope),
            None => format!("{} model(s) selected", self.selection.len()),
        };
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(TITLE, theme.accent_bold_style())),
                Line::from(Span::styled(header_sub, theme.text_secondary_style())),
            ]),
            layout.header,
        );

        if !failures.is_empty() {
            frame.render_widget(Paragraph::new(failures), layout.failures);
        }

        let titles: Vec<Line> = Tab::ALL
            .iter()
            .enumerate()
            .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.title())))
            .collect();
        frame.render_widget(
            Tabs::new(titles)
                .select(self.state.active_tab().index())
                .style(theme.text_secondary_style())
                .highlight_style(theme.accent_bold_style().add_modifier(Modifier::UNDERLINED)),
            layout.tabs,
        );

        self.render_content(frame, layout.content);

        render_status_line(frame, layout.status, &self.status_text());
        render_footer(frame, layout.footer, self.footer_text());

        match self.mode {
            Mode::Help => render_help_modal(frame, area),
            Mode::ModelPicker => render_model_picker_modal(
                frame,
                area,
                &self.selection,
                self.picker_cursor,
                self.max_selected,
            ),
            Mode::Normal => {}
        }
    }

    fn render_content(&self, frame: &mut Frame, area: Rect) {
        let theme = current_theme();

        let notice = |text: String, style| {
            Paragraph::new(Line::from(Span::styled(text, style)))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
        };

        if self.state.is_loading() {
            frame.render_widget(
                notice(
                    format!("Parsing with {} model(s)...", self.selection.len()),
                    theme.warning_style(),
                ),
                area,
            );
            return;
        }
        if let Some(error) = self.state.error() {
            frame.render_widget(notice(format!("Error: {}", error), theme.error_style()), area);
            return;
        }
        let Some(envelope) = self.state.envelope() else {
            frame.render_widget(
                notice("No results yet. Press r to submit.".to_string(), theme.text_secondary_style()),
                area,
            );
            return;
        };
        if !envelope.has_entries() {
            frame.render_widget(
                notice("No model produced a result".to_string(), theme.text_secondary_style()),
                area,
            );
            return;
        }

        let tab = self.state.active_tab();
        let columns = panel_columns(area, envelope.entries().len());
        for (entry, column) in envelope.entries().iter().zip(columns) {
            let panel = Paragraph::new(entry_panel(entry, tab, &self.resolver, &theme))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(theme.text_secondary_style()),
                )
                .wrap(Wrap { trim: false })
                .scroll((self.scroll, 0));
            frame.render_widget(panel, column);
        }
    }

    fn status_text(&self) -> String {
        if let Some(message) = &self.status_message {
            return message.clone();
        }
        let loading = if self.state.is_loading() { " | parsing..." } else { "" };
        format!(
            "Models: {}{}",
            self.selection.to_query_value(),
            loading
        )
    }

    fn footer_text(&self) -> &'static str {
        match self.mode {
            Mode::Normal => {
                "←/→: tab | ↑↓: scroll | m: models | r: resubmit | e: export | ?: help | q: quit"
            }
            Mode::Help => "Press any key to close help",
            Mode::ModelPicker => "↑↓: move | Space: toggle | Enter/Esc: close",
        }
    }
}

/// Comparison screen bound to the terminal.
pub struct CompareApp {
    app: App,
    screen: CompareScreen,
}

impl CompareApp {
    pub fn new(screen: CompareScreen) -> Result<Self> {
        Ok(Self {
            app: App::new(TICK_RATE)?,
            screen,
        })
    }

    /// Run until the user quits.
    #[cfg(not(tarpaulin_include))]
    pub fn run(&mut self) -> Result<()> {
        loop {
            let screen = &self.screen;
            self.app.draw(|frame| screen.render(frame))?;

            match self.app.next_event()? {
                Event::Key(key) => self.screen.handle_key(key),
                Event::Tick => self.screen.poll_submission(),
                Event::Resize(_, _) => {}
                Event::Quit => break,
            }

            if self.screen.should_quit() {
                break;
            }
        }
        Ok(())
    }
}
