//! Terminal comparison screen built on ratatui/crossterm.

pub mod app;
pub mod compare_app;
pub mod event;

pub use compare_app::{CompareApp, CompareScreen, Mode, Submission};
