//! Comparison view.
//!
//! This module provides:
//! - `Tab` - the record section shown across all panels
//! - `ComparisonState` - active tab and submission lifecycle
//! - `format` - metric badges and field formatting
//! - `panel` - styled lines for headers, tab bodies and the failure summary
//!
//! Everything here is headless. The terminal UI and `--print` output both
//! consume the same lines, so rendering rules are tested once.

pub mod format;
pub mod panel;
mod state;
mod tab;

pub use state::{ComparisonState, TabPolicy};
pub use tab::{Tab, TabParseError};
