//! Resume Compare library
//!
//! Submits one resume to several extraction backends and compares what each
//! of them extracted.

pub mod backend_id;
pub mod client;
pub mod config;
pub mod envelope;
pub mod export;
pub mod labels;
pub mod logging;
pub mod record;
pub mod selection;
pub mod theme;
pub mod tui;
pub mod view;

pub use backend_id::{BackendId, BackendIdError};
pub use client::{Document, HttpParseService, ParseService, TransportError};
pub use config::Config;
pub use envelope::{FailureEntry, ResponseEnvelope, ResultAggregator, ResultEntry};
pub use labels::LabelResolver;
pub use record::Record;
pub use selection::{SelectionError, SelectionSet};
pub use view::{ComparisonState, Tab, TabPolicy};
