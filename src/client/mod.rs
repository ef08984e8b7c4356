//! Submission to the remote parsing service.
//!
//! This module provides:
//! - `Document` - a validated document ready for upload
//! - `ParseService` - the seam between the view and the transport
//! - `HttpParseService` - the blocking HTTP implementation
//!
//! A submission either yields a whole envelope or a single `TransportError`;
//! there are no partial results and no retries.

mod document;
mod http;

pub use document::{Document, DocumentError, ACCEPTED_EXTENSIONS};
pub use http::{extract_detail, HttpParseService, DEFAULT_REJECTION_DETAIL, PARSE_ENDPOINT};

use thiserror::Error;
use tracing::{debug, info};

use crate::envelope::{RawEnvelope, ResponseEnvelope, ResultAggregator};
use crate::selection::SelectionSet;

/// Failure of a whole submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Request to parsing service failed: {0}")]
    Request(String),

    /// Non-success status; `detail` is the service's own explanation.
    #[error("{detail}")]
    Rejected { status: u16, detail: String },

    #[error("Could not decode parsing service response: {0}")]
    Decode(String),

    #[error("Submission ended before a response arrived")]
    Interrupted,
}

/// Something that can run one parse request.
pub trait ParseService: Send + Sync {
    /// Send a document to the selected backends and return the raw body.
    fn submit(
        &self,
        document: &Document,
        selection: &SelectionSet,
    ) -> Result<RawEnvelope, TransportError>;
}

/// Submit, normalize, and account for every selected backend.
pub fn submit_and_aggregate(
    service: &dyn ParseService,
    document: &Document,
    selection: &SelectionSet,
) -> Result<ResponseEnvelope, TransportError> {
    info!(
        file = document.file_name(),
        models = %selection.to_query_value(),
        "submitting document"
    );
    let raw = service.submit(document, selection)?;
    let (envelope, report) = ResultAggregator::new().aggregate(raw);
    debug!(?report, "submission aggregated");
    Ok(envelope.reconcile(selection))
}
