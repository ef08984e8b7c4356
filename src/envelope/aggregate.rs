//! Partitioning of raw responses into entries and failures.
//!
//! # Rules
//!
//! 1. Results are walked in arrival order, then errors in arrival order
//! 2. A result without a readable record becomes a failure, never an empty success
//! 3. A result that names no backend becomes an unattributed failure
//! 4. The first report for an identifier wins; later ones are dropped
//! 5. Unattributed errors are always kept (they cannot collide)

use std::collections::HashSet;

use tracing::{debug, warn};

use super::raw::{RawEnvelope, RawFailure, RawResult};
use super::{FailureEntry, ResponseEnvelope, ResultEntry};
use crate::backend_id::BackendId;
use crate::record::Record;

/// Message for a backend that answered without a record.
pub const MISSING_RECORD_MESSAGE: &str = "backend returned no resume data";

/// Message for a result that could not be attributed to a backend.
pub const UNATTRIBUTED_MESSAGE: &str = "result could not be attributed to a backend";

/// Message for a selected backend absent from the response.
pub const NO_RESPONSE_MESSAGE: &str = "no response from backend";

/// Prefix for a backend whose record does not have the expected shape.
pub const UNREADABLE_RECORD_PREFIX: &str = "backend returned an unreadable resume";

/// Fallback when a backend error carries no message.
const UNKNOWN_ERROR_MESSAGE: &str = "unknown error";

/// Counters describing one aggregation run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AggregationReport {
    /// Results received
    pub results_received: usize,
    /// Errors received
    pub errors_received: usize,
    /// Results converted to failures because the record was missing or unreadable
    pub missing_records: usize,
    /// Results or errors without a usable identifier
    pub unattributed: usize,
    /// Reports dropped because the identifier was already seen
    pub duplicates_dropped: usize,
}

/// Normalizes raw envelopes into `ResponseEnvelope`s.
#[derive(Debug, Default)]
pub struct ResultAggregator {
    _private: (),
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Partition a raw envelope, preserving arrival order within each side.
    pub fn aggregate(&self, raw: RawEnvelope) -> (ResponseEnvelope, AggregationReport) {
        let mut report = AggregationReport {
            results_received: raw.results.len(),
            errors_received: raw.errors.len(),
            ..AggregationReport::default()
        };
        let mut seen: HashSet<BackendId> = HashSet::new();
        let mut entries = Vec::new();
        let mut failures = Vec::new();

        for result in raw.results {
            match self.classify_result(result, &seen) {
                Classified::Entry(entry) => {
                    seen.insert(entry.id.clone());
                    entries.push(entry);
                }
                Classified::Failure(failure, reason) => {
                    match reason {
                        FailureReason::MissingRecord => report.missing_records += 1,
                        FailureReason::Unattributed => report.unattributed += 1,
                        FailureReason::Reported => {}
                    }
                    if let Some(id) = &failure.id {
                        seen.insert(id.clone());
                    }
                    failures.push(failure);
                }
                Classified::Duplicate(id) => {
                    warn!(backend = %id, "dropping duplicate result");
                    report.duplicates_dropped += 1;
                }
            }
        }

        for error in raw.errors {
            match self.classify_error(error, &seen) {
                Classified::Failure(failure, reason) => {
                    if reason == FailureReason::Unattributed {
                        report.unattributed += 1;
                    }
                    if let Some(id) = &failure.id {
                        seen.insert(id.clone());
                    }
                    failures.push(failure);
                }
                Classified::Duplicate(id) => {
                    warn!(backend = %id, "dropping error for backend already reported");
                    report.duplicates_dropped += 1;
                }
                Classified::Entry(_) => {}
            }
        }

        debug!(
            entries = entries.len(),
            failures = failures.len(),
            duplicates = report.duplicates_dropped,
            "aggregated response envelope"
        );

        (ResponseEnvelope::from_parts(entries, failures), report)
    }

    fn classify_result(&self, result: RawResult, seen: &HashSet<BackendId>) -> Classified {
        let Some(id) = result.backend_id() else {
            return Classified::Failure(
                FailureEntry::new(None, UNATTRIBUTED_MESSAGE),
                FailureReason::Unattributed,
            );
        };
        if seen.contains(&id) {
            return Classified::Duplicate(id);
        }

        let record = match result.resume {
            None | Some(serde_json::Value::Null) => {
                return Classified::Failure(
                    FailureEntry::new(Some(id), MISSING_RECORD_MESSAGE),
                    FailureReason::MissingRecord,
                );
            }
            Some(value) => match serde_json::from_value::<Record>(value) {
                Ok(record) => record,
                Err(e) => {
                    warn!(backend = %id, error = %e, "backend record has unexpected shape");
                    return Classified::Failure(
                        FailureEntry::new(Some(id), format!("{}: {}", UNREADABLE_RECORD_PREFIX, e)),
                        FailureReason::MissingRecord,
                    );
                }
            },
        };

        Classified::Entry(ResultEntry {
            id,
            record,
            confidence: result.confidence,
            total_latency_ms: result.latency_ms,
            model_latency_ms: result.api_latency_ms,
            cost_usd: result.cost_usd,
            raw_response: result.raw_response,
        })
    }

    fn classify_error(&self, error: RawFailure, seen: &HashSet<BackendId>) -> Classified {
        let id = error.backend_id();
        if let Some(id) = &id {
            if seen.contains(id) {
                return Classified::Duplicate(id.clone());
            }
        }

        let reason = if id.is_some() {
            FailureReason::Reported
        } else {
            FailureReason::Unattributed
        };
        let message = error
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string());
        Classified::Failure(FailureEntry::new(id, message), reason)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FailureReason {
    Reported,
    MissingRecord,
    Unattributed,
}

enum Classified {
    Entry(ResultEntry),
    Failure(FailureEntry, FailureReason),
    Duplicate(BackendId),
}
