//! Blocking HTTP transport (no Tokio runtime required).

use std::time::Duration;

use reqwest::blocking::multipart::{Form, Part};
use tracing::{debug, warn};

use super::{Document, ParseService, TransportError};
use crate::envelope::RawEnvelope;
use crate::selection::SelectionSet;

/// Path of the parse endpoint below the API base URL.
pub const PARSE_ENDPOINT: &str = "/api/parse";

/// Message used when a rejection carries no usable detail.
pub const DEFAULT_REJECTION_DETAIL: &str = "Failed to parse resume";

/// Parsing service client.
///
/// No request timeout is set: a multi-model parse can legitimately take
/// minutes.
#[derive(Clone)]
pub struct HttpParseService {
    http: reqwest::blocking::Client,
    api_base: String,
}

impl HttpParseService {
    pub fn new(api_base: &str) -> Result<Self, TransportError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(format!("rcmp/{}", env!("CARGO_PKG_VERSION")))
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;
        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL of the parse endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.api_base, PARSE_ENDPOINT)
    }
}

impl ParseService for HttpParseService {
    fn submit(
        &self,
        document: &Document,
        selection: &SelectionSet,
    ) -> Result<RawEnvelope, TransportError> {
        let part = Part::bytes(document.bytes().to_vec())
            .file_name(document.file_name().to_string())
            .mime_str(document.mime_type())
            .map_err(|e| TransportError::Request(e.to_string()))?;
        let form = Form::new().part("file", part);

        let url = self.endpoint();
        debug!(%url, "posting document");
        let response = self
            .http
            .post(&url)
            .query(&[("models", selection.to_query_value())])
            .multipart(form)
            .send()
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| TransportError::Request(e.to_string()))?;

        if !status.is_success() {
            let detail = extract_detail(&body);
            warn!(status = status.as_u16(), %detail, "parsing service rejected request");
            return Err(TransportError::Rejected {
                status: status.as_u16(),
                detail,
            });
        }

        serde_json::from_str(&body).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

/// Human-readable reason from an error body.
///
/// Reads the `detail` field; a string is used as-is, any other JSON value is
/// rendered as text. Bodies without a detail fall back to
/// `DEFAULT_REJECTION_DETAIL`.
pub fn extract_detail(body: &str) -> String {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("detail").cloned());
    match detail {
        Some(serde_json::Value::String(s)) if !s.trim().is_empty() => s,
        Some(serde_json::Value::Null) | Some(serde_json::Value::String(_)) | None => {
            DEFAULT_REJECTION_DETAIL.to_string()
        }
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_string_is_used_verbatim() {
        assert_eq!(
            extract_detail(r#"{"detail": "All model calls failed."}"#),
            "All model calls failed."
        );
    }

    #[test]
    fn structured_detail_is_rendered_as_text() {
        assert_eq!(
            extract_detail(r#"{"detail": [{"loc": ["query", "models"]}]}"#),
            r#"[{"loc":["query","models"]}]"#
        );
    }

    #[test]
    fn missing_detail_falls_back() {
        assert_eq!(extract_detail("{}"), DEFAULT_REJECTION_DETAIL);
        assert_eq!(extract_detail(r#"{"detail": null}"#), DEFAULT_REJECTION_DETAIL);
        assert_eq!(extract_detail("<html>502</html>"), DEFAULT_REJECTION_DETAIL);
        assert_eq!(extract_detail(""), DEFAULT_REJECTION_DETAIL);
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let service = HttpParseService::new("http://localhost:8000/").unwrap();
        assert_eq!(service.endpoint(), "http://localhost:8000/api/parse");
    }
}
