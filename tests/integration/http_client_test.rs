//! HTTP transport against a mock parsing service

use httpmock::prelude::*;

use resume_compare::client::{
    submit_and_aggregate, Document, HttpParseService, ParseService, DEFAULT_REJECTION_DETAIL,
};
use resume_compare::{SelectionSet, TransportError};

use crate::helpers::load_fixture;

fn document() -> Document {
    Document::from_bytes("cv.txt", b"Ada Lovelace, Analyst".to_vec()).unwrap()
}

#[test]
fn posts_multipart_file_with_models_query() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/parse")
            .query_param("models", "openai:gpt-4o,huggingface:openai/gpt-oss-120b:groq")
            .body_includes("name=\"file\"; filename=\"cv.txt\"")
            .body_includes("Content-Type: text/plain")
            .body_includes("Ada Lovelace, Analyst");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"results": [], "errors": []}"#);
    });
    let service = HttpParseService::new(&format!("{}/", server.base_url())).unwrap();
    let selection = SelectionSet::parse_list("openai:gpt-4o,huggingface:openai/gpt-oss-120b:groq")
        .unwrap();

    let raw = service.submit(&document(), &selection).unwrap();

    mock.assert();
    assert!(raw.results.is_empty());
}

#[test]
fn rejection_carries_service_detail() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/parse");
        then.status(500)
            .json_body(serde_json::json!({ "detail": "All model calls failed." }));
    });
    let service = HttpParseService::new(&server.base_url()).unwrap();

    let err = service
        .submit(&document(), &SelectionSet::defaults())
        .unwrap_err();

    mock.assert();
    assert_eq!(
        err,
        TransportError::Rejected {
            status: 500,
            detail: "All model calls failed.".to_string()
        }
    );
    assert_eq!(err.to_string(), "All model calls failed.");
}

#[test]
fn rejection_without_detail_uses_fallback() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/parse");
        then.status(502).body("<html>bad gateway</html>");
    });
    let service = HttpParseService::new(&server.base_url()).unwrap();

    let err = service
        .submit(&document(), &SelectionSet::defaults())
        .unwrap_err();

    assert_eq!(err.to_string(), DEFAULT_REJECTION_DETAIL);
}

#[test]
fn undecodable_success_body_is_a_decode_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/parse");
        then.status(200).body("not json");
    });
    let service = HttpParseService::new(&server.base_url()).unwrap();

    let err = service
        .submit(&document(), &SelectionSet::defaults())
        .unwrap_err();

    assert!(matches!(err, TransportError::Decode(_)));
}

#[test]
fn malformed_record_fails_one_backend_not_the_submission() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/parse");
        then.status(200).json_body(serde_json::json!({
            "results": [
                {"provider": "openai", "model_name": "gpt-4o",
                 "resume": {"contact_info": {"name": "Ada Lovelace"}}},
                {"provider": "gemini", "model_name": "gemini-3-pro-preview",
                 "resume": {"skills": ["Python", "C++"]}}
            ],
            "errors": []
        }));
    });
    let service = HttpParseService::new(&server.base_url()).unwrap();
    let selection =
        SelectionSet::parse_list("openai:gpt-4o,gemini:gemini-3-pro-preview").unwrap();

    let envelope = submit_and_aggregate(&service, &document(), &selection).unwrap();

    assert_eq!(envelope.entries().len(), 1);
    assert_eq!(envelope.failures().len(), 1);
    assert_eq!(envelope.failures()[0].display_id(), "gemini:gemini-3-pro-preview");
    assert!(envelope.failures()[0]
        .message
        .starts_with(resume_compare::envelope::UNREADABLE_RECORD_PREFIX));
}

#[test]
fn unreachable_service_is_a_request_error() {
    // Bind then drop to get a port nobody listens on
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let service = HttpParseService::new(&format!("http://{}", addr)).unwrap();

    let err = service
        .submit(&document(), &SelectionSet::defaults())
        .unwrap_err();
    assert!(matches!(err, TransportError::Request(_)));
}

#[test]
fn full_submission_normalizes_and_reconciles() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/parse");
        then.status(200)
            .header("content-type", "application/json")
            .body(load_fixture("envelope.json"));
    });
    let service = HttpParseService::new(&server.base_url()).unwrap();
    let selection = SelectionSet::parse_list("openai:gpt-4o,openai:gpt-5-preview").unwrap();

    let envelope = submit_and_aggregate(&service, &document(), &selection).unwrap();

    assert_eq!(envelope.entries().len(), 2);
    let last = envelope.failures().last().unwrap();
    assert_eq!(last.display_id(), "openai:gpt-5-preview");
}
