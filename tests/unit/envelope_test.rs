//! Normalization of the sample response

use std::collections::HashSet;

use resume_compare::envelope::{MISSING_RECORD_MESSAGE, NO_RESPONSE_MESSAGE};
use resume_compare::{ResponseEnvelope, SelectionSet};

use crate::helpers::{load_fixture, sample_envelope};

#[test]
fn sample_partitions_into_entries_and_failures() {
    let envelope = sample_envelope();

    let entries: Vec<String> = envelope.entries().iter().map(|e| e.id.to_string()).collect();
    assert_eq!(
        entries,
        vec!["openai:gpt-4o", "huggingface:openai/gpt-oss-120b:groq"]
    );

    let failures: Vec<(String, &str)> = envelope
        .failures()
        .iter()
        .map(|f| (f.display_id(), f.message.as_str()))
        .collect();
    assert_eq!(
        failures,
        vec![
            ("openai:gpt-5.1".to_string(), MISSING_RECORD_MESSAGE),
            ("gemini:gemini-3-pro-preview".to_string(), "quota exceeded"),
            ("Unknown".to_string(), "worker crashed"),
        ]
    );
}

#[test]
fn first_arrival_wins_for_duplicates() {
    let envelope = sample_envelope();
    let gpt4o = &envelope.entries()[0];
    assert_eq!(
        gpt4o.record.contact().name.as_deref(),
        Some("Ada Lovelace")
    );
    assert_eq!(gpt4o.confidence, Some(0.8734));
}

#[test]
fn identifiers_never_repeat_across_partitions() {
    let envelope = sample_envelope();
    let ids: Vec<String> = envelope
        .entries()
        .iter()
        .map(|e| e.id.to_string())
        .chain(
            envelope
                .failures()
                .iter()
                .filter_map(|f| f.id.as_ref().map(ToString::to_string)),
        )
        .collect();
    let unique: HashSet<&String> = ids.iter().collect();
    assert_eq!(ids.len(), unique.len());
}

#[test]
fn reconcile_only_adds_unmentioned_backends() {
    let selection = SelectionSet::parse_list(
        "openai:gpt-4o,openai:gpt-5.1,gemini:gemini-3-pro-preview,openai:gpt-5-preview",
    )
    .unwrap();
    let envelope = sample_envelope().reconcile(&selection);

    let last = envelope.failures().last().unwrap();
    assert_eq!(last.display_id(), "openai:gpt-5-preview");
    assert_eq!(last.message, NO_RESPONSE_MESSAGE);
    assert_eq!(envelope.failures().len(), 4);
}

#[test]
fn serialized_envelope_reads_back_identically() {
    let envelope = sample_envelope();
    let json = serde_json::to_string_pretty(&envelope).unwrap();
    let reread = ResponseEnvelope::from_json(&json).unwrap();
    assert_eq!(reread, envelope);
}

#[test]
fn null_sections_are_empty() {
    let envelope = ResponseEnvelope::from_json(r#"{"results": null, "errors": null}"#).unwrap();
    assert!(!envelope.has_entries());
    assert!(!envelope.has_failures());
    assert!(!load_fixture("envelope.json").is_empty());
}
