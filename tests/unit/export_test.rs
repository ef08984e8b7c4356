//! Export artifacts for the sample response

use std::fs;

use resume_compare::export::{to_csv, to_json, write_artifacts, ExportFormat};
use resume_compare::{LabelResolver, ResponseEnvelope};
use tempfile::TempDir;

use crate::helpers::sample_envelope;

#[test]
fn csv_table_for_sample() {
    let csv = to_csv(&sample_envelope(), &LabelResolver::builtin())
        .unwrap()
        .unwrap();
    insta::assert_snapshot!(csv, @r#"
    Model,Field,Value
    GPT-4o,Name,Ada Lovelace
    GPT-4o,Email,ada@example.com
    GPT-4o,Phone,
    GPT-4o,City,London
    GPT-4o,TotalExperienceYears,12
    GPT-4o,Skills,"Python; C++"
    GPT-OSS-120B,Name,"A. Lovelace, Countess"
    GPT-OSS-120B,Email,
    GPT-OSS-120B,Phone,
    GPT-OSS-120B,City,
    GPT-OSS-120B,TotalExperienceYears,
    GPT-OSS-120B,Skills,"Mathematics"
    "#);
}

#[test]
fn json_export_is_lossless() {
    let envelope = sample_envelope();
    let json = to_json(&envelope).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["results"][0]["resume"]["skills"][1]["name"], "C++");
    assert_eq!(value["results"][1]["inference_provider"], "groq");
    assert_eq!(value["errors"][2]["message"], "worker crashed");
    assert!(value["errors"][2].get("provider").is_none());

    assert_eq!(ResponseEnvelope::from_json(&json).unwrap(), envelope);
}

#[test]
fn write_artifacts_skips_csv_without_entries() {
    let temp = TempDir::new().unwrap();
    let envelope = ResponseEnvelope::from_json(
        r#"{"errors": [{"provider": "openai", "model_name": "gpt-4o", "message": "down"}]}"#,
    )
    .unwrap();

    let summary = write_artifacts(
        &envelope,
        &LabelResolver::builtin(),
        temp.path(),
        ExportFormat::Both,
    )
    .unwrap();

    assert!(summary.csv_skipped);
    assert!(summary.csv.is_none());
    let json = fs::read_to_string(summary.json.unwrap()).unwrap();
    assert!(json.contains("\"down\""));
}
