//! Config file loading and overrides

use resume_compare::config::Config;
use resume_compare::{Tab, TabPolicy};
use tempfile::TempDir;

use crate::helpers::write_config;

#[test]
fn missing_file_yields_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_from(&temp.path().join("nope.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.api.url, "http://localhost:8000");
    assert_eq!(config.models.max_selected, 3);
    assert_eq!(config.tab_policy(), TabPolicy::ResetOnSubmit);
}

#[test]
fn partial_file_keeps_other_defaults() {
    let temp = TempDir::new().unwrap();
    let path = write_config(
        temp.path(),
        r#"
[view]
preserve_tab = true

[labels]
"openai:gpt-4o" = "Omni"
"#,
    );
    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.tab_policy(), TabPolicy::Preserve);
    assert_eq!(config.api.url, "http://localhost:8000");
    assert_eq!(
        config.label_resolver().label(&"openai:gpt-4o".parse().unwrap()),
        "Omni"
    );
    assert_eq!(
        config.label_resolver().label(&"openai:gpt-5.1".parse().unwrap()),
        "GPT-5.1"
    );
}

#[test]
fn invalid_values_are_rejected() {
    let temp = TempDir::new().unwrap();
    let path = write_config(temp.path(), "[models]\nmax_selected = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("max_selected"));
}

#[test]
fn malformed_toml_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = write_config(temp.path(), "[api\nurl = ");
    assert!(Config::load_from(&path).is_err());
}

#[test]
fn api_url_precedence() {
    let config = Config::default();
    assert_eq!(
        config.resolve_api_url(Some("http://flag"), Some("http://env")),
        "http://flag"
    );
    assert_eq!(config.resolve_api_url(None, Some("http://env")), "http://env");
    assert_eq!(config.resolve_api_url(Some("  "), None), "http://localhost:8000");
}

#[test]
fn save_and_reload() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("sub").join("config.toml");
    let mut config = Config::default();
    config.models.default = vec!["gemini:gemini-3-pro-preview".to_string()];
    config.save_to(&path).unwrap();

    let reloaded = Config::load_from(&path).unwrap();
    assert_eq!(reloaded, config);
    assert_eq!(
        reloaded.default_selection().unwrap().to_query_value(),
        "gemini:gemini-3-pro-preview"
    );
    assert_eq!("other".parse::<Tab>().unwrap(), Tab::Other);
}
