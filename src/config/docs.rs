//! Config field documentation.
//!
//! Used by `rcmp config show` to annotate TOML output with inline comments.

use std::collections::HashMap;

/// Documentation for a config section.
pub struct SectionDoc {
    /// TOML section name (e.g., "api", "models")
    pub name: &'static str,
    pub description: &'static str,
    pub fields: &'static [FieldDoc],
}

/// Documentation for a config field.
pub struct FieldDoc {
    /// Field name as it appears in TOML
    pub name: &'static str,
    pub description: &'static str,
    /// Default value as a display string
    pub default_display: &'static str,
}

/// Config sections in canonical display order.
pub const CONFIG_SECTIONS: &[SectionDoc] = &[
    SectionDoc {
        name: "api",
        description: "Parsing service connection",
        fields: &[FieldDoc {
            name: "url",
            description: "Base URL of the parsing service (RCMP_API_URL and --api-url override it)",
            default_display: "\"http://localhost:8000\"",
        }],
    },
    SectionDoc {
        name: "models",
        description: "Model selection",
        fields: &[
            FieldDoc {
                name: "default",
                description: "Backends used when --models is not given",
                default_display: "[\"openai:gpt-4o\", \"openai:gpt-5.1\"]",
            },
            FieldDoc {
                name: "max_selected",
                description: "Most models the interactive picker lets you select",
                default_display: "3",
            },
        ],
    },
    SectionDoc {
        name: "view",
        description: "Comparison view",
        fields: &[FieldDoc {
            name: "preserve_tab",
            description: "Keep the active tab after resubmitting instead of returning to Contact",
            default_display: "false",
        }],
    },
    SectionDoc {
        name: "export",
        description: "Export artifacts",
        fields: &[FieldDoc {
            name: "directory",
            description: "Directory for resume-data.json and resume-data.csv",
            default_display: "\".\"",
        }],
    },
    SectionDoc {
        name: "labels",
        description: "Display labels keyed by \"provider:model\"; override the built-in table",
        fields: &[],
    },
];

/// Insert `# description` comments above known sections and fields.
pub fn annotate_config(toml_str: &str) -> String {
    let mut fields: HashMap<(&str, &str), &str> = HashMap::new();
    let mut sections: HashMap<&str, &str> = HashMap::new();
    for section in CONFIG_SECTIONS {
        sections.insert(section.name, section.description);
        for field in section.fields {
            fields.insert((section.name, field.name), field.description);
        }
    }

    let mut result = String::new();
    let mut current_section = String::new();

    for line in toml_str.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with('[') && !trimmed.starts_with("[[") {
            let name = trimmed
                .trim_start_matches('[')
                .split(']')
                .next()
                .unwrap_or("")
                .trim();
            current_section = name.to_string();
            if let Some(desc) = sections.get(name) {
                result.push_str(&format!("# {}\n", desc));
            }
            result.push_str(line);
            result.push('\n');
            continue;
        }

        if let Some((key, _)) = trimmed.split_once('=') {
            if let Some(desc) = fields.get(&(current_section.as_str(), key.trim())) {
                result.push_str(&format!("# {}\n", desc));
            }
        }

        result.push_str(line);
        result.push('\n');
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotates_sections_and_fields() {
        let annotated = annotate_config("[api]\nurl = \"http://x\"\n\n[view]\npreserve_tab = true\n");
        let lines: Vec<&str> = annotated.lines().collect();
        assert_eq!(lines[0], "# Parsing service connection");
        assert_eq!(lines[1], "[api]");
        assert!(lines[2].starts_with("# Base URL"));
        assert_eq!(lines[3], "url = \"http://x\"");
        assert!(annotated.contains("# Keep the active tab"));
    }

    #[test]
    fn unknown_keys_pass_through() {
        let annotated = annotate_config("[labels]\n\"openai:gpt-4o\" = \"Omni\"\n");
        assert!(annotated.contains("\"openai:gpt-4o\" = \"Omni\"\n"));
        assert_eq!(annotated.matches('#').count(), 1);
    }

    #[test]
    fn every_section_documents_its_defaults() {
        for section in CONFIG_SECTIONS {
            for field in section.fields {
                assert!(!field.default_display.is_empty(), "{}.{}", section.name, field.name);
            }
        }
    }
}
