//! Printed comparison of the sample response

use resume_compare::theme::Theme;
use resume_compare::view::panel::{comparison_lines, to_plain_text};
use resume_compare::{LabelResolver, Tab};

use crate::helpers::sample_envelope;

fn printed(tab: Tab) -> String {
    let lines = comparison_lines(
        &sample_envelope(),
        tab,
        &LabelResolver::builtin(),
        &Theme::default(),
    );
    to_plain_text(&lines)
}

#[test]
fn contact_tab_for_sample() {
    insta::assert_snapshot!(printed(Tab::Contact), @r"
    Parsed Resume Data
    Comparing 2 models (providers: openai, huggingface/groq)

    Some models failed:
      openai:gpt-5.1 — backend returned no resume data
      gemini:gemini-3-pro-preview — quota exceeded
      Unknown — worker crashed

    Contact & Summary

    GPT-4o  OPENAI
    [Model: 1900 ms] [Total: 2100 ms] [87.3% confidence] [~$0.0123]

    Name: Ada Lovelace
    Email: ada@example.com
    Phone: N/A
    City: London
    Total Experience: 12 yrs 4 mos

    Summary:
    Mathematician and writer, known for work on the Analytical Engine.

    GPT-OSS-120B  HUGGINGFACE (groq)
    [Total: 950 ms]

    Name: A. Lovelace, Countess
    Email: N/A
    Phone: N/A
    City: N/A
    Total Experience: N/A
    ");
}

#[test]
fn other_tab_shows_sections_or_one_placeholder() {
    let text = printed(Tab::Other);
    assert!(text.contains("Certifications, Projects & More"));
    assert!(text.contains("• Royal Society Fellow - Royal Society (1843)"));
    assert_eq!(text.matches("No additional information found").count(), 1);
}

#[test]
fn experience_tab_marks_current_roles() {
    let text = printed(Tab::Experience);
    assert!(text.contains("Analyst\nAnalytical Engine Co.\n1842 - Present"));
    assert!(text.contains("• Published the first algorithm"));
    assert!(text.contains("No experience data found"));
}

#[test]
fn skills_tab_lists_skills_and_languages() {
    let text = printed(Tab::Skills);
    assert!(text.contains("• Python [Programming]"));
    assert!(text.contains("English, French"));
    assert!(text.contains("No language data found"));
}
