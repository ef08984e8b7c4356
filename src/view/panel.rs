//! Styled lines for the comparison view.
//!
//! One panel per successful entry, in entry order. Failed backends never get
//! a panel; they appear only in the failure summary, which is independent of
//! the active tab.

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use super::format::{format_total_experience, metric_badges, or_na, present};
use super::Tab;
use crate::envelope::{FailureEntry, ResponseEnvelope, ResultEntry};
use crate::labels::LabelResolver;
use crate::record::Record;
use crate::theme::Theme;

pub const TITLE: &str = "Parsed Resume Data";
pub const FAILURE_HEADING: &str = "Some models failed:";

pub const NO_EXPERIENCE: &str = "No experience data found";
pub const NO_EDUCATION: &str = "No education data found";
pub const NO_SKILLS: &str = "No skills data found";
pub const NO_LANGUAGES: &str = "No language data found";
pub const NO_ADDITIONAL_INFO: &str = "No additional information found";

/// `Comparing 2 models (providers: openai, huggingface/groq)`
pub fn subtitle(envelope: &ResponseEnvelope) -> String {
    let count = envelope.entries().len();
    let noun = if count == 1 { "model" } else { "models" };
    if count == 0 {
        format!("Comparing {} {}", count, noun)
    } else {
        format!(
            "Comparing {} {} (providers: {})",
            count,
            noun,
            envelope.provider_summary()
        )
    }
}

/// Heading plus one line per failure; empty when nothing failed.
pub fn failure_summary(failures: &[FailureEntry], theme: &Theme) -> Vec<Line<'static>> {
    if failures.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![Line::from(Span::styled(
        FAILURE_HEADING,
        theme.error_style().add_modifier(Modifier::BOLD),
    ))];
    lines.extend(failures.iter().map(|failure| {
        Line::from(vec![
            Span::styled(format!("  {}", failure.display_id()), theme.error_style()),
            Span::styled(format!(" — {}", failure.message), theme.text_style()),
        ])
    }));
    lines
}

/// Label, provider and metric badges of one entry.
pub fn panel_header(
    entry: &ResultEntry,
    resolver: &LabelResolver,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let resolved = resolver.resolve(&entry.id);
    let mut lines = vec![Line::from(vec![
        Span::styled(resolved.label, theme.accent_bold_style()),
        Span::raw("  "),
        Span::styled(resolved.provider_display, theme.text_secondary_style()),
    ])];

    let badges = metric_badges(entry);
    if !badges.is_empty() {
        let mut spans = Vec::with_capacity(badges.len() * 2);
        for (i, badge) in badges.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(format!("[{}]", badge), theme.text_secondary_style()));
        }
        lines.push(Line::from(spans));
    }
    lines
}

/// Body of one panel for the given tab.
pub fn tab_body(tab: Tab, record: &Record, theme: &Theme) -> Vec<Line<'static>> {
    let mut out = Body::new(theme);
    match tab {
        Tab::Contact => contact(&mut out, record),
        Tab::Experience => experience(&mut out, record),
        Tab::Education => education(&mut out, record),
        Tab::Skills => skills(&mut out, record),
        Tab::Other => other(&mut out, record),
    }
    out.lines
}

/// Header followed by the tab body.
pub fn entry_panel(
    entry: &ResultEntry,
    tab: Tab,
    resolver: &LabelResolver,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let mut lines = panel_header(entry, resolver, theme);
    lines.push(Line::default());
    lines.extend(tab_body(tab, &entry.record, theme));
    lines
}

/// The whole view stacked vertically, as used for printed output.
pub fn comparison_lines(
    envelope: &ResponseEnvelope,
    tab: Tab,
    resolver: &LabelResolver,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(TITLE, theme.accent_bold_style())),
        Line::from(Span::styled(subtitle(envelope), theme.text_secondary_style())),
        Line::default(),
    ];

    let failures = failure_summary(envelope.failures(), theme);
    if !failures.is_empty() {
        lines.extend(failures);
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled(
        tab.heading(),
        theme.text_style().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    )));
    for entry in envelope.entries() {
        lines.push(Line::default());
        lines.extend(entry_panel(entry, tab, resolver, theme));
    }
    lines
}

/// Lines without styling, one per row.
pub fn to_plain_text(lines: &[Line<'_>]) -> String {
    lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

struct Body<'t> {
    theme: &'t Theme,
    lines: Vec<Line<'static>>,
}

impl<'t> Body<'t> {
    fn new(theme: &'t Theme) -> Self {
        Self {
            theme,
            lines: Vec::new(),
        }
    }

    fn field(&mut self, label: &str, value: String) {
        self.lines.push(Line::from(vec![
            Span::styled(
                format!("{}: ", label),
                self.theme.text_style().add_modifier(Modifier::BOLD),
            ),
            Span::styled(value, self.theme.text_style()),
        ]));
    }

    fn heading(&mut self, text: &str) {
        self.lines
            .push(Line::from(Span::styled(text.to_string(), self.theme.accent_style())));
    }

    fn title(&mut self, text: String) {
        self.lines.push(Line::from(Span::styled(
            text,
            self.theme.text_style().add_modifier(Modifier::BOLD),
        )));
    }

    /// One line per source line; spans never carry a newline.
    fn text(&mut self, text: &str) {
        for line in text.lines() {
            self.lines.push(Line::from(Span::styled(
                line.to_string(),
                self.theme.text_style(),
            )));
        }
    }

    fn detail(&mut self, text: String) {
        self.lines
            .push(Line::from(Span::styled(text, self.theme.text_secondary_style())));
    }

    fn bullet(&mut self, primary: String, extra: String) {
        let mut spans = vec![
            Span::styled("• ", self.theme.text_secondary_style()),
            Span::styled(primary, self.theme.text_style().add_modifier(Modifier::BOLD)),
        ];
        if !extra.is_empty() {
            spans.push(Span::styled(extra, self.theme.text_style()));
        }
        self.lines.push(Line::from(spans));
    }

    fn placeholder(&mut self, text: &str) {
        self.lines.push(Line::from(Span::styled(
            text.to_string(),
            self.theme
                .text_secondary_style()
                .add_modifier(Modifier::ITALIC),
        )));
    }

    fn gap(&mut self) {
        self.lines.push(Line::default());
    }
}

fn contact(out: &mut Body<'_>, record: &Record) {
    let contact = record.contact();
    out.field("Name", or_na(contact.name.as_deref()));
    out.field("Email", or_na(contact.email.as_deref()));
    out.field("Phone", or_na(contact.phone.as_deref()));
    out.field("City", or_na(contact.city.as_deref()));
    out.field(
        "Total Experience",
        format_total_experience(record.total_experience_years, record.total_experience_months),
    );
    if let Some(summary) = present(record.summary.as_deref()) {
        out.gap();
        out.heading("Summary:");
        out.text(summary);
    }
    if let Some(objective) = present(record.objective.as_deref()) {
        out.gap();
        out.heading("Objective:");
        out.text(objective);
    }
}

fn experience(out: &mut Body<'_>, record: &Record) {
    if record.experience().is_empty() {
        out.placeholder(NO_EXPERIENCE);
        return;
    }
    for (i, exp) in record.experience().iter().enumerate() {
        if i > 0 {
            out.gap();
        }
        out.title(or_na(exp.position.as_deref()));
        out.text(&or_na(exp.company.as_deref()));
        let end = if exp.is_current == Some(true) {
            "Present".to_string()
        } else {
            or_na(exp.end_date.as_deref())
        };
        out.detail(format!("{} - {}", or_na(exp.start_date.as_deref()), end));
        if let Some(summary) = present(exp.summary.as_deref()) {
            out.text(summary);
        }
        for achievement in exp.achievements.as_deref().unwrap_or(&[]) {
            out.bullet(achievement.clone(), String::new());
        }
    }
}

fn education(out: &mut Body<'_>, record: &Record) {
    if record.education().is_empty() {
        out.placeholder(NO_EDUCATION);
        return;
    }
    for (i, edu) in record.education().iter().enumerate() {
        if i > 0 {
            out.gap();
        }
        out.title(or_na(edu.degree.as_deref()));
        if let Some(field) = present(edu.field_of_study.as_deref()) {
            out.text(field);
        }
        out.text(&or_na(edu.institution.as_deref()));

        let mut details = Vec::new();
        if let Some(year) = edu.graduation_year {
            details.push(format!("Graduated: {}", year));
        }
        if let Some(gpa) = present(edu.gpa.as_deref()) {
            details.push(format!("GPA: {}", gpa));
        }
        if let Some(location) = present(edu.location.as_deref()) {
            details.push(location.to_string());
        }
        if !details.is_empty() {
            out.detail(details.join(" · "));
        }
    }
}

fn skills(out: &mut Body<'_>, record: &Record) {
    if record.skills().is_empty() {
        out.placeholder(NO_SKILLS);
    } else {
        for skill in record.skills() {
            let mut extra = String::new();
            if let Some(category) = present(skill.category.as_deref()) {
                extra.push_str(&format!(" [{}]", category));
            }
            if let Some(proficiency) = present(skill.proficiency.as_deref()) {
                extra.push_str(&format!(" ({})", proficiency));
            }
            out.bullet(or_na(skill.name.as_deref()), extra);
        }
    }

    out.gap();
    out.heading("Languages");
    if record.languages().is_empty() {
        out.placeholder(NO_LANGUAGES);
    } else {
        out.text(&record.languages().join(", "));
    }
}

fn other(out: &mut Body<'_>, record: &Record) {
    if record.has_no_additional_info() {
        out.placeholder(NO_ADDITIONAL_INFO);
        return;
    }

    let mut sections = 0;
    let mut section = |out: &mut Body<'_>, name: &str| {
        if sections > 0 {
            out.gap();
        }
        sections += 1;
        out.heading(name);
    };

    if !record.certifications().is_empty() {
        section(out, "Certifications");
        for cert in record.certifications() {
            out.bullet(
                or_na(cert.name.as_deref()),
                issuer_and_date(cert.issuer.as_deref(), cert.issue_date.as_deref()),
            );
        }
    }

    if !record.projects().is_empty() {
        section(out, "Projects");
        for project in record.projects() {
            out.bullet(or_na(project.name.as_deref()), String::new());
            if let Some(description) = present(project.description.as_deref()) {
                for line in description.lines() {
                    out.text(&format!("  {}", line));
                }
            }
            let technologies = project.technologies.as_deref().unwrap_or(&[]);
            if !technologies.is_empty() {
                out.detail(format!("  {}", technologies.join(", ")));
            }
        }
    }

    if !record.awards().is_empty() {
        section(out, "Awards");
        for award in record.awards() {
            out.bullet(
                or_na(award.title.as_deref()),
                issuer_and_date(award.issuer.as_deref(), award.date.as_deref()),
            );
        }
    }

    if !record.patents().is_empty() {
        section(out, "Patents");
        for patent in record.patents() {
            out.bullet(
                or_na(patent.title.as_deref()),
                issuer_and_date(patent.patent_number.as_deref(), patent.issue_date.as_deref()),
            );
        }
    }

    if !record.references().is_empty() {
        section(out, "References");
        for reference in record.references() {
            out.text(&format!("• {}", reference));
        }
    }
}

/// ` - issuer (date)` with absent parts left out.
fn issuer_and_date(issuer: Option<&str>, date: Option<&str>) -> String {
    let mut text = String::new();
    if let Some(issuer) = present(issuer) {
        text.push_str(&format!(" - {}", issuer));
    }
    if let Some(date) = present(date) {
        text.push_str(&format!(" ({})", date));
    }
    text
}
