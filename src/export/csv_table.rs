//! Tabular export.
//!
//! Every cell gets standard CSV escaping (quoted when it contains a comma,
//! quote, CR or LF; embedded quotes doubled). The Skills value is always
//! quoted so its `; ` separators survive naive splitting.

use csv::{QuoteStyle, WriterBuilder};

use super::ExportError;
use crate::envelope::ResponseEnvelope;
use crate::labels::LabelResolver;
use crate::view::format::format_number;

pub const CSV_HEADER: &str = "Model,Field,Value";

/// Build the table, or `None` when there are no entries to tabulate.
pub fn to_csv(
    envelope: &ResponseEnvelope,
    resolver: &LabelResolver,
) -> Result<Option<String>, ExportError> {
    if !envelope.has_entries() {
        return Ok(None);
    }

    let mut out = String::new();
    out.push_str(CSV_HEADER);
    out.push('\n');

    for entry in envelope.entries() {
        let label = resolver.label(&entry.id);
        let record = &entry.record;
        let contact = record.contact();

        let rows = [
            ("Name", contact.name.unwrap_or_default()),
            ("Email", contact.email.unwrap_or_default()),
            ("Phone", contact.phone.unwrap_or_default()),
            ("City", contact.city.unwrap_or_default()),
            (
                "TotalExperienceYears",
                record
                    .total_experience_years
                    .map(format_number)
                    .unwrap_or_default(),
            ),
        ];
        for (field, value) in rows {
            push_row(&mut out, &label, field, &value, QuoteStyle::Necessary)?;
        }

        if !record.skills().is_empty() {
            let skills = record.skill_names().join("; ");
            push_row(&mut out, &label, "Skills", &skills, QuoteStyle::Always)?;
        }
    }

    Ok(Some(out))
}

fn push_row(
    out: &mut String,
    label: &str,
    field: &str,
    value: &str,
    value_quoting: QuoteStyle,
) -> Result<(), ExportError> {
    out.push_str(&encode_cell(label, QuoteStyle::Necessary)?);
    out.push(',');
    out.push_str(&encode_cell(field, QuoteStyle::Necessary)?);
    out.push(',');
    out.push_str(&encode_cell(value, value_quoting)?);
    out.push('\n');
    Ok(())
}

fn encode_cell(value: &str, style: QuoteStyle) -> Result<String, ExportError> {
    if value.is_empty() && !matches!(style, QuoteStyle::Always) {
        return Ok(String::new());
    }
    // Quoting differs per cell within a row, so each cell gets its own writer
    let mut writer = WriterBuilder::new()
        .quote_style(style)
        .from_writer(Vec::new());
    writer.write_field(value)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Csv(csv::Error::from(e.into_error())))?;
    Ok(String::from_utf8(bytes)?)
}
