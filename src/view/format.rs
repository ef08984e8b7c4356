//! Field and metric formatting.

use crate::envelope::ResultEntry;

/// Placeholder for an absent scalar field.
pub const NOT_AVAILABLE: &str = "N/A";

/// Render a number the way it was received: integers without a fraction.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

/// `0.8734` -> `87.3% confidence`
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}% confidence", confidence * 100.0)
}

/// `0.012345` -> `~$0.0123`
pub fn format_cost(cost_usd: f64) -> String {
    format!("~${:.4}", cost_usd)
}

pub fn format_latency(ms: f64) -> String {
    format!("{} ms", format_number(ms))
}

/// Total experience as `5 yrs 3 mos`; months are omitted when zero or absent.
pub fn format_total_experience(years: Option<f64>, months: Option<u32>) -> String {
    match (years, months) {
        (None, _) => NOT_AVAILABLE.to_string(),
        (Some(years), Some(months)) if months > 0 => {
            format!("{} yrs {} mos", format_number(years), months)
        }
        (Some(years), _) => format!("{} yrs", format_number(years)),
    }
}

/// Badges for the metrics an entry carries, in header order.
pub fn metric_badges(entry: &ResultEntry) -> Vec<String> {
    let mut badges = Vec::new();
    if let Some(ms) = entry.model_latency_ms {
        badges.push(format!("Model: {}", format_latency(ms)));
    }
    if let Some(ms) = entry.total_latency_ms {
        badges.push(format!("Total: {}", format_latency(ms)));
    }
    if let Some(confidence) = entry.confidence {
        badges.push(format_confidence(confidence));
    }
    if let Some(cost) = entry.cost_usd {
        badges.push(format_cost(cost));
    }
    badges
}

/// The value, unless absent or blank.
pub fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Value or `N/A`; blank strings count as absent.
pub fn or_na(value: Option<&str>) -> String {
    present(value).unwrap_or(NOT_AVAILABLE).to_string()
}
