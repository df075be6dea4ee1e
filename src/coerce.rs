//! Best-effort coercion of loosely-typed client input.
//!
//! The dashboards that feed this API submit numbers as strings, omit fields
//! freely, and occasionally send `null`. The storage contract is stricter:
//! numeric fields are never null (absent or unparseable input becomes `0`),
//! and date fields are `YYYY-MM-DD` strings defaulting to the current date at
//! write time. Coercion failures are by design never an error.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// serde adapter: any JSON scalar to `f64`, defaulting to `0.0`.
pub fn loose_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(to_f64(value.as_ref()))
}

/// serde adapter: any JSON scalar to `i32`, defaulting to `0`.
/// Fractional submissions are truncated (bag counts are whole numbers).
pub fn loose_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(to_f64(value.as_ref()) as i32)
}

/// serde adapter: any JSON scalar to an optional string. `null` and absent
/// collapse to `None`; numbers and booleans are stringified rather than
/// rejected.
pub fn loose_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(to_text(value))
}

pub fn to_f64(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        Some(Value::Bool(true)) => 1.0,
        _ => 0.0,
    }
}

fn to_text(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    }
}

/// Reformat a date submission to `YYYY-MM-DD`. Values already in that shape
/// pass through untouched, a handful of common alternate shapes are
/// reformatted, and anything unrecognised is stored verbatim.
pub fn format_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if NaiveDate::parse_from_str(trimmed, DATE_FORMAT).is_ok() {
        return trimmed.to_string();
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return parsed.date_naive().format(DATE_FORMAT).to_string();
    }
    for pattern in ["%d/%m/%Y", "%d-%m-%Y"] {
        if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, pattern) {
            return parsed.format(DATE_FORMAT).to_string();
        }
    }
    trimmed.to_string()
}

/// Primary date fields fall back to the current date when unset.
pub fn date_or_today(value: Option<String>) -> String {
    match value {
        Some(raw) if !raw.trim().is_empty() => format_date(&raw),
        _ => today(),
    }
}

/// Secondary date fields (due dates) stay empty when unset.
pub fn date_or_empty(value: Option<String>) -> String {
    value
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| format_date(&raw))
        .unwrap_or_default()
}

pub fn today() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

/// Server-side rice order key, used when the client submits none.
pub fn generate_order_id() -> String {
    format!("ORD-{}", Local::now().format("%Y%m%d-%H%M%S"))
}

/// Server-side dispatch batch number, used when the client submits none.
pub fn generate_batch_no() -> String {
    format!("DIS-{}", Local::now().format("%Y%m%d-%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use serde_json::json;

    #[test]
    fn numeric_coercion_is_total() {
        assert_eq!(to_f64(Some(&json!(12.5))), 12.5);
        assert_eq!(to_f64(Some(&json!("25"))), 25.0);
        assert_eq!(to_f64(Some(&json!(" 3.5 "))), 3.5);
        assert_eq!(to_f64(Some(&json!(""))), 0.0);
        assert_eq!(to_f64(Some(&json!("ten"))), 0.0);
        assert_eq!(to_f64(Some(&json!(null))), 0.0);
        assert_eq!(to_f64(None), 0.0);
    }

    #[test]
    fn numeric_coercion_is_idempotent() {
        let once = to_f64(Some(&json!("42.25")));
        assert_eq!(to_f64(Some(&json!(once))), once);
    }

    #[test]
    fn canonical_dates_pass_through() {
        assert_eq!(format_date("2024-01-05"), "2024-01-05");
        assert_eq!(date_or_today(Some("2024-01-05".into())), "2024-01-05");
    }

    #[test]
    fn alternate_date_shapes_are_reformatted() {
        assert_eq!(format_date("05/01/2024"), "2024-01-05");
        assert_eq!(format_date("05-01-2024"), "2024-01-05");
        assert_eq!(format_date("2024-01-05T10:30:00+05:30"), "2024-01-05");
    }

    #[test]
    fn unrecognised_dates_are_stored_verbatim() {
        assert_eq!(format_date("January fifth"), "January fifth");
    }

    #[test]
    fn missing_dates_default_per_field_kind() {
        assert_eq!(date_or_today(None), today());
        assert_eq!(date_or_today(Some("  ".into())), today());
        assert_eq!(date_or_empty(None), "");
        assert_eq!(date_or_empty(Some("".into())), "");
    }

    #[test]
    fn generated_keys_carry_timestamp_shape() {
        let order = Regex::new(r"^ORD-\d{8}-\d{6}$").unwrap();
        let batch = Regex::new(r"^DIS-\d{8}-\d{6}$").unwrap();
        assert!(order.is_match(&generate_order_id()));
        assert!(batch.is_match(&generate_batch_no()));
    }
}
