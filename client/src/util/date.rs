//! Calendar date display for `last_updated` fields.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use time::Date;
use time::macros::format_description;

/// Parse a strict ISO `YYYY-MM-DD` calendar date.
///
/// Rejects dates that do not exist (`2025-02-31`) and signed years.
pub fn parse_iso_date(iso: &str) -> Option<Date> {
    if !iso.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    Date::parse(iso, format_description!("[year]-[month]-[day]")).ok()
}

/// Render an ISO `YYYY-MM-DD` date as US short form `M/D/YYYY`.
pub fn format_short_date(iso: &str) -> Option<String> {
    let date = parse_iso_date(iso)?;
    Some(format!("{}/{}/{}", u8::from(date.month()), date.day(), date.year()))
}

/// "Updated ..." caption; falls back to the raw string if it does not parse.
pub fn updated_caption(iso: &str) -> String {
    let shown = format_short_date(iso).unwrap_or_else(|| iso.to_owned());
    format!("Updated {shown}")
}
