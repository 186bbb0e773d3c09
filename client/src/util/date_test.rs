use super::*;

#[test]
fn format_short_date_drops_leading_zeros() {
    assert_eq!(format_short_date("2025-06-03").as_deref(), Some("6/3/2025"));
    assert_eq!(format_short_date("2025-12-20").as_deref(), Some("12/20/2025"));
}

#[test]
fn format_short_date_rejects_garbage() {
    assert_eq!(format_short_date(""), None);
    assert_eq!(format_short_date("2025-13-01"), None);
    assert_eq!(format_short_date("2025-06-00"), None);
    assert_eq!(format_short_date("June 3"), None);
    assert_eq!(format_short_date("2025-06"), None);
}

#[test]
fn format_short_date_rejects_days_past_month_end() {
    assert_eq!(format_short_date("2025-02-31"), None);
    assert_eq!(format_short_date("2025-04-31"), None);
    assert_eq!(format_short_date("2025-02-29"), None);
    assert_eq!(format_short_date("2024-02-29").as_deref(), Some("2/29/2024"));
}

#[test]
fn format_short_date_rejects_signed_years() {
    assert_eq!(format_short_date("+2025-06-03"), None);
    assert_eq!(format_short_date("-2025-06-03"), None);
}

#[test]
fn updated_caption_uses_short_date() {
    assert_eq!(updated_caption("2025-05-20"), "Updated 5/20/2025");
}

#[test]
fn updated_caption_falls_back_to_raw_text() {
    assert_eq!(updated_caption("recently"), "Updated recently");
    assert_eq!(updated_caption("2025-04-31"), "Updated 2025-04-31");
}

#[test]
fn every_table_date_parses() {
    for c in crate::data::categories::CATEGORIES {
        assert!(parse_iso_date(c.last_updated).is_some(), "{} has bad date", c.id);
    }
}
