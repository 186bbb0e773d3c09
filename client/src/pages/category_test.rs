use super::*;

#[test]
fn category_path_nests_under_category() {
    assert_eq!(category_path("artifact-hunting"), "/category/artifact-hunting");
}

#[test]
fn coming_soon_text_prefixes_blurb() {
    assert_eq!(
        coming_soon_text("Market research, competitive analysis, and strategic business insights"),
        "Coming soon - Market research, competitive analysis, and strategic business insights"
    );
}

#[test]
fn every_category_path_resolves_back_to_its_record() {
    for c in crate::data::categories::CATEGORIES {
        let path = category_path(c.id);
        let id = path.strip_prefix("/category/").expect("path should carry prefix");
        assert_eq!(find_category(id), Some(c));
    }
}

#[test]
fn view_toggle_shows_current_layout() {
    assert_eq!(view_toggle_glyph(ViewMode::Grid), "\u{25a6}");
    assert_eq!(view_toggle_glyph(ViewMode::List), "\u{2630}");
    assert_eq!(view_toggle_title(ViewMode::Grid), "Switch to list view");
    assert_eq!(view_toggle_title(ViewMode::List), "Switch to grid view");
}
