use super::*;

#[test]
fn visible_tags_truncates_to_three_with_overflow_label() {
    static TAGS: &[&str] = &["a", "b", "c", "d", "e"];
    let (shown, more) = visible_tags(TAGS);
    assert_eq!(shown, &["a", "b", "c"]);
    assert_eq!(more.as_deref(), Some("+2"));
}

#[test]
fn visible_tags_keeps_short_lists_whole() {
    static TAGS: &[&str] = &["a", "b", "c"];
    let (shown, more) = visible_tags(TAGS);
    assert_eq!(shown.len(), 3);
    assert!(more.is_none());
}

#[test]
fn visible_tags_for_table_categories_shows_plus_one() {
    let c = crate::data::categories::find_category("artifact-hunting").expect("category should exist");
    let (shown, more) = visible_tags(c.tags);
    assert_eq!(shown, &["archaeology", "history", "outdoors"]);
    assert_eq!(more.as_deref(), Some("+1"));
}

#[test]
fn stagger_style_steps_by_a_tenth_of_a_second() {
    assert_eq!(stagger_style(0), "animation-delay: 0.0s;");
    assert_eq!(stagger_style(3), "animation-delay: 0.3s;");
    assert_eq!(stagger_style(7), "animation-delay: 0.7s;");
}
