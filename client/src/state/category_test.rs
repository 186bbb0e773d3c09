use super::*;

#[test]
fn category_view_state_defaults() {
    let s = CategoryViewState::default();
    assert_eq!(s.tab, CategoryTab::Overview);
    assert_eq!(s.view_mode, ViewMode::Grid);
    assert!(s.content_query.is_empty());
}

#[test]
fn tabs_are_listed_in_toolbar_order() {
    let labels: Vec<_> = CategoryTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, vec!["Overview", "Content", "Analytics"]);
}

#[test]
fn view_mode_toggle_round_trips() {
    assert_eq!(ViewMode::Grid.toggled(), ViewMode::List);
    assert_eq!(ViewMode::List.toggled(), ViewMode::Grid);
    assert_eq!(ViewMode::Grid.toggled().toggled(), ViewMode::Grid);
}

#[test]
fn toggle_view_mode_only_touches_layout() {
    let mut s = CategoryViewState { tab: CategoryTab::Analytics, content_query: "creek".into(), ..Default::default() };
    s.toggle_view_mode();
    assert_eq!(s.view_mode, ViewMode::List);
    assert_eq!(s.tab, CategoryTab::Analytics);
    assert_eq!(s.content_query, "creek");
}

#[test]
fn layout_choice_does_not_carry_into_a_new_visit() {
    let mut visited = CategoryViewState::default();
    visited.toggle_view_mode();
    assert_eq!(visited.view_mode, ViewMode::List);

    let next_visit = CategoryViewState::default();
    assert_eq!(next_visit.view_mode, ViewMode::Grid);
}

#[test]
fn view_mode_classes_are_distinct() {
    assert_eq!(ViewMode::Grid.class(), "layout--grid");
    assert_eq!(ViewMode::List.class(), "layout--list");
}
