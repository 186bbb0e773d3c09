use std::collections::HashSet;

use super::categories::*;
use super::hunting_locations::*;
use crate::util::color::parse_hex_rgb;

// =============================================================
// Categories
// =============================================================

#[test]
fn category_ids_are_unique() {
    let ids: HashSet<_> = CATEGORIES.iter().map(|c| c.id).collect();
    assert_eq!(ids.len(), CATEGORIES.len());
}

#[test]
fn category_table_has_eight_entries() {
    assert_eq!(CATEGORIES.len(), 8);
}

#[test]
fn category_colors_are_valid_hex() {
    for c in CATEGORIES {
        assert!(parse_hex_rgb(c.color).is_some(), "{} has bad color {}", c.id, c.color);
        assert!(c.gradient.contains(c.color), "{} gradient should start from its color", c.id);
    }
}

#[test]
fn find_category_returns_matching_record() {
    let found = find_category("travel-exploration").expect("category should exist");
    assert_eq!(found.title, "Travel & Exploration");
    assert!(!found.featured);
}

#[test]
fn find_category_unknown_id_is_none() {
    assert!(find_category("does-not-exist").is_none());
    assert!(find_category("").is_none());
}

#[test]
fn total_item_count_sums_table() {
    assert_eq!(total_item_count(), 88);
}

#[test]
fn only_artifact_hunting_has_curated_content() {
    for c in CATEGORIES {
        match c.content {
            CategoryContent::ArtifactHunting => assert_eq!(c.id, "artifact-hunting"),
            CategoryContent::ComingSoon(blurb) => assert!(!blurb.is_empty()),
        }
    }
}

#[test]
fn artifact_hunting_item_count_matches_locations() {
    let c = find_category("artifact-hunting").expect("category should exist");
    assert_eq!(c.item_count as usize, HUNTING_LOCATIONS.len());
}

#[test]
fn difficulty_colors_match_levels() {
    assert_eq!(Difficulty::Beginner.color(), "#4caf50");
    assert_eq!(Difficulty::Intermediate.color(), "#ff9800");
    assert_eq!(Difficulty::Advanced.color(), "#f44336");
    assert_eq!(Difficulty::Expert.color(), "#9c27b0");
}

// =============================================================
// Hunting locations
// =============================================================

#[test]
fn location_ids_are_unique() {
    let ids: HashSet<_> = HUNTING_LOCATIONS.iter().map(|l| l.id).collect();
    assert_eq!(ids.len(), HUNTING_LOCATIONS.len());
}

#[test]
fn location_ratings_are_in_range() {
    for l in HUNTING_LOCATIONS {
        assert!((1..=5).contains(&l.difficulty), "{} difficulty", l.name);
        assert!((1..=5).contains(&l.historical_significance), "{} significance", l.name);
    }
}

#[test]
fn location_lists_are_populated() {
    for l in HUNTING_LOCATIONS {
        assert!(!l.native_tribes.is_empty());
        assert!(!l.best_seasons.is_empty());
        assert_eq!(l.tips.len(), 4, "{} should carry four tips", l.name);
        assert!(!l.geological_features.is_empty());
        assert!(!l.historical_finds.is_empty());
    }
}

#[test]
fn difficulty_tone_thresholds() {
    assert_eq!(difficulty_tone(1), Tone::Success);
    assert_eq!(difficulty_tone(2), Tone::Success);
    assert_eq!(difficulty_tone(3), Tone::Warning);
    assert_eq!(difficulty_tone(4), Tone::Error);
    assert_eq!(difficulty_tone(5), Tone::Error);
}

#[test]
fn crowd_level_tones() {
    assert_eq!(CrowdLevel::Low.tone(), Tone::Success);
    assert_eq!(CrowdLevel::Medium.tone(), Tone::Warning);
    assert_eq!(CrowdLevel::High.tone(), Tone::Error);
}

#[test]
fn guidelines_has_three_entries() {
    assert_eq!(GUIDELINES.len(), 3);
    assert_eq!(GUIDELINES[0].tone, Tone::Warning);
}
