#[cfg(test)]
#[path = "hunting_test.rs"]
mod hunting_test;

use crate::data::hunting_locations::{HUNTING_LOCATIONS, HuntingLocation};

/// Accordion state for the hunting-location list. At most one panel is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HuntingState {
    pub expanded: Option<u32>,
}

impl HuntingState {
    pub fn is_expanded(&self, id: u32) -> bool {
        self.expanded == Some(id)
    }

    /// Apply an accordion change event. Opening a panel closes the others;
    /// closing a panel that is not open leaves the current one alone.
    pub fn set_expanded(&mut self, id: u32, open: bool) {
        if open {
            self.expanded = Some(id);
        } else if self.expanded == Some(id) {
            self.expanded = None;
        }
    }

    pub fn toggle(&mut self, id: u32) {
        let open = !self.is_expanded(id);
        self.set_expanded(id, open);
    }
}

/// Case-insensitive substring match against name, location, description
/// and tribes.
pub fn location_matches(location: &HuntingLocation, query: &str) -> bool {
    let needle = query.to_lowercase();
    location.name.to_lowercase().contains(&needle)
        || location.location.to_lowercase().contains(&needle)
        || location.description.to_lowercase().contains(&needle)
        || location.native_tribes.iter().any(|t| t.to_lowercase().contains(&needle))
}

/// Locations matching `query`, in table order. An empty query matches all.
pub fn filter_locations(query: &str) -> Vec<&'static HuntingLocation> {
    HUNTING_LOCATIONS.iter().filter(|l| location_matches(l, query)).collect()
}
