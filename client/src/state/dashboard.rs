#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::data::categories::{CATEGORIES, Category, total_item_count};

/// Dashboard search state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub query: String,
}

impl DashboardState {
    pub fn filtered(&self) -> Vec<&'static Category> {
        filter_categories(&self.query)
    }
}

/// Case-insensitive substring match against title, description and tags.
pub fn category_matches(category: &Category, query: &str) -> bool {
    let needle = query.to_lowercase();
    category.title.to_lowercase().contains(&needle)
        || category.description.to_lowercase().contains(&needle)
        || category.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
}

/// Categories matching `query`, in table order. An empty query matches all.
pub fn filter_categories(query: &str) -> Vec<&'static Category> {
    CATEGORIES.iter().filter(|c| category_matches(c, query)).collect()
}

/// Split into `(featured, other)`, preserving order within each group.
pub fn split_featured(list: &[&'static Category]) -> (Vec<&'static Category>, Vec<&'static Category>) {
    list.iter().copied().partition(|c| c.featured)
}

/// Numbers shown in the dashboard hero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardStats {
    /// Size of the whole table, independent of the query.
    pub categories: usize,
    /// Item total across the whole table, independent of the query.
    pub total_items: u32,
    /// Featured categories among the current matches.
    pub featured: usize,
}

impl DashboardStats {
    pub fn compute(filtered: &[&'static Category]) -> Self {
        Self {
            categories: CATEGORIES.len(),
            total_items: total_item_count(),
            featured: filtered.iter().filter(|c| c.featured).count(),
        }
    }
}
