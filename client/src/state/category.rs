#[cfg(test)]
#[path = "category_test.rs"]
mod category_test;

/// Category page UI state: active tab, layout and the content search box.
///
/// Lives only as long as the page; every visit starts from the default.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryViewState {
    pub tab: CategoryTab,
    pub view_mode: ViewMode,
    pub content_query: String,
}

impl CategoryViewState {
    pub fn toggle_view_mode(&mut self) {
        self.view_mode = self.view_mode.toggled();
    }
}

/// Tabs in the category toolbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryTab {
    #[default]
    Overview,
    Content,
    Analytics,
}

impl CategoryTab {
    pub const ALL: [CategoryTab; 3] = [Self::Overview, Self::Content, Self::Analytics];

    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Content => "Content",
            Self::Analytics => "Analytics",
        }
    }
}

/// Card layout for category content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Grid => Self::List,
            Self::List => Self::Grid,
        }
    }

    /// Modifier class for the content container.
    pub fn class(self) -> &'static str {
        match self {
            Self::Grid => "layout--grid",
            Self::List => "layout--list",
        }
    }
}
