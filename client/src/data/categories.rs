//! Knowledge-bank category table.

/// Rough skill level advertised on a category card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }

    /// Chip background color for this level.
    pub fn color(self) -> &'static str {
        match self {
            Self::Beginner => "#4caf50",
            Self::Intermediate => "#ff9800",
            Self::Advanced => "#f44336",
            Self::Expert => "#9c27b0",
        }
    }
}

/// Icon shown in a category avatar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryIcon {
    Terrain,
    TrendingUp,
    Computer,
    Explore,
    FitnessCenter,
    Palette,
    Business,
    School,
}

impl CategoryIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Terrain => "\u{26f0}",
            Self::TrendingUp => "\u{1f4c8}",
            Self::Computer => "\u{1f4bb}",
            Self::Explore => "\u{1f9ed}",
            Self::FitnessCenter => "\u{1f3cb}",
            Self::Palette => "\u{1f3a8}",
            Self::Business => "\u{1f4bc}",
            Self::School => "\u{1f393}",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Terrain => "terrain",
            Self::TrendingUp => "trending-up",
            Self::Computer => "computer",
            Self::Explore => "explore",
            Self::FitnessCenter => "fitness-center",
            Self::Palette => "palette",
            Self::Business => "business",
            Self::School => "school",
        }
    }
}

/// What the category page renders below its header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryContent {
    /// Curated hunting-location list.
    ArtifactHunting,
    /// Placeholder announcing upcoming content.
    ComingSoon(&'static str),
}

/// One knowledge-bank topic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: CategoryIcon,
    /// Accent color, `#rrggbb`.
    pub color: &'static str,
    /// CSS gradient used for the hovered card and the page header.
    pub gradient: &'static str,
    pub item_count: u32,
    /// ISO `YYYY-MM-DD`.
    pub last_updated: &'static str,
    pub difficulty: Difficulty,
    pub tags: &'static [&'static str],
    pub featured: bool,
    pub content: CategoryContent,
}

pub static CATEGORIES: &[Category] = &[
    Category {
        id: "artifact-hunting",
        title: "Artifact Hunting",
        description: "Discover hidden archaeological treasures and Native American artifacts across the Northeast",
        icon: CategoryIcon::Terrain,
        color: "#2e7d32",
        gradient: "linear-gradient(135deg, #2e7d32 0%, #4caf50 100%)",
        item_count: 5,
        last_updated: "2025-06-03",
        difficulty: Difficulty::Intermediate,
        tags: &["archaeology", "history", "outdoors", "research"],
        featured: true,
        content: CategoryContent::ArtifactHunting,
    },
    Category {
        id: "investment-research",
        title: "Investment Research",
        description: "Deep market analysis, financial trends, and investment opportunities",
        icon: CategoryIcon::TrendingUp,
        color: "#1976d2",
        gradient: "linear-gradient(135deg, #1976d2 0%, #42a5f5 100%)",
        item_count: 12,
        last_updated: "2025-06-02",
        difficulty: Difficulty::Advanced,
        tags: &["finance", "markets", "analysis", "strategy"],
        featured: true,
        content: CategoryContent::ComingSoon(
            "Deep market analysis, financial trends, and investment opportunities",
        ),
    },
    Category {
        id: "technology-insights",
        title: "Technology Insights",
        description: "Cutting-edge tech research, AI developments, and emerging platforms",
        icon: CategoryIcon::Computer,
        color: "#7b1fa2",
        gradient: "linear-gradient(135deg, #7b1fa2 0%, #ab47bc 100%)",
        item_count: 18,
        last_updated: "2025-06-01",
        difficulty: Difficulty::Expert,
        tags: &["ai", "blockchain", "development", "innovation"],
        featured: true,
        content: CategoryContent::ComingSoon(
            "Cutting-edge tech research, AI developments, and emerging platforms",
        ),
    },
    Category {
        id: "travel-exploration",
        title: "Travel & Exploration",
        description: "Hidden gems, cultural discoveries, and unique travel experiences worldwide",
        icon: CategoryIcon::Explore,
        color: "#f57c00",
        gradient: "linear-gradient(135deg, #f57c00 0%, #ffb74d 100%)",
        item_count: 8,
        last_updated: "2025-05-30",
        difficulty: Difficulty::Beginner,
        tags: &["travel", "culture", "adventure", "photography"],
        featured: false,
        content: CategoryContent::ComingSoon(
            "Hidden gems, cultural discoveries, and unique travel experiences",
        ),
    },
    Category {
        id: "health-biohacking",
        title: "Health & Biohacking",
        description: "Optimization strategies, nutrition research, and wellness protocols",
        icon: CategoryIcon::FitnessCenter,
        color: "#c62828",
        gradient: "linear-gradient(135deg, #c62828 0%, #ef5350 100%)",
        item_count: 15,
        last_updated: "2025-05-28",
        difficulty: Difficulty::Intermediate,
        tags: &["health", "nutrition", "fitness", "optimization"],
        featured: true,
        content: CategoryContent::ComingSoon(
            "Optimization strategies, nutrition research, and wellness protocols",
        ),
    },
    Category {
        id: "creative-projects",
        title: "Creative Projects",
        description: "Art, design, writing, and creative endeavors with detailed documentation",
        icon: CategoryIcon::Palette,
        color: "#5e35b1",
        gradient: "linear-gradient(135deg, #5e35b1 0%, #9575cd 100%)",
        item_count: 6,
        last_updated: "2025-05-25",
        difficulty: Difficulty::Beginner,
        tags: &["art", "design", "creativity", "inspiration"],
        featured: false,
        content: CategoryContent::ComingSoon(
            "Art, design, writing, and creative endeavors with detailed documentation",
        ),
    },
    Category {
        id: "business-insights",
        title: "Business Intelligence",
        description: "Market research, competitive analysis, and strategic business insights",
        icon: CategoryIcon::Business,
        color: "#00695c",
        gradient: "linear-gradient(135deg, #00695c 0%, #26a69a 100%)",
        item_count: 10,
        last_updated: "2025-05-22",
        difficulty: Difficulty::Advanced,
        tags: &["business", "strategy", "analysis", "growth"],
        featured: true,
        content: CategoryContent::ComingSoon(
            "Market research, competitive analysis, and strategic business insights",
        ),
    },
    Category {
        id: "learning-research",
        title: "Learning & Research",
        description: "Educational resources, research methodologies, and knowledge frameworks",
        icon: CategoryIcon::School,
        color: "#6a1b9a",
        gradient: "linear-gradient(135deg, #6a1b9a 0%, #ba68c8 100%)",
        item_count: 14,
        last_updated: "2025-05-20",
        difficulty: Difficulty::Intermediate,
        tags: &["education", "research", "methodology", "knowledge"],
        featured: false,
        content: CategoryContent::ComingSoon(
            "Educational resources, research methodologies, and knowledge frameworks",
        ),
    },
];

/// Look up a category by its route id.
pub fn find_category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

/// Sum of `item_count` across the whole table.
pub fn total_item_count() -> u32 {
    CATEGORIES.iter().map(|c| c.item_count).sum()
}
