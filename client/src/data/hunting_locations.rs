//! Curated arrowhead hunting locations within a few hours of NYC.

/// Semantic color bucket for chips and icons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Secondary,
    Success,
    Warning,
    Error,
}

impl Tone {
    /// CSS modifier suffix, e.g. `chip--success`.
    pub fn class_suffix(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// How busy a site usually is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrowdLevel {
    Low,
    Medium,
    High,
}

impl CrowdLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Self::Low => Tone::Success,
            Self::Medium => Tone::Warning,
            Self::High => Tone::Error,
        }
    }
}

/// Tone for a 1-5 difficulty rating: easy is green, 3 is amber, harder is red.
pub fn difficulty_tone(difficulty: u8) -> Tone {
    if difficulty <= 2 {
        Tone::Success
    } else if difficulty <= 3 {
        Tone::Warning
    } else {
        Tone::Error
    }
}

/// One archaeological-site entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HuntingLocation {
    pub id: u32,
    pub name: &'static str,
    pub location: &'static str,
    pub distance: &'static str,
    /// 1 (easy) to 5 (hard).
    pub difficulty: u8,
    /// 1 to 5 stars.
    pub historical_significance: u8,
    pub crowd_level: CrowdLevel,
    pub description: &'static str,
    pub native_tribes: &'static [&'static str],
    pub best_seasons: &'static [&'static str],
    pub tips: &'static [&'static str],
    pub coordinates: &'static str,
    pub geological_features: &'static [&'static str],
    pub accessibility: &'static str,
    pub permits: &'static str,
    pub historical_finds: &'static [&'static str],
}

/// A general rule of thumb listed under the location cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Guideline {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub glyph: &'static str,
    pub tone: Tone,
}

pub const LEGAL_NOTICE: &str = "Always obtain proper permissions for private land. Check local and state \
regulations regarding artifact collection. Respect archaeological sites and report significant finds to authorities.";

pub const INTRO: &str = "Curated lesser-known arrowhead hunting locations within 4 hours of NYC, focusing on sites \
with rich Native American history but minimal crowds.";

pub static GUIDELINES: &[Guideline] = &[
    Guideline {
        primary: "Always get permission for private land access",
        secondary: "Respect landowner rights and leave areas as you found them",
        glyph: "\u{26a0}",
        tone: Tone::Warning,
    },
    Guideline {
        primary: "Focus on elevated terraces near water sources",
        secondary: "Native Americans preferred high ground near water for camps and villages",
        glyph: "\u{26f0}",
        tone: Tone::Primary,
    },
    Guideline {
        primary: "Check confluences and creek bends",
        secondary: "These areas provided natural travel routes and resource concentrations",
        glyph: "\u{1f4cd}",
        tone: Tone::Secondary,
    },
];

pub static HUNTING_LOCATIONS: &[HuntingLocation] = &[
    HuntingLocation {
        id: 1,
        name: "Garoga Creek Valley",
        location: "Montgomery County, NY",
        distance: "~3 hours from NYC",
        difficulty: 3,
        historical_significance: 5,
        crowd_level: CrowdLevel::Low,
        description: "The Wagners Hollow site on Garoga Creek has yielded exceptional bone implements and numerous \
arrowheads. This Mohawk Valley location near the prehistoric Garoga fort site is rich in Native American history but \
remains relatively unknown to casual hunters.",
        native_tribes: &["Mohawk", "Iroquois Confederacy"],
        best_seasons: &["Early Spring", "Late Fall", "After Heavy Rains"],
        tips: &[
            "Focus on elevated terraces near creek bends",
            "Look for areas with natural stone outcroppings",
            "Check exposed banks after spring floods",
            "Search near old ford crossing points",
        ],
        coordinates: "42.9634\u{b0} N, 74.3701\u{b0} W",
        geological_features: &["Limestone outcrops", "Chert deposits", "Creek terraces"],
        accessibility: "Moderate hiking required, some private land",
        permits: "Permission needed for private property",
        historical_finds: &["Bone implements", "Stone points", "Scrapers", "Pottery shards"],
    },
    HuntingLocation {
        id: 2,
        name: "Schoharie Creek System",
        location: "Schoharie County, NY",
        distance: "~2.5 hours from NYC",
        difficulty: 2,
        historical_significance: 4,
        crowd_level: CrowdLevel::Low,
        description: "This 93-mile creek flows from the Catskills through the Schoharie Valley to the Mohawk River. \
The valley served as a major Native American travel corridor with multiple camp sites along creek banks, especially \
near confluence points.",
        native_tribes: &["Mohawk", "Schoharie Indians"],
        best_seasons: &["Spring", "Early Summer", "Post-Storm"],
        tips: &[
            "Target confluence points with tributary streams",
            "Search gravel bars and exposed banks",
            "Focus on south-facing slopes for winter camps",
            "Look for flat terraces above flood level",
        ],
        coordinates: "42.5834\u{b0} N, 74.3187\u{b0} W",
        geological_features: &["Catskill sandstone", "Creek gravels", "Alluvial deposits"],
        accessibility: "Good road access, mix of public and private land",
        permits: "Some areas require landowner permission",
        historical_finds: &["Projectile points", "Celts", "Net sinkers", "Trade beads"],
    },
    HuntingLocation {
        id: 3,
        name: "O'Day Creek Area",
        location: "Central NY",
        distance: "~3 hours from NYC",
        difficulty: 2,
        historical_significance: 3,
        crowd_level: CrowdLevel::Low,
        description: "Native American artifacts have been documented along O'Day Creek. This location appears in \
specialized artifact hunting resources but remains under the radar compared to more famous sites.",
        native_tribes: &["Oneida", "Onondaga"],
        best_seasons: &["Late Spring", "Early Fall"],
        tips: &[
            "Check shallow riffles and gravel beds",
            "Look for camping spots on high ground",
            "Search near natural rock shelters",
            "Focus on areas with fresh water springs",
        ],
        coordinates: "43.0123\u{b0} N, 75.8456\u{b0} W",
        geological_features: &["Glacial deposits", "Natural springs", "Bedrock exposures"],
        accessibility: "Easy access via hiking trails",
        permits: "Public land, no permits required",
        historical_finds: &["Small points", "Fishing implements", "Stone tools"],
    },
    HuntingLocation {
        id: 4,
        name: "Upper Susquehanna Tributaries",
        location: "Southern NY/Northern PA Border",
        distance: "~3.5 hours from NYC",
        difficulty: 4,
        historical_significance: 5,
        crowd_level: CrowdLevel::Low,
        description: "The Pennsylvania-New York border region along smaller tributaries of the Susquehanna system. \
Historical records show significant Native American presence, particularly around creek confluences and elevated \
terraces.",
        native_tribes: &["Susquehannock", "Iroquois", "Delaware"],
        best_seasons: &["Spring", "Fall", "After Flooding"],
        tips: &[
            "Focus on tributary confluences",
            "Search elevated terraces for village sites",
            "Look for quarry sites with tool-making debris",
            "Check areas near natural fords",
        ],
        coordinates: "42.0000\u{b0} N, 75.5000\u{b0} W",
        geological_features: &["Devonian shale", "Chert nodules", "River terraces"],
        accessibility: "Remote areas, 4WD recommended",
        permits: "Mixed public/private, check local regulations",
        historical_finds: &["Large points", "Knives", "Drills", "Preforms"],
    },
    HuntingLocation {
        id: 5,
        name: "Finger Lakes Secondary Creeks",
        location: "Central NY",
        distance: "~4 hours from NYC",
        difficulty: 3,
        historical_significance: 4,
        crowd_level: CrowdLevel::Medium,
        description: "Focus on smaller tributaries feeding into Seneca and Cayuga Lakes rather than the main lake \
shores. Look for elevated terraces and creek bends where temporary camps would have been established.",
        native_tribes: &["Seneca", "Cayuga", "Iroquois"],
        best_seasons: &["Spring Thaw", "Late Summer"],
        tips: &[
            "Avoid main tourist areas",
            "Target smaller feeder creeks",
            "Look for natural camping terraces",
            "Search near freshwater springs",
        ],
        coordinates: "42.7000\u{b0} N, 76.8000\u{b0} W",
        geological_features: &["Glacial moraines", "Limestone bedrock", "Shale outcrops"],
        accessibility: "Good road access to most areas",
        permits: "Mostly public land, some state park fees",
        historical_finds: &["Woodland period points", "Pottery", "Stone axes", "Gorgets"],
    },
];
