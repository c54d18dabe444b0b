//! Static word/theme catalogue that drives label text and colours.
//!
//! Every word belongs to exactly one theme. Order is significant: it is the
//! order words are laid out on the globe and listed in search results.

/// A named group of words sharing a display colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    /// CSS hex colour, e.g. `#2196F3`.
    pub color: &'static str,
    pub words: &'static [&'static str],
}

/// Category reported for words outside the catalogue.
pub const FALLBACK_CATEGORY: &str = "General Business";
/// Colour reported for words outside the catalogue.
pub const FALLBACK_COLOR: &str = "#ffffff";

pub const THEMES: &[Theme] = &[
    Theme {
        name: "Data & Analytics",
        color: "#2196F3",
        words: &[
            "Analytics",
            "Data",
            "Insights",
            "Metrics",
            "KPIs",
            "Dashboard",
            "Visualization",
            "Reports",
            "Intelligence",
            "Analysis",
        ],
    },
    Theme {
        name: "Marketing & Sales",
        color: "#FF5722",
        words: &[
            "Marketing",
            "Sales",
            "Engagement",
            "Customer",
            "Acquisition",
            "Conversion",
            "Funnel",
            "Pipeline",
            "Market",
            "Competitive",
        ],
    },
    Theme {
        name: "Finance & Business",
        color: "#4CAF50",
        words: &[
            "Revenue", "Budget", "ROI", "Cost", "Profit", "Margin", "Forecast", "Growth",
            "Strategy", "Business",
        ],
    },
    Theme {
        name: "Technology",
        color: "#9C27B0",
        words: &[
            "Technology",
            "Digital",
            "Platform",
            "Cloud",
            "Mobile",
            "Web",
            "Application",
            "Software",
            "Integration",
            "API",
        ],
    },
    Theme {
        name: "Development & DevOps",
        color: "#FF9800",
        words: &[
            "Development",
            "DevOps",
            "CI/CD",
            "Deployment",
            "Testing",
            "Debugging",
            "Maintenance",
            "Updates",
            "Features",
            "Agile",
        ],
    },
    Theme {
        name: "User Experience",
        color: "#E91E63",
        words: &[
            "Design",
            "User",
            "Experience",
            "Interface",
            "Usability",
            "Accessibility",
            "Prototype",
            "Wireframe",
            "Journey",
            "Persona",
        ],
    },
    Theme {
        name: "Operations & Performance",
        color: "#00BCD4",
        words: &[
            "Performance",
            "Automation",
            "Efficiency",
            "Productivity",
            "Optimization",
            "Scalability",
            "Monitoring",
            "Alerting",
            "Logging",
            "Quality",
        ],
    },
    Theme {
        name: "Management & Leadership",
        color: "#795548",
        words: &[
            "Management",
            "Leadership",
            "Team",
            "Collaboration",
            "Communication",
            "Project",
            "Governance",
            "Risk",
            "Compliance",
            "Enterprise",
        ],
    },
    Theme {
        name: "Planning & Strategy",
        color: "#607D8B",
        words: &[
            "Vision",
            "Mission",
            "Goals",
            "Objectives",
            "Targets",
            "Milestones",
            "Timeline",
            "Schedule",
            "Roadmap",
            "Planning",
        ],
    },
    Theme {
        name: "Support & Services",
        color: "#FFC107",
        words: &[
            "Service",
            "Support",
            "Success",
            "Retention",
            "Resources",
            "Capacity",
            "Demand",
            "Supply",
            "Research",
            "Innovation",
        ],
    },
];

pub fn themes() -> &'static [Theme] {
    THEMES
}

/// All words in catalogue order.
pub fn words() -> impl Iterator<Item = &'static str> {
    THEMES.iter().flat_map(|t| t.words.iter().copied())
}

/// Theme owning `word` (exact match).
pub fn theme_of(word: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|t| t.words.contains(&word))
}

/// Display colour for `word`, or [`FALLBACK_COLOR`].
pub fn color_of(word: &str) -> &'static str {
    theme_of(word).map_or(FALLBACK_COLOR, |t| t.color)
}

/// Dashboard category for `word`, or [`FALLBACK_CATEGORY`].
pub fn category_of(word: &str) -> &'static str {
    theme_of(word).map_or(FALLBACK_CATEGORY, |t| t.name)
}

/// Case-insensitive lookup returning the catalogue spelling.
pub fn lookup(word: &str) -> Option<&'static str> {
    let wanted = word.trim().to_lowercase();
    words().find(|w| w.to_lowercase() == wanted)
}
