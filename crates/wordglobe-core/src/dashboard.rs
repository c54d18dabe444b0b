//! Synthetic per-word dashboard content: brand, tagline, features, metrics.

use rand::Rng;

use crate::catalogue;

const BRANDS: &[&str] = &[
    "TechCorp",
    "DataFlow",
    "InsightMax",
    "MetricsPro",
    "AnalyticHub",
    "SmartDash",
    "CloudMetrics",
    "VizuallyPro",
];

const TAGLINES: &[&str] = &[
    "Transforming data into insights",
    "Your success, our analytics",
    "Data-driven decisions made simple",
    "Unlocking business potential",
    "Intelligence at your fingertips",
    "Metrics that matter",
    "Visualizing your success",
    "Smart analytics for smart business",
];

const FEATURES: &[&str] = &[
    "Real-time monitoring",
    "Custom alerts",
    "Advanced filtering",
    "Export capabilities",
    "Mobile responsive",
    "API integration",
    "Historical data analysis",
    "Predictive analytics",
    "Automated reporting",
    "Team collaboration",
];

const MASCOT_COUNT: u32 = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metrics {
    pub users: u32,
    /// e.g. `99.47%`
    pub uptime: String,
    /// e.g. `92%`
    pub satisfaction: String,
    /// Average response time, e.g. `84ms`.
    pub performance: String,
}

/// Everything the dashboard shows for one word apart from feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardData {
    pub word: String,
    pub description: String,
    pub brand: &'static str,
    pub tagline: &'static str,
    pub mascot: String,
    pub category: &'static str,
    pub color: &'static str,
    pub features: Vec<&'static str>,
    pub metrics: Metrics,
}

impl DashboardData {
    /// Generate dashboard content for `word` from the given random source.
    pub fn generate<R: Rng + ?Sized>(word: &str, rng: &mut R) -> Self {
        let brand = BRANDS[rng.random_range(0..BRANDS.len())];
        let tagline = TAGLINES[rng.random_range(0..TAGLINES.len())];
        let mascot = format!("mascot-{}", rng.random_range(1..=MASCOT_COUNT));
        let feature_count = rng.random_range(3..=6);

        let metrics = Metrics {
            users: rng.random_range(1000..=10_999),
            uptime: format!(
                "99.{}{}%",
                rng.random_range(0..=8u8),
                rng.random_range(0..=8u8)
            ),
            satisfaction: format!("{}%", rng.random_range(80..=99u8)),
            performance: format!("{}ms", rng.random_range(70..=99u8)),
        };

        Self {
            word: word.to_string(),
            description: format!(
                "{word} dashboard provides comprehensive insights and analytics for your \
                 business operations. Track key performance indicators, monitor trends, and \
                 make data-driven decisions with our advanced visualization tools."
            ),
            brand,
            tagline,
            mascot,
            category: catalogue::category_of(word),
            color: catalogue::color_of(word),
            features: FEATURES[..feature_count].to_vec(),
            metrics,
        }
    }
}
