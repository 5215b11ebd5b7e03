//! Emission factor reference entries and activity categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Region code that marks a factor (or a lookup) as not region-specific.
pub const GLOBAL_REGION: &str = "Global";

/// Activity category of an emission factor.
///
/// The five named variants form the closed set the insight rules know about.
/// Anything else is carried verbatim in [`Category::Other`]. Variant order is
/// the ordering used for category breakdowns and recommendations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Energy,
    Transport,
    Waste,
    Industrial,
    Agriculture,
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Energy => "Energy",
            Category::Transport => "Transport",
            Category::Waste => "Waste",
            Category::Industrial => "Industrial",
            Category::Agriculture => "Agriculture",
            Category::Other(name) => name,
        }
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Energy" => Category::Energy,
            "Transport" => Category::Transport,
            "Waste" => Category::Waste,
            "Industrial" => Category::Industrial,
            "Agriculture" => Category::Agriculture,
            _ => Category::Other(name),
        }
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Category::from(name.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(name) => name,
            named => named.as_str().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reference emission intensity for one activity.
///
/// `factor` is kg CO2e per `unit` of activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactor {
    pub id: String,
    pub activity: String,
    pub category: Category,
    pub factor: f64,
    pub unit: String,
    pub source: String,
    pub region: String,
    pub year: u16,
}

impl EmissionFactor {
    /// Whether this entry applies everywhere rather than to one region.
    pub fn is_global(&self) -> bool {
        self.region == GLOBAL_REGION
    }
}
