//! The ordered, append-only emission factor catalog.

use crate::defaults::default_factors;
use crate::factor::{EmissionFactor, GLOBAL_REGION};
use crate::matcher::{match_score, normalize_activity};

/// Errors raised when appending to a [`FactorRegistry`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    #[error("emission factor '{id}' must be positive and finite, got {factor}")]
    NonPositiveFactor { id: String, factor: f64 },
    #[error("emission factor '{id}' has an empty activity")]
    EmptyActivity { id: String },
}

/// A scored lookup result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorCandidate<'r> {
    pub factor: &'r EmissionFactor,
    pub score: f64,
}

/// Append-only catalog of emission factors.
///
/// Entry order is stable and significant: equally scored lookups resolve to
/// the earliest entry. There is no removal. Mutation needs `&mut self`, so a
/// registry cannot change while a calculation borrows it.
#[derive(Debug, Clone, Default)]
pub struct FactorRegistry {
    factors: Vec<EmissionFactor>,
}

impl FactorRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry seeded with the built-in catalog.
    pub fn with_defaults() -> Self {
        Self {
            factors: default_factors(),
        }
    }

    /// Append a factor. The activity is stored in normalized form so it is
    /// comparable with normalized lookup text.
    pub fn add(&mut self, mut factor: EmissionFactor) -> Result<(), RegistryError> {
        if !(factor.factor > 0.0 && factor.factor.is_finite()) {
            return Err(RegistryError::NonPositiveFactor {
                id: factor.id,
                factor: factor.factor,
            });
        }
        let activity = normalize_activity(&factor.activity);
        if activity.is_empty() {
            return Err(RegistryError::EmptyActivity { id: factor.id });
        }
        factor.activity = activity;
        self.factors.push(factor);
        Ok(())
    }

    /// Append several factors, stopping at the first invalid one.
    pub fn extend<I>(&mut self, factors: I) -> Result<(), RegistryError>
    where
        I: IntoIterator<Item = EmissionFactor>,
    {
        for factor in factors {
            self.add(factor)?;
        }
        Ok(())
    }

    /// All entries scoring above zero for `text`, best first. Equal scores
    /// keep registry order.
    pub fn lookup(&self, text: &str) -> Vec<FactorCandidate<'_>> {
        let normalized = normalize_activity(text);
        let mut candidates: Vec<FactorCandidate<'_>> = self
            .factors
            .iter()
            .filter_map(|factor| {
                let score = match_score(&normalized, &factor.activity);
                (score > 0.0).then_some(FactorCandidate { factor, score })
            })
            .collect();
        // Stable sort keeps registry order among ties.
        candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
        candidates
    }

    /// First entry with exactly this activity and region.
    pub fn regional_override(&self, activity: &str, region: &str) -> Option<&EmissionFactor> {
        self.factors
            .iter()
            .find(|f| f.activity == activity && f.region == region)
    }

    /// Entries usable for `region`: its own plus the global ones.
    pub fn available_for_region(&self, region: &str) -> Vec<&EmissionFactor> {
        self.factors
            .iter()
            .filter(|f| f.region == region || f.region == GLOBAL_REGION)
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&EmissionFactor> {
        self.factors.iter().find(|f| f.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EmissionFactor> {
        self.factors.iter()
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}

impl<'a> IntoIterator for &'a FactorRegistry {
    type Item = &'a EmissionFactor;
    type IntoIter = std::slice::Iter<'a, EmissionFactor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
