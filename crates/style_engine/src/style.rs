//! Session-scoped style accumulation and coaching recommendations.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::classify::StyleTag;

/// Threshold below which a style earns a recommendation.
const RECOMMENDATION_CUTOFF: f64 = 0.2;

/// Normalized per-style fractions. Sums to 1.0 once at least one tag has
/// been ingested; all zero before that.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleMetrics {
    pub aggressive: f64,
    pub positional: f64,
    pub tactical: f64,
    pub defensive: f64,
}

impl StyleMetrics {
    pub fn get(&self, tag: StyleTag) -> f64 {
        match tag {
            StyleTag::Aggressive => self.aggressive,
            StyleTag::Positional => self.positional,
            StyleTag::Tactical => self.tactical,
            StyleTag::Defensive => self.defensive,
        }
    }

    pub fn total(&self) -> f64 {
        self.aggressive + self.positional + self.tactical + self.defensive
    }
}

/// Counts style tags across one game session. Owned by a single session and
/// reset on a new game; never shared.
#[derive(Clone, Debug, Default)]
pub struct StyleAggregator {
    counts: [u64; 4],
}

impl StyleAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one count per tag present; a move carrying two tags bumps two
    /// counters.
    pub fn ingest(&mut self, tags: &BTreeSet<StyleTag>) {
        for tag in tags {
            self.counts[tag.idx()] += 1;
        }
    }

    pub fn tag_count(&self, tag: StyleTag) -> u64 {
        self.counts[tag.idx()]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn metrics(&self) -> StyleMetrics {
        let total = self.total();
        if total == 0 {
            return StyleMetrics::default();
        }
        let share = |tag: StyleTag| self.counts[tag.idx()] as f64 / total as f64;
        StyleMetrics {
            aggressive: share(StyleTag::Aggressive),
            positional: share(StyleTag::Positional),
            tactical: share(StyleTag::Tactical),
            defensive: share(StyleTag::Defensive),
        }
    }

    /// The style with the highest fraction; ties resolve in the fixed
    /// priority order tactical, aggressive, positional, defensive. `None`
    /// until something has been ingested.
    pub fn dominant_style(&self) -> Option<StyleTag> {
        if self.total() == 0 {
            return None;
        }
        let metrics = self.metrics();
        let mut best = StyleTag::PRIORITY[0];
        for &tag in &StyleTag::PRIORITY[1..] {
            if metrics.get(tag) > metrics.get(best) {
                best = tag;
            }
        }
        Some(best)
    }

    pub fn reset(&mut self) {
        self.counts = [0; 4];
    }
}

/// One fixed suggestion per under-represented style (fraction below 0.2),
/// emitted in priority order, never duplicated.
pub fn recommendations(metrics: &StyleMetrics) -> Vec<String> {
    StyleTag::PRIORITY
        .iter()
        .filter(|&&tag| metrics.get(tag) < RECOMMENDATION_CUTOFF)
        .map(|&tag| recommendation_for(tag).to_string())
        .collect()
}

pub fn recommendation_for(tag: StyleTag) -> &'static str {
    match tag {
        StyleTag::Aggressive => {
            "Look for forcing moves: captures, checks and threats that seize the initiative."
        }
        StyleTag::Positional => {
            "Spend more moves improving piece placement and fighting for the central squares."
        }
        StyleTag::Tactical => {
            "Practice short combinations; look one move ahead for undefended material."
        }
        StyleTag::Defensive => {
            "Watch for hanging pieces and resolve threats against your own camp earlier."
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod style_tests;
