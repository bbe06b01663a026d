//! Cultural-era score modifiers, narrative text and the per-session event
//! log.

use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::classify::StyleTag;
use crate::error::EngineError;
use crate::eval::EvaluationResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CulturalEra {
    Medieval,
    Renaissance,
    Modern,
    Ancient,
}

impl CulturalEra {
    pub const ALL: [CulturalEra; 4] = [
        CulturalEra::Medieval,
        CulturalEra::Renaissance,
        CulturalEra::Modern,
        CulturalEra::Ancient,
    ];

    /// Fixed aggregate-score multiplier per era.
    pub fn weight(self) -> f64 {
        match self {
            CulturalEra::Medieval => 1.1,
            CulturalEra::Renaissance => 1.2,
            CulturalEra::Modern => 1.0,
            CulturalEra::Ancient => 0.9,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CulturalEra::Medieval => "medieval",
            CulturalEra::Renaissance => "renaissance",
            CulturalEra::Modern => "modern",
            CulturalEra::Ancient => "ancient",
        }
    }
}

impl Default for CulturalEra {
    fn default() -> Self {
        CulturalEra::Modern
    }
}

impl fmt::Display for CulturalEra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CulturalEra {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "medieval" => Ok(CulturalEra::Medieval),
            "renaissance" => Ok(CulturalEra::Renaissance),
            "modern" => Ok(CulturalEra::Modern),
            "ancient" => Ok(CulturalEra::Ancient),
            _ => Err(EngineError::InvalidCulturalStyle {
                given: s.to_string(),
            }),
        }
    }
}

/// Re-weights evaluation scores by era and renders narrative text. Stateless
/// apart from the configured era.
#[derive(Clone, Copy, Debug, Default)]
pub struct CulturalModifier {
    era: CulturalEra,
}

impl CulturalModifier {
    pub fn new(era: CulturalEra) -> Self {
        Self { era }
    }

    pub fn era(&self) -> CulturalEra {
        self.era
    }

    pub fn set_era(&mut self, era: CulturalEra) {
        self.era = era;
    }

    /// Parses and applies an era name, rejecting anything outside the enum.
    pub fn set_era_name(&mut self, name: &str) -> Result<CulturalEra, EngineError> {
        let era = name.parse()?;
        self.era = era;
        Ok(era)
    }

    /// Copy of the result with only the aggregate score re-weighted; the
    /// component breakdown is reported as measured.
    pub fn modify(&self, result: &EvaluationResult) -> EvaluationResult {
        EvaluationResult {
            score: result.score * self.era.weight(),
            ..*result
        }
    }

    pub fn narrative(&self, style: StyleTag) -> String {
        narrative(style, self.era)
    }
}

/// Fixed era text concatenated with fixed style text; same inputs, same
/// string.
pub fn narrative(style: StyleTag, era: CulturalEra) -> String {
    format!("{}{}", era_intro(era), style_summary(style))
}

fn era_intro(era: CulturalEra) -> &'static str {
    match era {
        CulturalEra::Medieval => {
            "In the spirit of the medieval court, where a game mirrored the siege: "
        }
        CulturalEra::Renaissance => {
            "In the spirit of the Renaissance salons, where chess was studied as art and science: "
        }
        CulturalEra::Modern => {
            "In the spirit of the modern tournament hall, clock ticking beside the board: "
        }
        CulturalEra::Ancient => {
            "In the spirit of ancient shatranj, played slowly along the caravan routes: "
        }
    }
}

fn style_summary(style: StyleTag) -> &'static str {
    match style {
        StyleTag::Aggressive => "this player storms forward, trading safety for the initiative.",
        StyleTag::Positional => "this player builds quiet advantages square by square.",
        StyleTag::Tactical => "this player thrives on sharp calculation and sudden strikes.",
        StyleTag::Defensive => "this player weathers every storm and counts on resilience.",
    }
}

/// One entry in a session's append-only cultural log.
#[derive(Clone, Debug, Serialize)]
pub struct CulturalEvent {
    pub kind: String,
    pub timestamp_millis: i64,
    pub description: String,
}

/// Append-only event log owned by one game session.
#[derive(Clone, Debug, Default)]
pub struct CulturalLog {
    events: Vec<CulturalEvent>,
}

impl CulturalLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: &str, description: String) {
        self.events.push(CulturalEvent {
            kind: kind.to_string(),
            timestamp_millis: Utc::now().timestamp_millis(),
            description,
        });
    }

    pub fn events(&self) -> &[CulturalEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
#[path = "cultural_tests.rs"]
mod cultural_tests;
