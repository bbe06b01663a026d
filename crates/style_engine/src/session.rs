//! Game-session facade: one position, one aggregator, one cultural log.
//!
//! Sessions are shared-nothing; running several games concurrently means one
//! `GameSession` per game with no state in common. The evaluator, classifier
//! and modifier are injected components with no session state of their own.

use std::collections::BTreeSet;

use chess_rules::{parse_fen, parse_uci_move, to_fen, IllegalMove, Position};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::classify::{StyleClassifier, StyleTag};
use crate::config::EngineConfig;
use crate::cultural::{narrative, CulturalEra, CulturalLog, CulturalModifier};
use crate::error::EngineError;
use crate::eval::{EvaluationResult, Evaluator};
use crate::events::{EngineEvent, EventBus};
use crate::style::{recommendations, StyleAggregator, StyleMetrics};

/// Outcome of one played move.
#[derive(Clone, Debug, Serialize)]
pub struct MoveReport {
    pub uci: String,
    pub tags: BTreeSet<StyleTag>,
    /// Raw evaluation of the resulting position.
    pub evaluation: EvaluationResult,
    /// The same evaluation after the cultural-era re-weighting.
    pub adjusted: EvaluationResult,
    pub dominant_style: Option<StyleTag>,
}

/// Running style picture of a session.
#[derive(Clone, Debug, Serialize)]
pub struct SessionReport {
    pub metrics: StyleMetrics,
    pub dominant_style: Option<StyleTag>,
    pub recommendations: Vec<String>,
}

pub struct GameSession {
    id: Uuid,
    start: Position,
    position: Position,
    evaluator: Evaluator,
    classifier: StyleClassifier,
    modifier: CulturalModifier,
    aggregator: StyleAggregator,
    log: CulturalLog,
    bus: EventBus,
}

impl GameSession {
    /// Session from the standard starting position with default config.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self::from_position(Position::startpos(), config)
    }

    /// Session starting from an arbitrary FEN.
    pub fn from_fen(fen: &str, config: EngineConfig) -> Result<Self, EngineError> {
        Ok(Self::from_position(parse_fen(fen)?, config))
    }

    fn from_position(position: Position, config: EngineConfig) -> Self {
        let id = Uuid::new_v4();
        info!(session = %id, era = %config.era, "session started");
        Self {
            id,
            start: position.clone(),
            position,
            evaluator: Evaluator::with_weights(config.weights),
            classifier: StyleClassifier::new(),
            modifier: CulturalModifier::new(config.era),
            aggregator: StyleAggregator::new(),
            log: CulturalLog::new(),
            bus: EventBus::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn era(&self) -> CulturalEra {
        self.modifier.era()
    }

    pub fn cultural_log(&self) -> &CulturalLog {
        &self.log
    }

    /// The bus external collaborators subscribe on.
    pub fn bus(&mut self) -> &mut EventBus {
        &mut self.bus
    }

    /// Validates and plays one move, then runs the full pipeline: evaluate,
    /// classify, aggregate, re-weight, log and publish.
    pub fn play_move(&mut self, uci: &str) -> Result<MoveReport, EngineError> {
        let mv = parse_uci_move(&self.position, uci).ok_or_else(|| IllegalMove {
            uci: uci.to_string(),
        })?;
        let before = self.position.clone();
        let after = before.apply(mv)?;

        let evaluation = self.evaluator.evaluate(&after);
        let tags = self.classifier.classify(mv, &before, &after);
        self.aggregator.ingest(&tags);
        let adjusted = self.modifier.modify(&evaluation);

        let canonical = chess_rules::move_to_uci(mv);
        for tag in &tags {
            self.log
                .record(tag.name(), format!("{canonical} classified as {tag}"));
        }

        let fen_after = to_fen(&after);
        self.bus.publish(&EngineEvent::PositionEvaluated {
            fen: fen_after,
            result: adjusted,
        });
        self.bus.publish(&EngineEvent::MoveClassified {
            uci: canonical.clone(),
            tags: tags.clone(),
        });

        self.position = after;
        debug!(
            session = %self.id,
            mv = %canonical,
            score = adjusted.score,
            tag_count = tags.len(),
            "move played"
        );

        Ok(MoveReport {
            uci: canonical,
            tags,
            evaluation,
            adjusted,
            dominant_style: self.aggregator.dominant_style(),
        })
    }

    /// Era-adjusted evaluation of the current position.
    pub fn evaluate_position(&self) -> EvaluationResult {
        self.modifier.modify(&self.evaluator.evaluate(&self.position))
    }

    pub fn set_era(&mut self, era: CulturalEra) {
        self.modifier.set_era(era);
        self.log
            .record("era", format!("cultural era set to {era}"));
        self.bus.publish(&EngineEvent::EraChanged { era });
        info!(session = %self.id, era = %era, "era changed");
    }

    /// String-keyed variant; unknown names fail with `InvalidCulturalStyle`.
    pub fn set_era_name(&mut self, name: &str) -> Result<(), EngineError> {
        let era: CulturalEra = name.parse()?;
        self.set_era(era);
        Ok(())
    }

    /// Narrative for the current dominant style, once one exists.
    pub fn narrative(&self) -> Option<String> {
        self.aggregator
            .dominant_style()
            .map(|style| narrative(style, self.modifier.era()))
    }

    pub fn report(&self) -> SessionReport {
        let metrics = self.aggregator.metrics();
        SessionReport {
            dominant_style: self.aggregator.dominant_style(),
            recommendations: recommendations(&metrics),
            metrics,
        }
    }

    /// Back to the session's starting position with cleared counters and
    /// log. Subscriptions on the bus survive.
    pub fn reset(&mut self) {
        self.position = self.start.clone();
        self.aggregator.reset();
        self.log.clear();
        self.bus.publish(&EngineEvent::SessionReset);
        info!(session = %self.id, "session reset");
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
