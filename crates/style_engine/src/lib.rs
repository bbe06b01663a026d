//! Position evaluation and play-style classification.
//!
//! The core has three stateless services: an [`Evaluator`] scoring positions
//! across five components, a [`StyleClassifier`] tagging moves as aggressive,
//! positional, tactical or defensive, and a [`CulturalModifier`] re-weighting
//! scores and rendering narrative per era. A [`GameSession`] composes them
//! with a per-game [`StyleAggregator`], cultural log and [`EventBus`].
//!
//! Move legality, check detection and FEN live in the `chess_rules` crate;
//! this crate never implements chess rules itself.

pub mod classify;
pub mod config;
pub mod cultural;
pub mod error;
pub mod eval;
pub mod events;
pub mod pst;
pub mod session;
pub mod style;

use std::collections::BTreeSet;

use chess_rules::IllegalMove;

pub use classify::{StyleClassifier, StyleTag};
pub use config::EngineConfig;
pub use cultural::{narrative, CulturalEra, CulturalEvent, CulturalLog, CulturalModifier};
pub use error::EngineError;
pub use eval::{EvalWeights, EvaluationResult, Evaluator};
pub use events::{EngineEvent, EventBus};
pub use session::{GameSession, MoveReport, SessionReport};
pub use style::{recommendation_for, recommendations, StyleAggregator, StyleMetrics};

// Re-exported so hosts can build positions without importing the rules crate
// directly.
pub use chess_rules::{parse_fen, to_fen, Move, Position};

/// Evaluates a FEN position with default weights.
pub fn evaluate(fen: &str) -> Result<EvaluationResult, EngineError> {
    let pos = parse_fen(fen)?;
    Ok(Evaluator::new().evaluate(&pos))
}

/// Classifies one move given the positions before and after it. The move
/// must be legal in the before-position.
pub fn classify_move(
    fen_before: &str,
    uci: &str,
    fen_after: &str,
) -> Result<BTreeSet<StyleTag>, EngineError> {
    let before = parse_fen(fen_before)?;
    let after = parse_fen(fen_after)?;
    let mv = chess_rules::parse_uci_move(&before, uci).ok_or_else(|| IllegalMove {
        uci: uci.to_string(),
    })?;
    Ok(StyleClassifier::new().classify(mv, &before, &after))
}

/// String-keyed narrative lookup; era names outside the four valid values
/// fail with `InvalidCulturalStyle`.
pub fn narrative_for(style: StyleTag, era_name: &str) -> Result<String, EngineError> {
    let era: CulturalEra = era_name.parse()?;
    Ok(narrative(style, era))
}
