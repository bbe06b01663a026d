//! In-process synchronous publish/subscribe.
//!
//! Replaces ad-hoc global event dispatch with an explicit bus keyed by
//! event-kind string. Delivery is synchronous and in publish order; handlers
//! for one kind run in subscription order. Nothing is persisted and nothing
//! crosses session boundaries.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use serde::Serialize;

use crate::classify::StyleTag;
use crate::cultural::CulturalEra;
use crate::eval::EvaluationResult;

/// Event-kind strings used as subscription keys.
pub mod kind {
    pub const POSITION_EVALUATED: &str = "position_evaluated";
    pub const MOVE_CLASSIFIED: &str = "move_classified";
    pub const ERA_CHANGED: &str = "era_changed";
    pub const SESSION_RESET: &str = "session_reset";
}

#[derive(Clone, Debug, Serialize)]
pub enum EngineEvent {
    PositionEvaluated {
        fen: String,
        result: EvaluationResult,
    },
    MoveClassified {
        uci: String,
        tags: BTreeSet<StyleTag>,
    },
    EraChanged {
        era: CulturalEra,
    },
    SessionReset,
}

impl EngineEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            EngineEvent::PositionEvaluated { .. } => kind::POSITION_EVALUATED,
            EngineEvent::MoveClassified { .. } => kind::MOVE_CLASSIFIED,
            EngineEvent::EraChanged { .. } => kind::ERA_CHANGED,
            EngineEvent::SessionReset => kind::SESSION_RESET,
        }
    }
}

type Handler = Box<dyn FnMut(&EngineEvent)>;

#[derive(Default)]
pub struct EventBus {
    handlers: HashMap<String, Vec<Handler>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, kind: &str, handler: F)
    where
        F: FnMut(&EngineEvent) + 'static,
    {
        self.handlers
            .entry(kind.to_string())
            .or_default()
            .push(Box::new(handler));
    }

    pub fn publish(&mut self, event: &EngineEvent) {
        if let Some(handlers) = self.handlers.get_mut(event.kind()) {
            for handler in handlers.iter_mut() {
                handler(event);
            }
        }
    }

    pub fn subscriber_count(&self, kind: &str) -> usize {
        self.handlers.get(kind).map_or(0, Vec::len)
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<(&str, usize)> = self
            .handlers
            .iter()
            .map(|(k, v)| (k.as_str(), v.len()))
            .collect();
        kinds.sort_unstable();
        f.debug_struct("EventBus").field("handlers", &kinds).finish()
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
