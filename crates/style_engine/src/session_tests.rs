use super::*;

use std::cell::RefCell;
use std::rc::Rc;

use crate::events::kind;

#[test]
fn opening_push_is_positional() {
    let mut session = GameSession::new();
    let report = session.play_move("e2e4").unwrap();
    assert_eq!(report.uci, "e2e4");
    assert!(report.tags.contains(&StyleTag::Positional));
    assert!(!report.tags.contains(&StyleTag::Aggressive));
    assert_eq!(report.dominant_style, Some(StyleTag::Positional));
}

#[test]
fn illegal_move_is_rejected_and_changes_nothing() {
    let mut session = GameSession::new();
    let err = session.play_move("e2e5").unwrap_err();
    assert!(matches!(err, EngineError::IllegalMoveRejected(_)));
    assert_eq!(session.position(), &Position::startpos());
    assert_eq!(session.report().metrics.total(), 0.0);
}

#[test]
fn metrics_normalize_across_a_short_game() {
    let mut session = GameSession::new();
    for mv in ["e2e4", "e7e5", "g1f3", "b8c6"] {
        session.play_move(mv).unwrap();
    }
    let report = session.report();
    assert!((report.metrics.total() - 1.0).abs() < 1e-9);
    assert!(report.dominant_style.is_some());
}

#[test]
fn cultural_log_records_one_event_per_tag() {
    let mut session = GameSession::new();
    let mut expected = 0;
    for mv in ["e2e4", "e7e5", "g1f3"] {
        expected += session.play_move(mv).unwrap().tags.len();
    }
    assert_eq!(session.cultural_log().len(), expected);
    assert!(expected > 0);
}

#[test]
fn era_changes_affect_the_adjusted_score_only() {
    let config = EngineConfig {
        era: CulturalEra::Renaissance,
        ..EngineConfig::default()
    };
    let mut session = GameSession::with_config(config);
    let report = session.play_move("e2e4").unwrap();
    assert!((report.adjusted.score - report.evaluation.score * 1.2).abs() < 1e-9);
    assert_eq!(report.adjusted.material, report.evaluation.material);
}

#[test]
fn set_era_publishes_and_logs() {
    let mut session = GameSession::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    session.bus().subscribe(kind::ERA_CHANGED, move |event| {
        if let EngineEvent::EraChanged { era } = event {
            sink.borrow_mut().push(*era);
        }
    });

    session.set_era_name("medieval").unwrap();
    assert_eq!(session.era(), CulturalEra::Medieval);
    assert_eq!(*seen.borrow(), vec![CulturalEra::Medieval]);
    assert_eq!(session.cultural_log().len(), 1);

    let err = session.set_era_name("futuristic").unwrap_err();
    assert!(matches!(err, EngineError::InvalidCulturalStyle { .. }));
    assert_eq!(session.era(), CulturalEra::Medieval);
}

#[test]
fn moves_publish_evaluation_and_classification_events() {
    let mut session = GameSession::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    for k in [kind::POSITION_EVALUATED, kind::MOVE_CLASSIFIED] {
        let sink = Rc::clone(&seen);
        session.bus().subscribe(k, move |event| {
            sink.borrow_mut().push(event.kind());
        });
    }

    session.play_move("e2e4").unwrap();
    assert_eq!(
        *seen.borrow(),
        vec![kind::POSITION_EVALUATED, kind::MOVE_CLASSIFIED]
    );
}

#[test]
fn narrative_appears_once_a_style_exists() {
    let mut session = GameSession::new();
    assert_eq!(session.narrative(), None);
    session.play_move("e2e4").unwrap();
    let text = session.narrative().unwrap();
    assert!(text.contains("this player"));
}

#[test]
fn reset_restores_the_starting_state() {
    let mut session = GameSession::new();
    session.play_move("e2e4").unwrap();
    session.play_move("e7e5").unwrap();
    session.reset();
    assert_eq!(session.position(), &Position::startpos());
    assert_eq!(session.report().metrics.total(), 0.0);
    assert!(session.cultural_log().is_empty());
    assert_eq!(session.narrative(), None);
}

#[test]
fn sessions_share_nothing() {
    let mut a = GameSession::new();
    let b = GameSession::new();
    assert_ne!(a.id(), b.id());
    a.play_move("e2e4").unwrap();
    assert_eq!(b.report().metrics.total(), 0.0);
    assert_eq!(b.position(), &Position::startpos());
}

#[test]
fn session_can_start_from_a_fen() {
    let fen = "4k3/8/8/3p4/4N3/8/8/K7 w - - 0 1";
    let mut session = GameSession::from_fen(fen, EngineConfig::default()).unwrap();
    let report = session.play_move("e4g3").unwrap();
    assert!(report.tags.contains(&StyleTag::Defensive));

    assert!(GameSession::from_fen("not a fen", EngineConfig::default()).is_err());
}
