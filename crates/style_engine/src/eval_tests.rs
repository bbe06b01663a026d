use super::*;
use chess_rules::parse_fen;

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn evaluation_is_bit_identical_across_calls() {
    let pos = parse_fen(KIWIPETE).unwrap();
    let evaluator = Evaluator::new();
    let a = evaluator.evaluate(&pos);
    let b = evaluator.evaluate(&pos);
    assert_eq!(a.score.to_bits(), b.score.to_bits());
    assert_eq!(a.material.to_bits(), b.material.to_bits());
    assert_eq!(a.positional.to_bits(), b.positional.to_bits());
    assert_eq!(a.mobility.to_bits(), b.mobility.to_bits());
    assert_eq!(a.king_safety.to_bits(), b.king_safety.to_bits());
    assert_eq!(a.pawn_structure.to_bits(), b.pawn_structure.to_bits());
}

#[test]
fn starting_position_is_balanced() {
    let pos = parse_fen(START_FEN).unwrap();
    let result = Evaluator::new().evaluate(&pos);
    assert_close(result.material, 0.0);
    assert_close(result.positional, 0.0);
    assert_close(result.mobility, 0.0);
    assert_close(result.king_safety, 0.0);
    assert_close(result.pawn_structure, 0.0);
    assert_close(result.score, 0.0);
}

#[test]
fn material_counts_pawn_units() {
    // White is up a queen for a rook.
    let pos = parse_fen("4k3/8/8/8/8/8/8/r2QK3 w - - 0 1").unwrap();
    assert_close(material_score(&pos), 4.0);
}

#[test]
fn score_is_the_weighted_component_sum() {
    let weights = EvalWeights::default();
    let pos = parse_fen(KIWIPETE).unwrap();
    let r = Evaluator::with_weights(weights).evaluate(&pos);
    let expected = weights.material * r.material
        + weights.positional * r.positional
        + weights.mobility * r.mobility
        + weights.king_safety * r.king_safety
        + weights.pawn_structure * r.pawn_structure;
    assert_eq!(r.score.to_bits(), expected.to_bits());
}

#[test]
fn custom_weights_change_only_the_aggregate() {
    let pos = parse_fen(KIWIPETE).unwrap();
    let default = Evaluator::new().evaluate(&pos);
    let heavy = Evaluator::with_weights(EvalWeights {
        material: 2.0,
        ..EvalWeights::default()
    })
    .evaluate(&pos);
    assert_eq!(default.material.to_bits(), heavy.material.to_bits());
    assert_close(heavy.score - default.score, default.material);
}

#[test]
fn mobility_favours_the_developed_side() {
    // Lone black king against king and queen.
    let pos = parse_fen("k7/8/8/8/8/8/8/K2Q4 w - - 0 1").unwrap();
    assert_close(mobility_score(&pos), 20.0);
}

#[test]
fn mobility_is_white_positive_for_either_mover() {
    // Same board, black to move: the sign must not flip.
    let white_turn = parse_fen("k7/8/8/8/8/8/8/K2Q4 w - - 0 1").unwrap();
    let black_turn = parse_fen("k7/8/8/8/8/8/8/K2Q4 b - - 0 1").unwrap();
    assert_close(mobility_score(&white_turn), mobility_score(&black_turn));
}

#[test]
fn doubled_and_isolated_pawns_are_penalized() {
    // Two stacked, isolated, passed white e-pawns: -0.5 doubled, -1.0
    // isolated, +2.0 passed.
    let pos = parse_fen("4k3/8/8/8/8/4P3/4P3/4K3 w - - 0 1").unwrap();
    assert_close(pawn_structure_score(&pos), 0.5);
}

#[test]
fn passed_pawns_earn_their_bonus() {
    let pos = parse_fen("4k3/8/8/8/8/8/3PP3/4K3 w - - 0 1").unwrap();
    assert_close(pawn_structure_score(&pos), 2.0);
}

#[test]
fn opposing_pawns_block_the_passer() {
    let pos = parse_fen("4k3/8/8/8/4p3/8/3PP3/4K3 w - - 0 1").unwrap();
    // White's connected d2/e2 pawns are neither isolated nor passed (the e4
    // pawn stands ahead); Black's lone e4 pawn is isolated and blocked by
    // d2, so only its -0.5 remains.
    assert_close(pawn_structure_score(&pos), 0.5);
}

#[test]
fn black_pawn_structure_counts_negative() {
    let pos = parse_fen("4k3/4p3/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    assert_close(pawn_structure_score(&pos), -0.5);
}

#[test]
fn exposed_king_is_penalized() {
    // Black keeps a full shield; White's king stands bare: three open files
    // and three missing shield pawns.
    let pos = parse_fen("4k3/3ppp2/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    assert_close(king_safety_score(&pos), -9.0);
}

#[test]
fn check_costs_three() {
    // Rook on e4 checks the white king; d2/f2 pawns keep two shield squares
    // and two closed files.
    let pos = parse_fen("4k3/8/8/8/4r3/8/3P1P2/4K3 w - - 0 1").unwrap();
    // White: 1 open file (e), 1 missing shield pawn (e2), in check -> -6.
    // Black: 3 open files, 3 missing shield pawns -> -9.
    assert_close(king_safety_score(&pos), 3.0);
}

#[test]
fn evaluate_never_mutates_the_position() {
    let pos = parse_fen(KIWIPETE).unwrap();
    let copy = pos.clone();
    let _ = Evaluator::new().evaluate(&pos);
    assert_eq!(pos, copy);
}
