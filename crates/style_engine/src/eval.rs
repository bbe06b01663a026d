//! Position evaluation: five independent sub-scorers combined by a weighted
//! sum. Every component is white-positive; the caller flips signs if it wants
//! a side-to-move perspective.

use chess_rules::{file_of, legal_move_count, rank_of, sq, Color, PieceKind, Position};
use serde::{Deserialize, Serialize};

use crate::pst;

/// Conventional piece values in pawn units, king excluded.
pub fn piece_value(kind: PieceKind) -> f64 {
    match kind {
        PieceKind::Pawn => 1.0,
        PieceKind::Knight => 3.0,
        PieceKind::Bishop => 3.0,
        PieceKind::Rook => 5.0,
        PieceKind::Queen => 9.0,
        PieceKind::King => 0.0,
    }
}

/// Component weights for the aggregate score.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    pub material: f64,
    pub positional: f64,
    pub mobility: f64,
    pub king_safety: f64,
    pub pawn_structure: f64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            material: 1.0,
            positional: 0.1,
            mobility: 0.1,
            king_safety: 0.2,
            pawn_structure: 0.1,
        }
    }
}

/// Component breakdown plus the weighted aggregate. `score` always equals the
/// weighted sum of the five components under the weights that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub score: f64,
    pub material: f64,
    pub positional: f64,
    pub mobility: f64,
    pub king_safety: f64,
    pub pawn_structure: f64,
}

/// Pure, deterministic position evaluator. Holds only its weights; safe to
/// share across sessions.
#[derive(Clone, Copy, Debug, Default)]
pub struct Evaluator {
    weights: EvalWeights,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: EvalWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> EvalWeights {
        self.weights
    }

    pub fn evaluate(&self, pos: &Position) -> EvaluationResult {
        let material = material_score(pos);
        let positional = positional_score(pos);
        let mobility = mobility_score(pos);
        let king_safety = king_safety_score(pos);
        let pawn_structure = pawn_structure_score(pos);
        let w = self.weights;
        let score = w.material * material
            + w.positional * positional
            + w.mobility * mobility
            + w.king_safety * king_safety
            + w.pawn_structure * pawn_structure;
        EvaluationResult {
            score,
            material,
            positional,
            mobility,
            king_safety,
            pawn_structure,
        }
    }
}

fn signed(value: f64, color: Color) -> f64 {
    match color {
        Color::White => value,
        Color::Black => -value,
    }
}

pub fn material_score(pos: &Position) -> f64 {
    let mut score = 0.0;
    for s in 0..64u8 {
        if let Some(pc) = pos.piece_at(s) {
            score += signed(piece_value(pc.kind), pc.color);
        }
    }
    score
}

pub fn positional_score(pos: &Position) -> f64 {
    let mut score = 0.0;
    for s in 0..64u8 {
        if let Some(pc) = pos.piece_at(s) {
            score += signed(pst::piece_square(pc, s), pc.color);
        }
    }
    score
}

/// White's legal-move count minus Black's, the non-mover counted on a
/// side-swapped clone so the caller's position is never touched.
pub fn mobility_score(pos: &Position) -> f64 {
    let (white_moves, black_moves) = match pos.side_to_move {
        Color::White => (legal_move_count(pos), legal_move_count(&pos.side_swapped())),
        Color::Black => (legal_move_count(&pos.side_swapped()), legal_move_count(pos)),
    };
    white_moves as f64 - black_moves as f64
}

pub fn king_safety_score(pos: &Position) -> f64 {
    side_king_safety(pos, Color::White) - side_king_safety(pos, Color::Black)
}

fn side_king_safety(pos: &Position, color: Color) -> f64 {
    let ksq = match pos.king_sq(color) {
        Some(s) => s,
        None => return 0.0,
    };
    let open = open_adjacent_files(pos, color, ksq) as f64;
    let missing = missing_shield_pawns(pos, color, ksq) as f64;
    let check = if pos.in_check(color) { 1.0 } else { 0.0 };
    -2.0 * open - missing - 3.0 * check
}

/// Files adjacent to (and including) the king's file with no friendly pawn
/// left on them.
fn open_adjacent_files(pos: &Position, color: Color, ksq: u8) -> usize {
    let counts = pawn_file_counts(pos, color);
    let kf = file_of(ksq);
    (kf - 1..=kf + 1)
        .filter(|&f| (0..8).contains(&f) && counts[f as usize] == 0)
        .count()
}

/// Shield squares are the two or three squares one rank ahead of the king;
/// each one lacking a friendly pawn counts as missing.
fn missing_shield_pawns(pos: &Position, color: Color, ksq: u8) -> usize {
    let dir: i8 = match color {
        Color::White => 1,
        Color::Black => -1,
    };
    let kf = file_of(ksq);
    let kr = rank_of(ksq);
    (kf - 1..=kf + 1)
        .filter_map(|f| sq(f, kr + dir))
        .filter(|&s| {
            pos.piece_at(s)
                .map_or(true, |p| !(p.color == color && p.kind == PieceKind::Pawn))
        })
        .count()
}

pub fn pawn_structure_score(pos: &Position) -> f64 {
    side_pawn_structure(pos, Color::White) - side_pawn_structure(pos, Color::Black)
}

fn pawn_file_counts(pos: &Position, color: Color) -> [u8; 8] {
    let mut counts = [0u8; 8];
    for s in 0..64u8 {
        if let Some(pc) = pos.piece_at(s) {
            if pc.color == color && pc.kind == PieceKind::Pawn {
                counts[(s % 8) as usize] += 1;
            }
        }
    }
    counts
}

/// -0.5 per isolated pawn, -0.5 per extra pawn stacked on a file, +1.0 per
/// passed pawn; positive is good for `color`.
fn side_pawn_structure(pos: &Position, color: Color) -> f64 {
    let own = pawn_file_counts(pos, color);
    let mut score = 0.0;

    for count in own {
        if count > 1 {
            score -= 0.5 * f64::from(count - 1);
        }
    }

    for s in 0..64u8 {
        match pos.piece_at(s) {
            Some(pc) if pc.color == color && pc.kind == PieceKind::Pawn => {}
            _ => continue,
        }
        let f = file_of(s);
        let left_empty = f == 0 || own[(f - 1) as usize] == 0;
        let right_empty = f == 7 || own[(f + 1) as usize] == 0;
        if left_empty && right_empty {
            score -= 0.5;
        }
        if is_passed_pawn(pos, color, s) {
            score += 1.0;
        }
    }
    score
}

/// No opposing pawn on the same or an adjacent file strictly ahead of it.
fn is_passed_pawn(pos: &Position, color: Color, pawn_sq: u8) -> bool {
    let enemy = color.other();
    let f = file_of(pawn_sq);
    let r = rank_of(pawn_sq);
    for s in 0..64u8 {
        match pos.piece_at(s) {
            Some(pc) if pc.color == enemy && pc.kind == PieceKind::Pawn => {}
            _ => continue,
        }
        if (file_of(s) - f).abs() > 1 {
            continue;
        }
        let ahead = match color {
            Color::White => rank_of(s) > r,
            Color::Black => rank_of(s) < r,
        };
        if ahead {
            return false;
        }
    }
    true
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
