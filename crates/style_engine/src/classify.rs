//! Per-move style classification.
//!
//! Four independent predicates over the (move, before, after) triple; a move
//! may satisfy any subset of them. The tactical probe looks one ply ahead on
//! side-swapped clones, so the caller's positions stay untouched.

use std::collections::BTreeSet;
use std::fmt;

use chess_rules::{legal_moves, Color, Move, Piece, PieceKind, Position};
use serde::{Deserialize, Serialize};

use crate::eval::{pawn_structure_score, piece_value};
use crate::pst;

/// Material threshold (in pawn units) for a capture to count as tactical.
const TACTICAL_VALUE: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleTag {
    Aggressive,
    Positional,
    Tactical,
    Defensive,
}

impl StyleTag {
    pub const ALL: [StyleTag; 4] = [
        StyleTag::Aggressive,
        StyleTag::Positional,
        StyleTag::Tactical,
        StyleTag::Defensive,
    ];

    /// Tie-break order for dominant-style selection.
    pub const PRIORITY: [StyleTag; 4] = [
        StyleTag::Tactical,
        StyleTag::Aggressive,
        StyleTag::Positional,
        StyleTag::Defensive,
    ];

    pub fn idx(self) -> usize {
        match self {
            StyleTag::Aggressive => 0,
            StyleTag::Positional => 1,
            StyleTag::Tactical => 2,
            StyleTag::Defensive => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StyleTag::Aggressive => "aggressive",
            StyleTag::Positional => "positional",
            StyleTag::Tactical => "tactical",
            StyleTag::Defensive => "defensive",
        }
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stateless move classifier.
#[derive(Clone, Copy, Debug, Default)]
pub struct StyleClassifier;

impl StyleClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, mv: Move, before: &Position, after: &Position) -> BTreeSet<StyleTag> {
        let mut tags = BTreeSet::new();
        let mover = before.side_to_move;
        let piece = match before.piece_at(mv.from) {
            Some(p) => p,
            None => return tags,
        };

        if is_aggressive(mv, piece, before, after, mover) {
            tags.insert(StyleTag::Aggressive);
        }
        if is_positional(mv, piece, before, after, mover) {
            tags.insert(StyleTag::Positional);
        }
        if is_tactical(before, after) {
            tags.insert(StyleTag::Tactical);
        }
        if is_defensive(before, after, mover) {
            tags.insert(StyleTag::Defensive);
        }
        tags
    }
}

/// A capture, a check, or a piece (pawns excluded) landing on the full
/// center.
fn is_aggressive(mv: Move, piece: Piece, before: &Position, after: &Position, mover: Color) -> bool {
    before.captured_by(mv).is_some()
        || after.in_check(mover.other())
        || (piece.kind != PieceKind::Pawn && pst::CENTER_SQUARES.contains(&mv.to))
}

/// A placement gain on the piece-square table, an important destination
/// square, or an improved pawn structure for the mover.
fn is_positional(mv: Move, piece: Piece, before: &Position, after: &Position, mover: Color) -> bool {
    if pst::piece_square(piece, mv.to) > pst::piece_square(piece, mv.from) {
        return true;
    }
    if pst::centrality(mv.to) >= 2 {
        return true;
    }
    perspective(pawn_structure_score(after), mover)
        > perspective(pawn_structure_score(before), mover)
}

/// One-ply lookahead: some opponent reply now wins material of value >= 3 on
/// a square where no such capture existed before the move.
fn is_tactical(before: &Position, after: &Position) -> bool {
    let now = capture_squares(after);
    if now.is_empty() {
        return false;
    }
    let prior = capture_squares(&before.side_swapped());
    now.difference(&prior).next().is_some()
}

/// The mover escaped a check, or fewer of the mover's pieces hang than did
/// before.
fn is_defensive(before: &Position, after: &Position, mover: Color) -> bool {
    if before.in_check(mover) && !after.in_check(mover) {
        return true;
    }
    hanging_count(after, mover) < hanging_count(before, mover)
}

fn perspective(white_score: f64, color: Color) -> f64 {
    match color {
        Color::White => white_score,
        Color::Black => -white_score,
    }
}

/// Destination squares of legal replies capturing material worth at least
/// the tactical threshold.
fn capture_squares(pos: &Position) -> BTreeSet<u8> {
    legal_moves(pos)
        .into_iter()
        .filter(|reply| {
            pos.captured_by(*reply)
                .is_some_and(|victim| piece_value(victim.kind) >= TACTICAL_VALUE)
        })
        .map(|reply| reply.to)
        .collect()
}

/// Non-king pieces of `color` attacked at least once and defended zero times.
pub(crate) fn hanging_count(pos: &Position, color: Color) -> usize {
    (0..64u8)
        .filter(|&s| match pos.piece_at(s) {
            Some(p) if p.color == color && p.kind != PieceKind::King => {
                pos.count_attackers(s, color.other()) > 0 && pos.count_attackers(s, color) == 0
            }
            _ => false,
        })
        .count()
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod classify_tests;
