use crate::{board::Position, types::*};

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const QUEEN_DIRS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

const PROMO_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Generate all legal moves for the side to move.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for from in 0..64u8 {
        push_piece_moves(pos, from, &mut out);
    }
    retain_legal(pos, &mut out);
    out
}

/// Legal moves that start on the given square.
pub fn legal_moves_from(pos: &Position, from: u8) -> Vec<Move> {
    let mut out = Vec::new();
    push_piece_moves(pos, from, &mut out);
    retain_legal(pos, &mut out);
    out
}

pub fn legal_move_count(pos: &Position) -> usize {
    legal_moves(pos).len()
}

pub fn is_legal_move(pos: &Position, from: u8, to: u8) -> bool {
    legal_moves_from(pos, from).iter().any(|m| m.to == to)
}

/// Drop pseudo-legal moves that leave the mover's own king attacked. Each
/// candidate is tried on a throwaway copy; `pos` is never touched.
fn retain_legal(pos: &Position, out: &mut Vec<Move>) {
    let mover = pos.side_to_move;
    out.retain(|&mv| !pos.apply_unchecked(mv).in_check(mover));
}

fn push_piece_moves(pos: &Position, from: u8, out: &mut Vec<Move>) {
    let pc = match pos.piece_at(from) {
        Some(p) if p.color == pos.side_to_move => p,
        _ => return,
    };
    match pc.kind {
        PieceKind::Pawn => push_pawn_moves(pos, from, pc.color, out),
        PieceKind::Knight => push_leaper_moves(pos, from, pc.color, &KNIGHT_DELTAS, out),
        PieceKind::Bishop => push_slider_moves(pos, from, pc.color, &BISHOP_DIRS, out),
        PieceKind::Rook => push_slider_moves(pos, from, pc.color, &ROOK_DIRS, out),
        PieceKind::Queen => push_slider_moves(pos, from, pc.color, &QUEEN_DIRS, out),
        PieceKind::King => {
            push_leaper_moves(pos, from, pc.color, &KING_DELTAS, out);
            push_castle_moves(pos, from, pc.color, out);
        }
    }
}

fn push_pawn_advance(from: u8, to: u8, out: &mut Vec<Move>) {
    let promo_rank = rank_of(to) == 0 || rank_of(to) == 7;
    if promo_rank {
        for kind in PROMO_KINDS {
            out.push(Move::promoting(from, to, kind));
        }
    } else {
        out.push(Move::new(from, to));
    }
}

fn push_pawn_moves(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    let (dir, start_rank): (i8, i8) = match c {
        Color::White => (1, 1),
        Color::Black => (-1, 6),
    };

    // Single and double advance
    if let Some(to) = sq(f, r + dir) {
        if pos.piece_at(to).is_none() {
            push_pawn_advance(from, to, out);
            if r == start_rank {
                if let Some(to2) = sq(f, r + 2 * dir) {
                    if pos.piece_at(to2).is_none() {
                        out.push(Move::new(from, to2));
                    }
                }
            }
        }
    }

    // Diagonal captures and en-passant
    for df in [-1, 1] {
        if let Some(to) = sq(f + df, r + dir) {
            match pos.piece_at(to) {
                Some(target) if target.color != c => push_pawn_advance(from, to, out),
                None if pos.en_passant == Some(to) => {
                    let mut mv = Move::new(from, to);
                    mv.is_en_passant = true;
                    out.push(mv);
                }
                _ => {}
            }
        }
    }
}

fn push_leaper_moves(pos: &Position, from: u8, c: Color, deltas: &[(i8, i8)], out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    for &(df, dr) in deltas {
        if let Some(to) = sq(f + df, r + dr) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => out.push(Move::new(from, to)),
                _ => {}
            }
        }
    }
}

fn push_slider_moves(pos: &Position, from: u8, c: Color, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    let f0 = file_of(from);
    let r0 = rank_of(from);
    for &(df, dr) in dirs {
        let mut f = f0 + df;
        let mut r = r0 + dr;
        while let Some(to) = sq(f, r) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => {
                    out.push(Move::new(from, to));
                    break;
                }
                _ => break,
            }
            f += df;
            r += dr;
        }
    }
}

struct CastleLane {
    king_from: u8,
    king_to: u8,
    /// Squares between king and rook that must be empty.
    empty: &'static [u8],
    /// Squares the king crosses that must not be attacked.
    safe: &'static [u8],
}

const WHITE_LANES: [CastleLane; 2] = [
    CastleLane {
        king_from: 4,
        king_to: 6,
        empty: &[5, 6],
        safe: &[5, 6],
    },
    CastleLane {
        king_from: 4,
        king_to: 2,
        empty: &[3, 2, 1],
        safe: &[3, 2],
    },
];

const BLACK_LANES: [CastleLane; 2] = [
    CastleLane {
        king_from: 60,
        king_to: 62,
        empty: &[61, 62],
        safe: &[61, 62],
    },
    CastleLane {
        king_from: 60,
        king_to: 58,
        empty: &[59, 58, 57],
        safe: &[59, 58],
    },
];

fn push_castle_moves(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let (lanes, rights) = match c {
        Color::White => (&WHITE_LANES, [pos.castling.wk, pos.castling.wq]),
        Color::Black => (&BLACK_LANES, [pos.castling.bk, pos.castling.bq]),
    };
    if from != lanes[0].king_from || pos.in_check(c) {
        return;
    }
    let enemy = c.other();
    for (lane, allowed) in lanes.iter().zip(rights) {
        if !allowed {
            continue;
        }
        if lane.empty.iter().any(|&s| pos.piece_at(s).is_some()) {
            continue;
        }
        if lane.safe.iter().any(|&s| pos.is_square_attacked(s, enemy)) {
            continue;
        }
        let mut mv = Move::new(lane.king_from, lane.king_to);
        mv.is_castle = true;
        out.push(mv);
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
