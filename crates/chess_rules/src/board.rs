use thiserror::Error;

use crate::movegen::legal_moves;
use crate::types::*;

/// A move that is not legal in the position it was applied to.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("move {uci} is not legal in this position")]
pub struct IllegalMove {
    pub uci: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub fn all() -> Self {
        Self {
            wk: true,
            wq: true,
            bk: true,
            bq: true,
        }
    }

    pub fn none() -> Self {
        Self {
            wk: false,
            wq: false,
            bk: false,
            bq: false,
        }
    }
}

/// An immutable snapshot of a board plus the auxiliary FEN fields.
///
/// `apply` returns a fresh `Position`; nothing ever mutates a position that
/// has been handed out, so callers may share snapshots freely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>, // square behind a pawn that just advanced 2
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

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

const DIAG_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ORTHO_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

impl Position {
    pub fn startpos() -> Self {
        let mut p = Position {
            board: [None; 64],
            side_to_move: Color::White,
            castling: CastlingRights::all(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        };

        for f in 0..8 {
            p.board[8 + f] = Some(Piece::new(Color::White, PieceKind::Pawn));
            p.board[48 + f] = Some(Piece::new(Color::Black, PieceKind::Pawn));
        }
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            p.board[f] = Some(Piece::new(Color::White, kind));
            p.board[56 + f] = Some(Piece::new(Color::Black, kind));
        }
        p
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }

    fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.board[sq as usize] = pc;
    }

    pub fn king_sq(&self, c: Color) -> Option<u8> {
        (0..64u8).find(|&s| self.piece_at(s) == Some(Piece::new(c, PieceKind::King)))
    }

    /// The piece a move would capture, accounting for en-passant.
    pub fn captured_by(&self, mv: Move) -> Option<Piece> {
        if mv.is_en_passant {
            let dir: i8 = match self.side_to_move {
                Color::White => -1,
                Color::Black => 1,
            };
            sq(file_of(mv.to), rank_of(mv.to) + dir).and_then(|s| self.piece_at(s))
        } else {
            self.piece_at(mv.to)
        }
    }

    pub fn in_check(&self, c: Color) -> bool {
        match self.king_sq(c) {
            Some(ksq) => self.is_square_attacked(ksq, c.other()),
            None => false,
        }
    }

    pub fn is_square_attacked(&self, target: u8, by: Color) -> bool {
        self.count_attackers(target, by) > 0
    }

    /// Counts pieces of `by` attacking `target`. At most one attacker is
    /// counted per ray, so stacked batteries count once.
    pub fn count_attackers(&self, target: u8, by: Color) -> usize {
        let tf = file_of(target);
        let tr = rank_of(target);
        let mut count = 0usize;

        // Pawns attack the target from the rank behind it (relative to `by`).
        let pawn_sources: &[(i8, i8)] = match by {
            Color::White => &[(-1, -1), (1, -1)],
            Color::Black => &[(-1, 1), (1, 1)],
        };
        for &(df, dr) in pawn_sources {
            if let Some(s) = sq(tf + df, tr + dr) {
                if self.piece_at(s) == Some(Piece::new(by, PieceKind::Pawn)) {
                    count += 1;
                }
            }
        }

        for (df, dr) in KNIGHT_DELTAS {
            if let Some(s) = sq(tf + df, tr + dr) {
                if self.piece_at(s) == Some(Piece::new(by, PieceKind::Knight)) {
                    count += 1;
                }
            }
        }

        for (df, dr) in KING_DELTAS {
            if let Some(s) = sq(tf + df, tr + dr) {
                if self.piece_at(s) == Some(Piece::new(by, PieceKind::King)) {
                    count += 1;
                }
            }
        }

        count += self.count_ray_attackers(target, by, &DIAG_DIRS, PieceKind::Bishop);
        count += self.count_ray_attackers(target, by, &ORTHO_DIRS, PieceKind::Rook);
        count
    }

    fn count_ray_attackers(
        &self,
        target: u8,
        by: Color,
        dirs: &[(i8, i8)],
        slider: PieceKind,
    ) -> usize {
        let tf = file_of(target);
        let tr = rank_of(target);
        let mut count = 0usize;
        for &(df, dr) in dirs {
            let mut f = tf + df;
            let mut r = tr + dr;
            while let Some(s) = sq(f, r) {
                if let Some(pc) = self.piece_at(s) {
                    if pc.color == by && (pc.kind == slider || pc.kind == PieceKind::Queen) {
                        count += 1;
                    }
                    break;
                }
                f += df;
                r += dr;
            }
        }
        count
    }

    /// Same board with the side to move flipped and the en-passant target
    /// cleared. Used for mobility counting and the one-ply lookahead; the
    /// receiver is untouched.
    pub fn side_swapped(&self) -> Position {
        let mut swapped = self.clone();
        swapped.side_to_move = self.side_to_move.other();
        swapped.en_passant = None;
        swapped
    }

    /// Applies a move after validating it against the legal-move list,
    /// returning the resulting position. The receiver is never mutated.
    pub fn apply(&self, mv: Move) -> Result<Position, IllegalMove> {
        let canonical = legal_moves(self)
            .into_iter()
            .find(|m| m.from == mv.from && m.to == mv.to && m.promo == mv.promo)
            .ok_or_else(|| IllegalMove {
                uci: crate::notation::move_to_uci(mv),
            })?;
        Ok(self.apply_unchecked(canonical))
    }

    /// Applies a move assumed to come from `legal_moves` (flags included),
    /// producing a new position.
    pub(crate) fn apply_unchecked(&self, mv: Move) -> Position {
        let mut next = self.clone();
        let moved = match self.piece_at(mv.from) {
            Some(p) => p,
            None => return next, // nothing to move; legal moves never hit this
        };
        let mut reset_clock = moved.kind == PieceKind::Pawn || self.piece_at(mv.to).is_some();

        next.en_passant = None;

        // En-passant removes the pawn behind the destination square.
        if mv.is_en_passant {
            let dir: i8 = match moved.color {
                Color::White => -1,
                Color::Black => 1,
            };
            if let Some(cs) = sq(file_of(mv.to), rank_of(mv.to) + dir) {
                next.set_piece(cs, None);
                reset_clock = true;
            }
        }

        next.set_piece(mv.from, None);
        next.set_piece(mv.to, Some(moved));

        // Promotion
        if moved.kind == PieceKind::Pawn {
            let r = rank_of(mv.to);
            if (moved.color == Color::White && r == 7) || (moved.color == Color::Black && r == 0) {
                let promo = mv.promo.unwrap_or(PieceKind::Queen);
                next.set_piece(mv.to, Some(Piece::new(moved.color, promo)));
                reset_clock = true;
            }
        }

        // Castling also relocates the rook.
        if mv.is_castle && moved.kind == PieceKind::King {
            let rook_squares = match (moved.color, mv.from, mv.to) {
                (Color::White, 4, 6) => Some((7u8, 5u8)),
                (Color::White, 4, 2) => Some((0u8, 3u8)),
                (Color::Black, 60, 62) => Some((63u8, 61u8)),
                (Color::Black, 60, 58) => Some((56u8, 59u8)),
                _ => None,
            };
            if let Some((rf, rt)) = rook_squares {
                let rook = next.piece_at(rf);
                next.set_piece(rf, None);
                next.set_piece(rt, rook);
            }
        }

        next.castling = self.castling_after(moved, mv);

        // Double pawn push sets the en-passant target.
        if moved.kind == PieceKind::Pawn {
            let fr = rank_of(mv.from);
            let tr = rank_of(mv.to);
            if (moved.color == Color::White && fr == 1 && tr == 3)
                || (moved.color == Color::Black && fr == 6 && tr == 4)
            {
                next.en_passant = sq(file_of(mv.from), (fr + tr) / 2);
            }
        }

        next.halfmove_clock = if reset_clock {
            0
        } else {
            self.halfmove_clock + 1
        };
        if self.side_to_move == Color::Black {
            next.fullmove_number = self.fullmove_number + 1;
        }
        next.side_to_move = self.side_to_move.other();
        next
    }

    fn castling_after(&self, moved: Piece, mv: Move) -> CastlingRights {
        let mut rights = self.castling;
        match moved.color {
            Color::White => {
                if moved.kind == PieceKind::King {
                    rights.wk = false;
                    rights.wq = false;
                }
                if moved.kind == PieceKind::Rook {
                    if mv.from == 0 {
                        rights.wq = false;
                    }
                    if mv.from == 7 {
                        rights.wk = false;
                    }
                }
            }
            Color::Black => {
                if moved.kind == PieceKind::King {
                    rights.bk = false;
                    rights.bq = false;
                }
                if moved.kind == PieceKind::Rook {
                    if mv.from == 56 {
                        rights.bq = false;
                    }
                    if mv.from == 63 {
                        rights.bk = false;
                    }
                }
            }
        }
        // A rook captured on its home square also loses the right.
        if let Some(captured) = self.piece_at(mv.to) {
            if captured.kind == PieceKind::Rook {
                match captured.color {
                    Color::White => {
                        if mv.to == 0 {
                            rights.wq = false;
                        }
                        if mv.to == 7 {
                            rights.wk = false;
                        }
                    }
                    Color::Black => {
                        if mv.to == 56 {
                            rights.bq = false;
                        }
                        if mv.to == 63 {
                            rights.bk = false;
                        }
                    }
                }
            }
        }
        rights
    }

    pub fn is_checkmate(&self) -> bool {
        self.in_check(self.side_to_move) && legal_moves(self).is_empty()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.in_check(self.side_to_move) && legal_moves(self).is_empty()
    }

    /// Stalemate, an exhausted half-move clock, or bare-king material.
    pub fn is_draw(&self) -> bool {
        if self.halfmove_clock >= 100 {
            return true;
        }
        if self.is_stalemate() {
            return true;
        }
        self.insufficient_material()
    }

    fn insufficient_material(&self) -> bool {
        let mut minors = 0usize;
        for s in 0..64u8 {
            match self.piece_at(s).map(|p| p.kind) {
                None | Some(PieceKind::King) => {}
                Some(PieceKind::Knight) | Some(PieceKind::Bishop) => minors += 1,
                Some(_) => return false,
            }
        }
        minors <= 1
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
