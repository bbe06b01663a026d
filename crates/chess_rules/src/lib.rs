//! Chess rules collaborator: board state, move legality, FEN.
//!
//! This crate owns everything the style engine treats as external: legal move
//! generation, check/checkmate/draw detection and FEN parsing. Positions are
//! values; applying a move returns a fresh `Position` and never mutates the
//! one handed in.

pub mod board;
pub mod fen;
pub mod movegen;
pub mod notation;
pub mod types;

pub use board::{CastlingRights, IllegalMove, Position};
pub use fen::{parse_fen, to_fen, FenError};
pub use movegen::{is_legal_move, legal_move_count, legal_moves, legal_moves_from};
pub use notation::{move_to_uci, parse_uci_move};
pub use types::*;
