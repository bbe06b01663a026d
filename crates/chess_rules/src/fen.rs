//! Forsyth-Edwards Notation parsing and printing.
//!
//! The standard 6-field grammar is accepted; the two clock fields may be
//! omitted and default to `0 1`, which common test fixtures rely on.

use std::str::FromStr;

use thiserror::Error;

use crate::board::{CastlingRights, Position};
use crate::types::*;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("expected at least 4 FEN fields, found {0}")]
    MissingFields(usize),
    #[error("board section must have 8 ranks, found {0}")]
    RankCount(usize),
    #[error("invalid piece character '{0}'")]
    InvalidPiece(char),
    #[error("rank '{0}' does not describe exactly 8 files")]
    RankWidth(String),
    #[error("invalid side to move '{0}'")]
    InvalidSideToMove(String),
    #[error("invalid castling character '{0}'")]
    InvalidCastling(char),
    #[error("invalid en-passant square '{0}'")]
    InvalidEnPassant(String),
    #[error("invalid halfmove clock '{0}'")]
    InvalidHalfmoveClock(String),
    #[error("invalid fullmove number '{0}'")]
    InvalidFullmoveNumber(String),
}

pub fn parse_fen(fen: &str) -> Result<Position, FenError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(FenError::MissingFields(fields.len()));
    }

    let board = parse_board(fields[0])?;
    let side_to_move = match fields[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => return Err(FenError::InvalidSideToMove(other.to_string())),
    };
    let castling = parse_castling(fields[2])?;
    let en_passant = if fields[3] == "-" {
        None
    } else {
        Some(
            coord_to_sq(fields[3]).ok_or_else(|| FenError::InvalidEnPassant(fields[3].to_string()))?,
        )
    };
    let halfmove_clock = match fields.get(4) {
        Some(s) => s
            .parse()
            .map_err(|_| FenError::InvalidHalfmoveClock(s.to_string()))?,
        None => 0,
    };
    let fullmove_number = match fields.get(5) {
        Some(s) => s
            .parse()
            .map_err(|_| FenError::InvalidFullmoveNumber(s.to_string()))?,
        None => 1,
    };

    Ok(Position {
        board,
        side_to_move,
        castling,
        en_passant,
        halfmove_clock,
        fullmove_number,
    })
}

fn parse_board(section: &str) -> Result<[Option<Piece>; 64], FenError> {
    let ranks: Vec<&str> = section.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount(ranks.len()));
    }

    let mut board = [None; 64];
    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank: i8 = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
        let mut file: i8 = 0;
        for ch in rank_str.chars() {
            if let Some(d) = ch.to_digit(10) {
                file += d as i8;
            } else {
                let kind =
                    PieceKind::from_fen_char(ch).ok_or(FenError::InvalidPiece(ch))?;
                let color = if ch.is_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let square = sq(file, rank)
                    .ok_or_else(|| FenError::RankWidth(rank_str.to_string()))?;
                board[square as usize] = Some(Piece::new(color, kind));
                file += 1;
            }
            if file > 8 {
                return Err(FenError::RankWidth(rank_str.to_string()));
            }
        }
        if file != 8 {
            return Err(FenError::RankWidth(rank_str.to_string()));
        }
    }
    Ok(board)
}

fn parse_castling(section: &str) -> Result<CastlingRights, FenError> {
    let mut rights = CastlingRights::none();
    if section == "-" {
        return Ok(rights);
    }
    for ch in section.chars() {
        match ch {
            'K' => rights.wk = true,
            'Q' => rights.wq = true,
            'k' => rights.bk = true,
            'q' => rights.bq = true,
            other => return Err(FenError::InvalidCastling(other)),
        }
    }
    Ok(rights)
}

pub fn to_fen(pos: &Position) -> String {
    let mut out = String::new();
    for rank in (0..8).rev() {
        let mut empty = 0;
        for file in 0..8 {
            let square = (rank * 8 + file) as u8;
            match pos.piece_at(square) {
                Some(pc) => {
                    if empty > 0 {
                        out.push_str(&empty.to_string());
                        empty = 0;
                    }
                    out.push(pc.to_fen_char());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push_str(&empty.to_string());
        }
        if rank > 0 {
            out.push('/');
        }
    }

    out.push(' ');
    out.push(match pos.side_to_move {
        Color::White => 'w',
        Color::Black => 'b',
    });

    out.push(' ');
    let c = pos.castling;
    if c.wk || c.wq || c.bk || c.bq {
        if c.wk {
            out.push('K');
        }
        if c.wq {
            out.push('Q');
        }
        if c.bk {
            out.push('k');
        }
        if c.bq {
            out.push('q');
        }
    } else {
        out.push('-');
    }

    out.push(' ');
    match pos.en_passant {
        Some(s) => out.push_str(&sq_to_coord(s)),
        None => out.push('-'),
    }

    out.push_str(&format!(" {} {}", pos.halfmove_clock, pos.fullmove_number));
    out
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_fen(s)
    }
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
