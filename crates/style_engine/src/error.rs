use chess_rules::{FenError, IllegalMove};
use thiserror::Error;

/// Everything the engine surface can fail with. All errors propagate
/// synchronously to the caller; there are no retries and no fallback
/// results.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid FEN: {0}")]
    InvalidFen(#[from] FenError),

    #[error("invalid cultural style '{given}': expected one of medieval, renaissance, modern, ancient")]
    InvalidCulturalStyle { given: String },

    #[error("illegal move rejected: {0}")]
    IllegalMoveRejected(#[from] IllegalMove),
}
