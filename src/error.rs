use thiserror::Error as ThisError;

/// Errors for conversions that take untrusted input.
///
/// Indexing the board with a bad coordinate is a bug and panics instead.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    #[error("square ({file}, {rank}) is off the board")]
    SquareOutOfRange { file: usize, rank: usize },

    #[error("unknown piece glyph {0:?}")]
    UnknownGlyph(char),
}
