use std::fmt;

use crate::error::Error;

/// Number of files and of ranks.
pub const BOARD_SIZE: usize = 9;

pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// A cell of the board, addressed by 0-indexed file and rank.
///
/// A `Square` always lies on the board, so indexing with one cannot go out of
/// range. Build one with [`Square::new`] or `TryFrom` when the coordinates come
/// from outside, and with [`Square::at`] when a bad coordinate is a bug.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    pub fn new(file: usize, rank: usize) -> Option<Square> {
        if file >= BOARD_SIZE || rank >= BOARD_SIZE {
            return None;
        }
        Some(Square {
            file: file as u8,
            rank: rank as u8,
        })
    }

    /// Panics if either coordinate is 9 or more.
    pub const fn at(file: usize, rank: usize) -> Square {
        assert!(
            file < BOARD_SIZE && rank < BOARD_SIZE,
            "Tried to access square that does not exist"
        );
        Square {
            file: file as u8,
            rank: rank as u8,
        }
    }

    pub fn file(&self) -> usize {
        self.file as usize
    }

    pub fn rank(&self) -> usize {
        self.rank as usize
    }

    /// The same square seen from the opposite side of the board.
    pub fn rotate(&self) -> Square {
        Square {
            file: (BOARD_SIZE - 1) as u8 - self.file,
            rank: (BOARD_SIZE - 1) as u8 - self.rank,
        }
    }

    /// All squares, file by file.
    pub fn iter() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|file| (0..BOARD_SIZE).map(move |rank| Square::at(file, rank)))
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = Error;

    fn try_from((file, rank): (usize, usize)) -> Result<Square, Error> {
        Square::new(file, rank).ok_or(Error::SquareOutOfRange { file, rank })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.file, self.rank)
    }
}
