//! Board and piece data model for Shogi.
//!
//! The crate holds the 9×9 grid and the piece values that sit on it. It does
//! not know the rules: no legality checks, no move application, no turn order.
//!
//! ```
//! use shogiban::{Board, Kind, Piece, Side, Space};
//!
//! let mut board = Board::new();
//! assert_eq!(board.at(4, 0), Space::Occupied(Piece::new(Kind::King, Side::Black)));
//!
//! board.set_space(shogiban::Square::at(3, 3), Space::Occupied(Piece::new(Kind::Pawn, Side::White)));
//! board.reset();
//! assert_eq!(board.at(3, 3), Space::Empty);
//! ```

extern crate strum;
extern crate strum_macros;

pub mod board;
pub mod error;
pub mod piece;
pub mod render;
pub mod square;

pub use board::{Board, Space};
pub use error::Error;
pub use piece::{Kind, Piece, Side};
pub use square::{Square, BOARD_SIZE, NUM_SQUARES};
