use std::ops;

use crate::piece::{Kind, Piece, Side};
use crate::square::{Square, BOARD_SIZE};

/// Content of one cell. `Empty` is the only empty marker and never equals an
/// occupied cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Space {
    Empty,
    Occupied(Piece),
}

impl Space {
    pub fn piece(&self) -> Option<Piece> {
        match self {
            Space::Occupied(piece) => Some(*piece),
            Space::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Space::Empty)
    }
}

impl Default for Space {
    fn default() -> Self {
        Space::Empty
    }
}

impl From<Piece> for Space {
    fn from(piece: Piece) -> Self {
        Space::Occupied(piece)
    }
}

// Black's back rank, file 0 to 8. White's is the same read from its side.
const BACK_RANK: [Kind; BOARD_SIZE] = [
    Kind::Lance,
    Kind::Knight,
    Kind::SilverGeneral,
    Kind::GoldGeneral,
    Kind::King,
    Kind::GoldGeneral,
    Kind::SilverGeneral,
    Kind::Knight,
    Kind::Lance,
];

/// The 9×9 grid, indexed `[file][rank]`.
///
/// A new board holds the standard starting position: Black on ranks 0 to 2,
/// White on ranks 6 to 8. Nothing here checks whether a position is legal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    spaces: [[Space; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        let mut board = Board {
            spaces: [[Space::Empty; BOARD_SIZE]; BOARD_SIZE],
        };
        board.place_starting_pieces();
        board
    }

    /// Puts the board back to exactly the state `new` returns.
    pub fn reset(&mut self) {
        self.spaces = [[Space::Empty; BOARD_SIZE]; BOARD_SIZE];
        self.place_starting_pieces();
    }

    fn place_starting_pieces(&mut self) {
        for side in [Side::Black, Side::White] {
            let mut place = |file: usize, rank: usize, kind: Kind| {
                let mut square = Square::at(file, rank);
                if side == Side::White {
                    square = square.rotate();
                }
                self.set_space(square, Space::Occupied(Piece::new(kind, side)));
            };
            for (file, kind) in BACK_RANK.iter().enumerate() {
                place(file, 0, *kind);
            }
            place(1, 1, Kind::Rook);
            place(7, 1, Kind::Bishop);
            for file in 0..BOARD_SIZE {
                place(file, 2, Kind::Pawn);
            }
        }
    }

    pub fn get_space(&self, square: Square) -> Space {
        self.spaces[square.file()][square.rank()]
    }

    pub fn set_space(&mut self, square: Square, space: Space) {
        self.spaces[square.file()][square.rank()] = space;
    }

    /// Empties the square and returns what was on it.
    pub fn take_space(&mut self, square: Square) -> Space {
        std::mem::take(&mut self.spaces[square.file()][square.rank()])
    }

    /// Reads a cell by raw indices. Panics if either index is 9 or more.
    pub fn at(&self, file: usize, rank: usize) -> Space {
        self.get_space(Square::at(file, rank))
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.get_space(square).is_empty()
    }

    /// First square holding `piece`, scanning file by file.
    pub fn find(&self, piece: Piece) -> Option<Square> {
        Square::iter().find(|&square| self.get_space(square) == Space::Occupied(piece))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Square, Space)> + '_ {
        Square::iter().map(move |square| (square, self.get_space(square)))
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.iter()
            .filter_map(|(square, space)| space.piece().map(|piece| (square, piece)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl ops::Index<Square> for Board {
    type Output = Space;

    fn index(&self, square: Square) -> &Space {
        &self.spaces[square.file()][square.rank()]
    }
}

impl ops::IndexMut<Square> for Board {
    fn index_mut(&mut self, square: Square) -> &mut Space {
        &mut self.spaces[square.file()][square.rank()]
    }
}
