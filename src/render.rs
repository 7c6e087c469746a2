//! Text presentation of pieces and boards.
//!
//! Glyphs are looked up from the piece value here; the board itself never
//! stores them.

use std::fmt;

use colored::Colorize;

use crate::board::{Board, Space};
use crate::error::Error;
use crate::piece::{Kind, Piece, Side};
use crate::square::BOARD_SIZE;

const EMPTY_GLYPH: char = '・';

// KIF-style marker in front of the second player's pieces.
const WHITE_MARKER: char = 'v';

/// Kanji for a piece. The two kings get different characters.
pub fn glyph(piece: Piece) -> char {
    match piece.kind() {
        Kind::King => match piece.side() {
            Side::Black => '王',
            Side::White => '玉',
        },
        Kind::Rook => '飛',
        Kind::Bishop => '角',
        Kind::GoldGeneral => '金',
        Kind::SilverGeneral => '銀',
        Kind::Knight => '桂',
        Kind::Lance => '香',
        Kind::Pawn => '歩',
        Kind::PromotedRook => '龍',
        Kind::PromotedBishop => '馬',
        Kind::PromotedSilver => '全',
        Kind::PromotedKnight => '圭',
        Kind::PromotedLance => '杏',
    }
}

/// Inverse of [`glyph`]. Both king characters give `Kind::King`.
pub fn kind_from_glyph(c: char) -> Result<Kind, Error> {
    let kind = match c {
        '王' | '玉' => Kind::King,
        '飛' => Kind::Rook,
        '角' => Kind::Bishop,
        '金' => Kind::GoldGeneral,
        '銀' => Kind::SilverGeneral,
        '桂' => Kind::Knight,
        '香' => Kind::Lance,
        '歩' => Kind::Pawn,
        '龍' | '竜' => Kind::PromotedRook,
        '馬' => Kind::PromotedBishop,
        '全' => Kind::PromotedSilver,
        '圭' => Kind::PromotedKnight,
        '杏' => Kind::PromotedLance,
        _ => return Err(Error::UnknownGlyph(c)),
    };
    Ok(kind)
}

fn cell(space: Space) -> String {
    match space {
        Space::Empty => format!(" {}", EMPTY_GLYPH),
        Space::Occupied(piece) if piece.side() == Side::White => {
            format!("{}{}", WHITE_MARKER, glyph(piece))
        }
        Space::Occupied(piece) => format!(" {}", glyph(piece)),
    }
}

fn colored_cell(space: Space) -> String {
    match space {
        Space::Empty => cell(space).dimmed().to_string(),
        Space::Occupied(piece) if piece.side() == Side::White => cell(space).red().to_string(),
        Space::Occupied(_) => cell(space).bold().to_string(),
    }
}

fn rows(board: &Board, render_cell: fn(Space) -> String) -> Vec<String> {
    (0..BOARD_SIZE)
        .map(|rank| {
            (0..BOARD_SIZE)
                .map(|file| render_cell(board.at(file, rank)))
                .collect::<String>()
        })
        .collect()
}

/// Board with terminal colours: White's pieces in red, empty cells dimmed.
pub fn colored(board: &Board) -> String {
    rows(board, colored_cell).join("\n")
}

/// Rank 0 on the first line, file 0 in the first column.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", rows(self, cell).join("\n"))
    }
}
