use shogiban::{render, Board, Kind};

fn main() {
    let board = Board::new();
    println!("{}", render::colored(&board));
    println!();
    for (square, piece) in board.pieces() {
        if piece.kind() == Kind::King {
            println!("{} - {}", square, piece);
        }
    }
}
