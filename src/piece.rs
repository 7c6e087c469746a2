use std::fmt;

use strum_macros::{Display, EnumCount, EnumIter, EnumString};

/// Which player a piece belongs to. Black moves first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
pub enum Side {
    Black = 0,
    White = 1,
}

impl Side {
    pub fn flip(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }
}

/// What a piece is, promoted kinds included.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, EnumString)]
pub enum Kind {
    King,
    Rook,
    Bishop,
    GoldGeneral,
    SilverGeneral,
    Knight,
    Lance,
    Pawn,
    PromotedRook,
    PromotedBishop,
    PromotedSilver,
    PromotedKnight,
    PromotedLance,
}

impl Kind {
    /// The promoted counterpart, if this kind has one.
    ///
    /// There is no promoted pawn kind, so `Pawn` returns `None` like the
    /// kinds that never promote.
    pub fn promote(self) -> Option<Kind> {
        match self {
            Kind::Rook => Some(Kind::PromotedRook),
            Kind::Bishop => Some(Kind::PromotedBishop),
            Kind::SilverGeneral => Some(Kind::PromotedSilver),
            Kind::Knight => Some(Kind::PromotedKnight),
            Kind::Lance => Some(Kind::PromotedLance),
            _ => None,
        }
    }

    pub fn unpromote(self) -> Option<Kind> {
        match self {
            Kind::PromotedRook => Some(Kind::Rook),
            Kind::PromotedBishop => Some(Kind::Bishop),
            Kind::PromotedSilver => Some(Kind::SilverGeneral),
            Kind::PromotedKnight => Some(Kind::Knight),
            Kind::PromotedLance => Some(Kind::Lance),
            _ => None,
        }
    }

    pub fn can_promote(self) -> bool {
        self.promote().is_some()
    }

    pub fn is_promoted(self) -> bool {
        self.unpromote().is_some()
    }
}

/// A piece value: kind plus side.
///
/// Pieces are compared and hashed by value. Promoting or switching sides
/// produces a new `Piece`; an existing one never changes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: Kind,
    side: Side,
}

impl Piece {
    pub const fn new(kind: Kind, side: Side) -> Piece {
        Piece { kind, side }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn promoted(&self) -> Option<Piece> {
        self.kind.promote().map(|kind| Piece::new(kind, self.side))
    }

    pub fn unpromoted(&self) -> Option<Piece> {
        self.kind.unpromote().map(|kind| Piece::new(kind, self.side))
    }

    pub fn flipped(&self) -> Piece {
        Piece::new(self.kind, self.side.flip())
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.side, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;
    use std::hash::{Hash, Hasher};
    use std::str::FromStr;

    use strum::{EnumCount, IntoEnumIterator};

    fn hash_of(piece: &Piece) -> u64 {
        let mut hasher = DefaultHasher::new();
        piece.hash(&mut hasher);
        hasher.finish()
    }

    fn all_pieces() -> Vec<Piece> {
        Kind::iter()
            .flat_map(|kind| Side::iter().map(move |side| Piece::new(kind, side)))
            .collect()
    }

    #[test]
    fn separately_built_pieces_are_equal() {
        let a = Piece::new(Kind::Pawn, Side::Black);
        let b = Piece::new(Kind::Pawn, Side::Black);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn side_matters() {
        assert_ne!(Piece::new(Kind::Rook, Side::Black), Piece::new(Kind::Rook, Side::White));
    }

    #[test]
    fn equality_is_structural() {
        let pieces = all_pieces();
        for a in &pieces {
            assert_eq!(a, a);
            for b in &pieces {
                let same = (a.kind(), a.side()) == (b.kind(), b.side());
                assert_eq!(same, a == b, "{} vs {}", a, b);
                assert_eq!(a == b, b == a);
                if a == b {
                    assert_eq!(hash_of(a), hash_of(b));
                }
            }
        }
    }

    #[test]
    fn usable_as_set_member() {
        let mut set: HashSet<Piece> = all_pieces().into_iter().collect();
        assert_eq!(Kind::COUNT * 2, set.len());
        assert!(!set.insert(Piece::new(Kind::King, Side::White)));
    }

    #[test]
    fn every_pair_is_constructible() {
        // Rules are not checked here, two black kings are fine.
        let a = Piece::new(Kind::King, Side::Black);
        let b = Piece::new(Kind::King, Side::Black);
        assert_eq!(a, b);
        assert_eq!(26, all_pieces().len());
    }

    #[test]
    fn display() {
        assert_eq!("Black King", Piece::new(Kind::King, Side::Black).to_string());
        assert_eq!("White GoldGeneral", Piece::new(Kind::GoldGeneral, Side::White).to_string());
        assert_eq!("White PromotedLance", Piece::new(Kind::PromotedLance, Side::White).to_string());
    }

    #[test]
    fn parse_names() {
        assert_eq!(Ok(Kind::SilverGeneral), Kind::from_str("SilverGeneral"));
        assert_eq!(Ok(Side::White), Side::from_str("White"));
        assert!(Kind::from_str("Queen").is_err());
    }

    #[test]
    fn promotion_makes_a_new_value() {
        let silver = Piece::new(Kind::SilverGeneral, Side::White);
        let promoted = silver.promoted().unwrap();
        assert_eq!(Kind::SilverGeneral, silver.kind());
        assert_eq!(Piece::new(Kind::PromotedSilver, Side::White), promoted);
        assert_eq!(Some(silver), promoted.unpromoted());
    }

    #[test]
    fn promote_unpromote() {
        for kind in Kind::iter() {
            if let Some(promoted) = kind.promote() {
                assert!(promoted.is_promoted());
                assert_eq!(Some(kind), promoted.unpromote());
            }
            assert!(!(kind.can_promote() && kind.is_promoted()));
        }
        assert_eq!(None, Kind::Pawn.promote());
        assert_eq!(None, Kind::GoldGeneral.promote());
        assert_eq!(None, Kind::King.promote());
        assert_eq!(5, Kind::iter().filter(|k| k.is_promoted()).count());
    }

    #[test]
    fn flip() {
        assert_eq!(Side::White, Side::Black.flip());
        assert_eq!(Side::Black, Side::White.flip());
        let knight = Piece::new(Kind::Knight, Side::Black);
        assert_eq!(Piece::new(Kind::Knight, Side::White), knight.flipped());
        assert_eq!(knight, knight.flipped().flipped());
    }
}
