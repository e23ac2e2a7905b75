// Copyright 2017-2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::core::*;
use std::fmt;

/// The qualifier SAN writes between the piece letter and the destination when more than one
/// piece of a kind could make the move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Disambiguator {
    File(File),
    Rank(Rank),
    Square(Square),
}

impl Disambiguator {
    /// The move category a move qualified by this disambiguator falls into.
    pub fn category(self) -> MoveCategory {
        match self {
            Disambiguator::File(_) => MoveCategory::FileDisambiguated,
            Disambiguator::Rank(_) => MoveCategory::RankDisambiguated,
            Disambiguator::Square(_) => MoveCategory::DoubleDisambiguated,
        }
    }
}

impl fmt::Display for Disambiguator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Disambiguator::File(file) => write!(f, "{}", file),
            Disambiguator::Rank(rank) => write!(f, "{}", rank),
            Disambiguator::Square(square) => write!(f, "{}", square),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MoveCategory {
    Plain,
    Capture,
    FileDisambiguated,
    RankDisambiguated,
    DoubleDisambiguated,
    Promotion,
    CapturePromotion,
    CastleKingside,
    CastleQueenside,
}

impl MoveCategory {
    /// Lowercase label, as used in catalog subsection titles.
    pub const fn label(self) -> &'static str {
        match self {
            MoveCategory::Plain => "normal",
            MoveCategory::Capture => "captures",
            MoveCategory::FileDisambiguated => "file disambiguated",
            MoveCategory::RankDisambiguated => "rank disambiguated",
            MoveCategory::DoubleDisambiguated => "double disambiguated",
            MoveCategory::Promotion => "promotions",
            MoveCategory::CapturePromotion => "capture promotions",
            MoveCategory::CastleKingside => "kingside castles",
            MoveCategory::CastleQueenside => "queenside castles",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Suffix {
    Check,
    Mate,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum Body {
    Castle(CastleSide),
    Piece {
        kind: PieceKind,
        from: Option<Disambiguator>,
        capture: bool,
        dest: Square,
        promotion: Option<PieceKind>,
    },
}

/// A move written in Standard Algebraic Notation.
///
/// A `San` is purely notational: it knows nothing about the position it would be played in, and
/// constructing one makes no claim that the move is legal anywhere. `Display` renders the text.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct San {
    body: Body,
    suffix: Option<Suffix>,
}

impl San {
    pub fn castle(side: CastleSide) -> San {
        San {
            body: Body::Castle(side),
            suffix: None,
        }
    }

    /// A move with no disambiguation, like `Nf3` or `e4`.
    pub fn quiet(kind: PieceKind, dest: Square) -> San {
        San {
            body: Body::Piece {
                kind,
                from: None,
                capture: false,
                dest,
                promotion: None,
            },
            suffix: None,
        }
    }

    /// A capture with no disambiguation, like `Nxf3`.
    pub fn capture(kind: PieceKind, dest: Square) -> San {
        San::quiet(kind, dest).capturing()
    }

    /// A disambiguated move, like `Rad1`, `N1xb3` or `Qh4e1`.
    pub fn disambiguated(kind: PieceKind, from: Disambiguator, dest: Square) -> San {
        San {
            body: Body::Piece {
                kind,
                from: Some(from),
                capture: false,
                dest,
                promotion: None,
            },
            suffix: None,
        }
    }

    /// A pawn capture, like `exd5`. SAN always names the departure file of a capturing pawn.
    pub fn pawn_capture(from: File, dest: Square) -> San {
        San::disambiguated(PieceKind::Pawn, Disambiguator::File(from), dest).capturing()
    }

    /// This move, marked as a capture.
    pub fn capturing(self) -> San {
        match self.body {
            Body::Castle(_) => self,
            Body::Piece {
                kind,
                from,
                dest,
                promotion,
                ..
            } => San {
                body: Body::Piece {
                    kind,
                    from,
                    capture: true,
                    dest,
                    promotion,
                },
                suffix: self.suffix,
            },
        }
    }

    /// This move, promoting to `promotion`.
    pub fn promoting(self, promotion: PieceKind) -> San {
        match self.body {
            Body::Castle(_) => self,
            Body::Piece {
                kind,
                from,
                capture,
                dest,
                ..
            } => San {
                body: Body::Piece {
                    kind,
                    from,
                    capture,
                    dest,
                    promotion: Some(promotion),
                },
                suffix: self.suffix,
            },
        }
    }

    pub fn with_suffix(self, suffix: Suffix) -> San {
        San {
            body: self.body,
            suffix: Some(suffix),
        }
    }

    /// This move with any check or mate suffix removed.
    pub fn base(self) -> San {
        San {
            body: self.body,
            suffix: None,
        }
    }

    /// The checking and mating forms of this move, in that order.
    pub fn variants(self) -> [San; 2] {
        [self.with_suffix(Suffix::Check), self.with_suffix(Suffix::Mate)]
    }

    /// The shorthand a game record reduces this move to: piece, destination and promotion, without
    /// disambiguation, capture mark or suffix. Castles keep their token.
    pub fn normalized(self) -> San {
        match self.body {
            Body::Castle(_) => self.base(),
            Body::Piece {
                kind,
                dest,
                promotion,
                ..
            } => {
                let quiet = San::quiet(kind, dest);
                match promotion {
                    Some(promotion) => quiet.promoting(promotion),
                    None => quiet,
                }
            }
        }
    }

    pub fn category(self) -> MoveCategory {
        match self.body {
            Body::Castle(CastleSide::Kingside) => MoveCategory::CastleKingside,
            Body::Castle(CastleSide::Queenside) => MoveCategory::CastleQueenside,
            Body::Piece {
                kind: PieceKind::Pawn,
                capture,
                promotion,
                ..
            } => match (capture, promotion.is_some()) {
                (false, false) => MoveCategory::Plain,
                (true, false) => MoveCategory::Capture,
                (false, true) => MoveCategory::Promotion,
                (true, true) => MoveCategory::CapturePromotion,
            },
            Body::Piece {
                from: Some(from), ..
            } => from.category(),
            Body::Piece { capture: true, .. } => MoveCategory::Capture,
            Body::Piece { .. } => MoveCategory::Plain,
        }
    }

    /// The moving piece, or `None` for castles.
    pub fn piece(self) -> Option<PieceKind> {
        match self.body {
            Body::Castle(_) => None,
            Body::Piece { kind, .. } => Some(kind),
        }
    }

    /// The destination square, or `None` for castles.
    pub fn destination(self) -> Option<Square> {
        match self.body {
            Body::Castle(_) => None,
            Body::Piece { dest, .. } => Some(dest),
        }
    }

    pub fn disambiguator(self) -> Option<Disambiguator> {
        match self.body {
            Body::Castle(_) => None,
            Body::Piece { from, .. } => from,
        }
    }

    pub fn is_capture(self) -> bool {
        matches!(self.body, Body::Piece { capture: true, .. })
    }

    pub fn promotion(self) -> Option<PieceKind> {
        match self.body {
            Body::Castle(_) => None,
            Body::Piece { promotion, .. } => promotion,
        }
    }

    pub fn suffix(self) -> Option<Suffix> {
        self.suffix
    }
}

impl fmt::Display for San {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.body {
            Body::Castle(CastleSide::Kingside) => write!(f, "O-O")?,
            Body::Castle(CastleSide::Queenside) => write!(f, "O-O-O")?,
            Body::Piece {
                kind,
                from,
                capture,
                dest,
                promotion,
            } => {
                if let Some(letter) = kind.san_letter() {
                    write!(f, "{}", letter)?;
                }
                if let Some(from) = from {
                    write!(f, "{}", from)?;
                }
                if capture {
                    write!(f, "x")?;
                }
                write!(f, "{}", dest)?;
                if let Some(promotion) = promotion {
                    write!(f, "={}", promotion)?;
                }
            }
        }

        match self.suffix {
            Some(Suffix::Check) => write!(f, "+"),
            Some(Suffix::Mate) => write!(f, "#"),
            None => Ok(()),
        }
    }
}
