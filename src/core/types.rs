// Copyright 2017-2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{convert::TryFrom, fmt, str::FromStr};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SquareParseError {
    #[error("square index out of range: {0}")]
    OutOfRange(u8),
    #[error("invalid square: {0:?}")]
    InvalidFormat(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RankParseError {
    #[error("rank index out of range: {0}")]
    OutOfRange(u8),
    #[error("invalid char: {0}")]
    InvalidChar(char),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FileParseError {
    #[error("file index out of range: {0}")]
    OutOfRange(u8),
    #[error("invalid char: {0}")]
    InvalidChar(char),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PieceParseError {
    #[error("invalid char: {0}")]
    InvalidChar(char),
}

/// A square on the chessboard.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Returns the rank of this square on the chessboard.
    pub const fn rank(self) -> Rank {
        Rank::from_index(self.0 >> 3)
    }

    /// Returns the file of this square on the chessboard.
    pub const fn file(self) -> File {
        File::from_index(self.0 & 7)
    }

    /// Creates a new Square composed of a given rank and file.
    pub const fn of(rank: Rank, file: File) -> Square {
        Square(rank as u8 * 8 + file as u8)
    }

    pub(in crate::core) const fn from_index(index: u8) -> Square {
        Square(index)
    }

    /// Returns the square `file_delta` files and `rank_delta` ranks away, or `None` if that falls off the board.
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Square> {
        let file = self.file().offset(file_delta)?;
        let rank = self.rank().offset(rank_delta)?;
        Some(Square::of(rank, file))
    }

    /// Whether this square sits on both an edge file and an edge rank.
    pub const fn is_corner(self) -> bool {
        self.file().is_edge() && self.rank().is_edge()
    }

    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Square {
    type Error = SquareParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value >= 64 {
            return Err(SquareParseError::OutOfRange(value));
        }

        Ok(Square(value))
    }
}

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareParseError::InvalidFormat(s.to_string());
        let mut chars = s.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file, rank),
            _ => return Err(invalid()),
        };

        let file = File::try_from(file).map_err(|_| invalid())?;
        let rank = Rank::try_from(rank).map_err(|_| invalid())?;
        Ok(Square::of(rank, file))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
}

impl Rank {
    const ALL: [Rank; 8] = [
        Rank::One,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
    ];

    const fn from_index(index: u8) -> Rank {
        Rank::ALL[index as usize]
    }

    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Shifts this rank by `delta`, or `None` if the result is off the board.
    pub fn offset(self, delta: i8) -> Option<Rank> {
        let index = (self as i8).checked_add(delta)?;
        if !(0..8).contains(&index) {
            return None;
        }

        Some(Rank::from_index(index as u8))
    }

    /// Whether this is the first or the eighth rank.
    pub const fn is_edge(self) -> bool {
        matches!(self, Rank::One | Rank::Eight)
    }

    pub fn distance(self, other: Rank) -> u8 {
        (self as i8 - other as i8).unsigned_abs()
    }

    /// Ranks one or two steps away, ascending. These are the only ranks a knight can come from.
    pub fn double_adjacent(self) -> Vec<Rank> {
        [-2, -1, 1, 2]
            .iter()
            .filter_map(|&delta| self.offset(delta))
            .collect()
    }

    /// Pairs of ranks placed symmetrically around this one, `self - i` and `self + i`, for every
    /// distance `i` at which both stay on the board.
    ///
    /// From rank 3 this yields 2, 4, 1, 5. The first and eighth ranks yield nothing.
    pub fn to_edge(self) -> Vec<Rank> {
        let reach = self.as_u8().min(7 - self.as_u8()) as i8;
        (1..=reach)
            .flat_map(|i| [self.offset(-i), self.offset(i)])
            .flatten()
            .collect()
    }
}

impl TryFrom<u8> for Rank {
    type Error = RankParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value >= 8 {
            return Err(RankParseError::OutOfRange(value));
        }

        Ok(Rank::from_index(value))
    }
}

impl TryFrom<char> for Rank {
    type Error = RankParseError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        let rank = match value {
            '1' => Rank::One,
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            c => return Err(RankParseError::InvalidChar(c)),
        };

        Ok(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Rank::One => '1',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
        };

        write!(f, "{}", c)
    }
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl File {
    const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    const fn from_index(index: u8) -> File {
        File::ALL[index as usize]
    }

    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Shifts this file by `delta`, or `None` if the result is off the board.
    pub fn offset(self, delta: i8) -> Option<File> {
        let index = (self as i8).checked_add(delta)?;
        if !(0..8).contains(&index) {
            return None;
        }

        Some(File::from_index(index as u8))
    }

    /// Whether this is the a-file or the h-file.
    pub const fn is_edge(self) -> bool {
        matches!(self, File::A | File::H)
    }

    pub fn distance(self, other: File) -> u8 {
        (self as i8 - other as i8).unsigned_abs()
    }

    /// The one or two files directly beside this one.
    pub fn adjacent(self) -> Vec<File> {
        [-1, 1]
            .iter()
            .filter_map(|&delta| self.offset(delta))
            .collect()
    }

    /// Files one or two steps away, ascending. These are the only files a knight can come from.
    pub fn double_adjacent(self) -> Vec<File> {
        [-2, -1, 1, 2]
            .iter()
            .filter_map(|&delta| self.offset(delta))
            .collect()
    }
}

impl TryFrom<u8> for File {
    type Error = FileParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value >= 8 {
            return Err(FileParseError::OutOfRange(value));
        }

        Ok(File::from_index(value))
    }
}

impl TryFrom<char> for File {
    type Error = FileParseError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        let file = match value {
            'a' => File::A,
            'b' => File::B,
            'c' => File::C,
            'd' => File::D,
            'e' => File::E,
            'f' => File::F,
            'g' => File::G,
            'h' => File::H,
            c => return Err(FileParseError::InvalidChar(c)),
        };

        Ok(file)
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            File::A => 'a',
            File::B => 'b',
            File::C => 'c',
            File::D => 'd',
            File::E => 'e',
            File::F => 'f',
            File::G => 'g',
            File::H => 'h',
        };

        write!(f, "{}", c)
    }
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// The letter SAN writes in front of a move by this piece. Pawns have none.
    pub const fn san_letter(self) -> Option<char> {
        match self {
            PieceKind::Pawn => None,
            PieceKind::Knight => Some('N'),
            PieceKind::Bishop => Some('B'),
            PieceKind::Rook => Some('R'),
            PieceKind::Queen => Some('Q'),
            PieceKind::King => Some('K'),
        }
    }

    /// Human-readable name, as used for catalog section titles.
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        }
    }
}

impl TryFrom<char> for PieceKind {
    type Error = PieceParseError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        let kind = match value {
            'P' => PieceKind::Pawn,
            'N' => PieceKind::Knight,
            'B' => PieceKind::Bishop,
            'R' => PieceKind::Rook,
            'Q' => PieceKind::Queen,
            'K' => PieceKind::King,
            c => return Err(PieceParseError::InvalidChar(c)),
        };

        Ok(kind)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.san_letter().unwrap_or('P'))
    }
}

macro_rules! type_iterator {
    ($name:ident, $type:ident, $max:expr) => {
        pub struct $name(u8, u8);

        impl Iterator for $name {
            type Item = $type;

            fn next(&mut self) -> Option<Self::Item> {
                if self.0 >= self.1 {
                    None
                } else {
                    let next = self.0;
                    self.0 += 1;
                    Some($type::from_index(next))
                }
            }
        }

        impl ::std::iter::DoubleEndedIterator for $name {
            fn next_back(&mut self) -> Option<Self::Item> {
                if self.1 <= self.0 {
                    None
                } else {
                    self.1 -= 1;
                    Some($type::from_index(self.1))
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name(0, $max)
            }
        }
    };
}

type_iterator!(AllSquares, Square, 64);
type_iterator!(AllRanks, Rank, 8);
type_iterator!(AllFiles, File, 8);

pub fn squares() -> AllSquares {
    AllSquares::default()
}

pub fn ranks() -> AllRanks {
    AllRanks::default()
}

pub fn files() -> AllFiles {
    AllFiles::default()
}
