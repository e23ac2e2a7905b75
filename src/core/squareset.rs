// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::core::{self, File, Rank, Square};
use std::iter::FromIterator;
use std::ops;

const FILE_A_BITS: u64 = 0x0101010101010101;
const RANK_1_BITS: u64 = 0x00000000000000FF;

/// A set of squares on the chessboard. The implementation of SquareSet is designed to mirror
/// [`std::collections::HashSet`], but stores all 64 squares in a single word.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SquareSet(u64);

impl SquareSet {
    /// Creates a new, empty SquareSet.
    pub const fn empty() -> SquareSet {
        SquareSet(0)
    }

    /// Every square on the given file.
    pub const fn of_file(file: File) -> SquareSet {
        SquareSet(FILE_A_BITS << file.as_u8())
    }

    /// Every square on the given rank.
    pub const fn of_rank(rank: Rank) -> SquareSet {
        SquareSet(RANK_1_BITS << (rank.as_u8() * 8))
    }

    /// Tests whether or not the given square is contained within this SquareSet.
    pub const fn contains(&self, square: Square) -> bool {
        self.0 & (1u64 << square.as_u8()) != 0
    }

    pub fn insert(&mut self, square: Square) {
        self.0 |= 1u64 << square.as_u8();
    }

    pub const fn len(&self) -> u32 {
        self.0.count_ones()
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// The files holding at least one square of this set, ascending.
    pub fn occupied_files(self) -> Vec<File> {
        core::files()
            .filter(|&file| !(self & SquareSet::of_file(file)).is_empty())
            .collect()
    }

    /// The ranks holding at least one square of this set, ascending.
    pub fn occupied_ranks(self) -> Vec<Rank> {
        core::ranks()
            .filter(|&rank| !(self & SquareSet::of_rank(rank)).is_empty())
            .collect()
    }
}

impl ops::BitOr for SquareSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        SquareSet(self.0 | rhs.0)
    }
}

impl ops::BitAnd for SquareSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        SquareSet(self.0 & rhs.0)
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::empty();
        for square in iter {
            set.insert(square);
        }

        set
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIterator;

    fn into_iter(self) -> Self::IntoIter {
        SquareSetIterator(self.0)
    }
}

/// An iterator over squares stored in a [`SquareSet`], in ascending index order (a1, b1, ..., h8).
pub struct SquareSetIterator(u64);

impl Iterator for SquareSetIterator {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            None
        } else {
            let next = self.0.trailing_zeros() as u8;
            self.0 &= self.0 - 1;
            Some(Square::from_index(next))
        }
    }
}
