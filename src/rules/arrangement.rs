// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Placements of odd-sized squares on the board, used to enumerate doubly disambiguated bishop
//! moves.

use thiserror::Error;

use crate::core::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArrangementError {
    #[error("only odd dimensions allowed, got {0}")]
    EvenDimension(u8),
    #[error("only dimensions 3-7 allowed, got {0}")]
    DimensionOutOfRange(u8),
}

/// A `dim` x `dim` square lying fully on the board, described by its center and its four corners.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SquareArrangement {
    pub center: Square,
    /// Lower left, lower right, upper left, upper right.
    pub corners: [Square; 4],
}

/// Every placement of a `dim` x `dim` square on the board, sliding it file by file and, within a
/// file, rank by rank. Only odd dimensions have a center square, and 3, 5 and 7 are the only odd
/// squares with four distinct corners that fit.
pub fn arrange_square(dim: u8) -> Result<Vec<SquareArrangement>, ArrangementError> {
    if dim % 2 == 0 {
        return Err(ArrangementError::EvenDimension(dim));
    }

    if !(3..=7).contains(&dim) {
        return Err(ArrangementError::DimensionOutOfRange(dim));
    }

    let half = (dim / 2) as i8;
    let slack = (8 - dim) as i8;
    let mut placements = vec![];
    for file_start in 0..=slack {
        for rank_start in 0..=slack {
            placements.extend(placement(file_start + half, rank_start + half, half));
        }
    }

    Ok(placements)
}

fn placement(center_file: i8, center_rank: i8, half: i8) -> Option<SquareArrangement> {
    let center = Square::of(Rank::One, File::A).offset(center_file, center_rank)?;
    let corner = |df, dr| center.offset(df, dr);
    Some(SquareArrangement {
        center,
        corners: [
            corner(-half, -half)?,
            corner(half, -half)?,
            corner(-half, half)?,
            corner(half, half)?,
        ],
    })
}
