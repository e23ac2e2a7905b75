// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Pawn moves. Pawns are never disambiguated beyond the departure file SAN always writes for a
//! capture, so every pawn notation that fits the board is included.

use super::{RulesError, Ruling};
use crate::core::*;

const PROMOTION_PIECES: &str = "Q,R,B,N";

/// Pushes onto ranks 2 through 7. The first and eighth ranks only take promotions. Colors are not
/// modelled, so rank 2 covers black pushes and rank 7 white ones.
pub fn pushes() -> Result<Vec<Ruling>, RulesError> {
    let mut rulings = vec![];
    for file in files() {
        for rank in expand::<Rank>("2-7")? {
            rulings.push(Ruling::include(San::quiet(
                PieceKind::Pawn,
                Square::of(rank, file),
            )));
        }
    }

    Ok(rulings)
}

/// Captures onto ranks 2 through 7 from a neighboring file. En passant is written like any other
/// capture, so it needs no entries of its own.
pub fn captures() -> Result<Vec<Ruling>, RulesError> {
    let mut rulings = vec![];
    for file in files() {
        for rank in expand::<Rank>("2-7")? {
            for target in file.adjacent() {
                let san = San::pawn_capture(file, Square::of(rank, target));
                rulings.push(Ruling::include(san));
            }
        }
    }

    Ok(rulings)
}

pub fn promotions() -> Result<Vec<Ruling>, RulesError> {
    let mut rulings = vec![];
    for file in files() {
        for rank in expand::<Rank>("1,8")? {
            for piece in expand::<PieceKind>(PROMOTION_PIECES)? {
                let san = San::quiet(PieceKind::Pawn, Square::of(rank, file)).promoting(piece);
                rulings.push(Ruling::include(san));
            }
        }
    }

    Ok(rulings)
}

pub fn capture_promotions() -> Result<Vec<Ruling>, RulesError> {
    let mut rulings = vec![];
    for file in files() {
        for rank in expand::<Rank>("1,8")? {
            for target in file.adjacent() {
                for piece in expand::<PieceKind>(PROMOTION_PIECES)? {
                    let san = San::pawn_capture(file, Square::of(rank, target)).promoting(piece);
                    rulings.push(Ruling::include(san));
                }
            }
        }
    }

    Ok(rulings)
}
