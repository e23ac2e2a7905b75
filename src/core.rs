// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Module `core` contains the board coordinates, square sets, reachability geometry and the SAN move type used
//! pervasively throughout `sanspace`.

mod expand;
mod reach;
mod san;
mod squareset;
mod types;

pub use expand::{expand, ExpandError};
pub use reach::{
    bishop_reachable, knight_jumps, knight_reachable, queen_reachable, rook_reachable,
};
pub use san::{CastleSide, Disambiguator, MoveCategory, San, Suffix};
pub use squareset::{SquareSet, SquareSetIterator};
pub use types::{
    files, ranks, squares, AllFiles, AllRanks, AllSquares, File, FileParseError, PieceKind,
    PieceParseError, Rank, RankParseError, Square, SquareParseError,
};
