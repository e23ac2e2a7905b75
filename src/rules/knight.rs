// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use super::Verdict;
use crate::core::*;

pub(super) fn judge(from: Disambiguator, dest: Square) -> Verdict {
    match from {
        // Knights only ever come from one or two files away.
        Disambiguator::File(source_file) => {
            if dest.file().double_adjacent().contains(&source_file) {
                Verdict::Include
            } else {
                Verdict::Skip
            }
        }
        Disambiguator::Rank(source_rank) => rank(source_rank, dest),
        Disambiguator::Square(source) => double(source, dest),
    }
}

/// Rank disambiguation needs two knights on one file that both jump to the destination, one above
/// and one below it. That only fits when the destination is off the first and eighth ranks. The
/// a- and h-files are fine: N1a2 can be told apart from a knight on c3.
fn rank(source_rank: Rank, dest: Square) -> Verdict {
    if dest.rank().is_edge() {
        return Verdict::Skip;
    }

    if dest.rank().double_adjacent().contains(&source_rank) {
        Verdict::Include
    } else {
        Verdict::Skip
    }
}

/// Double disambiguation needs knights on three corners of a 5x3 rectangle centered on the
/// destination. The short side falls off the board on the outer rim, and on b2, b7, g2 and g7 the
/// long side does not fit in either orientation.
fn double(source: Square, dest: Square) -> Verdict {
    if dest.file().is_edge() || dest.rank().is_edge() {
        return Verdict::Skip;
    }

    if !knight_reachable(dest).contains(source) {
        return Verdict::Skip;
    }

    let cramped = matches!(dest.file(), File::B | File::G)
        && matches!(dest.rank(), Rank::Two | Rank::Seven);
    if cramped {
        return Verdict::Exclude;
    }

    Verdict::Include
}
