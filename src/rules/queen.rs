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
        Disambiguator::File(_) => Verdict::Include,
        Disambiguator::Rank(source_rank) => rank(source_rank, dest),
        Disambiguator::Square(source) => double(source, dest),
    }
}

/// Moving to the first or eighth rank, a queen on the destination file is named by file like a rook
/// would be. Every other source reaches the edge along the destination rank or a diagonal, so only
/// the destination rank itself and the ranks of its diagonals remain. Queen to e1 can come from
/// ranks 1 through 5, never 6, 7 or 8.
fn rank(source_rank: Rank, dest: Square) -> Verdict {
    if dest.rank().is_edge() {
        let diagonal_ranks = bishop_reachable(dest).occupied_ranks();
        if source_rank != dest.rank() && !diagonal_ranks.contains(&source_rank) {
            return Verdict::Exclude;
        }
    }

    Verdict::Include
}

/// A queen on an edge destination's own line along that edge is always named by a single
/// coordinate. Into a corner, sharing either the file or the rank rules the double form out.
fn double(source: Square, dest: Square) -> Verdict {
    if !queen_reachable(source).contains(dest) {
        return Verdict::Skip;
    }

    let same_file = source.file() == dest.file();
    let same_rank = source.rank() == dest.rank();
    let redundant = match (dest.file().is_edge(), dest.rank().is_edge()) {
        (true, true) => same_file || same_rank,
        (false, true) => same_file,
        (true, false) => same_rank,
        (false, false) => false,
    };

    if redundant {
        Verdict::Exclude
    } else {
        Verdict::Include
    }
}
