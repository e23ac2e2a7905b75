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
        Disambiguator::File(source_file) => file(source_file, dest),
        Disambiguator::Rank(source_rank) => rank(source_rank, dest),
        Disambiguator::Square(source) => double(source, dest),
    }
}

/// Any file a diagonal through the destination crosses can hold the source. A corner has a
/// single diagonal, which crosses each file once, so no second bishop can share the file.
fn file(source_file: File, dest: Square) -> Verdict {
    if !bishop_reachable(dest).occupied_files().contains(&source_file) {
        return Verdict::Skip;
    }

    if dest.is_corner() {
        return Verdict::Exclude;
    }

    Verdict::Include
}

/// Two bishops on one file that both reach the destination sit at equal distance above and below
/// it, so the destination is off the edge ranks and the source rank has a mirror on the board.
fn rank(source_rank: Rank, dest: Square) -> Verdict {
    if dest.rank().is_edge() {
        return Verdict::Skip;
    }

    if dest.rank().to_edge().contains(&source_rank) {
        Verdict::Include
    } else {
        Verdict::Exclude
    }
}

/// Double disambiguation takes bishops on three corners of an odd square centered on the
/// destination: two sharing a file, two sharing a rank. Any corner of a 3x3, 5x5 or 7x7 square
/// lying fully on the board is a valid source.
fn double(source: Square, dest: Square) -> Verdict {
    let reach = dest.file().distance(source.file());
    if reach == 0 || reach != dest.rank().distance(source.rank()) {
        return Verdict::Skip;
    }

    let reach = reach as i8;
    let fits = [(-reach, -reach), (reach, -reach), (-reach, reach), (reach, reach)]
        .iter()
        .all(|&(df, dr)| dest.offset(df, dr).is_some());
    if fits {
        Verdict::Include
    } else {
        Verdict::Skip
    }
}
