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
        Disambiguator::Rank(source_rank) => {
            // Nothing lies beyond the first or eighth rank, so two rooks on the destination file
            // can't both reach an edge square, and rooks on the edge rank differ by file.
            if dest.rank().is_edge() {
                return Verdict::Exclude;
            }

            // A rook already on the destination rank is always named by its file instead.
            if source_rank == dest.rank() {
                return Verdict::Exclude;
            }

            // The rook lands on a fresh square with open lines, so it may check from there.
            Verdict::Include
        }
        Disambiguator::Square(_) => Verdict::Skip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn any_file_is_fine() {
        for file in files() {
            assert_eq!(Verdict::Include, judge(Disambiguator::File(file), sq("a1")));
        }
    }

    #[test]
    fn rank_disambiguation_never_targets_edge_ranks() {
        for file in files() {
            for rank in ranks() {
                let edge1 = Square::of(Rank::One, file);
                let edge8 = Square::of(Rank::Eight, file);
                assert_eq!(Verdict::Exclude, judge(Disambiguator::Rank(rank), edge1));
                assert_eq!(Verdict::Exclude, judge(Disambiguator::Rank(rank), edge8));
            }
        }
    }

    #[test]
    fn rank_disambiguation_needs_another_rank() {
        assert_eq!(
            Verdict::Exclude,
            judge(Disambiguator::Rank(Rank::Three), sq("a3"))
        );
        assert_eq!(
            Verdict::Include,
            judge(Disambiguator::Rank(Rank::One), sq("a2"))
        );
        assert_eq!(
            Verdict::Include,
            judge(Disambiguator::Rank(Rank::Eight), sq("h7"))
        );
    }

    #[test]
    fn no_double_disambiguation() {
        assert_eq!(
            Verdict::Skip,
            judge(Disambiguator::Square(sq("a1")), sq("a4"))
        );
    }
}
