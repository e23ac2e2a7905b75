// Copyright 2017-2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Single-move reachability on an empty board.
//!
//! Nothing here traces rays or looks at blockers: a square is reachable when the piece's movement
//! geometry connects it to the origin. These are supersets of what any concrete position allows.

use std::sync::LazyLock;

use crate::core::*;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

struct ReachTable {
    table: [SquareSet; 64],
}

impl ReachTable {
    fn from_fn(reach: impl Fn(Square) -> SquareSet) -> ReachTable {
        let mut rt = ReachTable {
            table: [SquareSet::empty(); 64],
        };

        for sq in squares() {
            rt.table[sq.as_u8() as usize] = reach(sq);
        }

        rt
    }

    fn from_predicate(connects: fn(Square, Square) -> bool) -> ReachTable {
        ReachTable::from_fn(|from| {
            squares()
                .filter(|&to| to != from && connects(from, to))
                .collect()
        })
    }

    fn knight() -> ReachTable {
        ReachTable::from_fn(|from| knight_jumps(from).collect())
    }

    fn reachable(&self, sq: Square) -> SquareSet {
        self.table[sq.as_u8() as usize]
    }
}

fn straight(from: Square, to: Square) -> bool {
    from.file() == to.file() || from.rank() == to.rank()
}

fn diagonal(from: Square, to: Square) -> bool {
    from.file().distance(to.file()) == from.rank().distance(to.rank())
}

static ROOK_TABLE: LazyLock<ReachTable> = LazyLock::new(|| ReachTable::from_predicate(straight));
static BISHOP_TABLE: LazyLock<ReachTable> = LazyLock::new(|| ReachTable::from_predicate(diagonal));
static KNIGHT_TABLE: LazyLock<ReachTable> = LazyLock::new(ReachTable::knight);

/// Squares sharing a file or a rank with `sq`.
pub fn rook_reachable(sq: Square) -> SquareSet {
    ROOK_TABLE.reachable(sq)
}

/// Squares on either diagonal through `sq`.
pub fn bishop_reachable(sq: Square) -> SquareSet {
    BISHOP_TABLE.reachable(sq)
}

pub fn queen_reachable(sq: Square) -> SquareSet {
    rook_reachable(sq) | bishop_reachable(sq)
}

/// The up to eight squares a knight's jump away from `sq`. Knight moves are symmetric, so this is
/// also the set of squares a knight can arrive at `sq` from.
pub fn knight_reachable(sq: Square) -> SquareSet {
    KNIGHT_TABLE.reachable(sq)
}

/// The squares of [`knight_reachable`], in jump order: (1, 2), (2, 1), (-1, 2), (-2, 1), then the
/// same four with the rank step reversed.
pub fn knight_jumps(sq: Square) -> impl Iterator<Item = Square> {
    KNIGHT_OFFSETS
        .iter()
        .filter_map(move |&(df, dr)| sq.offset(df, dr))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    fn names(set: SquareSet) -> Vec<String> {
        set.into_iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn rook_covers_file_and_rank() {
        let reach = rook_reachable(sq("e5"));
        assert_eq!(14, reach.len());
        assert!(reach.contains(sq("e1")));
        assert!(reach.contains(sq("a5")));
        assert!(!reach.contains(sq("e5")));
        assert!(!reach.contains(sq("d4")));
    }

    #[test]
    fn bishop_covers_diagonals() {
        assert_eq!(7, bishop_reachable(sq("a1")).len());
        assert_eq!(13, bishop_reachable(sq("d4")).len());
        assert_eq!(
            vec!["a1", "e1", "b2", "d2", "b4", "d4", "a5", "e5", "f6", "g7", "h8"],
            names(bishop_reachable(sq("c3")))
        );
        assert!(!bishop_reachable(sq("d4")).contains(sq("d4")));
    }

    #[test]
    fn queen_is_union() {
        for origin in squares() {
            let queen = queen_reachable(origin);
            assert_eq!(queen, rook_reachable(origin) | bishop_reachable(origin));
            assert!(!queen.contains(origin));
        }
        assert_eq!(21, queen_reachable(sq("a1")).len());
        assert_eq!(27, queen_reachable(sq("d4")).len());
    }

    #[test]
    fn knight_jump_targets() {
        assert_eq!(vec!["b3", "c2"], {
            let mut n = names(knight_reachable(sq("a1")));
            n.sort();
            n
        });
        assert_eq!(8, knight_reachable(sq("d4")).len());
        assert_eq!(4, knight_reachable(sq("b7")).len());
    }

    #[test]
    fn knight_jump_order() {
        let jumps: Vec<_> = knight_jumps(sq("d4")).map(|s| s.to_string()).collect();
        assert_eq!(
            vec!["e6", "f5", "c6", "b5", "e2", "f3", "c2", "b3"],
            jumps
        );
        let jumps: Vec<_> = knight_jumps(sq("b2")).map(|s| s.to_string()).collect();
        assert_eq!(vec!["c4", "d3", "a4", "d1"], jumps);
        let set: SquareSet = knight_jumps(sq("d4")).collect();
        assert_eq!(knight_reachable(sq("d4")), set);
    }

    #[test]
    fn knight_reach_is_symmetric() {
        for from in squares() {
            for to in knight_reachable(from) {
                assert!(knight_reachable(to).contains(from), "{} <-> {}", from, to);
            }
        }
    }
}
