// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Rules deciding which SAN strings can ever appear in a game.
//!
//! Everything here reasons about worst-case board occupancy: a disambiguated move is included if
//! *some* arrangement of same-kind pieces would make a simpler notation ambiguous, and the stated
//! source could actually reach the destination. No concrete position is ever consulted, so the
//! output is a notation-space approximation and not a legality test.
//!
//! Each piece kind keeps its disambiguation rules in its own submodule. `judge` dispatches to
//! them; `disambiguated` walks a subsection's candidate domain and records a [`Ruling`] for every
//! candidate the rules do not skip.

pub mod arrangement;
mod bishop;
mod knight;
pub mod pawn;
mod queen;
mod rook;

use thiserror::Error;

use crate::core::*;
use arrangement::ArrangementError;

#[derive(Debug, Error)]
pub enum RulesError {
    #[error(transparent)]
    Expand(#[from] ExpandError),
    #[error(transparent)]
    Arrangement(#[from] ArrangementError),
}

/// What the rules say about one candidate move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The notation can be required in some game.
    Include,
    /// The notation is well-formed but a simpler one always suffices, or it can never arise.
    Exclude,
    /// The candidate lies outside the subsection's domain and is not reported at all.
    Skip,
}

/// A candidate move together with its verdict and whether its `+`/`#` forms can occur.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Ruling {
    pub san: San,
    pub verdict: Verdict,
    pub check_and_mate: bool,
}

impl Ruling {
    fn new(san: San, verdict: Verdict) -> Ruling {
        Ruling {
            san,
            verdict,
            check_and_mate: checks_possible(san.piece(), san.category()),
        }
    }

    pub(crate) fn include(san: San) -> Ruling {
        Ruling::new(san, Verdict::Include)
    }
}

/// Rules on a disambiguated move by `kind` towards `dest`.
pub fn judge(kind: PieceKind, from: Disambiguator, dest: Square) -> Verdict {
    match kind {
        PieceKind::Rook => rook::judge(from, dest),
        PieceKind::Queen => queen::judge(from, dest),
        PieceKind::Knight => knight::judge(from, dest),
        PieceKind::Bishop => bishop::judge(from, dest),
        // There is only ever one king per side, and pawns are only qualified by file when they
        // capture, which the pawn rules spell out directly.
        PieceKind::King | PieceKind::Pawn => Verdict::Skip,
    }
}

/// Whether a move of this kind and category can carry a `+` or `#` suffix.
///
/// Every category the catalog includes can. A disambiguated piece lands on a square from which it
/// may attack the enemy king directly, and a king, which never gives check itself, can uncover a
/// line piece standing behind its old square wherever it lands.
pub fn checks_possible(kind: Option<PieceKind>, category: MoveCategory) -> bool {
    match (kind, category) {
        (None, MoveCategory::CastleKingside | MoveCategory::CastleQueenside) => true,
        (None, _) => false,
        (Some(_), _) => true,
    }
}

/// The disambiguation subsections a piece kind has, in catalog order.
pub fn disambiguations(kind: PieceKind) -> &'static [MoveCategory] {
    match kind {
        // Any two rooks that both reach a square are told apart by file or by rank alone.
        PieceKind::Rook => &[
            MoveCategory::FileDisambiguated,
            MoveCategory::RankDisambiguated,
        ],
        PieceKind::Queen | PieceKind::Knight | PieceKind::Bishop => &[
            MoveCategory::FileDisambiguated,
            MoveCategory::RankDisambiguated,
            MoveCategory::DoubleDisambiguated,
        ],
        PieceKind::King | PieceKind::Pawn => &[],
    }
}

/// The two castling tokens.
pub fn castles() -> Vec<Ruling> {
    vec![
        Ruling::include(San::castle(CastleSide::Kingside)),
        Ruling::include(San::castle(CastleSide::Queenside)),
    ]
}

/// Undisambiguated moves (or captures) by `kind` to every square of the board.
pub fn destinations(kind: PieceKind, capture: bool) -> Vec<Ruling> {
    let mut rulings = Vec::with_capacity(64);
    for file in files() {
        for rank in ranks() {
            let san = San::quiet(kind, Square::of(rank, file));
            let san = if capture { san.capturing() } else { san };
            rulings.push(Ruling::include(san));
        }
    }

    rulings
}

/// Rules on every candidate of one disambiguation subsection. Each candidate contributes its quiet
/// form and then its capture form.
pub fn disambiguated(kind: PieceKind, category: MoveCategory) -> Result<Vec<Ruling>, RulesError> {
    let mut rulings = vec![];
    for (from, dest) in candidates(kind, category)? {
        debug_assert_eq!(category, from.category());
        let verdict = judge(kind, from, dest);
        if verdict == Verdict::Skip {
            continue;
        }

        let san = San::disambiguated(kind, from, dest);
        rulings.push(Ruling::new(san, verdict));
        rulings.push(Ruling::new(san.capturing(), verdict));
    }

    Ok(rulings)
}

/// The candidate domain of a disambiguation subsection, in catalog order.
fn candidates(
    kind: PieceKind,
    category: MoveCategory,
) -> Result<Vec<(Disambiguator, Square)>, RulesError> {
    let mut out = vec![];
    match (kind, category) {
        (PieceKind::Rook | PieceKind::Queen, MoveCategory::FileDisambiguated) => {
            for from in files() {
                out.extend(file_major().map(|dest| (Disambiguator::File(from), dest)));
            }
        }
        (PieceKind::Rook, MoveCategory::RankDisambiguated) => {
            for from in ranks() {
                out.extend(file_major().map(|dest| (Disambiguator::Rank(from), dest)));
            }
        }
        (PieceKind::Queen, MoveCategory::DoubleDisambiguated) => {
            for from in file_major() {
                let reach = queen_reachable(from);
                out.extend(
                    file_major()
                        .filter(|&dest| reach.contains(dest))
                        .map(|dest| (Disambiguator::Square(from), dest)),
                );
            }
        }
        (PieceKind::Knight, MoveCategory::DoubleDisambiguated) => {
            for dest in file_major() {
                out.extend(knight_jumps(dest).map(|from| (Disambiguator::Square(from), dest)));
            }
        }
        (PieceKind::Bishop, MoveCategory::DoubleDisambiguated) => {
            for dim in [3, 5, 7] {
                for placement in arrangement::arrange_square(dim)? {
                    for corner in placement.corners {
                        out.push((Disambiguator::Square(corner), placement.center));
                    }
                }
            }
        }
        (_, MoveCategory::FileDisambiguated) => {
            for dest in file_major() {
                out.extend(files().map(|from| (Disambiguator::File(from), dest)));
            }
        }
        (_, MoveCategory::RankDisambiguated) => {
            for dest in file_major() {
                out.extend(ranks().map(|from| (Disambiguator::Rank(from), dest)));
            }
        }
        _ => {}
    }

    Ok(out)
}

/// Every square file by file: a1, a2, ..., a8, b1, ...
fn file_major() -> impl Iterator<Item = Square> {
    files().flat_map(|file| ranks().map(move |rank| Square::of(rank, file)))
}
