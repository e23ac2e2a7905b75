// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::collections::HashSet;

use sanspace::builder;
use sanspace::catalog::{Catalog, Subsection};
use sanspace::core::{Disambiguator, File, PieceKind, Rank, San, Square};
use sanspace::normalize;
use sanspace::render;

fn catalog() -> Catalog {
    builder::build().unwrap()
}

fn subsection<'a>(catalog: &'a Catalog, section: &str, name: &str) -> &'a Subsection {
    catalog.find(section).unwrap().find(name).unwrap()
}

fn bases(moves: &[San]) -> impl Iterator<Item = &San> {
    moves.iter().filter(|san| san.suffix().is_none())
}

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

#[test]
fn suffixed_forms_follow_their_base() {
    let catalog = catalog();
    for section in catalog.sections() {
        for sub in section.subsections() {
            let included: HashSet<San> = sub.included().iter().copied().collect();
            let excluded: HashSet<San> = sub.excluded().iter().copied().collect();
            for base in bases(sub.included()) {
                for variant in base.variants() {
                    assert!(included.contains(&variant), "{} missing from {}", variant, sub.name());
                    assert!(!excluded.contains(&variant), "{} excluded in {}", variant, sub.name());
                }
            }
            for base in bases(sub.excluded()) {
                for variant in base.variants() {
                    assert!(excluded.contains(&variant), "{} missing from {}", variant, sub.name());
                    assert!(!included.contains(&variant), "{} included in {}", variant, sub.name());
                }
            }
        }
    }
}

#[test]
fn included_and_excluded_are_disjoint() {
    let catalog = catalog();
    for section in catalog.sections() {
        for sub in section.subsections() {
            let included: HashSet<San> = sub.included().iter().copied().collect();
            for san in sub.excluded() {
                assert!(!included.contains(san), "{} is in both lists of {}", san, sub.name());
            }
        }
    }
}

#[test]
fn rook_rank_moves_avoid_edges_and_own_rank() {
    let catalog = catalog();
    let sub = subsection(&catalog, "Rook", "Rook rank disambiguated");
    assert!(!sub.included().is_empty());
    for san in sub.included() {
        let dest = san.destination().unwrap();
        assert!(!dest.rank().is_edge(), "{}", san);
        match san.disambiguator() {
            Some(Disambiguator::Rank(from)) => assert_ne!(from, dest.rank(), "{}", san),
            other => panic!("unexpected disambiguator {:?} on {}", other, san),
        }
    }
}

#[test]
fn knight_double_moves_stay_off_the_rim() {
    let catalog = catalog();
    let sub = subsection(&catalog, "Knight", "Knight double disambiguated");
    for san in sub.included().iter().chain(sub.excluded()) {
        let dest = san.destination().unwrap();
        assert!(!dest.file().is_edge(), "{}", san);
        assert!(!dest.rank().is_edge(), "{}", san);
    }

    let excluded: HashSet<Square> = sub
        .excluded()
        .iter()
        .filter_map(|san| san.destination())
        .collect();
    let cramped: HashSet<Square> = ["b2", "b7", "g2", "g7"].iter().map(|s| sq(s)).collect();
    assert_eq!(cramped, excluded);
    assert!(sub
        .included()
        .iter()
        .all(|san| !cramped.contains(&san.destination().unwrap())));
}

#[test]
fn bishop_file_moves_never_reach_corners() {
    let catalog = catalog();
    let sub = subsection(&catalog, "Bishop", "Bishop file disambiguated");
    assert!(!sub.included().is_empty());
    for san in sub.included() {
        assert!(!san.destination().unwrap().is_corner(), "{}", san);
    }
}

#[test]
fn edge_distances() {
    assert!(Rank::One.to_edge().is_empty());
    assert!(Rank::Eight.to_edge().is_empty());
    assert_eq!(6, Rank::Four.to_edge().len());
    let mut three = Rank::Three.to_edge();
    three.sort();
    assert_eq!(vec![Rank::One, Rank::Two, Rank::Four, Rank::Five], three);
    assert_eq!(vec![File::B, File::C], File::A.double_adjacent());
}

#[test]
fn base_move_counts() {
    let catalog = catalog();
    let count = |section: &str, name: &str| {
        bases(subsection(&catalog, section, name).included()).count()
    };
    assert_eq!(48, count("Pawn", "normal"));
    assert_eq!(64, count("King", "normal"));
    assert_eq!(64, count("King", "King captures"));
}

#[test]
fn pawn_subsections_match_their_shape() {
    let catalog = catalog();
    let shapes = [
        ("normal", false, false),
        ("Pawn captures", true, false),
        ("Pawn promotions", false, true),
        ("Pawn capture promotions", true, true),
    ];
    for (name, capture, promotion) in shapes {
        let sub = subsection(&catalog, "Pawn", name);
        for san in sub.included() {
            assert_eq!(Some(PieceKind::Pawn), san.piece(), "{}", san);
            assert_eq!(capture, san.is_capture(), "{}", san);
            assert_eq!(promotion, san.promotion().is_some(), "{}", san);
        }
    }

    let under = subsection(&catalog, "Pawn", "Pawn promotions");
    let pieces: HashSet<PieceKind> = under
        .included()
        .iter()
        .filter_map(|san| san.promotion())
        .collect();
    assert_eq!(4, pieces.len());
    assert!(!pieces.contains(&PieceKind::King));
}

#[test]
fn included_moves_normalize() {
    let catalog = catalog();
    for section in catalog.sections() {
        for sub in section.subsections() {
            for san in sub.included() {
                let text = san.to_string();
                let normalized = normalize::normalize(&text).unwrap();
                assert_eq!(san.normalized().to_string(), normalized, "{}", text);
            }
        }
    }
}

#[test]
fn plain_castles() {
    let mut catalog = catalog();
    catalog.retain_sections(&["castles"]);
    let mut out = vec![];
    render::write_plain(&mut out, &catalog).unwrap();
    assert_eq!(
        "O-O\nO-O+\nO-O#\nO-O-O\nO-O-O+\nO-O-O#\n",
        String::from_utf8(out).unwrap()
    );
}
