// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Drives the rule engine over every section and subsection of the catalog, in catalog order.

use crate::catalog::{Catalog, Section, Subsection};
use crate::core::{MoveCategory, PieceKind};
use crate::rules::{self, pawn, RulesError, Ruling, Verdict};

/// Piece sections after castles and pawns, in catalog order.
const PIECES: [PieceKind; 5] = [
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::King,
];

/// Builds the full catalog: Castles, Pawn, Rook, Queen, Knight, Bishop, King.
pub fn build() -> Result<Catalog, RulesError> {
    let _span = tracing::info_span!("build_catalog").entered();
    let mut catalog = Catalog::default();

    let castles = catalog.section("Castles");
    record(castles.subsection("normal"), rules::castles());
    finish(castles);

    let pawns = catalog.section(PieceKind::Pawn.name());
    record(pawns.subsection("normal"), pawn::pushes()?);
    record(pawns.subsection("Pawn captures"), pawn::captures()?);
    record(pawns.subsection("Pawn promotions"), pawn::promotions()?);
    record(
        pawns.subsection("Pawn capture promotions"),
        pawn::capture_promotions()?,
    );
    finish(pawns);

    for kind in PIECES {
        let section = catalog.section(kind.name());
        piece_section(section, kind)?;
        finish(section);
    }

    tracing::info!(
        sections = catalog.sections().len(),
        included = catalog.total(),
        "catalog built"
    );
    Ok(catalog)
}

fn piece_section(section: &mut Section, kind: PieceKind) -> Result<(), RulesError> {
    let name = kind.name();
    record(
        section.subsection("normal"),
        rules::destinations(kind, false),
    );
    record(
        section.subsection(subsection_name(name, MoveCategory::Capture)),
        rules::destinations(kind, true),
    );
    for &category in rules::disambiguations(kind) {
        record(
            section.subsection(subsection_name(name, category)),
            rules::disambiguated(kind, category)?,
        );
    }

    Ok(())
}

fn subsection_name(piece: &str, category: MoveCategory) -> String {
    format!("{} {}", piece, category.label())
}

/// Appends rulings to a subsection in order. Skipped candidates never reach here.
fn record(sub: &mut Subsection, rulings: Vec<Ruling>) {
    for ruling in rulings {
        match ruling.verdict {
            Verdict::Include => sub.include(ruling.san, ruling.check_and_mate),
            Verdict::Exclude => sub.exclude(ruling.san, ruling.check_and_mate),
            Verdict::Skip => {}
        }
    }
}

fn finish(section: &Section) {
    for sub in section.subsections() {
        tracing::debug!(
            section = section.name(),
            subsection = sub.name(),
            included = sub.included().len(),
            excluded = sub.excluded().len(),
            "subsection finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(catalog: &Catalog) -> Vec<&str> {
        catalog.sections().iter().map(Section::name).collect()
    }

    #[test]
    fn section_order() {
        let catalog = build().unwrap();
        assert_eq!(
            vec!["Castles", "Pawn", "Rook", "Queen", "Knight", "Bishop", "King"],
            names(&catalog)
        );
    }

    #[test]
    fn subsection_names() {
        let catalog = build().unwrap();
        let subs = |section: &str| -> Vec<String> {
            catalog
                .find(section)
                .unwrap()
                .subsections()
                .iter()
                .map(|sub| sub.name().to_string())
                .collect()
        };

        assert_eq!(vec!["normal"], subs("Castles"));
        assert_eq!(
            vec![
                "normal",
                "Pawn captures",
                "Pawn promotions",
                "Pawn capture promotions"
            ],
            subs("Pawn")
        );
        assert_eq!(
            vec![
                "normal",
                "Rook captures",
                "Rook file disambiguated",
                "Rook rank disambiguated"
            ],
            subs("Rook")
        );
        assert_eq!(
            vec![
                "normal",
                "Bishop captures",
                "Bishop file disambiguated",
                "Bishop rank disambiguated",
                "Bishop double disambiguated"
            ],
            subs("Bishop")
        );
        assert_eq!(vec!["normal", "King captures"], subs("King"));
    }

    #[test]
    fn castles_are_fully_included() {
        let catalog = build().unwrap();
        let castles = catalog.find("Castles").unwrap().find("normal").unwrap();
        let moves: Vec<String> = castles.included().iter().map(ToString::to_string).collect();
        assert_eq!(
            vec!["O-O", "O-O+", "O-O#", "O-O-O", "O-O-O+", "O-O-O#"],
            moves
        );
        assert!(castles.excluded().is_empty());
    }

    #[test]
    fn king_section_counts() {
        let catalog = build().unwrap();
        let king = catalog.find("King").unwrap();
        assert_eq!(3 * 64, king.find("normal").unwrap().included().len());
        assert_eq!(3 * 64, king.find("King captures").unwrap().included().len());
        assert_eq!(2 * 3 * 64, king.total());
    }

    #[test]
    fn rook_file_section_has_nothing_excluded() {
        let catalog = build().unwrap();
        let rook = catalog.find("Rook").unwrap();
        let file = rook.find("Rook file disambiguated").unwrap();
        assert!(file.excluded().is_empty());
        assert_eq!(3 * 2 * 8 * 64, file.included().len());
    }
}
