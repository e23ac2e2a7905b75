// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Text renderings of a catalog: a colored report and a plain list of included moves.

use std::io::{self, Write};

use crate::catalog::{Catalog, Subsection};
use crate::core::San;

const RED: &str = "\x1B[31m";
const GREEN: &str = "\x1B[32m";
const GRAY: &str = "\x1B[90m";
const RESET: &str = "\x1B[0m";

const SEPARATOR: &str = "  ";
const ELLIPSIS: &str = " ... ";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Shorten long move lists to their first and last `context` entries.
    pub short: bool,
    pub color: bool,
    pub context: usize,
}

impl Default for RenderOptions {
    fn default() -> RenderOptions {
        RenderOptions {
            short: false,
            color: true,
            context: 8,
        }
    }
}

/// Writes every included move, one per line, in catalog order.
pub fn write_plain<W: Write>(out: &mut W, catalog: &Catalog) -> io::Result<()> {
    for section in catalog.sections() {
        for sub in section.subsections() {
            for san in sub.included() {
                writeln!(out, "{}", san)?;
            }
        }
    }

    Ok(())
}

/// Writes the full report: section and subsection headers with counts, the included moves of each
/// subsection and, when there are any, its excluded moves.
pub fn write_report<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    options: &RenderOptions,
) -> io::Result<()> {
    let paint = |color: &'static str| if options.color { color } else { "" };
    let reset = paint(RESET);

    for section in catalog.sections() {
        writeln!(
            out,
            "{}# {}  ({}){}",
            paint(RED),
            section.name(),
            section.total(),
            reset
        )?;
        for sub in section.subsections() {
            write_subsection(out, sub, options, paint(GREEN), paint(GRAY), reset)?;
        }
        writeln!(out)?;
    }

    Ok(())
}

fn write_subsection<W: Write>(
    out: &mut W,
    sub: &Subsection,
    options: &RenderOptions,
    header: &str,
    dim: &str,
    reset: &str,
) -> io::Result<()> {
    writeln!(
        out,
        "{}## {}  ({}){}",
        header,
        sub.name(),
        sub.included().len(),
        reset
    )?;
    writeln!(out, "{}", join_moves(sub.included(), options))?;

    if !sub.excluded().is_empty() {
        writeln!(
            out,
            "{}### Excluded from {}  ({}){}",
            dim,
            sub.name(),
            sub.excluded().len(),
            reset
        )?;
        writeln!(
            out,
            "{}{}{}",
            dim,
            join_moves(sub.excluded(), options),
            reset
        )?;
    }

    Ok(())
}

/// Joins moves with two spaces. In short mode a list longer than twice the context keeps only its
/// head and tail.
pub fn join_moves(moves: &[San], options: &RenderOptions) -> String {
    let join = |moves: &[San]| {
        moves
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    };

    let context = options.context;
    if options.short && moves.len() > 2 * context {
        let head = join(&moves[..context]);
        let tail = join(&moves[moves.len() - context..]);
        return format!("{}{}{}", head, ELLIPSIS, tail);
    }

    join(moves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{files, File, PieceKind, Rank, Square};

    fn rooks_on_first_rank() -> Vec<San> {
        files()
            .map(|file| San::quiet(PieceKind::Rook, Square::of(Rank::One, file)))
            .collect()
    }

    fn sample() -> Catalog {
        let mut catalog = Catalog::default();
        let section = catalog.section("Rook");
        let normal = section.subsection("normal");
        for san in rooks_on_first_rank().into_iter().take(2) {
            normal.include(san, false);
        }
        catalog
    }

    fn render(catalog: &Catalog, options: &RenderOptions) -> String {
        let mut out = vec![];
        write_report(&mut out, catalog, options).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn join_full_list() {
        let moves = rooks_on_first_rank();
        assert_eq!(
            "Ra1  Rb1  Rc1  Rd1  Re1  Rf1  Rg1  Rh1",
            join_moves(&moves, &RenderOptions::default())
        );
    }

    #[test]
    fn join_short_list() {
        let moves = rooks_on_first_rank();
        let options = RenderOptions {
            short: true,
            context: 2,
            ..RenderOptions::default()
        };
        assert_eq!("Ra1  Rb1 ... Rg1  Rh1", join_moves(&moves, &options));

        // A list of exactly twice the context is printed whole.
        let options = RenderOptions {
            short: true,
            context: 4,
            ..RenderOptions::default()
        };
        assert_eq!(
            "Ra1  Rb1  Rc1  Rd1  Re1  Rf1  Rg1  Rh1",
            join_moves(&moves, &options)
        );
    }

    #[test]
    fn plain_report() {
        let options = RenderOptions {
            color: false,
            ..RenderOptions::default()
        };
        assert_eq!(
            "# Rook  (2)\n\
             ## normal  (2)\n\
             Ra1  Rb1\n\
             ### Excluded from normal  (4)\n\
             Ra1+  Ra1#  Rb1+  Rb1#\n\
             \n",
            render(&sample(), &options)
        );
    }

    #[test]
    fn colored_report() {
        let report = render(&sample(), &RenderOptions::default());
        assert!(report.starts_with("\x1B[31m# Rook  (2)\x1B[0m\n"));
        assert!(report.contains("\x1B[32m## normal  (2)\x1B[0m\n"));
        assert!(report.contains("\x1B[90m### Excluded from normal  (4)\x1B[0m\n"));
        assert!(report.contains("\x1B[90mRa1+  Ra1#  Rb1+  Rb1#\x1B[0m\n"));
    }

    #[test]
    fn empty_excluded_list_is_omitted() {
        let mut catalog = Catalog::default();
        let a1 = Square::of(Rank::One, File::A);
        catalog
            .section("King")
            .subsection("normal")
            .include(San::quiet(PieceKind::King, a1), true);
        let options = RenderOptions {
            color: false,
            ..RenderOptions::default()
        };
        assert_eq!(
            "# King  (3)\n## normal  (3)\nKa1  Ka1+  Ka1#\n\n",
            render(&catalog, &options)
        );
    }

    #[test]
    fn plain_lists_included_only() {
        let mut out = vec![];
        write_plain(&mut out, &sample()).unwrap();
        assert_eq!("Ra1\nRb1\n", String::from_utf8(out).unwrap());
    }
}
