// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::convert::TryFrom;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpandError {
    #[error("invalid expression: {0:?}")]
    InvalidExpression(String),
    #[error("invalid element {0:?} in expression")]
    InvalidElement(String),
}

/// Expands a short coordinate expression into the coordinates it names.
///
/// Two forms are understood: a dash range of single characters (`a-h`, `2-7`), expanded in
/// character order, and a comma list (`1,8`, `Q,R,B,N`). Anything else is an error.
pub fn expand<T: TryFrom<char>>(expr: &str) -> Result<Vec<T>, ExpandError> {
    if let Some((start, end)) = expr.split_once('-') {
        let start = single_char(start)?;
        let end = single_char(end)?;
        return (start..=end).map(parse_element).collect();
    }

    if expr.contains(',') {
        return expr
            .split(',')
            .map(|elem| single_char(elem).and_then(parse_element))
            .collect();
    }

    Err(ExpandError::InvalidExpression(expr.to_string()))
}

fn single_char(elem: &str) -> Result<char, ExpandError> {
    let mut chars = elem.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ExpandError::InvalidElement(elem.to_string())),
    }
}

fn parse_element<T: TryFrom<char>>(c: char) -> Result<T, ExpandError> {
    T::try_from(c).map_err(|_| ExpandError::InvalidElement(c.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{File, PieceKind, Rank};

    #[test]
    fn dash_range() {
        let files: Vec<File> = expand("b-g").unwrap();
        assert_eq!(
            vec![File::B, File::C, File::D, File::E, File::F, File::G],
            files
        );
        let ranks: Vec<Rank> = expand("2-7").unwrap();
        assert_eq!(6, ranks.len());
        assert_eq!(Some(&Rank::Seven), ranks.last());
    }

    #[test]
    fn comma_list() {
        let ranks: Vec<Rank> = expand("1,8").unwrap();
        assert_eq!(vec![Rank::One, Rank::Eight], ranks);
        let pieces: Vec<PieceKind> = expand("Q,R,B,N").unwrap();
        assert_eq!(
            vec![
                PieceKind::Queen,
                PieceKind::Rook,
                PieceKind::Bishop,
                PieceKind::Knight
            ],
            pieces
        );
    }

    #[test]
    fn backwards_range_is_empty() {
        let files: Vec<File> = expand("h-a").unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn rejects_unknown_shapes() {
        assert_eq!(
            Err(ExpandError::InvalidExpression("abc".to_string())),
            expand::<File>("abc")
        );
        assert_eq!(
            Err(ExpandError::InvalidElement("i".to_string())),
            expand::<File>("a-i")
        );
        assert_eq!(
            Err(ExpandError::InvalidElement("10".to_string())),
            expand::<Rank>("1,10")
        );
    }
}
