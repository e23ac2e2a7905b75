// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reduction of played moves to their shorthand, and tallies of how often each shorthand occurs.
//!
//! A results file maps SAN strings to play counts. Many strings share a shorthand (`Nbd2`,
//! `Nfxd2+` and `Nd2` are all `Nd2`), so counts are summed per shorthand and reported most common
//! first.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{ser::PrettyFormatter, Map, Serializer, Value};
use thiserror::Error;

lazy_static! {
    static ref SAN_SHAPE: Regex =
        Regex::new(r"^([KQRBN]?)([a-h]?[0-9]?)x?([a-h][0-9])((?:=[QRBN])?)[+#]?$")
            .expect("SAN pattern is valid");
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("unexpected move format: {0:?}")]
    UnexpectedFormat(String),
    #[error("count for {0:?} is not a non-negative integer")]
    InvalidCount(String),
    #[error("total count for {0:?} does not fit in 64 bits")]
    CountOverflow(String),
}

/// Reduces a SAN string to piece, destination and promotion. Castles only lose their suffix.
pub fn normalize(san: &str) -> Result<String, NormalizeError> {
    if san.starts_with('O') {
        return Ok(san.replace(['+', '#'], ""));
    }

    let caps = SAN_SHAPE
        .captures(san)
        .ok_or_else(|| NormalizeError::UnexpectedFormat(san.to_string()))?;
    Ok(format!("{}{}{}", &caps[1], &caps[3], &caps[4]))
}

/// Counts keyed by string, remembering the order keys were first seen.
#[derive(Clone, Debug, Default)]
pub struct Tally {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl Tally {
    pub fn add(&mut self, key: &str, count: u64) -> Result<(), NormalizeError> {
        match self.index.get(key) {
            Some(&i) => {
                let total = &mut self.entries[i].1;
                *total = total
                    .checked_add(count)
                    .ok_or_else(|| NormalizeError::CountOverflow(key.to_string()))?;
            }
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), count));
            }
        }

        Ok(())
    }

    pub fn get(&self, key: &str) -> u64 {
        self.index.get(key).map_or(0, |&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by descending count. Ties keep first-seen order.
    pub fn into_sorted(self) -> Vec<(String, u64)> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

/// The contents of a results file.
#[derive(Clone, Debug, Deserialize)]
pub struct Results {
    pub moves: Map<String, Value>,
}

/// Sums the counts of `results` per shorthand, most common first.
pub fn count_normalized(results: &Results) -> Result<Vec<(String, u64)>, NormalizeError> {
    let mut tally = Tally::default();
    for (san, count) in &results.moves {
        let count = count
            .as_u64()
            .ok_or_else(|| NormalizeError::InvalidCount(san.clone()))?;
        tally.add(&normalize(san)?, count)?;
    }

    tracing::info!(
        raw = results.moves.len(),
        normalized = tally.len(),
        "counted moves"
    );
    Ok(tally.into_sorted())
}

/// Renders sorted counts as a JSON object indented by four spaces.
pub fn to_json(counts: &[(String, u64)]) -> serde_json::Result<String> {
    let object: Map<String, Value> = counts
        .iter()
        .map(|(key, count)| (key.clone(), Value::from(*count)))
        .collect();

    let mut buf = vec![];
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    object.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
