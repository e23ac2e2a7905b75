// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! `sanspace` enumerates every move string Standard Algebraic Notation can produce, grouped by
//! piece and by the kind of disambiguation the move carries.
//!
//! Beyond the raw enumeration, `sanspace` decides from board geometry alone which disambiguated
//! notations can ever be required in a game and which are always redundant or impossible. No
//! position is ever consulted; the result is a catalog of included and excluded strings for every
//! piece. A small companion utility reduces already-played moves to their shorthand and tallies
//! them.

pub mod builder;
pub mod catalog;
pub mod core;
pub mod normalize;
pub mod render;
pub mod rules;
