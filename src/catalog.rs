// Copyright 2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The catalog of SAN strings: an ordered list of sections, each an ordered list of subsections
//! holding the included and excluded moves.

use crate::core::San;

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    sections: Vec<Section>,
}

impl Catalog {
    /// Appends a new, empty section and returns it for filling.
    pub fn section(&mut self, name: impl Into<String>) -> &mut Section {
        self.sections.push(Section {
            name: name.into(),
            subsections: vec![],
        });
        let last = self.sections.len() - 1;
        &mut self.sections[last]
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Looks up a section by name, ignoring ASCII case.
    pub fn find(&self, name: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|section| section.name.eq_ignore_ascii_case(name))
    }

    /// Keeps only the sections whose names are listed, ignoring ASCII case, in catalog order.
    pub fn retain_sections<S: AsRef<str>>(&mut self, names: &[S]) {
        self.sections.retain(|section| {
            names
                .iter()
                .any(|name| section.name.eq_ignore_ascii_case(name.as_ref()))
        });
    }

    /// Number of included moves across every section.
    pub fn total(&self) -> usize {
        self.sections.iter().map(Section::total).sum()
    }
}

#[derive(Clone, Debug)]
pub struct Section {
    name: String,
    subsections: Vec<Subsection>,
}

impl Section {
    /// Appends a new, empty subsection and returns it for filling.
    pub fn subsection(&mut self, name: impl Into<String>) -> &mut Subsection {
        self.subsections.push(Subsection {
            name: name.into(),
            included: vec![],
            excluded: vec![],
        });
        let last = self.subsections.len() - 1;
        &mut self.subsections[last]
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subsections(&self) -> &[Subsection] {
        &self.subsections
    }

    pub fn find(&self, name: &str) -> Option<&Subsection> {
        self.subsections.iter().find(|sub| sub.name == name)
    }

    /// Number of included moves across every subsection.
    pub fn total(&self) -> usize {
        self.subsections.iter().map(|sub| sub.included.len()).sum()
    }
}

#[derive(Clone, Debug)]
pub struct Subsection {
    name: String,
    included: Vec<San>,
    excluded: Vec<San>,
}

impl Subsection {
    /// Records a move that can be required in some game. Its `+` and `#` forms follow it in the
    /// included list when checks are possible, and go to the excluded list when they are not.
    pub fn include(&mut self, san: San, check_and_mate: bool) {
        self.included.push(san);
        if check_and_mate {
            self.included.extend(san.variants());
        } else {
            self.excluded.extend(san.variants());
        }
    }

    /// Records a move that is never required, together with its `+` and `#` forms if those would
    /// otherwise be possible.
    pub fn exclude(&mut self, san: San, check_and_mate: bool) {
        self.excluded.push(san);
        if check_and_mate {
            self.excluded.extend(san.variants());
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn included(&self) -> &[San] {
        &self.included
    }

    pub fn excluded(&self) -> &[San] {
        &self.excluded
    }
}
