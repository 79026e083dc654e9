// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::entities::EntityKind;

/// The number of leading characters that make up the shared record header.
///
/// Lines with fewer characters are [too short](ClassificationKind::TooShort).
pub const HEADER_LENGTH: usize = 6;

/// Position of the record type marker.
pub const RECORD_TYPE: usize = 0;
/// First position of the three character customer code.
pub const CUSTOMER_CODE_START: usize = 1;
/// Position after the customer code.
pub const CUSTOMER_CODE_END: usize = 4;
/// Position of the section code.
pub const SECTION_CODE: usize = 4;
/// Position of the subsection code.
pub const SUBSECTION_CODE: usize = 5;

/// Marker of a standard record.
pub const STANDARD_RECORD: char = 'S';

/// The category of a classified line.
///
/// Each line falls into exactly one kind.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum ClassificationKind {
    /// Enroute waypoint (section `E`, subsection `A`).
    Waypoint,
    /// Enroute airway (section `E`, subsection `R`).
    Airway,
    /// VHF navaid (section `D`, blank subsection).
    VorDme,
    /// NDB navaid (section `D`, subsection `B`).
    Ndb,
    /// The line is shorter than the record header.
    TooShort,
    /// The line doesn't start with the standard record marker.
    NonStandard,
    /// A standard record of any other section and subsection.
    Unknown,
}

impl ClassificationKind {
    /// All kinds in the order they are reported.
    pub const ALL: [Self; 7] = [
        Self::Waypoint,
        Self::Airway,
        Self::VorDme,
        Self::Ndb,
        Self::TooShort,
        Self::NonStandard,
        Self::Unknown,
    ];

    /// Returns the tag name of this kind, e.g. `EA_WAYPOINT`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Waypoint => "EA_WAYPOINT",
            Self::Airway => "ER_AIRWAY",
            Self::VorDme => "D_VOR_DME",
            Self::Ndb => "DB_NDB",
            Self::TooShort => "TOO_SHORT",
            Self::NonStandard => "NON_STANDARD",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Returns the entity a record of this kind decodes into.
    ///
    /// Returns `None` for kinds that don't describe navigation data.
    pub fn entity(&self) -> Option<EntityKind> {
        match self {
            Self::Waypoint => Some(EntityKind::Waypoint),
            Self::Airway => Some(EntityKind::AirwayEdge),
            Self::VorDme | Self::Ndb => Some(EntityKind::Navaid),
            Self::TooShort | Self::NonStandard | Self::Unknown => None,
        }
    }
}

impl fmt::Display for ClassificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A classified line with the header fields it was classified by.
///
/// The customer code references the classified line.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ClassifiedRecord<'a> {
    pub kind: ClassificationKind,
    /// The customer code, empty if the line is too short or non-standard.
    pub customer_code: &'a str,
    pub section_code: Option<char>,
    pub subsection_code: Option<char>,
}

impl<'a> ClassifiedRecord<'a> {
    fn too_short() -> Self {
        Self {
            kind: ClassificationKind::TooShort,
            customer_code: "",
            section_code: None,
            subsection_code: None,
        }
    }

    /// Returns the section and subsection code as two character string.
    ///
    /// Returns `None` if the line is too short.
    pub fn section_pair(&self) -> Option<String> {
        match (self.section_code, self.subsection_code) {
            (Some(sec), Some(sub)) => Some([sec, sub].iter().collect()),
            _ => None,
        }
    }
}

/// Reads the first [`HEADER_LENGTH`] characters with their byte offsets.
fn header(line: &str) -> Option<[(usize, char); HEADER_LENGTH]> {
    let mut header = [(0, ' '); HEADER_LENGTH];
    let mut chars = line.char_indices();

    for slot in header.iter_mut() {
        *slot = chars.next()?;
    }

    Some(header)
}

/// Classifies a single ARINC 424 line.
///
/// The classification is decided in this order:
///
/// 1. Lines with less than [`HEADER_LENGTH`] characters are
///    [`TooShort`](ClassificationKind::TooShort).
/// 2. Lines not starting with `S` are
///    [`NonStandard`](ClassificationKind::NonStandard). Their section and
///    subsection codes are still read.
/// 3. All other lines are classified by their section and subsection code.
///
/// Characters are compared as they are, without trimming and case-sensitive.
///
/// # Examples
///
/// ```
/// use arinc424::{classify, ClassificationKind};
///
/// let vor = classify("SUSAD KJFK");
/// assert_eq!(vor.kind, ClassificationKind::VorDme);
/// assert_eq!(vor.subsection_code, Some(' '));
///
/// assert_eq!(classify("ab").kind, ClassificationKind::TooShort);
/// ```
pub fn classify(line: &str) -> ClassifiedRecord<'_> {
    let Some(header) = header(line) else {
        return ClassifiedRecord::too_short();
    };

    let section = header[SECTION_CODE].1;
    let subsection = header[SUBSECTION_CODE].1;

    if header[RECORD_TYPE].1 != STANDARD_RECORD {
        return ClassifiedRecord {
            kind: ClassificationKind::NonStandard,
            customer_code: "",
            section_code: Some(section),
            subsection_code: Some(subsection),
        };
    }

    let kind = match (section, subsection) {
        ('E', 'A') => ClassificationKind::Waypoint,
        ('E', 'R') => ClassificationKind::Airway,
        ('D', 'B') => ClassificationKind::Ndb,
        ('D', ' ') => ClassificationKind::VorDme,
        _ => ClassificationKind::Unknown,
    };

    ClassifiedRecord {
        kind,
        customer_code: &line[header[CUSTOMER_CODE_START].0..header[CUSTOMER_CODE_END].0],
        section_code: Some(section),
        subsection_code: Some(subsection),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EA_WAYPOINT: &str = "SUSAEAENRT   AAARG K 0    W   B N32413827W078030466                       W0093     NAR           AAARG                    270862407";
    const PC_WAYPOINT: &str = "SEURPCEDDHED W1    ED0    V     N53341894E009404512                                 WGE           WHISKEY1                 122922407";

    #[test]
    fn classifies_waypoint() {
        let record = classify("SCANEA...");
        assert_eq!(record.kind, ClassificationKind::Waypoint);
        assert_eq!(record.customer_code, "CAN");
        assert_eq!(record.section_code, Some('E'));
        assert_eq!(record.subsection_code, Some('A'));
    }

    #[test]
    fn classifies_airway() {
        let record = classify("SEURER...");
        assert_eq!(record.kind, ClassificationKind::Airway);
        assert_eq!(record.customer_code, "EUR");
    }

    #[test]
    fn classifies_vor_dme_by_blank_subsection() {
        let record = classify("SUSAD B...");
        assert_eq!(record.kind, ClassificationKind::VorDme);
        assert_eq!(record.subsection_code, Some(' '));
    }

    #[test]
    fn classifies_ndb() {
        assert_eq!(classify("SUSADB...").kind, ClassificationKind::Ndb);
    }

    #[test]
    fn classifies_full_records() {
        let record = classify(EA_WAYPOINT);
        assert_eq!(record.kind, ClassificationKind::Waypoint);
        assert_eq!(record.customer_code, "USA");

        // terminal waypoints are a different section
        let record = classify(PC_WAYPOINT);
        assert_eq!(record.kind, ClassificationKind::Unknown);
        assert_eq!(record.section_pair().as_deref(), Some("PC"));
    }

    #[test]
    fn short_lines_have_no_fields() {
        for line in ["", "a", "ab", "SCAN", "SCANE"] {
            let record = classify(line);
            assert_eq!(record, ClassifiedRecord::too_short(), "line {line:?}");
            assert_eq!(record.section_pair(), None);
        }
    }

    #[test]
    fn header_of_exactly_six_characters() {
        let record = classify("SCANEA");
        assert_eq!(record.kind, ClassificationKind::Waypoint);
        assert_eq!(record.customer_code, "CAN");
    }

    #[test]
    fn non_standard_keeps_section_codes() {
        let record = classify("XCANEA...");
        assert_eq!(record.kind, ClassificationKind::NonStandard);
        assert_eq!(record.customer_code, "");
        assert_eq!(record.section_code, Some('E'));
        assert_eq!(record.subsection_code, Some('A'));

        // tailored records are not standard either
        assert_eq!(classify("TCANEA").kind, ClassificationKind::NonStandard);
    }

    #[test]
    fn codes_are_case_sensitive() {
        assert_eq!(classify("sCANEA").kind, ClassificationKind::NonStandard);
        assert_eq!(classify("SCANea").kind, ClassificationKind::Unknown);
        assert_eq!(classify("SCAN E A").kind, ClassificationKind::Unknown);
    }

    #[test]
    fn length_is_counted_in_characters() {
        // five characters but more than six bytes
        assert_eq!(classify("SÄÖÜE").kind, ClassificationKind::TooShort);

        let record = classify("SÄÖÜEA");
        assert_eq!(record.kind, ClassificationKind::Waypoint);
        assert_eq!(record.customer_code, "ÄÖÜ");
    }

    #[test]
    fn blank_customer_code_is_not_empty() {
        let record = classify("S   ER");
        assert_eq!(record.kind, ClassificationKind::Airway);
        assert_eq!(record.customer_code, "   ");
    }

    #[test]
    fn classification_is_deterministic() {
        for line in [EA_WAYPOINT, PC_WAYPOINT, "ab", "XCANEA", "SUSAD "] {
            assert_eq!(classify(line), classify(line));
        }
    }

    #[test]
    fn only_navigation_kinds_have_entities() {
        assert_eq!(
            ClassificationKind::Waypoint.entity(),
            Some(EntityKind::Waypoint)
        );
        assert_eq!(ClassificationKind::Ndb.entity(), Some(EntityKind::Navaid));
        assert_eq!(ClassificationKind::VorDme.entity(), Some(EntityKind::Navaid));
        assert_eq!(
            ClassificationKind::Airway.entity(),
            Some(EntityKind::AirwayEdge)
        );
        assert_eq!(ClassificationKind::Unknown.entity(), None);
    }

    #[test]
    fn labels() {
        assert_eq!(ClassificationKind::VorDme.to_string(), "D_VOR_DME");
        assert_eq!(ClassificationKind::TooShort.label(), "TOO_SHORT");
    }
}
