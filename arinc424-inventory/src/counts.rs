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

use std::collections::BTreeMap;
use std::ops::{Add, AddAssign};

use arinc424::{ClassificationKind, ClassifiedRecord};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Number of lines per classification kind.
///
/// The counts partition the lines: each line is counted by exactly one kind
/// and all kinds sum up to the [total](RecordCounts::total_lines).
#[derive(Clone, Default, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RecordCounts {
    total_lines: usize,
    waypoint_count: usize,
    airway_count: usize,
    vor_dme_count: usize,
    ndb_count: usize,
    unknown_count: usize,
    too_short_count: usize,
    non_standard_count: usize,
    /// Section and subsection pairs of unknown records, e.g. `PA`.
    unknown_codes: BTreeMap<String, usize>,
}

impl RecordCounts {
    pub(crate) fn count_record(&mut self, record: &ClassifiedRecord<'_>) {
        self.total_lines += 1;

        match record.kind {
            ClassificationKind::Waypoint => self.waypoint_count += 1,
            ClassificationKind::Airway => self.airway_count += 1,
            ClassificationKind::VorDme => self.vor_dme_count += 1,
            ClassificationKind::Ndb => self.ndb_count += 1,
            ClassificationKind::TooShort => self.too_short_count += 1,
            ClassificationKind::NonStandard => self.non_standard_count += 1,
            ClassificationKind::Unknown => {
                self.unknown_count += 1;
                if let Some(pair) = record.section_pair() {
                    *self.unknown_codes.entry(pair).or_default() += 1;
                }
            }
        }
    }

    /// The number of lines counted.
    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// The number of lines of the kind.
    pub fn count(&self, kind: ClassificationKind) -> usize {
        match kind {
            ClassificationKind::Waypoint => self.waypoint_count,
            ClassificationKind::Airway => self.airway_count,
            ClassificationKind::VorDme => self.vor_dme_count,
            ClassificationKind::Ndb => self.ndb_count,
            ClassificationKind::TooShort => self.too_short_count,
            ClassificationKind::NonStandard => self.non_standard_count,
            ClassificationKind::Unknown => self.unknown_count,
        }
    }

    /// The number of VOR/DME and NDB lines.
    pub fn navaid_count(&self) -> usize {
        self.vor_dme_count + self.ndb_count
    }

    /// Unknown records by their section and subsection code.
    pub fn unknown_codes(&self) -> &BTreeMap<String, usize> {
        &self.unknown_codes
    }

    /// Returns `true` if the counts of all kinds sum up to the total lines.
    pub fn is_partitioned(&self) -> bool {
        let sum: usize = ClassificationKind::ALL
            .iter()
            .map(|&kind| self.count(kind))
            .sum();

        sum == self.total_lines
            && self.unknown_codes.values().sum::<usize>() == self.unknown_count
    }
}

impl AddAssign<&RecordCounts> for RecordCounts {
    fn add_assign(&mut self, rhs: &RecordCounts) {
        self.total_lines += rhs.total_lines;
        self.waypoint_count += rhs.waypoint_count;
        self.airway_count += rhs.airway_count;
        self.vor_dme_count += rhs.vor_dme_count;
        self.ndb_count += rhs.ndb_count;
        self.unknown_count += rhs.unknown_count;
        self.too_short_count += rhs.too_short_count;
        self.non_standard_count += rhs.non_standard_count;

        for (pair, count) in &rhs.unknown_codes {
            *self.unknown_codes.entry(pair.clone()).or_default() += count;
        }
    }
}

impl Add for RecordCounts {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += &rhs;
        self
    }
}
