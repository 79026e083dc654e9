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

use std::ops::Add;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

use crate::counts::RecordCounts;
use crate::inventory::FileInventory;

/// The sum of many file inventories.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GlobalSummary {
    source_count: usize,
    #[cfg_attr(feature = "serde", serde(flatten))]
    counts: RecordCounts,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "elapsed_ms", serialize_with = "serialize_millis")
    )]
    elapsed: Duration,
}

#[cfg(feature = "serde")]
fn serialize_millis<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u64(duration.as_millis().try_into().unwrap_or(u64::MAX))
}

impl GlobalSummary {
    /// Sums up the inventories.
    ///
    /// The summary doesn't depend on the order of the inventories. Callers
    /// present the inventories sorted by their file name.
    pub fn fold(inventories: &[FileInventory]) -> Self {
        inventories.iter().collect()
    }

    /// Sets the time it took to scan the sources.
    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }

    pub fn source_count(&self) -> usize {
        self.source_count
    }

    pub fn counts(&self) -> &RecordCounts {
        &self.counts
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl<'a> FromIterator<&'a FileInventory> for GlobalSummary {
    fn from_iter<T: IntoIterator<Item = &'a FileInventory>>(iter: T) -> Self {
        iter.into_iter().fold(Self::default(), |mut summary, inventory| {
            summary.source_count += 1;
            summary.counts += inventory.counts();
            summary
        })
    }
}

/// Merges two partial summaries.
///
/// The elapsed times add up as if the partial scans ran one after another.
/// Summaries of scans that ran concurrently overstate the wall-clock time.
impl Add for GlobalSummary {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            source_count: self.source_count + rhs.source_count,
            counts: self.counts + rhs.counts,
            elapsed: self.elapsed + rhs.elapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use arinc424::ClassificationKind;

    use super::*;
    use crate::aggregate;

    fn inventories() -> Vec<FileInventory> {
        vec![
            aggregate("CA", ["SCANEA...", "SCANER...", "SCAND ...", "ab"]),
            aggregate("GB", ["SEURDB...", "SEURPA...", "XEUREA..."]),
            aggregate("US", ["SUSAEA...", "SUSAEA...", "SUSAPG..."]),
        ]
    }

    #[test]
    fn sums_all_sources() {
        let summary = GlobalSummary::fold(&inventories());
        let counts = summary.counts();

        assert_eq!(summary.source_count(), 3);
        assert_eq!(counts.total_lines(), 10);
        assert_eq!(counts.count(ClassificationKind::Waypoint), 3);
        assert_eq!(counts.count(ClassificationKind::Airway), 1);
        assert_eq!(counts.count(ClassificationKind::VorDme), 1);
        assert_eq!(counts.count(ClassificationKind::Ndb), 1);
        assert_eq!(counts.count(ClassificationKind::Unknown), 2);
        assert_eq!(counts.count(ClassificationKind::TooShort), 1);
        assert_eq!(counts.count(ClassificationKind::NonStandard), 1);
        assert!(counts.is_partitioned());
        assert_eq!(summary.elapsed(), Duration::ZERO);
    }

    #[test]
    fn regrouping_keeps_totals() {
        let inventories = inventories();
        let whole = GlobalSummary::fold(&inventories);

        for split in 0..=inventories.len() {
            let (a, b) = inventories.split_at(split);
            assert_eq!(GlobalSummary::fold(a) + GlobalSummary::fold(b), whole);
            assert_eq!(GlobalSummary::fold(b) + GlobalSummary::fold(a), whole);
        }

        let reversed: GlobalSummary = inventories.iter().rev().collect();
        assert_eq!(reversed, whole);
    }

    #[test]
    fn empty_fold() {
        let summary = GlobalSummary::fold(&[]);
        assert_eq!(summary.source_count(), 0);
        assert_eq!(summary.counts().total_lines(), 0);
    }

    #[test]
    fn keeps_elapsed_time() {
        let summary = GlobalSummary::fold(&inventories()).with_elapsed(Duration::from_millis(42));
        assert_eq!(summary.elapsed(), Duration::from_millis(42));
    }

    #[test]
    fn merged_elapsed_times_add_up() {
        let a = GlobalSummary::fold(&inventories()[..1]).with_elapsed(Duration::from_millis(5));
        let b = GlobalSummary::fold(&inventories()[1..]).with_elapsed(Duration::from_millis(8));

        assert_eq!((a + b).elapsed(), Duration::from_millis(13));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_flat_counts() {
        let summary = GlobalSummary::fold(&inventories()).with_elapsed(Duration::from_millis(7));
        let json = serde_json::to_value(&summary).expect("summary should serialize");

        assert_eq!(json["source_count"], 3);
        assert_eq!(json["total_lines"], 10);
        assert_eq!(json["waypoint_count"], 3);
        assert_eq!(json["unknown_codes"]["PA"], 1);
        assert_eq!(json["elapsed_ms"], 7);
    }
}
