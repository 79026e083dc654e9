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

use arinc424::{classify, ClassifiedRecord};
use log::{debug, warn};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::counts::RecordCounts;

/// The record inventory of one data source.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FileInventory {
    source_id: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    counts: RecordCounts,
    first_customer_code: String,
    special: bool,
}

impl FileInventory {
    /// Identifier of the source, e.g. `CA` for the file `CA.txt`.
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    pub fn counts(&self) -> &RecordCounts {
        &self.counts
    }

    /// The customer code of the first record that has one.
    ///
    /// A source is expected to carry one customer code throughout. If a
    /// source mixes customer codes, this is only the first of them and the
    /// source should be [special](FileInventory::is_special).
    pub fn first_customer_code(&self) -> &str {
        &self.first_customer_code
    }

    /// Returns `true` if the source was listed as special, i.e. it is known
    /// to mix customer codes.
    pub fn is_special(&self) -> bool {
        self.special
    }
}

/// Record inventory factory, which is used to build a [file inventory].
///
/// [file inventory]: FileInventory
#[derive(Debug)]
pub struct InventoryBuilder {
    source_id: String,
    counts: RecordCounts,
    first_customer_code: Option<String>,
    special: bool,
}

impl InventoryBuilder {
    pub fn new<S>(source_id: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            source_id: source_id.into(),
            counts: RecordCounts::default(),
            first_customer_code: None,
            special: false,
        }
    }

    /// Marks the source as special.
    pub fn special(mut self, special: bool) -> Self {
        self.special = special;
        self
    }

    /// Classifies the line and adds it to the inventory.
    pub fn add_line(&mut self, line: &str) {
        self.add_record(&classify(line));
    }

    pub fn add_record(&mut self, record: &ClassifiedRecord<'_>) {
        self.counts.count_record(record);

        if self.first_customer_code.is_none() && !record.customer_code.is_empty() {
            self.first_customer_code = Some(record.customer_code.to_string());
        }
    }

    pub fn build(self) -> FileInventory {
        debug_assert!(
            self.counts.is_partitioned(),
            "record counts should partition the lines"
        );

        let inventory = FileInventory {
            source_id: self.source_id,
            counts: self.counts,
            first_customer_code: self.first_customer_code.unwrap_or_default(),
            special: self.special,
        };

        if inventory.special {
            warn!(
                "{} is special and may mix customer codes, reporting only {:?}",
                inventory.source_id, inventory.first_customer_code
            );
        }

        debug!(
            "{}: {} line(s), customer code {:?}",
            inventory.source_id,
            inventory.counts.total_lines(),
            inventory.first_customer_code
        );

        inventory
    }
}

/// Aggregates the lines of one source into its inventory.
///
/// The lines must not contain blank lines. Every line is classified and the
/// customer code of the first line that has one is kept.
///
/// # Examples
///
/// ```
/// use arinc424::ClassificationKind;
/// use arinc424_inventory::aggregate;
///
/// let inventory = aggregate("CA", ["SCANEA...", "SEURER...", "ab"]);
///
/// assert_eq!(inventory.counts().total_lines(), 3);
/// assert_eq!(inventory.counts().count(ClassificationKind::Airway), 1);
/// assert_eq!(inventory.first_customer_code(), "CAN");
/// ```
pub fn aggregate<'a, S, I>(source_id: S, lines: I) -> FileInventory
where
    S: Into<String>,
    I: IntoIterator<Item = &'a str>,
{
    let mut builder = InventoryBuilder::new(source_id);
    lines.into_iter().for_each(|line| builder.add_line(line));
    builder.build()
}
