// SPDX-License-Identifier: Apache-2.0
// Copyright 2024 Joe Pearson
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

use log::trace;

use crate::{classify, ClassifiedRecord};

/// Iterator over the non-blank lines of an ARINC 424 file.
///
/// Lines are separated by `\n` only. A line is blank if nothing but
/// whitespace remains after trimming it. Blank lines are skipped, all other
/// lines are yielded untrimmed.
pub struct Lines<'a> {
    lines: std::str::Split<'a, char>,
}

impl<'a> Lines<'a> {
    pub fn new(data: &'a str) -> Self {
        Self {
            lines: data.split('\n'),
        }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            if line.trim().is_empty() {
                trace!("skipping blank line");
                continue;
            }

            return Some(line);
        }

        None
    }
}

/// Iterator over the classified records of an ARINC 424 file.
pub struct Records<'a> {
    lines: Lines<'a>,
}

impl<'a> Records<'a> {
    /// Creates a new record iterator from a text.
    ///
    /// # Examples
    ///
    /// ```
    /// # use arinc424::records::Records;
    /// # use arinc424::ClassificationKind;
    /// #
    /// # fn count_waypoints(data: &str) -> usize {
    /// let mut waypoints = 0;
    ///
    /// for (record, line) in Records::new(data) {
    ///     match record.kind {
    ///         ClassificationKind::Waypoint => {
    ///             // the line can be handed to a waypoint decoder
    ///             waypoints += 1;
    ///         },
    ///         _ => {},
    ///     }
    /// }
    /// # waypoints
    /// # }
    /// ```
    pub fn new(data: &'a str) -> Self {
        Self {
            lines: Lines::new(data),
        }
    }

    /// Returns the non-blank lines of the text without classifying them.
    pub fn lines(data: &'a str) -> Lines<'a> {
        Lines::new(data)
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = (ClassifiedRecord<'a>, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next().map(|line| (classify(line), line))
    }
}
