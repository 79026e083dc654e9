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

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use arinc424::records::Records;
use arinc424::ClassificationKind;
use log::{debug, info, trace, warn};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::Error;
use crate::inventory::{FileInventory, InventoryBuilder};
use crate::summary::GlobalSummary;

/// Extension of the data files.
pub const DEFAULT_EXTENSION: &str = "txt";

/// Files next to the data files which are no data.
pub const DEFAULT_EXCLUDED: [&str; 1] = ["FAACIFP18.zip"];

/// Data files known to mix customer codes.
pub const DEFAULT_SPECIAL: [&str; 1] = ["OCEAN.txt"];

/// Options that decide which files of a directory are scanned.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ScanOptions {
    extension: String,
    excluded: BTreeSet<String>,
    special: BTreeSet<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            excluded: DEFAULT_EXCLUDED.iter().map(|s| s.to_string()).collect(),
            special: DEFAULT_SPECIAL.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans files with this extension (without the leading dot).
    pub fn extension<S>(mut self, extension: S) -> Self
    where
        S: Into<String>,
    {
        self.extension = extension.into();
        self
    }

    /// Excludes the file name from the scan.
    pub fn exclude<S>(mut self, file_name: S) -> Self
    where
        S: Into<String>,
    {
        self.excluded.insert(file_name.into());
        self
    }

    /// Flags the file name as special source.
    pub fn special<S>(mut self, file_name: S) -> Self
    where
        S: Into<String>,
    {
        self.special.insert(file_name.into());
        self
    }

    /// Returns `true` if the file should be scanned.
    pub fn is_candidate(&self, file_name: &str) -> bool {
        self.strip_extension(file_name).is_some() && !self.excluded.contains(file_name)
    }

    /// Returns `true` if the file is a special source.
    pub fn is_special(&self, file_name: &str) -> bool {
        self.special.contains(file_name)
    }

    /// Returns the source identifier of the file, i.e. the file name without
    /// extension.
    pub fn source_id<'a>(&self, file_name: &'a str) -> &'a str {
        self.strip_extension(file_name).unwrap_or(file_name)
    }

    fn strip_extension<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        file_name
            .strip_suffix(self.extension.as_str())
            .and_then(|stem| stem.strip_suffix('.'))
    }

    fn inventory(&self, file_name: &str, text: &str) -> FileInventory {
        let mut builder =
            InventoryBuilder::new(self.source_id(file_name)).special(self.is_special(file_name));

        for (record, _) in Records::new(text) {
            builder.add_record(&record);
        }

        builder.build()
    }
}

/// The result of a scan: the inventory of each source and their sum.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Discovery {
    summary: GlobalSummary,
    sources: Vec<FileInventory>,
}

impl Discovery {
    fn new(sources: Vec<FileInventory>, elapsed: Duration) -> Self {
        let summary = GlobalSummary::fold(&sources).with_elapsed(elapsed);

        info!(
            "scanned {} source(s) with {} line(s) in {} ms",
            summary.source_count(),
            summary.counts().total_lines(),
            elapsed.as_millis()
        );

        Self { summary, sources }
    }

    pub fn summary(&self) -> &GlobalSummary {
        &self.summary
    }

    /// The inventories sorted by their file name.
    pub fn sources(&self) -> &[FileInventory] {
        &self.sources
    }

    /// Returns the distinct customer codes found in the sources.
    pub fn customer_codes(&self) -> BTreeSet<&str> {
        self.sources
            .iter()
            .map(FileInventory::first_customer_code)
            .filter(|code| !code.is_empty())
            .collect()
    }

    /// Returns the sources without airway records.
    pub fn without_airways(&self) -> Vec<&str> {
        self.sources
            .iter()
            .filter(|inventory| inventory.counts().count(ClassificationKind::Airway) == 0)
            .map(FileInventory::source_id)
            .collect()
    }

    /// Returns the sources with neither VOR/DME nor NDB records.
    pub fn without_navaids(&self) -> Vec<&str> {
        self.sources
            .iter()
            .filter(|inventory| inventory.counts().navaid_count() == 0)
            .map(FileInventory::source_id)
            .collect()
    }
}

/// Scans in-memory sources given as pairs of file name and text.
///
/// Sources are filtered and sorted by their file name like [`scan_dir`] does.
/// File names are compared byte-wise, so `a-b.txt` comes before `a.txt`.
///
/// # Examples
///
/// ```
/// use arinc424_inventory::{scan, ScanOptions};
///
/// let sources = [("GB.txt", "SEURER...\n"), ("CA.txt", "SCANEA...\nab\n")];
/// let discovery = scan(sources, &ScanOptions::default());
///
/// assert_eq!(discovery.sources()[0].source_id(), "CA");
/// assert_eq!(discovery.summary().counts().total_lines(), 3);
/// ```
pub fn scan<I, N, T>(sources: I, options: &ScanOptions) -> Discovery
where
    I: IntoIterator<Item = (N, T)>,
    N: AsRef<str>,
    T: AsRef<str>,
{
    let start = Instant::now();

    let mut sources: Vec<(N, T)> = sources
        .into_iter()
        .filter(|(name, _)| options.is_candidate(name.as_ref()))
        .collect();
    sources.sort_by(|(a, _), (b, _)| a.as_ref().cmp(b.as_ref()));

    let inventories = sources
        .iter()
        .map(|(name, text)| options.inventory(name.as_ref(), text.as_ref()))
        .collect();

    Discovery::new(inventories, start.elapsed())
}

/// Scans all data files of a directory.
///
/// # Errors
///
/// Returns an error if the directory can't be listed or any data file can't
/// be read. No partial result is returned in this case.
pub fn scan_dir<P>(dir: P, options: &ScanOptions) -> Result<Discovery, Error>
where
    P: AsRef<Path>,
{
    let start = Instant::now();
    let dir = dir.as_ref();

    let read_dir_error = |e: std::io::Error| Error::ReadDir {
        path: dir.to_path_buf(),
        error: e.to_string(),
    };

    let mut file_names = Vec::new();

    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;

        let Some(file_name) = entry.file_name().to_str().map(str::to_string) else {
            warn!("skipping non UTF-8 file name {:?}", entry.file_name());
            continue;
        };

        if !options.is_candidate(&file_name) {
            trace!("skipping {file_name}");
            continue;
        }

        // Only real directories are skipped. Anything else, including
        // dangling links, has to be read or fail the scan.
        let file_type = entry.file_type().map_err(|e| Error::ReadSource {
            path: entry.path(),
            error: e.to_string(),
        })?;

        if file_type.is_dir() {
            trace!("skipping directory {file_name}");
            continue;
        }

        file_names.push(file_name);
    }

    file_names.sort();
    debug!("found {} data file(s) in {}", file_names.len(), dir.display());

    let mut inventories = Vec::with_capacity(file_names.len());

    for file_name in &file_names {
        let path = dir.join(file_name);
        let bytes = fs::read(&path).map_err(|e| Error::ReadSource {
            path: path.clone(),
            error: e.to_string(),
        })?;

        let text = String::from_utf8_lossy(&bytes);
        inventories.push(options.inventory(file_name, &text));
    }

    Ok(Discovery::new(inventories, start.elapsed()))
}
