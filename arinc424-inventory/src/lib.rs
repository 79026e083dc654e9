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

//! Record inventory of ARINC 424 data files.
//!
//! Each line of a data file is [classified] and the classifications are
//! counted per file into a [`FileInventory`]. The inventories of many files
//! are summed up into a [`GlobalSummary`].
//!
//! # Examples
//!
//! Scan all `.txt` data files of a directory:
//!
//! ```no_run
//! use arinc424::ClassificationKind;
//! use arinc424_inventory::{scan_dir, ScanOptions};
//!
//! # fn main() -> Result<(), arinc424_inventory::Error> {
//! let discovery = scan_dir("data", &ScanOptions::default())?;
//!
//! for inventory in discovery.sources() {
//!     let waypoints = inventory.counts().count(ClassificationKind::Waypoint);
//!     println!("{}: {waypoints} waypoints", inventory.source_id());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [classified]: arinc424::classify

mod counts;
mod error;
mod inventory;
mod scan;
mod summary;

pub use counts::RecordCounts;
pub use error::Error;
pub use inventory::{aggregate, FileInventory, InventoryBuilder};
pub use scan::{
    scan, scan_dir, Discovery, ScanOptions, DEFAULT_EXCLUDED, DEFAULT_EXTENSION, DEFAULT_SPECIAL,
};
pub use summary::GlobalSummary;
