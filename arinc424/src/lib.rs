// SPDX-License-Identifier: Apache-2.0
// Copyright 2024, 2026 Joe Pearson
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

//! ARINC 424 record classifier.
//!
//! This crate classifies fixed-width ARINC 424 lines by their shared header:
//! the record type marker, the customer code and the section and subsection
//! codes. Classification never fails; lines that are too short or not a
//! standard record are classification outcomes on their own. The classified
//! record references the line and copies nothing.
//!
//! # Examples
//!
//! Lets classify an enroute waypoint:
//!
//! ```
//! use arinc424::{classify, ClassificationKind};
//!
//! let line = "SUSAEAENRT   AAARG K 0    W   B N32413827W078030466                       W0093     NAR           AAARG                    270862407";
//! let record = classify(line);
//!
//! assert_eq!(record.kind, ClassificationKind::Waypoint);
//! assert_eq!(record.customer_code, "USA");
//! ```
//!
//! The [`Records`] iterator classifies every non-blank line of an entire
//! data file:
//!
//! ```
//! # use arinc424::records::Records;
//! # use arinc424::ClassificationKind;
//! let data = "SCANEA...\n\nSEURER...\nab\n";
//!
//! let airways = Records::new(data)
//!     .filter(|(record, _)| record.kind == ClassificationKind::Airway)
//!     .count();
//!
//! assert_eq!(airways, 1);
//! ```
//!
//! [`Records`]: crate::records::Records

mod classify;

pub mod entities;
pub mod records;
pub use classify::*;
