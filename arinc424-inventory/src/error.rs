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

use std::error;
use std::fmt;
use std::path::PathBuf;

/// A scan that failed as a whole.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Error {
    /// The data directory could not be listed.
    ReadDir { path: PathBuf, error: String },
    /// A data source could not be read.
    ReadSource { path: PathBuf, error: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadDir { path, error } => {
                write!(f, "failed to list {}: {error}", path.display())
            }
            Self::ReadSource { path, error } => {
                write!(f, "failed to read {}: {error}", path.display())
            }
        }
    }
}

impl error::Error for Error {}
