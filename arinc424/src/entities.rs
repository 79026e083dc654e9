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

//! Navigation entities that classified records decode into.
//!
//! A [`Waypoint`](crate::ClassificationKind::Waypoint) record becomes a
//! [`Waypoint`], [`VorDme`](crate::ClassificationKind::VorDme) and
//! [`Ndb`](crate::ClassificationKind::Ndb) records become a [`Navaid`] and
//! consecutive [`Airway`](crate::ClassificationKind::Airway) records become
//! [`AirwayEdge`]s.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::Serialize;

/// The entity shape a classified record belongs to.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum EntityKind {
    Waypoint,
    Navaid,
    AirwayEdge,
}

/// An enroute waypoint.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Waypoint {
    /// Fix identifier of up to five characters, e.g. `ADLER`.
    pub identifier: String,
    /// Two character ICAO region, e.g. `CY`.
    pub icao_region: String,
    /// Latitude in decimal degrees, positive north.
    pub latitude: f64,
    /// Longitude in decimal degrees, positive east.
    pub longitude: f64,
}

#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum NavaidType {
    #[cfg_attr(feature = "serde", serde(rename = "VOR"))]
    Vor,
    #[cfg_attr(feature = "serde", serde(rename = "DME"))]
    Dme,
    #[cfg_attr(feature = "serde", serde(rename = "VOR-DME"))]
    VorDme,
    #[cfg_attr(feature = "serde", serde(rename = "NDB"))]
    Ndb,
    #[cfg_attr(feature = "serde", serde(rename = "NDB-DME"))]
    NdbDme,
    #[cfg_attr(feature = "serde", serde(rename = "TACAN"))]
    Tacan,
    #[cfg_attr(feature = "serde", serde(rename = "ILS"))]
    Ils,
    Unknown,
}

impl NavaidType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vor => "VOR",
            Self::Dme => "DME",
            Self::VorDme => "VOR-DME",
            Self::Ndb => "NDB",
            Self::NdbDme => "NDB-DME",
            Self::Tacan => "TACAN",
            Self::Ils => "ILS",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for NavaidType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the navaid type from its name.
///
/// Names are matched exactly and anything unrecognized is
/// [`Unknown`](NavaidType::Unknown).
impl FromStr for NavaidType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "VOR" => Self::Vor,
            "DME" => Self::Dme,
            "VOR-DME" => Self::VorDme,
            "NDB" => Self::Ndb,
            "NDB-DME" => Self::NdbDme,
            "TACAN" => Self::Tacan,
            "ILS" => Self::Ils,
            _ => Self::Unknown,
        })
    }
}

/// A radio navigation aid.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Navaid {
    pub identifier: String,
    pub icao_region: String,
    pub navaid_type: NavaidType,
    /// Frequency as found in the record: kHz for NDBs and MHz times 100 for
    /// VHF navaids.
    pub frequency: u32,
    pub latitude: f64,
    pub longitude: f64,
}

/// A directed airway segment between two fixes.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AirwayEdge {
    /// Airway designator, e.g. `J556`.
    pub airway_identifier: String,
    pub from_fix: String,
    pub from_icao_region: String,
    pub to_fix: String,
    pub to_icao_region: String,
    /// Distance in nautical miles, 0 if the record provides none.
    pub distance_nm: f64,
    /// Minimum altitude in feet.
    pub minimum_altitude: u32,
    /// Maximum altitude in feet.
    pub maximum_altitude: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navaid_type_names_round_trip() {
        for navaid_type in [
            NavaidType::Vor,
            NavaidType::Dme,
            NavaidType::VorDme,
            NavaidType::Ndb,
            NavaidType::NdbDme,
            NavaidType::Tacan,
            NavaidType::Ils,
            NavaidType::Unknown,
        ] {
            assert_eq!(
                navaid_type.to_string().parse::<NavaidType>(),
                Ok(navaid_type)
            );
        }
    }

    #[test]
    fn unrecognized_navaid_type_is_unknown() {
        assert_eq!("vor".parse::<NavaidType>(), Ok(NavaidType::Unknown));
        assert_eq!("LOC".parse::<NavaidType>(), Ok(NavaidType::Unknown));
    }
}
