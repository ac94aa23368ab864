// cyclecmp - Benchmark cycle comparison toolkit
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Record types flowing through the pipeline.
//!
//! A [`CanonicalRecord`] is what the schema normalizer produces from one input
//! row. An [`EnrichedRecord`] adds the three fields derived from the benchmark
//! name. Neither is ever mutated in place: each stage builds a new table.

use std::fmt;

/// Which of the two competing implementations a benchmark measures.
///
/// The declaration order (`New` before `Old`) is the column order of every
/// comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Version {
    /// The candidate implementation.
    New,
    /// The baseline implementation.
    Old,
}

impl Version {
    /// Both versions, in column order.
    pub const ALL: [Version; 2] = [Version::New, Version::Old];

    /// The label used in benchmark names and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Version::New => "new",
            Version::Old => "old",
        }
    }

    /// Parses an exact label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "new" => Some(Version::New),
            "old" => Some(Version::Old),
            _ => None,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric precision variant a benchmark measures.
///
/// Reports list types in declaration order: `float` first, then `dbl`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PrecisionType {
    /// Single precision.
    Float,
    /// Double precision.
    Dbl,
}

impl PrecisionType {
    /// Both types, in report order.
    pub const ALL: [PrecisionType; 2] = [PrecisionType::Float, PrecisionType::Dbl];

    /// The token that marks this type inside a benchmark name.
    pub fn as_str(self) -> &'static str {
        match self {
            PrecisionType::Float => "float",
            PrecisionType::Dbl => "dbl",
        }
    }

    /// Parses an exact label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "float" => Some(PrecisionType::Float),
            "dbl" => Some(PrecisionType::Dbl),
            _ => None,
        }
    }
}

impl fmt::Display for PrecisionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One benchmark run after schema normalization.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanonicalRecord {
    /// Benchmark number. Not required to be unique.
    pub id: i64,
    /// Free-text benchmark name; every derived field comes from it.
    pub name: String,
    /// Iteration count exactly as the input spelled it, surrounding
    /// whitespace removed. Never parsed.
    pub iterations: String,
    /// Cycles per run. `None` if the raw value was not a finite number.
    pub cycles: Option<f64>,
}

impl CanonicalRecord {
    /// Creates a record with all fields present.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        iterations: impl Into<String>,
        cycles: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            iterations: iterations.into(),
            cycles: Some(cycles),
        }
    }
}

/// The fields derived from a benchmark name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Classification {
    /// Trailing digit run of the name.
    pub exceptions: u64,
    /// Leading `new`/`old` prefix.
    pub version: Version,
    /// `float`/`dbl` token.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub precision: PrecisionType,
}

/// A canonical record that follows the naming convention.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnrichedRecord {
    /// The normalized input row.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub record: CanonicalRecord,
    /// Fields derived from `record.name`.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub class: Classification,
}

impl EnrichedRecord {
    /// Cycles per run, if the raw value was numeric.
    pub fn cycles(&self) -> Option<f64> {
        self.record.cycles
    }

    pub fn exceptions(&self) -> u64 {
        self.class.exceptions
    }

    pub fn version(&self) -> Version {
        self.class.version
    }

    pub fn precision(&self) -> PrecisionType {
        self.class.precision
    }
}

/// Output of the field deriver.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnrichedTable {
    /// Conforming records, in input order.
    pub records: Vec<EnrichedRecord>,
}

impl EnrichedTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the records of one precision type.
    pub fn of_type(&self, precision: PrecisionType) -> impl Iterator<Item = &EnrichedRecord> {
        self.records
            .iter()
            .filter(move |r| r.precision() == precision)
    }
}
