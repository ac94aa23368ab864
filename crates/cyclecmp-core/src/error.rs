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

//! Error types for the classification and aggregation pipeline.
//!
//! Only two conditions are fatal: an input whose columns cannot be resolved
//! and an input where no row survives classification. Row-level problems
//! (malformed ids, unparsable cycle counts, names outside the naming
//! convention) never surface as errors; those rows are simply dropped.

use thiserror::Error;

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// The input table cannot be mapped onto the canonical column set.
///
/// # Examples
///
/// ```
/// use cyclecmp_core::SchemaError;
///
/// let err = SchemaError::MissingColumns {
///     missing: vec!["cycles".to_string(), "iterations".to_string()],
/// };
/// assert_eq!(err.to_string(), "Missing required columns: cycles, iterations");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Required canonical columns are absent after alias substitution.
    ///
    /// `missing` is sorted so the message is stable across runs.
    #[error("Missing required columns: {}", .missing.join(", "))]
    MissingColumns {
        /// Canonical names of the unresolved columns, sorted.
        missing: Vec<String>,
    },

    /// The table has no `id` column, so it was read as the headerless layout,
    /// but its rows are not four fields wide.
    #[error(
        "Headerless input must have exactly 4 columns (id, name, iterations, cycles), found {found}"
    )]
    LegacyWidth {
        /// Number of fields in the first row.
        found: usize,
    },
}

impl SchemaError {
    /// Builds a [`SchemaError::MissingColumns`] with the names sorted.
    pub fn missing<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut missing: Vec<String> = names.into_iter().map(Into::into).collect();
        missing.sort();
        missing.dedup();
        SchemaError::MissingColumns { missing }
    }
}

/// Fatal pipeline failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// The input columns could not be resolved.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Every row was dropped before aggregation.
    #[error(
        "No valid data to compare: none of the {canonical_rows} normalized rows follow the \
         '<new|old>..<float|dbl>..<exceptions>' naming convention"
    )]
    EmptyResult {
        /// Rows that survived normalization.
        canonical_rows: usize,
    },
}

impl PipelineError {
    /// Returns `true` for schema errors.
    pub fn is_schema(&self) -> bool {
        matches!(self, PipelineError::Schema(_))
    }
}
