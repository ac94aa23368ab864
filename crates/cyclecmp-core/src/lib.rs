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

//! Classification and aggregation of new-versus-old benchmark measurements.
//!
//! A measurement harness emits one row per micro-benchmark run:
//! `id, name, iterations, cycles`. This crate turns those rows into a
//! per-type comparison of the `new` and `old` implementations.
//!
//! # Pipeline
//!
//! ```text
//! RawTable ──normalize──▶ CanonicalTable ──derive──▶ EnrichedTable
//!          ──aggregate──▶ ComparisonTable (per type) ──compare──▶ ComparisonSummary
//! ```
//!
//! - **normalize**: resolves the headered or headerless layout and the
//!   column aliases; drops rows without a whole-number id.
//! - **derive**: reads `exceptions`, `version` and `type` from the benchmark
//!   name; drops rows outside the naming convention.
//! - **aggregate**: mean cycles per `(type, exceptions, version)`.
//! - **compare**: column means and the average paired speedup.
//!
//! # Example
//!
//! ```
//! use cyclecmp_core::{analyze, PrecisionType, RawTable};
//!
//! let raw = RawTable::from_rows(vec![
//!     vec!["id", "name", "iterations", "cycles"],
//!     vec!["1", "new_float3", "10", "120.0"],
//!     vec!["2", "old_float3", "10", "150.0"],
//! ]);
//!
//! let analysis = analyze(&raw).unwrap();
//! let summary = analysis.summary(PrecisionType::Float).unwrap();
//! assert_eq!(summary.avg_new, 120.0);
//! assert_eq!(summary.avg_old, 150.0);
//! ```
//!
//! # Errors
//!
//! Only unresolvable columns and an empty result are fatal; see
//! [`PipelineError`]. Malformed rows are dropped without error.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for the record and result types.

pub mod aggregate;
pub mod compare;
pub mod derive;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod record;
pub mod report;

pub use aggregate::{aggregate, ComparisonTable};
pub use compare::{compare, speedup_series, ComparisonSummary};
pub use derive::{classify, derive};
pub use error::{PipelineError, Result, SchemaError};
pub use normalize::{normalize, CanonicalColumn, CanonicalTable, ColumnMap, InputShape, RawTable};
pub use pipeline::{analyze, Analysis};
pub use record::{
    CanonicalRecord, Classification, EnrichedRecord, EnrichedTable, PrecisionType, Version,
};
