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

//! Field derivation from benchmark names.
//!
//! Benchmark names follow a soft convention: a `new`/`old` prefix, a
//! `float`/`dbl` token somewhere in the middle and the exception count as a
//! trailing digit run, e.g. `new_float_exc3`. Each rule is a separate
//! extractor returning `Option`; a row is kept only when all three resolve.

use crate::normalize::CanonicalTable;
use crate::record::{Classification, EnrichedRecord, EnrichedTable, PrecisionType, Version};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static TRAILING_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+$").expect("valid trailing digits pattern"));

static VERSION_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(new|old)").expect("valid version prefix pattern"));

/// Extracts the exception count: the maximal trailing run of ASCII digits.
///
/// A run too long for `u64` is treated like no run at all.
///
/// # Examples
///
/// ```
/// use cyclecmp_core::derive::extract_exceptions;
///
/// assert_eq!(extract_exceptions("new_float_exc12"), Some(12));
/// assert_eq!(extract_exceptions("old_float"), None);
/// ```
pub fn extract_exceptions(name: &str) -> Option<u64> {
    TRAILING_DIGITS
        .find(name)
        .and_then(|m| m.as_str().parse::<u64>().ok())
}

/// Extracts the version from a leading `new` or `old`.
///
/// Any other prefix, `try` included, yields `None`.
pub fn extract_version(name: &str) -> Option<Version> {
    VERSION_PREFIX
        .captures(name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| Version::from_label(m.as_str()))
}

/// Classifies the precision type by substring.
///
/// `float` is checked before `dbl`, so a name containing both is `float`.
pub fn extract_type(name: &str) -> Option<PrecisionType> {
    PrecisionType::ALL
        .into_iter()
        .find(|precision| name.contains(precision.as_str()))
}

/// Runs every extractor and combines the results.
///
/// All three rules are evaluated before the inclusion decision is made.
///
/// # Examples
///
/// ```
/// use cyclecmp_core::derive::classify;
/// use cyclecmp_core::{PrecisionType, Version};
///
/// let class = classify("new_float_exc3").unwrap();
/// assert_eq!(class.version, Version::New);
/// assert_eq!(class.precision, PrecisionType::Float);
/// assert_eq!(class.exceptions, 3);
///
/// assert!(classify("try_dbl_7").is_none());
/// ```
pub fn classify(name: &str) -> Option<Classification> {
    let exceptions = extract_exceptions(name);
    let version = extract_version(name);
    let precision = extract_type(name);

    Some(Classification {
        exceptions: exceptions?,
        version: version?,
        precision: precision?,
    })
}

/// Derives the classification fields for every canonical record and keeps
/// the conforming subset.
///
/// Records with an undefined `cycles` value are kept; aggregation skips them.
pub fn derive(table: &CanonicalTable) -> EnrichedTable {
    let records: Vec<EnrichedRecord> = table
        .records
        .iter()
        .filter_map(|record| {
            classify(&record.name).map(|class| EnrichedRecord {
                record: record.clone(),
                class,
            })
        })
        .collect();

    debug!(
        kept = records.len(),
        dropped = table.records.len() - records.len(),
        "classified benchmark names"
    );

    EnrichedTable { records }
}
