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

//! Textual report lines.
//!
//! The two-line format per type is consumed by scripts that grep the output,
//! so it must stay byte-for-byte stable:
//!
//! ```text
//! Float: average cycles per run — new: 125.0, old: 155.0.
//! Float: new is on average 1.24× faster than old.
//! ```

use crate::compare::ComparisonSummary;
use crate::record::PrecisionType;

/// Uppercases the first character of a label.
///
/// # Examples
///
/// ```
/// use cyclecmp_core::report::capitalize;
///
/// assert_eq!(capitalize("float"), "Float");
/// assert_eq!(capitalize("dbl"), "Dbl");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The averages line for one type.
pub fn averages_line(precision: PrecisionType, summary: &ComparisonSummary) -> String {
    format!(
        "{}: average cycles per run — new: {:.1}, old: {:.1}.",
        capitalize(precision.as_str()),
        summary.avg_new,
        summary.avg_old
    )
}

/// The speedup line for one type, if a speedup could be computed.
pub fn speedup_line(precision: PrecisionType, summary: &ComparisonSummary) -> Option<String> {
    summary.avg_speedup.map(|speedup| {
        format!(
            "{}: new is on average {:.2}× faster than old.",
            capitalize(precision.as_str()),
            speedup
        )
    })
}

/// Both report lines for one type.
pub fn summary_lines(precision: PrecisionType, summary: &ComparisonSummary) -> Vec<String> {
    let mut lines = vec![averages_line(precision, summary)];
    lines.extend(speedup_line(precision, summary));
    lines
}
