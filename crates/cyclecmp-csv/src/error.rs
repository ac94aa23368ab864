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

//! Error types for CSV loading and export.

use cyclecmp_core::PipelineError;
use thiserror::Error;

/// CSV loading and export errors.
///
/// # Examples
///
/// ```
/// use cyclecmp_csv::CsvError;
///
/// let err = CsvError::SecurityLimit {
///     limit: 10,
///     actual: 11,
/// };
/// assert!(err.to_string().contains("Security limit"));
/// ```
#[derive(Debug, Error)]
pub enum CsvError {
    /// A record could not be parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclecmp_csv::CsvError;
    ///
    /// let err = CsvError::ParseError {
    ///     line: 42,
    ///     message: "invalid UTF-8".to_string(),
    /// };
    /// assert!(err.to_string().contains("line 42"));
    /// ```
    #[error("CSV parse error at line {line}: {message}")]
    ParseError {
        /// Record number where the error occurred (1-based).
        line: usize,
        /// Detailed error message.
        message: String,
    },

    /// The input contains no rows at all.
    #[error("CSV input is empty")]
    Empty,

    /// Row count exceeded the configured limit.
    #[error("Security limit exceeded: row count {actual} exceeds maximum {limit}")]
    SecurityLimit {
        /// Maximum allowed rows.
        limit: usize,
        /// Row count reached when the limit tripped.
        actual: usize,
    },

    /// I/O error while reading or writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the underlying CSV library.
    #[error("CSV library error: {0}")]
    CsvLib(#[from] csv::Error),

    /// The loaded table failed the pipeline.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// Invalid UTF-8 in generated output.
    #[error("Invalid UTF-8 in {context}")]
    InvalidUtf8 {
        /// Where the invalid UTF-8 was produced.
        context: String,
    },
}

/// Convenience type alias for `Result` with `CsvError`.
pub type Result<T> = std::result::Result<T, CsvError>;

#[cfg(test)]
mod tests {
    use super::*;
    use cyclecmp_core::SchemaError;

    #[test]
    fn test_parse_error_display() {
        let err = CsvError::ParseError {
            line: 3,
            message: "bad quote".to_string(),
        };
        assert_eq!(err.to_string(), "CSV parse error at line 3: bad quote");
    }

    #[test]
    fn test_pipeline_error_is_transparent() {
        let err: CsvError = PipelineError::from(SchemaError::missing(["cycles"])).into();
        assert_eq!(err.to_string(), "Missing required columns: cycles");
    }

    #[test]
    fn test_io_error_from() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = CsvError::from(io);
        assert!(matches!(err, CsvError::Io(_)));
        assert!(err.to_string().contains("gone"));
    }
}
