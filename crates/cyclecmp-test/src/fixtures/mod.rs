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

//! Canonical benchmark-result inputs.
//!
//! - **inputs**: well-formed tables in both layouts
//! - **errors**: inputs that must fail the pipeline
//! - **builders**: fluent construction of custom tables

pub mod builders;
pub mod errors;
mod inputs;

pub use inputs::*;

use crate::FixtureList;

/// Returns every well-formed fixture.
pub fn all() -> FixtureList {
    vec![
        ("end_to_end_legacy", end_to_end_legacy()),
        ("end_to_end_modern", end_to_end_modern()),
        ("end_to_end_aliased", end_to_end_aliased()),
        ("mixed_types", mixed_types()),
        ("noisy", noisy()),
        ("one_sided_dbl", one_sided_dbl()),
        ("zero_denominator", zero_denominator()),
    ]
}
