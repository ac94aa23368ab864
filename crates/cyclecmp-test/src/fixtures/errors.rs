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

//! Inputs that must fail the pipeline.

/// `(name, csv_text, expected_message_fragment)` triples.
pub fn fatal_inputs() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        (
            "missing_columns",
            "id,name\n1,new_float3\n",
            "Missing required columns: cycles, iterations",
        ),
        (
            "aliased_missing_name",
            "benchmark_number,label,iterations,cycles_per_tuple\n1,new_float3,10,1\n",
            "Missing required columns: name",
        ),
        (
            "headerless_wrong_width",
            "1,new_float3,10\n2,old_float3,10\n",
            "exactly 4 columns",
        ),
        (
            "nothing_conforms",
            "id,name,iterations,cycles\n1,try_float3,10,1\n2,new_7,10,1\n",
            "No valid data to compare",
        ),
        (
            "header_only",
            "id,name,iterations,cycles\n",
            "No valid data to compare",
        ),
    ]
}
