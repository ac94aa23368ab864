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

//! Well-formed input tables.

/// Four headerless rows; float at 3 exceptions, new 125 vs old 155.
pub fn end_to_end_legacy() -> &'static str {
    "1,new_float3,10,120.0\n\
     2,old_float3,10,150.0\n\
     3,new_float3,10,130.0\n\
     4,old_float3,10,160.0\n"
}

/// [`end_to_end_legacy`] with a canonical header.
pub fn end_to_end_modern() -> &'static str {
    "id,name,iterations,cycles\n\
     1,new_float3,10,120.0\n\
     2,old_float3,10,150.0\n\
     3,new_float3,10,130.0\n\
     4,old_float3,10,160.0\n"
}

/// [`end_to_end_legacy`] with the harness's own column names, reordered.
pub fn end_to_end_aliased() -> &'static str {
    "name,benchmark_number,cycles_per_tuple,iterations\n\
     new_float3,1,120.0,10\n\
     old_float3,2,150.0,10\n\
     new_float3,3,130.0,10\n\
     old_float3,4,160.0,10\n"
}

/// Both types, several exception counts.
///
/// Float: exc 0 new 100 / old 200, exc 5 new 50 / old 150 (speedup 2.50).
/// Dbl: exc 0 new 80 / old 120, exc 5 new 40 / old 40 (speedup 1.25).
pub fn mixed_types() -> &'static str {
    "benchmark_number,name,iterations,cycles_per_tuple\n\
     1,new_float_exc0,100,100\n\
     2,old_float_exc0,100,200\n\
     3,new_float_exc5,100,50\n\
     4,old_float_exc5,100,150\n\
     5,new_dbl_exc0,100,80\n\
     6,old_dbl_exc0,100,120\n\
     7,new_dbl_exc5,100,40\n\
     8,old_dbl_exc5,100,40\n"
}

/// Conforming rows mixed with every kind of row-level noise.
///
/// Only the float pair at 2 exceptions (new 10, old 30) and the undefined
/// `new_float2` cycles row survive derivation.
pub fn noisy() -> &'static str {
    "id,name,iterations,cycles,comment\n\
     1,new_float2,10,10,ok\n\
     2,old_float2,10,30,ok\n\
     x,new_float2,10,999,bad id\n\
     3,try_float2,10,999,try prefix\n\
     4,new_float,10,999,no exceptions\n\
     5,new_2,10,999,no type\n\
     6,new_float2,10,n/a,bad cycles\n"
}

/// Only `new` rows for dbl, a full pair for float.
pub fn one_sided_dbl() -> &'static str {
    "id,name,iterations,cycles\n\
     1,new_float1,10,100\n\
     2,old_float1,10,150\n\
     3,new_dbl1,10,90\n\
     4,new_dbl2,10,95\n"
}

/// A zero `new` cell at 0 exceptions; only exc 1 feeds the speedup (3.00).
pub fn zero_denominator() -> &'static str {
    "id,name,iterations,cycles\n\
     1,new_float0,10,0\n\
     2,old_float0,10,50\n\
     3,new_float1,10,10\n\
     4,old_float1,10,30\n"
}
