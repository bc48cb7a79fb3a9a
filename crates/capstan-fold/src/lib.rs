// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Capstan Fold
//!
//! Generic, allocation-free reductions over contiguous buffers of numeric
//! values. The engine folds a borrowed slice into a single aggregate using
//! an `(identity, combine)` pair resolved entirely at compile time through
//! the capability traits of `capstan_core`.
//!
//! ## Modules
//!
//! - `reduction`: The `Reduction<T>` strategy trait and the built-in
//!   strategies `Sum`, `Product`, `Min`, and `Max`.
//! - `fold`: The single-pass fold engine plus per-operation entry points
//!   (`sum`, `product`, `min`, `max`).
//! - `num`: `FoldNumeric`, a unified bound alias for callers that run
//!   several reductions over the same element type.
//!
//! ## Guarantees
//!
//! Every reduction is a single left-to-right pass over the input slice with
//! O(1) storage beyond the accumulator: no allocation, no copy of the
//! backing storage, no runtime type dispatch, and a deterministic order of
//! combine applications (observable for floats, where addition is not
//! exactly associative under rounding).
//!
//! ## Usage
//!
//! ```rust
//! use capstan_fold::fold::sum;
//!
//! let on_stack = [1, 2, 3];
//! assert_eq!(sum(&on_stack), 6);
//!
//! let on_heap = vec![1.5f64, 2.5];
//! assert_eq!(sum(&on_heap), 4.0);
//! ```

pub mod fold;
pub mod num;
pub mod reduction;
