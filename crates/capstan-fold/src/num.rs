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

//! # Fold Numeric Trait
//!
//! Unified numeric bounds for reduction callers. `FoldNumeric` collects the
//! full capability set required by every built-in reduction strategy,
//! including identity constants (`Zero`, `One`), by-value combine traits
//! from `capstan_core`, and `num_traits::Bounded` for the extrema
//! identities.
//!
//! ## Motivation
//!
//! Each entry point of the engine is bounded only by what its own strategy
//! needs, so a minimal type (say, one that only adds) pays for nothing
//! more. Generic callers that run several reductions over the same element
//! type, however, end up repeating six or seven bounds per signature. This
//! alias collects them once, the way a solver collects its integer bounds.
//!
//! ## Highlights
//!
//! - Requires `Zero + One` identity constants and the by-value combine
//!   traits `AddVal`, `MulVal`, `MinVal`, `MaxVal`.
//! - Requires `num_traits::Bounded` for the `Min`/`Max` identities.
//! - `Send + Sync` for concurrent reduction over independent buffers.

use capstan_core::num::constants::{One, Zero};
use capstan_core::num::ops::extrema::{MaxVal, MinVal};
use capstan_core::num::ops::native_arithmetic::{AddVal, MulVal};
use num_traits::Bounded;

/// A trait alias for element types usable with every built-in reduction
/// strategy. These are all primitive integer and float types, plus any
/// user-defined kind that implements the full capability set.
///
/// # Examples
///
/// ```rust
/// use capstan_fold::fold::{max, min, sum};
/// use capstan_fold::num::FoldNumeric;
///
/// fn spread<T: FoldNumeric>(values: &[T]) -> (T, T, T) {
///     (sum(values), min(values), max(values))
/// }
///
/// let (total, lo, hi) = spread(&[3, 1, 4, 1, 5]);
/// assert_eq!((total, lo, hi), (14, 1, 5));
/// ```
pub trait FoldNumeric:
    Copy
    + Zero
    + One
    + AddVal
    + MulVal
    + MinVal
    + MaxVal
    + Bounded
    + std::fmt::Debug
    + std::fmt::Display
    + Send
    + Sync
{
}

impl<T> FoldNumeric for T where
    T: Copy
        + Zero
        + One
        + AddVal
        + MulVal
        + MinVal
        + MaxVal
        + Bounded
        + std::fmt::Debug
        + std::fmt::Display
        + Send
        + Sync
{
}
