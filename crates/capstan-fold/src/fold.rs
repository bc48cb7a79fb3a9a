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

//! # Buffer Reduction Engine
//!
//! A single-pass fold over a borrowed contiguous slice, parameterized by a
//! [`Reduction`] strategy. The traversal is written exactly once; every
//! operation (`sum`, `product`, `min`, `max`) is a thin entry point that
//! picks a strategy type.
//!
//! ## Guarantees
//!
//! - Single left-to-right pass; every element visited exactly once.
//! - O(1) storage beyond the accumulator; no allocation, no copy of the
//!   backing storage.
//! - Deterministic combine order. This is observable for floats, where
//!   addition is not exactly associative under rounding.
//! - An empty slice yields the strategy's identity, not an error.
//! - Referentially transparent: no side effects, reentrant, safe to call
//!   concurrently on independent slices.
//!
//! ## Usage
//!
//! ```rust
//! use capstan_fold::fold::{max, min, product, sum};
//!
//! let values = [3, 1, 4, 1, 5];
//! assert_eq!(sum(&values), 14);
//! assert_eq!(product(&values), 60);
//! assert_eq!(min(&values), 1);
//! assert_eq!(max(&values), 5);
//! ```

use crate::reduction::{Max, Min, Product, Reduction, Sum};
use capstan_core::num::constants::{One, Zero};
use capstan_core::num::ops::extrema::{MaxVal, MinVal};
use capstan_core::num::ops::native_arithmetic::{AddVal, MulVal};
use num_traits::Bounded;

/// Folds a borrowed slice into a single aggregate using strategy `R`.
///
/// The accumulator starts at `R::identity()` and is combined with each
/// element in index order, first to last. The slice may live anywhere
/// contiguous (stack array, heap buffer, sub-slice); it is only read.
///
/// # Examples
///
/// ```rust
/// # use capstan_fold::fold::fold;
/// # use capstan_fold::reduction::Sum;
/// assert_eq!(fold::<Sum, i32>(&[1, 2, 3]), 6);
/// assert_eq!(fold::<Sum, i32>(&[]), 0);
/// ```
#[inline]
pub fn fold<R, T>(values: &[T]) -> T
where
    T: Copy,
    R: Reduction<T>,
{
    let mut acc = R::identity();
    for &value in values {
        acc = R::combine(acc, value);
    }
    acc
}

/// Sums all elements of a slice, left to right, starting from `T::ZERO`.
///
/// Integer overflow and float rounding are the native pass-through of the
/// element type's `+` (see `capstan_core::num::ops::native_arithmetic`);
/// the engine neither detects nor corrects either.
///
/// # Examples
///
/// ```rust
/// # use capstan_fold::fold::sum;
/// assert_eq!(sum(&[1, 2, 3]), 6);
/// assert_eq!(sum(&[1.5f64, 2.5]), 4.0);
/// assert_eq!(sum::<i32>(&[]), 0);
/// ```
#[inline]
pub fn sum<T>(values: &[T]) -> T
where
    T: Copy + Zero + AddVal,
{
    fold::<Sum, T>(values)
}

/// Multiplies all elements of a slice, left to right, starting from
/// `T::ONE`. Same native pass-through contract as [`sum`].
///
/// # Examples
///
/// ```rust
/// # use capstan_fold::fold::product;
/// assert_eq!(product(&[2, 3, 7]), 42);
/// assert_eq!(product::<i32>(&[]), 1);
/// ```
#[inline]
pub fn product<T>(values: &[T]) -> T
where
    T: Copy + One + MulVal,
{
    fold::<Product, T>(values)
}

/// Returns the smallest element of a slice, or `T::max_value()` for an
/// empty slice (the identity of the minimum operation).
///
/// # Examples
///
/// ```rust
/// # use capstan_fold::fold::min;
/// assert_eq!(min(&[3, 1, 4]), 1);
/// assert_eq!(min::<i32>(&[]), i32::MAX);
/// ```
#[inline]
pub fn min<T>(values: &[T]) -> T
where
    T: Copy + Bounded + MinVal,
{
    fold::<Min, T>(values)
}

/// Returns the largest element of a slice, or `T::min_value()` for an
/// empty slice (the identity of the maximum operation).
///
/// # Examples
///
/// ```rust
/// # use capstan_fold::fold::max;
/// assert_eq!(max(&[3, 1, 4]), 4);
/// assert_eq!(max::<i32>(&[]), i32::MIN);
/// ```
#[inline]
pub fn max<T>(values: &[T]) -> T
where
    T: Copy + Bounded + MaxVal,
{
    fold::<Max, T>(values)
}
