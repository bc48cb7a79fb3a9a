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

//! # Reduction Strategies
//!
//! The `(identity, combine)` pair that parameterizes the fold engine,
//! expressed as a statically resolved strategy trait. The traversal logic
//! lives once in [`crate::fold::fold`]; each strategy here only supplies
//! the identity value and the combine step.
//!
//! ## Built-in strategies
//!
//! - [`Sum`]: identity `T::ZERO`, combine native addition.
//! - [`Product`]: identity `T::ONE`, combine native multiplication.
//! - [`Min`]: identity `T::max_value()`, combine minimum selection.
//! - [`Max`]: identity `T::min_value()`, combine maximum selection.
//!
//! A strategy is a unit type, never instantiated; it exists purely to carry
//! the operation choice in a type parameter, so the compiler monomorphizes
//! one loop per `(strategy, element)` pair with no dispatch at runtime.

use capstan_core::num::constants::{One, Zero};
use capstan_core::num::ops::extrema::{MaxVal, MinVal};
use capstan_core::num::ops::native_arithmetic::{AddVal, MulVal};
use num_traits::Bounded;

/// An associative combine operation together with its identity value.
///
/// The identity must satisfy `combine(identity(), x) == x` for every
/// representable `x`. Associativity is required only up to the
/// representational limits of `T`: float addition rounds, and the engine
/// deliberately does not renormalize.
///
/// # Examples
///
/// ```rust
/// # use capstan_fold::reduction::{Reduction, Sum};
/// assert_eq!(<Sum as Reduction<i32>>::identity(), 0);
/// assert_eq!(<Sum as Reduction<i32>>::combine(40, 2), 42);
/// ```
pub trait Reduction<T> {
    /// Returns the identity value of the combine operation.
    fn identity() -> T;

    /// Combines the accumulator with the next element.
    fn combine(acc: T, value: T) -> T;
}

/// Summation: identity `T::ZERO`, combine native addition.
///
/// Overflow and rounding behavior is the native pass-through of the element
/// type's `+`; see `capstan_core::num::ops::native_arithmetic`.
pub struct Sum;

/// Product: identity `T::ONE`, combine native multiplication.
pub struct Product;

/// Minimum: identity `T::max_value()`, combine minimum selection.
pub struct Min;

/// Maximum: identity `T::min_value()`, combine maximum selection.
pub struct Max;

impl<T> Reduction<T> for Sum
where
    T: Zero + AddVal,
{
    #[inline(always)]
    fn identity() -> T {
        T::ZERO
    }

    #[inline(always)]
    fn combine(acc: T, value: T) -> T {
        acc.add_val(value)
    }
}

impl<T> Reduction<T> for Product
where
    T: One + MulVal,
{
    #[inline(always)]
    fn identity() -> T {
        T::ONE
    }

    #[inline(always)]
    fn combine(acc: T, value: T) -> T {
        acc.mul_val(value)
    }
}

impl<T> Reduction<T> for Min
where
    T: Bounded + MinVal,
{
    #[inline(always)]
    fn identity() -> T {
        T::max_value()
    }

    #[inline(always)]
    fn combine(acc: T, value: T) -> T {
        acc.min_val(value)
    }
}

impl<T> Reduction<T> for Max
where
    T: Bounded + MaxVal,
{
    #[inline(always)]
    fn identity() -> T {
        T::min_value()
    }

    #[inline(always)]
    fn combine(acc: T, value: T) -> T {
        acc.max_val(value)
    }
}
