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

use core::ops::{Add, Mul};

/// A trait for types that support native addition by value (no references).
///
/// "Native" means pass-through: the result is exactly what the type's own
/// `+` produces, including the standard integer overflow behavior (panic in
/// debug builds, two's-complement wrap in release builds) and IEEE rounding
/// for floats. The trait neither detects nor corrects either; callers that
/// need checked or saturating semantics should reach for those APIs instead.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::ops::native_arithmetic::AddVal;
/// let a: i32 = 40;
/// let b: i32 = 2;
/// assert_eq!(a.add_val(b), 42);
///
/// let x: f64 = 1.5;
/// let y: f64 = 2.5;
/// assert_eq!(x.add_val(y), 4.0);
/// ```
pub trait AddVal: Sized + Add<Self, Output = Self> {
    /// Performs native addition by value.
    fn add_val(self, v: Self) -> Self;
}

/// A trait for types that support native multiplication by value
/// (no references).
///
/// Same pass-through contract as [`AddVal`]: overflow and rounding behavior
/// is whatever the type's own `*` produces.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::ops::native_arithmetic::MulVal;
/// let a: i32 = 6;
/// let b: i32 = 7;
/// assert_eq!(a.mul_val(b), 42);
///
/// let x: f64 = 0.5;
/// let y: f64 = 8.0;
/// assert_eq!(x.mul_val(y), 4.0);
/// ```
pub trait MulVal: Sized + Mul<Self, Output = Self> {
    /// Performs native multiplication by value.
    fn mul_val(self, v: Self) -> Self;
}

macro_rules! native_impl_binary_val {
    ($trait_name:ident, $method:ident, $t:ty, $op:tt) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: $t) -> $t {
                self $op v
            }
        }
    };
}

native_impl_binary_val!(AddVal, add_val, u8, +);
native_impl_binary_val!(AddVal, add_val, u16, +);
native_impl_binary_val!(AddVal, add_val, u32, +);
native_impl_binary_val!(AddVal, add_val, u64, +);
native_impl_binary_val!(AddVal, add_val, usize, +);
native_impl_binary_val!(AddVal, add_val, u128, +);

native_impl_binary_val!(AddVal, add_val, i8, +);
native_impl_binary_val!(AddVal, add_val, i16, +);
native_impl_binary_val!(AddVal, add_val, i32, +);
native_impl_binary_val!(AddVal, add_val, i64, +);
native_impl_binary_val!(AddVal, add_val, isize, +);
native_impl_binary_val!(AddVal, add_val, i128, +);

native_impl_binary_val!(AddVal, add_val, f32, +);
native_impl_binary_val!(AddVal, add_val, f64, +);

native_impl_binary_val!(MulVal, mul_val, u8, *);
native_impl_binary_val!(MulVal, mul_val, u16, *);
native_impl_binary_val!(MulVal, mul_val, u32, *);
native_impl_binary_val!(MulVal, mul_val, u64, *);
native_impl_binary_val!(MulVal, mul_val, usize, *);
native_impl_binary_val!(MulVal, mul_val, u128, *);

native_impl_binary_val!(MulVal, mul_val, i8, *);
native_impl_binary_val!(MulVal, mul_val, i16, *);
native_impl_binary_val!(MulVal, mul_val, i32, *);
native_impl_binary_val!(MulVal, mul_val, i64, *);
native_impl_binary_val!(MulVal, mul_val, isize, *);
native_impl_binary_val!(MulVal, mul_val, i128, *);

native_impl_binary_val!(MulVal, mul_val, f32, *);
native_impl_binary_val!(MulVal, mul_val, f64, *);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_val_integers() {
        assert_eq!(3u8.add_val(4), 7);
        assert_eq!((-5i64).add_val(5), 0);
        assert_eq!(1usize.add_val(2), 3);
    }

    #[test]
    fn test_add_val_floats() {
        assert_eq!(1.5f64.add_val(2.5), 4.0);
        assert_eq!(0.25f32.add_val(0.75), 1.0);
    }

    #[test]
    fn test_mul_val_integers() {
        assert_eq!(6i32.mul_val(7), 42);
        assert_eq!(0u128.mul_val(12345), 0);
    }

    #[test]
    fn test_mul_val_floats() {
        assert_eq!(2.0f64.mul_val(3.5), 7.0);
    }
}
