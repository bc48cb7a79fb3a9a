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

/// A trait for types that support minimum selection by value (no references).
///
/// For integers this mirrors `Ord::min`. For floats it mirrors the inherent
/// `f32::min`/`f64::min`, which ignore NaN when only one operand is NaN.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::ops::extrema::MinVal;
/// let a: i32 = 3;
/// let b: i32 = -7;
/// assert_eq!(a.min_val(b), -7);
///
/// let x: f64 = 1.5;
/// assert_eq!(x.min_val(f64::NAN), 1.5);
/// ```
pub trait MinVal: Sized {
    /// Returns the smaller of `self` and `v` by value.
    fn min_val(self, v: Self) -> Self;
}

/// A trait for types that support maximum selection by value (no references).
///
/// For integers this mirrors `Ord::max`. For floats it mirrors the inherent
/// `f32::max`/`f64::max`, which ignore NaN when only one operand is NaN.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::ops::extrema::MaxVal;
/// let a: u8 = 3;
/// let b: u8 = 250;
/// assert_eq!(a.max_val(b), 250);
/// ```
pub trait MaxVal: Sized {
    /// Returns the larger of `self` and `v` by value.
    fn max_val(self, v: Self) -> Self;
}

macro_rules! extrema_impl_val {
    ($trait_name:ident, $method:ident, $t:ty, $src_method:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: $t) -> $t {
                <$t>::$src_method(self, v)
            }
        }
    };
}

extrema_impl_val!(MinVal, min_val, u8, min);
extrema_impl_val!(MinVal, min_val, u16, min);
extrema_impl_val!(MinVal, min_val, u32, min);
extrema_impl_val!(MinVal, min_val, u64, min);
extrema_impl_val!(MinVal, min_val, usize, min);
extrema_impl_val!(MinVal, min_val, u128, min);

extrema_impl_val!(MinVal, min_val, i8, min);
extrema_impl_val!(MinVal, min_val, i16, min);
extrema_impl_val!(MinVal, min_val, i32, min);
extrema_impl_val!(MinVal, min_val, i64, min);
extrema_impl_val!(MinVal, min_val, isize, min);
extrema_impl_val!(MinVal, min_val, i128, min);

extrema_impl_val!(MinVal, min_val, f32, min);
extrema_impl_val!(MinVal, min_val, f64, min);

extrema_impl_val!(MaxVal, max_val, u8, max);
extrema_impl_val!(MaxVal, max_val, u16, max);
extrema_impl_val!(MaxVal, max_val, u32, max);
extrema_impl_val!(MaxVal, max_val, u64, max);
extrema_impl_val!(MaxVal, max_val, usize, max);
extrema_impl_val!(MaxVal, max_val, u128, max);

extrema_impl_val!(MaxVal, max_val, i8, max);
extrema_impl_val!(MaxVal, max_val, i16, max);
extrema_impl_val!(MaxVal, max_val, i32, max);
extrema_impl_val!(MaxVal, max_val, i64, max);
extrema_impl_val!(MaxVal, max_val, isize, max);
extrema_impl_val!(MaxVal, max_val, i128, max);

extrema_impl_val!(MaxVal, max_val, f32, max);
extrema_impl_val!(MaxVal, max_val, f64, max);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_val_integers() {
        assert_eq!(3i32.min_val(-7), -7);
        assert_eq!(0u8.min_val(255), 0);
    }

    #[test]
    fn test_max_val_integers() {
        assert_eq!(3i32.max_val(-7), 3);
        assert_eq!(0u8.max_val(255), 255);
    }

    #[test]
    fn test_min_max_val_floats() {
        assert_eq!(1.5f64.min_val(2.5), 1.5);
        assert_eq!(1.5f64.max_val(2.5), 2.5);
    }

    #[test]
    fn test_float_nan_is_ignored_one_sided() {
        assert_eq!(1.5f64.min_val(f64::NAN), 1.5);
        assert_eq!(f64::NAN.max_val(1.5), 1.5);
    }
}
