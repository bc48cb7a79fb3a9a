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

/// A trait for numeric types that have a constant representing the additive
/// identity, satisfying `zero + x == x` for every representable `x`.
pub trait Zero {
    /// The constant representing 0 for the implementing type.
    const ZERO: Self;
}

/// A trait for numeric types that have a constant representing the
/// multiplicative identity, satisfying `one * x == x` for every
/// representable `x`.
pub trait One {
    /// The constant representing 1 for the implementing type.
    const ONE: Self;
}

macro_rules! impl_const_for {
    ($trait_name:ident, $const_name:ident, $value:expr, $t:ty) => {
        impl $trait_name for $t {
            const $const_name: Self = $value;
        }
    };
}

macro_rules! impl_zero_for {
    ($t:ty, $value:expr) => {
        impl_const_for!(Zero, ZERO, $value, $t);
    };
}

macro_rules! impl_one_for {
    ($t:ty, $value:expr) => {
        impl_const_for!(One, ONE, $value, $t);
    };
}

impl_zero_for!(i8, 0);
impl_zero_for!(u8, 0);
impl_zero_for!(i16, 0);
impl_zero_for!(u16, 0);
impl_zero_for!(i32, 0);
impl_zero_for!(u32, 0);
impl_zero_for!(i64, 0);
impl_zero_for!(u64, 0);
impl_zero_for!(i128, 0);
impl_zero_for!(u128, 0);
impl_zero_for!(isize, 0);
impl_zero_for!(usize, 0);
impl_zero_for!(f32, 0.0);
impl_zero_for!(f64, 0.0);

impl_one_for!(i8, 1);
impl_one_for!(u8, 1);
impl_one_for!(i16, 1);
impl_one_for!(u16, 1);
impl_one_for!(i32, 1);
impl_one_for!(u32, 1);
impl_one_for!(i64, 1);
impl_one_for!(u64, 1);
impl_one_for!(i128, 1);
impl_one_for!(u128, 1);
impl_one_for!(isize, 1);
impl_one_for!(usize, 1);
impl_one_for!(f32, 1.0);
impl_one_for!(f64, 1.0);
