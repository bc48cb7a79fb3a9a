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

//! # Numeric Capability Contract
//!
//! Traits describing the operations a numeric type must provide to be
//! reducible. The contract is split into identity constants and by-value
//! combine operations, each resolved at compile time through ordinary trait
//! bounds.
//!
//! ## Submodules
//!
//! - `constants`: Associated-constant traits (`Zero`, `One`) implemented for
//!   all core integer and float types to access identity values in a
//!   type-safe, self-describing way.
//! - `ops`: By-value combine traits covering native arithmetic (`AddVal`,
//!   `MulVal`) and extrema selection (`MinVal`, `MaxVal`).
//!
//! ## Motivation
//!
//! Generic fold loops need an identity value and a combine operation for
//! their element type, and nothing more. Keeping the contract this small
//! lets user-defined numeric kinds (fixed-point, rationals) bind by
//! implementing two traits, with no change to any engine code.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod constants;
pub mod ops;
