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

//! # Capstan Core
//!
//! Numeric capability traits for the Capstan reduction ecosystem. This crate
//! defines the minimal, statically resolved operation set a type must supply
//! to participate in generic buffer reductions, together with the built-in
//! adapter set binding that contract to every primitive numeric type.
//!
//! ## Modules
//!
//! - `num`: Associated-constant identity traits (`Zero`, `One`) and by-value
//!   combine traits for native arithmetic (`AddVal`, `MulVal`) and extrema
//!   selection (`MinVal`, `MaxVal`), implemented for all integer widths and
//!   both float widths.
//!
//! ## Purpose
//!
//! Reduction engines should stay generic over element types without paying
//! for runtime dispatch or reflection. Binding a type to these traits is a
//! purely compile-time affair: a type that does not supply the required
//! operations is rejected by the compiler, never at runtime.
//!
//! Refer to each module for detailed APIs and examples.

pub mod num;
