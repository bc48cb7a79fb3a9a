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

//! Property-based checks of the reduction laws: identity, single element,
//! linearity under concatenation, and agreement with reference folds.
//! Element ranges are kept small enough that integer sums and products
//! stay in range, so native pass-through arithmetic is exact.

use capstan_fold::fold::{max, min, sum};
use proptest::prelude::*;

proptest! {
    #[test]
    fn single_element_sum_is_the_element(x in any::<i64>()) {
        prop_assert_eq!(sum(&[x]), x);
    }

    #[test]
    fn single_element_sum_is_the_element_f64(x in -1.0e12f64..1.0e12) {
        prop_assert_eq!(sum(&[x]), x);
    }

    #[test]
    fn sum_matches_reference_fold(v in prop::collection::vec(-1_000_000i64..1_000_000, 0..256)) {
        prop_assert_eq!(sum(&v), v.iter().copied().sum::<i64>());
    }

    #[test]
    fn sum_is_linear_under_concatenation(
        v1 in prop::collection::vec(-1_000_000i64..1_000_000, 0..128),
        v2 in prop::collection::vec(-1_000_000i64..1_000_000, 0..128),
    ) {
        let mut cat = v1.clone();
        cat.extend_from_slice(&v2);
        prop_assert_eq!(sum(&cat), sum(&v1) + sum(&v2));
    }

    #[test]
    fn sum_splits_at_any_index(
        v in prop::collection::vec(-1_000_000i64..1_000_000, 0..256),
        cut in any::<proptest::sample::Index>(),
    ) {
        let mid = if v.is_empty() { 0 } else { cut.index(v.len()) };
        let (left, right) = v.split_at(mid);
        prop_assert_eq!(sum(&v), sum(left) + sum(right));
    }

    #[test]
    fn min_distributes_over_concatenation(
        v1 in prop::collection::vec(any::<i32>(), 0..128),
        v2 in prop::collection::vec(any::<i32>(), 0..128),
    ) {
        let mut cat = v1.clone();
        cat.extend_from_slice(&v2);
        prop_assert_eq!(min(&cat), min(&v1).min(min(&v2)));
    }

    #[test]
    fn min_and_max_bound_every_element(v in prop::collection::vec(any::<i32>(), 1..256)) {
        let lo = min(&v);
        let hi = max(&v);
        prop_assert!(v.contains(&lo));
        prop_assert!(v.contains(&hi));
        for &x in &v {
            prop_assert!(lo <= x);
            prop_assert!(x <= hi);
        }
    }

    #[test]
    fn integer_sum_is_order_free(v in prop::collection::vec(-1_000_000i64..1_000_000, 0..256)) {
        let mut rev = v.clone();
        rev.reverse();
        prop_assert_eq!(sum(&v), sum(&rev));
    }
}
