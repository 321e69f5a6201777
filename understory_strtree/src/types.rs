// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar abstraction and the one-dimensional [`Interval`] bound.

use core::cmp::Ordering;
use core::fmt::Debug;

use crate::bounds::Bounds;

/// Numeric scalar abstraction for interval bounds.
///
/// Only the operations needed to order intervals by their centre are required.
pub trait Scalar: Copy + PartialOrd + Debug {
    /// Midpoint between a and b (used for centre ordering).
    fn mid(a: Self, b: Self) -> Self;
}

impl Scalar for f32 {
    #[inline]
    fn mid(a: Self, b: Self) -> Self {
        0.5 * (a + b)
    }
}

impl Scalar for f64 {
    #[inline]
    fn mid(a: Self, b: Self) -> Self {
        0.5 * (a + b)
    }
}

impl Scalar for i64 {
    #[inline]
    fn mid(a: Self, b: Self) -> Self {
        // Average without overflow: (a & b) + ((a ^ b) >> 1)
        (a & b) + ((a ^ b) >> 1)
    }
}

/// Closed one-dimensional interval `[min, max]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Interval<T> {
    /// Lower end (inclusive).
    pub min: T,
    /// Upper end (inclusive).
    pub max: T,
}

impl<T: Scalar> Interval<T> {
    /// Create an interval from two ends in either order.
    ///
    /// The ends are normalised so that `min <= max`.
    pub fn new(a: T, b: T) -> Self {
        debug_assert!(
            a.partial_cmp(&b).is_some(),
            "interval ends must be comparable (no NaN)"
        );
        Self {
            min: min_t(a, b),
            max: max_t(a, b),
        }
    }

    /// A degenerate interval covering a single value.
    pub fn point(x: T) -> Self {
        Self { min: x, max: x }
    }

    /// Midpoint of the interval. Only used to order intervals during bulk loading.
    pub fn centre(&self) -> T {
        T::mid(self.min, self.max)
    }

    /// Grow this interval to cover `other` as well.
    pub fn expand_to_include(&mut self, other: &Self) {
        self.min = min_t(self.min, other.min);
        self.max = max_t(self.max, other.max);
    }

    /// Closed overlap test: true iff `self.min <= other.max && other.min <= self.max`.
    ///
    /// Intervals that merely touch at an end point intersect.
    pub fn intersects(&self, other: &Self) -> bool {
        le(self.min, other.max) && le(other.min, self.max)
    }

    /// Whether `x` lies within the interval (ends included).
    pub fn contains(&self, x: T) -> bool {
        le(self.min, x) && le(x, self.max)
    }

    /// Compare two intervals by centre. Incomparable centres are treated as equal.
    pub fn cmp_centre(&self, other: &Self) -> Ordering {
        self.centre()
            .partial_cmp(&other.centre())
            .unwrap_or(Ordering::Equal)
    }
}

impl<T: Scalar> Bounds for Interval<T> {
    #[inline]
    fn expand_to_include(&mut self, other: &Self) {
        Self::expand_to_include(self, other);
    }
}

pub(crate) fn min_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Greater) => b,
        _ => a,
    }
}

pub(crate) fn max_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => b,
        _ => a,
    }
}

pub(crate) fn le<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}
