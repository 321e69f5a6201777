// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Extension points that let one build/query algorithm serve any bound geometry.

use core::fmt::Debug;

/// A bound value: the spatial extent of a leaf or the aggregate extent of a node.
pub trait Bounds: Clone + Debug {
    /// Grow `self` so that it also covers `other`.
    fn expand_to_include(&mut self, other: &Self);

    /// Union of all bounds in order, or `None` for an empty sequence.
    ///
    /// The first bound is copied by value and the rest are folded into it.
    fn union_of<'a, I>(bounds: I) -> Option<Self>
    where
        Self: 'a,
        I: IntoIterator<Item = &'a Self>,
    {
        let mut it = bounds.into_iter();
        let mut acc = it.next()?.clone();
        for b in it {
            acc.expand_to_include(b);
        }
        Some(acc)
    }
}

/// Pluggable overlap test used to prune subtrees during a query.
pub trait IntersectsOp<B> {
    /// Whether `a` and `b` overlap.
    fn intersects(&self, a: &B, b: &B) -> bool;
}

impl<B, F> IntersectsOp<B> for F
where
    F: Fn(&B, &B) -> bool,
{
    #[inline]
    fn intersects(&self, a: &B, b: &B) -> bool {
        self(a, b)
    }
}
