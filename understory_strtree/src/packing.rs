// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grouping of one tree level into parent nodes.
//!
//! The bulk loader calls [`Packing::create_parent_boundables`] once per level
//! until a single node remains. [`SortTile`] is the sort-then-slice packing:
//! order the level with a caller-supplied comparator, then fill nodes to capacity
//! left to right. It is linear after the sort and never backtracks, at the cost
//! of more sibling overlap than a partition search would give.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::Debug;

use crate::bounds::Bounds;
use crate::node::{Boundable, Leaf, NodeArena};

/// Leaf-grouping policy used while bulk loading.
pub trait Packing<B: Bounds> {
    /// Group `children` into new nodes at `new_level`, created through `arena`.
    ///
    /// Every input must become the child of exactly one returned node, no node may
    /// exceed the arena capacity, and `ceil(children.len() / capacity)` nodes must
    /// be returned.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `children` is empty.
    fn create_parent_boundables<P>(
        &self,
        arena: &mut NodeArena<B>,
        leaves: &[Leaf<B, P>],
        children: Vec<Boundable>,
        new_level: usize,
    ) -> Vec<Boundable>;
}

/// Sort-then-slice packing ordered by an explicit comparator.
///
/// The sort is unstable: boundables the comparator considers equal end up in an
/// unspecified relative order.
#[derive(Clone, Copy)]
pub struct SortTile<O> {
    order: O,
}

impl<O> SortTile<O> {
    /// Create a packing that orders each level with `order`.
    pub const fn new(order: O) -> Self {
        Self { order }
    }
}

impl<O> Debug for SortTile<O> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SortTile").finish_non_exhaustive()
    }
}

impl<B, O> Packing<B> for SortTile<O>
where
    B: Bounds,
    O: Fn(&B, &B) -> Ordering,
{
    fn create_parent_boundables<P>(
        &self,
        arena: &mut NodeArena<B>,
        leaves: &[Leaf<B, P>],
        children: Vec<Boundable>,
        new_level: usize,
    ) -> Vec<Boundable> {
        assert!(
            !children.is_empty(),
            "cannot create parents for an empty level"
        );
        let mut sorted = children;
        {
            let arena = &*arena;
            sorted.sort_unstable_by(|&a, &b| {
                (self.order)(arena.bound(leaves, a), arena.bound(leaves, b))
            });
        }

        let capacity = arena.capacity();
        let mut parents = Vec::with_capacity(sorted.len().div_ceil(capacity));
        let mut current = arena.create_node(new_level);
        parents.push(Boundable::Node(current));
        for child in sorted {
            if arena.node(current).is_full() {
                current = arena.create_node(new_level);
                parents.push(Boundable::Node(current));
            }
            arena.add_child(current, child);
        }
        parents
    }
}
