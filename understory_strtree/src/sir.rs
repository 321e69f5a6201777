// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-dimensional interval tree: a [`StrTree`] over [`Interval`] bounds.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::Debug;

use crate::config::TreeConfig;
use crate::error::TreeError;
use crate::node::NodeRef;
use crate::packing::SortTile;
use crate::tree::{ItemsTree, StrTree};
use crate::types::{Interval, Scalar};

type CentreOrder<T> = fn(&Interval<T>, &Interval<T>) -> Ordering;
type IntervalIntersects<T> = fn(&Interval<T>, &Interval<T>) -> bool;
type Inner<T, P> = StrTree<Interval<T>, P, IntervalIntersects<T>, SortTile<CentreOrder<T>>>;

/// Bulk-loaded tree of intervals.
///
/// Each level is ordered by interval centre and packed into nodes of at most
/// [`node_capacity`](Self::node_capacity) children. Intervals with equal centres
/// may be grouped in any order.
pub struct SirTree<T: Scalar, P> {
    tree: Inner<T, P>,
}

impl<T: Scalar, P> SirTree<T, P> {
    /// Create an empty tree with the default node capacity of 10.
    pub fn new() -> Self {
        Self::from_inner_config(TreeConfig::default())
    }

    /// Create an empty tree with the given node capacity.
    ///
    /// Fails with [`TreeError::InvalidCapacity`] if `node_capacity < 2`.
    pub fn with_node_capacity(node_capacity: usize) -> Result<Self, TreeError> {
        Self::with_config(TreeConfig::default().with_node_capacity(node_capacity))
    }

    /// Create an empty tree from explicit options.
    pub fn with_config(config: TreeConfig) -> Result<Self, TreeError> {
        config.validate()?;
        Ok(Self::from_inner_config(config))
    }

    fn from_inner_config(config: TreeConfig) -> Self {
        let tree = StrTree::new(
            config,
            Interval::intersects as IntervalIntersects<T>,
            SortTile::new(Interval::cmp_centre as CentreOrder<T>),
        );
        match tree {
            Ok(tree) => Self { tree },
            Err(err) => unreachable!("validated config was rejected: {err}"),
        }
    }

    /// Insert an item spanning `x1..=x2`. The ends may be given in either order.
    ///
    /// Fails with [`TreeError::AlreadyBuilt`] once the tree has been built.
    pub fn insert(&mut self, x1: T, x2: T, item: P) -> Result<(), TreeError> {
        self.insert_interval(Interval::new(x1, x2), item)
    }

    /// Insert an item with an interval bound. Reversed ends are put back in order.
    pub fn insert_interval(&mut self, interval: Interval<T>, item: P) -> Result<(), TreeError> {
        let interval = Interval::new(interval.min, interval.max);
        self.tree.insert(interval, item)
    }

    /// Items whose interval intersects `x1..=x2` (ends in either order).
    pub fn query(&self, x1: T, x2: T) -> Vec<&P> {
        self.tree.query(&Interval::new(x1, x2))
    }

    /// Items whose interval intersects `interval` (ends in either order).
    pub fn query_interval(&self, interval: &Interval<T>) -> Vec<&P> {
        let interval = Interval::new(interval.min, interval.max);
        self.tree.query(&interval)
    }

    /// Items whose interval contains `x`.
    pub fn query_point(&self, x: T) -> Vec<&P> {
        self.tree.query(&Interval::point(x))
    }

    /// Visit items whose interval intersects `interval`, in query order.
    pub fn query_with<'a, F>(&'a self, interval: &Interval<T>, visit: F)
    where
        F: FnMut(&'a P),
    {
        let interval = Interval::new(interval.min, interval.max);
        self.tree.query_with(&interval, visit);
    }

    /// Build now rather than on the first query. Does nothing if already built.
    pub fn build(&self) {
        self.tree.build();
    }

    /// Whether the tree has been built.
    pub fn is_built(&self) -> bool {
        self.tree.is_built()
    }

    /// Number of inserted items.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Whether no item has been inserted.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Maximum number of children per node.
    pub fn node_capacity(&self) -> usize {
        self.tree.node_capacity()
    }

    /// Number of nodes (builds if needed).
    pub fn node_count(&self) -> usize {
        self.tree.node_count()
    }

    /// Number of node levels above the leaves (builds if needed).
    pub fn depth(&self) -> usize {
        self.tree.depth()
    }

    /// Root node (builds if needed).
    pub fn root(&self) -> Option<NodeRef<'_, Interval<T>, P>> {
        self.tree.root()
    }

    /// Items nested by node (builds if needed).
    pub fn items_tree(&self) -> ItemsTree<'_, P> {
        self.tree.items_tree()
    }
}

impl<T: Scalar, P> Default for SirTree<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar, P> Debug for SirTree<T, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SirTree").field("tree", &self.tree).finish()
    }
}

/// Interval tree with i64 ends.
pub type SirTreeI64<P> = SirTree<i64, P>;

/// Interval tree with f32 ends.
pub type SirTreeF32<P> = SirTree<f32, P>;

/// Interval tree with f64 ends.
pub type SirTreeF64<P> = SirTree<f64, P>;
