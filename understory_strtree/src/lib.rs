// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_strtree --heading-base-level=0

//! Understory STRtree: bulk-loaded Sort-Tile-Recursive trees.
//!
//! Understory STRtree answers "which objects overlap this bound?" without scanning every object.
//!
//! - Insert `(bound, item)` pairs, then build once: leaves are sorted, sliced into nodes of a
//!   fixed capacity, and the nodes are packed again level by level until one root remains.
//! - Queries descend from the root and skip every subtree whose aggregate bound misses the query.
//! - The tree is height-balanced by construction. There is no incremental insert or delete after
//!   the build; inserting into a built tree returns [`TreeError::AlreadyBuilt`].
//!
//! The algorithm is generic over the bound type through three extension points:
//! [`Bounds`] (union of bounds), [`IntersectsOp`] (the pruning predicate) and [`Packing`]
//! (how one level is grouped into parents; [`SortTile`] sorts with a comparator and slices).
//! [`SirTree`] instantiates all three for one-dimensional [`Interval`]s ordered by centre.
//!
//! # Example
//!
//! ```rust
//! use understory_strtree::SirTreeF64;
//!
//! let mut tree: SirTreeF64<&str> = SirTreeF64::with_node_capacity(2).unwrap();
//! tree.insert(0.0, 1.0, "a").unwrap();
//! tree.insert(2.0, 3.0, "b").unwrap();
//! tree.insert(4.0, 5.0, "c").unwrap();
//! tree.insert(6.0, 7.0, "d").unwrap();
//!
//! // The first query builds the tree. Closed intervals: touching ends overlap.
//! let hits = tree.query(3.0, 4.0);
//! assert_eq!(hits, [&"b", &"c"]);
//!
//! // The tree is frozen once built.
//! assert!(tree.insert(8.0, 9.0, "e").is_err());
//! ```
//!
//! Other bound types plug into [`StrTree`] directly:
//!
//! ```rust
//! use understory_strtree::{Interval, SortTile, StrTree, TreeConfig};
//!
//! let by_lower_end = |a: &Interval<i64>, b: &Interval<i64>| a.min.cmp(&b.min);
//! let overlaps = |a: &Interval<i64>, b: &Interval<i64>| a.intersects(b);
//! let mut tree = StrTree::new(TreeConfig::default(), overlaps, SortTile::new(by_lower_end))
//!     .unwrap();
//! tree.insert(Interval::new(0, 10), 'x').unwrap();
//! assert_eq!(tree.query(&Interval::point(5)), [&'x']);
//! ```
//!
//! ## Choosing a capacity
//!
//! Capacity must be at least 2 (default 10). Larger nodes make shallower trees with
//! fewer, wider aggregate bounds; smaller nodes prune more finely at the cost of depth.
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs for floating-point coordinates. Debug builds may assert.
//!
//! ### Threads
//!
//! Building is lazy and happens through `&self`, so trees are not `Sync`.
//! Build and query from one thread, or wrap the tree in a lock.

#![no_std]

extern crate alloc;

pub mod bounds;
pub mod config;
pub mod error;
pub mod node;
pub mod packing;
pub mod sir;
pub mod tree;
pub mod types;

pub use bounds::{Bounds, IntersectsOp};
pub use config::{DEFAULT_NODE_CAPACITY, MIN_NODE_CAPACITY, TreeConfig};
pub use error::TreeError;
pub use node::{Boundable, BoundableRef, Leaf, NodeArena, NodeRef};
pub use packing::{Packing, SortTile};
pub use sir::{SirTree, SirTreeF32, SirTreeF64, SirTreeI64};
pub use tree::{ItemsTree, StrTree};
pub use types::{Interval, Scalar};

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn build_then_query_through_the_reexports() {
        let mut tree: SirTreeI64<u32> = SirTree::new();
        for i in 0..100_u32 {
            let x = i64::from(i) * 10;
            tree.insert(x, x + 5, i).unwrap();
        }
        let hits: Vec<_> = tree.query(42, 61).into_iter().copied().collect();
        assert_eq!(hits, [4, 5, 6]);
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.insert(0, 1, 100), Err(TreeError::AlreadyBuilt));
    }

    #[test]
    fn float_and_integer_trees_agree() {
        let mut a: SirTreeF32<usize> = SirTree::with_node_capacity(3).unwrap();
        let mut b: SirTreeI64<usize> = SirTree::with_node_capacity(3).unwrap();
        for i in 0..30_u8 {
            a.insert(f32::from(i), f32::from(i) + 2.0, usize::from(i)).unwrap();
            b.insert(i64::from(i), i64::from(i) + 2, usize::from(i)).unwrap();
        }
        assert_eq!(a.query(10.0, 12.0), b.query(10, 12));
    }
}
