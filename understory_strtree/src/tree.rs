// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The generic bulk-loaded tree: leaf accumulation, one-shot build, and pruned queries.

use alloc::vec;
use alloc::vec::Vec;
use core::cell::OnceCell;
use core::fmt::Debug;

use log::{debug, trace};

use crate::bounds::{Bounds, IntersectsOp};
use crate::config::TreeConfig;
use crate::error::TreeError;
use crate::node::{Boundable, BoundableRef, Leaf, LeafIdx, NodeArena, NodeIdx, NodeRef};
use crate::packing::Packing;

/// Bulk-loaded tree over bounds `B` carrying items `P`.
///
/// Items are accumulated with [`insert`](Self::insert). The first call to
/// [`build`](Self::build), [`query`](Self::query), or any structural accessor packs
/// them into nodes using the tree's [`Packing`]; afterwards the tree is frozen and
/// further inserts fail with [`TreeError::AlreadyBuilt`].
///
/// Queries prune with the tree's [`IntersectsOp`]. Building happens through `&self`,
/// so the tree is not `Sync`; share it across threads only behind external locking.
pub struct StrTree<B, P, I, K> {
    config: TreeConfig,
    intersects: I,
    packing: K,
    leaves: Vec<Leaf<B, P>>,
    built: OnceCell<Built<B>>,
}

struct Built<B> {
    arena: NodeArena<B>,
    root: Option<NodeIdx>,
}

/// Items of a built tree, nested the same way as its nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemsTree<'a, P> {
    /// An inserted item.
    Item(&'a P),
    /// The items and subtrees below one node, in child order.
    Node(Vec<ItemsTree<'a, P>>),
}

impl<B, P, I, K> StrTree<B, P, I, K>
where
    B: Bounds,
    I: IntersectsOp<B>,
    K: Packing<B>,
{
    /// Create an empty tree.
    ///
    /// Fails with [`TreeError::InvalidCapacity`] if `config` has a node capacity below 2.
    pub fn new(config: TreeConfig, intersects: I, packing: K) -> Result<Self, TreeError> {
        config.validate()?;
        Ok(Self {
            config,
            intersects,
            packing,
            leaves: Vec::new(),
            built: OnceCell::new(),
        })
    }

    /// Add an item with its bound.
    ///
    /// Fails with [`TreeError::AlreadyBuilt`] once the tree has been built; the
    /// built structure and its query results are unaffected.
    pub fn insert(&mut self, bound: B, item: P) -> Result<(), TreeError> {
        if self.is_built() {
            return Err(TreeError::AlreadyBuilt);
        }
        self.leaves.push(Leaf::new(bound, item));
        Ok(())
    }

    /// Pack all inserted items into nodes. Does nothing if already built.
    pub fn build(&self) {
        let _ = self.built();
    }

    /// Whether the tree has been built.
    pub fn is_built(&self) -> bool {
        self.built.get().is_some()
    }

    /// Number of inserted items.
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    /// Whether no item has been inserted.
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Maximum number of children per node.
    pub fn node_capacity(&self) -> usize {
        self.config.node_capacity
    }

    /// Number of nodes created by the build (builds if needed).
    pub fn node_count(&self) -> usize {
        self.built().arena.len()
    }

    /// Number of node levels above the leaves, 0 for an empty tree (builds if needed).
    pub fn depth(&self) -> usize {
        self.root().map(|root| root.level() + 1).unwrap_or(0)
    }

    /// Root node, or `None` for an empty tree (builds if needed).
    pub fn root(&self) -> Option<NodeRef<'_, B, P>> {
        let built = self.built();
        built
            .root
            .map(|idx| NodeRef::new(&built.arena, &self.leaves, idx))
    }

    /// Items whose bound intersects `bound`, in depth-first child order (builds if needed).
    pub fn query(&self, bound: &B) -> Vec<&P> {
        let mut out = Vec::new();
        self.query_with(bound, |item| out.push(item));
        out
    }

    /// Call `visit` for every item whose bound intersects `bound` (builds if needed).
    ///
    /// Items are visited in the same order [`query`](Self::query) returns them.
    pub fn query_with<'a, F>(&'a self, bound: &B, mut visit: F)
    where
        F: FnMut(&'a P),
    {
        let built = self.built();
        let Some(root) = built.root else {
            return;
        };
        let arena = &built.arena;
        if !self
            .intersects
            .intersects(arena.node_bound(&self.leaves, root), bound)
        {
            return;
        }
        let mut stack = vec![Boundable::Node(root)];
        while let Some(b) = stack.pop() {
            match b {
                Boundable::Node(idx) => {
                    // Pushed in reverse so children pop in order.
                    for &child in arena.node(idx).children().iter().rev() {
                        if self
                            .intersects
                            .intersects(arena.bound(&self.leaves, child), bound)
                        {
                            stack.push(child);
                        }
                    }
                }
                Boundable::Leaf(idx) => visit(self.leaves[idx.get()].item()),
            }
        }
    }

    /// All items nested by node (builds if needed). An empty tree yields an empty node.
    pub fn items_tree(&self) -> ItemsTree<'_, P> {
        fn collect<'a, B: Bounds, P>(node: NodeRef<'a, B, P>) -> ItemsTree<'a, P> {
            let mut out = Vec::with_capacity(node.len());
            for child in node.children() {
                match child {
                    BoundableRef::Leaf(leaf) => out.push(ItemsTree::Item(leaf.item())),
                    BoundableRef::Node(n) => match collect(n) {
                        ItemsTree::Node(items) if items.is_empty() => {}
                        sub => out.push(sub),
                    },
                }
            }
            ItemsTree::Node(out)
        }
        match self.root() {
            Some(root) => collect(root),
            None => ItemsTree::Node(Vec::new()),
        }
    }

    fn built(&self) -> &Built<B> {
        self.built.get_or_init(|| self.bulk_load())
    }

    fn bulk_load(&self) -> Built<B> {
        let capacity = self.config.node_capacity;
        let mut arena = NodeArena::new(capacity);
        if self.leaves.is_empty() {
            debug!("bulk load: no items, tree is empty");
            return Built { arena, root: None };
        }

        let mut current: Vec<Boundable> = (0..self.leaves.len())
            .map(|i| Boundable::Leaf(LeafIdx::new(i)))
            .collect();
        let mut level = 0;
        let root = loop {
            let count = current.len();
            let parents = self
                .packing
                .create_parent_boundables(&mut arena, &self.leaves, current, level);
            assert!(
                !parents.is_empty() && (parents.len() < count || count == 1),
                "packing must reduce {count} boundables to fewer nodes, got {}",
                parents.len()
            );
            assert!(
                parents.iter().all(|p| matches!(p, Boundable::Node(_))),
                "packing must return nodes"
            );
            debug_assert_eq!(
                parents.len(),
                count.div_ceil(capacity),
                "packing must fill nodes to capacity"
            );
            trace!(
                "bulk load: level {level} packed {count} boundables into {} nodes",
                parents.len()
            );
            if let [Boundable::Node(root)] = parents.as_slice() {
                break *root;
            }
            current = parents;
            level += 1;
        };
        debug!(
            "bulk load: {} items, capacity {capacity}, {} nodes, depth {}",
            self.leaves.len(),
            arena.len(),
            level + 1
        );
        Built {
            arena,
            root: Some(root),
        }
    }
}

impl<B: Debug, P, I, K> Debug for StrTree<B, P, I, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let built = self.built.get();
        f.debug_struct("StrTree")
            .field("node_capacity", &self.config.node_capacity)
            .field("items", &self.leaves.len())
            .field("built", &built.is_some())
            .field("nodes", &built.map(|b| b.arena.len()).unwrap_or(0))
            .finish_non_exhaustive()
    }
}
