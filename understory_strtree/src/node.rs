// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Leaves, nodes, and the node arena that owns every node created during a build.
//!
//! Parents refer to their children through [`Boundable`] handles. The arena is
//! the only owner of node storage, so dropping the tree drops every node exactly once.

use alloc::vec::Vec;
use core::cell::OnceCell;
use core::fmt::Debug;

use crate::bounds::Bounds;

/// Handle of a leaf in the tree's leaf list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LeafIdx(usize);

impl LeafIdx {
    pub(crate) const fn new(i: usize) -> Self {
        Self(i)
    }

    /// Position of the leaf in insertion order.
    pub const fn get(self) -> usize {
        self.0
    }
}

/// Handle of a node in a [`NodeArena`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeIdx(usize);

impl NodeIdx {
    const fn new(i: usize) -> Self {
        Self(i)
    }

    /// Position of the node in creation order.
    pub const fn get(self) -> usize {
        self.0
    }
}

/// Anything with a bound: a leaf wrapping one item, or an internal node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Boundable {
    /// An inserted item.
    Leaf(LeafIdx),
    /// A node created during the build.
    Node(NodeIdx),
}

/// An inserted item together with its bound.
#[derive(Clone, Debug)]
pub struct Leaf<B, P> {
    bound: B,
    item: P,
}

impl<B, P> Leaf<B, P> {
    pub(crate) const fn new(bound: B, item: P) -> Self {
        Self { bound, item }
    }

    /// Bound the item was inserted with.
    pub const fn bound(&self) -> &B {
        &self.bound
    }

    /// The caller's item.
    pub const fn item(&self) -> &P {
        &self.item
    }
}

/// An internal node: an ordered list of children and a lazily computed aggregate bound.
#[derive(Clone, Debug)]
pub struct Node<B> {
    level: usize,
    capacity: usize,
    children: Vec<Boundable>,
    bound: OnceCell<B>,
}

impl<B> Node<B> {
    fn new(level: usize, capacity: usize) -> Self {
        Self {
            level,
            capacity,
            children: Vec::with_capacity(capacity),
            bound: OnceCell::new(),
        }
    }

    /// Append a child.
    ///
    /// # Panics
    ///
    /// Panics if the node already holds `capacity` children, or if its bound has
    /// already been computed.
    pub fn add_child(&mut self, child: Boundable) {
        assert!(
            self.children.len() < self.capacity,
            "node at level {} is full ({} children)",
            self.level,
            self.capacity
        );
        assert!(
            self.bound.get().is_none(),
            "node bound was computed before all children were added"
        );
        self.children.push(child);
    }

    /// Distance from the leaves: 0 for nodes whose children are leaves.
    pub const fn level(&self) -> usize {
        self.level
    }

    /// Maximum number of children.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Children in the order they were added.
    pub fn children(&self) -> &[Boundable] {
        &self.children
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the node has no children yet.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether the node cannot take another child.
    pub fn is_full(&self) -> bool {
        self.children.len() >= self.capacity
    }
}

/// Registry and factory for the nodes of one tree.
#[derive(Clone, Debug)]
pub struct NodeArena<B> {
    capacity: usize,
    nodes: Vec<Node<B>>,
}

impl<B> NodeArena<B> {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            capacity,
            nodes: Vec::new(),
        }
    }

    /// Capacity given to every node this arena creates.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of nodes created so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node has been created.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Create an empty node at `level` and register it.
    pub fn create_node(&mut self, level: usize) -> NodeIdx {
        let idx = NodeIdx::new(self.nodes.len());
        self.nodes.push(Node::new(level, self.capacity));
        idx
    }

    /// Node for a handle issued by this arena.
    pub fn node(&self, idx: NodeIdx) -> &Node<B> {
        &self.nodes[idx.get()]
    }

    /// Append `child` to the node `parent`. See [`Node::add_child`].
    pub fn add_child(&mut self, parent: NodeIdx, child: Boundable) {
        self.nodes[parent.get()].add_child(child);
    }
}

impl<B: Bounds> NodeArena<B> {
    /// Bound of a leaf or node.
    pub fn bound<'a, P>(&'a self, leaves: &'a [Leaf<B, P>], b: Boundable) -> &'a B {
        match b {
            Boundable::Leaf(idx) => &leaves[idx.get()].bound,
            Boundable::Node(idx) => self.node_bound(leaves, idx),
        }
    }

    /// Aggregate bound of a node, computed from its children on first access.
    ///
    /// # Panics
    ///
    /// Panics if the node has no children.
    pub fn node_bound<'a, P>(&'a self, leaves: &'a [Leaf<B, P>], idx: NodeIdx) -> &'a B {
        let node = &self.nodes[idx.get()];
        node.bound.get_or_init(|| {
            B::union_of(node.children.iter().map(|&c| self.bound(leaves, c)))
                .expect("nodes are only bounded once they have children")
        })
    }
}

/// Read-only view of a built node.
pub struct NodeRef<'a, B, P> {
    arena: &'a NodeArena<B>,
    leaves: &'a [Leaf<B, P>],
    idx: NodeIdx,
}

impl<B, P> Clone for NodeRef<'_, B, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B, P> Copy for NodeRef<'_, B, P> {}

impl<B: Debug, P> Debug for NodeRef<'_, B, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let node = &self.arena.nodes[self.idx.get()];
        f.debug_struct("NodeRef")
            .field("idx", &self.idx)
            .field("level", &node.level)
            .field("children", &node.children.len())
            .finish_non_exhaustive()
    }
}

impl<'a, B: Bounds, P> NodeRef<'a, B, P> {
    pub(crate) const fn new(
        arena: &'a NodeArena<B>,
        leaves: &'a [Leaf<B, P>],
        idx: NodeIdx,
    ) -> Self {
        Self { arena, leaves, idx }
    }

    fn node(&self) -> &'a Node<B> {
        self.arena.node(self.idx)
    }

    /// Handle of this node.
    pub const fn idx(&self) -> NodeIdx {
        self.idx
    }

    /// Distance from the leaves: 0 for nodes whose children are leaves.
    pub fn level(&self) -> usize {
        self.node().level()
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.node().len()
    }

    /// Whether the node has no children.
    pub fn is_empty(&self) -> bool {
        self.node().is_empty()
    }

    /// Aggregate bound of the node.
    pub fn bound(&self) -> &'a B {
        self.arena.node_bound(self.leaves, self.idx)
    }

    /// Children in order.
    pub fn children(self) -> impl Iterator<Item = BoundableRef<'a, B, P>> + 'a {
        let arena = self.arena;
        let leaves = self.leaves;
        self.node().children().iter().map(move |&c| match c {
            Boundable::Leaf(idx) => BoundableRef::Leaf(&leaves[idx.get()]),
            Boundable::Node(idx) => BoundableRef::Node(NodeRef::new(arena, leaves, idx)),
        })
    }
}

/// Read-only view of a child of a built node.
pub enum BoundableRef<'a, B, P> {
    /// An inserted item.
    Leaf(&'a Leaf<B, P>),
    /// An internal node.
    Node(NodeRef<'a, B, P>),
}

impl<B: Debug, P: Debug> Debug for BoundableRef<'_, B, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Leaf(leaf) => f.debug_tuple("Leaf").field(leaf).finish(),
            Self::Node(node) => f.debug_tuple("Node").field(node).finish(),
        }
    }
}

impl<'a, B: Bounds, P> BoundableRef<'a, B, P> {
    /// Bound of the leaf or node.
    pub fn bound(&self) -> &'a B {
        match self {
            Self::Leaf(leaf) => leaf.bound(),
            Self::Node(node) => node.bound(),
        }
    }
}
