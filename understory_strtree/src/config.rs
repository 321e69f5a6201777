// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree construction options.

use crate::error::TreeError;

/// Node capacity used when none is given.
pub const DEFAULT_NODE_CAPACITY: usize = 10;

/// Smallest node capacity for which bulk loading terminates.
pub const MIN_NODE_CAPACITY: usize = 2;

/// Options fixed for the lifetime of a tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TreeConfig {
    /// Maximum number of children of any node.
    pub node_capacity: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            node_capacity: DEFAULT_NODE_CAPACITY,
        }
    }
}

impl TreeConfig {
    /// Set the maximum number of children per node.
    #[must_use]
    pub const fn with_node_capacity(mut self, node_capacity: usize) -> Self {
        self.node_capacity = node_capacity;
        self
    }

    /// Check that the options describe a buildable tree.
    pub const fn validate(&self) -> Result<(), TreeError> {
        if self.node_capacity < MIN_NODE_CAPACITY {
            return Err(TreeError::InvalidCapacity(self.node_capacity));
        }
        Ok(())
    }
}
