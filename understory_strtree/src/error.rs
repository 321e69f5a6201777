// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported to callers of the tree.

use thiserror::Error;

/// Errors returned by tree construction and insertion.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum TreeError {
    /// An item was inserted after the tree was built.
    ///
    /// The tree is still valid and may be queried; it no longer accepts items.
    #[error("cannot insert into a tree that has already been built")]
    AlreadyBuilt,

    /// The requested node capacity cannot produce a terminating bulk load.
    #[error("node capacity must be at least 2, got {0}")]
    InvalidCapacity(usize),
}
