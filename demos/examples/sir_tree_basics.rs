// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of the interval tree: insert, build on first query, and inspect the structure.
//!
//! Run with `RUST_LOG=debug` (or `trace`) to see the bulk-load summary.

use understory_strtree::{BoundableRef, Interval, NodeRef, SirTreeF64, TreeError};

fn print_node(node: NodeRef<'_, Interval<f64>, &str>, indent: usize) {
    let b = node.bound();
    println!(
        "{:indent$}level {} [{}, {}] ({} children)",
        "",
        node.level(),
        b.min,
        b.max,
        node.len(),
        indent = indent
    );
    for child in node.children() {
        match child {
            BoundableRef::Leaf(leaf) => println!(
                "{:indent$}{} [{}, {}]",
                "",
                leaf.item(),
                leaf.bound().min,
                leaf.bound().max,
                indent = indent + 2
            ),
            BoundableRef::Node(n) => print_node(n, indent + 2),
        }
    }
}

fn main() -> Result<(), TreeError> {
    env_logger::init();

    let mut tree: SirTreeF64<&str> = SirTreeF64::with_node_capacity(2)?;
    tree.insert(0.0, 1.0, "A")?;
    tree.insert(2.0, 3.0, "B")?;
    tree.insert(4.0, 5.0, "C")?;
    tree.insert(6.0, 7.0, "D")?;

    // First query builds the tree.
    let hits = tree.query(3.0, 4.0);
    println!("hits in [3, 4]: {:?}", hits);

    if let Some(root) = tree.root() {
        print_node(root, 0);
    }

    // Frozen after the build.
    if let Err(err) = tree.insert(8.0, 9.0, "E") {
        println!("insert after build: {err}");
    }
    Ok(())
}
