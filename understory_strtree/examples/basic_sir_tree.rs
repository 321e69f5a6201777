// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Understory STRtree: insert intervals, query, and look at the nesting.

use understory_strtree::SirTreeI64;

fn main() {
    let mut tree: SirTreeI64<u32> = SirTreeI64::with_node_capacity(3).unwrap();
    for i in 0..10_u32 {
        let x = i64::from(i) * 10;
        tree.insert(x, x + 12, i).unwrap();
    }

    // Query a range; the first query builds the tree.
    let hits = tree.query(25, 41);
    println!("hits in [25, 41]: {:?}", hits);

    // Query a point
    println!("hits at 50: {:?}", tree.query_point(50));

    println!("depth {}, nodes {}", tree.depth(), tree.node_count());
    println!("{:?}", tree.items_tree());
}
