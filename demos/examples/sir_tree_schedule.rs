// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Find overlapping bookings in a day of meetings, using minutes since midnight.

use log::info;
use understory_strtree::{SirTreeI64, TreeError};

struct Booking {
    room: &'static str,
    start: i64,
    end: i64,
}

impl Booking {
    fn new(room: &'static str, start: (i64, i64), end: (i64, i64)) -> Self {
        Self {
            room,
            start: minutes(start),
            end: minutes(end),
        }
    }
}

fn minutes((h, m): (i64, i64)) -> i64 {
    h * 60 + m
}

fn clock(minutes: i64) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

fn main() -> Result<(), TreeError> {
    env_logger::init();

    let bookings = [
        Booking::new("atrium", (9, 0), (10, 0)),
        Booking::new("atrium", (10, 0), (11, 30)),
        Booking::new("library", (9, 30), (12, 0)),
        Booking::new("studio", (13, 0), (14, 0)),
        Booking::new("studio", (15, 0), (17, 0)),
        Booking::new("library", (16, 0), (16, 45)),
    ];

    let mut tree = SirTreeI64::with_node_capacity(4)?;
    for b in &bookings {
        tree.insert(b.start, b.end, b)?;
    }
    tree.build();
    info!("indexed {} bookings in {} nodes", tree.len(), tree.node_count());

    let windows = [
        ("morning", (9, 0), (12, 0)),
        ("lunch", (12, 0), (13, 0)),
        ("at 4pm", (16, 0), (16, 0)),
    ];
    for (label, from, to) in windows {
        let busy: Vec<_> = tree
            .query(minutes(from), minutes(to))
            .into_iter()
            .map(|b| format!("{} {}-{}", b.room, clock(b.start), clock(b.end)))
            .collect();
        println!("{label}: {busy:?}");
    }
    Ok(())
}
