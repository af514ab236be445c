// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll a column of boxes through a viewport and report what is visible.
//!
//! Run:
//! - `RUST_LOG=understory_viewport=trace cargo run -p understory_viewport_demos --example scroll_visibility`

use kurbo::{Size, Vec2};
use tracing::info;
use understory_viewport::{ElementBox, Intersection, Measurement, ViewportRect};

fn main() {
    understory_viewport_demos::init_tracing();

    let row = Size::new(300.0, 120.0);
    let inner = Size::new(296.0, 116.0);

    for scroll in [0.0, 90.0, 250.0] {
        let viewport = ViewportRect::new(0.0, scroll, 320.0, 240.0);
        info!(scroll, "viewport");
        for i in 0..4_u32 {
            // Each row sits in a list container offset 10px from the page origin.
            let chain = [Vec2::new(0.0, f64::from(i) * row.height), Vec2::new(10.0, 10.0)];
            let el = ElementBox::from_offset_chain(chain, row, inner, &viewport);
            let m = Measurement::new(el, viewport);
            let overlap = m.intersect();
            let shown = match overlap.resolve(m.element()) {
                Some(rect) => rect.area(),
                None => 0.0,
            };
            let clipped = matches!(overlap, Intersection::Partial(_));
            info!(
                row = i,
                visibility = %m.visibility(),
                shown,
                clipped,
                gaps = ?m.difference(),
                "row"
            );
        }
    }
}
