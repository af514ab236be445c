// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_viewport --heading-base-level=0

//! Understory Viewport: visibility, intersection, and edge distances of an element against a viewport.
//!
//! Given a snapshot of an element's box metrics and the current viewport, this crate answers:
//!
//! - Which of the element's edges are inside the viewport ([`classify`] → [`Visibility`]).
//! - What sub-rectangle of the element the viewport shows ([`intersect`] → [`Intersection`]).
//! - How far each element edge is from the matching viewport edge ([`difference`] → [`DifferenceRect`]).
//!
//! Intersection and difference are both derived from the classification and are only computed
//! when asked for. [`Measurement`] bundles an element, a viewport, and its classification for
//! callers that want all three.
//!
//! ## Coordinates
//!
//! Axes start at the top-left corner; x grows to the right and y grows down.
//! [`ElementBox::view`] is in viewport coordinates. Document coordinates add the viewport's
//! scroll offset ([`ViewportRect::left`], [`ViewportRect::top`]).
//! Outer sizes include border, padding, and content; inner sizes exclude the border.
//!
//! ## Not a layout engine
//!
//! This crate does not read a live UI tree, resolve styles, or handle transformed elements.
//! Host code measures boxes however it likes (a native bounding-rect query, or
//! [`ElementBox::from_offset_chain`] when only offset-parent chains are available) and hands
//! over a fresh snapshot for every query. Nothing is cached between calls.
//!
//! Inputs are not validated. Negative viewport extents or inconsistent edges produce
//! deterministic but meaningless results; use [`ViewportRect::try_new`] and
//! [`ElementBox::validate`] to check them at your own boundary.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_viewport::{
//!     classify, difference, intersect, Edges, ElementBox, IntersectionRect, Intersection,
//!     ViewportRect, Visibility,
//! };
//!
//! let viewport = ViewportRect::new(0.0, 0.0, 800.0, 600.0);
//! // 150×200 box hanging 50px off the left edge.
//! let el = ElementBox::from_origin(Point::new(-50.0, 100.0), Size::new(150.0, 200.0), Size::ZERO);
//!
//! let visibility = classify(&el, &viewport);
//! assert_eq!(visibility, Visibility::Partial(Edges::TOP | Edges::RIGHT | Edges::BOTTOM));
//! assert_eq!(visibility.to_string(), "top right bottom");
//!
//! assert_eq!(
//!     intersect(&el, &viewport, visibility),
//!     Intersection::Partial(IntersectionRect { view_left: 0.0, view_top: 100.0, width: 100.0, height: 200.0 })
//! );
//!
//! let gaps = difference(&el, &viewport, visibility).unwrap();
//! assert_eq!((gaps.left, gaps.top, gaps.right, gaps.bottom), (0.0, 100.0, 700.0, 300.0));
//! ```
//!
//! ## Features
//!
//! - `std` *(default)*: enables `kurbo/std`.
//! - `libm`: enables `kurbo/libm` for `no_std` targets.
//! - `serde`: `Serialize`/`Deserialize` for all value types.
//! - `tracing`: emits `trace!` events from [`classify`] and [`Measurement::new`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

// Property tests need `format!` from std.
#[cfg(test)]
#[macro_use]
extern crate std;

mod difference;
mod edges;
mod element;
mod error;
mod intersect;
mod measurement;
mod viewport;
mod visibility;


pub use difference::{DifferenceRect, difference};
pub use edges::Edges;
pub use element::ElementBox;
pub use error::{Error, Result};
pub use intersect::{Intersection, IntersectionRect, intersect};
pub use measurement::Measurement;
pub use viewport::ViewportRect;
pub use visibility::{Visibility, classify};
