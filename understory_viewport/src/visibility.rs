// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge classification of an element against the viewport.

use core::fmt;

use crate::{Edges, ElementBox, ViewportRect};

/// How much of an element the viewport shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    /// No edge of the element lies within the viewport.
    Hidden,
    /// All four edges lie within the viewport.
    Visible,
    /// Some, but not all, edges lie within the viewport. Never empty or full.
    Partial(Edges),
}

impl Visibility {
    /// Normalise an edge set: empty becomes [`Hidden`](Self::Hidden), all four
    /// become [`Visible`](Self::Visible).
    pub fn from_edges(edges: Edges) -> Self {
        if edges.is_empty() {
            Self::Hidden
        } else if edges.is_all() {
            Self::Visible
        } else {
            Self::Partial(edges)
        }
    }

    /// The edges within bounds.
    pub fn edges(self) -> Edges {
        match self {
            Self::Hidden => Edges::empty(),
            Self::Visible => Edges::all(),
            Self::Partial(edges) => edges,
        }
    }

    /// Whether the element shares no edge with the viewport.
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    /// Whether the element lies entirely inside the viewport.
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }

    /// Whether only some edges are inside the viewport.
    pub const fn is_partial(self) -> bool {
        matches!(self, Self::Partial(_))
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hidden => f.write_str("hidden"),
            Self::Visible => f.write_str("visible"),
            Self::Partial(edges) => fmt::Display::fmt(edges, f),
        }
    }
}

/// Classify which edges of `element` lie within `viewport`.
///
/// Each axis is gated by a coarse overlap test on the *other* axis before its
/// edges are checked, so an edge whose coordinate merely happens to fall inside
/// the viewport's range is not counted when the element is entirely above, below,
/// left, or right of it. Edge checks are inclusive: `0 <= edge <= extent`.
///
/// ```
/// use kurbo::{Point, Size};
/// use understory_viewport::{classify, Edges, ElementBox, ViewportRect, Visibility};
///
/// let viewport = ViewportRect::new(0.0, 0.0, 800.0, 600.0);
/// let el = ElementBox::from_origin(Point::new(-50.0, 100.0), Size::new(150.0, 200.0), Size::ZERO);
/// assert_eq!(
///     classify(&el, &viewport),
///     Visibility::Partial(Edges::TOP | Edges::RIGHT | Edges::BOTTOM)
/// );
/// ```
pub fn classify(element: &ElementBox, viewport: &ViewportRect) -> Visibility {
    let (left, top) = (element.view_left(), element.view_top());
    let (right, bottom) = (element.view_right(), element.view_bottom());
    let (width, height) = (viewport.width, viewport.height);

    let mut edges = Edges::empty();
    // Left/right only count when the element spans some of the viewport's rows.
    if top < height && bottom > 0.0 {
        edges.set(Edges::RIGHT, within(right, width));
        edges.set(Edges::LEFT, within(left, width));
    }
    // Top/bottom only count when the element spans some of the viewport's columns.
    if right > 0.0 && left < width {
        edges.set(Edges::TOP, within(top, height));
        edges.set(Edges::BOTTOM, within(bottom, height));
    }

    let visibility = Visibility::from_edges(edges);
    #[cfg(feature = "tracing")]
    tracing::trace!(
        left,
        top,
        right,
        bottom,
        width,
        height,
        edges = edges.bits(),
        "classified element against viewport"
    );
    visibility
}

#[inline]
fn within(coord: f64, extent: f64) -> bool {
    coord >= 0.0 && coord <= extent
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use kurbo::{Point, Rect, Size};

    const VIEWPORT: ViewportRect = ViewportRect::new(0.0, 0.0, 800.0, 600.0);

    fn element(x0: f64, y0: f64, x1: f64, y1: f64) -> ElementBox {
        ElementBox::from_view_rect(Rect::new(x0, y0, x1, y1), Size::ZERO)
    }

    #[test]
    fn partially_off_the_left_edge() {
        let el = element(-50.0, 100.0, 100.0, 300.0);
        let v = classify(&el, &VIEWPORT);
        assert_eq!(v, Visibility::Partial(Edges::TOP | Edges::RIGHT | Edges::BOTTOM));
        assert_eq!(v.to_string(), "top right bottom");
    }

    #[test]
    fn below_the_viewport_is_hidden() {
        let el = element(0.0, 700.0, 200.0, 900.0);
        assert_eq!(classify(&el, &VIEWPORT), Visibility::Hidden);
    }

    #[test]
    fn flush_with_all_edges_is_visible() {
        let el = element(0.0, 0.0, 800.0, 600.0);
        assert_eq!(classify(&el, &VIEWPORT), Visibility::Visible);
    }

    #[test]
    fn axis_gate_suppresses_coincidental_edges() {
        // Far above the viewport; left/right x-coordinates are within [0, width].
        let el = element(100.0, -500.0, 200.0, -300.0);
        assert_eq!(classify(&el, &VIEWPORT), Visibility::Hidden);
        // Far to the right; top/bottom y-coordinates are within [0, height].
        let el = element(900.0, 100.0, 1000.0, 200.0);
        assert_eq!(classify(&el, &VIEWPORT), Visibility::Hidden);
    }

    #[test]
    fn element_larger_than_viewport_on_one_axis() {
        // Wider than the viewport, vertically contained.
        let el = element(-100.0, 100.0, 900.0, 200.0);
        assert_eq!(
            classify(&el, &VIEWPORT),
            Visibility::Partial(Edges::TOP | Edges::BOTTOM)
        );
    }

    #[test]
    fn element_covering_viewport_has_no_edges_inside() {
        // Every edge is outside, and none is gated in, so this classifies as hidden.
        let el = element(-10.0, -10.0, 810.0, 610.0);
        assert_eq!(classify(&el, &VIEWPORT), Visibility::Hidden);
    }

    #[test]
    fn corner_overlap() {
        let el = element(700.0, 500.0, 900.0, 700.0);
        assert_eq!(
            classify(&el, &VIEWPORT),
            Visibility::Partial(Edges::TOP | Edges::LEFT)
        );
    }

    #[test]
    fn top_edge_touching_viewport_bottom() {
        // The vertical gate is strict, so left/right are never checked, but the top edge
        // sits exactly on the closed upper bound.
        let el = element(-100.0, 600.0, 100.0, 700.0);
        assert_eq!(classify(&el, &VIEWPORT), Visibility::Partial(Edges::TOP));
    }

    #[test]
    fn zero_size_element_inside() {
        let el = ElementBox::from_origin(Point::new(400.0, 300.0), Size::ZERO, Size::ZERO);
        assert_eq!(classify(&el, &VIEWPORT), Visibility::Visible);
    }

    #[test]
    fn zero_size_element_on_origin_is_hidden() {
        // Strict gates reject zero-extent boxes on the viewport's top-left boundary.
        let el = ElementBox::from_origin(Point::ZERO, Size::ZERO, Size::ZERO);
        assert_eq!(classify(&el, &VIEWPORT), Visibility::Hidden);
    }

    #[test]
    fn nan_coordinates_are_hidden() {
        let el = element(f64::NAN, 0.0, f64::NAN, 10.0);
        assert_eq!(classify(&el, &VIEWPORT), Visibility::Hidden);
    }

    #[test]
    fn from_edges_normalises() {
        assert_eq!(Visibility::from_edges(Edges::empty()), Visibility::Hidden);
        assert_eq!(Visibility::from_edges(Edges::all()), Visibility::Visible);
        assert_eq!(Visibility::Visible.edges(), Edges::all());
        assert_eq!(Visibility::Hidden.edges(), Edges::empty());
        assert_eq!(Visibility::Hidden.to_string(), "hidden");
        assert_eq!(Visibility::Visible.to_string(), "visible");
    }
}
