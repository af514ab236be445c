// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlap between an element and the viewport.

use kurbo::Rect;

use crate::{Edges, ElementBox, ViewportRect, Visibility};

/// The overlapping region of an element and the viewport, in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntersectionRect {
    /// Left edge of the overlap.
    pub view_left: f64,
    /// Top edge of the overlap.
    pub view_top: f64,
    /// Width of the overlap.
    pub width: f64,
    /// Height of the overlap.
    pub height: f64,
}

impl IntersectionRect {
    /// The overlap as a [`Rect`] in viewport coordinates.
    pub fn to_rect(self) -> Rect {
        Rect::new(
            self.view_left,
            self.view_top,
            self.view_left + self.width,
            self.view_top + self.height,
        )
    }

    /// Area of the overlap.
    pub fn area(self) -> f64 {
        self.width * self.height
    }
}

/// Result of [`intersect`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Intersection {
    /// The element is not in the viewport; there is no overlap to report.
    Hidden,
    /// The element is entirely in the viewport; the overlap is the element itself.
    Visible,
    /// The element is cut by the viewport.
    Partial(IntersectionRect),
}

impl Intersection {
    /// The overlap when the element is cut by the viewport.
    pub fn rect(self) -> Option<IntersectionRect> {
        match self {
            Self::Partial(rect) => Some(rect),
            _ => None,
        }
    }

    /// The overlap, using `element` itself for [`Visible`](Self::Visible).
    ///
    /// `element` must be the one this result was computed from.
    pub fn resolve(self, element: &ElementBox) -> Option<IntersectionRect> {
        match self {
            Self::Hidden => None,
            Self::Visible => Some(IntersectionRect {
                view_left: element.view_left(),
                view_top: element.view_top(),
                width: element.outer_width(),
                height: element.outer_height(),
            }),
            Self::Partial(rect) => Some(rect),
        }
    }

    /// Whether there is no overlap.
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

/// Compute the overlap of `element` with `viewport` from a prior classification.
///
/// For a partial result the rectangle is read off the edge set: an edge inside the
/// viewport bounds the overlap on its side, otherwise the viewport's own boundary does.
/// No further comparisons are made, so `visibility` must come from [`classify`](crate::classify)
/// on the same `element` and `viewport`.
pub fn intersect(
    element: &ElementBox,
    viewport: &ViewportRect,
    visibility: Visibility,
) -> Intersection {
    let edges = match visibility {
        Visibility::Hidden => return Intersection::Hidden,
        Visibility::Visible => return Intersection::Visible,
        Visibility::Partial(edges) => edges,
    };

    let (view_left, width) = span(
        edges.contains(Edges::LEFT),
        edges.contains(Edges::RIGHT),
        element.view_left(),
        element.view_right(),
        element.outer_width(),
        viewport.width,
    );
    let (view_top, height) = span(
        edges.contains(Edges::TOP),
        edges.contains(Edges::BOTTOM),
        element.view_top(),
        element.view_bottom(),
        element.outer_height(),
        viewport.height,
    );

    Intersection::Partial(IntersectionRect {
        view_left,
        view_top,
        width,
        height,
    })
}

/// Start and length of the overlap along one axis.
fn span(
    start_inside: bool,
    end_inside: bool,
    start: f64,
    end: f64,
    outer: f64,
    extent: f64,
) -> (f64, f64) {
    match (start_inside, end_inside) {
        (true, true) => (start, outer),
        (true, false) => (start, extent - start),
        (false, true) => (0.0, end),
        (false, false) => (0.0, extent),
    }
}
