// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A classified element/viewport snapshot.

use kurbo::Point;

use crate::{
    DifferenceRect, ElementBox, Intersection, ViewportRect, Visibility, classify, difference,
    intersect,
};

/// An element measured against one viewport snapshot.
///
/// The classification is resolved once on construction. [`intersect`](Self::intersect) and
/// [`difference`](Self::difference) are recomputed on every call, always from the same
/// element and viewport that produced the classification. Build a new `Measurement`
/// after the layout or scroll position changes.
///
/// ```
/// use kurbo::{Point, Size};
/// use understory_viewport::{ElementBox, Measurement, ViewportRect, Visibility};
///
/// let viewport = ViewportRect::new(0.0, 1200.0, 800.0, 600.0);
/// let el = ElementBox::from_origin(Point::new(100.0, 50.0), Size::new(200.0, 100.0), Size::ZERO);
/// let m = Measurement::new(el, viewport);
/// assert_eq!(m.visibility(), Visibility::Visible);
/// assert_eq!(m.document_position(), Point::new(100.0, 1250.0));
/// assert_eq!(m.difference().unwrap().right, 500.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    element: ElementBox,
    viewport: ViewportRect,
    visibility: Visibility,
}

impl Measurement {
    /// Classify `element` against `viewport`.
    ///
    /// The document position is always re-derived from the view position and this
    /// viewport's scroll offset; any position resolved against another viewport is replaced.
    pub fn new(element: ElementBox, viewport: ViewportRect) -> Self {
        let element = element.with_document_position(&viewport);
        let visibility = classify(&element, &viewport);
        #[cfg(feature = "tracing")]
        tracing::trace!(
            x = element.view.x0 + viewport.left,
            y = element.view.y0 + viewport.top,
            %visibility,
            "measured element"
        );
        Self {
            element,
            viewport,
            visibility,
        }
    }

    /// The measured element.
    pub const fn element(&self) -> &ElementBox {
        &self.element
    }

    /// The viewport snapshot.
    pub const fn viewport(&self) -> &ViewportRect {
        &self.viewport
    }

    /// The edge classification.
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Top-left corner in document coordinates.
    pub fn document_position(&self) -> Point {
        self.element.view.origin() + self.viewport.scroll()
    }

    /// Overlap with the viewport.
    pub fn intersect(&self) -> Intersection {
        intersect(&self.element, &self.viewport, self.visibility)
    }

    /// Per-side gaps to the viewport, or `None` when hidden.
    pub fn difference(&self) -> Option<DifferenceRect> {
        difference(&self.element, &self.viewport, self.visibility)
    }
}
