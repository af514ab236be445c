// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw box metrics for one element.

use kurbo::{Point, Rect, Size, Vec2};

use crate::{Error, Result, ViewportRect};

/// Tolerance used by [`ElementBox::validate`] when comparing edges against outer size.
const EDGE_EPSILON: f64 = 1e-9;

/// Box metrics of a rectangular element at one point in time.
///
/// Axes start at the top-left corner: x grows to the right and y grows down.
/// `view` holds the element's border-box edges in viewport coordinates and must satisfy
/// `view.x1 == view.x0 + outer.width` and `view.y1 == view.y0 + outer.height`.
/// Construct through [`ElementBox::from_origin`] or [`ElementBox::from_offset_chain`] when
/// only the top-left corner is known, so right/bottom are always derived from size.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementBox {
    /// Border + padding + content extent.
    pub outer: Size,
    /// Padding + content extent (no border).
    pub inner: Size,
    /// Edges in viewport coordinates: `x0` left, `y0` top, `x1` right, `y1` bottom.
    pub view: Rect,
    /// Content extent as resolved by the host's style system, if available.
    pub content: Option<Size>,
    /// Top-left corner in document coordinates, if resolved.
    pub document: Option<Point>,
}

impl ElementBox {
    /// Build from a viewport-space top-left corner and sizes.
    pub fn from_origin(origin: Point, outer: Size, inner: Size) -> Self {
        Self {
            outer,
            inner,
            view: Rect::new(
                origin.x,
                origin.y,
                origin.x + outer.width,
                origin.y + outer.height,
            ),
            content: None,
            document: None,
        }
    }

    /// Build from a native bounding rectangle in viewport space.
    ///
    /// The outer size is taken from the rectangle.
    pub fn from_view_rect(view: Rect, inner: Size) -> Self {
        Self {
            outer: Size::new(view.x1 - view.x0, view.y1 - view.y0),
            inner,
            view,
            content: None,
            document: None,
        }
    }

    /// Build from a chain of offsets relative to successive offset parents.
    ///
    /// `offsets` yields the element's own offset first and then each ancestor's, until
    /// the chain ends. Their sum is the document position; the view position subtracts
    /// the viewport's scroll offset.
    ///
    /// ```
    /// use kurbo::{Point, Size, Vec2};
    /// use understory_viewport::{ElementBox, ViewportRect};
    ///
    /// let viewport = ViewportRect::new(0.0, 40.0, 800.0, 600.0);
    /// let chain = [Vec2::new(10.0, 20.0), Vec2::new(5.0, 100.0)];
    /// let el = ElementBox::from_offset_chain(chain, Size::new(50.0, 30.0), Size::new(46.0, 26.0), &viewport);
    /// assert_eq!(el.document, Some(Point::new(15.0, 120.0)));
    /// assert_eq!(el.view_top(), 80.0);
    /// assert_eq!(el.view_bottom(), 110.0);
    /// ```
    pub fn from_offset_chain(
        offsets: impl IntoIterator<Item = Vec2>,
        outer: Size,
        inner: Size,
        viewport: &ViewportRect,
    ) -> Self {
        let mut document = Point::ZERO;
        for offset in offsets {
            document += offset;
        }
        Self {
            document: Some(document),
            ..Self::from_origin(document - viewport.scroll(), outer, inner)
        }
    }

    /// Resolve the document position from the view position and the viewport's scroll.
    #[must_use]
    pub fn with_document_position(self, viewport: &ViewportRect) -> Self {
        Self {
            document: Some(self.view.origin() + viewport.scroll()),
            ..self
        }
    }

    /// Attach the content extent resolved from computed styles.
    #[must_use]
    pub fn with_content_size(self, content: Size) -> Self {
        Self {
            content: Some(content),
            ..self
        }
    }

    /// Content extent, falling back to the inner size when styles were unavailable.
    pub fn content_size(&self) -> Size {
        self.content.unwrap_or(self.inner)
    }

    /// Left edge in viewport coordinates.
    #[inline]
    pub const fn view_left(&self) -> f64 {
        self.view.x0
    }

    /// Top edge in viewport coordinates.
    #[inline]
    pub const fn view_top(&self) -> f64 {
        self.view.y0
    }

    /// Right edge in viewport coordinates.
    #[inline]
    pub const fn view_right(&self) -> f64 {
        self.view.x1
    }

    /// Bottom edge in viewport coordinates.
    #[inline]
    pub const fn view_bottom(&self) -> f64 {
        self.view.y1
    }

    /// Outer width.
    #[inline]
    pub const fn outer_width(&self) -> f64 {
        self.outer.width
    }

    /// Outer height.
    #[inline]
    pub const fn outer_height(&self) -> f64 {
        self.outer.height
    }

    /// Inner width.
    #[inline]
    pub const fn inner_width(&self) -> f64 {
        self.inner.width
    }

    /// Inner height.
    #[inline]
    pub const fn inner_height(&self) -> f64 {
        self.inner.height
    }

    /// Combined border thickness per axis (outer minus inner).
    pub fn border_size(&self) -> Size {
        self.outer - self.inner
    }

    /// Check that every value is finite and that the view edges agree with the outer size.
    ///
    /// The geometry queries never call this; it is for callers that want to tighten
    /// the contract at their own boundary.
    pub fn validate(&self) -> Result<()> {
        let Rect { x0, y0, x1, y1 } = self.view;
        let finite = [
            x0,
            y0,
            x1,
            y1,
            self.outer.width,
            self.outer.height,
            self.inner.width,
            self.inner.height,
        ]
        .iter()
        .all(|v| v.is_finite())
            && self.content.is_none_or(|c| c.is_finite())
            && self.document.is_none_or(|p| p.is_finite());
        if !finite {
            return Err(Error::NonFiniteCoordinate);
        }
        if (x1 - (x0 + self.outer.width)).abs() > EDGE_EPSILON
            || (y1 - (y0 + self.outer.height)).abs() > EDGE_EPSILON
        {
            return Err(Error::InconsistentEdges);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_origin_derives_right_and_bottom() {
        let el = ElementBox::from_origin(
            Point::new(-50.0, 100.0),
            Size::new(150.0, 200.0),
            Size::new(140.0, 190.0),
        );
        assert_eq!(el.view, Rect::new(-50.0, 100.0, 100.0, 300.0));
        assert_eq!(el.document, None);
        assert_eq!(el.border_size(), Size::new(10.0, 10.0));
        assert_eq!(el.validate(), Ok(()));
    }

    #[test]
    fn from_view_rect_derives_outer_size() {
        let el =
            ElementBox::from_view_rect(Rect::new(10.0, 20.0, 60.0, 90.0), Size::new(50.0, 70.0));
        assert_eq!(el.outer, Size::new(50.0, 70.0));
        assert_eq!(el.border_size(), Size::ZERO);
    }

    #[test]
    fn empty_offset_chain_sits_at_document_origin() {
        let viewport = ViewportRect::new(30.0, 60.0, 800.0, 600.0);
        let el = ElementBox::from_offset_chain(
            core::iter::empty(),
            Size::new(10.0, 10.0),
            Size::new(10.0, 10.0),
            &viewport,
        );
        assert_eq!(el.document, Some(Point::ZERO));
        assert_eq!(el.view, Rect::new(-30.0, -60.0, -20.0, -50.0));
    }

    #[test]
    fn document_position_adds_scroll() {
        let viewport = ViewportRect::new(0.0, 500.0, 800.0, 600.0);
        let el = ElementBox::from_origin(Point::new(20.0, 40.0), Size::new(1.0, 1.0), Size::ZERO)
            .with_document_position(&viewport);
        assert_eq!(el.document, Some(Point::new(20.0, 540.0)));
    }

    #[test]
    fn content_size_prefers_resolved_styles() {
        let el = ElementBox::from_origin(
            Point::ZERO,
            Size::new(120.0, 80.0),
            Size::new(110.0, 70.0),
        );
        assert_eq!(el.content, None);
        assert_eq!(el.content_size(), Size::new(110.0, 70.0));

        let styled = el.with_content_size(Size::new(100.0, 60.0));
        assert_eq!(styled.content_size(), Size::new(100.0, 60.0));
        assert_eq!(styled.inner, Size::new(110.0, 70.0));
        assert_eq!(styled.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_non_finite_content() {
        let el = ElementBox::from_origin(Point::ZERO, Size::new(10.0, 10.0), Size::ZERO)
            .with_content_size(Size::new(f64::NAN, 4.0));
        assert_eq!(el.validate(), Err(Error::NonFiniteCoordinate));
    }

    #[test]
    fn validate_flags_bad_geometry() {
        let mut el = ElementBox::from_origin(Point::ZERO, Size::new(10.0, 10.0), Size::ZERO);
        el.view.x1 = 11.0;
        assert_eq!(el.validate(), Err(Error::InconsistentEdges));
        el.view.x1 = f64::NAN;
        assert_eq!(el.validate(), Err(Error::NonFiniteCoordinate));
    }
}
