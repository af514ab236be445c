// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The viewport snapshot.

use kurbo::{Rect, Size, Vec2};

use crate::{Error, Result};

/// The visible region of a scrollable document at one point in time.
///
/// `left`/`top` are the current scroll offset in document coordinates; `width`/`height`
/// are the visible extent. Take a fresh snapshot for every query: scrolling or resizing
/// invalidates it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportRect {
    /// Horizontal scroll offset.
    pub left: f64,
    /// Vertical scroll offset.
    pub top: f64,
    /// Visible width.
    pub width: f64,
    /// Visible height.
    pub height: f64,
}

impl ViewportRect {
    /// Create a viewport snapshot without validation.
    #[inline]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Create a viewport snapshot, rejecting negative or non-finite extents and
    /// non-finite scroll offsets.
    pub fn try_new(left: f64, top: f64, width: f64, height: f64) -> Result<Self> {
        let extent_ok = |v: f64| v.is_finite() && v >= 0.0;
        if !extent_ok(width) || !extent_ok(height) || !left.is_finite() || !top.is_finite() {
            return Err(Error::InvalidViewport { width, height });
        }
        Ok(Self::new(left, top, width, height))
    }

    /// Create a viewport whose scroll offsets come from prioritized legacy sources.
    ///
    /// For each axis the first candidate that is neither zero nor NaN wins. When none
    /// qualifies the offset is `0`.
    ///
    /// ```
    /// use understory_viewport::ViewportRect;
    ///
    /// // Root element reports nothing, body reports the real offset.
    /// let vp = ViewportRect::from_scroll_candidates([0.0, 120.0, 90.0], [0.0], 800.0, 600.0);
    /// assert_eq!(vp.left, 120.0);
    /// assert_eq!(vp.top, 0.0);
    /// ```
    pub fn from_scroll_candidates(
        left_candidates: impl IntoIterator<Item = f64>,
        top_candidates: impl IntoIterator<Item = f64>,
        width: f64,
        height: f64,
    ) -> Self {
        Self::new(
            first_set_offset(left_candidates),
            first_set_offset(top_candidates),
            width,
            height,
        )
    }

    /// The visible extent.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The scroll offset as a vector from the document origin.
    #[inline]
    pub const fn scroll(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    /// The visible region in document coordinates.
    #[inline]
    pub fn document_rect(&self) -> Rect {
        Rect::new(
            self.left,
            self.top,
            self.left + self.width,
            self.top + self.height,
        )
    }
}

fn first_set_offset(candidates: impl IntoIterator<Item = f64>) -> f64 {
    candidates
        .into_iter()
        .find(|v| *v != 0.0 && !v.is_nan())
        .unwrap_or(0.0)
}
