// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Distances from each element edge to the matching viewport edge.

use kurbo::Insets;

use crate::{Edges, ElementBox, ViewportRect, Visibility};

/// Per-side gap between an element and the viewport.
///
/// A positive value is free space between the element edge and the viewport edge on
/// that side. Sides whose edge lies outside the viewport are `0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DifferenceRect {
    /// Gap between the viewport's left edge and the element's left edge.
    pub left: f64,
    /// Gap between the viewport's top edge and the element's top edge.
    pub top: f64,
    /// Gap between the element's right edge and the viewport's right edge.
    pub right: f64,
    /// Gap between the element's bottom edge and the viewport's bottom edge.
    pub bottom: f64,
}

impl DifferenceRect {
    /// The gaps as kurbo [`Insets`] (`x0` left, `y0` top, `x1` right, `y1` bottom).
    pub fn to_insets(self) -> Insets {
        Insets::new(self.left, self.top, self.right, self.bottom)
    }
}

/// Compute the per-side gaps of `element` within `viewport`.
///
/// Returns `None` when `visibility` is [`Visibility::Hidden`]. A fully visible element
/// reports all four sides.
pub fn difference(
    element: &ElementBox,
    viewport: &ViewportRect,
    visibility: Visibility,
) -> Option<DifferenceRect> {
    if visibility.is_hidden() {
        return None;
    }
    let edges = visibility.edges();
    let side = |edge: Edges, gap: f64| if edges.contains(edge) { gap } else { 0.0 };

    Some(DifferenceRect {
        left: side(Edges::LEFT, element.view_left()),
        top: side(Edges::TOP, element.view_top()),
        right: side(Edges::RIGHT, viewport.width - element.view_right()),
        bottom: side(Edges::BOTTOM, viewport.height - element.view_bottom()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify;
    use kurbo::{Rect, Size};

    const VIEWPORT: ViewportRect = ViewportRect::new(0.0, 0.0, 800.0, 600.0);

    fn run(x0: f64, y0: f64, x1: f64, y1: f64) -> Option<DifferenceRect> {
        let el = ElementBox::from_view_rect(Rect::new(x0, y0, x1, y1), Size::ZERO);
        difference(&el, &VIEWPORT, classify(&el, &VIEWPORT))
    }

    #[test]
    fn flush_element_has_no_gaps() {
        assert_eq!(run(0.0, 0.0, 800.0, 600.0), Some(DifferenceRect::default()));
    }

    #[test]
    fn contained_element_reports_all_sides() {
        let d = run(100.0, 50.0, 300.0, 450.0).unwrap();
        assert_eq!(
            d,
            DifferenceRect {
                left: 100.0,
                top: 50.0,
                right: 500.0,
                bottom: 150.0,
            }
        );
        assert_eq!(d.to_insets(), Insets::new(100.0, 50.0, 500.0, 150.0));
    }

    #[test]
    fn sides_outside_the_viewport_are_zero() {
        let d = run(-50.0, 100.0, 100.0, 300.0).unwrap();
        assert_eq!(
            d,
            DifferenceRect {
                left: 0.0,
                top: 100.0,
                right: 700.0,
                bottom: 300.0,
            }
        );
    }

    #[test]
    fn hidden_has_no_difference() {
        assert_eq!(run(0.0, 700.0, 200.0, 900.0), None);
    }

    #[test]
    fn visibility_is_taken_as_given() {
        // The differencer trusts its input and reads only the edge set.
        let el = ElementBox::from_view_rect(Rect::new(10.0, 10.0, 20.0, 20.0), Size::ZERO);
        let d = difference(&el, &VIEWPORT, Visibility::Partial(Edges::BOTTOM)).unwrap();
        assert_eq!(
            d,
            DifferenceRect {
                bottom: 580.0,
                ..DifferenceRect::default()
            }
        );
    }
}
