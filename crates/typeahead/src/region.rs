//! Root region containment.
//!
//! Outside-click detection only needs to know whether a pointer position is
//! inside the widget. The presentation layer supplies that answer through
//! [`RootRegion`]; the widget never looks at toolkit-specific handles.

use typeahead_core::{Point, Rect};

/// Answers whether a point lies inside the widget's root region.
pub trait RootRegion {
    /// Whether `point` is inside the region.
    fn contains_point(&self, point: Point) -> bool;
}

impl RootRegion for Rect {
    fn contains_point(&self, point: Point) -> bool {
        self.contains(point)
    }
}

/// A region made of several rectangles, such as the input box plus the
/// option panel hanging below it.
impl RootRegion for Vec<Rect> {
    fn contains_point(&self, point: Point) -> bool {
        self.iter().any(|rect| rect.contains(point))
    }
}

/// Adapts a closure into a [`RootRegion`].
///
/// ```
/// use typeahead::region::{RegionFn, RootRegion};
/// use typeahead_core::Point;
///
/// let left_half = RegionFn(|p: Point| p.x < 100.0);
/// assert!(left_half.contains_point(Point::new(10.0, 500.0)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RegionFn<F>(pub F);

impl<F: Fn(Point) -> bool> RootRegion for RegionFn<F> {
    fn contains_point(&self, point: Point) -> bool {
        (self.0)(point)
    }
}
