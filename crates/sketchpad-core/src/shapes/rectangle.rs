//! Rectangle shape.

use crate::style::ShapeColor;
use kurbo::{Point, Rect};

/// A filled, axis-aligned rectangle spanned by two corners.
///
/// The corners are kept as dragged; `end` may lie above or left of `start`.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    /// Corner where the drag started.
    pub start: Point,
    /// Corner under the pointer.
    pub end: Point,
    pub color: ShapeColor,
}

impl Rectangle {
    pub fn new(start: Point, end: Point, color: ShapeColor) -> Self {
        Self { start, end, color }
    }

    /// The covered region with non-negative extents, whatever the drag direction.
    pub fn as_rect(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_ignores_drag_direction() {
        let color = ShapeColor::black();
        let forward = Rectangle::new(Point::new(0.0, 0.0), Point::new(50.0, 30.0), color);
        let flipped_x = Rectangle::new(Point::new(50.0, 0.0), Point::new(0.0, 30.0), color);
        let flipped_y = Rectangle::new(Point::new(0.0, 30.0), Point::new(50.0, 0.0), color);
        let reversed = Rectangle::new(Point::new(50.0, 30.0), Point::new(0.0, 0.0), color);

        let expected = Rect::new(0.0, 0.0, 50.0, 30.0);
        assert_eq!(forward.as_rect(), expected);
        assert_eq!(flipped_x.as_rect(), expected);
        assert_eq!(flipped_y.as_rect(), expected);
        assert_eq!(reversed.as_rect(), expected);
    }
}
