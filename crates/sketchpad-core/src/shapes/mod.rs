//! Shape definitions for the canvas.

mod brush;
mod circle;
mod line;
mod rectangle;

pub use brush::Brush;
pub use circle::Circle;
pub use line::Line;
pub use rectangle::Rectangle;

use kurbo::Point;

/// Every shape that can be committed to the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Brush(Brush),
    Rectangle(Rectangle),
    Circle(Circle),
    Line(Line),
}

impl Shape {
    /// Move the point under the pointer of a two-point shape.
    ///
    /// Brush strokes grow by appending points instead, so this leaves them alone.
    pub fn set_end(&mut self, point: Point) {
        match self {
            Shape::Brush(_) => {}
            Shape::Rectangle(s) => s.end = point,
            Shape::Circle(s) => s.radius_point = point,
            Shape::Line(s) => s.end = point,
        }
    }

    pub fn is_brush(&self) -> bool {
        matches!(self, Shape::Brush(_))
    }

    pub fn as_brush(&self) -> Option<&Brush> {
        match self {
            Shape::Brush(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_brush_mut(&mut self) -> Option<&mut Brush> {
        match self {
            Shape::Brush(b) => Some(b),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ShapeColor;

    #[test]
    fn test_set_end_moves_bounded_shapes() {
        let color = ShapeColor::black();
        let mut rect = Shape::Rectangle(Rectangle::new(Point::ZERO, Point::ZERO, color));
        rect.set_end(Point::new(50.0, 30.0));
        assert_eq!(
            rect,
            Shape::Rectangle(Rectangle::new(Point::ZERO, Point::new(50.0, 30.0), color))
        );

        let mut circle = Shape::Circle(Circle::new(Point::ZERO, Point::ZERO, color));
        circle.set_end(Point::new(3.0, 4.0));
        match circle {
            Shape::Circle(c) => assert!((c.radius() - 5.0).abs() < f64::EPSILON),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_set_end_ignores_brush() {
        let mut brush = Shape::Brush(Brush::new(Point::ZERO, ShapeColor::black(), 5.0));
        brush.set_end(Point::new(9.0, 9.0));
        assert_eq!(brush.as_brush().map(Brush::len), Some(1));
    }
}
