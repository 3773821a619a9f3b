//! Freehand brush stroke.

use crate::style::ShapeColor;
use kurbo::{BezPath, Circle, Point};

/// A freehand stroke: a series of sampled pointer positions.
///
/// Rendered as a disc of radius `stroke_width` on every point plus a polyline of
/// width `2 * stroke_width` through them, which fills the gaps between samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Brush {
    /// Sampled points, in input order. Never empty.
    points: Vec<Point>,
    pub color: ShapeColor,
    /// Disc radius; the connecting polyline is twice as wide.
    pub stroke_width: f64,
}

impl Brush {
    /// Start a stroke at a single point.
    pub fn new(start: Point, color: ShapeColor, stroke_width: f64) -> Self {
        Self {
            points: vec![start],
            color,
            stroke_width,
        }
    }

    /// Add a point to the end of the stroke.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of sampled points (at least 1).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Width of the connecting polyline.
    pub fn polyline_width(&self) -> f64 {
        self.stroke_width * 2.0
    }

    /// The disc stamped at each sampled point.
    pub fn discs(&self) -> impl Iterator<Item = Circle> + '_ {
        self.points
            .iter()
            .map(move |&p| Circle::new(p, self.stroke_width))
    }

    /// Polyline through all points.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut iter = self.points.iter();
        if let Some(&first) = iter.next() {
            path.move_to(first);
            for &point in iter {
                path.line_to(point);
            }
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    #[test]
    fn test_brush_starts_with_one_point() {
        let brush = Brush::new(Point::new(10.0, 10.0), ShapeColor::black(), 20.0);
        assert_eq!(brush.len(), 1);
        assert_eq!(brush.points(), &[Point::new(10.0, 10.0)]);
    }

    #[test]
    fn test_add_points() {
        let mut brush = Brush::new(Point::new(0.0, 0.0), ShapeColor::black(), 5.0);
        brush.add_point(Point::new(5.0, 0.0));
        brush.add_point(Point::new(10.0, 5.0));
        assert_eq!(brush.len(), 3);
        assert_eq!(brush.points()[2], Point::new(10.0, 5.0));
    }

    #[test]
    fn test_polyline_is_twice_disc_radius() {
        let brush = Brush::new(Point::ZERO, ShapeColor::black(), 15.0);
        assert!((brush.polyline_width() - 30.0).abs() < f64::EPSILON);
        assert!(brush.discs().all(|c| (c.radius - 15.0).abs() < f64::EPSILON));
    }

    #[test]
    fn test_path_follows_points() {
        let mut brush = Brush::new(Point::new(1.0, 2.0), ShapeColor::black(), 5.0);
        brush.add_point(Point::new(3.0, 4.0));
        let els: Vec<PathEl> = brush.to_path().elements().to_vec();
        assert_eq!(
            els,
            vec![
                PathEl::MoveTo(Point::new(1.0, 2.0)),
                PathEl::LineTo(Point::new(3.0, 4.0)),
            ]
        );
    }
}
