//! Circle shape.

use crate::style::ShapeColor;
use kurbo::{Circle as KurboCircle, Point};

/// A filled circle defined by its center and a point on its rim.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    /// Where the drag started.
    pub center: Point,
    /// Where the drag currently is; any point at the desired radius.
    pub radius_point: Point,
    pub color: ShapeColor,
}

impl Circle {
    pub fn new(center: Point, radius_point: Point, color: ShapeColor) -> Self {
        Self {
            center,
            radius_point,
            color,
        }
    }

    /// Euclidean distance from center to the radius point.
    pub fn radius(&self) -> f64 {
        self.center.distance(self.radius_point)
    }

    pub fn as_kurbo(&self) -> KurboCircle {
        KurboCircle::new(self.center, self.radius())
    }
}
