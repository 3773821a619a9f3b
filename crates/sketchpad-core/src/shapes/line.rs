//! Straight line shape.

use crate::style::ShapeColor;
use kurbo::{Line as KurboLine, Point};

/// A straight segment.
///
/// Stroked at `stroke_width`, half the width a brush of the same size uses for
/// its polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
    pub color: ShapeColor,
    pub stroke_width: f64,
}

impl Line {
    pub fn new(start: Point, end: Point, color: ShapeColor, stroke_width: f64) -> Self {
        Self {
            start,
            end,
            color,
            stroke_width,
        }
    }

    pub fn as_kurbo(&self) -> KurboLine {
        KurboLine::new(self.start, self.end)
    }
}
