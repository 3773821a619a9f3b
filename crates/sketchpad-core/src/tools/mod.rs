//! Tool selection and the gesture state machine.

use crate::canvas::BrushHandle;
use crate::shapes::{Brush, Circle, Line, Rectangle, Shape};
use crate::style::{BrushSize, ShapeColor};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Unknown tool name.
#[derive(Debug, Error)]
#[error("Unknown tool {0:?} (expected brush, rectangle, circle or line)")]
pub struct ToolParseError(pub String);

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Brush,
    Rectangle,
    Circle,
    Line,
}

impl ToolKind {
    pub const ALL: [ToolKind; 4] = [
        ToolKind::Brush,
        ToolKind::Rectangle,
        ToolKind::Circle,
        ToolKind::Line,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Brush => "brush",
            ToolKind::Rectangle => "rectangle",
            ToolKind::Circle => "circle",
            ToolKind::Line => "line",
        }
    }

    /// Whether the tool sizes a shape between two points (shown as a preview).
    pub fn is_bounded(self) -> bool {
        !matches!(self, ToolKind::Brush)
    }

    /// Create the shape this tool starts with at `start`.
    ///
    /// Two-point shapes begin collapsed (`end == start`); brush strokes begin
    /// with a single point.
    pub fn start_shape(self, start: Point, color: ShapeColor, size: BrushSize) -> Shape {
        let width = size.as_f64();
        match self {
            ToolKind::Brush => Shape::Brush(Brush::new(start, color, width)),
            ToolKind::Rectangle => Shape::Rectangle(Rectangle::new(start, start, color)),
            ToolKind::Circle => Shape::Circle(Circle::new(start, start, color)),
            ToolKind::Line => Shape::Line(Line::new(start, start, color, width)),
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolKind {
    type Err = ToolParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ToolKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ToolParseError(s.to_string()))
    }
}

/// State of the single tracked pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolState {
    /// No button held.
    #[default]
    Idle,
    /// Growing an already committed brush stroke.
    DrawingBrush(BrushHandle),
    /// Sizing a preview of a two-point shape.
    DrawingPreview(ToolKind),
}

/// Current tool selection plus the gesture in progress.
#[derive(Debug, Clone, Default)]
pub struct ToolManager {
    /// Tool used by the next gesture.
    pub current_tool: ToolKind,
    /// Gesture in progress.
    pub state: ToolState,
}

impl ToolManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the tool for the next gesture. A gesture already under way keeps
    /// the tool it started with.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.current_tool = tool;
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.state, ToolState::Idle)
    }

    /// End the gesture, returning the state it was in.
    pub fn finish(&mut self) -> ToolState {
        std::mem::take(&mut self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tool_names() {
        assert_eq!("brush".parse::<ToolKind>().unwrap(), ToolKind::Brush);
        assert_eq!("Rectangle".parse::<ToolKind>().unwrap(), ToolKind::Rectangle);
        assert_eq!(" circle ".parse::<ToolKind>().unwrap(), ToolKind::Circle);
        assert_eq!("LINE".parse::<ToolKind>().unwrap(), ToolKind::Line);
        assert!("eraser".parse::<ToolKind>().is_err());
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for kind in ToolKind::ALL {
            assert_eq!(kind.to_string().parse::<ToolKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_deserialize_lowercase() {
        let kind: ToolKind = serde_json::from_str("\"circle\"").unwrap();
        assert_eq!(kind, ToolKind::Circle);
    }

    #[test]
    fn test_start_shape_collapsed() {
        let start = Point::new(4.0, 2.0);
        let shape =
            ToolKind::Rectangle.start_shape(start, ShapeColor::black(), BrushSize::default());
        assert_eq!(shape, Shape::Rectangle(Rectangle::new(start, start, ShapeColor::black())));

        let shape = ToolKind::Line.start_shape(start, ShapeColor::black(), BrushSize::new(35));
        match shape {
            Shape::Line(line) => assert!((line.stroke_width - 35.0).abs() < f64::EPSILON),
            other => panic!("expected line, got {other:?}"),
        }
    }

    #[test]
    fn test_only_brush_is_unbounded() {
        assert!(!ToolKind::Brush.is_bounded());
        assert!(ToolKind::Rectangle.is_bounded());
        assert!(ToolKind::Circle.is_bounded());
        assert!(ToolKind::Line.is_bounded());
    }

    #[test]
    fn test_set_tool_keeps_active_gesture() {
        let mut tm = ToolManager::new();
        tm.state = ToolState::DrawingPreview(ToolKind::Circle);
        tm.set_tool(ToolKind::Line);
        assert_eq!(tm.current_tool, ToolKind::Line);
        assert_eq!(tm.state, ToolState::DrawingPreview(ToolKind::Circle));
        assert_eq!(tm.finish(), ToolState::DrawingPreview(ToolKind::Circle));
        assert!(!tm.is_active());
    }
}
