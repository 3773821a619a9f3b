//! Sketchpad Core Library
//!
//! Platform-agnostic shape model and gesture handling for the Sketchpad canvas.

pub mod canvas;
pub mod input;
pub mod shapes;
pub mod style;
pub mod tools;
pub mod viewport;

pub use canvas::{BrushHandle, Canvas, CanvasDocument};
pub use input::PointerEvent;
pub use shapes::Shape;
pub use style::{BrushSize, ColorError, ShapeColor};
pub use tools::{ToolKind, ToolManager, ToolParseError, ToolState};
pub use viewport::Viewport;
