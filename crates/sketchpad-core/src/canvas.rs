//! Canvas document and session state.

use crate::input::PointerEvent;
use crate::shapes::Shape;
use crate::style::{BrushSize, ColorError, ShapeColor};
use crate::tools::{ToolKind, ToolManager, ToolState};
use crate::viewport::Viewport;
use kurbo::Point;

/// Refers to the brush stroke a gesture is growing.
///
/// Handles are tied to the document generation they were issued in, so a
/// handle held across a [`CanvasDocument::reset`] no longer addresses anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BrushHandle {
    index: usize,
    generation: u64,
}

/// The drawing: committed shapes in paint order plus an optional preview.
#[derive(Debug, Clone, Default)]
pub struct CanvasDocument {
    /// Committed shapes, back to front.
    shapes: Vec<Shape>,
    /// Two-point shape being sized by the current gesture.
    preview: Option<Shape>,
    /// Bumped on every reset.
    generation: u64,
}

impl CanvasDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a shape at `point`.
    ///
    /// A brush stroke is committed right away, so it survives even if the
    /// pointer-up never arrives, and a handle for growing it is returned. Other
    /// tools put a collapsed shape into the preview slot, replacing any
    /// previous preview, and return `None`.
    pub fn begin_stroke(
        &mut self,
        tool: ToolKind,
        point: Point,
        color: ShapeColor,
        size: BrushSize,
    ) -> Option<BrushHandle> {
        let shape = tool.start_shape(point, color, size);
        if tool.is_bounded() {
            self.preview = Some(shape);
            None
        } else {
            self.shapes.push(shape);
            Some(BrushHandle {
                index: self.shapes.len() - 1,
                generation: self.generation,
            })
        }
    }

    /// Append a point to the stroke behind `handle`.
    ///
    /// Does nothing if the handle is stale or does not refer to a brush stroke.
    pub fn extend_brush(&mut self, handle: BrushHandle, point: Point) {
        if handle.generation != self.generation {
            return;
        }
        if let Some(brush) = self
            .shapes
            .get_mut(handle.index)
            .and_then(Shape::as_brush_mut)
        {
            brush.add_point(point);
        }
    }

    /// Move the preview's end point. Does nothing without a preview.
    pub fn update_preview(&mut self, point: Point) {
        if let Some(preview) = &mut self.preview {
            preview.set_end(point);
        }
    }

    /// Move the preview into the committed shapes. Does nothing without a preview.
    pub fn commit_preview(&mut self) {
        if let Some(preview) = self.preview.take() {
            self.shapes.push(preview);
        }
    }

    /// Remove all shapes and any in-progress state.
    pub fn reset(&mut self) {
        self.shapes.clear();
        self.preview = None;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Committed shapes in paint order (back to front).
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn preview(&self) -> Option<&Shape> {
        self.preview.as_ref()
    }

    /// The shape a handle refers to, if it is still live.
    pub fn brush(&self, handle: BrushHandle) -> Option<&Shape> {
        if handle.generation != self.generation {
            return None;
        }
        self.shapes.get(handle.index).filter(|s| s.is_brush())
    }

    /// Check if the document has no committed shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Get the number of committed shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }
}

/// Session state driven by the UI layer: the document, the gesture state
/// machine, and the settings applied to new shapes.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    /// The drawing.
    pub document: CanvasDocument,
    /// Tool selection and gesture state.
    pub tool_manager: ToolManager,
    /// Screen-to-canvas mapping for pointer input.
    pub viewport: Viewport,
    /// Color for new shapes.
    color: ShapeColor,
    /// Size for new shapes.
    size: BrushSize,
    /// Set when the visible output changed since the last [`Canvas::take_redraw`].
    needs_redraw: bool,
}

impl Canvas {
    /// Create a new canvas with an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a canvas with the given screen mapping.
    pub fn with_viewport(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Set the tool for the next gesture.
    pub fn set_tool(&mut self, tool: ToolKind) {
        log::debug!("Tool selected: {}", tool);
        self.tool_manager.set_tool(tool);
    }

    pub fn tool(&self) -> ToolKind {
        self.tool_manager.current_tool
    }

    pub fn set_color(&mut self, color: impl Into<ShapeColor>) {
        self.color = color.into();
    }

    /// Set the color from a CSS color string.
    pub fn set_color_str(&mut self, color: &str) -> Result<(), ColorError> {
        self.color = ShapeColor::parse(color)?;
        Ok(())
    }

    pub fn size(&self) -> BrushSize {
        self.size
    }

    pub fn increase_size(&mut self) {
        self.size = self.size.increased();
    }

    pub fn decrease_size(&mut self) {
        self.size = self.size.decreased();
    }

    /// Clear the drawing, abandon any gesture and restore the default size.
    pub fn reset(&mut self) {
        log::info!("Resetting canvas ({} shapes)", self.document.len());
        self.document.reset();
        self.tool_manager.state = ToolState::Idle;
        self.size = BrushSize::default();
        self.needs_redraw = true;
    }

    /// Whether a pointer gesture is in progress.
    pub fn is_drawing(&self) -> bool {
        self.tool_manager.is_active()
    }

    /// Returns whether a redraw was requested, clearing the request.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Dispatch a pointer event to the matching handler.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position } => self.pointer_down(position),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up { position } => self.pointer_up(position),
        }
    }

    /// Start a gesture with the current tool. Ignored while a gesture is active.
    pub fn pointer_down(&mut self, screen_point: Point) {
        if self.is_drawing() {
            log::trace!("Ignoring pointer down during {:?}", self.tool_manager.state);
            return;
        }
        let point = self.viewport.screen_to_canvas(screen_point);
        let tool = self.tool_manager.current_tool;
        let handle = self.document.begin_stroke(tool, point, self.color, self.size);

        self.tool_manager.state = match handle {
            Some(handle) => ToolState::DrawingBrush(handle),
            None => ToolState::DrawingPreview(tool),
        };
        log::debug!("Begin {} at ({:.1}, {:.1})", tool, point.x, point.y);
        self.needs_redraw = true;
    }

    /// Grow the brush stroke or resize the preview. Ignored while idle.
    pub fn pointer_move(&mut self, screen_point: Point) {
        match self.tool_manager.state {
            ToolState::Idle => {
                log::trace!("Ignoring pointer move while idle");
                return;
            }
            ToolState::DrawingBrush(handle) => {
                let point = self.viewport.screen_to_canvas(screen_point);
                self.document.extend_brush(handle, point);
            }
            ToolState::DrawingPreview(_) => {
                let point = self.viewport.screen_to_canvas(screen_point);
                self.document.update_preview(point);
            }
        }
        self.needs_redraw = true;
    }

    /// Finish the gesture.
    ///
    /// A preview is stretched to the release point and committed. A brush
    /// stroke is already committed and does not receive the release point.
    pub fn pointer_up(&mut self, screen_point: Point) {
        match self.tool_manager.finish() {
            ToolState::Idle => {
                log::trace!("Ignoring pointer up while idle");
                return;
            }
            ToolState::DrawingBrush(handle) => {
                let points = self
                    .document
                    .brush(handle)
                    .and_then(Shape::as_brush)
                    .map_or(0, |b| b.len());
                log::debug!("Finished brush stroke with {} points", points);
            }
            ToolState::DrawingPreview(kind) => {
                let point = self.viewport.screen_to_canvas(screen_point);
                self.document.update_preview(point);
                self.document.commit_preview();
                log::debug!("Committed {} ({} shapes)", kind, self.document.len());
            }
        }
        self.needs_redraw = true;
    }
}
