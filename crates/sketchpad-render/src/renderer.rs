//! Renderer trait abstraction.

use peniko::Color;
use sketchpad_core::canvas::CanvasDocument;
use sketchpad_core::shapes::Shape;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Cannot allocate a {width}x{height} surface")]
    InvalidSurface { width: u32, height: u32 },
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Opacity a preview is composited at.
pub const PREVIEW_OPACITY: f32 = 0.5;

/// Surface settings, fixed for the lifetime of a renderer.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Color the surface is cleared to before each frame.
    pub background_color: Color,
    /// Opacity of the preview layer.
    pub preview_opacity: f32,
    /// Anti-alias shape edges.
    pub anti_alias: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background_color: Color::TRANSPARENT,
            preview_opacity: PREVIEW_OPACITY,
            anti_alias: true,
        }
    }
}

impl RenderConfig {
    /// Create a config for a surface of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the preview opacity (clamped to `0.0..=1.0`).
    pub fn with_preview_opacity(mut self, opacity: f32) -> Self {
        self.preview_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Enable or disable anti-aliasing.
    pub fn with_anti_alias(mut self, anti_alias: bool) -> Self {
        self.anti_alias = anti_alias;
        self
    }
}

/// Everything a single frame depends on.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Committed shapes, back to front.
    pub shapes: &'a [Shape],
    /// Shape being sized by the current gesture.
    pub preview: Option<&'a Shape>,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(shapes: &'a [Shape]) -> Self {
        Self {
            shapes,
            preview: None,
        }
    }

    /// Frame showing a document's committed shapes and preview.
    pub fn from_document(document: &'a CanvasDocument) -> Self {
        Self {
            shapes: document.shapes(),
            preview: document.preview(),
        }
    }

    /// Set the preview shape.
    pub fn with_preview(mut self, preview: Option<&'a Shape>) -> Self {
        self.preview = preview;
        self
    }
}

/// Straight (non-premultiplied) RGBA pixels of a rendered frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// RGBA pixel data (4 bytes per pixel, row-major).
    pub rgba_data: Vec<u8>,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl PixelBuffer {
    /// RGBA of the pixel at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.rgba_data
            .get(i..i + 4)
            .map(|p| [p[0], p[1], p[2], p[3]])
    }
}

/// Trait for rendering backends.
///
/// A frame is a pure function of the context: the surface is cleared, the
/// committed shapes are painted in order at full opacity, and the preview (if
/// any) is composited on top as a single translucent layer.
pub trait Renderer {
    /// Draw a full frame.
    fn render(&mut self, ctx: &RenderContext) -> RenderResult<()>;

    /// Copy out the most recently rendered frame.
    fn pixels(&self) -> PixelBuffer;

    /// Render a frame and return its pixels.
    fn render_to_pixels(&mut self, ctx: &RenderContext) -> RenderResult<PixelBuffer> {
        self.render(ctx)?;
        Ok(self.pixels())
    }
}
