//! Sketchpad Render Library
//!
//! Renderer abstraction and implementations for Sketchpad.
//! The default implementation rasterizes on the CPU with tiny-skia.

mod pixmap_impl;
mod renderer;

pub use pixmap_impl::PixmapRenderer;
pub use renderer::{
    PREVIEW_OPACITY, PixelBuffer, RenderConfig, RenderContext, RenderResult, Renderer,
    RendererError,
};
