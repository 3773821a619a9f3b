//! Replay application: drives a canvas from a script and exports the result.

use crate::script::{Command, parse_script};
use kurbo::{Rect, Size};
use peniko::Color;
use sketchpad_core::canvas::Canvas;
use sketchpad_core::style::ColorError;
use sketchpad_core::tools::ToolParseError;
use sketchpad_core::viewport::Viewport;
use sketchpad_render::{
    PixelBuffer, PixmapRenderer, RenderConfig, RenderContext, Renderer, RendererError,
};
use std::path::PathBuf;
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid script: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Tool(#[from] ToolParseError),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error("Render error: {0}")]
    Render(#[from] RendererError),
    #[error("PNG encoding failed: {0}")]
    Png(#[from] png::EncodingError),
    #[error("Command {index} failed: {source}")]
    Command {
        index: usize,
        #[source]
        source: Box<AppError>,
    },
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Gesture script to replay.
    pub script: PathBuf,
    /// Where the PNG is written.
    pub output: PathBuf,
    /// Intrinsic canvas size in pixels.
    pub width: u32,
    pub height: u32,
    /// On-screen size the script's coordinates were recorded against.
    /// Defaults to the intrinsic size.
    pub display_size: Option<Size>,
    pub background_color: Color,
    pub anti_alias: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            script: PathBuf::from("gestures.json"),
            output: PathBuf::from("sketch.png"),
            width: 800,
            height: 600,
            display_size: None,
            background_color: Color::TRANSPARENT,
            anti_alias: true,
        }
    }
}

impl AppConfig {
    /// Screen-to-canvas mapping for the configured sizes.
    pub fn viewport(&self) -> Viewport {
        let canvas_size = Size::new(f64::from(self.width), f64::from(self.height));
        let display = self.display_size.unwrap_or(canvas_size);
        Viewport::new(canvas_size, Rect::from_origin_size((0.0, 0.0), display))
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::new(self.width, self.height)
            .with_background(self.background_color)
            .with_anti_alias(self.anti_alias)
    }
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    canvas: Canvas,
    renderer: PixmapRenderer,
    /// Frames drawn so far.
    frames: usize,
}

impl App {
    /// Create a new application with the given configuration.
    pub fn with_config(config: AppConfig) -> Result<Self, AppError> {
        let renderer = PixmapRenderer::new(config.render_config())?;
        let canvas = Canvas::with_viewport(config.viewport());
        Ok(Self {
            config,
            canvas,
            renderer,
            frames: 0,
        })
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Number of frames rendered so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    fn redraw(&mut self) -> Result<(), AppError> {
        let ctx = RenderContext::from_document(&self.canvas.document);
        self.renderer.render(&ctx)?;
        self.frames += 1;
        Ok(())
    }

    /// Apply commands in order, redrawing whenever the canvas asks for it,
    /// and return the final frame.
    pub fn replay(&mut self, commands: &[Command]) -> Result<PixelBuffer, AppError> {
        for (index, command) in commands.iter().enumerate() {
            command
                .apply(&mut self.canvas)
                .map_err(|e| AppError::Command {
                    index,
                    source: Box::new(e),
                })?;
            if self.canvas.take_redraw() {
                self.redraw()?;
            }
        }
        if self.frames == 0 {
            self.redraw()?;
        }
        if self.canvas.is_drawing() {
            log::warn!("Script ended mid-gesture; the preview is left in the output");
        }
        log::info!(
            "Replayed {} commands: {} shapes, {} frames",
            commands.len(),
            self.canvas.document.len(),
            self.frames
        );
        Ok(self.renderer.pixels())
    }

    /// Read the script, replay it and write the final frame as PNG.
    pub fn run(&mut self) -> Result<(), AppError> {
        log::info!("Replaying {}", self.config.script.display());
        let json = std::fs::read_to_string(&self.config.script)?;
        let commands = parse_script(&json)?;
        let frame = self.replay(&commands)?;

        let png_data = encode_png(&frame)?;
        std::fs::write(&self.config.output, png_data)?;
        log::info!(
            "Wrote {}x{} PNG to {}",
            frame.width,
            frame.height,
            self.config.output.display()
        );
        Ok(())
    }
}

/// Encode straight RGBA pixels as PNG.
pub fn encode_png(frame: &PixelBuffer) -> Result<Vec<u8>, AppError> {
    let mut png_data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_data, frame.width, frame.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&frame.rgba_data)?;
        writer.finish()?;
    }
    Ok(png_data)
}
