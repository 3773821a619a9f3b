//! tiny-skia based CPU renderer.

use crate::renderer::{
    PixelBuffer, RenderConfig, RenderContext, RenderResult, Renderer, RendererError,
};
use kurbo::{BezPath, PathEl};
use sketchpad_core::shapes::{Brush, Circle, Line, Rectangle, Shape};
use sketchpad_core::style::ShapeColor;
use tiny_skia::{
    FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, PixmapPaint, Stroke, Transform,
};

/// Miter limit of an HTML canvas 2D context.
const MITER_LIMIT: f32 = 10.0;

/// Convert a kurbo path into a tiny-skia path.
///
/// Returns `None` for paths with nothing to draw, such as a lone `MoveTo`.
fn to_skia_path(path: &BezPath) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(p1, p2) => {
                pb.quad_to(p1.x as f32, p1.y as f32, p2.x as f32, p2.y as f32)
            }
            PathEl::CurveTo(p1, p2, p3) => pb.cubic_to(
                p1.x as f32,
                p1.y as f32,
                p2.x as f32,
                p2.y as f32,
                p3.x as f32,
                p3.y as f32,
            ),
            PathEl::ClosePath => pb.close(),
        }
    }
    pb.finish()
}

fn to_skia_color(color: ShapeColor) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a)
}

/// Draws shapes onto a pixmap.
#[derive(Debug, Clone, Copy)]
struct Painter {
    anti_alias: bool,
}

impl Painter {
    fn paint(&self, color: ShapeColor) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(to_skia_color(color));
        paint.anti_alias = self.anti_alias;
        paint
    }

    fn render_shape(&self, target: &mut Pixmap, shape: &Shape) {
        match shape {
            Shape::Brush(brush) => self.render_brush(target, brush),
            Shape::Rectangle(rect) => self.render_rectangle(target, rect),
            Shape::Circle(circle) => self.render_circle(target, circle),
            Shape::Line(line) => self.render_line(target, line),
        }
    }

    /// A disc on every sample, then a double-width polyline bridging the gaps.
    fn render_brush(&self, target: &mut Pixmap, brush: &Brush) {
        let paint = self.paint(brush.color);
        for disc in brush.discs() {
            if let Some(path) = PathBuilder::from_circle(
                disc.center.x as f32,
                disc.center.y as f32,
                disc.radius as f32,
            ) {
                target.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
            }
        }

        if let Some(path) = to_skia_path(&brush.to_path()) {
            let stroke = Stroke {
                width: brush.polyline_width() as f32,
                miter_limit: MITER_LIMIT,
                line_cap: LineCap::Butt,
                line_join: LineJoin::Miter,
                ..Stroke::default()
            };
            target.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }

    fn render_rectangle(&self, target: &mut Pixmap, rect: &Rectangle) {
        let r = rect.as_rect();
        if let Some(skia_rect) =
            tiny_skia::Rect::from_ltrb(r.x0 as f32, r.y0 as f32, r.x1 as f32, r.y1 as f32)
        {
            target.fill_rect(skia_rect, &self.paint(rect.color), Transform::identity(), None);
        }
    }

    fn render_circle(&self, target: &mut Pixmap, circle: &Circle) {
        let c = circle.as_kurbo();
        // A zero radius yields no path and paints nothing.
        if let Some(path) =
            PathBuilder::from_circle(c.center.x as f32, c.center.y as f32, c.radius as f32)
        {
            target.fill_path(
                &path,
                &self.paint(circle.color),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    fn render_line(&self, target: &mut Pixmap, line: &Line) {
        let segment = line.as_kurbo();
        let mut pb = PathBuilder::new();
        pb.move_to(segment.p0.x as f32, segment.p0.y as f32);
        pb.line_to(segment.p1.x as f32, segment.p1.y as f32);
        if let Some(path) = pb.finish() {
            let stroke = Stroke {
                width: line.stroke_width as f32,
                miter_limit: MITER_LIMIT,
                line_cap: LineCap::Butt,
                ..Stroke::default()
            };
            target.stroke_path(
                &path,
                &self.paint(line.color),
                &stroke,
                Transform::identity(),
                None,
            );
        }
    }
}

/// CPU renderer drawing into an in-memory pixmap.
///
/// Keeps a second, same-sized pixmap for the preview layer so the preview's
/// own overlapping draws are flattened before its opacity is applied.
pub struct PixmapRenderer {
    config: RenderConfig,
    /// The frame.
    surface: Pixmap,
    /// Scratch layer for the preview.
    layer: Pixmap,
}

impl PixmapRenderer {
    /// Create a renderer with a surface of the configured size.
    pub fn new(config: RenderConfig) -> RenderResult<Self> {
        let alloc = || {
            Pixmap::new(config.width, config.height).ok_or(RendererError::InvalidSurface {
                width: config.width,
                height: config.height,
            })
        };
        let surface = alloc()?;
        let layer = alloc()?;
        log::debug!("Allocated {}x{} render surface", config.width, config.height);
        Ok(Self {
            config,
            surface,
            layer,
        })
    }
}

impl Renderer for PixmapRenderer {
    fn render(&mut self, ctx: &RenderContext) -> RenderResult<()> {
        let painter = Painter {
            anti_alias: self.config.anti_alias,
        };
        let background = ShapeColor::from(self.config.background_color);
        self.surface.fill(to_skia_color(background));

        for shape in ctx.shapes {
            painter.render_shape(&mut self.surface, shape);
        }

        if let Some(preview) = ctx.preview {
            self.layer.fill(tiny_skia::Color::TRANSPARENT);
            painter.render_shape(&mut self.layer, preview);

            let paint = PixmapPaint {
                opacity: self.config.preview_opacity,
                ..PixmapPaint::default()
            };
            self.surface
                .draw_pixmap(0, 0, self.layer.as_ref(), &paint, Transform::identity(), None);
        }

        log::trace!(
            "Rendered {} shapes (preview: {})",
            ctx.shapes.len(),
            ctx.preview.is_some()
        );
        Ok(())
    }

    fn pixels(&self) -> PixelBuffer {
        let rgba_data = self
            .surface
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();
        PixelBuffer {
            rgba_data,
            width: self.surface.width(),
            height: self.surface.height(),
        }
    }
}
