//! Mapping from screen coordinates to canvas pixels.

use kurbo::{Affine, Point, Rect, Size};

/// Placement of the canvas surface on screen.
///
/// The surface has an intrinsic pixel size but may be displayed stretched, for
/// example when CSS scales the canvas element. Pointer positions arrive in
/// screen space and have to be mapped back onto surface pixels, independently
/// in each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Intrinsic size of the pixel surface.
    pub canvas_size: Size,
    /// On-screen rectangle the surface is displayed in.
    pub display_rect: Rect,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::unscaled(Size::new(800.0, 600.0))
    }
}

impl Viewport {
    pub fn new(canvas_size: Size, display_rect: Rect) -> Self {
        Self {
            canvas_size,
            display_rect,
        }
    }

    /// A surface displayed at its intrinsic size at the screen origin.
    pub fn unscaled(canvas_size: Size) -> Self {
        Self::new(canvas_size, canvas_size.to_rect())
    }

    /// Per-axis scale from screen units to canvas pixels.
    ///
    /// An axis with a degenerate (zero or negative) display extent maps 1:1.
    pub fn scale(&self) -> (f64, f64) {
        let axis = |intrinsic: f64, displayed: f64| {
            if displayed > 0.0 { intrinsic / displayed } else { 1.0 }
        };
        (
            axis(self.canvas_size.width, self.display_rect.width()),
            axis(self.canvas_size.height, self.display_rect.height()),
        )
    }

    /// Transform from screen coordinates to canvas coordinates.
    pub fn screen_to_canvas_transform(&self) -> Affine {
        let (sx, sy) = self.scale();
        Affine::scale_non_uniform(sx, sy)
            * Affine::translate((-self.display_rect.x0, -self.display_rect.y0))
    }

    /// Convert a screen point to canvas coordinates.
    pub fn screen_to_canvas(&self, screen_point: Point) -> Point {
        self.screen_to_canvas_transform() * screen_point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Point, b: Point) {
        assert!((a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9, "{a:?} != {b:?}");
    }

    #[test]
    fn test_unscaled_is_identity() {
        let vp = Viewport::unscaled(Size::new(800.0, 600.0));
        assert_close(vp.screen_to_canvas(Point::new(12.5, 99.0)), Point::new(12.5, 99.0));
    }

    #[test]
    fn test_offset_and_scale() {
        // 800x600 surface shown at half size, 100px from the left and 50px from the top.
        let vp = Viewport::new(Size::new(800.0, 600.0), Rect::new(100.0, 50.0, 500.0, 350.0));
        assert_close(vp.screen_to_canvas(Point::new(100.0, 50.0)), Point::ZERO);
        assert_close(vp.screen_to_canvas(Point::new(300.0, 200.0)), Point::new(400.0, 300.0));
        assert_close(vp.screen_to_canvas(Point::new(500.0, 350.0)), Point::new(800.0, 600.0));
    }

    #[test]
    fn test_axes_scale_independently() {
        let vp = Viewport::new(Size::new(800.0, 600.0), Rect::new(0.0, 0.0, 1600.0, 300.0));
        assert_eq!(vp.scale(), (0.5, 2.0));
        assert_close(vp.screen_to_canvas(Point::new(160.0, 30.0)), Point::new(80.0, 60.0));
    }

    #[test]
    fn test_degenerate_display_maps_one_to_one() {
        let vp = Viewport::new(Size::new(800.0, 600.0), Rect::new(5.0, 5.0, 5.0, 5.0));
        assert_eq!(vp.scale(), (1.0, 1.0));
        assert_close(vp.screen_to_canvas(Point::new(15.0, 25.0)), Point::new(10.0, 20.0));
    }
}
