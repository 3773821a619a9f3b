//! Color and size settings applied to new shapes.

use peniko::Color;
use thiserror::Error;

/// Color parsing errors.
#[derive(Debug, Error)]
pub enum ColorError {
    #[error("Invalid color {input:?}: {reason}")]
    Invalid { input: String, reason: String },
}

/// Shape color stored as straight (non-premultiplied) RGBA8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ShapeColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from an RGB triple.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    /// Parse any CSS color string (`"red"`, `"#ff000080"`, `"rgb(0 128 255)"`, ...).
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let parsed = csscolorparser::parse(input.trim()).map_err(|e| ColorError::Invalid {
            input: input.to_string(),
            reason: e.to_string(),
        })?;
        let [r, g, b, a] = parsed.to_rgba8();
        Ok(Self { r, g, b, a })
    }
}

impl Default for ShapeColor {
    fn default() -> Self {
        Self::black()
    }
}

impl std::str::FromStr for ShapeColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<(u8, u8, u8)> for ShapeColor {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<Color> for ShapeColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<ShapeColor> for Color {
    fn from(color: ShapeColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Tool size, in canvas pixels.
///
/// Always within `[MIN, MAX]`. Brush discs use it as their radius, lines as their
/// stroke width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BrushSize(u32);

impl BrushSize {
    pub const MIN: u32 = 5;
    pub const MAX: u32 = 50;
    pub const STEP: u32 = 5;
    pub const DEFAULT: u32 = 20;

    /// Create a size, clamping into `[MIN, MAX]`.
    pub fn new(value: u32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// One step larger, saturating at `MAX`.
    pub fn increased(self) -> Self {
        Self::new(self.0.saturating_add(Self::STEP))
    }

    /// One step smaller, saturating at `MIN`.
    pub fn decreased(self) -> Self {
        Self::new(self.0.saturating_sub(Self::STEP))
    }
}

impl Default for BrushSize {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}
