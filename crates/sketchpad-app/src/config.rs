//! Command-line configuration.

use crate::app::{AppConfig, AppError};
use clap::Parser;
use kurbo::Size;
use sketchpad_core::style::ShapeColor;
use std::path::PathBuf;

/// Replay a recorded Sketchpad gesture script and save the drawing as PNG.
#[derive(Debug, Parser)]
#[command(name = "sketchpad", version, about)]
pub struct Cli {
    /// JSON gesture script to replay.
    pub script: PathBuf,

    /// Output PNG path.
    #[arg(short, long, default_value = "sketch.png")]
    pub output: PathBuf,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// On-screen width the script was recorded at (defaults to --width).
    #[arg(long)]
    pub display_width: Option<f64>,

    /// On-screen height the script was recorded at (defaults to --height).
    #[arg(long)]
    pub display_height: Option<f64>,

    /// Background color (any CSS color).
    #[arg(long, default_value = "transparent")]
    pub background: String,

    /// Disable anti-aliasing.
    #[arg(long)]
    pub no_anti_alias: bool,
}

impl Cli {
    /// Build the application config, validating the background color.
    pub fn into_config(self) -> Result<AppConfig, AppError> {
        let background = ShapeColor::parse(&self.background)?;
        let display_size = match (self.display_width, self.display_height) {
            (None, None) => None,
            (w, h) => Some(Size::new(
                w.unwrap_or(f64::from(self.width)),
                h.unwrap_or(f64::from(self.height)),
            )),
        };
        Ok(AppConfig {
            script: self.script,
            output: self.output,
            width: self.width,
            height: self.height,
            display_size,
            background_color: background.into(),
            anti_alias: !self.no_anti_alias,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Cli::parse_from(["sketchpad", "in.json"]).into_config().unwrap();
        assert_eq!(config.script, PathBuf::from("in.json"));
        assert_eq!(config.output, PathBuf::from("sketch.png"));
        assert_eq!((config.width, config.height), (800, 600));
        assert!(config.display_size.is_none());
        assert!(config.anti_alias);
        assert_eq!(ShapeColor::from(config.background_color).a, 0);
    }

    #[test]
    fn test_partial_display_size() {
        let config = Cli::parse_from(["sketchpad", "in.json", "--display-width", "400"])
            .into_config()
            .unwrap();
        assert_eq!(config.display_size, Some(Size::new(400.0, 600.0)));
    }

    #[test]
    fn test_background_and_flags() {
        let config = Cli::parse_from([
            "sketchpad",
            "in.json",
            "--background",
            "white",
            "--no-anti-alias",
            "-o",
            "out.png",
        ])
        .into_config()
        .unwrap();
        assert_eq!(ShapeColor::from(config.background_color), ShapeColor::white());
        assert!(!config.anti_alias);
        assert_eq!(config.output, PathBuf::from("out.png"));
    }

    #[test]
    fn test_invalid_background() {
        let result =
            Cli::parse_from(["sketchpad", "in.json", "--background", "nope"]).into_config();
        assert!(matches!(result, Err(AppError::Color(_))));
    }
}
