//! Recorded gesture scripts.
//!
//! A script is a JSON array of commands, standing in for the button and
//! pointer wiring of an interactive front end:
//!
//! ```json
//! [
//!   { "tool": "circle" },
//!   { "color": "#3366ff" },
//!   { "size": "increase" },
//!   { "down": [20, 20] },
//!   { "move": [23, 24] },
//!   { "up": [23, 24] },
//!   "reset"
//! ]
//! ```
//!
//! Pointer coordinates are in screen space and go through the canvas viewport.

use crate::app::AppError;
use kurbo::Point;
use serde::Deserialize;
use sketchpad_core::canvas::Canvas;
use sketchpad_core::input::PointerEvent;
use sketchpad_core::tools::ToolKind;

/// Size button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeStep {
    Increase,
    Decrease,
}

/// One scripted UI action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    /// Select a tool by name.
    Tool(String),
    /// Pick a color (any CSS color).
    Color(String),
    /// Press a size button.
    Size(SizeStep),
    Down([f64; 2]),
    Move([f64; 2]),
    Up([f64; 2]),
    /// Clear the canvas.
    Reset,
}

impl Command {
    /// Apply the command to a canvas.
    pub fn apply(&self, canvas: &mut Canvas) -> Result<(), AppError> {
        match self {
            Command::Tool(name) => canvas.set_tool(name.parse::<ToolKind>()?),
            Command::Color(color) => canvas.set_color_str(color)?,
            Command::Size(SizeStep::Increase) => canvas.increase_size(),
            Command::Size(SizeStep::Decrease) => canvas.decrease_size(),
            Command::Down([x, y]) => canvas.handle_pointer_event(PointerEvent::Down {
                position: Point::new(*x, *y),
            }),
            Command::Move([x, y]) => canvas.handle_pointer_event(PointerEvent::Move {
                position: Point::new(*x, *y),
            }),
            Command::Up([x, y]) => canvas.handle_pointer_event(PointerEvent::Up {
                position: Point::new(*x, *y),
            }),
            Command::Reset => canvas.reset(),
        }
        Ok(())
    }
}

/// Parse a script from JSON.
pub fn parse_script(json: &str) -> Result<Vec<Command>, AppError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sketchpad_core::shapes::Shape;

    #[test]
    fn test_parse_script() {
        let commands = parse_script(
            r#"[{"tool":"circle"},{"color":"red"},{"size":"decrease"},
                {"down":[1,2]},{"move":[3.5,4]},{"up":[5,6]},"reset"]"#,
        )
        .unwrap();
        assert_eq!(
            commands,
            vec![
                Command::Tool("circle".to_string()),
                Command::Color("red".to_string()),
                Command::Size(SizeStep::Decrease),
                Command::Down([1.0, 2.0]),
                Command::Move([3.5, 4.0]),
                Command::Up([5.0, 6.0]),
                Command::Reset,
            ]
        );
    }

    #[test]
    fn test_parse_rejects_unknown_command() {
        assert!(matches!(parse_script(r#"[{"undo":true}]"#), Err(AppError::Json(_))));
    }

    #[test]
    fn test_apply_commands() {
        let mut canvas = Canvas::new();
        for command in parse_script(
            r##"[{"tool":"Line"},{"color":"#00ff00"},{"size":"increase"},
                {"down":[0,0]},{"move":[5,5]},{"up":[10,0]}]"##,
        )
        .unwrap()
        {
            command.apply(&mut canvas).unwrap();
        }
        match &canvas.document.shapes()[0] {
            Shape::Line(line) => {
                assert_eq!(line.end, Point::new(10.0, 0.0));
                assert!((line.stroke_width - 25.0).abs() < f64::EPSILON);
                assert_eq!((line.color.r, line.color.g, line.color.b), (0, 255, 0));
            }
            other => panic!("expected line, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_tool_and_color() {
        let mut canvas = Canvas::new();
        assert!(matches!(
            Command::Tool("eraser".into()).apply(&mut canvas),
            Err(AppError::Tool(_))
        ));
        assert!(matches!(
            Command::Color("blurple-ish".into()).apply(&mut canvas),
            Err(AppError::Color(_))
        ));
    }
}
