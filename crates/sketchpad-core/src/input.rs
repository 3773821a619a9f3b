//! Pointer input events.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A pointer event in screen coordinates, as delivered by the UI layer.
///
/// Only one pointer stream is tracked; there is no button or touch id.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_event() {
        let event: PointerEvent =
            serde_json::from_str(r#"{"down":{"position":{"x":1.5,"y":2.0}}}"#).unwrap();
        assert_eq!(
            event,
            PointerEvent::Down {
                position: Point::new(1.5, 2.0)
            }
        );
    }
}
