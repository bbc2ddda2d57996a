use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::traits::{Button, Controller};

/// Platform-neutral input event, as handed over by the windowing layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    Pressed(Button),
    Released(Button),
    /// Relative pointer motion in pixels
    MouseMotion { dx: f32, dy: f32 },
    Quit,
}

/// Tracks which buttons are held, fed from [`InputEvent`]s
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
    /// Pointer movement accumulated since last reset
    mouse_delta: (f32, f32),
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update held-button state from an event
    pub fn process_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::Pressed(button) => {
                self.pressed_keys.insert(button);
            }
            InputEvent::Released(button) => {
                self.pressed_keys.remove(&button);
            }
            InputEvent::MouseMotion { dx, dy } => {
                self.mouse_delta.0 += dx;
                self.mouse_delta.1 += dy;
            }
            InputEvent::Quit => {}
        }
    }

    /// Reset per-frame state (mouse delta)
    pub fn reset_deltas(&mut self) {
        self.mouse_delta = (0.0, 0.0);
    }

    /// Accumulated pointer delta since last reset
    pub fn mouse_delta(&self) -> (f32, f32) {
        self.mouse_delta
    }
}

impl Controller for InputTracker {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tracker_empty() {
        let tracker = InputTracker::new();
        assert!(!tracker.is_down(Button::MouseLeft));
        assert_eq!(tracker.mouse_delta(), (0.0, 0.0));
    }

    #[test]
    fn test_press_and_release() {
        let mut tracker = InputTracker::new();
        tracker.process_event(&InputEvent::Pressed(Button::MouseLeft));
        tracker.process_event(&InputEvent::Pressed(Button::KeyW));
        assert!(tracker.is_down(Button::MouseLeft));
        assert!(tracker.is_down(Button::KeyW));

        tracker.process_event(&InputEvent::Released(Button::MouseLeft));
        assert!(!tracker.is_down(Button::MouseLeft));
        assert!(tracker.is_down(Button::KeyW));
    }

    #[test]
    fn test_repeated_press_needs_one_release() {
        let mut tracker = InputTracker::new();
        tracker.process_event(&InputEvent::Pressed(Button::KeyD));
        tracker.process_event(&InputEvent::Pressed(Button::KeyD));
        tracker.process_event(&InputEvent::Released(Button::KeyD));
        assert!(!tracker.is_down(Button::KeyD));
    }

    #[test]
    fn test_delta_accumulates_and_resets() {
        let mut tracker = InputTracker::new();
        tracker.process_event(&InputEvent::MouseMotion { dx: 3.0, dy: -1.0 });
        tracker.process_event(&InputEvent::MouseMotion { dx: 2.0, dy: 4.0 });
        assert_eq!(tracker.mouse_delta(), (5.0, 3.0));

        tracker.reset_deltas();
        assert_eq!(tracker.mouse_delta(), (0.0, 0.0));
    }

    #[test]
    fn test_event_json_shape() {
        let event: InputEvent = serde_json::from_str(r#"{"MouseMotion":{"dx":1.5,"dy":-2.0}}"#).unwrap();
        assert_eq!(event, InputEvent::MouseMotion { dx: 1.5, dy: -2.0 });
        let event: InputEvent = serde_json::from_str(r#"{"Pressed":"KeyW"}"#).unwrap();
        assert_eq!(event, InputEvent::Pressed(Button::KeyW));
        let event: InputEvent = serde_json::from_str(r#""Quit""#).unwrap();
        assert_eq!(event, InputEvent::Quit);
    }
}
