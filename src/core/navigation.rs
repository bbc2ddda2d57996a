use log::debug;

use crate::camera::Camera;
use crate::config::ControlConfig;
use crate::traits::{Button, Controller};

use super::input::InputEvent;

/// Maps input events onto camera gestures
///
/// Key presses step the camera by fixed amounts from [`ControlConfig`]. Pointer
/// motion only steers while the left mouse button is held.
#[derive(Debug, Clone)]
pub struct Navigator {
    controls: ControlConfig,
    rotations_since_fix: u32,
}

impl Navigator {
    pub fn new(controls: ControlConfig) -> Self {
        Self {
            controls,
            rotations_since_fix: 0,
        }
    }

    /// Apply one event to the camera. Returns true if the camera moved.
    pub fn handle<C: Controller>(&mut self, camera: &mut Camera, event: &InputEvent, controller: &C) -> bool {
        let step = self.controls.move_step;
        let roll = self.controls.roll_step;
        match *event {
            InputEvent::Pressed(button) => match button {
                Button::KeyD => camera.strafe_horiz(step),
                Button::KeyA => camera.strafe_horiz(-step),
                Button::KeyW => camera.zoom(step),
                Button::KeyS => camera.zoom(-step),
                Button::KeyQ => camera.strafe_vert(step),
                Button::KeyE => camera.strafe_vert(-step),
                Button::KeyR => self.rotated(camera, |c, deg| c.roll(deg), roll),
                Button::KeyF => self.rotated(camera, |c, deg| c.roll(deg), -roll),
                Button::Escape | Button::MouseLeft => return false,
            },
            InputEvent::MouseMotion { dx, dy } => {
                if !controller.is_down(Button::MouseLeft) {
                    return false;
                }
                let divisor = self.controls.mouse_divisor;
                self.rotated(camera, |c, deg| c.pitch(deg), -dy / divisor);
                self.rotated(camera, |c, deg| c.yaw(deg), -dx / divisor);
            }
            InputEvent::Released(_) | InputEvent::Quit => return false,
        }
        true
    }

    fn rotated(&mut self, camera: &mut Camera, gesture: impl FnOnce(&mut Camera, f32), deg: f32) {
        gesture(camera, deg);

        let every = self.controls.reorthonormalize_every;
        if every == 0 {
            return;
        }
        self.rotations_since_fix += 1;
        if self.rotations_since_fix >= every {
            self.rotations_since_fix = 0;
            camera.orthonormalize();
            debug!("re-orthonormalized camera basis, up = {:?}", camera.up());
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(ControlConfig::default())
    }
}
