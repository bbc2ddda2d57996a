// session.rs - Per-frame control loop: apply input, then refresh what the renderer reads
use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec3;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::config::Config;
use crate::core::{InputEvent, InputTracker, Navigator};
use crate::frame::{FrameInfo, FrameIterator};
use crate::traits::Button;
use crate::types::ViewingUniform;

/// Recorded input, one list of events per frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Script {
    pub frames: Vec<Vec<InputEvent>>,
}

impl Script {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input script: {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse input script: {}", path.display()))
    }
}

/// What one frame did to the camera
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameReport {
    pub frame: FrameInfo,
    pub moved: bool,
    pub eye: Vec3,
    pub view_dir: Vec3,
    /// Pointer travel accumulated over the frame, held or not
    pub pointer_delta: (f32, f32),
}

/// Owns the camera for the life of a run; sole writer and sole reader
pub struct Session {
    camera: Camera,
    navigator: Navigator,
    tracker: InputTracker,
    uniform: ViewingUniform,
    frames: FrameIterator,
    quit: bool,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        let camera = config.camera.build();
        let uniform = ViewingUniform::new(&camera, config.projection.matrix());
        Self {
            camera,
            navigator: Navigator::new(config.controls),
            tracker: InputTracker::new(),
            uniform,
            frames: FrameIterator::new(),
            quit: false,
        }
    }

    /// Apply every event queued for this frame, then refresh the uniform once
    /// if any of them moved the camera.
    pub fn run_frame(&mut self, events: &[InputEvent]) -> FrameReport {
        let frame = self.frames.next().unwrap_or(FrameInfo::new(self.frames.frame_number()));
        let mut moved = false;

        for event in events {
            if matches!(event, InputEvent::Quit | InputEvent::Pressed(Button::Escape)) {
                info!("quit requested on frame {}", frame.number);
                self.quit = true;
            }
            self.tracker.process_event(event);
            moved |= self.navigator.handle(&mut self.camera, event, &self.tracker);
        }
        let pointer_delta = self.tracker.mouse_delta();
        self.tracker.reset_deltas();

        if moved {
            self.uniform.refresh_view(&self.camera);
            debug!(
                "frame {}: eye {:?}, view dir {:?}",
                frame.number,
                self.camera.eye_pos(),
                self.camera.view_dir()
            );
        }

        FrameReport {
            frame,
            moved,
            eye: *self.camera.eye_pos(),
            view_dir: self.camera.view_dir(),
            pointer_delta,
        }
    }

    /// Run frames until the script runs out or a quit event arrives
    pub fn replay(&mut self, script: &Script) -> Vec<FrameReport> {
        let mut reports = Vec::with_capacity(script.frames.len());
        for events in &script.frames {
            if self.quit {
                break;
            }
            reports.push(self.run_frame(events));
        }
        info!("replayed {} of {} frames", reports.len(), script.frames.len());
        reports
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn uniform(&self) -> &ViewingUniform {
        &self.uniform
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }
}
