// config.rs - Startup configuration, read once and passed down explicitly
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glam::{Mat4, Vec3};
use log::info;
use serde::{Deserialize, Serialize};

use crate::camera::Camera;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub camera: CameraConfig,
    pub controls: ControlConfig,
    pub projection: ProjectionConfig,
    /// Directory holding shaders and textures for the renderer
    pub resource_dir: PathBuf,
}

/// Initial camera placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub eye: Vec3,
    pub center: Vec3,
    pub up: Vec3,
}

/// Per-event step sizes used by the navigator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    /// Distance for one zoom or strafe key press
    pub move_step: f32,
    /// Degrees for one roll key press
    pub roll_step: f32,
    /// Pointer pixels per degree of pitch/yaw
    pub mouse_divisor: f32,
    /// Re-orthonormalize the camera after this many rotations; 0 never does
    pub reorthonormalize_every: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub fov_y_deg: f32,
    pub width: u32,
    pub height: u32,
    pub near: f32,
    pub far: f32,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config = serde_json::from_str(text)?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            controls: ControlConfig::default(),
            projection: ProjectionConfig::default(),
            resource_dir: PathBuf::from("res"),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 5.0),
            center: Vec3::ZERO,
            up: Vec3::Y,
        }
    }
}

impl CameraConfig {
    pub fn build(&self) -> Camera {
        Camera::new(self.eye, self.center, self.up)
    }
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            move_step: 0.3,
            roll_step: 5.0,
            mouse_divisor: 10.0,
            reorthonormalize_every: 0,
        }
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            fov_y_deg: 75.0,
            width: 1280,
            height: 720,
            near: 1.0,
            far: 100.0,
        }
    }
}

impl ProjectionConfig {
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// GL-style perspective (clip depth -1..1)
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y_deg.to_radians(), self.aspect(), self.near, self.far)
    }
}
