//! Viewer settings and their environment overrides
use std::time::Duration;

use nalgebra::Point3;

use crate::controls::RotationModel;
use crate::geometry::{Point3D, Shape};
use crate::projection::{Camera, ProjectionMode};
use crate::render::Rgb;

pub const FOCAL_DISTANCE_VAR: &str = "WIRE3D_FOCAL_DISTANCE";
pub const PROJECTION_VAR: &str = "WIRE3D_PROJECTION";
pub const ROTATION_VAR: &str = "WIRE3D_ROTATION";

/// A setting that could not be understood
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}: {value:?} is not a number")]
    InvalidNumber { var: &'static str, value: String },
    #[error("focal distance must be finite and non-zero, got {0}")]
    InvalidFocalDistance(f64),
    #[error("unknown projection mode {0:?} (expected perspective, cull-behind or offset-behind)")]
    UnknownProjection(String),
    #[error("unknown rotation model {0:?} (expected camera or world)")]
    UnknownRotation(String),
}

/// Everything the viewer needs to build its initial state and run its loop
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Logical drawing surface, in pixels
    pub screen_width: f64,
    pub screen_height: f64,
    /// Edge length of the cube
    pub cube_size: f64,
    pub camera_position: Point3D,
    pub focal_distance: f64,
    pub projection: ProjectionMode,
    pub rotation: RotationModel,
    /// Camera translation per frame a movement key is held
    pub move_step: f64,
    /// Radians per frame a rotation key is held
    pub turn_step: f64,
    pub frame_delay: Duration,
    pub line_color: Rgb,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            screen_width: 640.0,
            screen_height: 400.0,
            cube_size: 100.0,
            camera_position: Point3::origin(),
            focal_distance: 180.0,
            projection: ProjectionMode::Perspective,
            rotation: RotationModel::CameraRelative,
            move_step: 3.0,
            turn_step: 0.1,
            frame_delay: Duration::from_millis(25),
            line_color: Rgb(0, 255, 0),
        }
    }
}

impl ViewerConfig {
    /// Defaults overlaid with any `WIRE3D_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(FOCAL_DISTANCE_VAR) {
            let focal_distance: f64 = value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
                var: FOCAL_DISTANCE_VAR,
                value: value.clone(),
            })?;
            if focal_distance == 0.0 || !focal_distance.is_finite() {
                return Err(ConfigError::InvalidFocalDistance(focal_distance));
            }
            config.focal_distance = focal_distance;
        }
        if let Some(value) = lookup(PROJECTION_VAR) {
            config.projection = value.parse()?;
        }
        if let Some(value) = lookup(ROTATION_VAR) {
            config.rotation = value.parse()?;
        }

        Ok(config)
    }

    pub fn initial_shape(&self) -> Shape {
        Shape::cube(self.cube_size)
    }

    pub fn initial_camera(&self) -> Camera {
        Camera::new(self.camera_position, self.focal_distance).with_mode(self.projection)
    }
}
