//! Shape and camera state, and the transitions applied each frame
use log::{debug, info};
use nalgebra::Point3;

use crate::config::ViewerConfig;
use crate::controls::{Command, Controls, KeySet, RotationModel};
use crate::geometry::Shape;
use crate::projection::Camera;
use crate::transform::Axis;

/// The mutable world: one shape seen through one camera
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub shape: Shape,
    pub camera: Camera,
    initial_shape: Shape,
    initial_camera: Camera,
}

impl Scene {
    /// The given shape and camera also become the reset state
    pub fn new(shape: Shape, camera: Camera) -> Self {
        Self {
            shape,
            camera,
            initial_shape: shape,
            initial_camera: camera,
        }
    }

    pub fn from_config(config: &ViewerConfig) -> Self {
        Self::new(config.initial_shape(), config.initial_camera())
    }

    /// Restore shape and camera together
    pub fn reset(&mut self) {
        self.shape = self.initial_shape;
        self.camera = self.initial_camera;
        info!("scene reset");
    }

    pub fn apply(&mut self, command: Command, model: RotationModel) {
        match command {
            Command::Translate(offset) => self.camera.position += offset,
            Command::Rotate { axis, angle } => self.rotate(axis, angle, model),
            Command::Reset => self.reset(),
        }
    }

    fn rotate(&mut self, axis: Axis, angle: f64, model: RotationModel) {
        match model {
            RotationModel::CameraRelative => {
                let p1 = self.camera.position;
                let p2 = p1 + axis.unit_vector();
                self.shape.rotate_about_line(angle, &p1, &p2);
            }
            RotationModel::WorldAxes => {
                self.shape.rotate_about_axis(angle, axis, &Point3::origin());
            }
        }
    }

    /// Apply one frame of held keys. Returns whether anything was applied.
    pub fn step(&mut self, keys: KeySet, controls: &Controls) -> bool {
        let commands = controls.commands(keys);
        if !commands.is_empty() {
            debug!("keys {keys:?} -> {} command(s)", commands.len());
        }
        for &command in &commands {
            self.apply(command, controls.rotation);
        }
        !commands.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::from_config(&ViewerConfig::default())
    }
}
