//! Key bindings and the commands they produce each frame
use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use nalgebra::Vector3;

use crate::config::{ConfigError, ViewerConfig};
use crate::transform::Axis;

bitflags! {
    /// Keys held during a frame
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct KeySet: u16 {
        const W = 1 << 0;
        const A = 1 << 1;
        const S = 1 << 2;
        const D = 1 << 3;
        const Q = 1 << 4;
        const E = 1 << 5;
        const LEFT = 1 << 6;
        const RIGHT = 1 << 7;
        const UP = 1 << 8;
        const DOWN = 1 << 9;
        const N = 1 << 10;
        const M = 1 << 11;
        const R = 1 << 12;
    }
}

impl Default for KeySet {
    fn default() -> Self {
        Self::empty()
    }
}

/// What the rotation keys rotate the shape about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationModel {
    /// Lines through the camera position, parallel to the world axes
    #[default]
    CameraRelative,
    /// The world axes through the origin
    WorldAxes,
}

impl RotationModel {
    pub fn name(self) -> &'static str {
        match self {
            RotationModel::CameraRelative => "camera",
            RotationModel::WorldAxes => "world",
        }
    }
}

impl fmt::Display for RotationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RotationModel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "camera" => Ok(RotationModel::CameraRelative),
            "world" => Ok(RotationModel::WorldAxes),
            _ => Err(ConfigError::UnknownRotation(s.to_string())),
        }
    }
}

/// A single state transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Move the camera
    Translate(Vector3<f64>),
    /// Rotate the shape
    Rotate { axis: Axis, angle: f64 },
    /// Restore the initial shape and camera
    Reset,
}

/// Step sizes and rotation model for the key bindings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Controls {
    pub move_step: f64,
    pub turn_step: f64,
    pub rotation: RotationModel,
}

impl Controls {
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self {
            move_step: config.move_step,
            turn_step: config.turn_step,
            rotation: config.rotation,
        }
    }

    /// Commands for one frame of held keys.
    ///
    /// Reset wins over everything else so the frame ends exactly on the initial state.
    pub fn commands(&self, keys: KeySet) -> Vec<Command> {
        if keys.contains(KeySet::R) {
            return vec![Command::Reset];
        }

        let step = self.move_step;
        let turn = self.turn_step;
        let bindings = [
            (KeySet::W, Command::Translate(Vector3::new(0.0, 0.0, -step))),
            (KeySet::S, Command::Translate(Vector3::new(0.0, 0.0, step))),
            (KeySet::A, Command::Translate(Vector3::new(-step, 0.0, 0.0))),
            (KeySet::D, Command::Translate(Vector3::new(step, 0.0, 0.0))),
            (KeySet::Q, Command::Translate(Vector3::new(0.0, -step, 0.0))),
            (KeySet::E, Command::Translate(Vector3::new(0.0, step, 0.0))),
            (KeySet::RIGHT, Command::Rotate { axis: Axis::Y, angle: turn }),
            (KeySet::LEFT, Command::Rotate { axis: Axis::Y, angle: -turn }),
            (KeySet::UP, Command::Rotate { axis: Axis::Z, angle: turn }),
            (KeySet::DOWN, Command::Rotate { axis: Axis::Z, angle: -turn }),
            (KeySet::N, Command::Rotate { axis: Axis::X, angle: turn }),
            (KeySet::M, Command::Rotate { axis: Axis::X, angle: -turn }),
        ];

        bindings
            .into_iter()
            .filter(|(key, _)| keys.contains(*key))
            .map(|(_, command)| command)
            .collect()
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self::from_config(&ViewerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keys_no_commands() {
        assert!(Controls::default().commands(KeySet::empty()).is_empty());
    }

    #[test]
    fn test_movement_bindings() {
        let controls = Controls::default();
        assert_eq!(
            controls.commands(KeySet::W),
            vec![Command::Translate(Vector3::new(0.0, 0.0, -3.0))]
        );
        assert_eq!(
            controls.commands(KeySet::D | KeySet::Q),
            vec![
                Command::Translate(Vector3::new(3.0, 0.0, 0.0)),
                Command::Translate(Vector3::new(0.0, -3.0, 0.0)),
            ]
        );
    }

    #[test]
    fn test_rotation_bindings() {
        let controls = Controls::default();
        assert_eq!(
            controls.commands(KeySet::LEFT | KeySet::M),
            vec![
                Command::Rotate { axis: Axis::Y, angle: -0.1 },
                Command::Rotate { axis: Axis::X, angle: -0.1 },
            ]
        );
        assert_eq!(
            controls.commands(KeySet::UP),
            vec![Command::Rotate { axis: Axis::Z, angle: 0.1 }]
        );
    }

    #[test]
    fn test_reset_overrides_other_keys() {
        let keys = KeySet::R | KeySet::W | KeySet::RIGHT;
        assert_eq!(Controls::default().commands(keys), vec![Command::Reset]);
    }

    #[test]
    fn test_every_key_is_bound() {
        let controls = Controls::default();
        for key in KeySet::all().iter() {
            assert_eq!(controls.commands(key).len(), 1, "{key:?}");
        }
    }

    #[test]
    fn test_rotation_model_names() {
        assert_eq!("camera".parse::<RotationModel>(), Ok(RotationModel::CameraRelative));
        assert_eq!(" WORLD ".parse::<RotationModel>(), Ok(RotationModel::WorldAxes));
        assert_eq!(RotationModel::WorldAxes.to_string(), "world");
    }
}
