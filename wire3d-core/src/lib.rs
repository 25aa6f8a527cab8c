/// Wire3D Core Library - Wireframe geometry, rotation and projection
///
/// This library holds the pure side of the viewer: the fixed cuboid shape,
/// point rotations, the perspective divide, and the per-frame state machine
/// driven by held keys. Frontends supply the surface and the input.

pub mod config;
pub mod controls;
pub mod geometry;
pub mod projection;
pub mod render;
pub mod scene;
pub mod transform;

// Re-export commonly used types
pub use config::{ConfigError, ViewerConfig};
pub use controls::{Command, Controls, KeySet, RotationModel};
pub use geometry::{Edge, Point3D, ScreenPoint, Shape, CUBOID_EDGES};
pub use projection::{Camera, ProjectionMode, Unplottable};
pub use render::{draw_wireframe, FrameStats, Rgb, Surface};
pub use scene::Scene;
pub use transform::{rotate_about_axis, rotate_about_line, Axis};
