//! Camera and perspective projection
use std::fmt;
use std::str::FromStr;

use nalgebra::Point3;

use crate::config::ConfigError;
use crate::geometry::{Edge, Point3D, ScreenPoint, Shape};

/// How points at or beyond the focal plane (`depth > focal_distance`) are handled.
///
/// Depth is `point.z - camera.z`. As it approaches the focal distance the divisor
/// `1 - depth / focal_distance` approaches zero and the image diverges; past it
/// the divisor changes sign and the image is inverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    /// The plain divide everywhere. Only points exactly on the plane are unplottable.
    #[default]
    Perspective,
    /// Points behind the focal plane are unplottable.
    CullBehind,
    /// Points behind the focal plane use the absolute divisor and are pushed
    /// down by a full screen height instead of half of it.
    OffsetBehind,
}

impl ProjectionMode {
    pub fn name(self) -> &'static str {
        match self {
            ProjectionMode::Perspective => "perspective",
            ProjectionMode::CullBehind => "cull-behind",
            ProjectionMode::OffsetBehind => "offset-behind",
        }
    }
}

impl fmt::Display for ProjectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProjectionMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "perspective" => Ok(ProjectionMode::Perspective),
            "cull-behind" => Ok(ProjectionMode::CullBehind),
            "offset-behind" => Ok(ProjectionMode::OffsetBehind),
            _ => Err(ConfigError::UnknownProjection(s.to_string())),
        }
    }
}

/// Reason a point could not be placed on screen. The edge is simply not drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Unplottable {
    #[error("point lies on the focal plane")]
    OnFocalPlane,
    #[error("point lies behind the focal plane")]
    BehindFocalPlane,
    #[error("focal distance must be finite and non-zero")]
    InvalidFocalDistance,
    #[error("projection is not finite")]
    NonFinite,
}

/// Camera configuration for the perspective divide
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Point3D,
    pub focal_distance: f64,
    pub mode: ProjectionMode,
}

impl Camera {
    pub fn new(position: Point3D, focal_distance: f64) -> Self {
        Self {
            position,
            focal_distance,
            mode: ProjectionMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: ProjectionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Project a world point onto a `width` x `height` surface whose origin is
    /// the top-left corner; the camera axis lands on the centre.
    pub fn project(&self, point: &Point3D, width: f64, height: f64) -> Result<ScreenPoint, Unplottable> {
        project(point, &self.position, self.focal_distance, self.mode, width, height)
    }

    /// Project both endpoints of an edge, failing if either is unplottable
    pub fn project_edge(
        &self,
        shape: &Shape,
        edge: Edge,
        width: f64,
        height: f64,
    ) -> Result<(ScreenPoint, ScreenPoint), Unplottable> {
        let (a, b) = shape.edge_points(edge);
        Ok((self.project(&a, width, height)?, self.project(&b, width, height)?))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Point3::origin(), 180.0)
    }
}

/// Perspective divide:
///
/// ```text
/// sx = (p.x - c.x) / (1 - (p.z - c.z) / d) + width / 2
/// sy = (p.y - c.y) / (1 - (p.z - c.z) / d) + height / 2
/// ```
pub fn project(
    point: &Point3D,
    camera: &Point3D,
    focal_distance: f64,
    mode: ProjectionMode,
    width: f64,
    height: f64,
) -> Result<ScreenPoint, Unplottable> {
    if focal_distance == 0.0 || !focal_distance.is_finite() {
        return Err(Unplottable::InvalidFocalDistance);
    }

    let depth = point.z - camera.z;
    let divisor = 1.0 - depth / focal_distance;
    if divisor == 0.0 {
        return Err(Unplottable::OnFocalPlane);
    }

    let behind = depth > focal_distance;
    let (divisor, y_origin) = match mode {
        ProjectionMode::CullBehind if behind => return Err(Unplottable::BehindFocalPlane),
        ProjectionMode::OffsetBehind if behind => (divisor.abs(), height),
        _ => (divisor, height / 2.0),
    };

    let screen = ScreenPoint::new(
        (point.x - camera.x) / divisor + width / 2.0,
        (point.y - camera.y) / divisor + y_origin,
    );
    if screen.x.is_finite() && screen.y.is_finite() {
        Ok(screen)
    } else {
        Err(Unplottable::NonFinite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_corner_projection() {
        let camera = Camera::default();
        let p = Point3::new(-50.0, 50.0, 50.0);
        let screen = camera.project(&p, 640.0, 400.0).unwrap();

        assert_eq!(screen.x, -50.0 / (1.0 - 50.0 / 180.0) + 320.0);
        assert_eq!(screen.y, 50.0 / (1.0 - 50.0 / 180.0) + 200.0);
        assert!((screen.x - 250.769_230_769_230_77).abs() < 1e-9);
        assert!((screen.y - 269.230_769_230_769_2).abs() < 1e-9);
    }

    #[test]
    fn test_projection_is_deterministic() {
        let camera = Camera::new(Point3::new(3.0, -7.0, 11.0), 200.0);
        let p = Point3::new(12.5, 40.0, -33.0);
        assert_eq!(camera.project(&p, 640.0, 400.0), camera.project(&p, 640.0, 400.0));
    }

    #[test]
    fn test_camera_axis_hits_centre() {
        let camera = Camera::new(Point3::new(5.0, 6.0, 0.0), 180.0);
        let screen = camera.project(&Point3::new(5.0, 6.0, -500.0), 640.0, 400.0).unwrap();
        assert_eq!(screen, ScreenPoint::new(320.0, 200.0));
    }

    #[test]
    fn test_point_on_focal_plane_is_unplottable() {
        for mode in [
            ProjectionMode::Perspective,
            ProjectionMode::CullBehind,
            ProjectionMode::OffsetBehind,
        ] {
            let camera = Camera::new(Point3::new(0.0, 0.0, 20.0), 180.0).with_mode(mode);
            let p = Point3::new(10.0, 10.0, 200.0);
            assert_eq!(camera.project(&p, 640.0, 400.0), Err(Unplottable::OnFocalPlane));
        }
    }

    #[test]
    fn test_invalid_focal_distance() {
        let p = Point3::new(1.0, 1.0, 1.0);
        for d in [0.0, f64::INFINITY, f64::NAN] {
            let camera = Camera::new(Point3::origin(), d);
            assert_eq!(camera.project(&p, 640.0, 400.0), Err(Unplottable::InvalidFocalDistance));
        }
    }

    #[test]
    fn test_non_finite_point() {
        let camera = Camera::default();
        let p = Point3::new(f64::INFINITY, 0.0, 0.0);
        assert_eq!(camera.project(&p, 640.0, 400.0), Err(Unplottable::NonFinite));
    }

    #[test]
    fn test_behind_plane_modes() {
        let p = Point3::new(30.0, 40.0, 270.0);
        let camera = Camera::default();

        // depth 270 against d = 180: divisor is -0.5, so the plain divide inverts
        let plain = camera.project(&p, 640.0, 400.0).unwrap();
        assert_eq!(plain, ScreenPoint::new(-60.0 + 320.0, -80.0 + 200.0));

        let culled = camera.with_mode(ProjectionMode::CullBehind).project(&p, 640.0, 400.0);
        assert_eq!(culled, Err(Unplottable::BehindFocalPlane));

        let offset = camera.with_mode(ProjectionMode::OffsetBehind).project(&p, 640.0, 400.0).unwrap();
        assert_eq!(offset, ScreenPoint::new(60.0 + 320.0, 80.0 + 400.0));
    }

    #[test]
    fn test_modes_agree_in_front_of_plane() {
        let p = Point3::new(-20.0, 35.0, 90.0);
        let camera = Camera::default();
        let expected = camera.project(&p, 640.0, 400.0);
        assert!(expected.is_ok());
        for mode in [ProjectionMode::CullBehind, ProjectionMode::OffsetBehind] {
            assert_eq!(camera.with_mode(mode).project(&p, 640.0, 400.0), expected);
        }
    }

    #[test]
    fn test_project_edge_fails_if_either_end_fails() {
        let mut shape = Shape::cube(100.0);
        shape.vertices[1].z = 180.0;
        let camera = Camera::default();
        assert_eq!(
            camera.project_edge(&shape, (0, 1), 640.0, 400.0),
            Err(Unplottable::OnFocalPlane)
        );
        assert!(camera.project_edge(&shape, (2, 3), 640.0, 400.0).is_ok());
    }

    #[test]
    fn test_mode_names_round_trip() {
        for mode in [
            ProjectionMode::Perspective,
            ProjectionMode::CullBehind,
            ProjectionMode::OffsetBehind,
        ] {
            assert_eq!(mode.to_string().parse::<ProjectionMode>(), Ok(mode));
        }
        assert!("orthographic".parse::<ProjectionMode>().is_err());
    }
}
