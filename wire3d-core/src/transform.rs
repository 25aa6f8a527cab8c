//! Point rotations about world axes and about arbitrary lines
use log::trace;
use nalgebra::{Unit, Vector3};

use crate::geometry::Point3D;

/// Axes shorter than this are treated as degenerate
pub const AXIS_EPSILON: f64 = f64::EPSILON;

/// One of the three world axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn unit_vector(self) -> Vector3<f64> {
        match self {
            Axis::X => Vector3::x(),
            Axis::Y => Vector3::y(),
            Axis::Z => Vector3::z(),
        }
    }
}

/// Rotate `point` by `angle` radians about the world `axis` passing through `pivot`.
///
/// Right-handed: a positive angle about Z takes +X towards +Y.
pub fn rotate_about_axis(point: &Point3D, angle: f64, axis: Axis, pivot: &Point3D) -> Point3D {
    let p = point - pivot;
    let (sin, cos) = angle.sin_cos();
    let rotated = match axis {
        Axis::X => Vector3::new(p.x, p.y * cos - p.z * sin, p.y * sin + p.z * cos),
        Axis::Y => Vector3::new(p.x * cos + p.z * sin, p.y, -p.x * sin + p.z * cos),
        Axis::Z => Vector3::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos, p.z),
    };
    pivot + rotated
}

/// Rotate `point` by `angle` radians about the line through `p1` and `p2`
/// using Rodrigues' formula. The direction `p1 -> p2` sets the sense of rotation.
///
/// Coincident (or non-finite) endpoints do not define an axis; the point is
/// returned unchanged.
pub fn rotate_about_line(point: &Point3D, angle: f64, p1: &Point3D, p2: &Point3D) -> Point3D {
    let Some(axis) = line_direction(p1, p2) else {
        trace!("degenerate rotation axis {p1} -> {p2}, leaving point unchanged");
        return *point;
    };

    let k = axis.into_inner();
    let v = point - p1;
    let parallel = k * k.dot(&v);
    let perpendicular = v - parallel;
    let (sin, cos) = angle.sin_cos();
    let rotated = perpendicular * cos + k.cross(&v) * sin;

    p1 + parallel + rotated
}

fn line_direction(p1: &Point3D, p2: &Point3D) -> Option<Unit<Vector3<f64>>> {
    let direction = p2 - p1;
    if !direction.iter().all(|c| c.is_finite()) {
        return None;
    }
    Unit::try_new(direction, AXIS_EPSILON)
}
