//! Geometry primitives for the wireframe shape
use nalgebra::{Point3, Vector3};

use crate::transform::{self, Axis};

/// A point in world space
pub type Point3D = Point3<f64>;

/// A point on the 2D drawing surface, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A pair of vertex indices into a [`Shape`]
pub type Edge = (usize, usize);

/// Connectivity of a cuboid: the +z face, the -z face, then the four connecting edges
pub const CUBOID_EDGES: [Edge; 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// An 8-vertex cuboid. Only positions ever change; the topology is [`CUBOID_EDGES`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub vertices: [Point3D; 8],
}

impl Shape {
    /// Cuboid of the given extents centred on the origin
    pub fn cuboid(width: f64, height: f64, depth: f64) -> Self {
        let (x, y, z) = (width / 2.0, height / 2.0, depth / 2.0);
        Self {
            vertices: [
                Point3::new(-x, y, z),
                Point3::new(x, y, z),
                Point3::new(x, -y, z),
                Point3::new(-x, -y, z),
                Point3::new(-x, y, -z),
                Point3::new(x, y, -z),
                Point3::new(x, -y, -z),
                Point3::new(-x, -y, -z),
            ],
        }
    }

    pub fn cube(size: f64) -> Self {
        Self::cuboid(size, size, size)
    }

    pub fn edges(&self) -> &'static [Edge; 12] {
        &CUBOID_EDGES
    }

    pub fn edge_points(&self, (a, b): Edge) -> (Point3D, Point3D) {
        (self.vertices[a], self.vertices[b])
    }

    /// Mean of the vertex positions
    pub fn centroid(&self) -> Point3D {
        let sum = self
            .vertices
            .iter()
            .fold(Vector3::zeros(), |acc, v| acc + v.coords);
        Point3D::from(sum / self.vertices.len() as f64)
    }

    pub fn translate(&mut self, offset: &Vector3<f64>) {
        for vertex in &mut self.vertices {
            *vertex += offset;
        }
    }

    /// Rotate every vertex about a world axis through `pivot`
    pub fn rotate_about_axis(&mut self, angle: f64, axis: Axis, pivot: &Point3D) {
        for vertex in &mut self.vertices {
            *vertex = transform::rotate_about_axis(vertex, angle, axis, pivot);
        }
    }

    /// Rotate every vertex about the line through `p1` and `p2`
    pub fn rotate_about_line(&mut self, angle: f64, p1: &Point3D, p2: &Point3D) {
        for vertex in &mut self.vertices {
            *vertex = transform::rotate_about_line(vertex, angle, p1, p2);
        }
    }
}
