//! Drawing the wireframe onto a line surface
use log::trace;

use crate::geometry::{ScreenPoint, Shape};
use crate::projection::Camera;

/// Line colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Something straight lines can be drawn on
pub trait Surface {
    /// Current width and height in pixels
    fn size(&self) -> (f64, f64);

    fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, color: Rgb);
}

/// Edge counts for one drawn frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub drawn: usize,
    pub skipped: usize,
}

/// Project and draw every edge of `shape`. Edges with an unplottable endpoint
/// are left out of this frame.
pub fn draw_wireframe<S>(surface: &mut S, shape: &Shape, camera: &Camera, color: Rgb) -> FrameStats
where
    S: Surface + ?Sized,
{
    let (width, height) = surface.size();
    let mut stats = FrameStats::default();

    for &edge in shape.edges() {
        match camera.project_edge(shape, edge, width, height) {
            Ok((from, to)) => {
                surface.draw_line(from, to, color);
                stats.drawn += 1;
            }
            Err(reason) => {
                trace!("skipping edge {edge:?}: {reason}");
                stats.skipped += 1;
            }
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    struct RecordingSurface {
        lines: Vec<(ScreenPoint, ScreenPoint, Rgb)>,
    }

    impl Surface for RecordingSurface {
        fn size(&self) -> (f64, f64) {
            (640.0, 400.0)
        }

        fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, color: Rgb) {
            self.lines.push((from, to, color));
        }
    }

    #[test]
    fn test_draws_all_edges() {
        let mut surface = RecordingSurface { lines: Vec::new() };
        let camera = Camera::default();
        let stats = draw_wireframe(&mut surface, &Shape::cube(100.0), &camera, Rgb(1, 2, 3));

        assert_eq!(stats, FrameStats { drawn: 12, skipped: 0 });
        assert_eq!(surface.lines.len(), 12);
        let corner = camera.project(&Point3::new(-50.0, 50.0, 50.0), 640.0, 400.0).unwrap();
        assert_eq!(surface.lines[0].0, corner);
        assert!(surface.lines.iter().all(|&(_, _, c)| c == Rgb(1, 2, 3)));
    }

    #[test]
    fn test_skips_edges_touching_focal_plane() {
        let mut surface = RecordingSurface { lines: Vec::new() };
        // Vertex 0 sits exactly on the focal plane
        let camera = Camera::new(Point3::new(0.0, 0.0, -130.0), 180.0);
        let stats = draw_wireframe(&mut surface, &Shape::cube(100.0), &camera, Rgb(0, 255, 0));

        // Vertices 0..4 are all at z = 50, so the whole front face and its connectors go
        assert_eq!(stats, FrameStats { drawn: 4, skipped: 8 });
        assert_eq!(surface.lines.len(), 4);
    }
}
