use glam::DVec3;
use thiserror::Error;

use super::mesh::SurfaceMesh;

/// Area threshold below which a triangle is treated as degenerate.
pub const DEGENERATE_AREA_TOL: f64 = 1e-12;

/// Derived per-triangle quantities. Recomputed in full whenever geometry is
/// requested; the mesh itself is never touched.
#[derive(Clone, Copy, Debug)]
pub struct TriangleGeometry {
    /// Arithmetic mean of the three corners.
    pub centroid: DVec3,
    /// Unit normal, resolved to point away from the body interior.
    pub normal: DVec3,
    pub area: f64,
}

#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("triangle {index} is degenerate (area {area:.3e})")]
    DegenerateTriangle { index: usize, area: f64 },
}

/// Reference point used to resolve normal orientation: the mean of all mesh
/// vertices, which sits inside any closed convex-ish body surface.
pub fn interior_reference(mesh: &SurfaceMesh) -> DVec3 {
    let sum = mesh.vertices.iter().copied().fold(DVec3::ZERO, |a, v| a + v);
    sum / mesh.num_vertices().max(1) as f64
}

/// Centroid, area, and consistently oriented outward unit normal for every
/// triangle.
///
/// The raw normal `0.5 * (v1 - v0) x (v2 - v0)` follows the right-hand rule
/// on the stored winding, so its direction is an artifact of the mesh file.
/// Each one is flipped, if needed, to point away from the interior reference
/// point; its magnitude is the triangle area either way.
///
/// A zero-area triangle has no normal direction at all, so it aborts the run
/// instead of leaking NaN into the force totals.
pub fn compute_geometry(mesh: &SurfaceMesh) -> Result<Vec<TriangleGeometry>, GeometryError> {
    let reference = interior_reference(mesh);
    mesh.triangles
        .iter()
        .enumerate()
        .map(|(index, tri)| {
            let [a, b, c] = mesh.corners(tri);
            let centroid = (a + b + c) / 3.0;
            let mut raw = 0.5 * (b - a).cross(c - a);
            let area = raw.length();
            if area <= DEGENERATE_AREA_TOL {
                return Err(GeometryError::DegenerateTriangle { index, area });
            }
            if raw.dot(centroid - reference) < 0.0 {
                raw = -raw;
            }
            Ok(TriangleGeometry {
                centroid,
                normal: raw / area,
                area,
            })
        })
        .collect()
}
