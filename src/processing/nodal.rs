use crate::discretization::geometry::TriangleGeometry;
use crate::discretization::mesh::SurfaceMesh;
use crate::physics::newtonian::PanelPressure;

/// Denominator floor for vertices with no incident triangles. An isolated
/// vertex accumulates nothing, so flooring the weight sum turns 0/0 into 0
/// instead of a fault. The run is never aborted for interpolation gaps.
pub const AREA_FLOOR: f64 = 1e-6;

/// Redistribute the per-triangle pressure field to the mesh vertices by
/// area-weighted averaging.
///
/// Each triangle contributes `p * A` and `A` to the accumulators of exactly
/// its three corners, so every nodal value is a convex combination of the
/// pressures of the triangles touching that vertex.
pub fn interpolate_to_nodes(
    mesh: &SurfaceMesh,
    geometry: &[TriangleGeometry],
    pressures: &[PanelPressure],
) -> Vec<f64> {
    debug_assert_eq!(mesh.num_triangles(), geometry.len());
    debug_assert_eq!(mesh.num_triangles(), pressures.len());

    let mut weighted = vec![0.0; mesh.num_vertices()];
    let mut weights = vec![0.0; mesh.num_vertices()];

    for ((tri, geo), panel) in mesh.triangles.iter().zip(geometry).zip(pressures) {
        for &vertex in &tri.v {
            weighted[vertex] += panel.pressure * geo.area;
            weights[vertex] += geo.area;
        }
    }

    weighted
        .iter()
        .zip(&weights)
        .map(|(num, den)| num / den.max(AREA_FLOOR))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discretization::geometry::compute_geometry;
    use crate::discretization::mesh::Triangle;
    use glam::DVec3;

    fn panel(pressure: f64) -> PanelPressure {
        PanelPressure {
            theta_deg: 0.0,
            cp: 0.0,
            pressure,
        }
    }

    #[test]
    fn nodal_value_is_area_weighted_mean() {
        // Two triangles sharing the edge (0, 2); the second has twice the area.
        let vertices = vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(-2.0, 0.0, 0.0),
        ];
        let triangles = vec![Triangle { v: [0, 1, 2] }, Triangle { v: [0, 2, 3] }];
        let mesh = SurfaceMesh::new(vertices, triangles).unwrap();
        let geometry = compute_geometry(&mesh).unwrap();
        assert!((geometry[0].area - 0.5).abs() < 1e-12);
        assert!((geometry[1].area - 1.0).abs() < 1e-12);

        let nodal = interpolate_to_nodes(&mesh, &geometry, &[panel(10.0), panel(40.0)]);

        // Vertex 0 touches both triangles: (10*0.5 + 40*1.0) / 1.5.
        assert!((nodal[0] - 30.0).abs() < 1e-12);
        // Vertices 1 and 3 touch one triangle each.
        assert!((nodal[1] - 10.0).abs() < 1e-12);
        assert!((nodal[3] - 40.0).abs() < 1e-12);
    }

    #[test]
    fn nodal_values_stay_within_incident_range() {
        let mesh = crate::discretization::generator::sphere_mesh(1.0, 6, 12);
        let geometry = compute_geometry(&mesh).unwrap();
        let pressures: Vec<PanelPressure> =
            (0..mesh.num_triangles()).map(|i| panel(i as f64)).collect();

        let nodal = interpolate_to_nodes(&mesh, &geometry, &pressures);

        for (vertex, value) in nodal.iter().enumerate() {
            let incident: Vec<f64> = mesh
                .triangles
                .iter()
                .zip(&pressures)
                .filter(|(tri, _)| tri.v.contains(&vertex))
                .map(|(_, p)| p.pressure)
                .collect();
            let lo = incident.iter().cloned().fold(f64::INFINITY, f64::min);
            let hi = incident.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            assert!(*value >= lo - 1e-9 && *value <= hi + 1e-9);
        }
    }

    #[test]
    fn isolated_vertex_reads_zero_without_fault() {
        let vertices = vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(9.0, 9.0, 9.0), // referenced by nothing
        ];
        let mesh = SurfaceMesh::new(vertices, vec![Triangle { v: [0, 1, 2] }]).unwrap();
        let geometry = compute_geometry(&mesh).unwrap();

        let nodal = interpolate_to_nodes(&mesh, &geometry, &[panel(123.0)]);
        assert_eq!(nodal[3], 0.0);
        assert!((nodal[0] - 123.0).abs() < 1e-12);
    }
}
