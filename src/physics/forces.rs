use glam::DVec3;

use crate::discretization::geometry::TriangleGeometry;

use super::flow::FlowState;
use super::newtonian::PanelPressure;

/// Integrated pressure loads. `forces[i]` is the force on triangle i; the
/// coefficients are magnitudes by convention, sign is dropped on purpose.
#[derive(Clone, Debug)]
pub struct ForceReport {
    pub forces: Vec<DVec3>,
    pub total: DVec3,
    pub drag_coefficient: f64,
    pub lift_coefficient: f64,
    pub side_force_coefficient: f64,
}

/// Map every panel to its pressure force `p * A * n` and fold the results
/// into axis totals. The fold is a plain commutative sum, so only last-bit
/// rounding depends on triangle order.
pub fn integrate(
    flow: &FlowState,
    geometry: &[TriangleGeometry],
    pressures: &[PanelPressure],
) -> ForceReport {
    debug_assert_eq!(geometry.len(), pressures.len());

    let forces: Vec<DVec3> = geometry
        .iter()
        .zip(pressures)
        .map(|(geo, panel)| panel.pressure * geo.area * geo.normal)
        .collect();

    let total = forces.iter().copied().fold(DVec3::ZERO, |acc, f| acc + f);
    let normalizer = flow.dynamic_pressure * flow.conditions.reference_area;

    ForceReport {
        forces,
        total,
        drag_coefficient: (total.x / normalizer).abs(),
        lift_coefficient: (total.y / normalizer).abs(),
        side_force_coefficient: (total.z / normalizer).abs(),
    }
}
