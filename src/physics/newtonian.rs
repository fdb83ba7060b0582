use glam::DVec3;

use crate::discretization::geometry::TriangleGeometry;

use super::flow::FlowState;

/// Pressure solution on a single panel.
#[derive(Clone, Copy, Debug)]
pub struct PanelPressure {
    /// Angle between the outward normal and the free-stream vector (degrees).
    pub theta_deg: f64,
    pub cp: f64,
    /// Surface static pressure (Pa).
    pub pressure: f64,
}

impl PanelPressure {
    pub fn is_shadowed(&self) -> bool {
        self.theta_deg >= 90.0
    }
}

/// Angle between the unit outward normal and the free stream, in degrees.
/// The cosine is clamped so floating-point drift can never push `acos` out
/// of its domain.
pub fn deflection_angle_deg(normal: DVec3, velocity: DVec3) -> f64 {
    let cos_theta = (normal.dot(velocity) / velocity.length()).clamp(-1.0, 1.0);
    cos_theta.acos().to_degrees()
}

/// Modified Newtonian pressure on one panel.
///
/// A panel inclined at theta < 90 deg sees `Cp = Cp_max * sin^2(phi)` where
/// phi = 90 deg - theta is the angle between the surface plane and the flow.
/// At theta >= 90 deg (theta == 90 included) the panel is shadowed: Cp = 0,
/// which by definition of the pressure coefficient puts the surface at
/// free-stream static pressure.
pub fn panel_pressure(flow: &FlowState, normal: DVec3) -> PanelPressure {
    let theta_deg = deflection_angle_deg(normal, flow.velocity);
    if theta_deg < 90.0 {
        let phi = (90.0 - theta_deg).to_radians();
        let cp = flow.cp_max * phi.sin().powi(2);
        let pressure = flow.dynamic_pressure * cp + flow.conditions.pressure;
        PanelPressure {
            theta_deg,
            cp,
            pressure,
        }
    } else {
        PanelPressure {
            theta_deg,
            cp: 0.0,
            pressure: flow.conditions.pressure,
        }
    }
}

/// Pressure field over the whole surface, one entry per triangle.
pub fn solve_surface(flow: &FlowState, geometry: &[TriangleGeometry]) -> Vec<PanelPressure> {
    geometry
        .iter()
        .map(|geo| panel_pressure(flow, geo.normal))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::flow::FlowConditions;

    fn flow() -> FlowState {
        FlowState::new(FlowConditions::default()).unwrap()
    }

    #[test]
    fn head_on_panel_sees_cp_max() {
        let flow = flow();
        let panel = panel_pressure(&flow, DVec3::X);
        assert!(panel.theta_deg.abs() < 1e-9);
        assert!((panel.cp - flow.cp_max).abs() < 1e-12);
        let expected = flow.dynamic_pressure * flow.cp_max + flow.conditions.pressure;
        assert!((panel.pressure - expected).abs() < 1e-9);
    }

    #[test]
    fn grazing_panel_sits_at_ambient() {
        let flow = flow();
        let panel = panel_pressure(&flow, DVec3::Y);
        assert!((panel.theta_deg - 90.0).abs() < 1e-9);
        assert_eq!(panel.cp, 0.0);
        assert_eq!(panel.pressure, flow.conditions.pressure);
        assert!(panel.is_shadowed());
    }

    #[test]
    fn leeward_panel_sits_at_ambient() {
        let flow = flow();
        let panel = panel_pressure(&flow, -DVec3::X);
        assert!((panel.theta_deg - 180.0).abs() < 1e-9);
        assert_eq!(panel.cp, 0.0);
        assert_eq!(panel.pressure, flow.conditions.pressure);
    }

    #[test]
    fn oblique_panel_follows_sine_squared() {
        let flow = flow();
        // 45 degrees between normal and stream.
        let normal = DVec3::new(1.0, 1.0, 0.0).normalize();
        let panel = panel_pressure(&flow, normal);
        assert!((panel.theta_deg - 45.0).abs() < 1e-9);
        assert!((panel.cp - flow.cp_max * 0.5).abs() < 1e-12);
    }

    #[test]
    fn acos_argument_is_clamped() {
        let flow = flow();
        // A normal very slightly longer than unit length must not yield NaN.
        let normal = DVec3::X * (1.0 + 1e-15);
        let panel = panel_pressure(&flow, normal);
        assert!(panel.theta_deg.is_finite());
        assert!(panel.cp.is_finite());
    }
}
