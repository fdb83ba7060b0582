use glam::DVec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Free-stream conditions as read from the run configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowConditions {
    /// Free-stream Mach number.
    pub mach: f64,
    /// Ratio of specific heats.
    pub gamma: f64,
    /// Free-stream static pressure (Pa).
    pub pressure: f64,
    /// Free-stream static temperature (K).
    pub temperature: f64,
    /// Specific gas constant (J/(kg K)).
    pub gas_constant: f64,
    /// Reference cross-sectional area for force coefficients (m^2).
    pub reference_area: f64,
}

impl Default for FlowConditions {
    fn default() -> Self {
        // Mach 8 air at roughly 30 km standard-atmosphere conditions.
        Self {
            mach: 8.0,
            gamma: 1.4,
            pressure: 1197.0,
            temperature: 226.5,
            gas_constant: 287.05,
            reference_area: 1.0,
        }
    }
}

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("free-stream Mach number must be positive, got {0}")]
    InvalidMach(f64),
    #[error("ratio of specific heats must exceed 1, got {0}")]
    InvalidGamma(f64),
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
}

/// Validated free-stream state with the run constants derived once.
///
/// The velocity vector points from the body toward the oncoming flow, along
/// +x by convention, so a panel facing the flow head-on has its outward
/// normal aligned with `velocity`. Force totals are reported per axis:
/// x = drag, y = lift, z = side force.
#[derive(Debug, Clone)]
pub struct FlowState {
    pub conditions: FlowConditions,
    pub velocity: DVec3,
    /// Stagnation-point pressure coefficient of the modified Newtonian model.
    pub cp_max: f64,
    /// 0.5 * gamma * p_inf * M^2, the Cp and coefficient normalizer.
    pub dynamic_pressure: f64,
}

impl FlowState {
    pub fn new(conditions: FlowConditions) -> Result<Self, FlowError> {
        if conditions.mach <= 0.0 {
            return Err(FlowError::InvalidMach(conditions.mach));
        }
        if conditions.gamma <= 1.0 {
            return Err(FlowError::InvalidGamma(conditions.gamma));
        }
        for (name, value) in [
            ("static pressure", conditions.pressure),
            ("static temperature", conditions.temperature),
            ("gas constant", conditions.gas_constant),
            ("reference area", conditions.reference_area),
        ] {
            if value <= 0.0 {
                return Err(FlowError::NonPositive { name, value });
            }
        }

        let speed_of_sound =
            (conditions.gamma * conditions.gas_constant * conditions.temperature).sqrt();
        let speed = conditions.mach * speed_of_sound;
        let cp_max = max_pressure_coefficient(conditions.mach, conditions.gamma);
        let dynamic_pressure =
            0.5 * conditions.gamma * conditions.pressure * conditions.mach * conditions.mach;

        Ok(Self {
            conditions,
            velocity: DVec3::X * speed,
            cp_max,
            dynamic_pressure,
        })
    }

    /// Re-aim the free stream, keeping its magnitude. Used by tests and for
    /// bodies meshed along an axis other than x.
    pub fn with_velocity_direction(mut self, direction: DVec3) -> Self {
        debug_assert!(
            direction.length_squared() > 0.0,
            "free-stream direction must be a non-zero vector"
        );
        self.velocity = direction.normalize() * self.velocity.length();
        self
    }
}

/// Stagnation pressure coefficient behind a normal shock, the closed-form
/// modified Newtonian ceiling.
fn max_pressure_coefficient(mach: f64, gamma: f64) -> f64 {
    let m2 = mach * mach;
    let ratio = ((gamma + 1.0).powi(2) * m2) / (4.0 * gamma * m2 - 2.0 * (gamma - 1.0));
    let bracket = (1.0 - gamma + 2.0 * gamma * m2) / (gamma + 1.0);
    (2.0 / (gamma * m2)) * (ratio.powf(gamma / (gamma - 1.0)) * bracket - 1.0)
}
