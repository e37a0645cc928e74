//! Simulation tunables
//!
//! Every constant the passes use lives here instead of being baked into
//! the pass functions, so a run is reproducible per config and tests can
//! dial individual stages up or down.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Replacement seed when a config asks for 0 (xorshift32 never leaves 0)
pub const FALLBACK_SEED: u32 = 12345;

const MAX_PASSES: u32 = 64;
const MAX_RADIUS: i32 = 8;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Seed for the flow and pressure random streams
    pub seed: u32,
    /// Per-unit vertical velocity gained each step
    pub gravity: f32,
    /// Velocity damping factor applied each step, in (0, 1]
    pub friction: f32,
    /// Per-axis clamp on per-unit speed (cells per step)
    pub max_speed: f32,
    /// Divisor applied to a displacement whose midpoint is solid
    pub wall_slowdown: i32,
    /// (pressure -> viscosity) repeats per simulate()
    pub relax_iterations: u32,
    /// Outer passes per pressure resolution
    pub pressure_passes: u32,
    /// Candidate offsets a cell draws per pass before giving up
    pub pressure_attempts: u32,
    /// Max reach of a pressure offset, in cells
    pub pressure_radius: i32,
    /// Fraction of the source's per-unit velocity carried by a moved unit
    pub momentum_transfer: f32,
    /// Push added to the destination per unit of offset direction
    pub pressure_push: f32,
    /// Square neighbourhood radius of the viscosity diffuser
    pub viscosity_radius: i32,
    /// 0 = keep own velocity, 1 = take the neighbourhood average
    pub viscosity: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            gravity: 0.1,
            friction: 0.99,
            max_speed: 8.0,
            wall_slowdown: 2,
            relax_iterations: 2,
            pressure_passes: 6,
            pressure_attempts: 8,
            pressure_radius: 2,
            momentum_transfer: 1.0,
            pressure_push: 0.5,
            viscosity_radius: 1,
            viscosity: 1.0,
        }
    }
}

impl SimConfig {
    /// Parse a (possibly partial) JSON document; missing fields keep defaults.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        // Plain numeric struct, serialization cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Seed actually fed to the generators
    pub fn effective_seed(&self) -> u32 {
        if self.seed == 0 {
            FALLBACK_SEED
        } else {
            self.seed
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        finite("gravity", self.gravity)?;
        finite("pressure_push", self.pressure_push)?;

        if !(self.friction > 0.0 && self.friction <= 1.0) {
            return Err(EngineError::invalid("friction", format!("{} not in (0, 1]", self.friction)));
        }
        if !(self.max_speed > 0.0) || !self.max_speed.is_finite() {
            return Err(EngineError::invalid("max_speed", format!("{} must be positive", self.max_speed)));
        }
        if self.wall_slowdown < 1 {
            return Err(EngineError::invalid("wall_slowdown", "must be >= 1"));
        }
        if self.relax_iterations > MAX_PASSES {
            return Err(EngineError::invalid("relax_iterations", format!("must be <= {}", MAX_PASSES)));
        }
        if self.pressure_passes > MAX_PASSES {
            return Err(EngineError::invalid("pressure_passes", format!("must be <= {}", MAX_PASSES)));
        }
        if self.pressure_attempts == 0 || self.pressure_attempts > MAX_PASSES {
            return Err(EngineError::invalid("pressure_attempts", format!("must be in 1..={}", MAX_PASSES)));
        }
        if !(1..=MAX_RADIUS).contains(&self.pressure_radius) {
            return Err(EngineError::invalid("pressure_radius", format!("must be in 1..={}", MAX_RADIUS)));
        }
        if !(1..=MAX_RADIUS).contains(&self.viscosity_radius) {
            return Err(EngineError::invalid("viscosity_radius", format!("must be in 1..={}", MAX_RADIUS)));
        }
        unit_range("momentum_transfer", self.momentum_transfer)?;
        unit_range("viscosity", self.viscosity)?;
        Ok(())
    }
}

fn finite(field: &'static str, v: f32) -> Result<(), EngineError> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(EngineError::invalid(field, "must be finite"))
    }
}

fn unit_range(field: &'static str, v: f32) -> Result<(), EngineError> {
    if (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        Err(EngineError::invalid(field, format!("{} not in [0, 1]", v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = SimConfig::from_json(r#"{ "gravity": 0.25, "pressure_passes": 3 }"#).unwrap();
        assert_eq!(cfg.gravity, 0.25);
        assert_eq!(cfg.pressure_passes, 3);
        assert_eq!(cfg.friction, SimConfig::default().friction);
    }

    #[test]
    fn rejects_out_of_range_friction() {
        let err = SimConfig::from_json(r#"{ "friction": 1.5 }"#).unwrap_err();
        match err {
            EngineError::InvalidConfig { field, .. } => assert_eq!(field, "friction"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            SimConfig::from_json("{ not json"),
            Err(EngineError::ConfigParse(_))
        ));
    }

    #[test]
    fn zero_seed_is_remapped() {
        let cfg = SimConfig { seed: 0, ..SimConfig::default() };
        assert_eq!(cfg.effective_seed(), FALLBACK_SEED);
    }

    #[test]
    fn json_survives_a_trip() {
        let cfg = SimConfig { viscosity: 0.5, ..SimConfig::default() };
        assert_eq!(SimConfig::from_json(&cfg.to_json()).unwrap(), cfg);
    }
}
