//! Surface gravity: g = GM / R².

use crate::constants::ConstantsTable;
use crate::groups::planet::PlanetBody;
use crate::inputs::InputRecord;
use celestial_core::constants::STANDARD_GRAVITY;
use celestial_core::AstroResult;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const OPERATION: &str = "surface_gravity";

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SurfaceGravityOutput {
    /// m/s².
    #[cfg_attr(feature = "serde", serde(rename = "gMS"))]
    pub g_ms: f64,
    /// In units of 9.81 m/s².
    pub relative_g_earth: f64,
}

/// # Errors
///
/// Same conditions as [`escape_velocity::compute`](super::escape_velocity::compute).
pub fn compute(
    inputs: &InputRecord,
    constants: &ConstantsTable,
) -> AstroResult<SurfaceGravityOutput> {
    let body = PlanetBody::from_inputs(OPERATION, inputs, constants)?;
    let g = constants.g * body.mass_kg / (body.radius_m * body.radius_m);

    Ok(SurfaceGravityOutput {
        g_ms: g,
        relative_g_earth: g / STANDARD_GRAVITY,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_core::test_helpers::{assert_abs_eq, assert_relative_eq};
    use celestial_core::MathErrorKind;

    fn inputs(planet_radius: f64, planet_mass: f64) -> InputRecord {
        InputRecord {
            planet_radius,
            planet_mass,
            ..InputRecord::sample()
        }
    }

    #[test]
    fn earth_surface_gravity() {
        let out = compute(&inputs(1.0, 1.0), &ConstantsTable::standard()).unwrap();
        assert_abs_eq(out.relative_g_earth, 1.0, 0.02, "g/g0");
        assert_abs_eq(out.g_ms, 9.82, 0.01, "g");
    }

    #[test]
    fn inverse_square_in_radius() {
        let k = ConstantsTable::standard();
        let earth = compute(&inputs(1.0, 1.0), &k).unwrap();
        let wide = compute(&inputs(2.0, 1.0), &k).unwrap();
        assert_relative_eq(wide.g_ms, earth.g_ms / 4.0, 1e-12, "g");
    }

    #[test]
    fn shares_failure_conditions_with_escape_velocity() {
        let k = ConstantsTable::standard();
        let err = compute(&inputs(0.0, 1.0), &k).unwrap_err();
        assert_eq!(err.kind(), Some(MathErrorKind::DivisionByZero));
        let err = compute(&inputs(1.0, -0.5), &k).unwrap_err();
        assert_eq!(err.kind(), Some(MathErrorKind::InvalidInput));
    }
}
