//! Escape velocity: v = √(2GM / R).

use crate::constants::ConstantsTable;
use crate::groups::planet::PlanetBody;
use crate::inputs::InputRecord;
use celestial_core::constants::SPEED_OF_SOUND_M_S;
use celestial_core::math::sqrt;
use celestial_core::AstroResult;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const OPERATION: &str = "escape_velocity";

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EscapeVelocityOutput {
    pub km_per_s: f64,
    /// Relative to 343 m/s.
    pub mach: f64,
}

/// # Errors
///
/// `DivisionByZero` for a non-positive planet radius, `InvalidInput` for a
/// negative planet mass.
pub fn compute(
    inputs: &InputRecord,
    constants: &ConstantsTable,
) -> AstroResult<EscapeVelocityOutput> {
    let body = PlanetBody::from_inputs(OPERATION, inputs, constants)?;
    let v = sqrt(2.0 * constants.g * body.mass_kg / body.radius_m);

    Ok(EscapeVelocityOutput {
        km_per_s: v / 1000.0,
        mach: v / SPEED_OF_SOUND_M_S,
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
    fn earth_escape_velocity() {
        let out = compute(&inputs(1.0, 1.0), &ConstantsTable::standard()).unwrap();
        assert_abs_eq(out.km_per_s, 11.2, 0.3, "km/s");
        assert_relative_eq(out.mach, out.km_per_s * 1000.0 / 343.0, 1e-12, "mach");
    }

    #[test]
    fn scales_with_root_of_mass_over_radius() {
        let k = ConstantsTable::standard();
        let earth = compute(&inputs(1.0, 1.0), &k).unwrap();
        let dense = compute(&inputs(1.0, 4.0), &k).unwrap();
        assert_relative_eq(dense.km_per_s, 2.0 * earth.km_per_s, 1e-12, "mass");
        let puffy = compute(&inputs(4.0, 1.0), &k).unwrap();
        assert_relative_eq(puffy.km_per_s, 0.5 * earth.km_per_s, 1e-12, "radius");
    }

    #[test]
    fn massless_body_has_zero_escape_velocity() {
        let out = compute(&inputs(1.0, 0.0), &ConstantsTable::standard()).unwrap();
        assert_eq!(out.km_per_s, 0.0);
    }

    #[test]
    fn degenerate_bodies_fail() {
        let k = ConstantsTable::standard();
        let err = compute(&inputs(0.0, 1.0), &k).unwrap_err();
        assert_eq!(err.kind(), Some(MathErrorKind::DivisionByZero));
        let err = compute(&inputs(-2.0, 1.0), &k).unwrap_err();
        assert_eq!(err.kind(), Some(MathErrorKind::DivisionByZero));
        let err = compute(&inputs(1.0, -1.0), &k).unwrap_err();
        assert_eq!(err.kind(), Some(MathErrorKind::InvalidInput));
    }
}
