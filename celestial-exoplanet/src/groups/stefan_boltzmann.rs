//! Stellar luminosity from radius and effective temperature: L = 4πR²σT⁴.

use crate::constants::ConstantsTable;
use crate::inputs::InputRecord;
use celestial_core::constants::PI;
use celestial_core::math::require_non_negative;
use celestial_core::AstroResult;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const OPERATION: &str = "stefan_boltzmann";

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StefanBoltzmannOutput {
    pub luminosity_watts: f64,
    /// In units of L_sun.
    pub luminosity_solar: f64,
}

/// # Errors
///
/// `InvalidInput` for a negative stellar radius or temperature.
pub fn compute(
    inputs: &InputRecord,
    constants: &ConstantsTable,
) -> AstroResult<StefanBoltzmannOutput> {
    let radius = require_non_negative(OPERATION, "stellar radius", inputs.stellar_radius)?;
    let temperature =
        require_non_negative(OPERATION, "stellar temperature", inputs.stellar_temperature)?;

    let r = radius * constants.r_sun;
    let luminosity_watts = 4.0 * PI * r * r * constants.sigma * temperature.powi(4);

    Ok(StefanBoltzmannOutput {
        luminosity_watts,
        luminosity_solar: luminosity_watts / constants.l_sun,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_core::test_helpers::{assert_abs_eq, assert_relative_eq};
    use celestial_core::MathErrorKind;

    fn inputs(stellar_radius: f64, stellar_temperature: f64) -> InputRecord {
        InputRecord {
            stellar_radius,
            stellar_temperature,
            ..InputRecord::sample()
        }
    }

    #[test]
    fn the_sun_is_one_solar_luminosity() {
        let out = compute(&inputs(1.0, 5778.0), &ConstantsTable::standard()).unwrap();
        assert_abs_eq(out.luminosity_solar, 1.0, 0.02, "L/L_sun");
        assert!(out.luminosity_watts > 3.7e26 && out.luminosity_watts < 3.9e26);
    }

    #[test]
    fn doubling_temperature_multiplies_by_sixteen() {
        let k = ConstantsTable::standard();
        let cool = compute(&inputs(1.0, 3000.0), &k).unwrap();
        let hot = compute(&inputs(1.0, 6000.0), &k).unwrap();
        assert_relative_eq(hot.luminosity_watts, 16.0 * cool.luminosity_watts, 1e-12, "T^4");
    }

    #[test]
    fn doubling_radius_multiplies_by_four() {
        let k = ConstantsTable::standard();
        let small = compute(&inputs(1.0, 5000.0), &k).unwrap();
        let big = compute(&inputs(2.0, 5000.0), &k).unwrap();
        assert_relative_eq(big.luminosity_watts, 4.0 * small.luminosity_watts, 1e-12, "R^2");
    }

    #[test]
    fn zero_radius_or_temperature_is_dark() {
        let k = ConstantsTable::standard();
        assert_eq!(compute(&inputs(0.0, 5778.0), &k).unwrap().luminosity_watts, 0.0);
        assert_eq!(compute(&inputs(1.0, 0.0), &k).unwrap().luminosity_watts, 0.0);
    }

    #[test]
    fn negative_inputs_are_invalid() {
        let k = ConstantsTable::standard();
        let err = compute(&inputs(-1.0, 5778.0), &k).unwrap_err();
        assert_eq!(err.kind(), Some(MathErrorKind::InvalidInput));
        let err = compute(&inputs(1.0, -5778.0), &k).unwrap_err();
        assert_eq!(err.kind(), Some(MathErrorKind::InvalidInput));
    }
}
