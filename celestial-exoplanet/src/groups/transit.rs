//! Transit depth: ΔF/F = (R_p / R_s)².

use crate::constants::ConstantsTable;
use crate::inputs::InputRecord;
use celestial_core::math::{checked_div, require_non_negative};
use celestial_core::AstroResult;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const OPERATION: &str = "transit";

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TransitOutput {
    /// R_p / R_s, dimensionless.
    pub radius_ratio: f64,
    pub transit_depth_ppm: f64,
}

/// # Errors
///
/// `DivisionByZero` when `stellar_radius <= 0`, `InvalidInput` when
/// `planet_radius < 0`.
pub fn compute(inputs: &InputRecord, constants: &ConstantsTable) -> AstroResult<TransitOutput> {
    let radius_ratio = checked_div(
        OPERATION,
        "stellar radius",
        inputs.planet_radius * constants.r_earth,
        inputs.stellar_radius * constants.r_sun,
    )?;
    require_non_negative(OPERATION, "planet radius", inputs.planet_radius)?;

    Ok(TransitOutput {
        radius_ratio,
        transit_depth_ppm: radius_ratio * radius_ratio * 1e6,
    })
}
