//! Kepler's third law: a³ = G (M* + M_p) P² / 4π².

use crate::constants::ConstantsTable;
use crate::inputs::InputRecord;
use celestial_core::constants::{PI, SECONDS_PER_DAY_F64};
use celestial_core::math::{cbrt, require_non_negative, require_positive};
use celestial_core::{AstroResult, MathErrorKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const OPERATION: &str = "kepler";

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct KeplerOutput {
    /// Semi-major axis, AU.
    #[cfg_attr(feature = "serde", serde(rename = "orbitalDistanceAU"))]
    pub orbital_distance_au: f64,
    /// Star plus planet, kg.
    pub total_mass: f64,
}

impl KeplerOutput {
    pub fn total_mass_solar(&self, constants: &ConstantsTable) -> f64 {
        self.total_mass / constants.m_sun
    }
}

/// # Errors
///
/// `InvalidInput` when the combined mass is not positive or the period is negative.
pub fn compute(inputs: &InputRecord, constants: &ConstantsTable) -> AstroResult<KeplerOutput> {
    let total_mass = require_positive(
        OPERATION,
        "total mass",
        inputs.stellar_mass * constants.m_sun + inputs.planet_mass * constants.m_earth,
        MathErrorKind::InvalidInput,
    )?;
    let period_days = require_non_negative(OPERATION, "orbital period", inputs.orbital_period)?;

    let period_s = period_days * SECONDS_PER_DAY_F64;
    let a_cubed = constants.g * total_mass * period_s * period_s / (4.0 * PI * PI);

    Ok(KeplerOutput {
        orbital_distance_au: cbrt(a_cubed) / constants.au,
        total_mass,
    })
}
