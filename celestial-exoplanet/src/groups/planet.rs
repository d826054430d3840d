//! Planet radius and mass in SI, shared by the escape-velocity and
//! surface-gravity groups so both fail under the same conditions.

use crate::constants::ConstantsTable;
use crate::inputs::InputRecord;
use celestial_core::math::{require_non_negative, require_positive};
use celestial_core::{AstroResult, MathErrorKind};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PlanetBody {
    pub radius_m: f64,
    pub mass_kg: f64,
}

impl PlanetBody {
    /// `DivisionByZero` for a non-positive radius, then `InvalidInput` for a negative mass.
    pub fn from_inputs(
        operation: &str,
        inputs: &InputRecord,
        constants: &ConstantsTable,
    ) -> AstroResult<Self> {
        let radius_m = require_positive(
            operation,
            "planet radius",
            inputs.planet_radius * constants.r_earth,
            MathErrorKind::DivisionByZero,
        )?;
        let mass_kg = require_non_negative(
            operation,
            "planet mass",
            inputs.planet_mass * constants.m_earth,
        )?;
        Ok(Self { radius_m, mass_kg })
    }
}
