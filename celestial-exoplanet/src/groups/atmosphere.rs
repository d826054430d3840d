//! Isothermal atmosphere: scale height H = k_B T / (μ m_H g) and the
//! pressure ratio at 10 km, P(10 km) / P₀ = exp(-10 km / H).
//!
//! Consumes the surface-gravity output directly. When surface gravity failed,
//! the engine skips this group and records the upstream error as its result.

use crate::constants::ConstantsTable;
use crate::groups::surface_gravity::SurfaceGravityOutput;
use crate::inputs::InputRecord;
use celestial_core::math::{exp, require_positive};
use celestial_core::{AstroResult, MathErrorKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const OPERATION: &str = "atmosphere";

const REFERENCE_ALTITUDE_M: f64 = 10_000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AtmosphereOutput {
    pub scale_height_km: f64,
    /// Fraction of surface pressure remaining at 10 km.
    pub pressure_10km: f64,
}

/// # Errors
///
/// `DivisionByZero` when `g <= 0`; `InvalidInput` for a non-positive
/// molecular mass. A negative temperature is evaluated as given and yields a
/// negative scale height.
pub fn compute(
    inputs: &InputRecord,
    constants: &ConstantsTable,
    gravity: &SurfaceGravityOutput,
) -> AstroResult<AtmosphereOutput> {
    let g = require_positive(
        OPERATION,
        "surface gravity",
        gravity.g_ms,
        MathErrorKind::DivisionByZero,
    )?;
    let molecular_mass = require_positive(
        OPERATION,
        "molecular mass",
        inputs.molecular_mass,
        MathErrorKind::InvalidInput,
    )?;

    let particle_mass = molecular_mass * constants.m_h;
    let scale_height = constants.k_b * inputs.atmosphere_temp / (particle_mass * g);

    Ok(AtmosphereOutput {
        scale_height_km: scale_height / 1000.0,
        pressure_10km: exp(-REFERENCE_ALTITUDE_M / scale_height),
    })
}
