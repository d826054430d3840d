//! Radial-velocity Doppler shift: Δλ/λ = v_r / c.
//!
//! Non-relativistic and unclamped. A radial velocity above `c` yields a
//! fractional shift above one rather than an error.

use crate::constants::ConstantsTable;
use crate::inputs::InputRecord;
use celestial_core::AstroResult;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DopplerOutput {
    pub wavelength_shift_nm: f64,
    /// Δλ/λ in parts per million.
    pub shift_ratio_ppm: f64,
}

pub fn compute(inputs: &InputRecord, constants: &ConstantsTable) -> AstroResult<DopplerOutput> {
    let vr_over_c = inputs.radial_velocity / constants.c;
    let shift_m = vr_over_c * (inputs.rest_wavelength * 1e-9);

    Ok(DopplerOutput {
        wavelength_shift_nm: shift_m * 1e9,
        shift_ratio_ppm: vr_over_c * 1e6,
    })
}
