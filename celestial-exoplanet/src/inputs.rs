//! The shared input record.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Every quantity the nine formula groups read, in the units the groups expect.
///
/// All fields are required on every evaluation. Two records compare equal
/// when every field is equal, which is what
/// [`MemoizedEngine`](crate::engine::MemoizedEngine) keys on.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct InputRecord {
    /// Line-of-sight stellar velocity, m/s.
    pub radial_velocity: f64,
    /// Rest wavelength of the observed line, nm.
    pub rest_wavelength: f64,
    /// Earth radii.
    pub planet_radius: f64,
    /// Solar radii.
    pub stellar_radius: f64,
    /// Solar masses.
    pub stellar_mass: f64,
    /// Earth masses.
    pub planet_mass: f64,
    /// Days.
    pub orbital_period: f64,
    /// Effective temperature, K.
    pub stellar_temperature: f64,
    pub current_weight: f64,
    /// Model probability; clamped to [0.001, 0.999] before use.
    pub prediction: f64,
    pub human_feedback: bool,
    pub learning_rate: f64,
    /// Atmospheric temperature, K.
    pub atmosphere_temp: f64,
    /// Mean molecular mass in hydrogen masses.
    pub molecular_mass: f64,
    /// Solar luminosities. Read by the habitable-zone group only.
    pub stellar_luminosity: f64,
}

impl InputRecord {
    /// A Sun–Earth-like starting point with a mildly confident prediction.
    ///
    /// Used to seed scenario templates; the engine never falls back to it.
    pub const fn sample() -> Self {
        Self {
            radial_velocity: 10.0,
            rest_wavelength: 550.0,
            planet_radius: 1.1,
            stellar_radius: 1.0,
            stellar_mass: 1.0,
            planet_mass: 1.0,
            orbital_period: 365.25,
            stellar_temperature: 5778.0,
            current_weight: 1.0,
            prediction: 0.7,
            human_feedback: true,
            learning_rate: 0.1,
            atmosphere_temp: 288.0,
            molecular_mass: 29.0,
            stellar_luminosity: 1.0,
        }
    }
}
