//! Physical and unit constants in SI.
//!
//! Values match the ones the exoplanet calculators have always been calibrated
//! against. Some are rounded relative to IAU nominal values (`SOLAR_RADIUS_M`,
//! `SOLAR_MASS_KG`, `EARTH_MASS_KG`); downstream scenario checks depend on
//! these exact figures, so do not "upgrade" them in place.

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

/// Newtonian gravitational constant, m³ kg⁻¹ s⁻².
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11;

/// Speed of light in vacuum, m/s (exact).
pub const SPEED_OF_LIGHT_M_S: f64 = 2.99792458e8;

/// Stefan–Boltzmann constant, W m⁻² K⁻⁴.
#[allow(clippy::excessive_precision)]
pub const STEFAN_BOLTZMANN: f64 = 5.670374419e-8;

/// Astronomical Unit in meters.
pub const AU_M: f64 = 1.495978707e11;

pub const SOLAR_RADIUS_M: f64 = 6.96e8;

pub const SOLAR_MASS_KG: f64 = 1.989e30;

/// Nominal solar luminosity, W.
pub const SOLAR_LUMINOSITY_W: f64 = 3.828e26;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6.371e6;

pub const EARTH_MASS_KG: f64 = 5.972e24;

/// Boltzmann constant, J/K (exact).
pub const BOLTZMANN: f64 = 1.380649e-23;

/// Mass of a hydrogen atom, kg.
#[allow(clippy::excessive_precision)]
pub const HYDROGEN_MASS_KG: f64 = 1.6735575e-27;

/// Standard gravity used as the "1 g" reference, m/s².
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Speed of sound in dry air at 20 °C, m/s. Reference for Mach figures.
pub const SPEED_OF_SOUND_M_S: f64 = 343.0;
