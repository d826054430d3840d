//! The constants table the formula groups evaluate against.
//!
//! A [`ConstantsTable`] is a plain value: build it once (usually with
//! [`ConstantsTable::standard`]), hand it to a
//! [`DerivationEngine`](crate::engine::DerivationEngine), and never mutate it.
//! There is no process-wide table.

use celestial_core::constants::{
    AU_M, BOLTZMANN, EARTH_MASS_KG, EARTH_RADIUS_M, GRAVITATIONAL_CONSTANT, HYDROGEN_MASS_KG,
    SOLAR_LUMINOSITY_W, SOLAR_MASS_KG, SOLAR_RADIUS_M, SPEED_OF_LIGHT_M_S, STEFAN_BOLTZMANN,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Eleven physical constants, all SI.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConstantsTable {
    /// Gravitational constant, m³ kg⁻¹ s⁻².
    #[cfg_attr(feature = "serde", serde(rename = "G"))]
    pub g: f64,
    /// Speed of light, m/s.
    pub c: f64,
    /// Stefan–Boltzmann constant, W m⁻² K⁻⁴.
    pub sigma: f64,
    /// Astronomical unit, m.
    #[cfg_attr(feature = "serde", serde(rename = "AU"))]
    pub au: f64,
    #[cfg_attr(feature = "serde", serde(rename = "R_sun"))]
    pub r_sun: f64,
    #[cfg_attr(feature = "serde", serde(rename = "M_sun"))]
    pub m_sun: f64,
    #[cfg_attr(feature = "serde", serde(rename = "R_earth"))]
    pub r_earth: f64,
    #[cfg_attr(feature = "serde", serde(rename = "M_earth"))]
    pub m_earth: f64,
    #[cfg_attr(feature = "serde", serde(rename = "L_sun"))]
    pub l_sun: f64,
    /// Boltzmann constant, J/K.
    #[cfg_attr(feature = "serde", serde(rename = "k_B"))]
    pub k_b: f64,
    /// Hydrogen atom mass, kg.
    #[cfg_attr(feature = "serde", serde(rename = "m_H"))]
    pub m_h: f64,
}

impl ConstantsTable {
    /// The table every calculator in this crate is calibrated against.
    pub const fn standard() -> Self {
        Self {
            g: GRAVITATIONAL_CONSTANT,
            c: SPEED_OF_LIGHT_M_S,
            sigma: STEFAN_BOLTZMANN,
            au: AU_M,
            r_sun: SOLAR_RADIUS_M,
            m_sun: SOLAR_MASS_KG,
            r_earth: EARTH_RADIUS_M,
            m_earth: EARTH_MASS_KG,
            l_sun: SOLAR_LUMINOSITY_W,
            k_b: BOLTZMANN,
            m_h: HYDROGEN_MASS_KG,
        }
    }

    /// `(name, value)` pairs in declaration order, for listings.
    pub fn entries(&self) -> [(&'static str, f64); 11] {
        [
            ("G", self.g),
            ("c", self.c),
            ("sigma", self.sigma),
            ("AU", self.au),
            ("R_sun", self.r_sun),
            ("M_sun", self.m_sun),
            ("R_earth", self.r_earth),
            ("M_earth", self.m_earth),
            ("L_sun", self.l_sun),
            ("k_B", self.k_b),
            ("m_H", self.m_h),
        ]
    }
}

impl Default for ConstantsTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Partial set of constants, merged onto [`ConstantsTable::standard`] by scenario files.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct ConstantsOverrides {
    #[cfg_attr(feature = "serde", serde(rename = "G"))]
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub g: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub c: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub sigma: Option<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "AU"))]
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub au: Option<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "R_sun"))]
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub r_sun: Option<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "M_sun"))]
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub m_sun: Option<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "R_earth"))]
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub r_earth: Option<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "M_earth"))]
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub m_earth: Option<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "L_sun"))]
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub l_sun: Option<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "k_B"))]
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub k_b: Option<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "m_H"))]
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub m_h: Option<f64>,
}

impl ConstantsOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(&self, base: ConstantsTable) -> ConstantsTable {
        ConstantsTable {
            g: self.g.unwrap_or(base.g),
            c: self.c.unwrap_or(base.c),
            sigma: self.sigma.unwrap_or(base.sigma),
            au: self.au.unwrap_or(base.au),
            r_sun: self.r_sun.unwrap_or(base.r_sun),
            m_sun: self.m_sun.unwrap_or(base.m_sun),
            r_earth: self.r_earth.unwrap_or(base.r_earth),
            m_earth: self.m_earth.unwrap_or(base.m_earth),
            l_sun: self.l_sun.unwrap_or(base.l_sun),
            k_b: self.k_b.unwrap_or(base.k_b),
            m_h: self.m_h.unwrap_or(base.m_h),
        }
    }
}
