//! Conservative habitable-zone bounds from stellar luminosity.
//!
//! Inner edge `√(L / 1.1 L☉) × 0.95` AU, outer edge `√(L / 0.53 L☉) × 1.37` AU.
//! `L` is the caller-supplied `stellar_luminosity`, not the Stefan–Boltzmann
//! result; the two can disagree within one result record.
//!
//! The in-zone test needs the Kepler orbital distance. Without it the bounds
//! are still reported and `in_hz` is `false`.

use crate::constants::ConstantsTable;
use crate::groups::kepler::KeplerOutput;
use crate::inputs::InputRecord;
use celestial_core::math::checked_sqrt;
use celestial_core::AstroResult;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const OPERATION: &str = "habitable_zone";

const INNER_FLUX: f64 = 1.1;
const INNER_SCALE: f64 = 0.95;
const OUTER_FLUX: f64 = 0.53;
const OUTER_SCALE: f64 = 1.37;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HabitableZoneOutput {
    /// AU.
    pub inner: f64,
    /// AU.
    pub outer: f64,
    /// Orbit lies in `[inner, outer]`. `false` when the orbit is unknown.
    #[cfg_attr(feature = "serde", serde(rename = "inHZ"))]
    pub in_hz: bool,
    pub width: f64,
}

impl HabitableZoneOutput {
    /// Closed-interval membership test.
    pub fn contains(&self, distance_au: f64) -> bool {
        distance_au >= self.inner && distance_au <= self.outer
    }
}

/// # Errors
///
/// `DomainError` for a negative stellar luminosity.
pub fn compute(
    inputs: &InputRecord,
    constants: &ConstantsTable,
    kepler: Option<&KeplerOutput>,
) -> AstroResult<HabitableZoneOutput> {
    let lum_star = inputs.stellar_luminosity * constants.l_sun;
    let inner = checked_sqrt(OPERATION, lum_star / (INNER_FLUX * constants.l_sun))? * INNER_SCALE;
    let outer = checked_sqrt(OPERATION, lum_star / (OUTER_FLUX * constants.l_sun))? * OUTER_SCALE;

    let mut zone = HabitableZoneOutput {
        inner,
        outer,
        in_hz: false,
        width: outer - inner,
    };
    zone.in_hz = kepler.is_some_and(|k| zone.contains(k.orbital_distance_au));
    Ok(zone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_core::test_helpers::assert_abs_eq;
    use celestial_core::MathErrorKind;

    fn inputs(stellar_luminosity: f64) -> InputRecord {
        InputRecord {
            stellar_luminosity,
            ..InputRecord::sample()
        }
    }

    fn orbit(orbital_distance_au: f64) -> KeplerOutput {
        KeplerOutput {
            orbital_distance_au,
            total_mass: 1.989e30,
        }
    }

    #[test]
    fn solar_zone_bounds() {
        let out = compute(&inputs(1.0), &ConstantsTable::standard(), Some(&orbit(1.0))).unwrap();
        assert_abs_eq(out.inner, 0.9058, 1e-4, "inner");
        assert_abs_eq(out.outer, 1.8818, 1e-4, "outer");
        assert_abs_eq(out.width, out.outer - out.inner, 0.0, "width");
        assert!(out.in_hz);
    }

    #[test]
    fn zone_scales_with_square_root_of_luminosity() {
        let k = ConstantsTable::standard();
        let sun = compute(&inputs(1.0), &k, None).unwrap();
        let bright = compute(&inputs(4.0), &k, None).unwrap();
        assert_abs_eq(bright.inner, 2.0 * sun.inner, 1e-12, "inner");
        assert_abs_eq(bright.outer, 2.0 * sun.outer, 1e-12, "outer");
    }

    #[test]
    fn orbits_outside_the_zone() {
        let k = ConstantsTable::standard();
        assert!(!compute(&inputs(1.0), &k, Some(&orbit(0.39))).unwrap().in_hz);
        assert!(!compute(&inputs(1.0), &k, Some(&orbit(5.2))).unwrap().in_hz);
    }

    #[test]
    fn boundaries_count_as_inside() {
        let k = ConstantsTable::standard();
        let zone = compute(&inputs(1.0), &k, None).unwrap();
        assert!(compute(&inputs(1.0), &k, Some(&orbit(zone.inner))).unwrap().in_hz);
        assert!(compute(&inputs(1.0), &k, Some(&orbit(zone.outer))).unwrap().in_hz);
        let below = f64::from_bits(zone.inner.to_bits() - 1);
        assert!(!compute(&inputs(1.0), &k, Some(&orbit(below))).unwrap().in_hz);
    }

    #[test]
    fn missing_orbit_is_reported_as_outside() {
        let out = compute(&inputs(1.0), &ConstantsTable::standard(), None).unwrap();
        assert!(!out.in_hz);
        assert!(out.inner > 0.0 && out.outer > out.inner);
    }

    #[test]
    fn negative_luminosity_is_a_domain_error() {
        let err = compute(&inputs(-1.0), &ConstantsTable::standard(), None).unwrap_err();
        assert_eq!(err.kind(), Some(MathErrorKind::DomainError));
    }

    #[test]
    fn dark_star_has_degenerate_zone() {
        let out = compute(&inputs(0.0), &ConstantsTable::standard(), Some(&orbit(0.0))).unwrap();
        assert_eq!(out.inner, 0.0);
        assert_eq!(out.outer, 0.0);
        assert!(out.in_hz);
    }
}
