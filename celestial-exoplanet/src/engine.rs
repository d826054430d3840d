//! The derivation engine.
//!
//! [`DerivationEngine::derive`] evaluates all nine groups against one input
//! record in [`Group::ALL`] order. Each group's failure stays in that group's
//! slot; the other groups are evaluated regardless. The two dependency edges
//! are explicit arguments:
//!
//! - Habitable zone receives Kepler's output when Kepler succeeded and
//!   `None` otherwise, in which case it reports `in_hz = false`.
//! - Atmosphere receives surface gravity's output; when surface gravity
//!   failed, atmosphere carries the same error.
//!
//! Every call recomputes everything from the record it was given, so the
//! dependent groups can never see a different snapshot than their upstream.
//!
//! # Example
//!
//! ```
//! use celestial_exoplanet::{evaluate, ConstantsTable, InputRecord};
//!
//! let result = evaluate(&InputRecord::sample(), &ConstantsTable::standard());
//! let kepler = result.kepler.unwrap();
//! assert!((kepler.orbital_distance_au - 1.0).abs() < 0.005);
//! assert!(result.habitable_zone.unwrap().in_hz);
//! ```

use crate::constants::ConstantsTable;
use crate::groups::{
    atmosphere, doppler, escape_velocity, feedback_weight, habitable_zone, kepler,
    stefan_boltzmann, surface_gravity, transit, AtmosphereOutput, DopplerOutput,
    EscapeVelocityOutput, FeedbackWeightOutput, Group, HabitableZoneOutput, KeplerOutput,
    StefanBoltzmannOutput, SurfaceGravityOutput, TransitOutput,
};
use crate::inputs::InputRecord;
use celestial_core::{AstroError, AstroResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-group outcomes, errors included.
#[derive(Debug, Clone, PartialEq)]
pub struct Derivation {
    pub doppler: AstroResult<DopplerOutput>,
    pub transit: AstroResult<TransitOutput>,
    pub kepler: AstroResult<KeplerOutput>,
    pub stefan_boltzmann: AstroResult<StefanBoltzmannOutput>,
    pub feedback_weight: AstroResult<FeedbackWeightOutput>,
    pub habitable_zone: AstroResult<HabitableZoneOutput>,
    pub escape_velocity: AstroResult<EscapeVelocityOutput>,
    pub surface_gravity: AstroResult<SurfaceGravityOutput>,
    pub atmosphere: AstroResult<AtmosphereOutput>,
}

impl Derivation {
    /// The error recorded for `group`, if it failed.
    pub fn error(&self, group: Group) -> Option<&AstroError> {
        match group {
            Group::Doppler => self.doppler.as_ref().err(),
            Group::Transit => self.transit.as_ref().err(),
            Group::Kepler => self.kepler.as_ref().err(),
            Group::StefanBoltzmann => self.stefan_boltzmann.as_ref().err(),
            Group::FeedbackWeight => self.feedback_weight.as_ref().err(),
            Group::HabitableZone => self.habitable_zone.as_ref().err(),
            Group::EscapeVelocity => self.escape_velocity.as_ref().err(),
            Group::SurfaceGravity => self.surface_gravity.as_ref().err(),
            Group::Atmosphere => self.atmosphere.as_ref().err(),
        }
    }

    /// Failed groups in evaluation order.
    pub fn failures(&self) -> Vec<(Group, &AstroError)> {
        Group::ALL
            .iter()
            .filter_map(|&group| self.error(group).map(|err| (group, err)))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        Group::ALL.iter().all(|&group| self.error(group).is_none())
    }
}

/// Nine optional group outputs. `None` means the group's failure condition held.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ResultRecord {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub doppler: Option<DopplerOutput>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub transit: Option<TransitOutput>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub kepler: Option<KeplerOutput>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub stefan_boltzmann: Option<StefanBoltzmannOutput>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub feedback_weight: Option<FeedbackWeightOutput>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub habitable_zone: Option<HabitableZoneOutput>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub escape_velocity: Option<EscapeVelocityOutput>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub surface_gravity: Option<SurfaceGravityOutput>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub atmosphere: Option<AtmosphereOutput>,
}

impl ResultRecord {
    pub fn is_present(&self, group: Group) -> bool {
        match group {
            Group::Doppler => self.doppler.is_some(),
            Group::Transit => self.transit.is_some(),
            Group::Kepler => self.kepler.is_some(),
            Group::StefanBoltzmann => self.stefan_boltzmann.is_some(),
            Group::FeedbackWeight => self.feedback_weight.is_some(),
            Group::HabitableZone => self.habitable_zone.is_some(),
            Group::EscapeVelocity => self.escape_velocity.is_some(),
            Group::SurfaceGravity => self.surface_gravity.is_some(),
            Group::Atmosphere => self.atmosphere.is_some(),
        }
    }

    pub fn absent(&self) -> Vec<Group> {
        Group::ALL
            .into_iter()
            .filter(|&group| !self.is_present(group))
            .collect()
    }
}

impl From<&Derivation> for ResultRecord {
    fn from(d: &Derivation) -> Self {
        Self {
            doppler: d.doppler.as_ref().ok().copied(),
            transit: d.transit.as_ref().ok().copied(),
            kepler: d.kepler.as_ref().ok().copied(),
            stefan_boltzmann: d.stefan_boltzmann.as_ref().ok().copied(),
            feedback_weight: d.feedback_weight.as_ref().ok().copied(),
            habitable_zone: d.habitable_zone.as_ref().ok().copied(),
            escape_velocity: d.escape_velocity.as_ref().ok().copied(),
            surface_gravity: d.surface_gravity.as_ref().ok().copied(),
            atmosphere: d.atmosphere.as_ref().ok().copied(),
        }
    }
}

impl From<Derivation> for ResultRecord {
    fn from(d: Derivation) -> Self {
        Self::from(&d)
    }
}

/// Stateless evaluator bound to one constants table.
///
/// Holds no mutable state, so one engine can serve any number of threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DerivationEngine {
    constants: ConstantsTable,
}

impl DerivationEngine {
    pub fn new(constants: ConstantsTable) -> Self {
        Self { constants }
    }

    pub fn constants(&self) -> &ConstantsTable {
        &self.constants
    }

    pub fn derive(&self, inputs: &InputRecord) -> Derivation {
        let k = &self.constants;

        let doppler = log_failure(Group::Doppler, doppler::compute(inputs, k));
        let transit = log_failure(Group::Transit, transit::compute(inputs, k));
        let kepler = log_failure(Group::Kepler, kepler::compute(inputs, k));
        let stefan_boltzmann =
            log_failure(Group::StefanBoltzmann, stefan_boltzmann::compute(inputs, k));
        let feedback_weight =
            log_failure(Group::FeedbackWeight, feedback_weight::compute(inputs, k));
        let habitable_zone = log_failure(
            Group::HabitableZone,
            habitable_zone::compute(inputs, k, kepler.as_ref().ok()),
        );
        let escape_velocity =
            log_failure(Group::EscapeVelocity, escape_velocity::compute(inputs, k));
        let surface_gravity =
            log_failure(Group::SurfaceGravity, surface_gravity::compute(inputs, k));
        let atmosphere = log_failure(
            Group::Atmosphere,
            match &surface_gravity {
                Ok(gravity) => atmosphere::compute(inputs, k, gravity),
                Err(upstream) => Err(upstream.clone()),
            },
        );

        Derivation {
            doppler,
            transit,
            kepler,
            stefan_boltzmann,
            feedback_weight,
            habitable_zone,
            escape_velocity,
            surface_gravity,
            atmosphere,
        }
    }

    pub fn evaluate(&self, inputs: &InputRecord) -> ResultRecord {
        ResultRecord::from(self.derive(inputs))
    }
}

fn log_failure<T>(group: Group, result: AstroResult<T>) -> AstroResult<T> {
    if let Err(err) = &result {
        tracing::debug!(group = group.key(), error = %err, "group evaluation failed");
    }
    result
}

/// Evaluates every group of `inputs` against `constants`.
pub fn evaluate(inputs: &InputRecord, constants: &ConstantsTable) -> ResultRecord {
    DerivationEngine::new(*constants).evaluate(inputs)
}

/// Remembers the last input record and its result.
///
/// Records are compared field by field on their bit patterns, so `0.0` and
/// `-0.0` are different keys and a record containing NaN still hits. The
/// returned record is always identical to a fresh [`DerivationEngine::evaluate`].
#[derive(Debug, Clone, Default)]
pub struct MemoizedEngine {
    engine: DerivationEngine,
    last: Option<(InputRecord, ResultRecord)>,
    hits: u64,
    misses: u64,
}

impl MemoizedEngine {
    pub fn new(engine: DerivationEngine) -> Self {
        Self {
            engine,
            last: None,
            hits: 0,
            misses: 0,
        }
    }

    pub fn engine(&self) -> &DerivationEngine {
        &self.engine
    }

    pub fn evaluate(&mut self, inputs: &InputRecord) -> ResultRecord {
        if let Some((cached_inputs, cached)) = &self.last {
            if same_bits(cached_inputs, inputs) {
                self.hits += 1;
                tracing::trace!(hits = self.hits, "memoized result reused");
                return *cached;
            }
        }

        self.misses += 1;
        tracing::trace!(misses = self.misses, "input record changed, re-deriving");
        let result = self.engine.evaluate(inputs);
        self.last = Some((*inputs, result));
        result
    }

    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// `(hits, misses)` since construction.
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}

fn same_bits(a: &InputRecord, b: &InputRecord) -> bool {
    let floats = |r: &InputRecord| {
        [
            r.radial_velocity,
            r.rest_wavelength,
            r.planet_radius,
            r.stellar_radius,
            r.stellar_mass,
            r.planet_mass,
            r.orbital_period,
            r.stellar_temperature,
            r.current_weight,
            r.prediction,
            r.learning_rate,
            r.atmosphere_temp,
            r.molecular_mass,
            r.stellar_luminosity,
        ]
        .map(f64::to_bits)
    };
    a.human_feedback == b.human_feedback && floats(a) == floats(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_core::MathErrorKind;

    fn engine() -> DerivationEngine {
        DerivationEngine::new(ConstantsTable::standard())
    }

    #[test]
    fn sample_record_is_fully_derived() {
        let d = engine().derive(&InputRecord::sample());
        assert!(d.is_complete());
        assert!(d.failures().is_empty());
        assert!(ResultRecord::from(&d).absent().is_empty());
    }

    #[test]
    fn failure_in_one_group_leaves_others_intact() {
        let inputs = InputRecord {
            stellar_radius: 0.0,
            ..InputRecord::sample()
        };
        let d = engine().derive(&inputs);
        assert_eq!(
            d.error(Group::Transit).and_then(AstroError::kind),
            Some(MathErrorKind::DivisionByZero)
        );
        let result = ResultRecord::from(&d);
        assert_eq!(result.absent(), vec![Group::Transit]);
        // Zero radius is a legal, dark star for Stefan-Boltzmann.
        assert_eq!(result.stefan_boltzmann.unwrap().luminosity_watts, 0.0);
    }

    #[test]
    fn failed_kepler_degrades_habitable_zone() {
        let inputs = InputRecord {
            orbital_period: -10.0,
            ..InputRecord::sample()
        };
        let result = engine().evaluate(&inputs);
        assert!(result.kepler.is_none());
        let zone = result.habitable_zone.unwrap();
        assert!(!zone.in_hz);
        assert!(zone.inner > 0.0);
    }

    #[test]
    fn failed_gravity_propagates_to_atmosphere() {
        let inputs = InputRecord {
            planet_radius: 0.0,
            ..InputRecord::sample()
        };
        let d = engine().derive(&inputs);
        assert!(d.atmosphere.is_err());
        assert_eq!(d.error(Group::Atmosphere), d.error(Group::SurfaceGravity));
        assert_eq!(
            d.failures().iter().map(|(g, _)| *g).collect::<Vec<_>>(),
            vec![
                Group::EscapeVelocity,
                Group::SurfaceGravity,
                Group::Atmosphere
            ]
        );
    }

    #[test]
    fn negative_atmosphere_temperature_is_still_derived() {
        let inputs = InputRecord {
            atmosphere_temp: -100.0,
            ..InputRecord::sample()
        };
        let result = engine().evaluate(&inputs);
        assert!(result.atmosphere.unwrap().scale_height_km < 0.0);
        assert!(result.absent().is_empty());
    }

    #[test]
    fn free_function_matches_engine() {
        let k = ConstantsTable::standard();
        let inputs = InputRecord::sample();
        assert_eq!(evaluate(&inputs, &k), DerivationEngine::new(k).evaluate(&inputs));
    }

    #[test]
    fn memo_reuses_identical_records() {
        let mut memo = MemoizedEngine::new(engine());
        let inputs = InputRecord::sample();
        let first = memo.evaluate(&inputs);
        let second = memo.evaluate(&inputs);
        assert_eq!(first, second);
        assert_eq!(memo.stats(), (1, 1));
    }

    #[test]
    fn memo_recomputes_on_any_field_change() {
        let mut memo = MemoizedEngine::new(engine());
        let base = InputRecord::sample();
        memo.evaluate(&base);
        let changed = InputRecord {
            human_feedback: false,
            ..base
        };
        let result = memo.evaluate(&changed);
        assert_eq!(result, engine().evaluate(&changed));
        assert_eq!(memo.stats(), (0, 2));

        memo.invalidate();
        memo.evaluate(&changed);
        assert_eq!(memo.stats(), (0, 3));
    }

    #[test]
    fn memo_distinguishes_signed_zero() {
        let mut memo = MemoizedEngine::new(engine());
        let positive = InputRecord {
            radial_velocity: 0.0,
            ..InputRecord::sample()
        };
        let negative = InputRecord {
            radial_velocity: -0.0,
            ..positive
        };
        memo.evaluate(&positive);
        let result = memo.evaluate(&negative);
        assert!(result.doppler.unwrap().shift_ratio_ppm.is_sign_negative());
    }
}
