//! Exoplanet parameter derivation.
//!
//! `celestial-exoplanet` turns one record of observed or assumed quantities
//! (stellar radius and temperature, planet mass, orbital period, ...) into
//! nine groups of derived quantities: Doppler shift, transit depth, orbital
//! distance, stellar luminosity, a feedback-weight update, habitable-zone
//! bounds, escape velocity, surface gravity and atmospheric scale height.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`inputs`] | [`InputRecord`], the fifteen caller-supplied values |
//! | [`constants`] | [`ConstantsTable`] and scenario overrides |
//! | [`groups`] | The nine formula groups and [`Group`] |
//! | [`engine`] | [`DerivationEngine`], [`evaluate`], [`MemoizedEngine`] |
//! | `scenario` | TOML/JSON scenario files (feature `serde`) |
//!
//! # Example
//!
//! ```
//! use celestial_exoplanet::{DerivationEngine, ConstantsTable, Group, InputRecord};
//!
//! let engine = DerivationEngine::new(ConstantsTable::standard());
//! let inputs = InputRecord { stellar_radius: 0.0, ..InputRecord::sample() };
//!
//! let derivation = engine.derive(&inputs);
//! assert!(derivation.error(Group::Transit).is_some());
//!
//! let result = engine.evaluate(&inputs);
//! assert!(result.transit.is_none());
//! assert!(result.kepler.is_some());
//! ```
//!
//! # Design Notes
//!
//! - **Per-group isolation**: a group that cannot be evaluated leaves its slot
//!   empty; it never takes the rest of the record down with it.
//! - **Explicit dependencies**: the habitable-zone and atmosphere groups take
//!   their upstream outputs as arguments rather than reading a shared record.
//! - **No ambient state**: constants are a value owned by the engine.

pub mod constants;
pub mod engine;
pub mod groups;
pub mod inputs;
#[cfg(feature = "serde")]
pub mod scenario;

pub use constants::{ConstantsOverrides, ConstantsTable};
pub use engine::{evaluate, Derivation, DerivationEngine, MemoizedEngine, ResultRecord};
pub use groups::Group;
pub use inputs::InputRecord;
#[cfg(feature = "serde")]
pub use scenario::Scenario;
