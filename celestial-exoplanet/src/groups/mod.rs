//! The nine formula groups.
//!
//! Every group is a pure function of the input record and the constants
//! table; the two dependent groups also take their upstream output as an
//! argument.
//!
//! | Group | Module | Upstream |
//! |-------|--------|----------|
//! | Doppler shift | [`doppler`] | |
//! | Transit depth | [`transit`] | |
//! | Kepler's third law | [`kepler`] | |
//! | Stefan–Boltzmann luminosity | [`stefan_boltzmann`] | |
//! | Feedback weight update | [`feedback_weight`] | |
//! | Habitable zone | [`habitable_zone`] | Kepler (optional) |
//! | Escape velocity | [`escape_velocity`] | |
//! | Surface gravity | [`surface_gravity`] | |
//! | Atmospheric scale height | [`atmosphere`] | Surface gravity (required) |

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod atmosphere;
pub mod doppler;
pub mod escape_velocity;
pub mod feedback_weight;
pub mod habitable_zone;
pub mod kepler;
mod planet;
pub mod stefan_boltzmann;
pub mod surface_gravity;
pub mod transit;

pub use atmosphere::AtmosphereOutput;
pub use doppler::DopplerOutput;
pub use escape_velocity::EscapeVelocityOutput;
pub use feedback_weight::FeedbackWeightOutput;
pub use habitable_zone::HabitableZoneOutput;
pub use kepler::KeplerOutput;
pub use stefan_boltzmann::StefanBoltzmannOutput;
pub use surface_gravity::SurfaceGravityOutput;
pub use transit::TransitOutput;

/// Names the formula groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Group {
    Doppler,
    Transit,
    Kepler,
    StefanBoltzmann,
    FeedbackWeight,
    HabitableZone,
    EscapeVelocity,
    SurfaceGravity,
    Atmosphere,
}

impl Group {
    /// Evaluation order. Each group appears after its upstream.
    pub const ALL: [Group; 9] = [
        Group::Doppler,
        Group::Transit,
        Group::Kepler,
        Group::StefanBoltzmann,
        Group::FeedbackWeight,
        Group::HabitableZone,
        Group::EscapeVelocity,
        Group::SurfaceGravity,
        Group::Atmosphere,
    ];

    pub fn depends_on(self) -> Option<Group> {
        match self {
            Group::HabitableZone => Some(Group::Kepler),
            Group::Atmosphere => Some(Group::SurfaceGravity),
            _ => None,
        }
    }

    /// Serialized key of this group in a result record.
    pub fn key(self) -> &'static str {
        match self {
            Group::Doppler => "doppler",
            Group::Transit => "transit",
            Group::Kepler => "kepler",
            Group::StefanBoltzmann => "stefanBoltzmann",
            Group::FeedbackWeight => "feedbackWeight",
            Group::HabitableZone => "habitableZone",
            Group::EscapeVelocity => "escapeVelocity",
            Group::SurfaceGravity => "surfaceGravity",
            Group::Atmosphere => "atmosphere",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Group::Doppler => "Radial velocity (Doppler shift)",
            Group::Transit => "Transit method",
            Group::Kepler => "Kepler's 3rd law",
            Group::StefanBoltzmann => "Stefan-Boltzmann law",
            Group::FeedbackWeight => "Feedback weight",
            Group::HabitableZone => "Habitable zone",
            Group::EscapeVelocity => "Escape velocity",
            Group::SurfaceGravity => "Surface gravity",
            Group::Atmosphere => "Atmospheric scale height",
        };
        f.write_str(name)
    }
}
