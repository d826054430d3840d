//! Shared foundations for the celestial crates.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`constants`] | SI physical constants (G, c, σ, AU, solar and Earth figures, k_B, m_H) |
//! | [`errors`] | [`AstroError`], [`MathErrorKind`] and [`AstroResult`] |
//! | [`math`] | Domain-guarded division and square root, `libm` transcendentals |
//! | [`test_helpers`] | Relative and ULP float assertions for tests |
//!
//! # Re-exports
//!
//! ```
//! use celestial_core::{AstroError, AstroResult, MathErrorKind};
//! ```

pub mod constants;
pub mod errors;
pub mod math;

pub use errors::{AstroError, AstroResult, MathErrorKind};

pub mod test_helpers;
