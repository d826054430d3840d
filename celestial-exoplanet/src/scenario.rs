//! Scenario files: an input record plus optional constant overrides.
//!
//! ```toml
//! name = "Kepler-442b"
//!
//! [inputs]
//! radialVelocity = 1.2
//! restWavelength = 550.0
//! # ... every InputRecord field ...
//!
//! [constants]
//! L_sun = 3.846e26
//! ```
//!
//! JSON documents use the same shape. [`Scenario::load`] picks the parser
//! from the file extension: `.json` is JSON, anything else is TOML.

use std::fs;
use std::path::Path;

use celestial_core::{AstroError, AstroResult};
use serde::{Deserialize, Serialize};

use crate::constants::{ConstantsOverrides, ConstantsTable};
use crate::engine::DerivationEngine;
use crate::inputs::InputRecord;

const FILE_TYPE: &str = "scenario";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub inputs: InputRecord,
    #[serde(default, skip_serializing_if = "ConstantsOverrides::is_empty")]
    pub constants: ConstantsOverrides,
}

impl Scenario {
    pub fn new(inputs: InputRecord) -> Self {
        Self {
            name: None,
            inputs,
            constants: ConstantsOverrides::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn from_toml_str(text: &str) -> AstroResult<Self> {
        toml::from_str(text)
            .map_err(|e| AstroError::data_error(FILE_TYPE, "parse TOML", &e.to_string()))
    }

    pub fn from_json_str(text: &str) -> AstroResult<Self> {
        serde_json::from_str(text)
            .map_err(|e| AstroError::data_error(FILE_TYPE, "parse JSON", &e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> AstroResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            AstroError::data_error(FILE_TYPE, "read", &format!("{}: {e}", path.display()))
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        tracing::debug!(path = %path.display(), json = is_json, "loading scenario");
        if is_json {
            Self::from_json_str(&text)
        } else {
            Self::from_toml_str(&text)
        }
    }

    pub fn to_toml_string(&self) -> AstroResult<String> {
        toml::to_string(self)
            .map_err(|e| AstroError::data_error(FILE_TYPE, "serialize TOML", &e.to_string()))
    }

    /// Standard constants with this scenario's overrides applied.
    pub fn constants_table(&self) -> ConstantsTable {
        self.constants.apply(ConstantsTable::standard())
    }

    pub fn engine(&self) -> DerivationEngine {
        DerivationEngine::new(self.constants_table())
    }
}
