// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Overlay configuration
//!
//! Settings are read from a TOML file; every field is optional and falls
//! back to the defaults below:
//!
//! ```toml
//! modifier = "Alt"
//! reserved = ["S", "C", "H"]
//! namespace = "underline"
//! ```
//!
//! # Example
//!
//! ```no_run
//! use page_mnemonics::config::OverlayConfig;
//! use std::path::Path;
//!
//! let config = OverlayConfig::load(Path::new("/tmp/overlay.toml"))?;
//! println!("Overlay modifier: {}", config.modifier);
//! # Ok::<(), page_mnemonics::config::ConfigError>(())
//! ```

mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::{Modifier, DEFAULT_RESERVED};

/// Namespace the overlay's transient bindings are registered under.
pub const DEFAULT_NAMESPACE: &str = "underline";

/// Overlay settings
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Modifier that shows the overlay while held
    pub modifier: Modifier,
    /// Characters already bound by standing modifier shortcuts
    pub reserved: Vec<char>,
    /// Transient binding namespace
    pub namespace: String,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            modifier: Modifier::Alt,
            reserved: DEFAULT_RESERVED.to_vec(),
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

impl OverlayConfig {
    /// Parses and validates TOML content.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: OverlayConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Checks that the values can drive an overlay session.
    ///
    /// - Shift cannot be the overlay modifier (Shift+letter is typing)
    /// - The namespace must not be empty
    /// - Reserved characters must be letters or digits
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.modifier == Modifier::Shift {
            return Err(ConfigError::ValidationFailed(
                "Shift cannot be the overlay modifier".to_string(),
            ));
        }
        if self.namespace.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "namespace must not be empty".to_string(),
            ));
        }
        if let Some(c) = self.reserved.iter().find(|c| !c.is_alphanumeric()) {
            return Err(ConfigError::ValidationFailed(format!(
                "reserved character '{}' is not a letter or digit",
                c
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
