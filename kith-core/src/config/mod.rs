//! Configuration for the kith subsystems.
//!
//! All weights and caps live here, never at the use site. Every block is
//! `#[serde(default)]` so a partial TOML file only overrides what it names.
//!
//! # Examples
//!
//! ```
//! use kith_core::config::KithConfig;
//!
//! let config: KithConfig = toml::from_str(
//!     r#"
//!     [trust]
//!     base = 15.0
//!     "#,
//! ).unwrap();
//! assert!((config.trust.base - 15.0).abs() < f64::EPSILON);
//! // Unnamed fields keep their defaults.
//! assert!((config.trust.per_connection - 2.0).abs() < f64::EPSILON);
//! ```

pub mod defaults;

mod events_config;
mod suggest_config;
mod trust_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{KithError, KithResult};

pub use events_config::EventsConfig;
pub use suggest_config::SuggestConfig;
pub use trust_config::TrustConfig;

/// Aggregate configuration for the whole engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KithConfig {
    pub trust: TrustConfig,
    pub suggest: SuggestConfig,
    pub events: EventsConfig,
}

impl KithConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> KithResult<Self> {
        toml::from_str(text).map_err(|e| KithError::Config(e.to_string()))
    }

    /// Load a config from a TOML file on disk.
    pub fn load(path: &Path) -> KithResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| KithError::Config(format!("read {}: {e}", path.display())))?;
        Self::from_toml(&text)
    }
}
