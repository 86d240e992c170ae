//! Dialects described in configuration files.
//!
//! ```toml
//! base = "Scala212"
//!
//! [overrides]
//! allow_literal_types = true
//! ```

use crate::{catalog, dialect::*, err::*};
use serde::Deserialize;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DialectConf {
    /// Name of a canonical dialect.
    pub base: String,
    #[serde(default)]
    pub overrides: Overrides,
}

impl DialectConf {
    pub fn from_toml(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
    /// Always a fresh, anonymous dialect, even without overrides.
    pub fn resolve(&self) -> Result<Dialect> {
        let base = catalog::standard(&self.base)?;
        let dialect = base.derive_with(&self.overrides);
        log::debug!(
            "resolved dialect {:?} from {} ({} overrides)",
            dialect.id(),
            self.base,
            if self.overrides.is_empty() { "without" } else { "with" }
        );
        Ok(dialect)
    }
}

impl FromStr for DialectConf {
    type Err = DialectError;
    fn from_str(s: &str) -> Result<Self> {
        Self::from_toml(s)
    }
}
