use serde::{Deserialize, Serialize};

/// Feature switches for the external collaborators.
///
/// All default to `false`; a missing or unparseable `config.toml` therefore
/// leaves every integration off, which is safe for local runs and tests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureFlags {
    #[serde(default)]
    pub docmosis: bool,
    #[serde(default)]
    pub notifications: bool,
}

/// Top-level shape of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
}
