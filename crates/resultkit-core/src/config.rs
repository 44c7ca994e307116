//! Configuration for the envelope executor.
//!
//! All configuration is driven by environment variables with the
//! `RESULTKIT_` prefix.

use std::fmt;
use std::str::FromStr;

use crate::error::ResultKitError;
use crate::media::DEFAULT_CONTENT_TYPE;

/// Casing applied to envelope field names in JSON output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JsonNamingPolicy {
    /// Lower camel case: `code`, `title`, `detail`, `data`.
    #[default]
    CamelCase,
    /// Declared property names kept as-is: `Code`, `Title`, `Detail`, `Data`.
    PascalCase,
}

impl JsonNamingPolicy {
    /// Apply the policy to a lower-case envelope field name.
    #[must_use]
    pub fn field_name(self, name: &'static str) -> &'static str {
        match (self, name) {
            (Self::CamelCase, _) => name,
            (Self::PascalCase, "code") => "Code",
            (Self::PascalCase, "title") => "Title",
            (Self::PascalCase, "detail") => "Detail",
            (Self::PascalCase, "data") => "Data",
            (Self::PascalCase, other) => other,
        }
    }

    /// The canonical name used in configuration.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CamelCase => "camel",
            Self::PascalCase => "pascal",
        }
    }
}

impl fmt::Display for JsonNamingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JsonNamingPolicy {
    type Err = ResultKitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "camel" | "camelcase" => Ok(Self::CamelCase),
            "pascal" | "pascalcase" | "none" => Ok(Self::PascalCase),
            other => Err(ResultKitError::Config(format!(
                "unknown JSON naming policy: {other} (expected camel, pascal or none)"
            ))),
        }
    }
}

/// Executor configuration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultKitConfig {
    /// Content type used when neither the envelope nor the transport sets one.
    pub default_content_type: String,
    /// Casing of envelope field names in JSON output.
    pub json_naming: JsonNamingPolicy,
    /// Whether JSON output is indented.
    pub json_pretty: bool,
}

impl Default for ResultKitConfig {
    fn default() -> Self {
        Self {
            default_content_type: DEFAULT_CONTENT_TYPE.to_owned(),
            json_naming: JsonNamingPolicy::default(),
            json_pretty: false,
        }
    }
}

impl ResultKitConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `RESULTKIT_DEFAULT_CONTENT_TYPE` | `application/json; charset=utf-8` |
    /// | `RESULTKIT_JSON_NAMING` | `camel` |
    /// | `RESULTKIT_JSON_PRETTY` | `false` |
    pub fn from_env() -> Result<Self, ResultKitError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ResultKitError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("RESULTKIT_DEFAULT_CONTENT_TYPE") {
            if v.trim().is_empty() {
                return Err(ResultKitError::Config(
                    "RESULTKIT_DEFAULT_CONTENT_TYPE must not be empty".to_owned(),
                ));
            }
            config.default_content_type = v;
        }
        if let Some(v) = lookup("RESULTKIT_JSON_NAMING") {
            config.json_naming = v.parse()?;
        }
        if let Some(v) = lookup("RESULTKIT_JSON_PRETTY") {
            config.json_pretty = v == "1" || v.eq_ignore_ascii_case("true");
        }

        tracing::debug!(
            default_content_type = %config.default_content_type,
            json_naming = %config.json_naming,
            json_pretty = config.json_pretty,
            "loaded ResultKit configuration",
        );

        Ok(config)
    }
}
