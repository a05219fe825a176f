// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Configuration loading: default filters, API patterns and output format.
//!
//! TOML format, every section optional:
//!
//! ```toml
//! [general]
//! format = "csv"
//!
//! [filters]
//! domain = "api.example.com"
//! method = "GET"
//! status_code = 200
//! path_pattern = "^/v1/"
//! api_only = false
//!
//! [api]
//! patterns = ["/api/", "/graphql"]
//! ```

use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::error::InspectError;
use crate::export::OutputFormat;
use crate::filter::{FilterCriteria, FilterOptions};

#[derive(Debug, Clone, Deserialize, Default)]
pub struct GeneralConfig {
    /// Format used when printing to stdout.
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ApiConfig {
    /// Regexes marking a path as an API endpoint for `api_only`.
    pub patterns: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    /// Raw filter values, validated by [`Config::filter_options`].
    #[serde(default)]
    pub filters: BTreeMap<String, toml::Value>,

    #[serde(default)]
    pub api: ApiConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// Filter values are validated eagerly, so a bad `status_code` is
    /// reported here rather than at inspection time.
    pub async fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let s = tokio::fs::read_to_string(path_ref)
            .await
            .with_context(|| format!("config not readable: {}", path_ref.display()))?;
        let cfg = Self::from_toml_str(&s)
            .with_context(|| format!("invalid configuration in {}", path_ref.display()))?;
        Ok(cfg)
    }

    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        let cfg: Self = toml::from_str(s)?;
        FilterCriteria::from_options(&cfg.filter_options()?)?;
        Ok(cfg)
    }

    /// Convert the `[filters]` and `[api]` sections into raw filter options.
    pub fn filter_options(&self) -> Result<FilterOptions, InspectError> {
        let mut opts = FilterOptions {
            api_patterns: self.api.patterns.clone(),
            ..FilterOptions::default()
        };

        for (key, value) in &self.filters {
            match key.as_str() {
                "domain" => opts.domain = Some(expect_string("domain", value)?),
                "method" => opts.method = Some(expect_string("method", value)?),
                "path_pattern" => opts.path_pattern = Some(expect_string("path_pattern", value)?),
                "status_code" => {
                    opts.status_code = Some(match value {
                        toml::Value::Integer(i) => i.to_string(),
                        toml::Value::String(s) => s.clone(),
                        other => {
                            return Err(InspectError::invalid_filter(
                                "status_code",
                                format!("expected an integer, got {}", other.type_str()),
                            ))
                        }
                    })
                }
                "api_only" => match value {
                    toml::Value::Boolean(b) => opts.api_only = *b,
                    other => {
                        return Err(InspectError::invalid_filter(
                            "api_only",
                            format!("expected a boolean, got {}", other.type_str()),
                        ))
                    }
                },
                unknown => {
                    return Err(InspectError::invalid_filter(
                        "filters",
                        format!("unknown filter '{}'", unknown),
                    ))
                }
            }
        }

        Ok(opts)
    }
}

fn expect_string(field: &'static str, value: &toml::Value) -> Result<String, InspectError> {
    value.as_str().map(str::to_string).ok_or_else(|| {
        InspectError::invalid_filter(field, format!("expected a string, got {}", value.type_str()))
    })
}
