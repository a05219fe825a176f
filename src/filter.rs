// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Filter criteria applied to aggregated endpoints.
//!
//! Callers hand in [`FilterOptions`], the raw string form coming from CLI
//! flags or the config file. [`FilterCriteria::from_options`] validates every
//! value up front so a bad filter is reported before any entry is read.
//! All supplied predicates must match (logical AND).

use regex::Regex;

use crate::endpoint::EndpointDescriptor;
use crate::error::InspectError;
use crate::helpers::token::validate_method_token;

/// Path patterns that usually indicate an API endpoint.
pub const DEFAULT_API_PATTERNS: &[&str] = &[
    r"/api/",
    r"/v\d+/",
    r"/rest/",
    r"/graphql",
    r"/gql",
    r"\.json$",
];

/// Unvalidated filter values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub domain: Option<String>,
    pub method: Option<String>,
    pub status_code: Option<String>,
    pub path_pattern: Option<String>,
    pub api_only: bool,
    /// Overrides [`DEFAULT_API_PATTERNS`] when `api_only` is set.
    pub api_patterns: Option<Vec<String>>,
}

impl FilterOptions {
    /// Fill every unset field of `self` from `fallback`.
    ///
    /// `api_only` has no unset state, so it is on when either side sets it.
    /// The binary's `--no-api-only` flag clears it after merging.
    pub fn or(self, fallback: FilterOptions) -> FilterOptions {
        FilterOptions {
            domain: self.domain.or(fallback.domain),
            method: self.method.or(fallback.method),
            status_code: self.status_code.or(fallback.status_code),
            path_pattern: self.path_pattern.or(fallback.path_pattern),
            api_only: self.api_only || fallback.api_only,
            api_patterns: self.api_patterns.or(fallback.api_patterns),
        }
    }
}

/// Validated, ready-to-apply filter predicates.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    domain: Option<String>,
    method: Option<String>,
    status_code: Option<u16>,
    path_pattern: Option<Regex>,
    api_patterns: Option<Vec<Regex>>,
}

impl FilterCriteria {
    /// Criteria that accept every endpoint.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_options(opts: &FilterOptions) -> Result<Self, InspectError> {
        let domain = opts
            .domain
            .as_deref()
            .map(parse_domain)
            .transpose()?;
        let method = opts
            .method
            .as_deref()
            .map(parse_method)
            .transpose()?;
        let status_code = opts
            .status_code
            .as_deref()
            .map(parse_status_code)
            .transpose()?;
        let path_pattern = opts
            .path_pattern
            .as_deref()
            .map(|p| compile("path_pattern", p))
            .transpose()?;

        let api_patterns = if opts.api_only {
            let compiled = match &opts.api_patterns {
                Some(patterns) => patterns
                    .iter()
                    .map(|p| compile("api_patterns", p))
                    .collect::<Result<Vec<_>, _>>()?,
                None => DEFAULT_API_PATTERNS
                    .iter()
                    .map(|p| compile("api_patterns", p))
                    .collect::<Result<Vec<_>, _>>()?,
            };
            if compiled.is_empty() {
                return Err(InspectError::invalid_filter(
                    "api_patterns",
                    "api-only filtering needs at least one pattern",
                ));
            }
            Some(compiled)
        } else {
            None
        };

        Ok(Self {
            domain,
            method,
            status_code,
            path_pattern,
            api_patterns,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.domain.is_none()
            && self.method.is_none()
            && self.status_code.is_none()
            && self.path_pattern.is_none()
            && self.api_patterns.is_none()
    }

    /// True when `d` satisfies every supplied predicate.
    pub fn matches(&self, d: &EndpointDescriptor) -> bool {
        if let Some(domain) = &self.domain {
            if !d.domain.eq_ignore_ascii_case(domain) {
                return false;
            }
        }
        if let Some(method) = &self.method {
            if !d.method.eq_ignore_ascii_case(method) {
                return false;
            }
        }
        if let Some(status) = self.status_code {
            if !d.has_status(status) {
                return false;
            }
        }
        if let Some(re) = &self.path_pattern {
            if !re.is_match(&d.path) {
                return false;
            }
        }
        if let Some(patterns) = &self.api_patterns {
            if !patterns.iter().any(|re| re.is_match(&d.path)) {
                return false;
            }
        }
        true
    }
}

fn parse_domain(s: &str) -> Result<String, InspectError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(InspectError::invalid_filter("domain", "domain is empty"));
    }
    if s.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(InspectError::invalid_filter(
            "domain",
            format!("domain '{}' contains whitespace or control characters", s),
        ));
    }
    Ok(s.to_ascii_lowercase())
}

fn parse_method(s: &str) -> Result<String, InspectError> {
    let s = s.trim();
    validate_method_token(s).map_err(|reason| InspectError::invalid_filter("method", reason))?;
    Ok(s.to_ascii_uppercase())
}

fn parse_status_code(s: &str) -> Result<u16, InspectError> {
    let s = s.trim();
    let code: u16 = s.parse().map_err(|_| {
        InspectError::invalid_filter("status_code", format!("not an integer status code: '{}'", s))
    })?;
    if !(100..=599).contains(&code) {
        return Err(InspectError::invalid_filter(
            "status_code",
            format!("status code {} outside 100-599", code),
        ));
    }
    Ok(code)
}

fn compile(field: &'static str, pattern: &str) -> Result<Regex, InspectError> {
    Regex::new(pattern).map_err(|e| {
        InspectError::invalid_filter(field, format!("invalid regex '{}': {}", pattern, e))
    })
}
