// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Error taxonomy for the extraction core.
//!
//! Only structural problems are errors. A single unreadable archive entry is
//! never an error: the extractor skips it and counts it instead.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InspectError {
    /// The top-level archive shape is not `{ "log": { "entries": [...] } }`.
    #[error("malformed archive: {0}")]
    MalformedArchive(String),

    /// A filter value failed validation. Raised before any entry is read.
    #[error("invalid filter '{field}': {reason}")]
    InvalidFilter { field: &'static str, reason: String },
}

impl InspectError {
    pub(crate) fn invalid_filter(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidFilter {
            field,
            reason: reason.into(),
        }
    }
}
