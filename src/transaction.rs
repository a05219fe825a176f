// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Canonical transaction record produced by the extractor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded request/response pair, normalized from an archive entry.
///
/// Built once by the extractor and never mutated afterwards.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Request method, uppercased.
    pub method: String,
    /// Absolute request URL exactly as recorded.
    pub url: String,
    /// Response status. `None` when the response was never recorded.
    pub status_code: Option<u16>,
    /// `startedDateTime` of the entry; `None` when missing or malformed.
    pub timestamp: Option<DateTime<Utc>>,
    pub request_size: Option<u64>,
    pub response_size: Option<u64>,
    /// Total elapsed time of the entry in milliseconds.
    pub time_ms: Option<f64>,
}

impl Transaction {
    /// Create a minimal transaction with only method and URL set.
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into().to_ascii_uppercase(),
            url: url.into(),
            status_code: None,
            timestamp: None,
            request_size: None,
            response_size: None,
            time_ms: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status_code = Some(status);
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}
