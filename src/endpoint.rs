// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Endpoint descriptors, the unit of output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::helpers::uri::UrlParts;
use crate::transaction::Transaction;

/// Dedup key: `(method, domain, normalized path)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EndpointKey {
    pub method: String,
    pub domain: String,
    pub path: String,
}

impl EndpointKey {
    pub fn new(method: &str, parts: &UrlParts) -> Self {
        Self {
            method: method.to_ascii_uppercase(),
            domain: parts.host.clone(),
            path: parts.path.clone(),
        }
    }
}

/// One logical API endpoint and what was observed about it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EndpointDescriptor {
    pub method: String,
    pub domain: String,
    pub path: String,
    pub sample_status_codes: BTreeSet<u16>,
    pub occurrence_count: u64,
    pub first_seen: Option<DateTime<Utc>>,
    pub last_seen: Option<DateTime<Utc>>,
    /// URL of the first transaction that produced this endpoint.
    pub example_url: String,
    /// Scheme of `example_url`.
    pub protocol: String,
    /// Sum of known request body sizes, in bytes.
    pub total_request_size: u64,
    /// Sum of known response body sizes, in bytes.
    pub total_response_size: u64,
    pub max_response_size: Option<u64>,
    /// Mean of the recorded entry times, in milliseconds.
    pub avg_time_ms: Option<f64>,
    /// Transactions that contributed to `avg_time_ms`.
    #[serde(skip)]
    pub(crate) timed_count: u64,
}

impl EndpointDescriptor {
    /// Start a descriptor from the first transaction seen for `key`.
    pub(crate) fn open(key: EndpointKey, scheme: &str, tx: &Transaction) -> Self {
        let mut descriptor = Self {
            method: key.method,
            domain: key.domain,
            path: key.path,
            sample_status_codes: BTreeSet::new(),
            occurrence_count: 0,
            first_seen: None,
            last_seen: None,
            example_url: tx.url.clone(),
            protocol: scheme.to_string(),
            total_request_size: 0,
            total_response_size: 0,
            max_response_size: None,
            avg_time_ms: None,
            timed_count: 0,
        };
        descriptor.observe(tx);
        descriptor
    }

    /// Fold one more matching transaction into this descriptor.
    pub(crate) fn observe(&mut self, tx: &Transaction) {
        self.occurrence_count += 1;
        if let Some(status) = tx.status_code {
            self.sample_status_codes.insert(status);
        }
        if let Some(ts) = tx.timestamp {
            if self.first_seen.map_or(true, |first| ts < first) {
                self.first_seen = Some(ts);
            }
            if self.last_seen.map_or(true, |last| ts > last) {
                self.last_seen = Some(ts);
            }
        }
        if let Some(size) = tx.request_size {
            self.total_request_size = self.total_request_size.saturating_add(size);
        }
        if let Some(size) = tx.response_size {
            self.total_response_size = self.total_response_size.saturating_add(size);
            self.max_response_size = Some(self.max_response_size.map_or(size, |m| m.max(size)));
        }
        if let Some(t) = tx.time_ms {
            self.timed_count += 1;
            let avg = self.avg_time_ms.unwrap_or(0.0);
            self.avg_time_ms = Some(avg + (t - avg) / self.timed_count as f64);
        }
    }

    pub fn key(&self) -> EndpointKey {
        EndpointKey {
            method: self.method.clone(),
            domain: self.domain.clone(),
            path: self.path.clone(),
        }
    }

    pub fn has_status(&self, status: u16) -> bool {
        self.sample_status_codes.contains(&status)
    }
}
