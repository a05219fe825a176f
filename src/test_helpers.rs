// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Shared test utilities to reduce duplication across test modules.

use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use std::collections::BTreeSet;

use crate::endpoint::EndpointDescriptor;

/// Parse an RFC 3339 timestamp, panicking on bad test input.
pub fn ts(s: &str) -> DateTime<Utc> {
    crate::helpers::timestamp::parse_started_date_time(s).expect("valid test timestamp")
}

/// Build a minimal HAR entry. `status: None` omits the response object.
pub fn make_entry(method: &str, url: &str, status: Option<u16>, started: Option<&str>) -> Value {
    let mut entry = json!({
        "request": {"method": method, "url": url, "bodySize": -1},
        "time": 1.0
    });
    if let Some(status) = status {
        entry["response"] = json!({"status": status, "bodySize": 0});
    }
    if let Some(started) = started {
        entry["startedDateTime"] = json!(started);
    }
    entry
}

/// Wrap entries into a `{ "log": { "entries": [...] } }` archive.
pub fn make_archive(entries: Vec<Value>) -> Value {
    json!({
        "log": {
            "version": "1.2",
            "creator": {"name": "test", "version": "1.0"},
            "entries": entries
        }
    })
}

/// Create a descriptor directly, bypassing aggregation.
pub fn make_descriptor(method: &str, domain: &str, path: &str, statuses: &[u16]) -> EndpointDescriptor {
    EndpointDescriptor {
        method: method.to_string(),
        domain: domain.to_string(),
        path: path.to_string(),
        sample_status_codes: statuses.iter().copied().collect::<BTreeSet<_>>(),
        occurrence_count: 1,
        first_seen: None,
        last_seen: None,
        example_url: format!("https://{}{}", domain, path),
        protocol: "https".to_string(),
        total_request_size: 0,
        total_response_size: 0,
        max_response_size: None,
        avg_time_ms: None,
        timed_count: 0,
    }
}
