// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Parsing of HAR `startedDateTime` values.

use chrono::{DateTime, Utc};

/// Parse an ISO 8601 / RFC 3339 timestamp into UTC.
pub fn parse_started_date_time(s: &str) -> anyhow::Result<DateTime<Utc>> {
    let dt = DateTime::parse_from_rfc3339(s.trim())
        .map_err(|e| anyhow::anyhow!("timestamp parse error for '{}': {}", s, e))?;
    Ok(dt.with_timezone(&Utc))
}
