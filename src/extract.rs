// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Entry extraction: decoded archive tree to a lazy stream of transactions.
//!
//! The archive arrives as an untyped `serde_json::Value`. Everything is
//! validated here, at the boundary, so the aggregator only ever sees fully
//! typed [`Transaction`] records. A bad entry is skipped and counted; only a
//! top-level shape that is not `log.entries[]` is an error.

use serde_json::Value;

use crate::error::InspectError;
use crate::helpers::timestamp::parse_started_date_time;
use crate::helpers::uri::split_url;
use crate::transaction::Transaction;

/// Lazy iterator over the transactions of one archive, in archive order.
#[derive(Debug)]
pub struct Extractor<'a> {
    entries: std::slice::Iter<'a, Value>,
    index: usize,
    skipped: usize,
}

impl Extractor<'_> {
    /// Number of entries skipped so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Number of entries read so far, skipped ones included.
    pub fn seen(&self) -> usize {
        self.index
    }
}

impl Iterator for Extractor<'_> {
    type Item = Transaction;

    fn next(&mut self) -> Option<Transaction> {
        loop {
            let entry = self.entries.next()?;
            let index = self.index;
            self.index += 1;

            match parse_entry(entry) {
                Ok(tx) => return Some(tx),
                Err(reason) => {
                    self.skipped += 1;
                    tracing::debug!(entry = index, reason, "skipping archive entry");
                }
            }
        }
    }
}

/// Validate the archive shape and return a lazy transaction iterator.
pub fn extract_transactions(archive: &Value) -> Result<Extractor<'_>, InspectError> {
    let root = archive
        .as_object()
        .ok_or_else(|| InspectError::MalformedArchive("archive root is not an object".into()))?;
    let log = root
        .get("log")
        .and_then(Value::as_object)
        .ok_or_else(|| InspectError::MalformedArchive("missing 'log' object".into()))?;
    let entries = log
        .get("entries")
        .and_then(Value::as_array)
        .ok_or_else(|| InspectError::MalformedArchive("'log.entries' is not a list".into()))?;

    Ok(Extractor {
        entries: entries.iter(),
        index: 0,
        skipped: 0,
    })
}

fn parse_entry(entry: &Value) -> Result<Transaction, &'static str> {
    let request = entry.get("request").ok_or("missing request")?;
    let method = request
        .get("method")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .ok_or("missing request method")?;
    let url = request
        .get("url")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or("missing request url")?;
    if split_url(url).is_none() {
        return Err("request url is not absolute");
    }

    let response = entry.get("response");
    let status_code = response
        .and_then(|r| r.get("status"))
        .and_then(Value::as_u64)
        .and_then(|s| u16::try_from(s).ok())
        .filter(|&s| s != 0);

    let timestamp = entry
        .get("startedDateTime")
        .and_then(Value::as_str)
        .and_then(|s| parse_started_date_time(s).ok());

    let request_size = request.get("bodySize").and_then(byte_count);
    let response_size = response.and_then(|r| {
        r.get("bodySize")
            .and_then(byte_count)
            .or_else(|| r.get("content").and_then(|c| c.get("size")).and_then(byte_count))
    });

    let time_ms = entry
        .get("time")
        .and_then(Value::as_f64)
        .filter(|t| *t >= 0.0);

    Ok(Transaction {
        method: method.to_ascii_uppercase(),
        url: url.to_string(),
        status_code,
        timestamp,
        request_size,
        response_size,
        time_ms,
    })
}

/// HAR uses `-1` for "unknown"; any negative or non-numeric size is absent.
fn byte_count(v: &Value) -> Option<u64> {
    v.as_u64().or_else(|| {
        v.as_f64()
            .filter(|f| f.is_finite() && *f >= 0.0)
            .map(|f| f as u64)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn extracts_entries_in_order() {
        let archive = json!({"log": {"entries": [
            {
                "startedDateTime": "2024-01-01T00:00:00Z",
                "time": 12.5,
                "request": {"method": "get", "url": "https://api.example.com/users?x=1", "bodySize": 0},
                "response": {"status": 200, "bodySize": 512}
            },
            {
                "startedDateTime": "2024-01-01T00:00:01Z",
                "request": {"method": "POST", "url": "https://api.example.com/users", "bodySize": 42},
                "response": {"status": 201, "bodySize": -1, "content": {"size": 64}}
            }
        ]}});

        let txs: Vec<_> = extract_transactions(&archive).unwrap().collect();
        assert_eq!(txs.len(), 2);
        assert_eq!(txs[0].method, "GET");
        assert_eq!(txs[0].url, "https://api.example.com/users?x=1");
        assert_eq!(txs[0].status_code, Some(200));
        assert_eq!(txs[0].response_size, Some(512));
        assert_eq!(txs[0].time_ms, Some(12.5));
        assert!(txs[0].timestamp.is_some());
        assert_eq!(txs[1].method, "POST");
        assert_eq!(txs[1].request_size, Some(42));
        assert_eq!(txs[1].response_size, Some(64));
    }

    #[test]
    fn skips_entries_missing_method_or_url() {
        let archive = json!({"log": {"entries": [
            {"request": {"url": "https://example.com/a"}, "response": {"status": 200}},
            {"request": {"method": "GET"}, "response": {"status": 200}},
            {"response": {"status": 200}},
            {"request": {"method": "GET", "url": "/relative"}},
            {"request": {"method": "GET", "url": "https://example.com/ok"}},
            "not an object"
        ]}});

        let mut ex = extract_transactions(&archive).unwrap();
        let txs: Vec<_> = ex.by_ref().collect();
        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].url, "https://example.com/ok");
        assert_eq!(ex.skipped(), 5);
        assert_eq!(ex.seen(), 6);
    }

    #[test]
    fn malformed_timestamp_is_absent_not_fatal() {
        let archive = json!({"log": {"entries": [
            {"startedDateTime": "not-a-date", "request": {"method": "GET", "url": "https://example.com/"}}
        ]}});

        let txs: Vec<_> = extract_transactions(&archive).unwrap().collect();
        assert_eq!(txs.len(), 1);
        assert!(txs[0].timestamp.is_none());
    }

    #[rstest]
    #[case(json!({"status": 0}), None)]
    #[case(json!({"status": 404}), Some(404))]
    #[case(json!({"status": "200"}), None)]
    #[case(json!({"status": 70000}), None)]
    #[case(json!({}), None)]
    fn status_code_cases(#[case] response: Value, #[case] expected: Option<u16>) {
        let archive = json!({"log": {"entries": [
            {"request": {"method": "GET", "url": "https://example.com/"}, "response": response}
        ]}});
        let txs: Vec<_> = extract_transactions(&archive).unwrap().collect();
        assert_eq!(txs[0].status_code, expected);
    }

    #[rstest]
    #[case(json!([]))]
    #[case(json!("string"))]
    #[case(json!({}))]
    #[case(json!({"log": []}))]
    #[case(json!({"log": {}}))]
    #[case(json!({"log": {"entries": {}}}))]
    fn malformed_top_level_is_error(#[case] archive: Value) {
        let err = extract_transactions(&archive).unwrap_err();
        assert!(matches!(err, InspectError::MalformedArchive(_)));
    }

    #[test]
    fn empty_entries_yield_nothing() {
        let archive = json!({"log": {"entries": []}});
        let mut ex = extract_transactions(&archive).unwrap();
        assert!(ex.next().is_none());
        assert_eq!(ex.skipped(), 0);
    }
}
