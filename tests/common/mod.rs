// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

#![allow(dead_code)]

use std::path::PathBuf;

use serde_json::{json, Value};

pub fn make_temp_path(prefix: &str, ext: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{}_{}.{}", prefix, uuid::Uuid::new_v4(), ext))
}

/// A browser-like capture: an API host, a site host, a redirect, a page
/// asset and one entry without a URL.
pub fn browser_capture() -> Value {
    json!({
        "log": {
            "version": "1.2",
            "creator": {"name": "Test", "version": "1.0"},
            "entries": [
                {
                    "startedDateTime": "2024-05-01T12:00:00.000Z",
                    "time": 150,
                    "request": {
                        "method": "GET",
                        "url": "https://api.example.com/v1/users?page=1",
                        "headers": [{"name": "Accept", "value": "application/json"}],
                        "queryString": [{"name": "page", "value": "1"}],
                        "bodySize": 0
                    },
                    "response": {"status": 200, "bodySize": 1024}
                },
                {
                    "startedDateTime": "2024-05-01T12:00:01.000Z",
                    "time": 200,
                    "request": {
                        "method": "POST",
                        "url": "https://example.com/login",
                        "postData": {
                            "mimeType": "application/json",
                            "text": "{\"username\":\"test\"}"
                        },
                        "bodySize": 19
                    },
                    "response": {"status": 302, "bodySize": 0}
                },
                {
                    "startedDateTime": "2024-05-01T12:00:02.000Z",
                    "request": {"method": "GET", "url": "https://example.com/static/app.js"},
                    "response": {"status": 200, "bodySize": -1, "content": {"size": 2048}}
                },
                {
                    "startedDateTime": "2024-05-01T12:00:03.000Z",
                    "request": {"method": "get", "url": "https://api.example.com/v1/users/"},
                    "response": {"status": 304}
                },
                {
                    "startedDateTime": "2024-05-01T12:00:04.000Z",
                    "request": {"method": "GET"},
                    "response": {"status": 200}
                },
                {
                    "startedDateTime": "garbled",
                    "request": {"method": "DELETE", "url": "https://api.example.com/v1/users/42"},
                    "response": {"status": 0}
                }
            ]
        }
    })
}
