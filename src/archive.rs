// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Archive loading: HAR file on disk to a decoded JSON tree.
//!
//! Shape validation is not done here; [`crate::extract`] owns that.

use anyhow::Context;
use serde_json::Value;
use std::path::Path;

/// Read and decode a HAR file.
///
/// A missing file and invalid JSON are both errors. A UTF-8 byte order mark,
/// which some browsers write, is tolerated.
pub async fn load_archive<P: AsRef<Path>>(path: P) -> anyhow::Result<Value> {
    let path_ref = path.as_ref();
    let s = tokio::fs::read_to_string(path_ref)
        .await
        .with_context(|| format!("HAR file not readable: {}", path_ref.display()))?;
    parse_archive(&s).with_context(|| format!("invalid HAR file format: {}", path_ref.display()))
}

/// Decode archive text already in memory.
pub fn parse_archive(s: &str) -> anyhow::Result<Value> {
    let s = s.strip_prefix('\u{feff}').unwrap_or(s);
    let v = serde_json::from_str(s)?;
    Ok(v)
}
