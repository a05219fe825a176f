// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Endpoint export to JSON and CSV.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::endpoint::EndpointDescriptor;

const CSV_HEADER: &[&str] = &[
    "method",
    "domain",
    "path",
    "protocol",
    "example_url",
    "status_codes",
    "occurrence_count",
    "first_seen",
    "last_seen",
    "total_request_size",
    "total_response_size",
    "max_response_size",
    "avg_time_ms",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

impl OutputFormat {
    /// Pick a format from a file extension (`.json` or `.csv`).
    pub fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(anyhow::anyhow!(
                "unsupported output format '.{}' for {}",
                ext,
                path.display()
            )),
        }
    }

    pub fn render(self, endpoints: &[EndpointDescriptor]) -> anyhow::Result<String> {
        match self {
            Self::Json => render_json(endpoints),
            Self::Csv => render_csv(endpoints),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(format!("unknown format '{}', expected json or csv", other)),
        }
    }
}

/// A descriptor flattened to scalar columns for tabular output.
///
/// Field order matches the CSV header.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EndpointRecord {
    pub method: String,
    pub domain: String,
    pub path: String,
    pub protocol: String,
    pub example_url: String,
    /// Status codes joined with `;`, ascending.
    pub status_codes: String,
    pub occurrence_count: u64,
    /// RFC 3339, empty when never seen with a timestamp.
    pub first_seen: String,
    pub last_seen: String,
    pub total_request_size: u64,
    pub total_response_size: u64,
    /// Empty in CSV when no response size was recorded.
    pub max_response_size: Option<u64>,
    pub avg_time_ms: Option<f64>,
}

impl From<&EndpointDescriptor> for EndpointRecord {
    fn from(d: &EndpointDescriptor) -> Self {
        Self {
            method: d.method.clone(),
            domain: d.domain.clone(),
            path: d.path.clone(),
            protocol: d.protocol.clone(),
            example_url: d.example_url.clone(),
            status_codes: d
                .sample_status_codes
                .iter()
                .map(u16::to_string)
                .collect::<Vec<_>>()
                .join(";"),
            occurrence_count: d.occurrence_count,
            first_seen: d.first_seen.map(|t| t.to_rfc3339()).unwrap_or_default(),
            last_seen: d.last_seen.map(|t| t.to_rfc3339()).unwrap_or_default(),
            total_request_size: d.total_request_size,
            total_response_size: d.total_response_size,
            max_response_size: d.max_response_size,
            avg_time_ms: d.avg_time_ms,
        }
    }
}

/// Pretty-printed JSON array of descriptors.
pub fn render_json(endpoints: &[EndpointDescriptor]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(endpoints)?)
}

/// CSV with a header row. Always emits the header, even with no endpoints.
pub fn render_csv(endpoints: &[EndpointDescriptor]) -> anyhow::Result<String> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());
    wtr.write_record(CSV_HEADER)?;
    for d in endpoints {
        wtr.serialize(EndpointRecord::from(d))?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// Write endpoints to `path`, choosing the format from its extension.
pub async fn export_to_path<P: AsRef<Path>>(
    path: P,
    endpoints: &[EndpointDescriptor],
) -> anyhow::Result<OutputFormat> {
    let path_ref = path.as_ref();
    let format = OutputFormat::from_path(path_ref)?;
    let body = format.render(endpoints)?;
    tokio::fs::write(path_ref, body)
        .await
        .with_context(|| format!("failed to write {}", path_ref.display()))?;
    tracing::debug!(path = %path_ref.display(), count = endpoints.len(), ?format, "exported endpoints");
    Ok(format)
}
