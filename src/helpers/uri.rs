// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! URL splitting and path normalization for endpoint keys.

use url::Url;

/// The pieces of an absolute URL that make up an endpoint identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    pub scheme: String,
    /// Host only, lowercase. The port is not part of it.
    pub host: String,
    /// Normalized path, see [`normalize_path`].
    pub path: String,
}

/// Split an absolute URL into scheme, host and normalized path.
///
/// Returns `None` when `s` is not an absolute URL or carries no host
/// (e.g. `data:` or `about:blank` entries recorded by browsers).
///
/// Host and path are taken literally from `s`: no dot-segment removal, no
/// percent-encoding and no IDNA conversion. The host is lowercased (ASCII
/// only) and loses its userinfo and port.
pub fn split_url(s: &str) -> Option<UrlParts> {
    let s = s.trim();
    let url = Url::parse(s).ok()?;
    url.host_str().filter(|h| !h.is_empty())?;

    let after_scheme = &s[s.find("://")? + 3..];
    let authority_end = after_scheme
        .find(&['/', '?', '#'][..])
        .unwrap_or(after_scheme.len());
    let host = host_from_authority(&after_scheme[..authority_end])?;

    let rest = &after_scheme[authority_end..];
    let path_end = rest.find(&['?', '#'][..]).unwrap_or(rest.len());

    Some(UrlParts {
        scheme: url.scheme().to_string(),
        host: host.to_ascii_lowercase(),
        path: normalize_path(&rest[..path_end]),
    })
}

/// Strip userinfo and port from a raw authority, keeping IPv6 brackets.
fn host_from_authority(authority: &str) -> Option<&str> {
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, hp)| hp);
    let host = if host_port.starts_with('[') {
        let close = host_port.find(']')?;
        &host_port[..=close]
    } else {
        match host_port.rsplit_once(':') {
            Some((host, port)) if port.chars().all(|c| c.is_ascii_digit()) => host,
            _ => host_port,
        }
    };
    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}

/// Normalize a URL path for endpoint deduplication.
///
/// Strips any query string or fragment, then any trailing `/` unless the
/// path is the root. An empty path becomes `/`. Segments are kept literally:
/// `/users/123` and `/users/456` stay distinct.
pub fn normalize_path(path: &str) -> String {
    let end = path.find(&['?', '#'][..]).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}
