// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Group aggregated endpoints by the domain that serves them.

use std::collections::BTreeMap;

use crate::endpoint::EndpointDescriptor;

/// Return the endpoints served by `domain` (case-insensitive), keeping their
/// order.
pub fn by_domain<'a>(
    endpoints: &'a [EndpointDescriptor],
    domain: &str,
) -> Vec<&'a EndpointDescriptor> {
    endpoints
        .iter()
        .filter(|d| d.domain.eq_ignore_ascii_case(domain))
        .collect()
}

/// Number of distinct endpoints per domain, sorted by domain.
pub fn endpoint_counts(endpoints: &[EndpointDescriptor]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for d in endpoints {
        *counts.entry(d.domain.clone()).or_insert(0) += 1;
    }
    counts
}
