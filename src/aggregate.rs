// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Endpoint aggregation: transactions to deduplicated endpoint descriptors.
//!
//! Each `(method, domain, normalized path)` key maps to exactly one
//! descriptor, which is created on first sight and updated in place for every
//! later transaction with the same key. An aggregator lives for one run only.

use serde::Serialize;
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::endpoint::{EndpointDescriptor, EndpointKey};
use crate::error::InspectError;
use crate::extract::extract_transactions;
use crate::filter::{FilterCriteria, FilterOptions};
use crate::helpers::uri::split_url;
use crate::transaction::Transaction;

/// In-memory dedup table for one aggregation run.
#[derive(Debug, Default)]
pub struct EndpointAggregator {
    index: HashMap<EndpointKey, usize>,
    endpoints: Vec<EndpointDescriptor>,
    transactions: usize,
}

impl EndpointAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a transaction into the table.
    ///
    /// Returns `false` when the URL carries no usable host, in which case the
    /// transaction is ignored. The extractor never yields such transactions.
    pub fn record(&mut self, tx: &Transaction) -> bool {
        let Some(parts) = split_url(&tx.url) else {
            tracing::debug!(url = %tx.url, "ignoring transaction without absolute url");
            return false;
        };
        self.transactions += 1;

        let key = EndpointKey::new(&tx.method, &parts);
        match self.index.get(&key) {
            Some(&slot) => self.endpoints[slot].observe(tx),
            None => {
                self.index.insert(key.clone(), self.endpoints.len());
                self.endpoints
                    .push(EndpointDescriptor::open(key, &parts.scheme, tx));
            }
        }
        true
    }

    /// Number of distinct endpoints recorded so far.
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Number of transactions folded in so far.
    pub fn transactions(&self) -> usize {
        self.transactions
    }

    /// Apply `criteria` and return the survivors ordered by `first_seen`.
    ///
    /// The sort is stable, so ties keep insertion order. Endpoints that never
    /// saw a timestamp go last.
    pub fn into_endpoints(self, criteria: &FilterCriteria) -> Vec<EndpointDescriptor> {
        let mut out: Vec<_> = self
            .endpoints
            .into_iter()
            .filter(|d| criteria.matches(d))
            .collect();
        out.sort_by(|a, b| match (a.first_seen, b.first_seen) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        out
    }
}

/// Aggregate a transaction stream and apply `criteria`.
pub fn aggregate<I>(transactions: I, criteria: &FilterCriteria) -> Vec<EndpointDescriptor>
where
    I: IntoIterator<Item = Transaction>,
{
    let mut agg = EndpointAggregator::new();
    for tx in transactions {
        agg.record(&tx);
    }
    agg.into_endpoints(criteria)
}

/// Result of one full inspection run.
#[derive(Debug, Clone, Serialize)]
pub struct Inspection {
    pub endpoints: Vec<EndpointDescriptor>,
    /// Transactions that were aggregated.
    pub transactions: usize,
    /// Archive entries skipped as unreadable.
    pub skipped: usize,
}

/// Validate `opts`, then extract and aggregate `archive`.
///
/// Filter validation happens before the archive is touched, so an invalid
/// filter never yields a partial result.
pub fn inspect(archive: &Value, opts: &FilterOptions) -> Result<Inspection, InspectError> {
    let criteria = FilterCriteria::from_options(opts)?;
    inspect_with(archive, &criteria)
}

/// Extract and aggregate `archive` with already validated criteria.
pub fn inspect_with(archive: &Value, criteria: &FilterCriteria) -> Result<Inspection, InspectError> {
    let mut extractor = extract_transactions(archive)?;
    let mut agg = EndpointAggregator::new();
    for tx in extractor.by_ref() {
        agg.record(&tx);
    }

    let skipped = extractor.skipped();
    let transactions = agg.transactions();
    let distinct = agg.len();
    let endpoints = agg.into_endpoints(criteria);

    tracing::debug!(
        transactions,
        skipped,
        distinct,
        matched = endpoints.len(),
        "aggregated archive"
    );

    Ok(Inspection {
        endpoints,
        transactions,
        skipped,
    })
}
