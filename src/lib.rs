// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Endpoint extraction from HTTP Archive (HAR) captures.
//!
//! This library provides the core functionality for har-endpoints: entry
//! extraction, endpoint deduplication, filtering, and export.

pub mod aggregate;
pub mod archive;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod export;
pub mod extract;
pub mod filter;
pub mod helpers;
pub mod queries;
pub mod transaction;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use aggregate::{aggregate, inspect, inspect_with, EndpointAggregator, Inspection};
pub use endpoint::{EndpointDescriptor, EndpointKey};
pub use error::InspectError;
pub use filter::{FilterCriteria, FilterOptions};
pub use transaction::Transaction;

// Keep library small; main.rs remains the binary entrypoint.
