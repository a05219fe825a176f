// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Read-only views over transactions and aggregated endpoints.
//!
//! Queries never mutate their input and never touch the aggregator; they
//! work on whatever the caller already has in hand.

pub mod by_domain;
pub mod domains;
