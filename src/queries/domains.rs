// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Distinct domains seen in an archive.

use std::collections::BTreeSet;

use crate::helpers::uri::split_url;
use crate::transaction::Transaction;

/// Return every distinct host contacted, sorted.
pub fn unique_domains<'a, I>(transactions: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .filter_map(|tx| split_url(&tx.url))
        .map(|parts| parts.host)
        .collect()
}
