// SPDX-FileCopyrightText: 2025 Alexandre Gomes Gaigalas <alganet@gmail.com>
//
// SPDX-License-Identifier: ISC

//! Helper utilities shared by the extractor, aggregator and filters.

pub mod timestamp;
pub mod token;
pub mod uri;
