// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Movie catalog search API.
//!
//! Incoming search requests are compiled into Elasticsearch bool queries
//! (`services::query_compiler`), sent together with a fixed set of facet
//! aggregations (`models::aggregation`), and the aggregation buckets that come
//! back are turned into facet lists for the UI (`services::facets`).

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
