// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Wire types for the Elasticsearch `_search` endpoint.

use crate::models::aggregation::AggregationSpec;
use crate::models::movie::{Movie, MovieSource};
use crate::models::query::Query;
use serde::{Deserialize, Serialize};

/// Request body for `POST /{index}/_search`.
#[derive(Debug, Clone, Serialize)]
pub struct SearchBody<'a> {
    pub from: u64,
    pub size: u64,
    /// Omitted entirely to match every document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<&'a Query>,
    pub aggs: &'a AggregationSpec,
}

/// The parts of a search response this service reads.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSearchResponse {
    /// Milliseconds spent by the engine
    #[serde(default)]
    pub took: u64,
    #[serde(default)]
    pub hits: RawHits,
    /// Left untyped so a missing or odd-shaped aggregation only empties
    /// its own facet
    #[serde(default)]
    pub aggregations: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawHits {
    #[serde(default)]
    pub total: RawTotal,
    #[serde(default)]
    pub hits: Vec<RawHit>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTotal {
    #[serde(default)]
    pub value: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawHit {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_source", default)]
    pub source: MovieSource,
}

impl From<RawHit> for Movie {
    fn from(hit: RawHit) -> Self {
        Movie::from_source(hit.id, hit.source)
    }
}
