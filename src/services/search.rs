// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::error::{SearchError, SearchResult};
use crate::models::aggregation::{aggregation_spec, Facets};
use crate::models::engine::{RawSearchResponse, SearchBody};
use crate::models::movie::{Movie, MovieResponse, SearchRequest};
use crate::services::{facets, query_compiler};
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Elasticsearch client for searching the movie index
pub struct SearchClient {
    http: reqwest::Client,
    search_url: Url,
    index_name: String,
}

impl SearchClient {
    /// Create a new client. `host` may be a full URL or a bare `host:port`.
    pub fn new(host: &str, index_name: String, timeout: Duration) -> SearchResult<Self> {
        // Construct the full URL if only host:port is provided
        let mut base = if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("http://{}", host)
        };
        if !base.ends_with('/') {
            base.push('/');
        }

        let search_url = Url::parse(&base)?.join(&format!("{}/_search", index_name))?;
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        info!(url = %search_url, "Configured Elasticsearch client");

        Ok(Self {
            http,
            search_url,
            index_name,
        })
    }

    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    pub fn search_url(&self) -> &Url {
        &self.search_url
    }

    /// Run a filtered, paginated search and shape the result for the UI
    #[instrument(skip_all, fields(index = %self.index_name))]
    pub async fn search(&self, request: &SearchRequest) -> SearchResult<MovieResponse> {
        let compiled = query_compiler::compile(request);
        let body = SearchBody {
            from: compiled.from,
            size: compiled.size,
            query: compiled.query.as_ref(),
            aggs: aggregation_spec(),
        };

        let raw = self.execute(&body).await?;
        let response = to_response(raw);

        info!(
            took_ms = response.search_duration,
            total = response.total,
            returned = response.movies.len(),
            "Search completed"
        );

        Ok(response)
    }

    /// Facets over the whole index, without fetching any hits
    #[instrument(skip_all, fields(index = %self.index_name))]
    pub async fn facets(&self) -> SearchResult<Facets> {
        let body = SearchBody {
            from: 0,
            size: 0,
            query: None,
            aggs: aggregation_spec(),
        };

        let raw = self.execute(&body).await?;
        Ok(facets::translate(raw.aggregations.as_ref()))
    }

    async fn execute(&self, body: &SearchBody<'_>) -> SearchResult<RawSearchResponse> {
        let payload = serde_json::to_vec(body)?;
        debug!(body = %String::from_utf8_lossy(&payload), "Sending search request");

        let response = self
            .http
            .post(self.search_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let err = SearchError::engine(status.as_u16(), &bytes);
            warn!(error = %err, "Search engine rejected request");
            return Err(err);
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Map an engine response into the public response shape.
pub fn to_response(raw: RawSearchResponse) -> MovieResponse {
    let facets = facets::translate(raw.aggregations.as_ref());
    let movies = raw.hits.hits.into_iter().map(Movie::from).collect();

    MovieResponse {
        search_duration: raw.took,
        total: raw.hits.total.value,
        movies,
        facets,
    }
}
