// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;

/// Runtime configuration, from command-line flags or environment variables
#[derive(Debug, Clone, Parser)]
#[command(
    name = "movie-search",
    version = crate::app::VERSION,
    about = "Movie catalog search API backed by Elasticsearch"
)]
pub struct Config {
    /// Address the HTTP server listens on
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:7000")]
    pub bind: SocketAddr,

    /// Elasticsearch node, as a URL or bare host:port
    #[arg(long, env = "ELASTICSEARCH_URL", default_value = "http://localhost:9200")]
    pub elasticsearch_url: String,

    /// Index holding the movie documents
    #[arg(long, env = "ELASTICSEARCH_INDEX", default_value = "movie_index")]
    pub index: String,

    /// Timeout for a single search engine request
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Default log level when RUST_LOG is not set
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
