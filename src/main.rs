// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use anyhow::Context;
use clap::Parser;
use movie_search::app::{create_router, AppState, VERSION};
use movie_search::config::Config;
use movie_search::services::logging::init_tracing;
use movie_search::services::search::SearchClient;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_tracing(&config.log_level);

    let search_client = SearchClient::new(
        &config.elasticsearch_url,
        config.index.clone(),
        config.request_timeout(),
    )
    .context("Failed to configure Elasticsearch client")?;

    let state = AppState {
        search_client: Arc::new(search_client),
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;

    info!(addr = %config.bind, index = %config.index, "movie-search v{} listening", VERSION);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down");
    }
}
