// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Basegate: trust-tiered client gateway for a hosted backend.
//!
//! Owns two backend client handles — an admin-tier client built eagerly at
//! startup from server-only credentials, and an anonymous-tier client built
//! lazily, at most once per process — and serves read-only diagnostic
//! endpoints for configuration and request-cookie state.

pub mod client;
pub mod config;
pub mod credential;
pub mod error;
pub mod state;
pub mod transport;

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::config::GatewayConfig;
use crate::state::GatewayState;
use crate::transport::build_router;

/// Run the gateway until shutdown.
pub async fn run(config: GatewayConfig) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let shutdown = CancellationToken::new();

    // Missing credentials abort here, before any request is served. A
    // privileged client with an undefined key must never come up half-built.
    let state = Arc::new(GatewayState::new(config, shutdown.clone())?);

    let has_auth = state.config.auth_token.is_some();
    if has_auth {
        tracing::info!("basegate listening on {addr} (bearer auth enabled)");
    } else {
        tracing::info!("basegate listening on {addr}");
    }

    let router = build_router(state);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown.cancelled_owned()).await?;

    Ok(())
}
