// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP transport for the gateway.

pub mod auth;
pub mod debug;
pub mod http;

use std::sync::Arc;

use axum::middleware;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::state::GatewayState;

/// Build the axum `Router` with all gateway routes.
pub fn build_router(state: Arc<GatewayState>) -> Router {
    Router::new()
        // Health (no auth)
        .route("/api/v1/health", get(http::health))
        // Diagnostics
        .route("/api/v1/debug/env", get(debug::env_check))
        .route("/api/v1/debug/cookies", get(debug::cookies))
        // Admin-tier passthrough
        .route("/api/v1/admin/users", get(http::admin_users).post(http::admin_create_user))
        // Anonymous-tier passthrough
        .route("/api/v1/auth/settings", get(http::auth_settings))
        // Middleware
        .layer(middleware::from_fn_with_state(state.clone(), auth::auth_layer))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
