// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP handlers for health and backend passthrough endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::error::GatewayError;
use crate::state::GatewayState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub public_client_initialized: bool,
}

/// `GET /api/v1/health`
pub async fn health(State(s): State<Arc<GatewayState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "running".to_owned(),
        public_client_initialized: s.public_client_initialized(),
    })
}

/// `GET /api/v1/admin/users` — list users via the admin-tier client.
pub async fn admin_users(State(s): State<Arc<GatewayState>>) -> impl IntoResponse {
    match s.admin.admin_list_users().await {
        Ok(value) => Json(value).into_response(),
        Err(e) => {
            tracing::warn!(err = %e, "admin user listing failed");
            GatewayError::BackendError
                .to_http_response(format!("backend error: {e}"))
                .into_response()
        }
    }
}

/// `POST /api/v1/admin/users` — create a user via the admin-tier client.
pub async fn admin_create_user(
    State(s): State<Arc<GatewayState>>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    match s.admin.admin_create_user(&body).await {
        Ok(value) => Json(value).into_response(),
        Err(e) => {
            tracing::warn!(err = %e, "admin user creation failed");
            GatewayError::BackendError
                .to_http_response(format!("backend error: {e}"))
                .into_response()
        }
    }
}

/// `GET /api/v1/auth/settings` — public auth settings via the
/// anonymous-tier client. First call constructs the singleton handle.
pub async fn auth_settings(State(s): State<Arc<GatewayState>>) -> impl IntoResponse {
    let client = match s.public_client() {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(err = %e, "public client construction failed");
            return GatewayError::Internal
                .to_http_response(format!("client construction failed: {e}"))
                .into_response();
        }
    };
    match client.auth_settings().await {
        Ok(value) => Json(value).into_response(),
        Err(e) => {
            tracing::warn!(err = %e, "auth settings fetch failed");
            GatewayError::BackendError
                .to_http_response(format!("backend error: {e}"))
                .into_response()
        }
    }
}
