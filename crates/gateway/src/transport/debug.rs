// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only diagnostic handlers: configuration presence and request
//! cookie state. No side effects, no secret material in responses.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::config::GatewayConfig;
use crate::state::GatewayState;

/// Cookie holding the backend auth session, set by the sign-in flow.
const AUTH_TOKEN_COOKIE: &str = "supabase-auth-token";
/// Cookie injected by test tooling to impersonate a user.
const MOCK_USER_COOKIE: &str = "mock-user-id";

/// How many characters of each cookie value the diagnostic echoes.
const COOKIE_VALUE_PREFIX: usize = 50;

/// Presence report keyed by environment variable name. Secret-bearing
/// fields report only `SET`/`MISSING`; the base URL is not a secret and is
/// echoed literally.
#[derive(Debug, Serialize)]
pub struct EnvReport {
    #[serde(rename = "SUPABASE_SERVICE_URL")]
    pub service_url: &'static str,
    #[serde(rename = "SUPABASE_SERVICE_ROLE_KEY")]
    pub service_role_key: &'static str,
    #[serde(rename = "SUPABASE_URL")]
    pub public_url: &'static str,
    #[serde(rename = "SUPABASE_ANON_KEY")]
    pub anon_key: &'static str,
    #[serde(rename = "PUBLIC_BASE_URL")]
    pub public_base_url: String,
}

impl EnvReport {
    pub fn from_config(config: &GatewayConfig) -> Self {
        Self {
            service_url: presence(&config.service_url),
            service_role_key: presence(&config.service_role_key),
            public_url: presence(&config.public_url),
            anon_key: presence(&config.anon_key),
            public_base_url: config
                .public_base_url
                .clone()
                .unwrap_or_else(|| "NOT SET".to_owned()),
        }
    }
}

fn presence(value: &Option<String>) -> &'static str {
    if value.is_some() {
        "SET"
    } else {
        "MISSING"
    }
}

#[derive(Debug, Serialize)]
pub struct CookieEntry {
    pub name: String,
    pub value: String,
    #[serde(rename = "hasValue")]
    pub has_value: bool,
}

#[derive(Debug, Serialize)]
pub struct CookieReport {
    pub cookies: Vec<CookieEntry>,
    pub count: usize,
    #[serde(rename = "hasAuthToken")]
    pub has_auth_token: bool,
    #[serde(rename = "hasMockUser")]
    pub has_mock_user: bool,
}

/// `GET /api/v1/debug/env` — report presence of required configuration.
pub async fn env_check(State(s): State<Arc<GatewayState>>) -> impl IntoResponse {
    Json(EnvReport::from_config(&s.config))
}

/// `GET /api/v1/debug/cookies` — echo request cookie state, values
/// truncated to a fixed-length prefix.
pub async fn cookies(headers: HeaderMap) -> impl IntoResponse {
    Json(cookie_report(&headers))
}

fn cookie_report(headers: &HeaderMap) -> CookieReport {
    let mut entries = Vec::new();
    let mut has_auth_token = false;
    let mut has_mock_user = false;

    for header in headers.get_all(header::COOKIE) {
        let Ok(raw) = header.to_str() else { continue };
        for (name, value) in parse_cookie_header(raw) {
            if name == AUTH_TOKEN_COOKIE {
                has_auth_token = true;
            }
            if name == MOCK_USER_COOKIE {
                has_mock_user = true;
            }
            entries.push(CookieEntry {
                name,
                has_value: !value.is_empty(),
                value: truncate_value(&value),
            });
        }
    }

    CookieReport { count: entries.len(), cookies: entries, has_auth_token, has_mock_user }
}

/// Parse a `Cookie` header into (name, value) pairs, preserving order.
fn parse_cookie_header(header: &str) -> Vec<(String, String)> {
    header
        .split(';')
        .filter_map(|pair| {
            let pair = pair.trim();
            if pair.is_empty() {
                return None;
            }
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            Some((name.to_owned(), value.to_owned()))
        })
        .collect()
}

/// First `COOKIE_VALUE_PREFIX` characters plus a literal `...` suffix.
///
/// The suffix is appended even when the value is shorter than the prefix;
/// consumers of this endpoint parse that exact shape.
fn truncate_value(value: &str) -> String {
    let head: String = value.chars().take(COOKIE_VALUE_PREFIX).collect();
    format!("{head}...")
}

#[cfg(test)]
#[path = "debug_tests.rs"]
mod tests;
