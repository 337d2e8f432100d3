// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP client wrapper for the hosted backend's REST surface.
//!
//! Backend errors (network, auth rejection) are surfaced as-is; this layer
//! neither retries nor translates them.

use std::sync::Once;

use reqwest::Client;

static CRYPTO_INIT: Once = Once::new();

/// reqwest is built against rustls with no default crypto provider.
/// Install ring before the first handle is constructed, so construction
/// works the same for the binary, library callers, and tests.
fn ensure_crypto_provider() {
    CRYPTO_INIT.call_once(|| {
        let _ = rustls::crypto::ring::default_provider().install_default();
    });
}

/// Session-management policy for a backend client handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientOptions {
    pub persist_session: bool,
    pub auto_refresh_token: bool,
    pub detect_session_in_url: bool,
}

impl ClientOptions {
    /// Admin-tier policy: every call is a one-shot administrative action,
    /// so no session is stored, refreshed, or parsed from a URL.
    pub fn privileged() -> Self {
        Self { persist_session: false, auto_refresh_token: false, detect_session_in_url: false }
    }

    /// Anonymous-tier policy: interactive sign-in flows need a persisted,
    /// auto-refreshing session and URL-fragment token detection.
    pub fn public_default() -> Self {
        Self { persist_session: true, auto_refresh_token: true, detect_session_in_url: true }
    }
}

/// One backend client handle: endpoint, credential, session policy.
///
/// Immutable after construction and safe to share across concurrently
/// handled requests.
pub struct BackendClient {
    base_url: String,
    api_key: String,
    options: ClientOptions,
    http: Client,
}

impl BackendClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        options: ClientOptions,
    ) -> anyhow::Result<Self> {
        ensure_crypto_provider();
        let http = Client::builder().timeout(std::time::Duration::from_secs(10)).build()?;
        let base_url = base_url.into();
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key: api_key.into(),
            options,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn options(&self) -> ClientOptions {
        self.options
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// The backend expects both its `apikey` header and a bearer token.
    fn apply_auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("apikey", &self.api_key).bearer_auth(&self.api_key)
    }

    /// Auth service health probe.
    pub async fn auth_health(&self) -> anyhow::Result<serde_json::Value> {
        self.get_json("/auth/v1/health").await
    }

    /// Public auth settings (anonymous tier).
    pub async fn auth_settings(&self) -> anyhow::Result<serde_json::Value> {
        self.get_json("/auth/v1/settings").await
    }

    /// List users via the admin auth API (privileged tier).
    pub async fn admin_list_users(&self) -> anyhow::Result<serde_json::Value> {
        self.get_json("/auth/v1/admin/users").await
    }

    /// Create a user via the admin auth API (privileged tier).
    pub async fn admin_create_user(
        &self,
        body: &serde_json::Value,
    ) -> anyhow::Result<serde_json::Value> {
        self.post_json("/auth/v1/admin/users", body).await
    }

    /// GET a backend endpoint and return the JSON body.
    pub async fn get_json(&self, path: &str) -> anyhow::Result<serde_json::Value> {
        let req = self.http.get(self.url(path));
        let resp = self.apply_auth(req).send().await?;
        let value = resp.error_for_status()?.json().await?;
        Ok(value)
    }

    /// POST JSON to a backend endpoint and return the response body.
    pub async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> anyhow::Result<serde_json::Value> {
        let req = self.http.post(self.url(path)).json(body);
        let resp = self.apply_auth(req).send().await?.error_for_status()?;
        let bytes = resp.bytes().await?;
        if bytes.is_empty() {
            return Ok(serde_json::Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
