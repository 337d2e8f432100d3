// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::{Arc, OnceLock};

use tokio_util::sync::CancellationToken;

use crate::client::{BackendClient, ClientOptions};
use crate::config::GatewayConfig;
use crate::credential::{PrivilegedCredentials, PublicCredentials};

/// Shared gateway state.
pub struct GatewayState {
    pub config: GatewayConfig,
    /// Admin-tier client, constructed eagerly at startup.
    pub admin: Arc<BackendClient>,
    /// Anonymous-tier client, constructed at most once, on first use.
    public: OnceLock<Arc<BackendClient>>,
    public_credentials: PublicCredentials,
    pub shutdown: CancellationToken,
}

impl GatewayState {
    /// Validate credentials from config and build state.
    ///
    /// Fails when any required credential is absent, so a misconfigured
    /// deployment never serves requests with a half-configured client.
    pub fn new(config: GatewayConfig, shutdown: CancellationToken) -> anyhow::Result<Self> {
        let privileged = PrivilegedCredentials::from_config(&config)?;
        let public = PublicCredentials::from_config(&config)?;
        Self::with_credentials(config, privileged, public, shutdown)
    }

    /// Build state from already-validated credentials.
    pub fn with_credentials(
        config: GatewayConfig,
        privileged: PrivilegedCredentials,
        public: PublicCredentials,
        shutdown: CancellationToken,
    ) -> anyhow::Result<Self> {
        let admin = Arc::new(BackendClient::new(
            privileged.url.clone(),
            privileged.service_role_key(),
            ClientOptions::privileged(),
        )?);
        Ok(Self { config, admin, public: OnceLock::new(), public_credentials: public, shutdown })
    }

    /// Memoized accessor for the anonymous-tier client.
    ///
    /// Concurrent first callers race benignly: `OnceLock` publishes exactly
    /// one handle, every later call returns that same `Arc`, and a loser's
    /// freshly built handle is dropped unpublished.
    pub fn public_client(&self) -> anyhow::Result<Arc<BackendClient>> {
        if let Some(client) = self.public.get() {
            return Ok(Arc::clone(client));
        }
        let built = Arc::new(BackendClient::new(
            self.public_credentials.url.clone(),
            self.public_credentials.anon_key.clone(),
            ClientOptions::public_default(),
        )?);
        Ok(Arc::clone(self.public.get_or_init(|| built)))
    }

    /// Whether the anonymous-tier client has been constructed yet.
    pub fn public_client_initialized(&self) -> bool {
        self.public.get().is_some()
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
