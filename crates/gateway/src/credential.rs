// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Trust-tiered backend credentials.
//!
//! Two distinct structs rather than one credential type with a trust flag,
//! so a privileged credential can never be handed to a code path that
//! expects a public one.

use std::fmt;

use crate::config::GatewayConfig;

/// Server-only credentials for the admin-tier client.
///
/// The service role key bypasses per-user access policy. The key field is
/// private, `Debug` redacts it, and the struct has no `Serialize` impl, so
/// it cannot end up in a response body.
pub struct PrivilegedCredentials {
    pub url: String,
    service_role_key: String,
}

impl PrivilegedCredentials {
    /// Read both privileged values from config, failing if either is absent.
    pub fn from_config(config: &GatewayConfig) -> anyhow::Result<Self> {
        let url = config
            .service_url
            .clone()
            .ok_or_else(|| anyhow::anyhow!("SUPABASE_SERVICE_URL is not set"))?;
        let service_role_key = config
            .service_role_key
            .clone()
            .ok_or_else(|| anyhow::anyhow!("SUPABASE_SERVICE_ROLE_KEY is not set"))?;
        Ok(Self { url, service_role_key })
    }

    pub fn service_role_key(&self) -> &str {
        &self.service_role_key
    }
}

impl fmt::Debug for PrivilegedCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivilegedCredentials")
            .field("url", &self.url)
            .field("service_role_key", &"<redacted>")
            .finish()
    }
}

/// Publishable credentials for the anonymous-tier client.
///
/// The anon key is safe to embed in client-facing code; access policy is
/// enforced backend-side.
#[derive(Debug, Clone)]
pub struct PublicCredentials {
    pub url: String,
    pub anon_key: String,
}

impl PublicCredentials {
    /// Read both public values from config, failing if either is absent.
    pub fn from_config(config: &GatewayConfig) -> anyhow::Result<Self> {
        let url =
            config.public_url.clone().ok_or_else(|| anyhow::anyhow!("SUPABASE_URL is not set"))?;
        let anon_key = config
            .anon_key
            .clone()
            .ok_or_else(|| anyhow::anyhow!("SUPABASE_ANON_KEY is not set"))?;
        Ok(Self { url, anon_key })
    }
}

#[cfg(test)]
#[path = "credential_tests.rs"]
mod tests;
