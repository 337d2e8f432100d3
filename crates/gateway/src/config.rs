// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

/// Configuration for the basegate gateway.
///
/// The four backend credential values are optional at this layer so the
/// diagnostic endpoint can report their presence; they are validated into
/// credential structs at startup (see [`crate::credential`]).
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "basegate", about = "Trust-tiered client gateway for a hosted backend")]
pub struct GatewayConfig {
    /// Host to bind on.
    #[arg(long, default_value = "127.0.0.1", env = "BASEGATE_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 9910, env = "BASEGATE_PORT")]
    pub port: u16,

    /// Bearer token for the gateway's own API. If unset, auth is disabled.
    #[arg(long, env = "BASEGATE_AUTH_TOKEN")]
    pub auth_token: Option<String>,

    /// Backend endpoint for the admin-tier client.
    #[arg(long, env = "SUPABASE_SERVICE_URL")]
    pub service_url: Option<String>,

    /// Service role key for the admin-tier client. Server-only secret.
    #[arg(long, env = "SUPABASE_SERVICE_ROLE_KEY", hide_env_values = true)]
    pub service_role_key: Option<String>,

    /// Backend endpoint for the anonymous-tier client.
    #[arg(long, env = "SUPABASE_URL")]
    pub public_url: Option<String>,

    /// Publishable anonymous key for the anonymous-tier client.
    #[arg(long, env = "SUPABASE_ANON_KEY")]
    pub anon_key: Option<String>,

    /// Public base URL of the app this gateway fronts. Diagnostic only.
    #[arg(long, env = "PUBLIC_BASE_URL")]
    pub public_base_url: Option<String>,
}
