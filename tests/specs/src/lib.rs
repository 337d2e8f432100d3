// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test harness for end-to-end binary smoke tests.
//!
//! Spawns the real `basegate` binary as a subprocess with a fully populated
//! backend environment and exercises it over HTTP.

use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::sync::Once;
use std::time::Duration;

static CRYPTO_INIT: Once = Once::new();

/// Install the ring crypto provider for reqwest/rustls.
/// Safe to call multiple times — only the first call has effect.
pub fn ensure_crypto() {
    CRYPTO_INIT.call_once(|| {
        let _ = rustls::crypto::ring::default_provider().install_default();
    });
}

/// Resolve the path to the compiled `basegate` binary.
pub fn gateway_binary() -> PathBuf {
    let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));
    // tests/specs → tests → workspace root
    let workspace = manifest.parent().and_then(|p| p.parent()).unwrap_or(manifest);
    workspace.join("target").join("debug").join("basegate")
}

/// Find a free TCP port by binding to :0 then releasing.
pub fn free_port() -> anyhow::Result<u16> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    Ok(listener.local_addr()?.port())
}

/// A running `basegate` process that is killed on drop.
pub struct GatewayProcess {
    child: Child,
    port: u16,
}

impl GatewayProcess {
    /// Spawn basegate with complete backend credentials pointing at a
    /// closed port (passthrough calls fail fast; diagnostics don't care).
    pub fn start(extra_env: &[(&str, &str)]) -> anyhow::Result<Self> {
        ensure_crypto();
        let binary = gateway_binary();
        anyhow::ensure!(binary.exists(), "basegate binary not found at {}", binary.display());

        let port = free_port()?;
        let mut cmd = Command::new(&binary);
        cmd.env("BASEGATE_HOST", "127.0.0.1")
            .env("BASEGATE_PORT", port.to_string())
            .env("SUPABASE_SERVICE_URL", "http://127.0.0.1:1")
            .env("SUPABASE_SERVICE_ROLE_KEY", "service-role-smoke-key")
            .env("SUPABASE_URL", "http://127.0.0.1:1")
            .env("SUPABASE_ANON_KEY", "anon-smoke-key")
            .env_remove("BASEGATE_AUTH_TOKEN")
            .env_remove("PUBLIC_BASE_URL");
        for (key, value) in extra_env {
            cmd.env(key, value);
        }
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::null());
        cmd.stderr(Stdio::null());

        let child = cmd.spawn()?;
        Ok(Self { child, port })
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    /// Poll `/api/v1/health` until it answers or the timeout elapses.
    pub async fn wait_healthy(&self, timeout: Duration) -> anyhow::Result<()> {
        let url = format!("{}/api/v1/health", self.base_url());
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            if tokio::time::Instant::now() > deadline {
                anyhow::bail!("basegate never became healthy at {url}");
            }
            if let Ok(resp) = reqwest::get(&url).await {
                if resp.status().is_success() {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
    }
}

impl Drop for GatewayProcess {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
