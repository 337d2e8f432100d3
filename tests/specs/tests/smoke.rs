// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end smoke tests that spawn the real `basegate` binary and
//! exercise its HTTP surface.

use std::time::Duration;

use basegate_specs::GatewayProcess;

const TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::test]
async fn http_health() -> anyhow::Result<()> {
    let gateway = GatewayProcess::start(&[])?;
    gateway.wait_healthy(TIMEOUT).await?;

    let resp: serde_json::Value =
        reqwest::get(format!("{}/api/v1/health", gateway.base_url())).await?.json().await?;

    assert_eq!(resp["status"], "running");
    assert_eq!(resp["public_client_initialized"], false);
    Ok(())
}

#[tokio::test]
async fn debug_env_reports_presence() -> anyhow::Result<()> {
    let gateway = GatewayProcess::start(&[("PUBLIC_BASE_URL", "https://app.example.com")])?;
    gateway.wait_healthy(TIMEOUT).await?;

    let resp: serde_json::Value =
        reqwest::get(format!("{}/api/v1/debug/env", gateway.base_url())).await?.json().await?;

    assert_eq!(resp["SUPABASE_SERVICE_URL"], "SET");
    assert_eq!(resp["SUPABASE_SERVICE_ROLE_KEY"], "SET");
    assert_eq!(resp["SUPABASE_URL"], "SET");
    assert_eq!(resp["SUPABASE_ANON_KEY"], "SET");
    assert_eq!(resp["PUBLIC_BASE_URL"], "https://app.example.com");
    Ok(())
}

#[tokio::test]
async fn debug_env_never_leaks_key_material() -> anyhow::Result<()> {
    let gateway = GatewayProcess::start(&[])?;
    gateway.wait_healthy(TIMEOUT).await?;

    let body =
        reqwest::get(format!("{}/api/v1/debug/env", gateway.base_url())).await?.text().await?;
    assert!(!body.contains("service-role-smoke-key"));
    Ok(())
}

#[tokio::test]
async fn debug_cookies_truncates_and_flags() -> anyhow::Result<()> {
    let gateway = GatewayProcess::start(&[])?;
    gateway.wait_healthy(TIMEOUT).await?;

    let client = reqwest::Client::new();
    let long = "t".repeat(64);
    let resp: serde_json::Value = client
        .get(format!("{}/api/v1/debug/cookies", gateway.base_url()))
        .header("cookie", format!("supabase-auth-token={long}; mock-user-id=u-1; tiny=ab"))
        .send()
        .await?
        .json()
        .await?;

    assert_eq!(resp["count"], 3);
    assert_eq!(resp["hasAuthToken"], true);
    assert_eq!(resp["hasMockUser"], true);
    assert_eq!(resp["cookies"][0]["value"], format!("{}...", "t".repeat(50)));
    assert_eq!(resp["cookies"][2]["value"], "ab...");
    Ok(())
}

#[tokio::test]
async fn bearer_auth_enforced_when_configured() -> anyhow::Result<()> {
    let gateway = GatewayProcess::start(&[("BASEGATE_AUTH_TOKEN", "smoke-token")])?;
    gateway.wait_healthy(TIMEOUT).await?;

    let client = reqwest::Client::new();
    let url = format!("{}/api/v1/debug/env", gateway.base_url());

    let denied = client.get(&url).send().await?;
    assert_eq!(denied.status(), 401);
    let body: serde_json::Value = denied.json().await?;
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");

    let allowed = client.get(&url).bearer_auth("smoke-token").send().await?;
    assert!(allowed.status().is_success());
    Ok(())
}

#[tokio::test]
async fn admin_passthrough_maps_backend_failure() -> anyhow::Result<()> {
    let gateway = GatewayProcess::start(&[])?;
    gateway.wait_healthy(TIMEOUT).await?;

    let resp = reqwest::get(format!("{}/api/v1/admin/users", gateway.base_url())).await?;
    assert_eq!(resp.status(), 502);
    let body: serde_json::Value = resp.json().await?;
    assert_eq!(body["error"]["code"], "BACKEND_ERROR");
    Ok(())
}
