// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use kube::Client;
use tracing::info;

use warden::config::Config;
use warden::webhooks::sync_webhooks;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Warden webhook synchronizer");

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: service_namespace={}, webhooks_managed={}",
        config.service_namespace, config.enable_webhooks
    );

    // Create Kubernetes client
    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    // One reconciliation pass: register the webhooks when managed, remove
    // them when not
    sync_webhooks(&client, &config, config.enable_webhooks).await?;

    info!("Webhook synchronization complete");
    Ok(())
}
