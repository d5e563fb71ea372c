// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;

use crate::constants::DEFAULT_TLS_AUTHORITY;

/// Operator configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace the controller Service lives in; webhook client configs point here
    pub service_namespace: String,
    /// Path to the PEM encoded certificate authority bundle
    pub tls_authority: PathBuf,
    /// Whether this instance manages its own admission webhooks
    pub enable_webhooks: bool,
    /// Prefix reconciled webhook names with the operator name
    pub enable_webhook_prefix: bool,
    /// Register the namespace deletion protection webhook
    pub enable_namespace_protection: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let service_namespace =
            env::var("KUBE_NAMESPACE").context("KUBE_NAMESPACE environment variable not set")?;
        // A webhook pointing at a service in no namespace can never be reached
        if service_namespace.is_empty() {
            bail!("KUBE_NAMESPACE environment variable must not be empty");
        }

        let tls_authority: PathBuf = env::var("TLS_AUTHORITY")
            .unwrap_or(DEFAULT_TLS_AUTHORITY.to_string())
            .into();

        let enable_webhooks: bool = env::var("ENABLE_WEBHOOKS")
            .unwrap_or("true".to_string())
            .parse()
            .unwrap_or(true);
        let enable_webhook_prefix: bool = env::var("ENABLE_WEBHOOK_PREFIX")
            .unwrap_or("false".to_string())
            .parse()
            .unwrap_or(false);
        let enable_namespace_protection: bool = env::var("ENABLE_NAMESPACE_PROTECTION")
            .unwrap_or("false".to_string())
            .parse()
            .unwrap_or(false);

        Ok(Config {
            service_namespace,
            tls_authority,
            enable_webhooks,
            enable_webhook_prefix,
            enable_namespace_protection,
        })
    }

    /// The prefix applied to every reconciled webhook name, empty when disabled
    pub fn webhook_name_prefix(&self) -> String {
        if self.enable_webhook_prefix {
            format!("{}-", crate::constants::OPERATOR_NAME)
        } else {
            String::new()
        }
    }
}
