// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Single pass webhook reconciliation against the live cluster

use kube::{Client, Resource, ResourceExt};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{info, instrument};

use crate::config::Config;
use crate::error::{Result, WardenError};
use crate::kubernetes::{create_or_force_update, delete_if_exists};
use crate::manifests;
use crate::webhooks::{namespace_protection_webhook, ServiceOverride, WebhookConfiguration};

/// Register or remove the controller's admission webhooks.
///
/// With `managed` set, every template derived webhook is created or updated
/// and the namespace protection webhook follows its own feature flag. Without
/// it, every webhook this controller ever registered is deleted. The first
/// failing object aborts the pass; objects already reconciled stay as they are.
#[instrument(skip(client, config))]
pub async fn sync_webhooks(client: &Client, config: &Config, managed: bool) -> Result<()> {
    info!(managed, "attempting to manage the controller webhooks");

    let ca_bundle = tokio::fs::read(&config.tls_authority).await.map_err(|source| {
        WardenError::CertificateAuthority {
            path: config.tls_authority.clone(),
            source,
        }
    })?;
    let service = ServiceOverride::new(
        ca_bundle,
        &config.service_namespace,
        &config.webhook_name_prefix(),
    );

    for document in manifests::webhook_documents()? {
        let mut configuration = WebhookConfiguration::decode(&document)?;
        configuration.apply_override(&service);
        reconcile_configuration(client, &configuration, managed).await?;
    }

    let protection = namespace_protection_webhook(&service);
    if managed && config.enable_namespace_protection {
        info!(webhook = %protection.name_any(), "registering the namespace webhook");
        create_or_force_update(client, &protection).await
    } else {
        info!(webhook = %protection.name_any(), "deleting any previous namespace webhook");
        delete_if_exists(client, &protection).await
    }
}

async fn reconcile_configuration(
    client: &Client,
    configuration: &WebhookConfiguration,
    managed: bool,
) -> Result<()> {
    match configuration {
        WebhookConfiguration::Validating(object) => reconcile_object(client, object, managed).await,
        WebhookConfiguration::Mutating(object) => reconcile_object(client, object, managed).await,
    }
}

async fn reconcile_object<K>(client: &Client, object: &K, managed: bool) -> Result<()>
where
    K: Resource<DynamicType = ()> + Clone + std::fmt::Debug + Serialize + DeserializeOwned,
{
    if managed {
        info!(webhook = %object.name_any(), "registering the webhook");
        create_or_force_update(client, object).await
    } else {
        info!(webhook = %object.name_any(), "deleting any previous webhooks");
        delete_if_exists(client, object).await
    }
}
