// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Decoded webhook configuration objects and the client connection override

use k8s_openapi::api::admissionregistration::v1::{
    MutatingWebhookConfiguration, ServiceReference, ValidatingWebhookConfiguration,
    WebhookClientConfig,
};
use k8s_openapi::ByteString;
use kube::ResourceExt;

use crate::constants::webhooks::{SERVICE_NAME, SERVICE_PORT};
use crate::error::{Result, WardenError};

/// The client connection settings injected into every webhook entry, computed
/// once per reconciliation pass
#[derive(Debug, Clone)]
pub struct ServiceOverride {
    /// PEM encoded certificate authority the API server trusts us with
    pub ca_bundle: Vec<u8>,
    /// Namespace of the Service backing the webhook endpoint
    pub namespace: String,
    /// Name of the Service backing the webhook endpoint
    pub name: String,
    /// Port of the Service backing the webhook endpoint
    pub port: i32,
    /// Optional prefix applied to every reconciled webhook name
    pub name_prefix: String,
}

impl ServiceOverride {
    pub fn new(ca_bundle: Vec<u8>, namespace: &str, name_prefix: &str) -> Self {
        Self {
            ca_bundle,
            namespace: namespace.to_string(),
            name: SERVICE_NAME.to_string(),
            port: SERVICE_PORT,
            name_prefix: name_prefix.to_string(),
        }
    }
}

/// A decoded admission webhook configuration, one of the two kinds the
/// API server knows about
#[derive(Debug, Clone)]
pub enum WebhookConfiguration {
    Validating(ValidatingWebhookConfiguration),
    Mutating(MutatingWebhookConfiguration),
}

impl WebhookConfiguration {
    /// Decode a single YAML document into a webhook configuration.
    /// Any other kind means the manifest bundle is corrupt or incompatible.
    pub fn decode(document: &str) -> Result<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(document)?;
        let kind = value
            .get("kind")
            .and_then(serde_yaml::Value::as_str)
            .unwrap_or_default()
            .to_string();

        match kind.as_str() {
            "ValidatingWebhookConfiguration" => {
                Ok(Self::Validating(serde_yaml::from_value(value)?))
            }
            "MutatingWebhookConfiguration" => Ok(Self::Mutating(serde_yaml::from_value(value)?)),
            _ => Err(WardenError::UnexpectedKind(kind)),
        }
    }

    /// Point every webhook entry at the override's service and CA bundle, and
    /// prefix the object name
    pub fn apply_override(&mut self, service: &ServiceOverride) {
        match self {
            Self::Validating(object) => {
                object.metadata.name =
                    Some(format!("{}{}", service.name_prefix, object.name_any()));
                for webhook in object.webhooks.iter_mut().flatten() {
                    apply_client_config(&mut webhook.client_config, service);
                }
            }
            Self::Mutating(object) => {
                object.metadata.name =
                    Some(format!("{}{}", service.name_prefix, object.name_any()));
                for webhook in object.webhooks.iter_mut().flatten() {
                    apply_client_config(&mut webhook.client_config, service);
                }
            }
        }
    }

    /// Object name, empty until decoded metadata carries one
    pub fn name(&self) -> String {
        match self {
            Self::Validating(object) => object.name_any(),
            Self::Mutating(object) => object.name_any(),
        }
    }
}

fn apply_client_config(config: &mut WebhookClientConfig, service: &ServiceOverride) {
    config.ca_bundle = Some(ByteString(service.ca_bundle.clone()));

    let reference = config.service.get_or_insert_with(ServiceReference::default);
    reference.name = service.name.clone();
    reference.namespace = service.namespace.clone();
    reference.port = Some(service.port);
}
