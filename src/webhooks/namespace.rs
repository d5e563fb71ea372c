// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The namespace deletion protection webhook, built in code rather than from a
//! template so its rule set can never drift from the controller's serving path

use k8s_openapi::api::admissionregistration::v1::{
    RuleWithOperations, ServiceReference, ValidatingWebhook, ValidatingWebhookConfiguration,
    WebhookClientConfig,
};
use k8s_openapi::ByteString;
use kube::api::ObjectMeta;

use crate::constants::webhooks::{
    NAMESPACE_WEBHOOK_ENTRY, NAMESPACE_WEBHOOK_NAME, NAMESPACE_WEBHOOK_PATH,
};
use crate::webhooks::ServiceOverride;

/// Build the webhook configuration that intercepts namespace deletions.
/// Failure policy is Fail: if the controller is unreachable the deletion is
/// rejected rather than waved through.
pub fn namespace_protection_webhook(service: &ServiceOverride) -> ValidatingWebhookConfiguration {
    ValidatingWebhookConfiguration {
        metadata: ObjectMeta {
            name: Some(format!("{}{}", service.name_prefix, NAMESPACE_WEBHOOK_NAME)),
            ..Default::default()
        },
        webhooks: Some(vec![ValidatingWebhook {
            name: NAMESPACE_WEBHOOK_ENTRY.to_string(),
            admission_review_versions: vec!["v1".to_string()],
            side_effects: "None".to_string(),
            failure_policy: Some("Fail".to_string()),
            client_config: WebhookClientConfig {
                ca_bundle: Some(ByteString(service.ca_bundle.clone())),
                service: Some(ServiceReference {
                    name: service.name.clone(),
                    namespace: service.namespace.clone(),
                    path: Some(NAMESPACE_WEBHOOK_PATH.to_string()),
                    port: Some(service.port),
                }),
                ..Default::default()
            },
            rules: Some(vec![RuleWithOperations {
                operations: Some(vec!["DELETE".to_string()]),
                api_groups: Some(vec!["".to_string()]),
                api_versions: Some(vec!["*".to_string()]),
                resources: Some(vec!["namespaces".to_string()]),
                scope: None,
            }]),
            ..Default::default()
        }]),
    }
}
