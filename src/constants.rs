// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// The operator name, used as the server-side apply field manager and as the
/// optional webhook name prefix
pub const OPERATOR_NAME: &str = "warden";

/// Default location of the PEM encoded certificate authority bundle
pub const DEFAULT_TLS_AUTHORITY: &str = "/certs/ca.pem";

/// Wiring for the admission webhooks the controller serves
pub mod webhooks {
    /// Name of the Service fronting the controller's webhook endpoint
    pub const SERVICE_NAME: &str = "controller";
    /// HTTPS port the webhook Service listens on
    pub const SERVICE_PORT: i32 = 443;
    /// Object name of the namespace deletion protection webhook
    pub const NAMESPACE_WEBHOOK_NAME: &str = "validating-webhook-namespace";
    /// Entry name of the namespace deletion protection webhook
    pub const NAMESPACE_WEBHOOK_ENTRY: &str = "namespaces.warden.geeko.me";
    /// Path the controller serves namespace deletion reviews on
    pub const NAMESPACE_WEBHOOK_PATH: &str = "/validate/warden.geeko.me/namespaces";
}
