// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Admission webhook registration and teardown.

pub mod configuration;
pub mod namespace;
pub mod sync;

pub use configuration::{ServiceOverride, WebhookConfiguration};
pub use namespace::namespace_protection_webhook;
pub use sync::sync_webhooks;
