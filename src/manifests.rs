// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Webhook manifest templates embedded into the binary at build time

use serde::Deserialize;

use crate::error::{Result, WardenError};

#[derive(rust_embed::RustEmbed)]
#[folder = "manifests/"]
struct Assets;

/// File name of the webhook configuration bundle inside the embedded folder
const WEBHOOK_MANIFESTS: &str = "webhooks.yaml";

/// Return the embedded webhook configuration templates, one YAML document each
pub fn webhook_documents() -> Result<Vec<String>> {
    let asset = Assets::get(WEBHOOK_MANIFESTS).ok_or_else(|| {
        WardenError::ManifestBundle(format!("{} is not embedded in the binary", WEBHOOK_MANIFESTS))
    })?;
    let raw = std::str::from_utf8(asset.data.as_ref())
        .map_err(|e| WardenError::ManifestBundle(format!("{} is not UTF-8: {}", WEBHOOK_MANIFESTS, e)))?;

    split_documents(raw)
}

/// Split a multi-document YAML stream into its non-empty documents
pub fn split_documents(raw: &str) -> Result<Vec<String>> {
    let mut documents = Vec::new();

    for document in serde_yaml::Deserializer::from_str(raw) {
        let value = serde_yaml::Value::deserialize(document)?;
        // A trailing `---` yields a null document, not a template
        if value.is_null() {
            continue;
        }
        documents.push(serde_yaml::to_string(&value)?);
    }

    Ok(documents)
}
