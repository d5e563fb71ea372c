// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WardenError {
    #[error("failed to read the certificate authority file {path}: {source}")]
    CertificateAuthority {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("webhook manifest bundle unusable: {0}")]
    ManifestBundle(String),

    #[error("failed to decode the webhook manifest: {0}")]
    DecodeManifest(#[from] serde_yaml::Error),

    #[error("expected a validating or mutating webhook configuration, got {0:?}")]
    UnexpectedKind(String),

    #[error("failed to {action} {kind} {name}: {source}")]
    ClusterOperation {
        action: &'static str,
        kind: String,
        name: String,
        source: kube::Error,
    },
}

pub type Result<T> = std::result::Result<T, WardenError>;
