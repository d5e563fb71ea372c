// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Idempotent create/update and delete helpers for cluster scoped resources

use kube::{
    api::{DeleteParams, Patch, PatchParams},
    Api, Client, Resource, ResourceExt,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::constants::OPERATOR_NAME;
use crate::error::{Result, WardenError};

/// Create the object if absent, or forcefully take over and replace its fields
/// if it already exists
pub async fn create_or_force_update<K>(client: &Client, object: &K) -> Result<()>
where
    K: Resource<DynamicType = ()> + Clone + std::fmt::Debug + Serialize + DeserializeOwned,
{
    let api: Api<K> = Api::all(client.clone());
    let name = object.name_any();

    let params = PatchParams::apply(OPERATOR_NAME).force();
    api.patch(&name, &params, &Patch::Apply(object))
        .await
        .map_err(|source| WardenError::ClusterOperation {
            action: "apply",
            kind: K::kind(&()).into_owned(),
            name: name.clone(),
            source,
        })?;

    debug!("Applied {} {}", K::kind(&()), name);
    Ok(())
}

/// Delete the object from the cluster, treating absence as success
pub async fn delete_if_exists<K>(client: &Client, object: &K) -> Result<()>
where
    K: Resource<DynamicType = ()> + Clone + std::fmt::Debug + DeserializeOwned,
{
    let api: Api<K> = Api::all(client.clone());
    let name = object.name_any();

    match api.delete(&name, &DeleteParams::default()).await {
        Ok(_) => {
            debug!("Deleted {} {}", K::kind(&()), name);
            Ok(())
        }
        Err(kube::Error::Api(err)) if err.code == 404 => {
            debug!("{} {} already absent", K::kind(&()), name);
            Ok(())
        }
        Err(source) => Err(WardenError::ClusterOperation {
            action: "delete",
            kind: K::kind(&()).into_owned(),
            name,
            source,
        }),
    }
}
