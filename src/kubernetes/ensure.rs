// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Create-if-absent for namespaced objects

use crate::constants::OPERATOR_NAME;
use crate::error::Result;
use kube::{api::PostParams, Api, Resource};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use tracing::{debug, info, instrument, warn};

/// Ensure the object `name` exists behind `api`, creating `desired` if it does not.
///
/// An existing object is returned as-is and `desired` is dropped: no diff, no
/// patch. Other lookup and create errors propagate unchanged, except a create
/// rejected with `AlreadyExists`, which means another actor won the race and is
/// answered with the object that now exists.
#[instrument(skip(api, desired))]
pub async fn ensure_present<K>(api: &Api<K>, name: &str, desired: &K) -> Result<K>
where
    K: Resource<DynamicType = ()> + Clone + DeserializeOwned + Serialize + Debug,
{
    let kind = K::kind(&());

    if let Some(existing) = api.get_opt(name).await? {
        debug!("{} {} already exists", kind, name);
        return Ok(existing);
    }

    info!("Creating {} {}", kind, name);
    let pp = PostParams {
        field_manager: Some(OPERATOR_NAME.to_string()),
        ..Default::default()
    };

    match api.create(&pp, desired).await {
        Ok(created) => {
            info!("{} {} created successfully", kind, name);
            Ok(created)
        }
        Err(kube::Error::Api(err)) if err.code == 409 && err.reason == "AlreadyExists" => {
            warn!("{} {} was created concurrently, using the existing object", kind, name);
            Ok(api.get(name).await?)
        }
        Err(e) => Err(e.into()),
    }
}
