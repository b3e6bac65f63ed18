// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::{Result, SupabaseError};
use kube::{CustomResource, Resource, ResourceExt};
use schemars::schema::{InstanceType, Schema, SchemaObject};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The user-facing Supabase resource. The spec block is carried as-is;
/// children are derived from the resource identity only.
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default)]
#[kube(group = "supabase.com", version = "v1", kind = "Supabase")]
#[kube(namespaced)]
#[serde(rename_all = "camelCase")]
pub struct SupabaseSpec {
    #[serde(flatten)]
    pub settings: BTreeMap<String, serde_json::Value>,
}

impl JsonSchema for SupabaseSpec {
    fn schema_name() -> String {
        "SupabaseSpec".to_string()
    }

    fn json_schema(_gen: &mut schemars::gen::SchemaGenerator) -> Schema {
        // Opaque object: the API server keeps whatever fields the user sets
        let mut extensions = schemars::Map::new();
        extensions.insert(
            "x-kubernetes-preserve-unknown-fields".to_string(),
            serde_json::Value::Bool(true),
        );

        Schema::Object(SchemaObject {
            instance_type: Some(InstanceType::Object.into()),
            extensions,
            ..Default::default()
        })
    }
}

/// Everything the manifest builders read from a parent resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentIdentity {
    pub api_version: String,
    pub kind: String,
    pub name: String,
    pub namespace: String,
    pub uid: String,
}

impl Supabase {
    /// Extract the identity of this resource.
    ///
    /// A resource read from the API server always carries a name, namespace and
    /// uid; one without them cannot own children and is rejected.
    pub fn identity(&self) -> Result<ParentIdentity> {
        let name = self
            .metadata
            .name
            .clone()
            .ok_or_else(|| SupabaseError::MalformedParent("resource has no name".to_string()))?;

        let Some(namespace) = self.namespace() else {
            return Err(SupabaseError::MalformedParent(format!(
                "Supabase {} has no namespace",
                name
            )));
        };

        let Some(uid) = self.uid() else {
            return Err(SupabaseError::MalformedParent(format!(
                "Supabase {}/{} has no uid",
                namespace, name
            )));
        };

        Ok(ParentIdentity {
            api_version: Supabase::api_version(&()).into_owned(),
            kind: Supabase::kind(&()).into_owned(),
            name,
            namespace,
            uid,
        })
    }
}
