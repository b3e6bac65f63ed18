// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Desired state for the child resources of a Supabase parent.
//!
//! Every function here is pure: the same [`ParentIdentity`] always yields the
//! same manifests, which is what makes create-if-absent safe to repeat.

mod database;
mod studio;

use crate::constants::{credentials, labels as label_keys};
use crate::types::ParentIdentity;
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{
    Container, ContainerPort, EnvVar, PodSpec, PodTemplateSpec, Service, ServicePort, ServiceSpec,
    Volume,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, OwnerReference};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use kube::api::ObjectMeta;
use std::collections::BTreeMap;
use std::fmt;

/// A managed workload kind. [`Role::ALL`] is also the order in which a
/// reconcile converges them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Database,
    Studio,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Database, Role::Studio];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Database => "database",
            Role::Studio => "studio",
        }
    }

    /// Build the workload and exposure manifests for this role.
    pub fn build(&self, parent: &ParentIdentity) -> ChildManifests {
        match self {
            Role::Database => database::build(parent),
            Role::Studio => studio::build(parent),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The pair of objects a role converges to.
#[derive(Debug, Clone)]
pub struct ChildManifests {
    pub workload: Deployment,
    pub exposure: Service,
}

/// Name shared by the workload and exposure of a role.
pub fn child_name(parent_name: &str, role: Role) -> String {
    format!("{}-{}", parent_name, role)
}

pub fn labels(parent_name: &str, role: Role) -> BTreeMap<String, String> {
    BTreeMap::from([
        (label_keys::APP.to_string(), label_keys::APP_NAME.to_string()),
        (label_keys::CR.to_string(), parent_name.to_string()),
        (label_keys::ROLE.to_string(), role.as_str().to_string()),
    ])
}

/// Owner reference back to the parent. Garbage collection of children relies
/// on this alone; `controller` lets the controller map child events to the parent.
pub fn owner_reference(parent: &ParentIdentity) -> OwnerReference {
    OwnerReference {
        api_version: parent.api_version.clone(),
        kind: parent.kind.clone(),
        name: parent.name.clone(),
        uid: parent.uid.clone(),
        controller: Some(true),
        block_owner_deletion: Some(true),
    }
}

fn child_metadata(parent: &ParentIdentity, role: Role) -> ObjectMeta {
    ObjectMeta {
        name: Some(child_name(&parent.name, role)),
        namespace: Some(parent.namespace.clone()),
        labels: Some(labels(&parent.name, role)),
        owner_references: Some(vec![owner_reference(parent)]),
        ..Default::default()
    }
}

fn env(name: &str, value: &str) -> EnvVar {
    EnvVar {
        name: name.to_string(),
        value: Some(value.to_string()),
        ..Default::default()
    }
}

/// Connection settings both workloads receive, pointing at `host`.
fn connection_env(host: &str, port: i32) -> Vec<EnvVar> {
    vec![
        env("POSTGRES_HOST", host),
        env("POSTGRES_PORT", &port.to_string()),
        env("POSTGRES_USER", credentials::POSTGRES_USER),
        env("POSTGRES_PASSWORD", credentials::POSTGRES_PASSWORD),
        env("POSTGRES_DB", credentials::POSTGRES_DB),
        env("JWT_SECRET", credentials::JWT_SECRET),
        env("JWT_EXP", credentials::JWT_EXP),
    ]
}

fn container_port(name: &str, port: i32) -> ContainerPort {
    ContainerPort {
        name: Some(name.to_string()),
        container_port: port,
        protocol: Some("TCP".to_string()),
        ..Default::default()
    }
}

fn workload(
    parent: &ParentIdentity,
    role: Role,
    container: Container,
    volumes: Option<Vec<Volume>>,
) -> Deployment {
    let pod_labels = labels(&parent.name, role);

    Deployment {
        metadata: child_metadata(parent, role),
        spec: Some(DeploymentSpec {
            replicas: Some(1),
            selector: LabelSelector {
                match_labels: Some(pod_labels.clone()),
                ..Default::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(pod_labels),
                    ..Default::default()
                }),
                spec: Some(PodSpec {
                    containers: vec![container],
                    volumes,
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn exposure(parent: &ParentIdentity, role: Role, port_name: &str, port: i32) -> Service {
    Service {
        metadata: child_metadata(parent, role),
        spec: Some(ServiceSpec {
            type_: Some("ClusterIP".to_string()),
            selector: Some(labels(&parent.name, role)),
            ports: Some(vec![ServicePort {
                name: Some(port_name.to_string()),
                port,
                target_port: Some(IntOrString::Int(port)),
                protocol: Some("TCP".to_string()),
                ..Default::default()
            }]),
            ..Default::default()
        }),
        ..Default::default()
    }
}
