// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Supabase reconciler - converges the database and studio children of each
//! Supabase resource.

use crate::config::Config;
use crate::error::{Result, SupabaseError};
use crate::kubernetes::ensure_present;
use crate::manifests::{child_name, Role};
use crate::types::{ParentIdentity, Supabase};
use futures::StreamExt;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Service;
use kube::{
    runtime::{controller::Action, Controller},
    Api, Client, ResourceExt,
};
use kube_runtime::watcher::Config as WatcherConfig;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

pub struct SupabaseReconciler {
    client: Client,
    config: Config,
}

/// How a reconcile cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// The parent no longer exists; its children are left to garbage collection.
    ParentDeleted,
    /// Every child of the parent exists.
    Converged,
}

impl SupabaseReconciler {
    pub fn new(client: Client, config: Config) -> Self {
        Self { client, config }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let (supabases, deployments, services) = match self.config.watch_namespace.as_deref() {
            Some(ns) => (
                Api::<Supabase>::namespaced(self.client.clone(), ns),
                Api::<Deployment>::namespaced(self.client.clone(), ns),
                Api::<Service>::namespaced(self.client.clone(), ns),
            ),
            None => (
                Api::<Supabase>::all(self.client.clone()),
                Api::<Deployment>::all(self.client.clone()),
                Api::<Service>::all(self.client.clone()),
            ),
        };
        let context = Arc::new(self);

        // Children are watched so that deleting one re-triggers its parent.
        Controller::new(supabases, WatcherConfig::default())
            .owns(deployments, WatcherConfig::default())
            .owns(services, WatcherConfig::default())
            .run(reconcile, error_policy, context)
            .for_each(|res| async move {
                match res {
                    Ok(o) => debug!("Reconciled supabase: {:?}", o),
                    Err(e) => warn!("Reconciliation error: {:?}", e),
                }
            })
            .await;

        Ok(())
    }
}

async fn reconcile(supabase: Arc<Supabase>, ctx: Arc<SupabaseReconciler>) -> Result<Action> {
    let name = supabase.name_any();
    let namespace = supabase.namespace().unwrap_or_default();

    reconcile_supabase(&ctx.client, &namespace, &name).await?;

    // Nothing to revisit on a timer: children are only ever created.
    Ok(Action::await_change())
}

/// Run one reconcile cycle for the Supabase `namespace/name`.
///
/// The parent is re-read from the API server so the cycle only depends on the
/// current state. For each [`Role`] in order, the workload and then its
/// exposure are created if absent. The first failure ends the cycle; steps
/// already done are kept and the rest are retried by the next cycle.
#[instrument(skip(client))]
pub async fn reconcile_supabase(
    client: &Client,
    namespace: &str,
    name: &str,
) -> Result<ReconcileOutcome> {
    let supabases: Api<Supabase> = Api::namespaced(client.clone(), namespace);

    let Some(supabase) = supabases.get_opt(name).await? else {
        info!("Supabase {}/{} has been deleted", namespace, name);
        return Ok(ReconcileOutcome::ParentDeleted);
    };

    let parent = supabase.identity()?;
    let deployments: Api<Deployment> = Api::namespaced(client.clone(), namespace);
    let services: Api<Service> = Api::namespaced(client.clone(), namespace);

    for role in Role::ALL {
        converge_role(&deployments, &services, &parent, role).await?;
    }

    debug!("Supabase {}/{} converged", namespace, name);
    Ok(ReconcileOutcome::Converged)
}

async fn converge_role(
    deployments: &Api<Deployment>,
    services: &Api<Service>,
    parent: &ParentIdentity,
    role: Role,
) -> Result<()> {
    let name = child_name(&parent.name, role);
    let manifests = role.build(parent);

    ensure_present(deployments, &name, &manifests.workload).await?;
    ensure_present(services, &name, &manifests.exposure).await?;

    Ok(())
}

fn error_policy(
    supabase: Arc<Supabase>,
    error: &SupabaseError,
    ctx: Arc<SupabaseReconciler>,
) -> Action {
    let name = supabase.name_any();
    match error {
        // Retrying cannot fix a resource without identity.
        SupabaseError::MalformedParent(_) => {
            error!("Cannot reconcile supabase {}: {}", name, error);
            Action::await_change()
        }
        SupabaseError::KubeError(_) => {
            error!("Reconciliation error for supabase {}: {}", name, error);
            Action::requeue(ctx.config.error_requeue)
        }
    }
}
