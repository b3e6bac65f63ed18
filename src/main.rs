// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use kube::Client;
use tracing::{info, warn};

use supabase_operator::config::Config;
use supabase_operator::kubernetes::wait_for_supabase_crd;
use supabase_operator::reconcilers::SupabaseReconciler;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    info!("Starting Supabase operator");

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: watch_namespace={}, error_requeue={:?}",
        config.watch_namespace.as_deref().unwrap_or("<all>"),
        config.error_requeue
    );

    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    info!("Waiting for Supabase CRD to become available...");
    wait_for_supabase_crd(&client).await?;

    let reconciler = SupabaseReconciler::new(client, config);

    info!("Starting reconciler...");
    reconciler.run().await?;

    // The controller stream only ends on shutdown
    warn!("Supabase reconciler stopped");
    Ok(())
}
