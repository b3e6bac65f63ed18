// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! CRD availability checking

use crate::constants::crd::{POLL_INTERVAL_SECS, POLL_MAX_INTERVAL_SECS};
use crate::error::Result;
use crate::types::Supabase;
use kube::{
    discovery::{ApiResource, Discovery},
    Client,
};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// Wait until the API server serves the Supabase resource, polling discovery
/// with a backoff that doubles up to POLL_MAX_INTERVAL_SECS.
pub async fn wait_for_supabase_crd(client: &Client) -> Result<()> {
    let wanted = ApiResource::erase::<Supabase>(&());
    let mut interval = POLL_INTERVAL_SECS;

    loop {
        match is_served(client, &wanted).await {
            Ok(true) => {
                info!("{} {} is served", wanted.api_version, wanted.kind);
                return Ok(());
            }
            Ok(false) => info!(
                "{} {} is not served yet, checking again in {}s",
                wanted.api_version, wanted.kind, interval
            ),
            Err(e) => warn!(
                "Discovery of {} failed: {}, retrying in {}s",
                wanted.group, e, interval
            ),
        }

        sleep(Duration::from_secs(interval)).await;
        interval = next_interval(interval);
    }
}

fn next_interval(interval: u64) -> u64 {
    (interval * 2).min(POLL_MAX_INTERVAL_SECS)
}

async fn is_served(client: &Client, wanted: &ApiResource) -> Result<bool> {
    let discovery = Discovery::new(client.clone())
        .filter(&[wanted.group.as_str()])
        .run()
        .await?;

    let Some(group) = discovery.get(&wanted.group) else {
        debug!("API group {} not found", wanted.group);
        return Ok(false);
    };

    let resources: Vec<ApiResource> = group
        .versioned_resources(&wanted.version)
        .into_iter()
        .map(|(ar, _)| ar)
        .collect();

    Ok(contains_resource(&resources, wanted))
}

fn contains_resource(resources: &[ApiResource], wanted: &ApiResource) -> bool {
    resources.iter().any(|ar| {
        ar.group == wanted.group && ar.version == wanted.version && ar.kind == wanted.kind
    })
}
