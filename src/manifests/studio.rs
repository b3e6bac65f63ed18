// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use super::{child_name, connection_env, container_port, exposure, workload, ChildManifests, Role};
use crate::constants::database;
use crate::constants::studio::{CONTAINER_NAME, IMAGE, PORT, PORT_NAME};
use crate::types::ParentIdentity;
use k8s_openapi::api::core::v1::Container;

pub(super) fn build(parent: &ParentIdentity) -> ChildManifests {
    // Studio reaches the database through its Service.
    let database_host = child_name(&parent.name, Role::Database);

    let container = Container {
        name: CONTAINER_NAME.to_string(),
        image: Some(IMAGE.to_string()),
        ports: Some(vec![container_port(PORT_NAME, PORT)]),
        env: Some(connection_env(&database_host, database::PORT)),
        ..Default::default()
    };

    ChildManifests {
        workload: workload(parent, Role::Studio, container, None),
        exposure: exposure(parent, Role::Studio, PORT_NAME, PORT),
    }
}
