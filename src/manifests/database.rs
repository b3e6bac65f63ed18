// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use super::{connection_env, container_port, exposure, workload, ChildManifests, Role};
use crate::constants::database::{
    CONTAINER_NAME, DATA_DIR, HOST_VOLUME_ROOT, IMAGE, INITDB_DIR, PORT, PORT_NAME, SOCKET_HOST,
};
use crate::types::ParentIdentity;
use k8s_openapi::api::core::v1::{Container, HostPathVolumeSource, Volume, VolumeMount};

/// Bootstrap SQL scripts: (volume name, file under the host volume root,
/// path below the initdb directory).
const BOOTSTRAP_SCRIPTS: [(&str, &str, &str); 5] = [
    ("realtime-sql", "realtime.sql", "migrations/99-realtime.sql"),
    ("webhooks-sql", "webhooks.sql", "init-scripts/98-webhooks.sql"),
    ("roles-sql", "roles.sql", "init-scripts/99-roles.sql"),
    ("jwt-sql", "jwt.sql", "init-scripts/99-jwt.sql"),
    ("logs-sql", "logs.sql", "migrations/99-logs.sql"),
];

const DATA_VOLUME: &str = "db-data";

pub(super) fn build(parent: &ParentIdentity) -> ChildManifests {
    let (volumes, volume_mounts) = storage();

    let container = Container {
        name: CONTAINER_NAME.to_string(),
        image: Some(IMAGE.to_string()),
        ports: Some(vec![container_port(PORT_NAME, PORT)]),
        env: Some(connection_env(SOCKET_HOST, PORT)),
        volume_mounts: Some(volume_mounts),
        ..Default::default()
    };

    ChildManifests {
        workload: workload(parent, Role::Database, container, Some(volumes)),
        exposure: exposure(parent, Role::Database, PORT_NAME, PORT),
    }
}

fn host_path_volume(name: &str, path: String, type_: &str) -> Volume {
    Volume {
        name: name.to_string(),
        host_path: Some(HostPathVolumeSource {
            path,
            type_: Some(type_.to_string()),
        }),
        ..Default::default()
    }
}

fn mount(name: &str, mount_path: String) -> VolumeMount {
    VolumeMount {
        name: name.to_string(),
        mount_path,
        ..Default::default()
    }
}

fn storage() -> (Vec<Volume>, Vec<VolumeMount>) {
    let mut volumes = Vec::with_capacity(BOOTSTRAP_SCRIPTS.len() + 1);
    let mut mounts = Vec::with_capacity(BOOTSTRAP_SCRIPTS.len() + 1);

    for (name, file, target) in BOOTSTRAP_SCRIPTS {
        volumes.push(host_path_volume(name, format!("{}/{}", HOST_VOLUME_ROOT, file), "File"));
        mounts.push(mount(name, format!("{}/{}", INITDB_DIR, target)));
    }

    volumes.push(host_path_volume(
        DATA_VOLUME,
        format!("{}/data", HOST_VOLUME_ROOT),
        "DirectoryOrCreate",
    ));
    mounts.push(mount(DATA_VOLUME, DATA_DIR.to_string()));

    (volumes, mounts)
}
