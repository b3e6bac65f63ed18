// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Label keys and fixed values stamped on every child resource
pub mod labels {
    pub const APP: &str = "app";
    pub const CR: &str = "cr";
    pub const ROLE: &str = "role";
    /// Value of the `app` label
    pub const APP_NAME: &str = "supabase";
}

/// The field manager recorded on objects this operator creates
pub const OPERATOR_NAME: &str = "supabase-operator";

/// CRD polling configuration
pub mod crd {
    /// Initial polling interval in seconds when waiting for CRD
    pub const POLL_INTERVAL_SECS: u64 = 10;
    /// Maximum polling interval in seconds (exponential backoff cap)
    pub const POLL_MAX_INTERVAL_SECS: u64 = 60;
}

/// Database workload literals
pub mod database {
    pub const IMAGE: &str = "supabase/postgres:15.1.0.147";
    pub const CONTAINER_NAME: &str = "postgres";
    pub const PORT_NAME: &str = "postgres";
    pub const PORT: i32 = 5432;
    /// Unix socket directory used as POSTGRES_HOST inside the database pod
    pub const SOCKET_HOST: &str = "/var/run/postgresql";

    /// Host directory holding the bootstrap scripts and data directory
    pub const HOST_VOLUME_ROOT: &str = "/supabase/volumes/db";
    pub const INITDB_DIR: &str = "/docker-entrypoint-initdb.d";
    pub const DATA_DIR: &str = "/var/lib/postgresql/data";
}

/// Studio workload literals
pub mod studio {
    pub const IMAGE: &str = "supabase/studio:20240101-8e4a094";
    pub const CONTAINER_NAME: &str = "studio";
    pub const PORT_NAME: &str = "http";
    pub const PORT: i32 = 3000;
}

/// Connection defaults shared by both workloads.
// TODO: read these from a Secret referenced by the Supabase spec once the CRD
// grows a credentials field.
pub mod credentials {
    pub const POSTGRES_USER: &str = "postgres";
    pub const POSTGRES_PASSWORD: &str = "your-super-secret-and-long-postgres-password";
    pub const POSTGRES_DB: &str = "postgres";
    pub const JWT_SECRET: &str = "your-super-secret-jwt-token-with-at-least-32-characters-long";
    pub const JWT_EXP: &str = "3600";
}
