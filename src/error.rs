// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SupabaseError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    /// The parent lacks identity fields needed to derive its children.
    #[error("Malformed Supabase resource: {0}")]
    MalformedParent(String),
}

pub type Result<T> = std::result::Result<T, SupabaseError>;
