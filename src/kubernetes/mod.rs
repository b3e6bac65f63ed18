// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for CRD discovery and idempotent object creation.

pub mod crd;
pub mod ensure;

pub use crd::wait_for_supabase_crd;
pub use ensure::ensure_present;
