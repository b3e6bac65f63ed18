// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Prints the Supabase CustomResourceDefinition as YAML.

use kube::CustomResourceExt;
use supabase_operator::types::Supabase;

fn main() -> anyhow::Result<()> {
    print!("{}", serde_yaml::to_string(&Supabase::crd())?);
    Ok(())
}
