// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{bail, Context, Result};
use std::env;
use std::time::Duration;

const DEFAULT_ERROR_REQUEUE_SECS: u64 = 60;

/// Operator configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace to watch for Supabase resources, all namespaces when unset
    pub watch_namespace: Option<String>,
    /// Delay before a failed reconcile is retried
    pub error_requeue: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            env::var("WATCH_NAMESPACE").ok(),
            env::var("ERROR_REQUEUE_SECS").ok(),
        )
    }

    fn from_vars(
        watch_namespace: Option<String>,
        error_requeue_secs: Option<String>,
    ) -> Result<Self> {
        let watch_namespace = watch_namespace.filter(|ns| !ns.is_empty());

        let error_requeue_secs = match error_requeue_secs {
            Some(raw) => raw.parse::<u64>().with_context(|| {
                format!("ERROR_REQUEUE_SECS is not a number of seconds: {raw}")
            })?,
            None => DEFAULT_ERROR_REQUEUE_SECS,
        };

        // A zero delay would retry failed reconciles in a tight loop
        if error_requeue_secs == 0 {
            bail!("ERROR_REQUEUE_SECS must be at least 1 second");
        }

        Ok(Config {
            watch_namespace,
            error_requeue: Duration::from_secs(error_requeue_secs),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            watch_namespace: None,
            error_requeue: Duration::from_secs(DEFAULT_ERROR_REQUEUE_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_vars(None, None).unwrap();
        assert_eq!(config.watch_namespace, None);
        assert_eq!(config.error_requeue, Duration::from_secs(60));
    }

    #[test]
    fn test_empty_watch_namespace_means_all() {
        let config = Config::from_vars(Some(String::new()), None).unwrap();
        assert_eq!(config.watch_namespace, None);
    }

    #[test]
    fn test_watch_namespace_and_requeue() {
        let config =
            Config::from_vars(Some("supabase".to_string()), Some("15".to_string())).unwrap();
        assert_eq!(config.watch_namespace.as_deref(), Some("supabase"));
        assert_eq!(config.error_requeue, Duration::from_secs(15));
    }

    #[test]
    fn test_invalid_requeue_is_rejected() {
        assert!(Config::from_vars(None, Some("soon".to_string())).is_err());
    }

    #[test]
    fn test_zero_requeue_is_rejected() {
        let err = Config::from_vars(None, Some("0".to_string())).unwrap_err();
        assert!(err.to_string().contains("at least 1 second"));
    }

    #[test]
    fn test_one_second_requeue_is_accepted() {
        let config = Config::from_vars(None, Some("1".to_string())).unwrap();
        assert_eq!(config.error_requeue, Duration::from_secs(1));
    }
}
