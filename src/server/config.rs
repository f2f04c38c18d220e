use std::{path::PathBuf, str::FromStr};

use crate::server::error::config::ConfigError;

/// Blob storage backend selected with `STORAGE_BACKEND`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackendKind {
    /// One directory per namespace on the local filesystem
    Local,
    /// Process-local map, contents are lost on restart
    Memory,
}

impl FromStr for StorageBackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "memory" => Ok(Self::Memory),
            other => Err(format!("expected \"local\" or \"memory\", got {:?}", other)),
        }
    }
}

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub storage_backend: StorageBackendKind,
    pub model_storage: PathBuf,
    pub qr_storage: PathBuf,
    /// Prefix prepended to every resolved asset URL, empty for host-relative paths
    pub asset_base_url: String,
    pub database_connect_attempts: u32,
    pub database_connect_backoff_secs: u64,
}

impl Config {
    const DEFAULT_BIND_ADDRESS: &'static str = "0.0.0.0:8000";
    const DEFAULT_MODEL_STORAGE: &'static str = "models";
    const DEFAULT_QR_STORAGE: &'static str = "qrcodes";
    const DEFAULT_CONNECT_ATTEMPTS: u32 = 10;
    const DEFAULT_CONNECT_BACKOFF_SECS: u64 = 2;

    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| Self::DEFAULT_BIND_ADDRESS.to_string()),
            storage_backend: parsed("STORAGE_BACKEND")?.unwrap_or(StorageBackendKind::Local),
            model_storage: optional("MODEL_STORAGE")
                .unwrap_or_else(|| Self::DEFAULT_MODEL_STORAGE.to_string())
                .into(),
            qr_storage: optional("QR_STORAGE")
                .unwrap_or_else(|| Self::DEFAULT_QR_STORAGE.to_string())
                .into(),
            asset_base_url: optional("ASSET_BASE_URL").unwrap_or_default(),
            database_connect_attempts: parsed("DATABASE_CONNECT_ATTEMPTS")?
                .unwrap_or(Self::DEFAULT_CONNECT_ATTEMPTS),
            database_connect_backoff_secs: parsed("DATABASE_CONNECT_BACKOFF_SECS")?
                .unwrap_or(Self::DEFAULT_CONNECT_BACKOFF_SECS),
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    optional(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|value| !value.is_empty())
}

fn parsed<T>(var: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    optional(var)
        .map(|value| {
            value.parse::<T>().map_err(|e| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: e.to_string(),
            })
        })
        .transpose()
}
