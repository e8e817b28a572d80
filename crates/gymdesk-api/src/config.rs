use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use gymdesk_storage::store::{MemoryStore, ObjectStore, S3Store};

pub const DEFAULT_BUCKET: &str = "gymdesk";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    S3,
    Memory,
}

impl FromStr for StoreKind {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s3" => Ok(StoreKind::S3),
            "memory" => Ok(StoreKind::Memory),
            other => Err(eyre::eyre!("GYMDESK_STORE must be 's3' or 'memory', got '{other}'")),
        }
    }
}

/// Runtime settings, read once from the environment at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub store: StoreKind,
    pub bucket: String,
    /// Serve over plain HTTP on this address instead of the Lambda runtime.
    pub bind: Option<SocketAddr>,
    /// Replace stored records with the bundled fixtures before serving.
    pub seed: bool,
}

impl ApiConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source; `from_env` passes the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let store = match var("GYMDESK_STORE") {
            Some(raw) => raw.parse()?,
            None => StoreKind::S3,
        };
        let bucket = var("GYMDESK_BUCKET").unwrap_or_else(|| DEFAULT_BUCKET.to_string());
        let bind = var("GYMDESK_BIND")
            .map(|raw| {
                raw.trim()
                    .parse::<SocketAddr>()
                    .map_err(|e| eyre::eyre!("invalid GYMDESK_BIND '{raw}': {e}"))
            })
            .transpose()?;
        // An in-memory store starts empty, so it is seeded unless told otherwise.
        let seed = match var("GYMDESK_SEED") {
            Some(raw) => parse_flag(&raw)
                .ok_or_else(|| eyre::eyre!("invalid GYMDESK_SEED '{raw}'"))?,
            None => store == StoreKind::Memory,
        };

        Ok(Self {
            store,
            bucket,
            bind,
            seed,
        })
    }

    pub async fn build_store(&self) -> eyre::Result<Arc<dyn ObjectStore>> {
        Ok(match self.store {
            StoreKind::S3 => Arc::new(S3Store::connect(self.bucket.clone()).await?),
            StoreKind::Memory => Arc::new(MemoryStore::new()),
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
