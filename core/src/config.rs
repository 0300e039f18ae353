use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::repository::series::STORAGE_KEY;

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "ROI_LEDGER_DIR";

const DEFAULT_DIR_NAME: &str = ".roi-ledger";

pub fn default_data_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home_dir.join(DEFAULT_DIR_NAME))
}

#[derive(Debug, Clone, PartialEq)]
pub struct LedgerConfig {
    pub data_dir: PathBuf,
    pub storage_key: String,
}

impl LedgerConfig {
    /// Uses `data_dir` when given, otherwise `~/.roi-ledger`.
    pub fn resolve(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        Ok(Self {
            data_dir,
            storage_key: STORAGE_KEY.to_string(),
        })
    }
}
