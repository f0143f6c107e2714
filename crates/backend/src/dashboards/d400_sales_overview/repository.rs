use contracts::dashboards::d400_sales_overview::SalesRecord;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::shared::config::{find_dataset_path, Config};

/// Dataset shipped with the binary, used when no dataset file is found
const EMBEDDED_DATASET: &str = include_str!("../../../../../data/sales.json");

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse dataset {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse a JSON array of sales records. `origin` only names the source in errors.
pub fn parse_records(json: &str, origin: &str) -> Result<Vec<SalesRecord>, DatasetError> {
    serde_json::from_str(json).map_err(|source| DatasetError::Parse {
        origin: origin.to_string(),
        source,
    })
}

pub fn load_records_from_file(path: &Path) -> Result<Vec<SalesRecord>, DatasetError> {
    let contents = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(&contents, &path.display().to_string())
}

pub fn embedded_records() -> Result<Vec<SalesRecord>, DatasetError> {
    parse_records(EMBEDDED_DATASET, "<embedded>")
}

/// Load the records named by the configuration, or the embedded dataset
/// when the configured file does not exist.
pub fn load_records(config: &Config) -> Result<Vec<SalesRecord>, DatasetError> {
    let records = match find_dataset_path(config) {
        Some(path) => {
            tracing::info!("Loading dataset from: {}", path.display());
            load_records_from_file(&path)?
        }
        None => {
            tracing::warn!(
                "Dataset {} not found, using embedded dataset",
                config.dataset.path
            );
            embedded_records()?
        }
    };

    tracing::info!("Loaded {} sales records", records.len());
    Ok(records)
}
