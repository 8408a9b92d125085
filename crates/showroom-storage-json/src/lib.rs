//! showroom-storage-json
//!
//! JSON-file data source for accounts, movements and receipts.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use showroom_core::{dataset_warnings, CoreError, LedgerSource, MovementQuery};
use showroom_domain::{Account, Dataset, Movement, Receipt};

const TMP_SUFFIX: &str = "tmp";

/// A dataset file loaded once and queried in memory.
#[derive(Debug, Clone)]
pub struct JsonLedgerSource {
    path: PathBuf,
    dataset: Dataset,
}

impl JsonLedgerSource {
    /// Loads `path` and logs any anomalies found in the snapshot.
    pub fn open(path: &Path) -> Result<Self, CoreError> {
        let dataset = load_dataset_from_path(path)?;
        for warning in dataset_warnings(&dataset) {
            tracing::warn!(path = %path.display(), "{warning}");
        }
        tracing::info!(
            path = %path.display(),
            accounts = dataset.accounts.len(),
            movements = dataset.movements.len(),
            receipts = dataset.receipts.len(),
            "loaded dataset"
        );
        Ok(Self {
            path: path.to_path_buf(),
            dataset,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}

impl LedgerSource for JsonLedgerSource {
    fn accounts(&self) -> Result<Vec<Account>, CoreError> {
        self.dataset.accounts()
    }

    fn movements(&self, query: &MovementQuery) -> Result<Vec<Movement>, CoreError> {
        self.dataset.movements(query)
    }

    fn receipts(&self, query: &MovementQuery) -> Result<Vec<Receipt>, CoreError> {
        self.dataset.receipts(query)
    }
}

/// Writes a dataset to `path` through a temporary file and rename.
pub fn save_dataset_to_path(dataset: &Dataset, path: &Path) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    write_atomic(&tmp, &serialize_dataset(dataset)?)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Loads a dataset from the provided filesystem path.
pub fn load_dataset_from_path(path: &Path) -> Result<Dataset, CoreError> {
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data)
        .map_err(|err| CoreError::Serialization(format!("{}: {err}", path.display())))
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

fn serialize_dataset(dataset: &Dataset) -> Result<String, CoreError> {
    serde_json::to_string_pretty(dataset).map_err(|err| CoreError::Serialization(err.to_string()))
}
