//! Filesystem JSON backend for the fintrack record store.
//!
//! Each collection lives in its own `<key>.json` file under a data
//! directory. Writes go through a temp file and rename so a crashed save
//! never leaves a half-written collection behind.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};

use fintrack_core::{
    storage::{RecordStore, GOALS_KEY, TRANSACTIONS_KEY},
    CoreError,
};
use fintrack_domain::{Goal, Transaction};

const COLLECTION_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// Directory-rooted JSON persistence for the record collections.
#[derive(Debug, Clone)]
pub struct JsonRecordStore {
    data_dir: PathBuf,
}

impl JsonRecordStore {
    pub fn new(data_dir: PathBuf) -> Result<Self, CoreError> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn collection_path(&self, key: &str) -> PathBuf {
        self.data_dir
            .join(format!("{}.{}", key, COLLECTION_EXTENSION))
    }

    fn load_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, CoreError> {
        let path = self.collection_path(key);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&path)?;
        serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))
    }

    fn save_collection<T: Serialize>(&self, key: &str, records: &[T]) -> Result<(), CoreError> {
        let path = self.collection_path(key);
        let json = serde_json::to_string_pretty(records)
            .map_err(|err| CoreError::Serde(err.to_string()))?;
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

impl RecordStore for JsonRecordStore {
    fn load_transactions(&self) -> Result<Vec<Transaction>, CoreError> {
        self.load_collection(TRANSACTIONS_KEY)
    }

    fn save_transactions(&self, transactions: &[Transaction]) -> Result<(), CoreError> {
        self.save_collection(TRANSACTIONS_KEY, transactions)
    }

    fn load_goals(&self) -> Result<Vec<Goal>, CoreError> {
        self.load_collection(GOALS_KEY)
    }

    fn save_goals(&self, goals: &[Goal]) -> Result<(), CoreError> {
        self.save_collection(GOALS_KEY, goals)
    }
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
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
