use std::fmt::Debug;

use gloo_console::{debug as console_debug, error as console_error};
use gloo_storage::{LocalStorage, Storage, errors::StorageError};

use serde::{Serialize, de::DeserializeOwned};

const KEY_PREFIX: &str = "footer";

/// Values kept in browser local storage under `footer_<KEY>`
///
/// Nothing here surfaces in the UI: a failed save is logged, and a failed or
/// missing load falls back to `Default`.
pub trait Stored
where
    Self: Serialize + DeserializeOwned + Default + Debug,
{
    const KEY: &'static str;

    /// Human name used in log lines
    const LABEL: &'static str;

    fn storage_key() -> String {
        format!("{KEY_PREFIX}_{}", Self::KEY)
    }

    fn store(&self) {
        if let Err(err) = LocalStorage::set(Self::storage_key(), self) {
            console_error!(format!("Failed to save {}: {err}", Self::LABEL));
        }
    }

    fn load() -> anyhow::Result<Option<Self>> {
        match LocalStorage::get(Self::storage_key()) {
            Ok(value) => Ok(Some(value)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(err) => Err(anyhow::anyhow!("failed to read saved {}: {err}", Self::LABEL)),
        }
    }

    fn fetch() -> Self {
        match Self::load() {
            Ok(Some(value)) => value,
            // first visit, nothing saved yet
            Ok(None) => {
                console_debug!(format!("No saved {}, using defaults", Self::LABEL));
                Self::default()
            }
            Err(err) => {
                console_error!(format!("{err}, using defaults"));
                Self::default()
            }
        }
    }
}
