// LocalStorage JSON helpers.
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use wasm_bindgen::JsValue;
use web_sys::Storage;

#[derive(Debug)]
pub enum StorageError {
    /// No window or LocalStorage disabled.
    Unavailable,
    Js(String),
    Serde(serde_json::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "local storage unavailable"),
            StorageError::Js(msg) => write!(f, "storage call failed: {}", msg),
            StorageError::Serde(e) => write!(f, "malformed record: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Serde(e)
    }
}

impl From<JsValue> for StorageError {
    fn from(v: JsValue) -> Self {
        StorageError::Js(v.as_string().unwrap_or_else(|| format!("{:?}", v)))
    }
}

fn local_storage() -> Result<Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    window.local_storage()?.ok_or(StorageError::Unavailable)
}

/// `Ok(None)` when nothing is stored under `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Result<Option<T>, StorageError> {
    let store = local_storage()?;
    match store.get_item(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub fn save_json<T: Serialize>(key: &str, value: &T) -> Result<(), StorageError> {
    let store = local_storage()?;
    let raw = serde_json::to_string(value)?;
    store.set_item(key, &raw)?;
    Ok(())
}

/// Loads `key`, falling back to `T::default()` when absent, malformed or unreachable.
pub fn load_or_default<T: DeserializeOwned + Default>(key: &str) -> T {
    match load_json(key) {
        Ok(Some(v)) => v,
        Ok(None) => T::default(),
        Err(e) => {
            log::warn!("could not load '{}': {}", key, e);
            T::default()
        }
    }
}
