//! Last-result cache.
//!
//! Single-slot JSON file holding the most recent prediction, overwritten on
//! every successful request. The controller treats every failure here as
//! non-critical.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cxr_common::Prediction;

/// The cached value: the prediction plus when it was captured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedResult {
    pub cached_at: DateTime<Utc>,
    pub prediction: Prediction,
}

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("cache io error: {0}")]
    Io(#[from] io::Error),

    #[error("cache parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Single-slot file cache for the most recent prediction.
pub struct ResultCache {
    path: PathBuf,
}

impl ResultCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the cache with a new result, stamped now.
    pub fn save(&self, prediction: &Prediction) -> Result<CachedResult, CacheError> {
        let entry = CachedResult {
            cached_at: Utc::now(),
            prediction: prediction.clone(),
        };
        fs::write(&self.path, serde_json::to_vec_pretty(&entry)?)?;
        Ok(entry)
    }

    /// Read the cached result; `Ok(None)` when nothing was cached yet.
    pub fn load(&self) -> Result<Option<CachedResult>, CacheError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }
}
