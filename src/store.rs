//! Caller-side persistence for a profile and its source samples
//!
//! The engine never reads or writes durable state. This store is what the
//! CLI uses to keep a profile between runs: two JSON files under
//! `<workspace>/.voiceprint/`.

use crate::models::Profile;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const STORE_DIR: &str = ".voiceprint";
pub const PROFILE_FILENAME: &str = "profile.json";
pub const SAMPLES_FILENAME: &str = "samples.json";

/// Errors reading or writing the profile store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed data in {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Profile and samples stored under one workspace
#[derive(Debug, Clone)]
pub struct ProfileStore {
    dir: PathBuf,
}

impl ProfileStore {
    pub fn new(workspace: &Path) -> Self {
        Self {
            dir: workspace.join(STORE_DIR),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn profile_path(&self) -> PathBuf {
        self.dir.join(PROFILE_FILENAME)
    }

    pub fn samples_path(&self) -> PathBuf {
        self.dir.join(SAMPLES_FILENAME)
    }

    /// Persist a profile together with the raw samples it was built from
    pub fn save(&self, profile: &Profile, samples: &[String]) -> StoreResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;
        write_json(&self.profile_path(), profile)?;
        write_json(&self.samples_path(), &samples)?;
        debug!("Saved profile to {}", self.dir.display());
        Ok(())
    }

    /// Stored profile, or `None` if none has been saved
    pub fn load_profile(&self) -> StoreResult<Option<Profile>> {
        read_json(&self.profile_path())
    }

    /// Stored samples, empty if none have been saved
    pub fn load_samples(&self) -> StoreResult<Vec<String>> {
        Ok(read_json(&self.samples_path())?.unwrap_or_default())
    }

    /// Delete the stored profile and samples. Returns whether anything was
    /// removed.
    pub fn reset(&self) -> StoreResult<bool> {
        let mut removed = false;
        for path in [self.profile_path(), self.samples_path()] {
            match std::fs::remove_file(&path) {
                Ok(()) => removed = true,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(source) => return Err(StoreError::Io { path, source }),
            }
        }
        Ok(removed)
    }
}

fn write_json<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> StoreResult<()> {
    let json = serde_json::to_string_pretty(value).map_err(|source| StoreError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, json).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> StoreResult<Option<T>> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    serde_json::from_str(&data)
        .map(Some)
        .map_err(|source| StoreError::Malformed {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibrate::build;

    fn samples() -> Vec<String> {
        vec![
            "We ship fast. You get results.".to_string(),
            "Our team cares. Do you?".to_string(),
        ]
    }

    #[test]
    fn test_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path());
        assert!(store.load_profile().unwrap().is_none());
        assert!(store.load_samples().unwrap().is_empty());
        assert!(!store.reset().unwrap());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path());
        let samples = samples();
        let profile = build(&samples).unwrap();

        store.save(&profile, &samples).unwrap();
        assert!(store.profile_path().ends_with(".voiceprint/profile.json"));
        assert_eq!(store.load_profile().unwrap(), Some(profile));
        assert_eq!(store.load_samples().unwrap(), samples);
    }

    #[test]
    fn test_reset_removes_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path());
        let samples = samples();
        store.save(&build(&samples).unwrap(), &samples).unwrap();

        assert!(store.reset().unwrap());
        assert!(!store.profile_path().exists());
        assert!(!store.samples_path().exists());
        assert!(store.load_profile().unwrap().is_none());
    }

    #[test]
    fn test_malformed_profile() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path());
        std::fs::create_dir_all(store.dir()).unwrap();
        std::fs::write(store.profile_path(), "{ not json").unwrap();

        let err = store.load_profile().unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));
        assert!(err.to_string().contains("profile.json"));
    }

    #[test]
    fn test_legacy_shape_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path());
        std::fs::create_dir_all(store.dir()).unwrap();
        std::fs::write(store.profile_path(), r#"{"formality": 50}"#).unwrap();
        assert!(store.load_profile().is_err());
    }
}
