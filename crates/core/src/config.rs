//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into services as an
//! `Arc<CoreConfig>`. Nothing in this crate reads process environment variables while handling a
//! request; binaries hand [`CoreConfig::from_lookup`] a lookup function instead.

use crate::constants::{
    DEFAULT_BOOK_DATA_DIR, ENV_BOOK_DATA_DIR, ENV_PHOTO_UPLOAD_DIR, ENV_PHOTO_URL_PREFIX,
    ENV_STORE_KIND,
};
use crate::error::ConfigError;
use bookcat_files::{DEFAULT_PHOTO_URL_PREFIX, DEFAULT_UPLOAD_DIR};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Which document store backs the service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StoreKind {
    /// Sharded JSON files under the data directory.
    #[default]
    File,
    /// Process memory; contents vanish on exit.
    Memory,
}

impl FromStr for StoreKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" | "json" => Ok(StoreKind::File),
            "memory" | "mem" => Ok(StoreKind::Memory),
            other => Err(ConfigError::InvalidStoreKind(other.to_string())),
        }
    }
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    book_data_dir: PathBuf,
    store_kind: StoreKind,
    photo_upload_dir: PathBuf,
    photo_url_prefix: String,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if either directory is empty or `photo_url_prefix` is not an
    /// absolute path other than `/` itself.
    pub fn new(
        book_data_dir: PathBuf,
        store_kind: StoreKind,
        photo_upload_dir: PathBuf,
        photo_url_prefix: String,
    ) -> Result<Self, ConfigError> {
        if book_data_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath {
                name: ENV_BOOK_DATA_DIR,
            });
        }
        if photo_upload_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath {
                name: ENV_PHOTO_UPLOAD_DIR,
            });
        }
        let trimmed = photo_url_prefix.trim_end_matches('/');
        if !photo_url_prefix.starts_with('/') || trimmed.is_empty() {
            return Err(ConfigError::InvalidUrlPrefix(photo_url_prefix));
        }

        Ok(Self {
            book_data_dir,
            store_kind,
            photo_upload_dir,
            photo_url_prefix: trimmed.to_string(),
        })
    }

    /// Builds a configuration from named settings, falling back to defaults for unset or blank
    /// values.
    ///
    /// Recognised names: `BOOK_DATA_DIR`, `BOOKCAT_STORE`, `PHOTO_UPLOAD_DIR`,
    /// `PHOTO_URL_PREFIX`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let store_kind = value(ENV_STORE_KIND)
            .map(|v| v.parse::<StoreKind>())
            .transpose()?
            .unwrap_or_default();

        Self::new(
            value(ENV_BOOK_DATA_DIR)
                .unwrap_or_else(|| DEFAULT_BOOK_DATA_DIR.into())
                .into(),
            store_kind,
            value(ENV_PHOTO_UPLOAD_DIR)
                .unwrap_or_else(|| DEFAULT_UPLOAD_DIR.into())
                .into(),
            value(ENV_PHOTO_URL_PREFIX).unwrap_or_else(|| DEFAULT_PHOTO_URL_PREFIX.into()),
        )
    }

    pub fn book_data_dir(&self) -> &Path {
        &self.book_data_dir
    }

    pub fn store_kind(&self) -> StoreKind {
        self.store_kind
    }

    pub fn photo_upload_dir(&self) -> &Path {
        &self.photo_upload_dir
    }

    pub fn photo_url_prefix(&self) -> &str {
        &self.photo_url_prefix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let cfg = CoreConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(cfg.book_data_dir(), Path::new("book_data"));
        assert_eq!(cfg.store_kind(), StoreKind::File);
        assert_eq!(cfg.photo_upload_dir(), Path::new("uploads/photos"));
        assert_eq!(cfg.photo_url_prefix(), "/uploads/photos");
    }

    #[test]
    fn test_overrides() {
        let cfg = CoreConfig::from_lookup(lookup(&[
            ("BOOK_DATA_DIR", "/srv/books"),
            ("BOOKCAT_STORE", "Memory"),
            ("PHOTO_UPLOAD_DIR", "/srv/covers"),
            ("PHOTO_URL_PREFIX", "/covers/"),
        ]))
        .unwrap();

        assert_eq!(cfg.book_data_dir(), Path::new("/srv/books"));
        assert_eq!(cfg.store_kind(), StoreKind::Memory);
        assert_eq!(cfg.photo_upload_dir(), Path::new("/srv/covers"));
        assert_eq!(cfg.photo_url_prefix(), "/covers");
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let cfg = CoreConfig::from_lookup(lookup(&[("BOOK_DATA_DIR", "  ")])).unwrap();
        assert_eq!(cfg.book_data_dir(), Path::new("book_data"));
    }

    #[test]
    fn test_unknown_store_kind_rejected() {
        let result = CoreConfig::from_lookup(lookup(&[("BOOKCAT_STORE", "mongo")]));
        assert!(matches!(result, Err(ConfigError::InvalidStoreKind(k)) if k == "mongo"));
    }

    #[test]
    fn test_relative_url_prefix_rejected() {
        for prefix in ["uploads", "/", "//"] {
            let result = CoreConfig::from_lookup(lookup(&[("PHOTO_URL_PREFIX", prefix)]));
            assert!(matches!(result, Err(ConfigError::InvalidUrlPrefix(_))));
        }
    }

    #[test]
    fn test_new_rejects_empty_paths() {
        let result = CoreConfig::new(
            PathBuf::new(),
            StoreKind::File,
            "uploads".into(),
            "/uploads".into(),
        );
        assert!(matches!(result, Err(ConfigError::EmptyPath { .. })));
    }
}
