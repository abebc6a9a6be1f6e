//! Application package metadata attached to a resolved configuration.
//!
//! When enabled, the package manifest is exposed under `package`, and its
//! `version` and `description` are copied to `app.version` and
//! `app.description`.

use crate::error::{ConfigError, Result};
use serde_json::Value;
use std::path::Path;

/// Manifest file read from the base path by [`PackageSource::Load`].
pub const PACKAGE_FILE: &str = "package.json";

/// Where package metadata comes from, if anywhere.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PackageSource {
    /// No package metadata (default)
    #[default]
    None,
    /// Read `package.json` from the base path
    Load,
    /// Use the given object as the package manifest
    Inline(Value),
}

impl PackageSource {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, PackageSource::None)
    }

    /// Produce the manifest for a resolver rooted at `base_path`.
    ///
    /// `label` is only used to annotate load errors.
    pub fn manifest(&self, base_path: &Path, label: &str) -> Result<Option<Value>> {
        match self {
            PackageSource::None => Ok(None),
            PackageSource::Inline(value) => Ok(Some(value.clone())),
            PackageSource::Load => read_manifest(&base_path.join(PACKAGE_FILE), label).map(Some),
        }
    }
}

impl From<bool> for PackageSource {
    fn from(enabled: bool) -> Self {
        if enabled {
            PackageSource::Load
        } else {
            PackageSource::None
        }
    }
}

impl From<Value> for PackageSource {
    fn from(value: Value) -> Self {
        PackageSource::Inline(value)
    }
}

fn read_manifest(path: &Path, label: &str) -> Result<Value> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigError::load_failed(label, path, e))?;
    let manifest: Value =
        serde_json::from_str(&content).map_err(|e| ConfigError::load_failed(label, path, e))?;
    if !manifest.is_object() {
        return Err(ConfigError::NotAMapping {
            path: path.to_path_buf(),
        });
    }
    Ok(manifest)
}
