//! Hierarchical configuration resolution.
//!
//! Sources are discovered in a config directory and merged field-by-field:
//! 1. **Defaults** - `default.json`, `default.yml`, `default.yaml`
//! 2. **Label** - `<label>.json|.yml|.yaml`, or an explicit file
//! 3. **Package** - optional `package.json` metadata under `app` and `package`
//!
//! ## Merge Strategy
//! - Mappings: deep merge, later sources win per key
//! - Lists and scalars: replaced entirely
//!
//! ## Environment Variables
//! - `APP_ENV` - Default label and the value behind `env()`

mod loader;
mod merge;
mod package;
mod store;

pub use loader::{
    CONFIG_DIR, ConfigResolver, DEFAULT_STEM, FILE_TYPES, ResolverOptions, TransformHook,
    ValidateHook,
};
pub use merge::{deep_merge, merge_maps};
pub use package::{PACKAGE_FILE, PackageSource};
pub use store::KeyStore;
