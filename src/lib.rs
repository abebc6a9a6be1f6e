//! Environment-aware hierarchical configuration.
//!
//! Loads YAML/JSON sources from a directory convention, merges them into one
//! tree, and exposes dotted-path accessors on named instances.
//!
//! ```no_run
//! use deployable_config::{InstanceRegistry, ResolverOptions};
//!
//! let mut registry = InstanceRegistry::new();
//! let config = registry
//!     .fetch_instance("default", ResolverOptions::new().with_package(true))
//!     .unwrap();
//! println!("{}", config.get("app.version").unwrap());
//! ```

pub mod cli;
pub mod config;
pub mod env;
pub mod error;
pub mod logging;
pub mod registry;

pub use config::{ConfigResolver, KeyStore, PackageSource, ResolverOptions};
pub use error::{ConfigError, ConfigKeyError, ErrorCode};
pub use registry::{DEFAULT_INSTANCE, InstanceRegistry};

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
