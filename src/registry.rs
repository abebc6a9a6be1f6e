//! Named configuration instances.
//!
//! Most applications want one shared configuration; some want several (one
//! per tenant, or a separate one for tooling). The registry owns resolvers by
//! name and is passed explicitly to whoever needs it, so the lifetime of the
//! shared state is visible at the call site.
//!
//! ```no_run
//! use deployable_config::{InstanceRegistry, ResolverOptions};
//!
//! let mut registry = InstanceRegistry::new();
//! let config = registry
//!     .fetch_instance("default", ResolverOptions::new().with_path("/srv/app"))
//!     .unwrap();
//! let port = config.fetch("server.port").cloned();
//! ```

use crate::config::{ConfigResolver, ResolverOptions};
use crate::error::{ConfigError, Result};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::debug;

/// Conventional name of the shared instance.
pub const DEFAULT_INSTANCE: &str = "default";

/// Registry of named [`ConfigResolver`] instances.
#[derive(Debug, Default)]
pub struct InstanceRegistry {
    instances: HashMap<String, ConfigResolver>,
}

impl InstanceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a resolver and store it under `name`, replacing any
    /// existing entry. On error the registry is left unchanged.
    pub fn new_instance(
        &mut self,
        name: &str,
        options: ResolverOptions,
    ) -> Result<&mut ConfigResolver> {
        let resolver = ConfigResolver::new(name, options)?;
        let slot = match self.instances.entry(name.to_string()) {
            Entry::Occupied(mut entry) => {
                debug!(instance = %name, "Replacing config instance");
                entry.insert(resolver);
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                debug!(instance = %name, "Created config instance");
                entry.insert(resolver)
            }
        };
        Ok(slot)
    }

    /// Like [`new_instance`](Self::new_instance), but fails if `name` is
    /// already registered.
    pub fn create_instance(
        &mut self,
        name: &str,
        options: ResolverOptions,
    ) -> Result<&mut ConfigResolver> {
        if self.instances.contains_key(name) {
            return Err(ConfigError::AlreadyExists(name.to_string()));
        }
        self.new_instance(name, options)
    }

    /// Look up an instance by name.
    pub fn get_instance(&self, name: &str) -> Option<&ConfigResolver> {
        self.instances.get(name)
    }

    pub fn get_instance_mut(&mut self, name: &str) -> Option<&mut ConfigResolver> {
        self.instances.get_mut(name)
    }

    /// Return the instance under `name`, creating it on a miss.
    ///
    /// `options` are only used when the instance has to be created.
    pub fn fetch_instance(
        &mut self,
        name: &str,
        options: ResolverOptions,
    ) -> Result<&mut ConfigResolver> {
        match self.instances.entry(name.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let resolver = ConfigResolver::new(name, options)?;
                debug!(instance = %name, "Created config instance");
                Ok(entry.insert(resolver))
            }
        }
    }

    /// The instance registered under [`DEFAULT_INSTANCE`], if any.
    pub fn default_instance(&self) -> Option<&ConfigResolver> {
        self.get_instance(DEFAULT_INSTANCE)
    }

    /// Drop every registered instance.
    pub fn clear_instances(&mut self) {
        debug!(count = self.instances.len(), "Clearing config instances");
        self.instances.clear();
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Registered instance names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.instances.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
