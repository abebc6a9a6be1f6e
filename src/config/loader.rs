//! Configuration resolver with file discovery and merging.
//!
//! A resolver scans its config directory for a `default` source and a
//! label-specific source, trying each supported file type in turn, and
//! deep-merges everything it finds into a [`KeyStore`].
//!
//! Precedence, lowest to highest:
//! 1. `default.json`, `default.yml`, `default.yaml`
//! 2. `<label>.json`, `<label>.yml`, `<label>.yaml` (or the explicit `file`)
//! 3. Package metadata (`app.version`, `app.description`, `package`)

use super::package::PackageSource;
use super::store::KeyStore;
use crate::env::{self, DEFAULT_LABEL};
use crate::error::{ConfigError, ConfigKeyError, Result};
use crate::logging::Logger;
use serde_json::{Map, Value};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Supported source file types, in load order.
pub const FILE_TYPES: [&str; 3] = ["json", "yml", "yaml"];

/// File stem of the source loaded for every label.
pub const DEFAULT_STEM: &str = "default";

/// Directory under the base path scanned when no `config_path` is given.
pub const CONFIG_DIR: &str = "config";

/// Validation hook carried for collaborators; not invoked during resolution.
pub type ValidateHook = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Transform hook carried for collaborators; not invoked during resolution.
pub type TransformHook = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// Options recognised by [`ConfigResolver::new`].
#[derive(Clone, Default)]
pub struct ResolverOptions {
    /// Base directory (default: current working directory)
    pub path: Option<PathBuf>,
    /// Directory to scan for sources (default: `<path>/config`)
    pub config_path: Option<PathBuf>,
    /// Explicit source file, relative to the config directory
    pub file: Option<PathBuf>,
    /// Environment label (default: `APP_ENV`, then `production`)
    pub label: Option<String>,
    /// Package metadata source
    pub package: PackageSource,
    pub validate: Option<ValidateHook>,
    pub transform: Option<TransformHook>,
    /// Diagnostic sink (default: a logger named after the instance)
    pub logger: Option<Logger>,
}

impl ResolverOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_config_path(mut self, config_path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(config_path.into());
        self
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_package(mut self, package: impl Into<PackageSource>) -> Self {
        self.package = package.into();
        self
    }

    pub fn with_validate(mut self, hook: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        self.validate = Some(Arc::new(hook));
        self
    }

    pub fn with_transform(mut self, hook: impl Fn(Value) -> Value + Send + Sync + 'static) -> Self {
        self.transform = Some(Arc::new(hook));
        self
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }
}

impl fmt::Debug for ResolverOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverOptions")
            .field("path", &self.path)
            .field("config_path", &self.config_path)
            .field("file", &self.file)
            .field("label", &self.label)
            .field("package", &self.package)
            .field("validate", &self.validate.is_some())
            .field("transform", &self.transform.is_some())
            .field("logger", &self.logger)
            .finish()
    }
}

/// A fully resolved configuration instance.
///
/// Construction runs discovery and merging once; afterwards the tree is only
/// changed through [`set`](Self::set) and [`delete`](Self::delete).
pub struct ConfigResolver {
    name: String,
    label: String,
    file: Option<PathBuf>,
    base_path: PathBuf,
    config_path: PathBuf,
    loaded: bool,
    store: KeyStore,
    /// Source files merged so far, in merge order
    sources: Vec<PathBuf>,
    logger: Logger,
    validate: Option<ValidateHook>,
    transform: Option<TransformHook>,
}

impl ConfigResolver {
    /// Build and resolve a configuration.
    ///
    /// Fails if a source cannot be parsed, a source has an invalid `path`
    /// key, requested package metadata cannot be read, or no source file was
    /// found at all.
    pub fn new(name: impl Into<String>, options: ResolverOptions) -> Result<Self> {
        let name = name.into();
        let ResolverOptions {
            path,
            config_path,
            file,
            label,
            package,
            validate,
            transform,
            logger,
        } = options;

        let base_path = absolute(path.as_deref().unwrap_or_else(|| Path::new(".")));
        let config_path = match config_path {
            Some(dir) => absolute(&dir),
            None => base_path.join(CONFIG_DIR),
        };
        let label = label
            .filter(|l| !l.trim().is_empty())
            .or_else(env::current_env)
            .unwrap_or_else(|| DEFAULT_LABEL.to_string());
        let logger = logger.unwrap_or_else(|| Logger::new().with_name(format!("config:{name}")));

        let mut resolver = Self {
            name,
            label,
            file,
            base_path,
            config_path,
            loaded: false,
            store: KeyStore::new(),
            sources: Vec::new(),
            logger,
            validate,
            transform,
        };
        resolver.resolve(&package)?;
        Ok(resolver)
    }

    fn resolve(&mut self, package: &PackageSource) -> Result<()> {
        self.store.clear();
        self.sources.clear();
        self.loaded = false;

        let base = self.base_path.to_string_lossy().into_owned();
        self.store.set("path.base", base);

        self.load_all_types(DEFAULT_STEM)?;

        match self.file.clone() {
            Some(file) => {
                let path = self.config_path.join(file);
                self.load_file(&path, false)?;
            }
            None => {
                let label = self.label.clone();
                self.load_all_types(&label)?;
            }
        }

        if let Some(manifest) = package.manifest(&self.base_path, &self.label)? {
            self.apply_package(manifest);
        }

        if !self.loaded {
            self.logger.warn(&format!(
                "no config files found in {} for label {}",
                self.config_path.display(),
                self.label
            ));
            return Err(ConfigError::NoFilesLoaded {
                config_path: self.config_path.clone(),
            });
        }

        Ok(())
    }

    /// Load every `<stem>.<type>` that exists, in [`FILE_TYPES`] order.
    ///
    /// Returns how many files were merged.
    fn load_all_types(&mut self, stem: &str) -> Result<usize> {
        let mut count = 0;
        for file_type in FILE_TYPES {
            let path = self.config_path.join(format!("{stem}.{file_type}"));
            self.logger
                .debug(&format!("checking for config file {}", path.display()));
            if self.load_file(&path, false)? {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Load a single source file and merge it into the tree.
    ///
    /// A missing file returns `Ok(false)` unless `fail` is set, in which case
    /// it is an error. Unreadable or malformed files are always an error.
    pub fn load_file(&mut self, path: impl AsRef<Path>, fail: bool) -> Result<bool> {
        let path = path.as_ref();
        if !path.exists() {
            if fail {
                return Err(ConfigError::FileNotFound {
                    path: path.to_path_buf(),
                });
            }
            return Ok(false);
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            let message = format!("failed to read {}: {}", path.display(), e);
            self.logger.error(&message);
            ConfigError::load_failed(&self.label, path, e)
        })?;
        let tree = parse_source(path, &content).map_err(|reason| {
            let message = format!("failed to parse {}: {}", path.display(), reason);
            self.logger.error(&message);
            ConfigError::load_failed(&self.label, path, reason)
        })?;
        let tree = validate_source(path, tree)?;

        self.store.merge(tree);
        self.loaded = true;
        self.sources.push(path.to_path_buf());
        self.logger.info(&format!(
            "merged config file {} [{}]",
            path.display(),
            self.label
        ));
        Ok(true)
    }

    fn apply_package(&mut self, manifest: Value) {
        if let Some(version) = manifest.get("version") {
            self.store.set("app.version", version.clone());
        }
        if let Some(description) = manifest.get("description") {
            self.store.set("app.description", description.clone());
        }
        self.store.set("package", manifest);
    }

    /// Store `<path.base>/<segments...>` at `path.<key>`.
    ///
    /// A dotted `key` nests below `path` like any other dotted path.
    pub fn set_local_path<I>(
        &mut self,
        key: &str,
        segments: I,
    ) -> std::result::Result<&Value, ConfigKeyError>
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        if key.is_empty() {
            return Err(ConfigKeyError::InvalidKeyLength);
        }

        let mut local = self
            .store
            .get("path.base")?
            .as_str()
            .map(PathBuf::from)
            .ok_or_else(|| ConfigKeyError::InvalidKey("path.base".to_string()))?;
        for segment in segments {
            local.push(segment);
        }

        let value = local.to_string_lossy().into_owned();
        Ok(self.store.set(&format!("path.{key}"), value))
    }

    // Key access

    /// Get a config key, failing if it does not exist.
    pub fn get(&self, path: &str) -> std::result::Result<&Value, ConfigKeyError> {
        self.store.get(path)
    }

    /// Get a config key, or `None` if it does not exist.
    pub fn fetch(&self, path: &str) -> Option<&Value> {
        self.store.fetch(path)
    }

    pub fn exists(&self, path: &str) -> bool {
        self.store.exists(path)
    }

    /// Set a config key, returning the stored value.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> &Value {
        self.logger.trace(&format!("set {} {}", self.label, path));
        self.store.set(path, value)
    }

    /// Delete a config key. Returns whether it existed.
    pub fn delete(&mut self, path: &str) -> bool {
        self.logger.trace(&format!("delete {} {}", self.label, path));
        self.store.delete(path)
    }

    /// The whole merged tree.
    pub fn config(&self) -> &Map<String, Value> {
        self.store.as_map()
    }

    /// Owned snapshot of the whole merged tree.
    pub fn config_value(&self) -> Value {
        self.store.to_value()
    }

    pub fn store(&self) -> &KeyStore {
        &self.store
    }

    // Metadata

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Whether at least one source file was merged. Always true for a
    /// successfully constructed resolver.
    pub fn loaded(&self) -> bool {
        self.loaded
    }

    /// Source files merged during resolution, in merge order.
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn validate_hook(&self) -> Option<&ValidateHook> {
        self.validate.as_ref()
    }

    pub fn transform_hook(&self) -> Option<&TransformHook> {
        self.transform.as_ref()
    }

    // Environment

    /// The current environment name, read at call time.
    pub fn env(&self) -> Option<String> {
        env::current_env()
    }

    /// Whether the current environment is production-like. False when unset.
    pub fn production_like_env(&self) -> bool {
        self.env().is_some_and(|e| env::is_production_like(&e))
    }

    /// Whether the current environment is a test run. False when unset.
    pub fn test_env(&self) -> bool {
        self.env().is_some_and(|e| env::is_test_env(&e))
    }
}

impl fmt::Debug for ConfigResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigResolver")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("file", &self.file)
            .field("base_path", &self.base_path)
            .field("config_path", &self.config_path)
            .field("loaded", &self.loaded)
            .field("sources", &self.sources)
            .finish_non_exhaustive()
    }
}

/// Resolve `path` against the current working directory.
fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    }
}

/// Parse a source by extension: `.json` is strict JSON, anything else YAML.
fn parse_source(path: &Path, content: &str) -> std::result::Result<Value, String> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(content).map_err(|e| e.to_string())
    } else if content.trim().is_empty() {
        Ok(Value::Null)
    } else {
        parse_yaml(content)
    }
}

/// Parse YAML with merge keys (`<<: *anchor`) applied.
///
/// Non-finite floats (`.nan`, `.inf`) have no JSON representation and are
/// rejected rather than converted to null.
fn parse_yaml(content: &str) -> std::result::Result<Value, String> {
    let mut tree: serde_yaml::Value = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
    tree.apply_merge().map_err(|e| e.to_string())?;
    if let Some(key) = find_non_finite(&tree, "") {
        return Err(format!("non-finite number at `{key}`"));
    }
    serde_json::to_value(tree).map_err(|e| e.to_string())
}

/// Dotted location of the first NaN or infinite number in `value`.
fn find_non_finite(value: &serde_yaml::Value, at: &str) -> Option<String> {
    let child = |segment: &str| {
        if at.is_empty() {
            segment.to_string()
        } else {
            format!("{at}.{segment}")
        }
    };
    match value {
        serde_yaml::Value::Number(n) if !n.is_finite() => Some(at.to_string()),
        serde_yaml::Value::Sequence(items) => items
            .iter()
            .enumerate()
            .find_map(|(i, item)| find_non_finite(item, &child(&i.to_string()))),
        serde_yaml::Value::Mapping(map) => map.iter().find_map(|(k, v)| {
            let segment = match k {
                serde_yaml::Value::String(s) => s.clone(),
                other => serde_yaml::to_string(other)
                    .map(|s| s.trim_end().to_string())
                    .unwrap_or_default(),
            };
            find_non_finite(v, &child(&segment))
        }),
        serde_yaml::Value::Tagged(tagged) => find_non_finite(&tagged.value, at),
        _ => None,
    }
}

/// Check the structure of a parsed source before it is merged.
///
/// An empty document is an empty mapping. The reserved `path` key, when
/// present, must be a mapping.
fn validate_source(path: &Path, tree: Value) -> Result<Map<String, Value>> {
    let map = match tree {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        _ => {
            return Err(ConfigError::NotAMapping {
                path: path.to_path_buf(),
            });
        }
    };

    match map.get("path") {
        None | Some(Value::Object(_)) => Ok(map),
        Some(Value::Null) => Err(ConfigError::PathKeyNull {
            path: path.to_path_buf(),
        }),
        Some(other) => Err(ConfigError::PathKeyNotObject {
            path: path.to_path_buf(),
            found: kind_name(other),
        }),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    /// Create `<temp>/config` populated with the given files.
    fn fixture(files: &[(&str, &str)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        let config_dir = temp.path().join(CONFIG_DIR);
        std::fs::create_dir_all(&config_dir).unwrap();
        for (name, content) in files {
            std::fs::write(config_dir.join(name), content).unwrap();
        }
        temp
    }

    fn options(temp: &TempDir) -> ResolverOptions {
        ResolverOptions::new()
            .with_path(temp.path())
            .with_label("test")
            .with_logger(Logger::silent())
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    /// Run `f` under a subscriber capped at `level` and return what it logged.
    fn capture_logs(level: tracing::Level, f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_default_and_label_merge_precedence() {
        let temp = fixture(&[("default.yml", "a: 1\nb: 1\n"), ("test.yml", "b: 2\nc: 3\n")]);
        let cfg = ConfigResolver::new("precedence", options(&temp)).unwrap();

        assert_eq!(cfg.get("a").unwrap(), &json!(1));
        assert_eq!(cfg.get("b").unwrap(), &json!(2));
        assert_eq!(cfg.get("c").unwrap(), &json!(3));
        assert!(cfg.loaded());
        assert_eq!(cfg.sources().len(), 2);
    }

    #[test]
    fn test_merged_files_logged_at_info_and_candidates_at_debug() {
        let temp = fixture(&[("test.yml", "key: value\n")]);
        let run = || {
            let opts = options(&temp).with_logger(Logger::new());
            ConfigResolver::new("logged", opts).unwrap();
        };

        let info = capture_logs(tracing::Level::INFO, run);
        assert!(info.contains("merged config file"), "{info}");
        assert!(!info.contains("checking for config file"), "{info}");

        let debug = capture_logs(tracing::Level::DEBUG, run);
        assert!(debug.contains("checking for config file"), "{debug}");
        assert!(debug.contains("merged config file"), "{debug}");
    }

    #[test]
    fn test_path_base_is_set() {
        let temp = fixture(&[("test.yml", "key: value\n")]);
        let cfg = ConfigResolver::new("base", options(&temp)).unwrap();
        assert_eq!(
            cfg.get("path.base").unwrap(),
            &json!(temp.path().to_string_lossy())
        );
        assert_eq!(cfg.config_path(), temp.path().join(CONFIG_DIR));
    }

    #[test]
    fn test_all_file_types_merge_in_order() {
        let temp = fixture(&[
            ("default.json", r#"{"from": "json", "json": true}"#),
            ("default.yml", "from: yml\nyml: true\n"),
            ("default.yaml", "from: yaml\nyaml: true\n"),
        ]);
        let cfg = ConfigResolver::new("types", options(&temp)).unwrap();

        assert_eq!(cfg.get("from").unwrap(), &json!("yaml"));
        assert_eq!(cfg.get("json").unwrap(), &json!(true));
        assert_eq!(cfg.get("yml").unwrap(), &json!(true));
        assert_eq!(cfg.get("yaml").unwrap(), &json!(true));
    }

    #[test]
    fn test_missing_file_without_fail_is_noop() {
        let temp = fixture(&[("test.yml", "key: value\n")]);
        let mut cfg = ConfigResolver::new("noop", options(&temp)).unwrap();
        let loaded = cfg.load_file(temp.path().join("nope.yml"), false).unwrap();
        assert!(!loaded);
    }

    #[test]
    fn test_missing_file_with_fail_errors() {
        let temp = fixture(&[("test.yml", "key: value\n")]);
        let mut cfg = ConfigResolver::new("fail", options(&temp)).unwrap();
        let err = cfg.load_file(temp.path().join("nope.yml"), true).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
    }

    #[test]
    fn test_load_file_after_construction_merges() {
        let temp = fixture(&[("test.yml", "key: value\n"), ("extra.json", r#"{"key": "extra"}"#)]);
        let mut cfg = ConfigResolver::new("extra", options(&temp)).unwrap();
        let path = temp.path().join(CONFIG_DIR).join("extra.json");
        assert!(cfg.load_file(&path, true).unwrap());
        assert_eq!(cfg.get("key").unwrap(), &json!("extra"));
        assert_eq!(cfg.sources().last(), Some(&path));
    }

    #[test]
    fn test_empty_yaml_counts_as_loaded() {
        let temp = fixture(&[("test.yml", "")]);
        let cfg = ConfigResolver::new("empty", options(&temp)).unwrap();
        assert!(cfg.loaded());
    }

    #[test]
    fn test_non_mapping_document_rejected() {
        let temp = fixture(&[("test.yml", "- a\n- b\n")]);
        let err = ConfigResolver::new("list", options(&temp)).unwrap_err();
        assert!(matches!(err, ConfigError::NotAMapping { .. }));
    }

    #[test]
    fn test_validate_source_path_key() {
        let file = Path::new("x.yml");
        assert!(validate_source(file, json!({"path": {"logs": "/var/log"}})).is_ok());
        assert!(validate_source(file, json!({"other": null})).is_ok());
        assert!(matches!(
            validate_source(file, json!({"path": null})),
            Err(ConfigError::PathKeyNull { .. })
        ));
        assert!(matches!(
            validate_source(file, json!({"path": [1]})),
            Err(ConfigError::PathKeyNotObject { found: "list", .. })
        ));
        assert!(matches!(
            validate_source(file, json!({"path": 3})),
            Err(ConfigError::PathKeyNotObject { found: "number", .. })
        ));
    }

    #[test]
    fn test_parse_source_by_extension() {
        // YAML syntax is not valid JSON
        assert!(parse_source(Path::new("a.json"), "a: 1").is_err());
        assert_eq!(
            parse_source(Path::new("a.yml"), "a: 1").unwrap(),
            json!({"a": 1})
        );
        // JSON is valid YAML
        assert_eq!(
            parse_source(Path::new("a.conf"), r#"{"a": 1}"#).unwrap(),
            json!({"a": 1})
        );
    }

    #[test]
    fn test_set_local_path() {
        let temp = fixture(&[("test.yml", "key: value\n")]);
        let mut cfg = ConfigResolver::new("local", options(&temp)).unwrap();

        let stored = cfg.set_local_path("logs", ["var", "log"]).unwrap().clone();
        let expected = temp.path().join("var").join("log");
        assert_eq!(stored, json!(expected.to_string_lossy()));
        assert_eq!(cfg.get("path.logs").unwrap(), &stored);
    }

    #[test]
    fn test_set_local_path_rejects_empty_key() {
        let temp = fixture(&[("test.yml", "key: value\n")]);
        let mut cfg = ConfigResolver::new("local", options(&temp)).unwrap();

        assert_eq!(
            cfg.set_local_path("", ["x"]).unwrap_err(),
            ConfigKeyError::InvalidKeyLength
        );
    }

    #[test]
    fn test_set_local_path_dotted_key_nests() {
        let temp = fixture(&[("test.yml", "key: value\n")]);
        let mut cfg = ConfigResolver::new("local", options(&temp)).unwrap();

        cfg.set_local_path("logs.app", ["log", "app"]).unwrap();
        let expected = temp.path().join("log").join("app");
        assert_eq!(
            cfg.get("path.logs.app").unwrap(),
            &json!(expected.to_string_lossy())
        );
    }

    #[test]
    fn test_yaml_merge_keys_are_applied() {
        let parsed = parse_source(
            Path::new("a.yml"),
            "base: &b {host: localhost, port: 1}\nprod: {<<: *b, port: 2}\n",
        )
        .unwrap();
        assert_eq!(parsed["prod"], json!({"host": "localhost", "port": 2}));
    }

    #[test]
    fn test_yaml_non_finite_numbers_rejected() {
        for content in [
            "ratio: .nan\n",
            "limit: .inf\n",
            "nested:\n  low: -.inf\n",
            "xs: [1, .nan]\n",
        ] {
            let err = parse_source(Path::new("a.yml"), content).unwrap_err();
            assert!(err.contains("non-finite"), "{content:?}: {err}");
        }
        let err = parse_source(Path::new("a.yml"), "nested:\n  low: -.inf\n").unwrap_err();
        assert!(err.contains("`nested.low`"), "{err}");
    }

    #[test]
    fn test_set_local_path_without_base_fails() {
        let temp = fixture(&[("test.yml", "key: value\n")]);
        let mut cfg = ConfigResolver::new("local", options(&temp)).unwrap();
        cfg.delete("path.base");
        assert_eq!(
            cfg.set_local_path("logs", ["log"]).unwrap_err(),
            ConfigKeyError::UnknownKey("path.base".into())
        );
    }

    #[test]
    fn test_hooks_are_carried_not_applied() {
        let temp = fixture(&[("test.yml", "key: value\n")]);
        let opts = options(&temp)
            .with_validate(|_| false)
            .with_transform(|_| Value::Null);
        let cfg = ConfigResolver::new("hooks", opts).unwrap();

        assert_eq!(cfg.get("key").unwrap(), &json!("value"));
        let validate = cfg.validate_hook().unwrap();
        assert!(!validate(&json!({})));
        let transform = cfg.transform_hook().unwrap();
        assert_eq!(transform(json!(1)), Value::Null);
    }

    #[test]
    fn test_default_logger_named_after_instance() {
        let temp = fixture(&[("test.yml", "key: value\n")]);
        let opts = ResolverOptions::new().with_path(temp.path()).with_label("test");
        let cfg = ConfigResolver::new("named", opts).unwrap();
        assert_eq!(cfg.logger().name(), Some("config:named"));
    }
}
