//! Deployment environment classification.
//!
//! The environment is a free-form string read from [`ENV_VAR`]. Known values
//! are `development`, `test`, `testproduction`, `load`, `staging` and
//! `production`; anything else classifies as neither production-like nor test.

/// Environment variable holding the deployment environment name.
pub const ENV_VAR: &str = "APP_ENV";

/// Label used when neither an explicit label nor [`ENV_VAR`] is set.
pub const DEFAULT_LABEL: &str = "production";

/// Read [`ENV_VAR`], returning None if unset, empty, or whitespace-only.
pub fn current_env() -> Option<String> {
    std::env::var(ENV_VAR).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Whether `env` behaves like production (real data, real traffic).
pub fn is_production_like(env: &str) -> bool {
    matches!(env, "production" | "staging" | "load" | "testproduction")
}

/// Whether `env` is a test run.
pub fn is_test_env(env: &str) -> bool {
    matches!(env, "test" | "testproduction")
}
