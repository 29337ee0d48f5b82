//! Environment lookup abstraction.
//!
//! Only the binary reads the real process environment. Everything else receives
//! values through an [`EnvSource`], which lets tests supply a plain map instead of
//! mutating global state.

use std::collections::HashMap;

/// Read-only view of key/value configuration.
pub trait EnvSource {
    /// Value of `key`, or `None` when unset.
    ///
    /// An empty string is a present value.
    fn get(&self, key: &str) -> Option<String>;
}

/// The current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl EnvSource for HashMap<&str, &str> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).map(|v| (*v).to_owned())
    }
}

/// Read a variable with a default fallback. Unset or blank values return `default`.
///
/// Runs before the tracing subscriber exists, so it does not log.
pub fn env_or_default(env: &impl EnvSource, var: &str, default: &str) -> String {
    env.get(var).filter(|v| !v.trim().is_empty()).unwrap_or_else(|| default.to_owned())
}
