//! Environment snapshots.
//!
//! The resolver never reads process state itself. Callers capture the
//! environment once into an [`EnvSnapshot`] and hand it over explicitly.

use std::collections::BTreeMap;

/// Reserved provider identity for networks that are not wired yet.
pub const PROJECT_ID: &str = "PROJECT_ID";
/// Reserved provider secret for networks that are not wired yet.
pub const PROJECT_SECRET: &str = "PROJECT_SECRET";
/// Signing key for the remote test network.
pub const TESTNET_PRIVATE_KEY: &str = "TESTNET_PRIVATE_KEY";
/// Provider project id substituted into the testnet endpoint path.
pub const TESTNET_PROJECT_ID: &str = "TESTNET_PROJECT_ID";
/// Provider project secret substituted into the testnet endpoint userinfo.
pub const TESTNET_PROJECT_SECRET: &str = "TESTNET_PROJECT_SECRET";

/// Variables that are read but not consumed by any network descriptor.
pub const RESERVED_VARS: &[&str] = &[PROJECT_ID, PROJECT_SECRET];

/// Immutable name → value view of the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Empty snapshot.
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Capture the current process environment.
    ///
    /// Variables whose name or value is not valid unicode are skipped.
    pub fn from_process() -> Self {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a variable.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Insert a variable only if it is not already present.
    pub fn insert_if_absent(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.entry(key.into()).or_insert_with(|| value.into());
    }

    /// Raw lookup; an empty value is returned as `Some("")`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Lookup that treats an empty value the same as an absent one.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// True when no variable was captured.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Reserved variables that are set to a non-empty value but feed nothing.
pub fn inert_vars(env: &EnvSnapshot) -> Vec<&'static str> {
    RESERVED_VARS
        .iter()
        .copied()
        .filter(|name| env.get_non_empty(name).is_some())
        .collect()
}
