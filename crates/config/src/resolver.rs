//! Resolution of the environment into a complete deployment configuration.

use crate::{
    compiler::CompilerSettings,
    env::EnvSnapshot,
    error::ConfigError,
    network::{NetworkDescriptor, NetworkTemplate},
};
use serde::Serialize;
use std::collections::BTreeMap;

/// Networks every resolver starts with.
pub const DEFAULT_NETWORKS: &[NetworkTemplate] =
    &[NetworkTemplate::development(), NetworkTemplate::testnet()];

/// Compiler settings plus every network, keyed by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfiguration {
    pub compiler: CompilerSettings,
    pub networks: BTreeMap<String, NetworkDescriptor>,
}

impl ResolvedConfiguration {
    pub fn network(&self, name: &str) -> Option<&NetworkDescriptor> {
        self.networks.get(name)
    }

    /// Look up a network by name, failing with the list of known names.
    pub fn select(&self, name: &str) -> Result<&NetworkDescriptor, ConfigError> {
        self.network(name).ok_or_else(|| ConfigError::UnknownNetwork {
            name: name.to_string(),
            available: self.network_names().collect::<Vec<_>>().join(", "),
        })
    }

    /// Names of every resolved network, in sorted order.
    pub fn network_names(&self) -> impl Iterator<Item = &str> {
        self.networks.keys().map(String::as_str)
    }

    /// Networks whose transactions have real-world consequences.
    pub fn live_networks(&self) -> impl Iterator<Item = &NetworkDescriptor> {
        self.networks.values().filter(|network| network.is_live)
    }
}

/// Turns an environment snapshot into a [`ResolvedConfiguration`].
///
/// The network table is plain data: adding a target means adding a
/// [`NetworkTemplate`] with [`NetworkConfigResolver::with_network`].
#[derive(Debug, Clone)]
pub struct NetworkConfigResolver {
    compiler: CompilerSettings,
    networks: Vec<NetworkTemplate>,
}

impl Default for NetworkConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl NetworkConfigResolver {
    /// Resolver with the project's compiler settings and default networks.
    pub fn new() -> Self {
        Self {
            compiler: CompilerSettings::project(),
            networks: DEFAULT_NETWORKS.to_vec(),
        }
    }

    /// Add a network, replacing any existing entry with the same name.
    pub fn with_network(mut self, template: NetworkTemplate) -> Self {
        self.networks.retain(|existing| existing.name != template.name);
        self.networks.push(template);
        self
    }

    /// Resolve every network against `env`.
    ///
    /// Never fails. Missing variables produce empty substitutions or empty
    /// credential lists in the returned descriptors.
    pub fn resolve(&self, env: &EnvSnapshot) -> ResolvedConfiguration {
        let networks = self
            .networks
            .iter()
            .map(|template| (template.name.to_string(), template.resolve(env)))
            .collect();

        ResolvedConfiguration {
            compiler: self.compiler,
            networks,
        }
    }
}

/// Resolve `env` with the default network table.
pub fn resolve(env: &EnvSnapshot) -> ResolvedConfiguration {
    NetworkConfigResolver::new().resolve(env)
}
