//! Human and machine readable views of a resolved configuration.

use clap::ValueEnum;
use config::{MisconfiguredNetwork, NetworkDescriptor, ResolvedConfiguration};
use serde::Serialize;

/// Output format for `show`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Toml,
}

/// Render the configuration. Credentials are always redacted.
pub fn render(config: &ResolvedConfiguration, format: OutputFormat) -> eyre::Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(config)?,
        OutputFormat::Toml => toml::to_string_pretty(config)?,
    };
    Ok(rendered)
}

/// One line of the `networks` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkStatus {
    pub name: String,
    pub simulated: bool,
    pub live: bool,
    pub signer: bool,
    pub chain_id: Option<u64>,
}

impl NetworkStatus {
    pub fn of(network: &NetworkDescriptor) -> Self {
        Self {
            name: network.name.clone(),
            simulated: network.is_simulated(),
            live: network.is_live,
            signer: network.has_signer(),
            chain_id: network.chain_id,
        }
    }
}

impl std::fmt::Display for NetworkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = if self.simulated { "simulated" } else { "remote" };
        let live = if self.live { "live" } else { "disposable" };
        let signer = if self.signer { "signer" } else { "no signer" };
        write!(f, "{:<12} {:<9} {:<10} {}", self.name, kind, live, signer)?;
        if let Some(chain_id) = self.chain_id {
            write!(f, " (chain {})", chain_id)?;
        }
        Ok(())
    }
}

pub fn network_statuses(config: &ResolvedConfiguration) -> Vec<NetworkStatus> {
    config.networks.values().map(NetworkStatus::of).collect()
}

/// Everything that would stop a deployment to `network`.
///
/// Simulated networks sign with in-process accounts and have nothing to
/// check. Remote networks need a complete endpoint and a key.
pub fn check_network(network: &NetworkDescriptor) -> Vec<MisconfiguredNetwork> {
    if network.is_simulated() {
        return Vec::new();
    }

    [
        network.require_endpoint().err(),
        network.require_credential().err(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{resolve, EnvSnapshot};

    #[test]
    fn test_status_line() {
        let config = resolve(&EnvSnapshot::new());
        let statuses = network_statuses(&config);

        assert_eq!(statuses.len(), 2);
        assert_eq!(
            statuses[0].to_string(),
            "development  simulated disposable no signer (chain 1337)"
        );
        assert_eq!(
            statuses[1].to_string(),
            "testnet      remote    live       no signer"
        );
    }

    #[test]
    fn test_check_simulated_network() {
        let config = resolve(&EnvSnapshot::new());
        assert!(check_network(config.network("development").unwrap()).is_empty());
    }

    #[test]
    fn test_check_reports_every_defect() {
        let config = resolve(&EnvSnapshot::new());
        let defects = check_network(config.network("testnet").unwrap());

        assert_eq!(defects.len(), 2);
        assert!(matches!(defects[0], MisconfiguredNetwork::IncompleteEndpoint { .. }));
        assert!(matches!(defects[1], MisconfiguredNetwork::NoSigner { .. }));
    }
}
