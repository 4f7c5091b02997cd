use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No network with this name was resolved
    #[error("Unknown network: {name} (available: {available})")]
    UnknownNetwork { name: String, available: String },
}

/// A network that resolved fine but cannot serve the requested use.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MisconfiguredNetwork {
    /// The network runs in-process and has no RPC endpoint
    #[error("Network {network} is simulated in-process and has no RPC endpoint")]
    NoEndpoint { network: String },

    /// The endpoint template was filled with empty values
    #[error("Network {network} endpoint is missing values for: {}", .missing.join(", "))]
    IncompleteEndpoint {
        network: String,
        missing: Vec<String>,
    },

    /// No signing key was supplied for the network
    #[error("Network {network} has no signer available")]
    NoSigner { network: String },
}
