//! RPC providers and signers for resolved networks.
//!
//! This is where a misconfigured network is actually rejected: the resolver
//! hands out incomplete descriptors without complaint, and the functions here
//! refuse to build a provider or signer from them.

use alloy_network::EthereumWallet;
use alloy_provider::{Provider, ProviderBuilder};
use alloy_signer_local::PrivateKeySigner;
use config::{MisconfiguredNetwork, NetworkDescriptor};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum ClientError {
    /// The descriptor cannot serve the requested use
    #[error(transparent)]
    Misconfigured(#[from] MisconfiguredNetwork),

    /// Error parsing or validating URLs
    #[error("Invalid RPC URL for {network}: {reason}")]
    InvalidUrl { network: String, reason: String },

    /// Error talking to the RPC endpoint
    #[error("Connection error: {0}")]
    Connection(String),

    /// Error with private key
    #[error("Invalid private key for {network}: {reason}")]
    InvalidPrivateKey { network: String, reason: String },

    /// The node serves a different chain than the descriptor declares
    #[error("Chain id mismatch on {network}: expected {expected}, node reports {actual}")]
    ChainIdMismatch {
        network: String,
        expected: u64,
        actual: u64,
    },
}

fn parse_url(network: &NetworkDescriptor) -> Result<reqwest::Url, ClientError> {
    let rpc_url = network.require_endpoint()?;
    // The url carries the provider secret, so only the parse error is reported.
    rpc_url.parse().map_err(|e| ClientError::InvalidUrl {
        network: network.name.clone(),
        reason: format!("{}", e),
    })
}

/// Create an HTTP provider for a remote network.
pub async fn create_provider(
    network: &NetworkDescriptor,
) -> Result<impl Provider + Clone, ClientError> {
    let url = parse_url(network)?;
    debug!(network = %network.name, "Creating provider");

    let provider = ProviderBuilder::new().connect_http(url);

    Ok(provider)
}

/// Build a local signer from the network's first credential.
pub fn signer_for(network: &NetworkDescriptor) -> Result<PrivateKeySigner, ClientError> {
    let credential = network.require_credential()?;

    credential
        .expose()
        .parse()
        .map_err(|e| ClientError::InvalidPrivateKey {
            network: network.name.clone(),
            reason: format!("{}", e),
        })
}

/// Create a provider with wallet signing capability.
pub fn create_wallet_provider(
    network: &NetworkDescriptor,
) -> Result<impl Provider + Clone, ClientError> {
    let url = parse_url(network)?;
    let signer = signer_for(network)?;

    if network.is_live {
        warn!(
            network = %network.name,
            address = %signer.address(),
            "Signing on a live network"
        );
    }

    let wallet = EthereumWallet::from(signer);

    let provider = ProviderBuilder::new().wallet(wallet).connect_http(url);

    Ok(provider)
}

/// Ask the node for its chain id and compare it with the descriptor's, if any.
///
/// A chain id that contradicts the network's liveness flag is logged but not
/// rejected. Returns the chain id the node reports.
pub async fn verify_chain_id<P>(
    provider: &P,
    network: &NetworkDescriptor,
) -> Result<u64, ClientError>
where
    P: Provider,
{
    let actual = provider
        .get_chain_id()
        .await
        .map_err(|e| ClientError::Connection(format!("{}", e)))?;

    if let Some(expected) = network.chain_id {
        if expected != actual {
            return Err(ClientError::ChainIdMismatch {
                network: network.name.clone(),
                expected,
                actual,
            });
        }
    }

    if network.contradicts_chain(actual) {
        warn!(
            network = %network.name,
            chain_id = actual,
            live = network.is_live,
            "Node chain id contradicts the network's liveness"
        );
    }

    Ok(actual)
}
