//! Deployment configuration for the contract toolchain.
//!
//! This crate provides:
//! - Fixed compiler settings for the contract build
//! - Network descriptors (development, testnet) resolved from the environment
//! - Point-of-use checks that report misconfigured networks

pub mod compiler;
pub mod env;
pub mod error;
pub mod network;
pub mod resolver;

pub use compiler::{CompilerSettings, EvmVersion};
pub use env::{inert_vars, EnvSnapshot, RESERVED_VARS};
pub use error::{ConfigError, MisconfiguredNetwork};
pub use network::{
    is_dev_chain, Credential, EndpointTemplate, NetworkDescriptor, NetworkTemplate,
    DEVELOPMENT_CHAIN_ID, DEV_CHAIN_IDS,
};
pub use resolver::{resolve, NetworkConfigResolver, ResolvedConfiguration, DEFAULT_NETWORKS};
