//! Network configuration for contract deployment.
//!
//! Networks are declared as [`NetworkTemplate`] entries and turned into
//! [`NetworkDescriptor`]s against an environment snapshot. Resolution never
//! fails: missing variables leave the descriptor incomplete, and the
//! `require_*` checks report that at the point of use.

use crate::{
    env::{EnvSnapshot, TESTNET_PRIVATE_KEY, TESTNET_PROJECT_ID, TESTNET_PROJECT_SECRET},
    error::MisconfiguredNetwork,
};
use serde::{Serialize, Serializer};
use std::fmt;

/// Chain id of the in-process development chain.
pub const DEVELOPMENT_CHAIN_ID: u64 = 1337;

/// Chain ids that belong to disposable local chains.
pub const DEV_CHAIN_IDS: &[u64] = &[DEVELOPMENT_CHAIN_ID];

/// Infura host serving the public test network.
pub const TESTNET_HOST: &str = "kovan.infura.io";

/// Returns true for chain ids of local development chains.
pub fn is_dev_chain(chain_id: u64) -> bool {
    DEV_CHAIN_IDS.contains(&chain_id)
}

/// A private key used to sign transactions.
///
/// The key is only ever held in memory. `Debug` and `Serialize` never print it.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// The raw secret, for handing to a signer.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

impl Serialize for Credential {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str("<redacted>")
    }
}

/// How a network's RPC endpoint is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointTemplate {
    /// A literal URL.
    Fixed(&'static str),
    /// `https://:{secret}@{host}/v3/{project_id}` with both values read from the environment.
    Infura {
        host: &'static str,
        project_id_var: &'static str,
        project_secret_var: &'static str,
    },
}

impl EndpointTemplate {
    /// Render the URL against `env`.
    ///
    /// Absent or empty variables are substituted with `""`. Their names are
    /// returned alongside the URL.
    pub fn render(&self, env: &EnvSnapshot) -> (String, Vec<String>) {
        match *self {
            Self::Fixed(url) => (url.to_string(), Vec::new()),
            Self::Infura {
                host,
                project_id_var,
                project_secret_var,
            } => {
                let mut missing = Vec::new();
                let mut lookup = |var: &'static str| match env.get_non_empty(var) {
                    Some(value) => value.to_string(),
                    None => {
                        missing.push(var.to_string());
                        String::new()
                    }
                };
                let secret = lookup(project_secret_var);
                let project_id = lookup(project_id_var);

                (format!("https://:{secret}@{host}/v3/{project_id}"), missing)
            }
        }
    }
}

/// Declarative description of one deployment target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkTemplate {
    /// Network name callers select by
    pub name: &'static str,
    /// Chain id, when it is not implied by the endpoint
    pub chain_id: Option<u64>,
    /// RPC endpoint; `None` for the in-process simulated chain
    pub endpoint: Option<EndpointTemplate>,
    /// Variable holding the signing key
    pub private_key_var: Option<&'static str>,
    /// Whether transactions have real-world consequences
    pub live: bool,
}

impl NetworkTemplate {
    /// In-process development chain.
    pub const fn development() -> Self {
        Self {
            name: "development",
            chain_id: Some(DEVELOPMENT_CHAIN_ID),
            endpoint: None,
            private_key_var: None,
            live: false,
        }
    }

    /// Public test network reached through Infura.
    pub const fn testnet() -> Self {
        Self {
            name: "testnet",
            chain_id: None,
            endpoint: Some(EndpointTemplate::Infura {
                host: TESTNET_HOST,
                project_id_var: TESTNET_PROJECT_ID,
                project_secret_var: TESTNET_PROJECT_SECRET,
            }),
            private_key_var: Some(TESTNET_PRIVATE_KEY),
            live: true,
        }
    }

    /// Build the descriptor for this network from `env`.
    pub fn resolve(&self, env: &EnvSnapshot) -> NetworkDescriptor {
        let (endpoint_url, missing_vars) = match self.endpoint {
            Some(template) => {
                let (url, missing) = template.render(env);
                (Some(url), missing)
            }
            None => (None, Vec::new()),
        };

        // A key is only ever taken from the environment, never derived or defaulted.
        let credentials = self
            .private_key_var
            .and_then(|var| env.get_non_empty(var))
            .map(Credential::new)
            .into_iter()
            .collect();

        NetworkDescriptor {
            name: self.name.to_string(),
            chain_id: self.chain_id,
            endpoint_url,
            credentials,
            is_live: self.live,
            missing_vars,
        }
    }
}

/// Everything needed to talk to one network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkDescriptor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,
    pub credentials: Vec<Credential>,
    pub is_live: bool,
    /// Endpoint variables that were absent or empty at resolution time
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing_vars: Vec<String>,
}

impl NetworkDescriptor {
    /// True when the network has no RPC endpoint and runs in-process.
    pub const fn is_simulated(&self) -> bool {
        self.endpoint_url.is_none()
    }

    /// True when at least one signing credential was supplied.
    pub const fn has_signer(&self) -> bool {
        !self.credentials.is_empty()
    }

    /// True when a node reporting `chain_id` contradicts the liveness flag:
    /// a live network served by a dev chain, or a disposable one served by a
    /// public chain.
    pub fn contradicts_chain(&self, chain_id: u64) -> bool {
        self.is_live == is_dev_chain(chain_id)
    }

    /// The endpoint URL, if it exists and every substitution was filled.
    pub fn require_endpoint(&self) -> Result<&str, MisconfiguredNetwork> {
        let Some(url) = self.endpoint_url.as_deref() else {
            return Err(MisconfiguredNetwork::NoEndpoint {
                network: self.name.clone(),
            });
        };
        if !self.missing_vars.is_empty() {
            return Err(MisconfiguredNetwork::IncompleteEndpoint {
                network: self.name.clone(),
                missing: self.missing_vars.clone(),
            });
        }
        Ok(url)
    }

    /// The first signing credential.
    pub fn require_credential(&self) -> Result<&Credential, MisconfiguredNetwork> {
        self.credentials
            .first()
            .ok_or_else(|| MisconfiguredNetwork::NoSigner {
                network: self.name.clone(),
            })
    }
}
