//! Contract compiler settings.

use serde::Serialize;
use serde_json::{json, Value};
use std::fmt;

/// Target EVM instruction-set revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EvmVersion {
    Homestead,
    TangerineWhistle,
    SpuriousDragon,
    Byzantium,
    Constantinople,
    Petersburg,
    Istanbul,
    Berlin,
    London,
    Paris,
    Shanghai,
}

impl EvmVersion {
    /// Name as understood by solc's `evmVersion` setting.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Homestead => "homestead",
            Self::TangerineWhistle => "tangerineWhistle",
            Self::SpuriousDragon => "spuriousDragon",
            Self::Byzantium => "byzantium",
            Self::Constantinople => "constantinople",
            Self::Petersburg => "petersburg",
            Self::Istanbul => "istanbul",
            Self::Berlin => "berlin",
            Self::London => "london",
            Self::Paris => "paris",
            Self::Shanghai => "shanghai",
        }
    }
}

impl fmt::Display for EvmVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compiler settings handed to the contract build pipeline.
///
/// These are fixed for the project and do not depend on the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompilerSettings {
    /// Solidity compiler version
    pub version: &'static str,
    /// Whether the optimizer runs at all
    pub optimizer_enabled: bool,
    /// Expected number of calls per contract, only read when the optimizer is on
    pub optimizer_runs: u32,
    /// EVM revision to emit bytecode for
    pub evm_target: EvmVersion,
}

impl CompilerSettings {
    /// The project's compiler settings.
    pub const fn project() -> Self {
        Self {
            version: "0.8.4",
            optimizer_enabled: true,
            optimizer_runs: 200,
            evm_target: EvmVersion::Istanbul,
        }
    }

    /// The `settings` object of a solc standard-JSON input.
    pub fn solc_settings(&self) -> Value {
        json!({
            "optimizer": {
                "enabled": self.optimizer_enabled,
                "runs": self.optimizer_runs,
            },
            "evmVersion": self.evm_target.as_str(),
        })
    }
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self::project()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_settings() {
        let settings = CompilerSettings::project();
        assert_eq!(settings.version, "0.8.4");
        assert!(settings.optimizer_enabled);
        assert_eq!(settings.optimizer_runs, 200);
        assert_eq!(settings.evm_target, EvmVersion::Istanbul);
    }

    #[test]
    fn test_solc_settings() {
        let settings = CompilerSettings::project().solc_settings();
        assert_eq!(settings["optimizer"]["enabled"], true);
        assert_eq!(settings["optimizer"]["runs"], 200);
        assert_eq!(settings["evmVersion"], "istanbul");
    }

    #[test]
    fn test_evm_version_serializes_like_solc() {
        let value = serde_json::to_value(EvmVersion::TangerineWhistle).unwrap();
        assert_eq!(value, "tangerineWhistle");
        assert_eq!(EvmVersion::SpuriousDragon.to_string(), "spuriousDragon");
    }
}
