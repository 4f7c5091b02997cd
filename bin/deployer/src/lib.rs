pub mod env_file;
pub mod report;

use config::{inert_vars, EnvSnapshot, NetworkConfigResolver, ResolvedConfiguration};
use std::path::Path;
use tracing::warn;

/// Load the environment and resolve it with the default network table.
pub fn load_configuration(env_file: impl AsRef<Path>) -> eyre::Result<ResolvedConfiguration> {
    let env = env_file::load_environment(env_file)?;
    Ok(resolve_with_warnings(&NetworkConfigResolver::new(), &env))
}

/// Resolve `env`, logging reserved variables that are set but feed no network.
pub fn resolve_with_warnings(
    resolver: &NetworkConfigResolver,
    env: &EnvSnapshot,
) -> ResolvedConfiguration {
    for var in inert_vars(env) {
        warn!("{} is set but not used by any network", var);
    }
    resolver.resolve(env)
}
