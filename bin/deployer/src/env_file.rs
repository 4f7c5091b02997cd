use config::EnvSnapshot;
use eyre::WrapErr;
use std::path::Path;
use tracing::{debug, info};

/// Snapshot the process environment, filling gaps from a `.env`-style file.
///
/// Variables already set in the process environment win over the file. A
/// missing file is not an error.
pub fn load_environment(path: impl AsRef<Path>) -> eyre::Result<EnvSnapshot> {
    let mut env = EnvSnapshot::from_process();
    merge_env_file(&mut env, path)?;
    Ok(env)
}

/// Merge the variables of a `.env`-style file into `env` without overriding.
///
/// Returns the number of variables read from the file.
pub fn merge_env_file(env: &mut EnvSnapshot, path: impl AsRef<Path>) -> eyre::Result<usize> {
    let path = path.as_ref();

    let entries = match dotenvy::from_path_iter(path) {
        Ok(entries) => entries,
        Err(e) if e.not_found() => {
            debug!("No env file at {:?}", path);
            return Ok(0);
        }
        Err(e) => {
            return Err(e).wrap_err_with(|| format!("Failed to open env file {:?}", path));
        }
    };

    let mut loaded = 0;
    for entry in entries {
        let (key, value) =
            entry.wrap_err_with(|| format!("Failed to parse env file {:?}", path))?;
        env.insert_if_absent(key, value);
        loaded += 1;
    }

    info!("Loaded {} variables from {:?}", loaded, path);
    Ok(loaded)
}
