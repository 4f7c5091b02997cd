//! Integration tests for reading `.env`-style files into a snapshot.

#[path = "setup.rs"]
mod setup;

use config::{resolve, EnvSnapshot};
use deployer::env_file::{load_environment, merge_env_file};
use setup::{unique_var, write_env_file};

#[test]
fn test_env_file_feeds_resolver() {
    let file = write_env_file(
        "TESTNET_PROJECT_ID=abc\n\
         TESTNET_PROJECT_SECRET=xyz\n\
         # comment\n\
         TESTNET_PRIVATE_KEY=0xdead\n",
    );

    let mut env = EnvSnapshot::new();
    let loaded = merge_env_file(&mut env, file.path()).expect("Failed to read env file");
    assert_eq!(loaded, 3);

    let config = resolve(&env);
    let testnet = config.select("testnet").unwrap();
    assert_eq!(
        testnet.endpoint_url.as_deref(),
        Some("https://:xyz@kovan.infura.io/v3/abc")
    );
    assert_eq!(testnet.credentials[0].expose(), "0xdead");
}

#[test]
fn test_existing_values_take_precedence() {
    let file = write_env_file("TESTNET_PROJECT_ID=from-file\nTESTNET_PROJECT_SECRET=secret\n");

    let mut env = EnvSnapshot::new().with("TESTNET_PROJECT_ID", "from-shell");
    merge_env_file(&mut env, file.path()).unwrap();

    assert_eq!(env.get("TESTNET_PROJECT_ID"), Some("from-shell"));
    assert_eq!(env.get("TESTNET_PROJECT_SECRET"), Some("secret"));
}

#[test]
fn test_missing_file_is_tolerated() {
    let dir = tempfile::tempdir().unwrap();
    let mut env = EnvSnapshot::new();

    let loaded = merge_env_file(&mut env, dir.path().join(".env")).unwrap();

    assert_eq!(loaded, 0);
    assert!(env.is_empty());
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = write_env_file("NOT A VALID LINE\n");
    let mut env = EnvSnapshot::new();

    assert!(merge_env_file(&mut env, file.path()).is_err());
}

#[test]
fn test_load_environment_keeps_process_env() {
    let file = write_env_file(&format!("{}=1\n", unique_var("FILE_ONLY")));

    let env = load_environment(file.path()).unwrap();

    // Non-unicode variables are skipped by the snapshot, so skip them here too.
    let process_vars = std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)));
    for (key, value) in process_vars {
        assert_eq!(env.get(&key), Some(value.as_str()));
    }
    assert_eq!(env.get(&unique_var("FILE_ONLY")), Some("1"));
}
