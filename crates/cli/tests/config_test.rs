//! # Configuration Tests
//!
//! This file contains tests for the configuration loading logic.
//! Since `booketl-cli` is a binary crate, we can't directly import
//! the `config` module. Instead, we include the source file directly
//! for testing purposes.

#[path = "../src/config.rs"]
mod config;

use self::config::{get_config, ConfigError};
use std::env;
use std::io::Write;
use std::sync::Mutex;
use std::time::Duration;

// Environment variables are process-global, so tests touching them run one at a time.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn clear_env_vars() {
    env::remove_var("DB_URL");
    env::remove_var("API_URL");
    env::remove_var("REQUEST_TIMEOUT_SECS");
    env::remove_var("BOOKETL_QUERY__AUTHOR");
    env::remove_var("BOOKETL_QUERY__MAX_RESULTS");
    env::remove_var("BOOKETL_RETRY__RETRIES");
    env::remove_var("BOOKETL_TEST_AUTHOR");
}

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yml")
        .tempfile()
        .expect("Failed to create temp config file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp config file");
    file
}

#[test]
fn test_get_config_defaults_without_file() {
    let _lock = ENV_LOCK.lock().unwrap();
    clear_env_vars();

    let config = get_config(None).expect("Defaults should load without a config file");

    assert_eq!(config.db_url, "db/books.db");
    assert_eq!(
        config.api_url,
        "https://www.googleapis.com/books/v1/volumes"
    );
    assert_eq!(config.request_timeout(), Duration::from_secs(10));
    assert_eq!(config.query.author, "Stephen King");
    assert_eq!(config.query.max_results, 40);
    assert_eq!(config.query.print_type, "books");
    assert_eq!(config.schedule().interval, Duration::from_secs(86_400));
    assert_eq!(config.retry_policy().retries, 1);
    assert_eq!(config.retry_policy().backoff, Duration::from_secs(300));
}

#[test]
fn test_get_config_from_file_with_substitution() {
    let _lock = ENV_LOCK.lock().unwrap();
    clear_env_vars();
    env::set_var("BOOKETL_TEST_AUTHOR", "Ursula K. Le Guin");

    let file = write_config(
        r#"
db_url: "/tmp/books-test.db"
request_timeout_secs: 3
query:
  author: "${BOOKETL_TEST_AUTHOR}"
  max_results: 10
retry:
  retries: 2
  backoff_secs: 1
"#,
    );

    let config = get_config(file.path().to_str()).expect("Config file should load");

    assert_eq!(config.db_url, "/tmp/books-test.db");
    assert_eq!(config.request_timeout(), Duration::from_secs(3));
    assert_eq!(config.query.author, "Ursula K. Le Guin");
    assert_eq!(config.query.max_results, 10);
    // Keys missing from the file keep their defaults.
    assert_eq!(config.query.print_type, "books");
    assert_eq!(config.retry_policy().retries, 2);
    assert_eq!(config.retry_policy().backoff, Duration::from_secs(1));
    assert_eq!(config.schedule.interval_secs, 86_400);

    clear_env_vars();
}

#[test]
fn test_get_config_env_overrides_file() {
    let _lock = ENV_LOCK.lock().unwrap();
    clear_env_vars();

    let file = write_config(
        r#"
db_url: "from-file.db"
query:
  author: "From File"
"#,
    );
    env::set_var("DB_URL", "from-env.db");
    env::set_var("BOOKETL_QUERY__AUTHOR", "From Env");
    env::set_var("BOOKETL_RETRY__RETRIES", "0");

    let config = get_config(file.path().to_str()).expect("Config should load");

    assert_eq!(config.db_url, "from-env.db");
    assert_eq!(config.query.author, "From Env");
    assert_eq!(config.retry_policy().retries, 0);

    clear_env_vars();
}

#[test]
fn test_get_config_missing_explicit_file() {
    let _lock = ENV_LOCK.lock().unwrap();
    clear_env_vars();

    let result = get_config(Some("/definitely/not/here/booketl.yml"));

    assert!(matches!(result, Err(ConfigError::NotFound(_))));
}
