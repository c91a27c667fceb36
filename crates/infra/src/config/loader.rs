//! Configuration loader
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `FAUXAPI_BASE_URL`: Path to the API (required)
//! - `FAUXAPI_KEY`: API key (required)
//! - `FAUXAPI_SECRET`: API secret (required)
//! - `FAUXAPI_VERIFY_CERT`: Verify the device certificate (default true)
//! - `FAUXAPI_TIMEOUT_SECS`: Transport timeout in seconds (optional)
//! - `FAUXAPI_USER_AGENT`: User-Agent header value (optional)
//! - `FAUXAPI_NO_PROXY`: Bypass system and environment proxies (default false)
//!
//! Boolean variables accept `1`/`0`, `true`/`false`, `yes`/`no` and
//! `on`/`off`; any other value is a configuration error.
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./fauxapi.toml`, `./fauxapi.json`, `./config.toml`, `./config.json`
//! 2. The same names next to the executable

use std::path::{Path, PathBuf};

use fauxapi_domain::{ClientConfig, FauxApiError, Result};

const CONFIG_FILE_NAMES: [&str; 4] = ["fauxapi.toml", "fauxapi.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `FauxApiError::Config` if configuration cannot be loaded from
/// either source or the file is invalid.
pub fn load() -> Result<ClientConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `FauxApiError::Config` if required variables are missing or have
/// invalid values.
pub fn load_from_env() -> Result<ClientConfig> {
    let base_url = env_var("FAUXAPI_BASE_URL")?;
    let key = env_var("FAUXAPI_KEY")?;
    let secret = env_var("FAUXAPI_SECRET")?;

    let timeout_secs = std::env::var("FAUXAPI_TIMEOUT_SECS")
        .ok()
        .map(|s| {
            s.parse::<u64>()
                .map_err(|e| FauxApiError::Config(format!("Invalid timeout seconds: {}", e)))
        })
        .transpose()?;

    Ok(ClientConfig {
        base_url,
        key,
        secret,
        verify_cert: env_bool("FAUXAPI_VERIFY_CERT", true)?,
        timeout_secs,
        user_agent: std::env::var("FAUXAPI_USER_AGENT").ok(),
        no_proxy: env_bool("FAUXAPI_NO_PROXY", false)?,
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Format is detected by
/// file extension.
///
/// # Errors
/// Returns `FauxApiError::Config` if the file is missing, unreadable or
/// invalid.
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(FauxApiError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            FauxApiError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| FauxApiError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content, by the extension of `path`
fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| FauxApiError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| FauxApiError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(FauxApiError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe the working directory, then the executable's directory
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `FauxApiError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        FauxApiError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive).
/// An unset variable yields `default`.
///
/// # Errors
/// Returns `FauxApiError::Config` for any other value.
fn env_bool(key: &str, default: bool) -> Result<bool> {
    let Ok(value) = std::env::var(key) else {
        return Ok(default);
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(FauxApiError::Config(format!("Invalid boolean for {}: {:?}", key, value))),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    const ENV_KEYS: [&str; 7] = [
        "FAUXAPI_BASE_URL",
        "FAUXAPI_KEY",
        "FAUXAPI_SECRET",
        "FAUXAPI_VERIFY_CERT",
        "FAUXAPI_TIMEOUT_SECS",
        "FAUXAPI_USER_AGENT",
        "FAUXAPI_NO_PROXY",
    ];

    fn clear_env() {
        for key in ENV_KEYS {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_env_bool_parsing() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        for value in ["1", "YES", "on", "True"] {
            std::env::set_var("FAUXAPI_TEST_BOOL", value);
            assert!(env_bool("FAUXAPI_TEST_BOOL", false).unwrap(), "{value} should be true");
        }

        for value in ["0", "false", "off", "No"] {
            std::env::set_var("FAUXAPI_TEST_BOOL", value);
            assert!(!env_bool("FAUXAPI_TEST_BOOL", true).unwrap(), "{value} should be false");
        }

        std::env::remove_var("FAUXAPI_TEST_BOOL");
        assert!(env_bool("FAUXAPI_TEST_BOOL", true).unwrap());
        assert!(!env_bool("FAUXAPI_TEST_BOOL", false).unwrap());
    }

    #[test]
    fn test_env_bool_rejects_unknown_values() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        for value in ["ture", "Y", "enabled", ""] {
            std::env::set_var("FAUXAPI_TEST_BOOL", value);
            let result = env_bool("FAUXAPI_TEST_BOOL", true);
            assert!(matches!(result, Err(FauxApiError::Config(_))), "{value:?} gave {result:?}");
        }
        std::env::remove_var("FAUXAPI_TEST_BOOL");
    }

    #[test]
    fn test_load_from_env_rejects_misspelled_verify_cert() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("FAUXAPI_BASE_URL", "https://fw.local/fauxapi/v1/");
        std::env::set_var("FAUXAPI_KEY", "PFFAValidItem1");
        std::env::set_var("FAUXAPI_SECRET", "0123456789012345678901234567890123456789");
        std::env::set_var("FAUXAPI_VERIFY_CERT", "enabled");

        let result = load_from_env();
        clear_env();

        match result {
            Err(FauxApiError::Config(msg)) => assert!(msg.contains("FAUXAPI_VERIFY_CERT")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("FAUXAPI_BASE_URL", "https://fw.local/fauxapi/v1/");
        std::env::set_var("FAUXAPI_KEY", "PFFAValidItem1");
        std::env::set_var("FAUXAPI_SECRET", "0123456789012345678901234567890123456789");
        std::env::set_var("FAUXAPI_VERIFY_CERT", "false");
        std::env::set_var("FAUXAPI_TIMEOUT_SECS", "30");
        std::env::set_var("FAUXAPI_USER_AGENT", "fauxapi-tests");
        std::env::set_var("FAUXAPI_NO_PROXY", "yes");

        let result = load_from_env();
        clear_env();

        let config = result.expect("config from env");
        assert_eq!(config.base_url, "https://fw.local/fauxapi/v1/");
        assert_eq!(config.key, "PFFAValidItem1");
        assert!(!config.verify_cert);
        assert_eq!(config.timeout_secs, Some(30));
        assert_eq!(config.user_agent.as_deref(), Some("fauxapi-tests"));
        assert!(config.no_proxy);
    }

    #[test]
    fn test_load_from_env_defaults_optional_vars() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("FAUXAPI_BASE_URL", "https://fw.local/fauxapi/v1/");
        std::env::set_var("FAUXAPI_KEY", "PFFAValidItem1");
        std::env::set_var("FAUXAPI_SECRET", "0123456789012345678901234567890123456789");

        let result = load_from_env();
        clear_env();

        let config = result.expect("config from env");
        assert!(config.verify_cert);
        assert_eq!(config.timeout_secs, None);
        assert_eq!(config.user_agent, None);
        assert!(!config.no_proxy);
    }

    #[test]
    fn test_load_from_env_missing_var() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("FAUXAPI_BASE_URL", "https://fw.local/fauxapi/v1/");
        let result = load_from_env();
        clear_env();

        match result {
            Err(FauxApiError::Config(msg)) => assert!(msg.contains("FAUXAPI_KEY")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_env_invalid_timeout() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("FAUXAPI_BASE_URL", "https://fw.local/fauxapi/v1/");
        std::env::set_var("FAUXAPI_KEY", "PFFAValidItem1");
        std::env::set_var("FAUXAPI_SECRET", "0123456789012345678901234567890123456789");
        std::env::set_var("FAUXAPI_TIMEOUT_SECS", "soon");

        let result = load_from_env();
        clear_env();

        assert!(matches!(result, Err(FauxApiError::Config(_))), "Should be a Config error");
    }

    #[test]
    fn test_load_from_file_json() {
        let json_content = r#"{
            "base_url": "https://fw.local/fauxapi/v1/",
            "key": "PFFAValidItem1",
            "secret": "0123456789012345678901234567890123456789",
            "timeout_secs": 10
        }"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(json_content.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("json");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let result = load_from_file(Some(path.clone()));
        std::fs::remove_file(path).ok();

        let config = result.expect("config from JSON file");
        assert_eq!(config.key, "PFFAValidItem1");
        assert_eq!(config.timeout_secs, Some(10));
        assert!(config.verify_cert);
    }

    #[test]
    fn test_load_from_file_toml() {
        let toml_content = r#"
base_url = "https://fw.local/fauxapi/v1/"
key = "PFFAValidItem1"
secret = "0123456789012345678901234567890123456789"
verify_cert = false
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("toml");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let result = load_from_file(Some(path.clone()));
        std::fs::remove_file(path).ok();

        let config = result.expect("config from TOML file");
        assert_eq!(config.base_url, "https://fw.local/fauxapi/v1/");
        assert!(!config.verify_cert);
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/fauxapi.toml")));
        assert!(matches!(result, Err(FauxApiError::Config(_))), "Should be a Config error");
    }

    #[test]
    fn test_load_from_file_invalid_json() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(br#"{ "base_url": "#).unwrap();
        let path = temp_file.path().with_extension("json");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let result = load_from_file(Some(path.clone()));
        std::fs::remove_file(path).ok();

        assert!(result.is_err(), "Should fail with invalid JSON");
    }

    #[test]
    fn test_parse_config_missing_required_field() {
        let result = parse_config(r#"{"base_url": "https://fw/"}"#, Path::new("fauxapi.json"));
        assert!(matches!(result, Err(FauxApiError::Config(msg)) if msg.contains("JSON")));
    }

    #[test]
    fn test_parse_config_unsupported_format() {
        let result = parse_config("base_url: x", Path::new("fauxapi.yaml"));
        assert!(result.is_err(), "Should fail with unsupported format");
    }
}
