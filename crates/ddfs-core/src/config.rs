//! Environment lookup for the master address.
//!
//! Only callers that opt in (the CLI, scripts) read the environment; library
//! operations always take an explicit [`Config`].

use ddfs_types::Config;

pub const MASTER_HOST_ENV: &str = "DISCO_MASTER_HOST";
pub const MASTER_PORT_ENV: &str = "DISCO_PORT";

/// Build a config from `DISCO_MASTER_HOST` / `DISCO_PORT`, falling back to
/// the defaults for anything unset or invalid.
pub fn config_from_env() -> Config {
    config_from_vars(std::env::var(MASTER_HOST_ENV).ok(), std::env::var(MASTER_PORT_ENV).ok())
}

fn config_from_vars(host: Option<String>, port: Option<String>) -> Config {
    let mut config = Config::default();

    if let Some(raw) = host {
        let host = raw.trim();
        if host.is_empty() {
            tracing::warn!("{} is empty, using {}", MASTER_HOST_ENV, config.master_host);
        } else {
            config.master_host = host.to_string();
        }
    }

    if let Some(raw) = port {
        match raw.trim().parse::<u16>() {
            Ok(port) => config.master_port = port,
            Err(_) => {
                tracing::warn!(
                    "{}={:?} is not a valid port, using {}",
                    MASTER_PORT_ENV,
                    raw,
                    config.master_port
                );
            },
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use ddfs_types::models::{DEFAULT_MASTER_HOST, DEFAULT_MASTER_PORT};

    #[test]
    fn test_unset_vars_give_default() {
        assert_eq!(config_from_vars(None, None), Config::default());
    }

    #[test]
    fn test_vars_override_default() {
        let config = config_from_vars(Some(" master1 ".to_string()), Some("8990".to_string()));
        assert_eq!(config, Config::new("master1", 8990));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from_vars(Some("   ".to_string()), Some("http".to_string()));
        assert_eq!(config.master_host, DEFAULT_MASTER_HOST);
        assert_eq!(config.master_port, DEFAULT_MASTER_PORT);
    }
}
