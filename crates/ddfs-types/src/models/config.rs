//! Master address configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MASTER_HOST: &str = "localhost";
pub const DEFAULT_MASTER_PORT: u16 = 8989;

/// Address of the DDFS master.
///
/// Threaded explicitly into every operation; there is no process-wide
/// fallback other than [`Config::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Hostname of the master node
    pub master_host: String,
    /// HTTP port of the master (also used for node-relative `dir://` URIs)
    pub master_port: u16,
}

impl Config {
    pub fn new(master_host: impl Into<String>, master_port: u16) -> Self {
        Self { master_host: master_host.into(), master_port }
    }

    /// Return the supplied config, or the default one when none was given.
    pub fn resolve(config: Option<Config>) -> Config {
        config.unwrap_or_default()
    }

    /// `http://{host}:{port}{path}`. `path` must start with `/`.
    pub fn master_url(&self, path: &str) -> String {
        format!("http://{}:{}{}", self.master_host, self.master_port, path)
    }

    /// URL of a tag document. The name is inserted verbatim, without escaping.
    pub fn tag_url(&self, name: &str) -> String {
        self.master_url(&format!("/ddfs/tag/{}", name))
    }

    /// URL of the job submission endpoint.
    pub fn submit_url(&self) -> String {
        self.master_url("/disco/job/new")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_MASTER_HOST, DEFAULT_MASTER_PORT)
    }
}
