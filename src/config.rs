//! Server configuration

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::iso::InstitutionProfile;

/// Default config file location
pub const DEFAULT_CONFIG_PATH: &str = "./config/config.yaml";

/// Default storage directory
pub const DEFAULT_DATA_DIR: &str = ".iso-bus-data";

/// Default listen address (Go-style, empty host means all interfaces)
pub const DEFAULT_HTTP_ADDR: &str = ":8080";

/// Supported config file encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Order in which formats are attempted by [`Config::parse`]
    pub const FALLBACK_ORDER: [ConfigFormat; 2] = [ConfigFormat::Yaml, ConfigFormat::Json];

    fn name(self) -> &'static str {
        match self {
            ConfigFormat::Yaml => "yaml",
            ConfigFormat::Json => "json",
        }
    }

    fn decode(self, bytes: &[u8]) -> Result<Config, String> {
        match self {
            ConfigFormat::Yaml => serde_yaml::from_slice(bytes).map_err(|e| e.to_string()),
            ConfigFormat::Json => serde_json::from_slice(bytes).map_err(|e| e.to_string()),
        }
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub addr: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_HTTP_ADDR.to_string(),
        }
    }
}

/// What to do when a record cannot be written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoragePolicy {
    /// Strict mode: if true, answer 500 when a record cannot be persisted.
    /// If false, log a warning and answer as if the write succeeded.
    pub strict: bool,
    /// fsync every record before answering
    pub fsync: bool,
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub http: HttpConfig,
    pub data_dir: PathBuf,
    pub log_level: String,
    pub institution: InstitutionProfile,
    pub storage: StoragePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http: HttpConfig::default(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            log_level: "info".to_string(),
            institution: InstitutionProfile::default(),
            storage: StoragePolicy::default(),
        }
    }
}

impl Config {
    /// Read and parse a config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` if the file cannot be read and
    /// `ConfigError::Parse` if no supported format accepts it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&bytes)
    }

    /// Parse config bytes, trying YAML first and JSON second
    pub fn parse(bytes: &[u8]) -> Result<Self, ConfigError> {
        Self::parse_with(&ConfigFormat::FALLBACK_ORDER, bytes)
    }

    /// Parse config bytes with an ordered list of formats; first success wins
    pub fn parse_with(formats: &[ConfigFormat], bytes: &[u8]) -> Result<Self, ConfigError> {
        let mut failures = Vec::with_capacity(formats.len());
        for format in formats {
            match format.decode(bytes) {
                Ok(config) => return Ok(config.normalized()),
                Err(e) => failures.push(format!("{}={}", format.name(), e)),
            }
        }
        if failures.is_empty() {
            return Err(ConfigError::Parse("no config format attempted".into()));
        }
        Err(ConfigError::Parse(failures.join(" ")))
    }

    /// Replace the data directory when a non-empty override is given
    #[must_use]
    pub fn with_data_dir_override(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir.filter(|d| !d.as_os_str().is_empty()) {
            self.data_dir = dir;
        }
        self
    }

    /// Resolve the bindable listen address
    ///
    /// `":8080"` binds all interfaces; anything else must be `host:port`.
    pub fn listen_addr(&self) -> Result<String, ConfigError> {
        let addr = self.http.addr.trim();
        let (host, port) = addr
            .rsplit_once(':')
            .ok_or_else(|| ConfigError::InvalidAddr(addr.to_string()))?;
        port.parse::<u16>()
            .map_err(|_| ConfigError::InvalidAddr(addr.to_string()))?;
        if host.is_empty() {
            Ok(format!("0.0.0.0:{port}"))
        } else {
            Ok(addr.to_string())
        }
    }

    /// Empty strings in the file mean "use the default"
    fn normalized(mut self) -> Self {
        if self.http.addr.trim().is_empty() {
            self.http.addr = DEFAULT_HTTP_ADDR.to_string();
        }
        if self.data_dir.as_os_str().is_empty() {
            self.data_dir = PathBuf::from(DEFAULT_DATA_DIR);
        }
        if self.log_level.trim().is_empty() {
            self.log_level = "info".to_string();
        }
        self
    }
}
