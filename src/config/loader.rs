use super::types::Config;
use crate::debug_println;
use std::fs;
use std::path::{Path, PathBuf};

/// Error types for configuration file operations
#[derive(Debug)]
pub enum ConfigError {
    FileAccess(std::io::Error),
    Parse(String),
    Serialize(String),
    InvalidValue { field: &'static str, value: f64 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::FileAccess(e) => write!(f, "Failed to access configuration file: {}", e),
            ConfigError::Parse(msg) => write!(f, "Configuration file is corrupted: {}", msg),
            ConfigError::Serialize(msg) => write!(f, "Failed to serialize configuration: {}", msg),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value for {}: {} (expected a non-negative number)", field, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(error: std::io::Error) -> Self {
        ConfigError::FileAccess(error)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(error: toml::de::Error) -> Self {
        ConfigError::Parse(format!("TOML error: {}", error))
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(error: toml::ser::Error) -> Self {
        ConfigError::Serialize(error.to_string())
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the config at `path` (or the default location), falling back to
    /// defaults with a warning when the file is unreadable
    pub fn load(path: Option<&Path>) -> Config {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Config::get_config_path);

        match Self::load_or_default(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {} ({}), using defaults", e, path.display());
                Config::default()
            }
        }
    }

    /// Config as the compute path sees it: file (or defaults) plus env overrides
    pub fn load_effective(path: Option<&Path>) -> Config {
        Self::load_with_overrides(path, |name| std::env::var(name).ok())
    }

    pub fn load_with_overrides<F>(path: Option<&Path>, lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::load(path);
        config.contract.apply_overrides_from(lookup);
        config
    }

    /// Missing file yields defaults; a broken one is an error
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            debug_println!("config: {} not found, using defaults", path.display());
            return Ok(Config::default());
        }
        Self::load_from_path(path)
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        debug_println!("config: loaded {}", path.display());
        Ok(config)
    }
}

impl Config {
    /// Load configuration from default location
    pub fn load() -> Result<Config, ConfigError> {
        ConfigLoader::load_or_default(Self::get_config_path())
    }

    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();

        // Ensure config directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the default config file path (~/.linkcost/config.toml)
    pub fn get_config_path() -> PathBuf {
        if let Some(home) = dirs::home_dir() {
            home.join(".linkcost").join("config.toml")
        } else {
            PathBuf::from(".linkcost/config.toml")
        }
    }

    /// Create a default config at `path` unless one already exists.
    /// Returns whether a file was written.
    pub fn init_at<P: AsRef<Path>>(path: P) -> Result<bool, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            return Ok(false);
        }
        Config::default().save_to(path)?;
        Ok(true)
    }

    /// Initialize config directory and create default config
    pub fn init(path: Option<&Path>) -> Result<(), ConfigError> {
        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::get_config_path);

        if Self::init_at(&config_path)? {
            println!("Created config at {}", config_path.display());
        } else {
            println!("Config already exists at {}", config_path.display());
        }

        Ok(())
    }

    /// Validate configuration values as the form would accept them
    pub fn check(&self) -> Result<(), ConfigError> {
        let contract = &self.contract;
        let usage = &self.usage;
        let fields = [
            ("contract.fixed_capacity_mb", contract.fixed_capacity_mb),
            ("contract.burst_limit_mb", contract.burst_limit_mb),
            ("contract.allowed_burst_hours", contract.allowed_burst_hours),
            ("contract.overage_rate_per_mb", contract.overage_rate_per_mb),
            ("contract.hours_per_month", contract.hours_per_month),
            ("usage.average_consumption_mb", usage.average_consumption_mb),
            ("usage.peak_consumption_mb", usage.peak_consumption_mb),
            ("usage.peak_hours", usage.peak_hours),
        ];

        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }

        Ok(())
    }

    /// Print configuration as TOML
    pub fn print(&self) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        println!("{}", content);
        Ok(())
    }
}
