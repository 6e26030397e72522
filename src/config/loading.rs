use std::{fs, io::ErrorKind, path::Path};

use tracing::{debug, instrument};

use super::{Config, ConfigError, ConfigPaths};

impl Config {
    /// Loads configuration from an explicit path or the default location.
    ///
    /// An explicit path must exist. The default file
    /// (`$XDG_CONFIG_HOME/nvram-task/config.toml`) is optional and defaults
    /// are used when it is missing or no config directory can be determined.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The explicit configuration file cannot be read
    /// - A configuration file exists but cannot be read or parsed
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let Ok(path) = ConfigPaths::main_config() else {
            debug!("No config directory available, using defaults");
            return Ok(Config::default());
        };

        match fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content, Some(&path)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No config file, using defaults");
                Ok(Config::default())
            }
            Err(e) => Err(ConfigError::io(&e, &path)),
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML
    pub fn from_file(path: &Path) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::io(&e, path))?;
        Self::parse(&content, Some(path))
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    /// Returns an error if the content is not valid configuration TOML
    pub fn from_toml_str(content: &str) -> Result<Config, ConfigError> {
        Self::parse(content, None)
    }

    fn parse(content: &str, path: Option<&Path>) -> Result<Config, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::toml_parse(e, path))?;
        debug!(?config, "Loaded configuration");
        Ok(config)
    }
}
