//! Conversion options, loadable from a YAML file.

use serde::{Deserialize, Serialize};
use std::{fmt, fs::File, path::Path};

/// Options controlling a conversion.
///
/// Every field is optional in YAML and falls back to its default.
///
/// ```yaml
/// placeholder: "?"
/// collapse_repeated: true
/// input_extension: txt
/// output_extension: brf
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Replaces Braille cells that have no BRF equivalent.
    pub placeholder: char,

    /// Collapse runs of the `⠹` cell down to one.
    pub collapse_repeated: bool,

    /// Extension of the files picked up by a batch conversion.
    pub input_extension: String,

    /// Extension given to the files a batch conversion writes.
    pub output_extension: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            placeholder: '?',
            collapse_repeated: true,
            input_extension: "txt".to_string(),
            output_extension: "brf".to_string(),
        }
    }
}

impl Options {
    /// Load options from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let file = File::open(path).map_err(ConfigLoadError::CouldntLoadConfig)?;
        serde_yaml::from_reader(file).map_err(ConfigLoadError::InvalidConfig)
    }

    /// Parse options from a YAML string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use unibrf::config::Options;
    /// let options = Options::from_yaml("placeholder: '#'")?;
    /// assert_eq!('#', options.placeholder);
    /// assert!(options.collapse_repeated);
    /// # Ok::<(), unibrf::config::ConfigLoadError>(())
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(ConfigLoadError::InvalidConfig)
    }
}

#[derive(Debug)]
pub enum ConfigLoadError {
    CouldntLoadConfig(std::io::Error),
    InvalidConfig(serde_yaml::Error),
}

impl fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigLoadError::CouldntLoadConfig(e) => write!(f, "couldn't load config: {}", e),
            ConfigLoadError::InvalidConfig(e) => write!(f, "invalid config: {}", e),
        }
    }
}

impl std::error::Error for ConfigLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigLoadError::CouldntLoadConfig(e) => Some(e),
            ConfigLoadError::InvalidConfig(e) => Some(e),
        }
    }
}
