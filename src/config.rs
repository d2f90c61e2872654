use crate::generator::{DEFAULT_NAME_POOL, DEFAULT_PHONE_PREFIX, RandomContactGenerator};
use crate::store::{DEFAULT_GENERATED_COUNT, MAX_GENERATED_COUNT};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config directory available")]
    NoConfigDir,
    #[error("failed to access `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("name_pool must contain at least one name")]
    EmptyNamePool,
    #[error("name_pool contains a blank name")]
    BlankPoolName,
    #[error("generated_contacts must be at most {max}, got {requested}")]
    TooManyContacts { requested: usize, max: usize },
    #[error("window size must be positive, got {0}x{1}")]
    ZeroWindowSize(i32, i32),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub generated_contacts: usize,
    /// Fixed RNG seed; unset means a fresh random batch on every start.
    pub seed: Option<u64>,
    pub phone_prefix: String,
    pub name_pool: Vec<String>,
    pub log_level: String,
    pub window_width: i32,
    pub window_height: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            generated_contacts: DEFAULT_GENERATED_COUNT,
            seed: None,
            phone_prefix: DEFAULT_PHONE_PREFIX.to_string(),
            name_pool: DEFAULT_NAME_POOL.iter().map(|n| n.to_string()).collect(),
            log_level: "info".to_string(),
            window_width: 360,
            window_height: 640,
        }
    }
}

impl Settings {
    pub fn path() -> Option<PathBuf> {
        let proj = ProjectDirs::from("com", "example", "ContactDirectory")?;
        Some(proj.config_dir().join("settings.toml"))
    }

    /// Reads the settings file at the default location, writing defaults there
    /// when it does not exist yet.
    pub fn load_or_init() -> Result<Self, ConfigError> {
        let path = Self::path().ok_or(ConfigError::NoConfigDir)?;
        if !path.exists() {
            let settings = Self::default();
            settings.save_to(&path)?;
            return Ok(settings);
        }
        Self::load_from(&path)
    }

    /// A missing file yields the defaults; fields absent from the file are defaulted.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let settings: Settings = toml::from_str(&text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source: io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let text = toml::to_string_pretty(self)?;
        fs::write(path, text).map_err(io_err)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.generated_contacts > MAX_GENERATED_COUNT {
            return Err(ConfigError::TooManyContacts {
                requested: self.generated_contacts,
                max: MAX_GENERATED_COUNT,
            });
        }
        if self.name_pool.is_empty() {
            return Err(ConfigError::EmptyNamePool);
        }
        if self.name_pool.iter().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::BlankPoolName);
        }
        if self.window_width <= 0 || self.window_height <= 0 {
            return Err(ConfigError::ZeroWindowSize(self.window_width, self.window_height));
        }
        Ok(())
    }

    pub fn generator(&self) -> RandomContactGenerator {
        let generator = match self.seed {
            Some(seed) => RandomContactGenerator::seeded(seed),
            None => RandomContactGenerator::from_entropy(),
        };
        generator
            .with_names(self.name_pool.iter().cloned())
            .with_prefix(self.phone_prefix.clone())
    }
}
