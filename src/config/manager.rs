use super::{search::SearchConfig, traits::ConfigSection};
use crate::error::Result;
use ::config::{Config, File, FileFormat};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

/// Holds the validated search configuration
///
/// Files are read through the `config` crate, so TOML and JSON both work
/// (picked by extension). Saving always writes TOML.
#[derive(Debug, Default, Clone)]
pub struct ConfigManager {
    config: Arc<RwLock<SearchConfig>>,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        log::debug!("loading {} config from {}", SearchConfig::section_name(), path.display());
        let settings = Config::builder().add_source(File::from(path)).build()?;
        self.store(settings.try_deserialize()?)
    }

    pub fn load_from_str(&self, contents: &str, format: FileFormat) -> Result<()> {
        let settings = Config::builder()
            .add_source(File::from_str(contents, format))
            .build()?;
        self.store(settings.try_deserialize()?)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_str = toml::to_string_pretty(&self.get())?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn get(&self) -> SearchConfig {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Applies `f` to a copy; the stored config only changes if the result validates.
    pub fn update<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut SearchConfig),
    {
        let mut config = self.get();
        f(&mut config);
        self.store(config)
    }

    fn store(&self, config: SearchConfig) -> Result<()> {
        config.validate()?;
        log::info!("search config: {} genes", config.genes.len());
        *self
            .config
            .write()
            .unwrap_or_else(PoisonError::into_inner) = config;
        Ok(())
    }
}
