use std::cell::RefCell;

use serde::{Deserialize, Serialize};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads a validated config once and serves the cached copy afterwards.
pub struct ConfigLoader<TProvider, TConfig, TSerializer = YamlConfigSerializer>
where
    TProvider: ConfigContentProvider,
    TConfig: Clone + Validate + Default,
    TSerializer: ConfigSerializer<TConfig>,
{
    provider: TProvider,
    serializer: TSerializer,
    cached: RefCell<Option<TConfig>>,
}

impl<TConfig> ConfigLoader<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::with_serializer(FileContentConfigProvider::new(file_path), YamlConfigSerializer)
    }
}

impl<TProvider, TConfig> ConfigLoader<TProvider, TConfig, YamlConfigSerializer>
where
    TProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn new(provider: TProvider) -> Self {
        Self::with_serializer(provider, YamlConfigSerializer)
    }
}

impl<TProvider, TConfig, TSerializer> ConfigLoader<TProvider, TConfig, TSerializer>
where
    TProvider: ConfigContentProvider,
    TConfig: Clone + Validate + Default,
    TSerializer: ConfigSerializer<TConfig>,
{
    pub fn with_serializer(provider: TProvider, serializer: TSerializer) -> Self {
        Self {
            provider,
            serializer,
            cached: RefCell::new(None),
        }
    }

    /// Falls back to `TConfig::default()` when nothing is stored.
    pub fn load(&self) -> Result<TConfig, String> {
        if let Some(config) = self.cached.borrow().as_ref() {
            return Ok(config.clone());
        }

        let Some(content) = self.provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.serializer.deserialize(&content)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *self.cached.borrow_mut() = Some(config.clone());
        Ok(config)
    }

    pub fn save(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let content = self.serializer.serialize(config)?;
        self.provider.set_config_content(&content)?;
        *self.cached.borrow_mut() = Some(config.clone());
        Ok(())
    }
}
