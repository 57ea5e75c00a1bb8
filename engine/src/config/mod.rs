mod cabinet_config;
mod config_content_provider;
mod config_loader;
mod config_serializer;
mod validate;

pub use cabinet_config::{CabinetConfig, ChannelMap, TimingConfig};
pub use config_content_provider::{ConfigContentProvider, FileContentConfigProvider, InMemoryContentProvider};
pub use config_loader::ConfigLoader;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use validate::Validate;
