mod document;
mod yaml_config_store;

pub use yaml_config_store::YamlConfigStore;
