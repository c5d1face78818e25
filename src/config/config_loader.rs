use config::{Config, ConfigError, File, FileFormat};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load<T: DeserializeOwned>(file_path: &Path) -> Result<T, ConfigError> {
        let Some(ext) = file_path.extension() else {
            return Err(ConfigError::NotFound(format!(
                "Could not find file extension on path {file_path:?}"
            )));
        };
        let file_format = match ext.to_str() {
            Some("yaml") | Some("yml") => FileFormat::Yaml,
            Some("json") => FileFormat::Json,
            Some("toml") => FileFormat::Toml,
            Some("ron") => FileFormat::Ron,
            _ => {
                return Err(ConfigError::NotFound(format!(
                    "File format not supported. File needs to end with .yaml, .json, .toml or .ron. {file_path:?}"
                )));
            }
        };

        let config_str = fs::read_to_string(file_path)
            .map_err(|err| ConfigError::Foreign(Box::new(err)))?;

        // Anything after a $ is looked up in the environment, so literal $ need to be escaped as \$
        let config_str_with_env_vars = shellexpand::env(&config_str).map_err(|err| {
            ConfigError::Message(format!(
                "Shell expansion of config file {file_path:?} failed: {err}"
            ))
        })?;

        let config = Config::builder()
            .add_source(File::from_str(&config_str_with_env_vars, file_format))
            .build()?;

        config.try_deserialize()
    }
}
