use std::io::ErrorKind;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

// A missing file is not an error; callers fall back to their defaults.
pub fn load_yaml_config<T>(file_path: &str) -> Result<Option<T>, String>
where
    T: DeserializeOwned + Validate,
{
    let content = match std::fs::read_to_string(file_path) {
        Ok(content) => content,
        Err(err) => {
            return match err.kind() {
                ErrorKind::NotFound => Ok(None),
                _ => Err(format!("Failed to read config file: {}", err)),
            };
        }
    };

    let config: T = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to deserialize config: {}", e))?;
    config.validate()?;
    Ok(Some(config))
}

pub fn save_yaml_config<T: Serialize>(file_path: &str, config: &T) -> Result<(), String> {
    let content = serde_yaml_ng::to_string(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;
    std::fs::write(file_path, &content).map_err(|e| format!("Failed to write config file: {}", e))
}
