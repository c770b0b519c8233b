use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum FileExtensionError {
    #[error("Failed to get file extension")]
    MissingFileExtension,
    #[error("Unsupported file extension for file: {0}")]
    UnsupportedFileExtension(String),
}

pub type FileFormatResult<T> = Result<T, FileExtensionError>;

pub fn get_file_extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|os_str| os_str.to_str())
}

/// Text formats accepted for settings files.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SerdeFormat {
    Yaml,
    Json,
}

impl SerdeFormat {
    pub fn from_path(path: &Path) -> FileFormatResult<Self> {
        let ext = get_file_extension(path).ok_or(FileExtensionError::MissingFileExtension)?;

        if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") {
            Ok(Self::Yaml)
        } else if ext.eq_ignore_ascii_case("json") {
            Ok(Self::Json)
        } else {
            Err(FileExtensionError::UnsupportedFileExtension(
                path.display().to_string(),
            ))
        }
    }
}

pub fn serialize<T: Serialize>(value: &T, format: SerdeFormat) -> anyhow::Result<String> {
    let text = match format {
        SerdeFormat::Yaml => serde_yml::to_string(value)?,
        SerdeFormat::Json => serde_json::to_string_pretty(value)?,
    };
    Ok(text)
}

pub fn deserialize<T: DeserializeOwned>(text: &str, format: SerdeFormat) -> anyhow::Result<T> {
    match format {
        SerdeFormat::Yaml => Ok(serde_yml::from_str(text)?),
        SerdeFormat::Json => Ok(serde_json::from_str(text)?),
    }
}

/// Reads `path` and deserializes it using the format implied by its extension.
pub fn read_file<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> anyhow::Result<T> {
    use anyhow::Context;

    let path = path.as_ref();
    let format = SerdeFormat::from_path(path)?;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;
    deserialize(&text, format).with_context(|| format!("Failed to parse '{}'", path.display()))
}
