#![deny(clippy::all, clippy::pedantic)]

use std::fs;
use std::path::PathBuf;

use crate::client::CliError;

pub fn read_value(val: Option<String>, file: Option<PathBuf>) -> Result<String, CliError> {
    if let Some(path) = file {
        let data = fs::read_to_string(&path).map_err(|source| CliError::InputFile {
            path: path.display().to_string(),
            source,
        })?;
        Ok(data)
    } else if let Some(v) = val {
        Ok(v)
    } else {
        Err(CliError::InvalidInput("value required".into()))
    }
}

pub fn to_value<T: serde::Serialize>(value: T) -> Result<serde_json::Value, CliError> {
    serde_json::to_value(value).map_err(|e| CliError::InvalidInput(e.to_string()))
}
