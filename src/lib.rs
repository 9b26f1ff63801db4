pub mod api;
pub mod config;
mod constants;
pub mod controller;
pub mod display;
pub mod error;
pub mod input;
pub mod view;

#[cfg(test)]
mod test_suite;

pub use crate::api::CalcClient;
pub use crate::config::ClientConfig;
pub use crate::controller::DateInputController;
pub use crate::view::MemoryView;

use crate::config::ConfigLoader;
use crate::error::ConstructionError;
use directories::ProjectDirs;
use log::info;
use std::path::{Path, PathBuf};

/// Location of the per-user configuration file, if the platform has one.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", env!("CARGO_PKG_NAME"))
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Loads the client configuration.
///
/// An explicit path must exist. Without one, the per-user configuration file is
/// used when present and the built-in defaults otherwise.
pub fn load_client_config(path: Option<&Path>) -> Result<ClientConfig, ConstructionError> {
    match path {
        Some(path) if !path.exists() => {
            Err(ConstructionError::NoConfigFileFound(path.to_path_buf()))
        }
        Some(path) => Ok(ConfigLoader::load(path)?),
        None => match default_config_path() {
            Some(path) if path.exists() => Ok(ConfigLoader::load(&path)?),
            _ => {
                info!("No configuration file found, using defaults");
                Ok(ClientConfig::default())
            }
        },
    }
}
