use crate::api::error::ClientError;
use config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConstructionError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Could not find config file at '{0}'")]
    NoConfigFileFound(PathBuf),
    #[error(transparent)]
    Client(#[from] ClientError),
}
