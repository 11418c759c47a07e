use thiserror::Error;

use crate::formation::Axis;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LineError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("an actor named '{0}' is already in line")]
    DuplicateName(String),
    #[error("no actor named '{0}' is in line")]
    NotFound(String),
    #[error("invalid formation expression for {axis} axis: {reason}")]
    InvalidFormation { axis: Axis, reason: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("config describes an invalid line: {0}")]
    Line(#[from] LineError),
}
