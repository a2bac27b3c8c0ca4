//! Runtime error types

use std::path::PathBuf;

use atrium_physics::PhysicsError;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid movement settings: {0}")]
    Physics(#[from] PhysicsError),

    #[error("Invalid camera settings: {0}")]
    Camera(String),

    #[error("Key {0} is bound to more than one action")]
    KeyConflict(String),
}

/// Config result type
pub type Result<T> = std::result::Result<T, ConfigError>;
