//! Level error types

use atrium_math::Aabb;
use thiserror::Error;

/// Level loading errors
#[derive(Error, Debug)]
pub enum LevelError {
    #[error("Failed to load level '{path}': {source}")]
    Import {
        path: String,
        #[source]
        source: gltf::Error,
    },

    #[error("Level '{0}' has no scene")]
    NoScene(String),

    #[error("Level '{0}' has no mesh geometry")]
    NoGeometry(String),

    #[error("Level bounds are not finite: {0:?}")]
    InvalidBounds(Aabb),

    #[error("Failed to start level loader: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("Level loader exited without a result")]
    Disconnected,
}

/// Level result type
pub type Result<T> = std::result::Result<T, LevelError>;
