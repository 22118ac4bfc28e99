//! Crate-wide error type

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop the game from starting.
///
/// Once a session is running nothing in the simulation returns an error;
/// these all come from loading resources and configuration up front.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("failed to load asset {path}: {reason}")]
    AssetLoad { path: PathBuf, reason: String },

    #[error("failed to parse config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("audio error: {0}")]
    Audio(String),
}

pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_error_message_names_path() {
        let err = GameError::AssetLoad {
            path: PathBuf::from("Materials/UFO.png"),
            reason: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "failed to load asset Materials/UFO.png: not found");
    }
}
