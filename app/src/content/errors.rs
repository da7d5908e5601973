use std::path::PathBuf;

use leptos::prelude::ServerFnError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Could not read `{path}': {error}")]
    IO {
        error: std::io::Error,
        path: PathBuf,
    },

    #[error("Could not parse `{path}': {error}")]
    Deserialize { error: String, path: PathBuf },

    #[error("Could not reach the content endpoint: {0}")]
    Network(String),

    #[error("The content endpoint answered with a failure: {0}")]
    Status(String),

    #[error("The content endpoint answered with a malformed body: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Fold a transport error into the Network/Status/Parse taxonomy.
    /// Every variant ends up on the same "keep the defaults" path, this
    /// only drives what gets logged.
    pub fn classify(error: &ServerFnError) -> Self {
        match error {
            ServerFnError::Request(message) => Self::Network(message.clone()),
            ServerFnError::Response(message) | ServerFnError::ServerError(message) => {
                Self::Status(message.clone())
            }
            ServerFnError::Deserialization(message) | ServerFnError::Serialization(message) => {
                Self::Parse(message.clone())
            }
            other => Self::Network(other.to_string()),
        }
    }
}
