use lpform_catalog::{InputError, Method, UnknownMethod};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UiError {
    #[error("Example not found: {method}[{index}]")]
    ExampleNotFound { method: Method, index: usize },
    #[error(transparent)]
    UnknownMethod(#[from] UnknownMethod),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Corrupt form data under '{key}': {source}")]
    CorruptState {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to serialize form data: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("Timer error: {0}")]
    Timer(String),
    #[error("DOM error: {0}")]
    Dom(String),
    #[error("Invalid problem input: {0}")]
    Input(#[from] InputError),
}
