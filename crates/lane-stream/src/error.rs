use thiserror::Error;

#[derive(Debug, Error)]
pub enum StreamError {
    #[error("arrival parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StreamResult<T> = Result<T, StreamError>;
