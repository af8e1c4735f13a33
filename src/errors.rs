use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("read index {index} out of range for {bound} reads")]
    IndexOutOfRange { index: usize, bound: usize },

    #[error("invalid base '{0}': only A/C/G/T are permitted")]
    InvalidBase(char),

    #[error("inconsistent problem instance: {0}")]
    InconsistentInstance(String),

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
