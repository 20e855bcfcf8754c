use thiserror::Error;

// Unified error type for fbgen
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),

    #[error("Cannot parse `{0}`: {1}")]
    Yaml(String, #[source] serde_yaml::Error),

    // Validation errors
    #[error("Unknown block type `{1}` at {0}")]
    UnknownBlock(String, String),

    #[error("Block `{1}` at {0} does not fit a {2} slot")]
    MisplacedBlock(String, String, &'static str),
}

impl Error {
    /// Location of the offending block, if the error concerns one
    pub fn path(&self) -> Option<&str> {
        match self {
            Error::UnknownBlock(path, _) | Error::MisplacedBlock(path, _, _) => Some(path),
            _ => None,
        }
    }
}
