use thiserror::Error;

#[derive(Debug, Error)]
pub enum MigrateError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MigrateError {
    /// Process exit code reported for this error. Anything that goes wrong
    /// while writing the instruction sequence exits 1; a malformed
    /// environment override exits 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            MigrateError::Config(_) => 2,
            MigrateError::Io(_) => 1,
        }
    }
}
