use thiserror::Error;

#[derive(Error, Debug)]
pub enum SorterError {
    #[error("Invalid direction {0}: expected 1, 2 or 3")]
    InvalidDirection(i64),

    #[error("Not an integer: {0:?}")]
    NonIntegerInput(String),

    #[error("Failed to render flap plot: {0}")]
    Render(String),

    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl SorterError {
    /// Whether the operator loop can report this error and keep prompting
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SorterError::InvalidDirection(_) | SorterError::NonIntegerInput(_)
        )
    }
}
