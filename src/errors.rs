use thiserror::Error;

/// Errors surfaced by the walkthrough library.
///
/// Navigation itself cannot fail; these cover the shell around it.
#[derive(Debug, Error)]
pub enum WalkthroughError {
    #[error("Unknown step id {id}: the workflow has steps 1..={max}")]
    UnknownStep { id: u32, max: usize },

    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Render error: {reason}")]
    Render { reason: String },
}

pub type WalkthroughResult<T> = Result<T, WalkthroughError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_step_message() {
        let err = WalkthroughError::UnknownStep { id: 99, max: 8 };
        assert_eq!(err.to_string(), "Unknown step id 99: the workflow has steps 1..=8");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
        let err: WalkthroughError = io.into();
        assert!(matches!(err, WalkthroughError::Io(_)));
        assert!(err.to_string().contains("stdout closed"));
    }
}
