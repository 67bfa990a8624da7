use std::fmt;

/// Errors raised by the game core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// `pop_first` was called on an empty marker queue
    EmptyQueue,
    /// A grid was requested with a zero dimension
    InvalidGrid { cols: u32, rows: u32 },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::EmptyQueue => write!(f, "marker queue is empty"),
            GameError::InvalidGrid { cols, rows } => {
                write!(f, "grid must be at least 1x1, got {}x{}", cols, rows)
            }
        }
    }
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(GameError::EmptyQueue.to_string(), "marker queue is empty");
        assert_eq!(
            GameError::InvalidGrid { cols: 0, rows: 4 }.to_string(),
            "grid must be at least 1x1, got 0x4"
        );
    }
}
