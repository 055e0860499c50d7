//! Crate-level error types.

use std::fmt;

/// Errors produced by the scrollscape crate.
#[derive(Debug)]
pub enum ScrollscapeError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A color string that is not `#rrggbb`.
    InvalidColor(String),
    /// The renderer failed to draw a frame.
    Render(String),
    /// The hosting environment (browser window, event loop) failed.
    Host(String),
}

impl fmt::Display for ScrollscapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidColor(value) => {
                write!(f, "invalid color {value:?}, expected #rrggbb")
            }
            Self::Render(msg) => write!(f, "render error: {msg}"),
            Self::Host(msg) => write!(f, "host error: {msg}"),
        }
    }
}

impl std::error::Error for ScrollscapeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ScrollscapeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = ScrollscapeError::InvalidColor("ffee8c".into());
        assert_eq!(
            err.to_string(),
            "invalid color \"ffee8c\", expected #rrggbb"
        );
    }

    #[test]
    fn io_errors_expose_source() {
        use std::error::Error;
        let err = ScrollscapeError::from(std::io::Error::other("disk"));
        assert!(err.source().is_some());
        assert!(ScrollscapeError::Render("lost".into()).source().is_none());
    }
}
