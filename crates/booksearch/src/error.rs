pub(crate) type DynError = Box<dyn std::error::Error + Send + Sync>;

/// The Errors that may occur when calling the booksearch functions.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    source: Option<DynError>,
}

/// Types of errors that make up an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request could not be sent or the API answered with an error status.
    Network,
    /// The response body could not be deserialized.
    Deserialize,
    /// Search terms were rejected before any request was made.
    InvalidInput,
}

impl Error {
    /// Creates a new [`Error`] based on the [`ErrorKind`] and message to describe the error.
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Self {
        Self {
            kind,
            message: Some(message.into()),
            source: None,
        }
    }

    /// Wraps an existing error as the source of [`Error`].
    pub fn wrap<E>(kind: ErrorKind, source: E) -> Self
    where
        E: Into<DynError>,
    {
        Self {
            kind,
            message: None,
            source: Some(source.into()),
        }
    }

    /// Returns the kind of error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Whether repeating the same search later might succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        self.kind == ErrorKind::Network
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ErrorKind::Network => f.write_str("Network error")?,
            ErrorKind::Deserialize => f.write_str("Deserialize error")?,
            ErrorKind::InvalidInput => f.write_str("Invalid input")?,
        };

        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }

        if let Some(cause) = &self.source {
            write!(f, ": caused by {cause}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| &**e as _)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message_and_cause() {
        let err = Error::new(ErrorKind::InvalidInput, "digits are not allowed");
        assert_eq!("Invalid input: digits are not allowed", err.to_string());

        let cause = std::io::Error::new(std::io::ErrorKind::Other, "connection reset");
        let err = Error::wrap(ErrorKind::Network, cause);
        assert_eq!("Network error: caused by connection reset", err.to_string());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn only_network_errors_are_retryable() {
        assert!(Error::new(ErrorKind::Network, "timeout").is_retryable());
        assert!(!Error::new(ErrorKind::Deserialize, "bad json").is_retryable());
        assert!(!Error::new(ErrorKind::InvalidInput, "1984").is_retryable());
    }
}
