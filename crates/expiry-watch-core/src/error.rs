//! Error types for watcher operations

use thiserror::Error;

/// Main error type for all watcher operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WatchError {
    /// `start` called while the poller is running
    #[error("expiration watcher already started")]
    AlreadyStarted,

    /// `start` called after the poller was stopped
    #[error("can only start watcher once per instance")]
    AlreadyStartedOnce,

    /// Polling interval must be non-zero
    #[error("polling interval must be greater than zero")]
    InvalidPollingInterval,

    /// No tokio runtime to spawn the poller on
    #[error("no tokio runtime available to spawn the poller")]
    NoRuntime,
}

/// Result type alias for watcher operations
pub type Result<T> = std::result::Result<T, WatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WatchError::AlreadyStarted;
        assert_eq!(err.to_string(), "expiration watcher already started");

        let err = WatchError::AlreadyStartedOnce;
        assert_eq!(err.to_string(), "can only start watcher once per instance");

        let err = WatchError::InvalidPollingInterval;
        assert_eq!(err.to_string(), "polling interval must be greater than zero");
    }

    #[test]
    fn test_error_clone() {
        let err = WatchError::NoRuntime;
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
