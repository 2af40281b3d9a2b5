use thiserror::Error;

use crate::domain::entities::warning::Warning;

#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("failed to send notification: {0}")]
    SendFailed(String),
    #[error("notification channel unavailable: {0}")]
    ChannelUnavailable(String),
}

/// Sink that records a warning somewhere (console, log file, ...).
pub trait Notifier: Send + Sync {
    /// Record one warning.
    ///
    /// # Errors
    ///
    /// Returns `NotificationError` if the warning could not be written
    /// or the channel is unavailable.
    fn notify(&self, warning: &Warning) -> Result<(), NotificationError>;
}
