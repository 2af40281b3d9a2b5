use std::io::{Stdout, Write};
use std::sync::Mutex;

use crate::domain::entities::warning::Warning;
use crate::domain::ports::notifier::{NotificationError, Notifier};

/// Prints the bare warning message, one line each, on standard output by
/// default. The text is exactly what the log file carries after its
/// `<timestamp> - <LEVEL> - ` prefix.
pub struct TerminalNotifier<W = Stdout> {
    out: Mutex<W>,
}

impl TerminalNotifier<Stdout> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_writer(std::io::stdout())
    }
}

impl Default for TerminalNotifier<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalNotifier<W> {
    #[must_use]
    pub const fn with_writer(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Gives the writer back, e.g. to inspect what was printed.
    ///
    /// # Errors
    ///
    /// Returns `NotificationError::ChannelUnavailable` if the lock is poisoned.
    pub fn into_inner(self) -> Result<W, NotificationError> {
        self.out.into_inner().map_err(|e| {
            NotificationError::ChannelUnavailable(format!("terminal lock poisoned: {e}"))
        })
    }
}

impl<W: Write + Send> Notifier for TerminalNotifier<W> {
    fn notify(&self, warning: &Warning) -> Result<(), NotificationError> {
        let mut out = self
            .out
            .lock()
            .map_err(|e| NotificationError::SendFailed(format!("terminal lock poisoned: {e}")))?;
        writeln!(out, "{}", warning.message)
            .and_then(|()| out.flush())
            .map_err(|e| NotificationError::SendFailed(format!("stdout: {e}")))
    }
}
