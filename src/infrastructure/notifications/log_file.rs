use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::entities::warning::Warning;
use crate::domain::ports::notifier::{NotificationError, Notifier};

/// `asctime`-style timestamp: local time, comma before milliseconds.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Appends one `<timestamp> - <LEVEL> - <message>` line per warning.
///
/// The file is opened (and created if absent) once, when the notifier is
/// built; it is never rotated or truncated. Concurrent probe processes may
/// interleave lines.
pub struct LogFileNotifier {
    path: PathBuf,
    file: Mutex<File>,
}

impl LogFileNotifier {
    /// Opens `path` for appending, expanding `~` and creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns `NotificationError::ChannelUnavailable` if the directory or
    /// file cannot be created or opened.
    pub fn open(path: &str) -> Result<Self, NotificationError> {
        let expanded = shellexpand::tilde(path);
        let path = PathBuf::from(expanded.as_ref());

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                NotificationError::ChannelUnavailable(format!(
                    "cannot create log directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                NotificationError::ChannelUnavailable(format!(
                    "cannot open log file {}: {e}",
                    path.display()
                ))
            })?;

        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Renders the log line for `warning`, without the trailing newline.
#[must_use]
pub fn format_line(warning: &Warning) -> String {
    format!(
        "{} - {} - {}",
        warning.timestamp.format(TIMESTAMP_FORMAT),
        warning.level,
        warning.message
    )
}

impl Notifier for LogFileNotifier {
    fn notify(&self, warning: &Warning) -> Result<(), NotificationError> {
        let mut file = self
            .file
            .lock()
            .map_err(|e| NotificationError::SendFailed(format!("log file lock poisoned: {e}")))?;

        writeln!(file, "{}", format_line(warning))
            .and_then(|()| file.flush())
            .map_err(|e| {
                NotificationError::SendFailed(format!(
                    "cannot write to log file {}: {e}",
                    self.path.display()
                ))
            })
    }
}
