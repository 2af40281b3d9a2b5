use std::fmt::Write;

use crate::domain::rules::format_percent;

/// Identity and CPU share of one running process.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessRecord {
    pub pid: u32,
    pub name: String,
    /// Not normalised by core count, so it may exceed 100 on multi-core hosts.
    pub cpu_percent: f64,
}

/// Outcome of reading one process during enumeration.
///
/// A process that exits or cannot be read mid-enumeration is routine and
/// surfaces as `Skipped`, never as an error for the whole check.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessReading {
    Sampled(ProcessRecord),
    Skipped { pid: u32, reason: SkipReason },
}

impl ProcessReading {
    #[must_use]
    pub const fn record(&self) -> Option<&ProcessRecord> {
        match self {
            Self::Sampled(record) => Some(record),
            Self::Skipped { .. } => None,
        }
    }
}

/// Why a process was left out of the result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Exited (or became a zombie) between listing and reading.
    Exited,
    /// The OS refused or could not produce a usable reading.
    Unreadable,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exited => write!(f, "exited"),
            Self::Unreadable => write!(f, "unreadable"),
        }
    }
}

impl std::fmt::Display for ProcessRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{'pid': {}, 'name': {}, 'cpu_percent': {}}}",
            self.pid,
            quote_name(&self.name),
            format_percent(self.cpu_percent)
        )
    }
}

/// Quotes a process name the way the warning message has always shown it:
/// single quotes, switching to double quotes when the name holds only `'`.
///
/// Backslashes, the active quote and control characters are escaped, so a
/// name can never span lines or carry terminal escape sequences.
fn quote_name(name: &str) -> String {
    let quote = if name.contains('\'') && !name.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut quoted = String::with_capacity(name.len() + 2);
    quoted.push(quote);
    for c in name.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c == quote => {
                quoted.push('\\');
                quoted.push(c);
            }
            // Cc is U+0000..=U+001F and U+007F..=U+009F, always two hex digits
            c if c.is_control() => {
                let _ = write!(quoted, "\\x{:02x}", u32::from(c));
            }
            c => quoted.push(c),
        }
    }
    quoted.push(quote);
    quoted
}
