pub mod check;
pub mod process;
pub mod warning;

pub use check::CheckKind;
pub use process::{ProcessReading, ProcessRecord, SkipReason};
pub use warning::Warning;
