pub mod collector;
pub mod notifier;

pub use collector::{CollectionError, MetricsSource};
pub use notifier::{NotificationError, Notifier};
