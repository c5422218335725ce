pub mod actions;
pub mod errors;
pub mod notifications;

pub use actions::{Action, MenuGroup};
pub use errors::{ConfigError, NotepadError, PlatformError};
pub use notifications::{Notification, NotificationLevel, NotificationQueue};
