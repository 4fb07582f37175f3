use crate::domain::model::{Notification, NotificationKind};
use crate::domain::ports::Notifier;

/// Prints notifications to the terminal, the CLI's stand-in for a toast.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, notification: Notification) {
        match notification.kind {
            NotificationKind::Normal => {
                tracing::info!("{}: {}", notification.title, notification.description);
                println!("✅ {}: {}", notification.title, notification.description);
            }
            NotificationKind::Destructive => {
                tracing::error!("{}: {}", notification.title, notification.description);
                eprintln!("❌ {}: {}", notification.title, notification.description);
            }
        }
    }
}
