//! The notification port.
//!
//! The dashboard never draws toasts itself. Every user-visible message goes
//! through a [`Notifier`], which a presentation surface implements.

use adspace_dashboard_models::{Notification, NotificationSeverity};

/// Receives toasts. Fire-and-forget.
pub trait Notifier {
    /// Shows `notification`.
    fn notify(&mut self, notification: Notification);
}

impl<T: Notifier + ?Sized> Notifier for &mut T {
    fn notify(&mut self, notification: Notification) {
        (**self).notify(notification);
    }
}

impl<T: Notifier + ?Sized> Notifier for Box<T> {
    fn notify(&mut self, notification: Notification) {
        (**self).notify(notification);
    }
}

/// Keeps every notification it receives, oldest first.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notifications: Vec<Notification>,
}

impl RecordingNotifier {
    /// Everything received so far.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// The most recent notification.
    #[must_use]
    pub fn last(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    /// Number of notifications received.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    /// Whether nothing has been received.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}

/// Writes notifications to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notification: Notification) {
        match notification.severity {
            NotificationSeverity::Default => {
                log::info!("{}: {}", notification.title, notification.description);
            }
            NotificationSeverity::Destructive => {
                log::warn!("{}: {}", notification.title, notification.description);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn send_pair(mut port: impl Notifier) {
        port.notify(Notification::info("a", "first"));
        port.notify(Notification::destructive("b", "second"));
    }

    #[test]
    fn recording_notifier_keeps_order() {
        let mut recorder = RecordingNotifier::default();
        send_pair(&mut recorder);

        assert_eq!(recorder.len(), 2);
        assert_eq!(recorder.notifications()[0].title, "a");
        assert!(recorder.last().is_some_and(Notification::is_destructive));
    }

    #[test]
    fn boxed_notifier_forwards() {
        let mut recorder = RecordingNotifier::default();
        {
            let boxed: Box<dyn Notifier + '_> = Box::new(&mut recorder);
            send_pair(boxed);
        }

        let titles: Vec<&str> = recorder
            .notifications()
            .iter()
            .map(|n| n.title.as_str())
            .collect();
        assert_eq!(titles, vec!["a", "b"]);
    }
}
