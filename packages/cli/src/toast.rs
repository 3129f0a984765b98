//! Toast tray for the terminal dashboard.

use adspace_cli_utils::MultiProgress;
use adspace_dashboard::notify::Notifier;
use adspace_dashboard_models::Notification;

use crate::render;

/// Prints toasts above any active spinner.
pub struct TerminalNotifier {
    multi: MultiProgress,
    shown: usize,
}

impl TerminalNotifier {
    /// Creates a tray that prints through `multi`.
    #[must_use]
    pub const fn new(multi: MultiProgress) -> Self {
        Self { multi, shown: 0 }
    }

    /// How many toasts have been printed.
    #[must_use]
    pub const fn shown(&self) -> usize {
        self.shown
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&mut self, notification: Notification) {
        let line = render::toast(&notification);
        self.multi.suspend(|| println!("{line}"));
        self.shown += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adspace_cli_utils::ProgressDrawTarget;

    #[test]
    fn counts_printed_toasts() {
        let multi = MultiProgress::with_draw_target(ProgressDrawTarget::hidden());
        let mut notifier = TerminalNotifier::new(multi);
        notifier.notify(Notification::info("Map Recentered", "Map view has been reset"));
        notifier.notify(Notification::destructive("Missing Information", "Name"));
        assert_eq!(notifier.shown(), 2);
    }
}
