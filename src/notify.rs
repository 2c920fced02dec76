//! User notifications.

/// Outcome a notification reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Presentation-side sink for success and error messages.
pub trait Notifier {
    fn notify(&mut self, kind: NotificationKind, message: &str);
}

/// Discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&mut self, _kind: NotificationKind, _message: &str) {}
}

/// Emits notifications as log events.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

#[cfg(feature = "tracing")]
impl Notifier for TracingNotifier {
    fn notify(&mut self, kind: NotificationKind, message: &str) {
        match kind {
            NotificationKind::Success => tracing::info!("{}", message),
            NotificationKind::Error => tracing::warn!("{}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_noop_notifier_session() {
        let mut session = Session::new(MemoryStorage::new(), NoopNotifier);
        assert!(session.generate().is_ok());
        session.config_mut().length = 2;
        assert!(session.generate().is_err());
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn test_tracing_notifier_session() {
        let mut session = Session::new(MemoryStorage::new(), TracingNotifier);
        assert!(session.generate().is_ok());
        assert_eq!(session.history().len(), 1);
    }
}
