//! User Notifications
//!
//! Where remote failures end up. The browser build shows a blocking alert.

/// Sink for user-visible failure messages
pub trait Notifier {
    fn notify(&self, message: &str);
}

impl<F> Notifier for F
where
    F: Fn(&str),
{
    fn notify(&self, message: &str) {
        self(message)
    }
}
