//! Blocking alert notifications for remote failures

use todo_core::Notifier;

pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if window.alert_with_message(message).is_err() {
                    log::error!("[alert] could not show: {}", message);
                }
            }
            None => log::error!("[alert] no window: {}", message),
        }
    }
}
