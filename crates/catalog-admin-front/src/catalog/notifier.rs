/// Blocking user notification.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Shows notifications with `window.alert`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AlertNotifier;

#[cfg(target_arch = "wasm32")]
impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        let shown = web_sys::window()
            .map(|window| window.alert_with_message(message).is_ok())
            .unwrap_or(false);
        if !shown {
            log::warn!("Could not show alert: {}", message);
        }
    }
}
