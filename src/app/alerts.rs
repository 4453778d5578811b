//! Transient alert state.
//!
//! `AlertController` holds the one alert that can be visible at a time and
//! decides when an expiry timer is allowed to clear it. Presentation (the
//! banner frame) lives in `AppState`; scheduling the 2-second timeout lives
//! in the dispatch layer, which hands the generation back on expiry.

/// How long an alert stays visible, in seconds.
pub const ALERT_SECONDS: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Warning,
    Danger,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub kind: AlertKind,
}

/// Latest-alert-wins state with stale-timer protection.
///
/// Every `show` bumps a generation counter; an expiry only clears the alert
/// when it carries the current generation. A timer scheduled for an alert
/// that has since been replaced expires as a no-op instead of wiping the
/// newer alert early.
#[derive(Debug, Default)]
pub struct AlertController {
    current: Option<Alert>,
    generation: u64,
}

impl AlertController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the visible alert and return the generation its expiry timer
    /// must present to clear it.
    pub fn show(&mut self, message: impl Into<String>, kind: AlertKind) -> u64 {
        self.generation += 1;
        self.current = Some(Alert {
            message: message.into(),
            kind,
        });
        self.generation
    }

    /// Expiry tick from a timer. Returns true if the alert was cleared,
    /// false if the timer was stale.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation == self.generation && self.current.is_some() {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Alert> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_sets_current() {
        let mut alerts = AlertController::new();
        assert!(alerts.current().is_none());

        alerts.show("Converted to Uppercase!", AlertKind::Success);
        let alert = alerts.current().expect("alert visible");
        assert_eq!(alert.message, "Converted to Uppercase!");
        assert_eq!(alert.kind, AlertKind::Success);
    }

    #[test]
    fn test_expire_clears_current_generation() {
        let mut alerts = AlertController::new();
        let generation = alerts.show("Speaking!", AlertKind::Success);

        assert!(alerts.expire(generation));
        assert!(alerts.current().is_none());
    }

    #[test]
    fn test_stale_timer_does_not_clear_newer_alert() {
        let mut alerts = AlertController::new();
        let first = alerts.show("first", AlertKind::Info);
        let _second = alerts.show("second", AlertKind::Warning);

        // The first alert's timer fires after it was replaced
        assert!(!alerts.expire(first));
        assert_eq!(alerts.current().map(|a| a.message.as_str()), Some("second"));
    }

    #[test]
    fn test_second_expiry_is_noop() {
        let mut alerts = AlertController::new();
        let generation = alerts.show("once", AlertKind::Danger);
        assert!(alerts.expire(generation));
        assert!(!alerts.expire(generation));
    }
}
