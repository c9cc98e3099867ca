//! Click entity representing a single redirect access.

use chrono::{DateTime, Utc};

/// Referrer value recorded when the request carried no `Referer` header.
pub const DIRECT_REFERRER: &str = "direct";

/// A click recorded when a short code is successfully resolved.
///
/// `clicked_at` is the timestamp captured once per resolution and is the same
/// instant the expiry check was evaluated against. `referrer` is never empty:
/// requests without a referrer are recorded with the [`DIRECT_REFERRER`]
/// sentinel. `origin` identifies the caller on the network, typically the
/// peer address as seen by the server.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub clicked_at: DateTime<Utc>,
    pub referrer: String,
    pub origin: String,
}

impl ClickEvent {
    /// Creates a new click event, applying the `"direct"` sentinel when the
    /// referrer is absent.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let click = ClickEvent::new(Utc::now(), Some("https://google.com"), "192.168.1.1".to_string());
    /// ```
    pub fn new(clicked_at: DateTime<Utc>, referrer: Option<&str>, origin: String) -> Self {
        Self {
            clicked_at,
            referrer: referrer.map_or_else(|| DIRECT_REFERRER.to_string(), |r| r.to_string()),
            origin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_click_event_with_referrer() {
        let now = Utc::now();
        let click = ClickEvent::new(now, Some("https://google.com"), "192.168.1.1".to_string());

        assert_eq!(click.clicked_at, now);
        assert_eq!(click.referrer, "https://google.com");
        assert_eq!(click.origin, "192.168.1.1");
    }

    #[test]
    fn test_missing_referrer_becomes_direct() {
        let click = ClickEvent::new(Utc::now(), None, "10.0.0.1".to_string());
        assert_eq!(click.referrer, DIRECT_REFERRER);
    }

    #[test]
    fn test_click_event_clone() {
        let click = ClickEvent::new(Utc::now(), Some("https://example.com"), "1.1.1.1".to_string());
        let cloned = click.clone();

        assert_eq!(cloned.clicked_at, click.clicked_at);
        assert_eq!(cloned.referrer, click.referrer);
        assert_eq!(cloned.origin, click.origin);
    }
}
