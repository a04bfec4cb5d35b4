//! Order status lifecycle and the customer cancellation window
//!
//! Status moves forward (placed → preparing → ready → completed) under staff
//! control; the only customer-initiated transition is placed → cancelled,
//! allowed for 30 seconds after creation as an undo, not a cancellation
//! policy.

use chrono::{DateTime, Duration, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use uuid::Uuid;

/// Seconds after creation during which a placed order can still be cancelled
pub const CANCELLATION_WINDOW_SECS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Placed,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "placed" => Some(OrderStatus::Placed),
            "preparing" => Some(OrderStatus::Preparing),
            "ready" => Some(OrderStatus::Ready),
            "completed" => Some(OrderStatus::Completed),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "placed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

/// How a cancel request identifies its order: opaque row id or the
/// all-digits order number, told apart by shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderLocator {
    Id(Uuid),
    Number(String),
}

impl OrderLocator {
    pub fn parse(raw: &str) -> Option<Self> {
        lazy_static! {
            static ref UUID_RE: Regex = Regex::new(
                r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$"
            )
            .unwrap();
            static ref DIGITS_RE: Regex = Regex::new(r"^\d+$").unwrap();
        }

        let raw = raw.trim();
        if UUID_RE.is_match(&raw.to_lowercase()) {
            Uuid::parse_str(raw).ok().map(OrderLocator::Id)
        } else if DIGITS_RE.is_match(raw) {
            Some(OrderLocator::Number(raw.to_string()))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancellationDecision {
    Allowed,
    /// The order was placed more than the window ago
    WindowExpired,
    /// The order already left `placed` (including already cancelled)
    NotCancellable,
}

/// Decide whether a cancel request may proceed. Pure; callers supply `now`.
pub fn cancellation_decision(
    status: OrderStatus,
    created_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> CancellationDecision {
    if status != OrderStatus::Placed {
        return CancellationDecision::NotCancellable;
    }

    let age = now.signed_duration_since(created_at);
    if age < Duration::seconds(CANCELLATION_WINDOW_SECS) {
        CancellationDecision::Allowed
    } else {
        CancellationDecision::WindowExpired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs_ago: i64) -> (DateTime<Utc>, DateTime<Utc>) {
        let now = Utc::now();
        (now - Duration::seconds(secs_ago), now)
    }

    #[test]
    fn test_window_boundaries() {
        let (created, now) = at(29);
        assert_eq!(
            cancellation_decision(OrderStatus::Placed, created, now),
            CancellationDecision::Allowed
        );

        let (created, now) = at(31);
        assert_eq!(
            cancellation_decision(OrderStatus::Placed, created, now),
            CancellationDecision::WindowExpired
        );

        // Exactly 30s is already outside: the window is strictly less-than
        let (created, now) = at(CANCELLATION_WINDOW_SECS);
        assert_eq!(
            cancellation_decision(OrderStatus::Placed, created, now),
            CancellationDecision::WindowExpired
        );
    }

    #[test]
    fn test_only_placed_orders_cancel() {
        let (created, now) = at(5);
        for status in [
            OrderStatus::Preparing,
            OrderStatus::Ready,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(
                cancellation_decision(status, created, now),
                CancellationDecision::NotCancellable
            );
        }
    }

    #[test]
    fn test_locator_disambiguation() {
        let id = "a1b2c3d4-0000-4000-8000-1234567890ab";
        match OrderLocator::parse(id) {
            Some(OrderLocator::Id(parsed)) => {
                assert_eq!(parsed, Uuid::parse_str(id).unwrap())
            }
            other => panic!("expected id locator, got {other:?}"),
        }

        assert_eq!(
            OrderLocator::parse("20260801007"),
            Some(OrderLocator::Number("20260801007".to_string()))
        );

        assert_eq!(OrderLocator::parse("not-an-order"), None);
        assert_eq!(OrderLocator::parse(""), None);
    }

    #[test]
    fn test_status_round_trip() {
        for s in ["placed", "preparing", "ready", "completed", "cancelled"] {
            assert_eq!(OrderStatus::from_str(s).unwrap().as_str(), s);
        }
        assert_eq!(OrderStatus::from_str("refunded"), None);
    }
}
