//! Notification event payload published on user lifecycle actions.
//!
//! Events are fire-and-forget: constructed once per triggering action,
//! published to the user-events channel, never persisted or retried.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::User;

/// Kind of business occurrence being announced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    #[serde(rename = "USER_REGISTERED")]
    UserRegistered,
    #[serde(rename = "USER_LOGGED_IN")]
    UserLoggedIn,
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventType::UserRegistered => write!(f, "USER_REGISTERED"),
            EventType::UserLoggedIn => write!(f, "USER_LOGGED_IN"),
        }
    }
}

/// Domain event delivered to the notification consumer.
///
/// The consumer expects camelCase field names (`eventType`, `userId`,
/// `userEmail`) on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationEvent {
    pub event_type: EventType,
    pub user_id: i64,
    /// Address-like subject identifier. The username is used here because
    /// the user record carries no email of its own.
    pub user_email: String,
    pub title: String,
    pub message: String,
    /// Set at construction, never client-supplied
    #[serde(with = "timestamp_format")]
    pub timestamp: DateTime<Utc>,
}

impl NotificationEvent {
    fn new(
        event_type: EventType,
        user_id: i64,
        user_email: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            event_type,
            user_id,
            user_email: user_email.into(),
            title: title.into(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    /// Welcome event published after a registration commits
    pub fn user_registered(user: &User) -> Self {
        Self::new(
            EventType::UserRegistered,
            user.id,
            user.username.clone(),
            "Welcome",
            "Your account has been successfully created.",
        )
    }

    /// Event published after a successful login
    pub fn user_logged_in(user: &User) -> Self {
        Self::new(
            EventType::UserLoggedIn,
            user.id,
            user.username.clone(),
            "Login Successful",
            "You have successfully logged into your account.",
        )
    }
}

/// Timestamp wire format expected by the notification consumer:
/// `yyyy-MM-dd HH:mm:ss` in UTC.
mod timestamp_format {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&timestamp.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_user() -> User {
        User {
            id: 101,
            username: "alice".to_string(),
            password_hash: "hashed".to_string(),
            role: UserRole::Employee,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    use crate::domain::UserRole;

    #[test]
    fn registered_event_carries_subject() {
        let event = NotificationEvent::user_registered(&test_user());
        assert_eq!(event.event_type, EventType::UserRegistered);
        assert_eq!(event.user_id, 101);
        assert_eq!(event.user_email, "alice");
    }

    #[test]
    fn event_serializes_with_consumer_field_names() {
        let event = NotificationEvent::user_logged_in(&test_user());
        let json = serde_json::to_value(&event).unwrap();

        // The consumer reads camelCase keys and SCREAMING_SNAKE type values
        assert_eq!(json["eventType"], "USER_LOGGED_IN");
        assert_eq!(json["userId"], 101);
        assert_eq!(json["userEmail"], "alice");
        assert!(json.get("event_type").is_none());
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn timestamp_uses_consumer_wire_format() {
        let mut event = NotificationEvent::user_registered(&test_user());
        event.timestamp = Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["timestamp"], "2026-03-14 09:26:53");

        let parsed: NotificationEvent = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.timestamp, event.timestamp);
    }
}
