//! # Notification Event Payloads
//!
//! The core never formats user-facing text. When something notification-worthy
//! happens it records a `DomainEvent` — plain serializable data — and the
//! notification collaborator (toasts, email, whatever the deployment wires up)
//! renders it.
//!
//! Events are advisory output, not stored state: the registry accumulates
//! them in an outbox that the collaborator drains.

use serde::{Deserialize, Serialize};

use crate::temporal::CalendarDate;

/// The kind of record an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A registered fisher profile.
    Fisher,
    /// A registered boat.
    Boat,
    /// A seasonal fishing permit.
    Permit,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Fisher => "FISHER",
            Self::Boat => "BOAT",
            Self::Permit => "PERMIT",
        };
        f.write_str(s)
    }
}

/// A discrete notification fact emitted by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A new application was admitted into the registry.
    ApplicationSubmitted {
        /// What kind of record was created.
        kind: EntityKind,
        /// Stringified identifier of the new record.
        id: String,
        /// The reference date the application was admitted on.
        submitted_on: CalendarDate,
    },

    /// A quota usage recording pushed consumption past the near-limit
    /// threshold.
    QuotaWarningRaised {
        /// Stringified permit identifier.
        id: String,
        /// Usage percentage after the recording.
        usage_percentage: u32,
    },

    /// A sweep found a record whose effective status is expired.
    EntityExpired {
        /// What kind of record expired.
        kind: EntityKind,
        /// Stringified identifier of the expired record.
        id: String,
        /// The expiry/end date that was passed.
        expired_on: CalendarDate,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serializes_with_tag() {
        let event = DomainEvent::QuotaWarningRaised {
            id: "permit:0000".to_string(),
            usage_percentage: 87,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "quota_warning_raised");
        assert_eq!(json["usage_percentage"], 87);
    }

    #[test]
    fn test_entity_kind_display() {
        assert_eq!(EntityKind::Fisher.to_string(), "FISHER");
        assert_eq!(EntityKind::Boat.to_string(), "BOAT");
        assert_eq!(EntityKind::Permit.to_string(), "PERMIT");
    }

    #[test]
    fn test_event_roundtrip() {
        let event = DomainEvent::EntityExpired {
            kind: EntityKind::Permit,
            id: "permit:0000".to_string(),
            expired_on: CalendarDate::parse("2024-08-31").unwrap(),
        };
        let json = serde_json::to_string(&event).unwrap();
        let parsed: DomainEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }
}
