//! # Fisher Profile
//!
//! The identity record of a registered fisher.
//!
//! ## States
//!
//! ```text
//! Pending ──▶ Active ──▶ Suspended ──▶ Active (reinstatement)
//! ```
//!
//! Profiles are never deleted — deactivation is a suspension, and a
//! suspended fisher can be reinstated by the authority. Approval issues the
//! fisher's personal license for the standard term; the digital ID card
//! collaborator reads its expiry for the renewal countdown.

use serde::{Deserialize, Serialize};

use tfa_core::{CalendarDate, FisherId, StateError};

use crate::license::License;
use crate::status::ProfileStatus;

/// How to reach a fisher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Residential address.
    pub address: String,
}

/// Who to call when a vessel is overdue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    /// Contact name.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
}

/// A registered fisher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FisherProfile {
    /// Unique identifier.
    pub id: FisherId,
    /// Full legal name.
    pub name: String,
    /// Date of birth.
    pub date_of_birth: CalendarDate,
    /// The day the registration was admitted.
    pub registered_on: CalendarDate,
    /// Contact details.
    pub contact: ContactInfo,
    /// Emergency contact.
    pub emergency_contact: EmergencyContact,
    /// Stored profile status.
    pub status: ProfileStatus,
    /// Personal fishing license, issued on approval.
    pub license: Option<License>,
}

impl FisherProfile {
    /// Approve a pending registration (PENDING → ACTIVE).
    ///
    /// Issues the fisher's personal license for the standard term starting
    /// on the approval date.
    pub fn approve(&mut self, on: CalendarDate) -> Result<(), StateError> {
        self.require_status(ProfileStatus::Pending, "ACTIVE")?;
        self.license = Some(License::standard_term(on));
        self.status = ProfileStatus::Active;
        tracing::info!(fisher = %self.id, "fisher registration approved");
        Ok(())
    }

    /// Suspend an active fisher (ACTIVE → SUSPENDED).
    pub fn suspend(&mut self) -> Result<(), StateError> {
        self.require_status(ProfileStatus::Active, "SUSPENDED")?;
        self.status = ProfileStatus::Suspended;
        tracing::info!(fisher = %self.id, "fisher suspended");
        Ok(())
    }

    /// Reinstate a suspended fisher (SUSPENDED → ACTIVE).
    pub fn reinstate(&mut self) -> Result<(), StateError> {
        self.require_status(ProfileStatus::Suspended, "ACTIVE")?;
        self.status = ProfileStatus::Active;
        tracing::info!(fisher = %self.id, "fisher reinstated");
        Ok(())
    }

    /// Re-check record invariants after a mutation.
    pub fn validate(&self) -> Result<(), StateError> {
        if self.date_of_birth >= self.registered_on {
            return Err(StateError::InvariantViolated {
                record: "fisher".to_string(),
                reason: format!(
                    "date of birth {} is not before registration date {}",
                    self.date_of_birth, self.registered_on
                ),
            });
        }
        if let Some(license) = &self.license {
            license.validate()?;
        }
        Ok(())
    }

    fn require_status(&self, expected: ProfileStatus, target: &str) -> Result<(), StateError> {
        if self.status != expected {
            return Err(StateError::InvalidTransition {
                from: self.status.to_string(),
                to: target.to_string(),
                reason: format!("requires a {expected} profile"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    fn pending_profile() -> FisherProfile {
        FisherProfile {
            id: FisherId::new(),
            name: "Maria Santos".to_string(),
            date_of_birth: date("1985-03-15"),
            registered_on: date("2024-08-15"),
            contact: ContactInfo {
                email: "maria@example.com".to_string(),
                phone: "555-0101".to_string(),
                address: "12 Harbor Road".to_string(),
            },
            emergency_contact: EmergencyContact {
                name: "Joao Santos".to_string(),
                phone: "555-0102".to_string(),
            },
            status: ProfileStatus::Pending,
            license: None,
        }
    }

    // ── Happy-path transitions ───────────────────────────────────────

    #[test]
    fn test_approve_issues_license() {
        let mut profile = pending_profile();
        profile.approve(date("2024-08-20")).unwrap();
        assert_eq!(profile.status, ProfileStatus::Active);
        let license = profile.license.unwrap();
        assert_eq!(license.issued_on, date("2024-08-20"));
        assert_eq!(license.expires_on, date("2025-08-20"));
    }

    #[test]
    fn test_suspend_and_reinstate() {
        let mut profile = pending_profile();
        profile.approve(date("2024-08-20")).unwrap();
        profile.suspend().unwrap();
        assert_eq!(profile.status, ProfileStatus::Suspended);
        profile.reinstate().unwrap();
        assert_eq!(profile.status, ProfileStatus::Active);
    }

    // ── Invalid transitions ──────────────────────────────────────────

    #[test]
    fn test_cannot_suspend_pending() {
        let mut profile = pending_profile();
        assert!(profile.suspend().is_err());
    }

    #[test]
    fn test_cannot_approve_twice() {
        let mut profile = pending_profile();
        profile.approve(date("2024-08-20")).unwrap();
        assert!(profile.approve(date("2024-08-21")).is_err());
    }

    #[test]
    fn test_cannot_reinstate_active() {
        let mut profile = pending_profile();
        profile.approve(date("2024-08-20")).unwrap();
        assert!(profile.reinstate().is_err());
    }

    // ── Invariants ───────────────────────────────────────────────────

    #[test]
    fn test_validate_rejects_future_birth_date() {
        let mut profile = pending_profile();
        profile.date_of_birth = date("2030-01-01");
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_validate_checks_embedded_license() {
        let mut profile = pending_profile();
        profile.approve(date("2024-08-20")).unwrap();
        if let Some(license) = &mut profile.license {
            license.expires_on = date("2020-01-01");
        }
        assert!(profile.validate().is_err());
    }
}
