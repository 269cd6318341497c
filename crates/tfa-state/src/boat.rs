//! # Boat Registration
//!
//! A registered fishing vessel with its embedded license and insurance
//! expiry tracking.
//!
//! ## States
//!
//! ```text
//! Pending ──▶ Active ──▶ (effective) Expired
//!    └───────────────────▶ (effective) Expired
//! ```
//!
//! Approval is the only stored transition; expiry is derived. The boat's
//! registration number is the natural key — duplicate detection happens in
//! the registry, not here.

use serde::{Deserialize, Serialize};

use tfa_core::{BoatId, CalendarDate, RegistrationNumber, StateError};

use crate::license::License;
use crate::lifecycle::{expiry_warning, ExpiryWarning, Licensed};
use crate::status::LicenseStatus;

/// A registered fishing vessel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boat {
    /// Unique identifier.
    pub id: BoatId,
    /// Vessel name.
    pub name: String,
    /// State-issued registration number. Natural key.
    pub registration: RegistrationNumber,
    /// Vessel type, e.g. `Commercial Fishing Vessel`.
    pub vessel_type: String,
    /// Hull length in feet. Always positive.
    pub length_ft: u32,
    /// Home port.
    pub home_port: String,
    /// The vessel's fishing license.
    pub license: License,
    /// The day the vessel's insurance coverage lapses.
    pub insurance_expires_on: CalendarDate,
    /// Stored license status.
    pub status: LicenseStatus,
}

impl Boat {
    /// Approve a pending registration (PENDING → ACTIVE).
    ///
    /// Approval of a registration whose license window already closed is
    /// rejected — the effective status on the approval date must be
    /// `PENDING`.
    pub fn approve(&mut self, on: CalendarDate) -> Result<(), StateError> {
        self.require_effective(LicenseStatus::Pending, "ACTIVE", on)?;
        self.status = LicenseStatus::Active;
        tracing::info!(boat = %self.id, registration = %self.registration, "boat license approved");
        Ok(())
    }

    /// Advisory warning when insurance coverage lapses soon.
    pub fn insurance_warning(&self, on: CalendarDate) -> Option<ExpiryWarning> {
        expiry_warning(self.insurance_expires_on, on)
    }

    /// Re-check record invariants after a mutation.
    pub fn validate(&self) -> Result<(), StateError> {
        if self.length_ft == 0 {
            return Err(StateError::InvariantViolated {
                record: "boat".to_string(),
                reason: "hull length must be positive".to_string(),
            });
        }
        self.license.validate()
    }

    fn require_effective(
        &self,
        expected: LicenseStatus,
        target: &str,
        on: CalendarDate,
    ) -> Result<(), StateError> {
        let current = self.effective_status(on);
        if current.is_terminal() {
            return Err(StateError::TerminalState {
                state: current.to_string(),
            });
        }
        if current != expected {
            return Err(StateError::InvalidTransition {
                from: current.to_string(),
                to: target.to_string(),
                reason: format!("requires a {expected} registration"),
            });
        }
        Ok(())
    }
}

impl Licensed for Boat {
    fn stored_status(&self) -> LicenseStatus {
        self.status
    }

    fn expires_on(&self) -> CalendarDate {
        self.license.expires_on
    }
}
