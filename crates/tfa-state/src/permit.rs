//! # Seasonal Fishing Permit
//!
//! A permit to fish one species in one area for one season window, with a
//! quota allowance consumed over the window.
//!
//! ## States
//!
//! ```text
//! Pending ──▶ Active ──▶ (effective) Expired
//!    │└──────────────────▶ (effective) Expired
//!    └──▶ Denied (terminal, reviewer action only)
//! ```
//!
//! Denial is the one transition the clock can never make: it is set only by
//! an explicit reviewer action, and once set no date logic overrides it.
//! Quota arithmetic lives in the registry's ledger; this record stores the
//! two counters and enforces their ordering invariant.

use serde::{Deserialize, Serialize};

use tfa_core::{CalendarDate, PermitId, StateError};

use crate::lifecycle::Licensed;
use crate::status::LicenseStatus;

/// A seasonal fishing permit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Permit {
    /// Unique identifier.
    pub id: PermitId,
    /// Season label, e.g. `Fall 2025`.
    pub season: String,
    /// Species the permit covers.
    pub fish_type: String,
    /// Fishing area the permit covers.
    pub area: String,
    /// First day of the permit window.
    pub starts_on: CalendarDate,
    /// Last day of the permit window. Strictly after `starts_on`.
    pub ends_on: CalendarDate,
    /// Stored permit status.
    pub status: LicenseStatus,
    /// The day the application was admitted.
    pub applied_on: CalendarDate,
    /// Total catch allowance in pounds.
    pub quota_allowed: u32,
    /// Catch recorded so far. Never exceeds `quota_allowed`.
    pub quota_used: u32,
}

impl Permit {
    /// Approve a pending application (PENDING → ACTIVE).
    pub fn approve(&mut self, on: CalendarDate) -> Result<(), StateError> {
        self.require_effective(LicenseStatus::Pending, "ACTIVE", on)?;
        self.status = LicenseStatus::Active;
        tracing::info!(permit = %self.id, season = %self.season, "permit approved");
        Ok(())
    }

    /// Deny a pending application (PENDING → DENIED).
    ///
    /// Reviewer action. A window that has already closed cannot be denied —
    /// the application is effectively expired and terminal.
    pub fn deny(&mut self, on: CalendarDate) -> Result<(), StateError> {
        self.require_effective(LicenseStatus::Pending, "DENIED", on)?;
        self.status = LicenseStatus::Denied;
        tracing::info!(permit = %self.id, season = %self.season, "permit denied");
        Ok(())
    }

    /// Re-check record invariants after a mutation.
    pub fn validate(&self) -> Result<(), StateError> {
        if self.ends_on <= self.starts_on {
            return Err(StateError::InvariantViolated {
                record: "permit".to_string(),
                reason: format!(
                    "end date {} is not after start date {}",
                    self.ends_on, self.starts_on
                ),
            });
        }
        if self.quota_used > self.quota_allowed {
            return Err(StateError::InvariantViolated {
                record: "permit".to_string(),
                reason: format!(
                    "quota used {} exceeds quota allowed {}",
                    self.quota_used, self.quota_allowed
                ),
            });
        }
        Ok(())
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
                reason: format!("requires a {expected} application"),
            });
        }
        Ok(())
    }
}

impl Licensed for Permit {
    fn stored_status(&self) -> LicenseStatus {
        self.status
    }

    fn expires_on(&self) -> CalendarDate {
        self.ends_on
    }
}
