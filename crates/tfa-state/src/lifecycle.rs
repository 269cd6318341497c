//! # Lifecycle Derivation
//!
//! The one place in the workspace where a date comparison decides a status.
//!
//! ## Algorithm
//!
//! ```text
//! stored DENIED ─────────────────────▶ DENIED   (terminal, never overridden)
//! reference ≥ expiry ────────────────▶ EXPIRED  (overrides ACTIVE and PENDING)
//! otherwise ─────────────────────────▶ stored
//! ```
//!
//! Applies uniformly to boats and permits through the [`Licensed`] trait.
//! The derivation is pure: the reference date is always a parameter, stored
//! state is never mutated, and warnings are advisory values for display
//! layers rather than flags written anywhere.

use serde::{Deserialize, Serialize};

use tfa_core::CalendarDate;

use crate::status::LicenseStatus;

/// Records expiring within this many days raise an advisory warning.
pub const EXPIRY_WARNING_WINDOW_DAYS: i64 = 30;

/// Advisory notice that a record's validity window is about to close.
///
/// Never stored; re-derived on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiryWarning {
    /// Whole days until expiry. Zero means the window closes today.
    pub days_remaining: i64,
}

/// Derive the effective status of a time-bound record.
///
/// `DENIED` is terminal and wins over everything. Otherwise a reference
/// date at or past the expiry date forces `EXPIRED` — a pending
/// application whose window closed without approval expires exactly like
/// an active one.
pub fn effective_status(
    stored: LicenseStatus,
    expires_on: CalendarDate,
    on: CalendarDate,
) -> LicenseStatus {
    if stored == LicenseStatus::Denied {
        return stored;
    }
    if on >= expires_on {
        return LicenseStatus::Expired;
    }
    stored
}

/// Whole days from the reference date to expiry. Negative once expired.
pub fn days_until_expiry(expires_on: CalendarDate, on: CalendarDate) -> i64 {
    on.days_until(expires_on)
}

/// Advisory warning when expiry is within [`EXPIRY_WARNING_WINDOW_DAYS`]
/// days and not yet past.
pub fn expiry_warning(expires_on: CalendarDate, on: CalendarDate) -> Option<ExpiryWarning> {
    let days_remaining = days_until_expiry(expires_on, on);
    if (0..EXPIRY_WARNING_WINDOW_DAYS).contains(&days_remaining) {
        Some(ExpiryWarning { days_remaining })
    } else {
        None
    }
}

/// A record with a stored status and a validity window.
///
/// Implementors supply the two stored facts; the derivations come for free
/// and re-derive on every call so a stale snapshot can never be returned.
pub trait Licensed {
    /// The status as written by approval/review actions.
    fn stored_status(&self) -> LicenseStatus;

    /// The day the record's validity window closes.
    fn expires_on(&self) -> CalendarDate;

    /// Effective status on the given reference date.
    fn effective_status(&self, on: CalendarDate) -> LicenseStatus {
        effective_status(self.stored_status(), self.expires_on(), on)
    }

    /// Whole days until this record expires, as of the reference date.
    fn days_until_expiry(&self, on: CalendarDate) -> i64 {
        days_until_expiry(self.expires_on(), on)
    }

    /// Advisory expiry warning, if the window is closing soon.
    fn expiry_warning(&self, on: CalendarDate) -> Option<ExpiryWarning> {
        expiry_warning(self.expires_on(), on)
    }
}
