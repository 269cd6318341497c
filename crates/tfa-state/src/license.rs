//! # Embedded License Document
//!
//! The license attached to a boat or an approved fisher profile: an
//! issuance date and an expiry date. The expiry must fall strictly after
//! the issuance — a license that expires the day it is issued (or earlier)
//! is rejected at construction, so an ill-ordered pair never enters the
//! registry through the front door. Mutations re-check the same invariant.

use serde::{Deserialize, Serialize};

use tfa_core::{CalendarDate, StateError};

/// How long a standard license runs from issuance.
pub const LICENSE_TERM_YEARS: u32 = 1;

/// An issued license with its validity window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    /// The day the license was issued.
    pub issued_on: CalendarDate,
    /// The day the license expires. Strictly after `issued_on`.
    pub expires_on: CalendarDate,
}

impl License {
    /// Construct a license, enforcing that expiry falls strictly after
    /// issuance.
    pub fn new(issued_on: CalendarDate, expires_on: CalendarDate) -> Result<Self, StateError> {
        let license = Self {
            issued_on,
            expires_on,
        };
        license.validate()?;
        Ok(license)
    }

    /// Issue a license for the standard one-year term.
    pub fn standard_term(issued_on: CalendarDate) -> Self {
        Self {
            issued_on,
            expires_on: issued_on.plus_years(LICENSE_TERM_YEARS),
        }
    }

    /// Re-check the date-ordering invariant after a mutation.
    pub fn validate(&self) -> Result<(), StateError> {
        if self.expires_on <= self.issued_on {
            return Err(StateError::InvariantViolated {
                record: "license".to_string(),
                reason: format!(
                    "expiry {} is not after issuance {}",
                    self.expires_on, self.issued_on
                ),
            });
        }
        Ok(())
    }
}
