//! # Quota Ledger
//!
//! Consumption tracking against permit allowances. Usage recording is
//! all-or-nothing: a request that would push consumption past the
//! allowance is rejected whole, never clamped. Derivations (remaining,
//! percentage, near-limit) are pure and recomputed on every call.
//!
//! Percentage rounding matches the display convention the authority has
//! always used: half rounds up, so 187 of 500 reads as 37%.

use tfa_core::{AuthorityError, DomainEvent, PermitId, QuotaError};
use tfa_state::Permit;

use crate::store::Registry;

/// Usage above this percentage raises the near-limit advisory.
pub const NEAR_LIMIT_PERCENT: u32 = 80;

/// Remaining allowance on a permit. Never negative: the recording path
/// rejects anything that would overdraw.
pub fn remaining_quota(permit: &Permit) -> u32 {
    permit.quota_allowed.saturating_sub(permit.quota_used)
}

/// Consumed share of the allowance as a rounded percentage.
///
/// # Errors
///
/// A zero allowance has no meaningful percentage; the division guard
/// rejects it with `InvalidState`.
pub fn usage_percentage(permit: &Permit) -> Result<u32, QuotaError> {
    if permit.quota_allowed == 0 {
        return Err(QuotaError::InvalidState {
            reason: "quota allowance is zero".to_string(),
        });
    }
    let scaled = u64::from(permit.quota_used) * 100 + u64::from(permit.quota_allowed) / 2;
    Ok((scaled / u64::from(permit.quota_allowed)) as u32)
}

/// Near-limit advisory: true once usage crosses [`NEAR_LIMIT_PERCENT`].
pub fn near_limit(permit: &Permit) -> Result<bool, QuotaError> {
    Ok(usage_percentage(permit)? > NEAR_LIMIT_PERCENT)
}

impl Registry {
    /// Record catch against a permit's quota.
    ///
    /// All-or-nothing: on any rejection the stored counters are untouched.
    /// Returns the remaining quota after the recording. Emits
    /// `QuotaWarningRaised` on the call that crosses the near-limit
    /// threshold.
    pub fn record_usage(&mut self, id: PermitId, amount: u32) -> Result<u32, AuthorityError> {
        let permit = self.permit_mut(id)?;
        if amount == 0 {
            return Err(QuotaError::InvalidAmount { amount }.into());
        }
        let proposed = permit.quota_used.checked_add(amount);
        let proposed = match proposed {
            Some(p) if p <= permit.quota_allowed => p,
            _ => {
                tracing::warn!(
                    permit = %permit.id,
                    used = permit.quota_used,
                    requested = amount,
                    allowed = permit.quota_allowed,
                    "usage recording rejected: quota exceeded"
                );
                return Err(QuotaError::QuotaExceeded {
                    used: permit.quota_used,
                    requested: amount,
                    allowed: permit.quota_allowed,
                }
                .into());
            }
        };

        let was_near = near_limit(permit)?;
        permit.quota_used = proposed;
        let now_near = near_limit(permit)?;
        let percentage = usage_percentage(permit)?;
        let remaining = remaining_quota(permit);
        let snapshot = permit.clone();

        if now_near && !was_near {
            self.push_event(DomainEvent::QuotaWarningRaised {
                id: snapshot.id.to_string(),
                usage_percentage: percentage,
            });
        }
        self.mirror_put(&snapshot.id.to_string(), &snapshot)?;
        Ok(remaining)
    }

    /// Remaining allowance on a permit.
    pub fn remaining_quota(&self, id: PermitId) -> Result<u32, AuthorityError> {
        Ok(remaining_quota(self.permit(id)?))
    }

    /// Rounded usage percentage on a permit.
    pub fn usage_percentage(&self, id: PermitId) -> Result<u32, AuthorityError> {
        Ok(usage_percentage(self.permit(id)?)?)
    }

    /// Whether a permit has crossed the near-limit threshold.
    pub fn near_limit(&self, id: PermitId) -> Result<bool, AuthorityError> {
        Ok(near_limit(self.permit(id)?)?)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use tfa_core::CalendarDate;
    use tfa_state::LicenseStatus;

    fn fresh_permit(allowed: u32) -> Permit {
        Permit {
            id: PermitId::new(),
            season: "Fall 2024".to_string(),
            fish_type: "Crab".to_string(),
            area: "Coastal Zone A".to_string(),
            starts_on: CalendarDate::parse("2024-09-01").unwrap(),
            ends_on: CalendarDate::parse("2024-11-30").unwrap(),
            status: LicenseStatus::Active,
            applied_on: CalendarDate::parse("2024-08-15").unwrap(),
            quota_allowed: allowed,
            quota_used: 0,
        }
    }

    proptest! {
        /// quota_used never exceeds quota_allowed under any call sequence.
        #[test]
        fn used_never_exceeds_allowed(
            allowed in 1u32..10_000,
            amounts in prop::collection::vec(0u32..2_000, 0..40),
        ) {
            let mut registry = Registry::new();
            let id = registry.create_permit(fresh_permit(allowed)).unwrap().id;
            for amount in amounts {
                let _ = registry.record_usage(id, amount);
                let permit = registry.permit(id).unwrap();
                prop_assert!(permit.quota_used <= permit.quota_allowed);
            }
        }

        /// Sequential recordings compose: the sum of successful amounts
        /// equals the recorded usage.
        #[test]
        fn successful_amounts_sum_to_usage(
            allowed in 1u32..10_000,
            amounts in prop::collection::vec(1u32..2_000, 0..40),
        ) {
            let mut registry = Registry::new();
            let id = registry.create_permit(fresh_permit(allowed)).unwrap().id;
            let mut accepted: u64 = 0;
            for amount in amounts {
                if registry.record_usage(id, amount).is_ok() {
                    accepted += u64::from(amount);
                }
            }
            prop_assert_eq!(u64::from(registry.permit(id).unwrap().quota_used), accepted);
        }

        /// Remaining quota plus used always reconstructs the allowance.
        #[test]
        fn remaining_plus_used_is_allowed(
            allowed in 1u32..10_000,
            amounts in prop::collection::vec(1u32..2_000, 0..40),
        ) {
            let mut registry = Registry::new();
            let id = registry.create_permit(fresh_permit(allowed)).unwrap().id;
            for amount in amounts {
                let _ = registry.record_usage(id, amount);
            }
            let permit = registry.permit(id).unwrap();
            prop_assert_eq!(remaining_quota(permit) + permit.quota_used, permit.quota_allowed);
        }
    }
}
