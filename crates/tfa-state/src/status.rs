//! # Status Enums
//!
//! The stored status values for licensed records and fisher profiles.
//! Serialized lowercase to match the authority's existing record exports.

use serde::{Deserialize, Serialize};

/// The stored lifecycle status of a time-bound record (boat or permit).
///
/// This is what approval and review actions write. The status a reader
/// should display is the *effective* status derived in
/// [`crate::lifecycle`], which overlays date-driven expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseStatus {
    /// Application admitted, awaiting review.
    Pending,
    /// Approved and valid for operations.
    Active,
    /// Validity window has closed (terminal).
    Expired,
    /// Rejected by an external reviewer (terminal, permits only).
    Denied,
}

impl LicenseStatus {
    /// Whether this status is terminal — no transition leaves it.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Expired | Self::Denied)
    }

    /// Whether the record is currently valid for operations.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl std::fmt::Display for LicenseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "PENDING",
            Self::Active => "ACTIVE",
            Self::Expired => "EXPIRED",
            Self::Denied => "DENIED",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for LicenseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "active" => Ok(Self::Active),
            "expired" => Ok(Self::Expired),
            "denied" => Ok(Self::Denied),
            _ => Err(format!("invalid license status: {s}")),
        }
    }
}

/// The stored status of a fisher profile.
///
/// Profiles are not time-bound: there is no derived overlay, and no
/// terminal state — a suspended fisher can be reinstated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileStatus {
    /// Registration submitted, awaiting approval.
    Pending,
    /// Registered and in good standing.
    Active,
    /// Deactivated by the authority.
    Suspended,
}

impl ProfileStatus {
    /// Whether the fisher is in good standing.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl std::fmt::Display for ProfileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "PENDING",
            Self::Active => "ACTIVE",
            Self::Suspended => "SUSPENDED",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for ProfileStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "active" => Ok(Self::Active),
            "suspended" => Ok(Self::Suspended),
            _ => Err(format!("invalid profile status: {s}")),
        }
    }
}
