//! # Domain Identity Newtypes
//!
//! Newtype wrappers for all domain identifiers in the Fisheries Authority
//! Stack. These prevent accidental identifier confusion — you cannot pass a
//! `BoatId` where a `PermitId` is expected.
//!
//! The boat registration number is the one natural key in the domain: it is
//! issued outside the system, painted on the hull, and used for duplicate
//! detection at registration time. Its constructor validates the hull
//! marking format so a malformed number never enters the registry.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AuthorityError;

/// Unique identifier for a registered fisher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FisherId(pub Uuid);

/// Unique identifier for a registered boat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BoatId(pub Uuid);

/// Unique identifier for a seasonal fishing permit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PermitId(pub Uuid);

impl FisherId {
    /// Generate a new random fisher identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl BoatId {
    /// Generate a new random boat identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl PermitId {
    /// Generate a new random permit identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for FisherId {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for BoatId {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for PermitId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for FisherId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "fisher:{}", self.0)
    }
}

impl std::fmt::Display for BoatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "boat:{}", self.0)
    }
}

impl std::fmt::Display for PermitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "permit:{}", self.0)
    }
}

/// A state-issued boat registration number, e.g. `FL-9876-AB`.
///
/// Format: two uppercase letters (issuing state), four digits, two uppercase
/// letters, dash-separated. This is the domain's natural key — creating a
/// boat with a registration number already on file is a duplicate-key error.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RegistrationNumber(String);

impl RegistrationNumber {
    /// Validate and construct a registration number.
    ///
    /// Lowercase input is normalized to uppercase before validation, since
    /// hull markings are case-insensitive in practice.
    ///
    /// # Errors
    ///
    /// Returns a field-qualified validation error when the input does not
    /// match the `AA-9999-AA` hull marking format.
    pub fn parse(s: &str) -> Result<Self, AuthorityError> {
        let normalized = s.trim().to_ascii_uppercase();
        let mut segments = normalized.split('-');

        let state = segments.next().unwrap_or("");
        let serial = segments.next().unwrap_or("");
        let suffix = segments.next().unwrap_or("");

        let well_formed = segments.next().is_none()
            && state.len() == 2
            && state.chars().all(|c| c.is_ascii_uppercase())
            && serial.len() == 4
            && serial.chars().all(|c| c.is_ascii_digit())
            && suffix.len() == 2
            && suffix.chars().all(|c| c.is_ascii_uppercase());

        if !well_formed {
            return Err(AuthorityError::Validation {
                field: "registration".to_string(),
                reason: format!("{s:?} does not match the AA-9999-AA hull marking format"),
            });
        }

        Ok(Self(normalized))
    }

    /// The normalized registration string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RegistrationNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
