//! # Application Intake
//!
//! Validates raw applications and admits them into the registry with
//! system-assigned fields. Validation is first-fail: the first rule a
//! submission breaks comes back as a field-qualified validation error and
//! nothing is stored — the presentation layer re-collects that one field
//! and resubmits.
//!
//! Admission assigns the identifier, sets status to pending, stamps the
//! application date with the caller's reference date, and zeroes quota
//! consumption. Everything else the applicant supplied passes through
//! unchanged.

use tfa_core::{
    AuthorityError, BoatId, CalendarDate, DomainEvent, EntityKind, FisherId, PermitId,
    RegistrationNumber, SeasonCatalog,
};
use tfa_state::{
    Boat, ContactInfo, EmergencyContact, FisherProfile, License, LicenseStatus, Permit,
    ProfileStatus,
};

use crate::store::Registry;

/// A fisher registration as submitted, before validation.
#[derive(Debug, Clone, Default)]
pub struct FisherApplication {
    /// Full legal name.
    pub name: String,
    /// Date of birth, ISO `YYYY-MM-DD`.
    pub date_of_birth: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Residential address.
    pub address: String,
    /// Emergency contact name.
    pub emergency_contact_name: String,
    /// Emergency contact phone.
    pub emergency_contact_phone: String,
}

/// A boat registration as submitted, before validation.
#[derive(Debug, Clone, Default)]
pub struct BoatApplication {
    /// Vessel name.
    pub name: String,
    /// State-issued registration number, e.g. `FL-9876-AB`.
    pub registration: String,
    /// Vessel type.
    pub vessel_type: String,
    /// Hull length in feet. Signed so a nonsense negative submission is
    /// caught by validation rather than an integer cast.
    pub length_ft: i64,
    /// Home port.
    pub home_port: String,
    /// Insurance expiry date, ISO `YYYY-MM-DD`.
    pub insurance_expires_on: String,
}

/// A seasonal permit application as submitted, before validation.
#[derive(Debug, Clone, Default)]
pub struct PermitApplication {
    /// Season label from the catalog, e.g. `Fall 2025`.
    pub season: String,
    /// Species applied for.
    pub fish_type: String,
    /// Fishing area applied for.
    pub area: String,
    /// Requested catch allowance in pounds.
    pub quota_requested: i64,
}

/// The application processor. Holds the configured season catalog and
/// admits validated applications into a registry.
#[derive(Debug, Clone)]
pub struct IntakeOffice {
    catalog: SeasonCatalog,
}

impl IntakeOffice {
    /// Create an intake office over the given catalog.
    pub fn new(catalog: SeasonCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog this office validates against.
    pub fn catalog(&self) -> &SeasonCatalog {
        &self.catalog
    }

    /// Validate and admit a fisher registration.
    pub fn submit_fisher(
        &self,
        registry: &mut Registry,
        application: FisherApplication,
        on: CalendarDate,
    ) -> Result<FisherProfile, AuthorityError> {
        let name = require_nonempty("name", &application.name)?;
        let date_of_birth = parse_date_field("date_of_birth", &application.date_of_birth)?;
        if date_of_birth >= on {
            return Err(AuthorityError::Validation {
                field: "date_of_birth".to_string(),
                reason: format!("{date_of_birth} is not in the past"),
            });
        }
        let email = require_nonempty("email", &application.email)?;
        if !looks_like_email(&email) {
            return Err(AuthorityError::Validation {
                field: "email".to_string(),
                reason: format!("{email:?} is not a plausible email address"),
            });
        }
        let phone = require_nonempty("phone", &application.phone)?;
        let address = require_nonempty("address", &application.address)?;
        let emergency_name = require_nonempty(
            "emergency_contact_name",
            &application.emergency_contact_name,
        )?;
        let emergency_phone = require_nonempty(
            "emergency_contact_phone",
            &application.emergency_contact_phone,
        )?;

        let profile = FisherProfile {
            id: FisherId::new(),
            name,
            date_of_birth,
            registered_on: on,
            contact: ContactInfo {
                email,
                phone,
                address,
            },
            emergency_contact: EmergencyContact {
                name: emergency_name,
                phone: emergency_phone,
            },
            status: ProfileStatus::Pending,
            license: None,
        };
        let stored = registry.create_profile(profile)?;
        registry.push_event(DomainEvent::ApplicationSubmitted {
            kind: EntityKind::Fisher,
            id: stored.id.to_string(),
            submitted_on: on,
        });
        tracing::info!(fisher = %stored.id, "fisher registration admitted");
        Ok(stored)
    }

    /// Validate and admit a boat registration.
    ///
    /// The license is issued for the standard term starting on the
    /// application date; approval later flips the status without moving
    /// the dates.
    pub fn submit_boat(
        &self,
        registry: &mut Registry,
        application: BoatApplication,
        on: CalendarDate,
    ) -> Result<Boat, AuthorityError> {
        let name = require_nonempty("name", &application.name)?;
        let registration = RegistrationNumber::parse(&application.registration)?;
        let vessel_type = require_nonempty("vessel_type", &application.vessel_type)?;
        if application.length_ft <= 0 {
            return Err(AuthorityError::Validation {
                field: "length".to_string(),
                reason: format!("hull length must be positive, got {}", application.length_ft),
            });
        }
        let length_ft = u32::try_from(application.length_ft).map_err(|_| {
            AuthorityError::Validation {
                field: "length".to_string(),
                reason: format!("hull length {} is out of range", application.length_ft),
            }
        })?;
        let home_port = require_nonempty("home_port", &application.home_port)?;
        let insurance_expires_on =
            parse_date_field("insurance_expires_on", &application.insurance_expires_on)?;

        let boat = Boat {
            id: BoatId::new(),
            name,
            registration,
            vessel_type,
            length_ft,
            home_port,
            license: License::standard_term(on),
            insurance_expires_on,
            status: LicenseStatus::Pending,
        };
        let stored = registry.create_boat(boat)?;
        registry.push_event(DomainEvent::ApplicationSubmitted {
            kind: EntityKind::Boat,
            id: stored.id.to_string(),
            submitted_on: on,
        });
        tracing::info!(boat = %stored.id, registration = %stored.registration, "boat registration admitted");
        Ok(stored)
    }

    /// Validate and admit a seasonal permit application.
    ///
    /// The permit window comes from the catalog's season entry, so the
    /// end-after-start invariant holds by construction.
    pub fn submit_permit(
        &self,
        registry: &mut Registry,
        application: PermitApplication,
        on: CalendarDate,
    ) -> Result<Permit, AuthorityError> {
        let season = self.catalog.season(&application.season).ok_or_else(|| {
            AuthorityError::Validation {
                field: "season".to_string(),
                reason: format!("{:?} is not an open season", application.season),
            }
        })?;
        if !self.catalog.allows_fish_type(&application.fish_type) {
            return Err(AuthorityError::Validation {
                field: "fish_type".to_string(),
                reason: format!("{:?} is not a permitted species", application.fish_type),
            });
        }
        if !self.catalog.allows_area(&application.area) {
            return Err(AuthorityError::Validation {
                field: "area".to_string(),
                reason: format!("{:?} is not a permitted fishing area", application.area),
            });
        }
        if application.quota_requested <= 0 {
            return Err(AuthorityError::Validation {
                field: "quota_requested".to_string(),
                reason: format!(
                    "requested quota must be positive, got {}",
                    application.quota_requested
                ),
            });
        }
        let quota_allowed = u32::try_from(application.quota_requested).map_err(|_| {
            AuthorityError::Validation {
                field: "quota_requested".to_string(),
                reason: format!(
                    "requested quota {} is out of range",
                    application.quota_requested
                ),
            }
        })?;

        let permit = Permit {
            id: PermitId::new(),
            season: season.label.clone(),
            fish_type: application.fish_type,
            area: application.area,
            starts_on: season.opens_on,
            ends_on: season.closes_on,
            status: LicenseStatus::Pending,
            applied_on: on,
            quota_allowed,
            quota_used: 0,
        };
        let stored = registry.create_permit(permit)?;
        registry.push_event(DomainEvent::ApplicationSubmitted {
            kind: EntityKind::Permit,
            id: stored.id.to_string(),
            submitted_on: on,
        });
        tracing::info!(permit = %stored.id, season = %stored.season, "permit application admitted");
        Ok(stored)
    }
}

fn require_nonempty(field: &str, value: &str) -> Result<String, AuthorityError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AuthorityError::Validation {
            field: field.to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Re-qualify a date parse failure with the submitting field's name.
fn parse_date_field(field: &str, value: &str) -> Result<CalendarDate, AuthorityError> {
    CalendarDate::parse(value).map_err(|e| match e {
        AuthorityError::Validation { reason, .. } => AuthorityError::Validation {
            field: field.to_string(),
            reason,
        },
        other => other,
    })
}

/// Minimal shape check: one `@` with something on both sides.
fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}
