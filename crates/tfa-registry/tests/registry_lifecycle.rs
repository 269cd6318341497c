//! End-to-end exercises of the registry: intake through approval, expiry
//! derivation, quota accounting, notification draining, and persistence
//! round-trips.

use tfa_core::{AuthorityError, CalendarDate, DomainEvent, EntityKind, QuotaError, SeasonCatalog};
use tfa_registry::{
    BoatApplication, FisherApplication, IntakeOffice, JsonFileStore, PermitApplication, Registry,
};
use tfa_state::{LicenseStatus, Licensed, ProfileStatus};

fn date(s: &str) -> CalendarDate {
    CalendarDate::parse(s).unwrap()
}

fn office() -> IntakeOffice {
    IntakeOffice::new(SeasonCatalog::builtin())
}

fn boat_application(registration: &str) -> BoatApplication {
    BoatApplication {
        name: "Sea Wanderer".to_string(),
        registration: registration.to_string(),
        vessel_type: "Commercial Fishing Vessel".to_string(),
        length_ft: 42,
        home_port: "Port Tampa".to_string(),
        insurance_expires_on: "2025-11-15".to_string(),
    }
}

fn permit_application(quota: i64) -> PermitApplication {
    PermitApplication {
        season: "Fall 2025".to_string(),
        fish_type: "Crab".to_string(),
        area: "Coastal Zone A".to_string(),
        quota_requested: quota,
    }
}

fn fisher_application() -> FisherApplication {
    FisherApplication {
        name: "Maria Santos".to_string(),
        date_of_birth: "1985-03-15".to_string(),
        email: "maria@example.com".to_string(),
        phone: "555-0101".to_string(),
        address: "12 Harbor Road".to_string(),
        emergency_contact_name: "Joao Santos".to_string(),
        emergency_contact_phone: "555-0102".to_string(),
    }
}

#[test]
fn test_fisher_registration_through_id_renewal_warning() {
    let mut registry = Registry::new();
    let profile = office()
        .submit_fisher(&mut registry, fisher_application(), date("2024-08-15"))
        .unwrap();
    assert_eq!(profile.status, ProfileStatus::Pending);

    let approved = registry
        .update_profile(profile.id, |p| p.approve(date("2024-08-20")))
        .unwrap();
    let license = approved.license.unwrap();
    assert_eq!(license.expires_on, date("2025-08-20"));

    // Twenty days before expiry the ID card shows the renewal countdown.
    let warning = tfa_state::expiry_warning(license.expires_on, date("2025-07-31")).unwrap();
    assert_eq!(warning.days_remaining, 20);
}

#[test]
fn test_duplicate_boat_registration_keeps_exactly_one_record() {
    let mut registry = Registry::new();
    let office = office();
    office
        .submit_boat(&mut registry, boat_application("FL-9876-AB"), date("2024-08-15"))
        .unwrap();
    let result = office.submit_boat(
        &mut registry,
        boat_application("FL-9876-AB"),
        date("2024-08-16"),
    );
    assert!(matches!(result, Err(AuthorityError::DuplicateKey(_))));
    assert_eq!(registry.boats().count(), 1);
}

#[test]
fn test_boat_approval_and_time_driven_expiry() {
    let mut registry = Registry::new();
    let boat = office()
        .submit_boat(&mut registry, boat_application("FL-9876-AB"), date("2024-08-15"))
        .unwrap();

    let approved = registry
        .update_boat(boat.id, |b| b.approve(date("2024-08-20")))
        .unwrap();
    assert_eq!(approved.status, LicenseStatus::Active);

    // License runs application date + one year; the day itself is expired.
    let stored = registry.boat(boat.id).unwrap();
    assert_eq!(stored.effective_status(date("2025-08-14")), LicenseStatus::Active);
    assert_eq!(stored.effective_status(date("2025-08-15")), LicenseStatus::Expired);
    // Stored status is never rewritten by the derivation.
    assert_eq!(stored.status, LicenseStatus::Active);
}

#[test]
fn test_pending_permit_expires_when_review_never_happens() {
    let mut registry = Registry::new();
    let permit = office()
        .submit_permit(&mut registry, permit_application(300), date("2025-08-15"))
        .unwrap();

    // Fall 2025 closes 2025-11-30; nobody ever approved it.
    let stored = registry.permit(permit.id).unwrap();
    assert_eq!(stored.effective_status(date("2025-12-15")), LicenseStatus::Expired);

    // And a reviewer can no longer act on it.
    assert!(registry
        .update_permit(permit.id, |p| p.approve(date("2025-12-15")))
        .is_err());
    assert!(registry
        .update_permit(permit.id, |p| p.deny(date("2025-12-15")))
        .is_err());
}

#[test]
fn test_quota_worked_example_from_the_fall_season() {
    let mut registry = Registry::new();
    let permit = office()
        .submit_permit(&mut registry, permit_application(500), date("2025-08-15"))
        .unwrap();
    registry
        .update_permit(permit.id, |p| p.approve(date("2025-08-20")))
        .unwrap();

    registry.record_usage(permit.id, 187).unwrap();
    assert_eq!(registry.usage_percentage(permit.id).unwrap(), 37);
    assert!(!registry.near_limit(permit.id).unwrap());
    assert_eq!(registry.remaining_quota(permit.id).unwrap(), 313);

    // 187 + 350 > 500: rejected whole, counters untouched.
    let result = registry.record_usage(permit.id, 350);
    assert!(matches!(
        result,
        Err(AuthorityError::Quota(QuotaError::QuotaExceeded { .. }))
    ));
    assert_eq!(registry.permit(permit.id).unwrap().quota_used, 187);
}

#[test]
fn test_sweep_and_notification_drain() {
    let mut registry = Registry::new();
    let office = office();
    let permit = office
        .submit_permit(&mut registry, permit_application(500), date("2025-08-15"))
        .unwrap();
    registry
        .update_permit(permit.id, |p| p.approve(date("2025-08-20")))
        .unwrap();

    // Intake queued the submission event.
    let events = registry.drain_events();
    assert!(matches!(
        &events[0],
        DomainEvent::ApplicationSubmitted {
            kind: EntityKind::Permit,
            ..
        }
    ));

    // Crossing the near-limit line queues the advisory.
    registry.record_usage(permit.id, 450).unwrap();
    let events = registry.drain_events();
    assert_eq!(events.len(), 1);
    assert!(matches!(&events[0], DomainEvent::QuotaWarningRaised { .. }));

    // Past the season end the sweep reports the expiry.
    assert_eq!(registry.sweep_expired(date("2025-12-15")), 1);
    let events = registry.drain_events();
    assert!(matches!(
        &events[0],
        DomainEvent::EntityExpired {
            kind: EntityKind::Permit,
            ..
        }
    ));
}

#[test]
fn test_registry_survives_a_persistence_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("registry.json");

    let boat_id;
    let permit_id;
    {
        let store = JsonFileStore::open(&path).unwrap();
        let mut registry = Registry::with_backend(Box::new(store));
        let office = office();
        boat_id = office
            .submit_boat(&mut registry, boat_application("FL-9876-AB"), date("2025-08-15"))
            .unwrap()
            .id;
        permit_id = office
            .submit_permit(&mut registry, permit_application(500), date("2025-08-15"))
            .unwrap()
            .id;
        registry
            .update_permit(permit_id, |p| p.approve(date("2025-08-20")))
            .unwrap();
        registry.record_usage(permit_id, 187).unwrap();
    }

    let store = JsonFileStore::open(&path).unwrap();
    let entries: Vec<_> = store
        .entries()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    let registry = Registry::hydrate(entries, Some(Box::new(store))).unwrap();

    assert_eq!(registry.boat(boat_id).unwrap().name, "Sea Wanderer");
    let permit = registry.permit(permit_id).unwrap();
    assert_eq!(permit.status, LicenseStatus::Active);
    assert_eq!(permit.quota_used, 187);
}
