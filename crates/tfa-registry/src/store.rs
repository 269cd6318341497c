//! # The Registry — Authoritative Entity Store
//!
//! One `Registry` instance owns every profile, boat, and permit for its
//! lifetime. Collections are `BTreeMap`s keyed by typed identifiers, plus a
//! side index from boat registration number (the natural key) to boat id
//! for duplicate detection.
//!
//! ## Mutation Discipline
//!
//! Updates are all-or-nothing: the mutation closure runs against a working
//! copy, the record's invariants are re-checked, and only then does the
//! copy replace the stored record. A closure that violates an invariant
//! leaves the registry untouched.
//!
//! When a storage backend is injected, every committed mutation is mirrored
//! through it after the in-memory commit. Reads never touch the backend.

use std::collections::BTreeMap;

use serde::Serialize;

use tfa_core::{
    AuthorityError, BoatId, CalendarDate, DomainEvent, EntityKind, FisherId, PermitId,
    RegistrationNumber, StateError,
};
use tfa_state::{Boat, FisherProfile, LicenseStatus, Licensed, Permit};

use crate::storage::StorageBackend;

/// The authoritative, in-memory collection of all records.
pub struct Registry {
    profiles: BTreeMap<FisherId, FisherProfile>,
    boats: BTreeMap<BoatId, Boat>,
    permits: BTreeMap<PermitId, Permit>,
    /// Natural-key index: registration number → boat id.
    registrations: BTreeMap<RegistrationNumber, BoatId>,
    /// Notification outbox, drained by the notification collaborator.
    outbox: Vec<DomainEvent>,
    backend: Option<Box<dyn StorageBackend>>,
}

impl Registry {
    /// Create an empty registry with no storage backend.
    pub fn new() -> Self {
        Self {
            profiles: BTreeMap::new(),
            boats: BTreeMap::new(),
            permits: BTreeMap::new(),
            registrations: BTreeMap::new(),
            outbox: Vec::new(),
            backend: None,
        }
    }

    /// Create an empty registry that mirrors mutations through `backend`.
    pub fn with_backend(backend: Box<dyn StorageBackend>) -> Self {
        Self {
            backend: Some(backend),
            ..Self::new()
        }
    }

    /// Rebuild a registry from persisted records.
    ///
    /// Keys carry the record kind as their prefix (`fisher:`, `boat:`,
    /// `permit:`). Records with an unknown prefix are logged and skipped so
    /// one stray row cannot brick a deployment's startup.
    pub fn hydrate(
        entries: impl IntoIterator<Item = (String, serde_json::Value)>,
        backend: Option<Box<dyn StorageBackend>>,
    ) -> Result<Self, AuthorityError> {
        let mut registry = Self {
            backend,
            ..Self::new()
        };
        for (key, value) in entries {
            match key.split(':').next() {
                Some("fisher") => {
                    let profile: FisherProfile = serde_json::from_value(value)?;
                    registry.insert_profile(profile)?;
                }
                Some("boat") => {
                    let boat: Boat = serde_json::from_value(value)?;
                    registry.insert_boat(boat)?;
                }
                Some("permit") => {
                    let permit: Permit = serde_json::from_value(value)?;
                    registry.insert_permit(permit)?;
                }
                _ => {
                    tracing::warn!(key, "skipping record with unknown key prefix");
                }
            }
        }
        Ok(registry)
    }

    // ─── Profiles ───────────────────────────────────────────────────

    /// Store a new fisher profile.
    pub fn create_profile(
        &mut self,
        profile: FisherProfile,
    ) -> Result<FisherProfile, AuthorityError> {
        profile.validate()?;
        self.insert_profile(profile.clone())?;
        self.mirror_put(&profile.id.to_string(), &profile)?;
        Ok(profile)
    }

    /// Fetch a profile by id.
    pub fn profile(&self, id: FisherId) -> Result<&FisherProfile, AuthorityError> {
        self.profiles
            .get(&id)
            .ok_or_else(|| AuthorityError::NotFound(id.to_string()))
    }

    /// All profiles, in id order.
    pub fn profiles(&self) -> impl Iterator<Item = &FisherProfile> {
        self.profiles.values()
    }

    /// Profiles matching a predicate.
    pub fn profiles_where<'a>(
        &'a self,
        predicate: impl Fn(&FisherProfile) -> bool + 'a,
    ) -> impl Iterator<Item = &'a FisherProfile> + 'a {
        self.profiles.values().filter(move |p| predicate(p))
    }

    /// Apply a mutation to a profile, all-or-nothing.
    pub fn update_profile(
        &mut self,
        id: FisherId,
        mutation: impl FnOnce(&mut FisherProfile) -> Result<(), StateError>,
    ) -> Result<FisherProfile, AuthorityError> {
        let current = self
            .profiles
            .get(&id)
            .ok_or_else(|| AuthorityError::NotFound(id.to_string()))?;
        let mut updated = current.clone();
        mutation(&mut updated)?;
        require_same_id(&updated.id.to_string(), &id.to_string())?;
        updated.validate()?;
        self.mirror_put(&id.to_string(), &updated)?;
        self.profiles.insert(id, updated.clone());
        Ok(updated)
    }

    /// Remove a profile.
    ///
    /// Dependent permits are not touched; callers clear them explicitly.
    pub fn remove_profile(&mut self, id: FisherId) -> Result<FisherProfile, AuthorityError> {
        let profile = self
            .profiles
            .remove(&id)
            .ok_or_else(|| AuthorityError::NotFound(id.to_string()))?;
        self.mirror_delete(&id.to_string())?;
        Ok(profile)
    }

    // ─── Boats ──────────────────────────────────────────────────────

    /// Store a new boat. The registration number is the natural key;
    /// a collision fails with `DuplicateKey` and stores nothing.
    pub fn create_boat(&mut self, boat: Boat) -> Result<Boat, AuthorityError> {
        boat.validate()?;
        self.insert_boat(boat.clone())?;
        self.mirror_put(&boat.id.to_string(), &boat)?;
        Ok(boat)
    }

    /// Fetch a boat by id.
    pub fn boat(&self, id: BoatId) -> Result<&Boat, AuthorityError> {
        self.boats
            .get(&id)
            .ok_or_else(|| AuthorityError::NotFound(id.to_string()))
    }

    /// Look a boat up by its registration number.
    pub fn boat_by_registration(
        &self,
        registration: &RegistrationNumber,
    ) -> Result<&Boat, AuthorityError> {
        let id = self
            .registrations
            .get(registration)
            .ok_or_else(|| AuthorityError::NotFound(registration.to_string()))?;
        self.boat(*id)
    }

    /// All boats, in id order.
    pub fn boats(&self) -> impl Iterator<Item = &Boat> {
        self.boats.values()
    }

    /// Boats matching a predicate.
    pub fn boats_where<'a>(
        &'a self,
        predicate: impl Fn(&Boat) -> bool + 'a,
    ) -> impl Iterator<Item = &'a Boat> + 'a {
        self.boats.values().filter(move |b| predicate(b))
    }

    /// Apply a mutation to a boat, all-or-nothing.
    ///
    /// A mutation may change the registration number; the natural-key index
    /// follows, and a collision with another boat's number is rejected.
    pub fn update_boat(
        &mut self,
        id: BoatId,
        mutation: impl FnOnce(&mut Boat) -> Result<(), StateError>,
    ) -> Result<Boat, AuthorityError> {
        let current = self
            .boats
            .get(&id)
            .ok_or_else(|| AuthorityError::NotFound(id.to_string()))?;
        let previous_registration = current.registration.clone();
        let mut updated = current.clone();
        mutation(&mut updated)?;
        require_same_id(&updated.id.to_string(), &id.to_string())?;
        updated.validate()?;
        if updated.registration != previous_registration {
            if self.registrations.contains_key(&updated.registration) {
                return Err(AuthorityError::DuplicateKey(updated.registration.to_string()));
            }
            self.registrations.remove(&previous_registration);
            self.registrations.insert(updated.registration.clone(), id);
        }
        self.mirror_put(&id.to_string(), &updated)?;
        self.boats.insert(id, updated.clone());
        Ok(updated)
    }

    /// Remove a boat and its natural-key index entry.
    ///
    /// Dependent permits are not touched; callers clear them explicitly.
    pub fn remove_boat(&mut self, id: BoatId) -> Result<Boat, AuthorityError> {
        let boat = self
            .boats
            .remove(&id)
            .ok_or_else(|| AuthorityError::NotFound(id.to_string()))?;
        self.registrations.remove(&boat.registration);
        self.mirror_delete(&id.to_string())?;
        Ok(boat)
    }

    // ─── Permits ────────────────────────────────────────────────────

    /// Store a new permit.
    pub fn create_permit(&mut self, permit: Permit) -> Result<Permit, AuthorityError> {
        permit.validate()?;
        self.insert_permit(permit.clone())?;
        self.mirror_put(&permit.id.to_string(), &permit)?;
        Ok(permit)
    }

    /// Fetch a permit by id.
    pub fn permit(&self, id: PermitId) -> Result<&Permit, AuthorityError> {
        self.permits
            .get(&id)
            .ok_or_else(|| AuthorityError::NotFound(id.to_string()))
    }

    /// All permits, in id order.
    pub fn permits(&self) -> impl Iterator<Item = &Permit> {
        self.permits.values()
    }

    /// Permits matching a predicate.
    pub fn permits_where<'a>(
        &'a self,
        predicate: impl Fn(&Permit) -> bool + 'a,
    ) -> impl Iterator<Item = &'a Permit> + 'a {
        self.permits.values().filter(move |p| predicate(p))
    }

    /// Apply a mutation to a permit, all-or-nothing.
    pub fn update_permit(
        &mut self,
        id: PermitId,
        mutation: impl FnOnce(&mut Permit) -> Result<(), StateError>,
    ) -> Result<Permit, AuthorityError> {
        let current = self
            .permits
            .get(&id)
            .ok_or_else(|| AuthorityError::NotFound(id.to_string()))?;
        let mut updated = current.clone();
        mutation(&mut updated)?;
        require_same_id(&updated.id.to_string(), &id.to_string())?;
        updated.validate()?;
        self.mirror_put(&id.to_string(), &updated)?;
        self.permits.insert(id, updated.clone());
        Ok(updated)
    }

    /// Remove a permit.
    pub fn remove_permit(&mut self, id: PermitId) -> Result<Permit, AuthorityError> {
        let permit = self
            .permits
            .remove(&id)
            .ok_or_else(|| AuthorityError::NotFound(id.to_string()))?;
        self.mirror_delete(&id.to_string())?;
        Ok(permit)
    }

    // ─── Expiry sweep ───────────────────────────────────────────────

    /// Queue an `EntityExpired` event for every boat and permit whose
    /// effective status on `on` is expired.
    ///
    /// Derivation only — stored statuses are not touched, and a record
    /// found expired on consecutive sweeps is reported each time. The
    /// notification collaborator deduplicates to its own taste.
    pub fn sweep_expired(&mut self, on: CalendarDate) -> usize {
        let mut events = Vec::new();
        for boat in self.boats.values() {
            if boat.effective_status(on) == LicenseStatus::Expired {
                events.push(DomainEvent::EntityExpired {
                    kind: EntityKind::Boat,
                    id: boat.id.to_string(),
                    expired_on: boat.expires_on(),
                });
            }
        }
        for permit in self.permits.values() {
            if permit.effective_status(on) == LicenseStatus::Expired {
                events.push(DomainEvent::EntityExpired {
                    kind: EntityKind::Permit,
                    id: permit.id.to_string(),
                    expired_on: permit.expires_on(),
                });
            }
        }
        let count = events.len();
        self.outbox.extend(events);
        count
    }

    // ─── Notification outbox ────────────────────────────────────────

    /// Hand all queued events to the notification collaborator.
    pub fn drain_events(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.outbox)
    }

    /// Queued events, without draining.
    pub fn pending_events(&self) -> &[DomainEvent] {
        &self.outbox
    }

    pub(crate) fn push_event(&mut self, event: DomainEvent) {
        self.outbox.push(event);
    }

    pub(crate) fn permit_mut(&mut self, id: PermitId) -> Result<&mut Permit, AuthorityError> {
        self.permits
            .get_mut(&id)
            .ok_or_else(|| AuthorityError::NotFound(id.to_string()))
    }

    // ─── Internals ──────────────────────────────────────────────────

    fn insert_profile(&mut self, profile: FisherProfile) -> Result<(), AuthorityError> {
        if self.profiles.contains_key(&profile.id) {
            return Err(AuthorityError::DuplicateKey(profile.id.to_string()));
        }
        self.profiles.insert(profile.id, profile);
        Ok(())
    }

    fn insert_boat(&mut self, boat: Boat) -> Result<(), AuthorityError> {
        if self.boats.contains_key(&boat.id) {
            return Err(AuthorityError::DuplicateKey(boat.id.to_string()));
        }
        if self.registrations.contains_key(&boat.registration) {
            return Err(AuthorityError::DuplicateKey(boat.registration.to_string()));
        }
        self.registrations.insert(boat.registration.clone(), boat.id);
        self.boats.insert(boat.id, boat);
        Ok(())
    }

    fn insert_permit(&mut self, permit: Permit) -> Result<(), AuthorityError> {
        if self.permits.contains_key(&permit.id) {
            return Err(AuthorityError::DuplicateKey(permit.id.to_string()));
        }
        self.permits.insert(permit.id, permit);
        Ok(())
    }

    pub(crate) fn mirror_put<T: Serialize>(
        &mut self,
        key: &str,
        record: &T,
    ) -> Result<(), AuthorityError> {
        if let Some(backend) = &mut self.backend {
            let value = serde_json::to_value(record)?;
            backend.put(key, &value)?;
        }
        Ok(())
    }

    fn mirror_delete(&mut self, key: &str) -> Result<(), AuthorityError> {
        if let Some(backend) = &mut self.backend {
            backend.delete(key)?;
        }
        Ok(())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("profiles", &self.profiles.len())
            .field("boats", &self.boats.len())
            .field("permits", &self.permits.len())
            .field("pending_events", &self.outbox.len())
            .finish_non_exhaustive()
    }
}

/// Identifiers are immutable; a mutation that rewrites one is rejected.
fn require_same_id(updated: &str, expected: &str) -> Result<(), AuthorityError> {
    if updated != expected {
        return Err(AuthorityError::State(StateError::InvariantViolated {
            record: "registry".to_string(),
            reason: format!("identifier {expected} cannot be rewritten to {updated}"),
        }));
    }
    Ok(())
}
