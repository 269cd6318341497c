//! # tfa-core — Foundational Types for the Fisheries Authority Stack
//!
//! This crate is the bedrock of the Tidewater Fisheries Authority Stack. It
//! defines the type-system primitives shared by every other crate in the
//! workspace; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `FisherId`, `BoatId`,
//!    `PermitId`, `RegistrationNumber` — all newtypes. No bare strings or
//!    bare UUIDs for identifiers.
//!
//! 2. **Calendar dates, not instants.** Licensing runs on civil dates
//!    (issuance, expiry, season windows). The `CalendarDate` type enforces
//!    ISO `YYYY-MM-DD` at every parse boundary and carries no time-of-day
//!    component that could smuggle in timezone ambiguity.
//!
//! 3. **Injected reference dates.** Nothing in this workspace reads the
//!    system clock inside domain logic. Every derivation takes the reference
//!    date as a parameter, so "what was the status on June 1" is an ordinary
//!    function call.
//!
//! 4. **Plain-data boundary payloads.** `DomainEvent` carries notification
//!    facts as serializable data. User-facing text is the collaborator's job.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `tfa-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod catalog;
pub mod error;
pub mod events;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use catalog::{Season, SeasonCatalog};
pub use error::{AuthorityError, QuotaError, StateError};
pub use events::{DomainEvent, EntityKind};
pub use identity::{BoatId, FisherId, PermitId, RegistrationNumber};
pub use temporal::CalendarDate;
