//! # tfa-state — Entity Records and Lifecycle State Machines
//!
//! Implements the licensed records of the Fisheries Authority Stack and the
//! rules that move them through time.
//!
//! ## State Machines
//!
//! - **License status** (`status.rs`): the shared
//!   `PENDING → ACTIVE → EXPIRED` ladder with the permit-only `DENIED`
//!   branch. `EXPIRED` and `DENIED` are terminal.
//!
//! - **Fisher profile** (`profile.rs`): `PENDING → ACTIVE → SUSPENDED` with
//!   reinstatement. Profiles are never deleted, only suspended.
//!
//! - **Boat** (`boat.rs`): vessel registration with an embedded license and
//!   insurance expiry tracking.
//!
//! - **Permit** (`permit.rs`): seasonal fishing permit with quota allowance
//!   fields and an explicit reviewer denial action.
//!
//! ## Design
//!
//! Stored status and effective status are different things. Approval and
//! denial are external actions that mutate stored status through guarded
//! transition methods; expiry is never written anywhere. The lifecycle
//! module (`lifecycle.rs`) derives the effective status from stored status,
//! the record's expiry date, and a caller-supplied reference date — the one
//! place in the workspace where a date comparison decides a status.

pub mod boat;
pub mod license;
pub mod lifecycle;
pub mod permit;
pub mod profile;
pub mod status;

// ─── Status re-exports ──────────────────────────────────────────────

pub use status::{LicenseStatus, ProfileStatus};

// ─── Lifecycle re-exports ───────────────────────────────────────────

pub use lifecycle::{
    days_until_expiry, effective_status, expiry_warning, ExpiryWarning, Licensed,
    EXPIRY_WARNING_WINDOW_DAYS,
};

// ─── Record re-exports ──────────────────────────────────────────────

pub use boat::Boat;
pub use license::License;
pub use permit::Permit;
pub use profile::{ContactInfo, EmergencyContact, FisherProfile};
