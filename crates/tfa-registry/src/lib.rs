//! # tfa-registry — Entity Store, Quota Ledger, and Intake
//!
//! The authoritative home of every record in the Fisheries Authority Stack.
//!
//! - **Store** (`store.rs`): in-memory collections keyed by typed
//!   identifiers, with natural-key duplicate detection for boat
//!   registration numbers, all-or-nothing updates, the expiry sweep, and
//!   the notification outbox.
//!
//! - **Quota ledger** (`quota.rs`): consumption tracking against permit
//!   allowances. All-or-nothing usage recording, remaining/percentage
//!   derivations, and the near-limit advisory.
//!
//! - **Intake** (`intake.rs`): validates raw applications against the
//!   season catalog and admits them with system-assigned fields.
//!
//! - **Storage** (`storage.rs`): the get/put/delete-by-id contract a
//!   persistence collaborator implements, plus the JSON-file reference
//!   backend.
//!
//! ## Design
//!
//! One `Registry` instance owns all records for its lifetime and is passed
//! by reference to everything else. Derivations (effective status, quota
//! percentages, warnings) borrow records and recompute on every call —
//! nothing derived is ever written back.

pub mod intake;
pub mod quota;
pub mod storage;
pub mod store;

// ─── Store re-exports ───────────────────────────────────────────────

pub use store::Registry;

// ─── Quota re-exports ───────────────────────────────────────────────

pub use quota::{near_limit, remaining_quota, usage_percentage, NEAR_LIMIT_PERCENT};

// ─── Intake re-exports ──────────────────────────────────────────────

pub use intake::{BoatApplication, FisherApplication, IntakeOffice, PermitApplication};

// ─── Storage re-exports ─────────────────────────────────────────────

pub use storage::{JsonFileStore, MemoryStore, StorageBackend};
