//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout the Fisheries Authority Stack.
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Validation errors name the violating field so the calling layer can
//!   re-collect exactly that input.
//! - State machine errors include the current state, attempted transition,
//!   and rejection reason.
//! - Every error kind is recoverable: the core never treats a rejection as
//!   fatal and never retries on the caller's behalf.

use thiserror::Error;

/// Top-level error type for the Fisheries Authority Stack.
#[derive(Error, Debug)]
pub enum AuthorityError {
    /// A submitted field failed validation. Field-qualified so the caller
    /// can re-collect the single bad input.
    #[error("validation failed for field '{field}': {reason}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// Why the field was rejected.
        reason: String,
    },

    /// Lookup by identifier found nothing.
    #[error("not found: {0}")]
    NotFound(String),

    /// A natural key (boat registration number) collided with an existing
    /// record.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// State machine transition rejected.
    #[error("state error: {0}")]
    State(#[from] StateError),

    /// Quota ledger operation rejected.
    #[error("quota error: {0}")]
    Quota(#[from] QuotaError),

    /// Season catalog configuration could not be loaded.
    #[error("catalog load error for '{path}': {reason}")]
    CatalogLoad {
        /// Path to the catalog file that failed to load.
        path: String,
        /// Reason the catalog could not be loaded.
        reason: String,
    },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error in lifecycle state transitions.
#[derive(Error, Debug)]
pub enum StateError {
    /// Attempted an invalid state transition.
    #[error("invalid transition from {from} to {to}: {reason}")]
    InvalidTransition {
        /// Current state name.
        from: String,
        /// Attempted target state name.
        to: String,
        /// Reason the transition was rejected.
        reason: String,
    },

    /// The record is in a terminal state and accepts no transition.
    #[error("record is in terminal state {state}")]
    TerminalState {
        /// The terminal state.
        state: String,
    },

    /// A mutation would commit a record that violates its own invariants
    /// (e.g. expiry before issuance). The mutation is discarded whole.
    #[error("invariant violated on {record}: {reason}")]
    InvariantViolated {
        /// The kind of record the mutation targeted.
        record: String,
        /// The invariant that would have been broken.
        reason: String,
    },
}

/// Error in quota ledger operations.
#[derive(Error, Debug)]
pub enum QuotaError {
    /// Usage amounts must be strictly positive.
    #[error("usage amount must be positive, got {amount}")]
    InvalidAmount {
        /// The rejected amount.
        amount: u32,
    },

    /// The requested usage would push consumption past the allowance.
    /// The operation is all-or-nothing; nothing was recorded.
    #[error("quota exceeded: {used} used + {requested} requested > {allowed} allowed")]
    QuotaExceeded {
        /// Quota consumed before the rejected call.
        used: u32,
        /// The amount that was requested.
        requested: u32,
        /// The permit's total allowance.
        allowed: u32,
    },

    /// Division guard: the operation is undefined for this ledger state.
    #[error("invalid quota state: {reason}")]
    InvalidState {
        /// Why the operation is undefined.
        reason: String,
    },
}
