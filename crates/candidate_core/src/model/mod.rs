//! Candidate domain model.
//!
//! # Responsibility
//! - Define canonical data structures used by decode, store and service layers.
//!
//! # Invariants
//! - Every persisted candidate is identified by a store-generated `CandidateId`.
//! - Records are append-only; there is no update or delete path.

pub mod candidate;
