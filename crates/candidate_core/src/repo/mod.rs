//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the storage capability used by the intake service.
//! - Keep storage details out of decode and service orchestration.

pub mod candidate_repo;
