//! Candidate repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Assign ids and keep accepted candidates for the process lifetime.
//! - Serve full listings and point lookups.
//!
//! # Invariants
//! - No two stored candidates share an id.
//! - `find_all` returns candidates in insertion order.
//! - Lookup misses are `None`, never an error.

use crate::model::candidate::{Candidate, CandidateId, NewCandidate};
use log::debug;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

/// Storage capability for candidate records.
///
/// A durable backend can implement this without touching the decoder.
pub trait CandidateRepository {
    fn save(&self, candidate: NewCandidate) -> Candidate;
    fn find_all(&self) -> Vec<Candidate>;
    fn find_by_id(&self, id: CandidateId) -> Option<Candidate>;
}

#[derive(Debug, Default)]
struct CandidateTable {
    by_id: HashMap<CandidateId, Candidate>,
    insertion_order: Vec<CandidateId>,
}

/// Volatile candidate store guarded by a single mutex.
#[derive(Debug, Default)]
pub struct InMemoryCandidateRepository {
    table: Mutex<CandidateTable>,
}

impl InMemoryCandidateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored candidates.
    pub fn len(&self) -> usize {
        self.lock().insertion_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, CandidateTable> {
        // Stored records are immutable, so a poisoned table is still consistent.
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CandidateRepository for InMemoryCandidateRepository {
    fn save(&self, candidate: NewCandidate) -> Candidate {
        let mut table = self.lock();

        let mut id = Uuid::new_v4();
        while id.is_nil() || table.by_id.contains_key(&id) {
            id = Uuid::new_v4();
        }

        let stored = Candidate::from_new(id, candidate);
        table.by_id.insert(id, stored.clone());
        table.insertion_order.push(id);

        debug!(
            "event=candidate_save module=repo status=ok candidate_id={} total={}",
            id,
            table.insertion_order.len()
        );
        stored
    }

    fn find_all(&self) -> Vec<Candidate> {
        let table = self.lock();
        table
            .insertion_order
            .iter()
            .filter_map(|id| table.by_id.get(id).cloned())
            .collect()
    }

    fn find_by_id(&self, id: CandidateId) -> Option<Candidate> {
        self.lock().by_id.get(&id).cloned()
    }
}

impl<R: CandidateRepository + ?Sized> CandidateRepository for &R {
    fn save(&self, candidate: NewCandidate) -> Candidate {
        (**self).save(candidate)
    }

    fn find_all(&self) -> Vec<Candidate> {
        (**self).find_all()
    }

    fn find_by_id(&self, id: CandidateId) -> Option<Candidate> {
        (**self).find_by_id(id)
    }
}
