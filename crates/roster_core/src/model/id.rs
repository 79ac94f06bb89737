//! Person identity allocation.
//!
//! # Responsibility
//! - Define the capability used to hand out person IDs.
//! - Provide the atomic sequence used by the running application.
//!
//! # Invariants
//! - An allocated ID is never handed out again by the same generator.
//! - IDs are strictly increasing per generator, but not guaranteed
//!   contiguous for the records a caller ends up keeping.
//! - A sequence never wraps; `u64::MAX` itself is never allocated.

use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Stable identifier assigned to a person at creation time.
pub type PersonId = u64;

/// First ID handed out by a fresh sequence.
pub const FIRST_PERSON_ID: PersonId = 1;

static PROCESS_IDS: Lazy<SequenceIdGenerator> = Lazy::new(SequenceIdGenerator::new);

/// Capability that allocates person IDs.
///
/// Injected wherever records are created so callers (and tests) control
/// the ID sequence instead of relying on a hidden counter.
pub trait IdGenerator {
    /// Allocates the next unused ID.
    fn next_id(&self) -> PersonId;
}

/// Thread-safe monotonically increasing ID sequence.
#[derive(Debug)]
pub struct SequenceIdGenerator {
    next: AtomicU64,
}

impl SequenceIdGenerator {
    /// Creates a sequence starting at [`FIRST_PERSON_ID`].
    pub fn new() -> Self {
        Self::starting_at(FIRST_PERSON_ID)
    }

    /// Creates a sequence whose first allocated ID is `first`.
    pub fn starting_at(first: PersonId) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Returns the ID the next allocation will hand out.
    pub fn peek(&self) -> PersonId {
        self.next.load(Ordering::SeqCst)
    }

    /// Allocates the next ID, or `None` once the sequence reached `u64::MAX`.
    pub fn try_next_id(&self) -> Option<PersonId> {
        self.next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |next| next.checked_add(1))
            .ok()
    }
}

impl Default for SequenceIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequenceIdGenerator {
    /// # Panics
    /// Panics once the sequence is exhausted instead of reusing an ID.
    fn next_id(&self) -> PersonId {
        self.try_next_id()
            .expect("person id sequence exhausted; ids are never reused")
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for &G {
    fn next_id(&self) -> PersonId {
        (**self).next_id()
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for Arc<G> {
    fn next_id(&self) -> PersonId {
        (**self).next_id()
    }
}

/// Returns the process-wide sequence used by the application front end.
///
/// Library code never reaches for this implicitly; it is handed over
/// explicitly at the composition root.
pub fn process_ids() -> &'static SequenceIdGenerator {
    &PROCESS_IDS
}

#[cfg(test)]
mod tests {
    use super::{IdGenerator, SequenceIdGenerator, FIRST_PERSON_ID};
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn fresh_sequence_starts_at_first_id() {
        let ids = SequenceIdGenerator::new();
        assert_eq!(ids.next_id(), FIRST_PERSON_ID);
        assert_eq!(ids.next_id(), FIRST_PERSON_ID + 1);
        assert_eq!(ids.peek(), FIRST_PERSON_ID + 2);
    }

    #[test]
    fn exhausted_sequence_stops_instead_of_wrapping() {
        let ids = SequenceIdGenerator::starting_at(u64::MAX - 1);
        assert_eq!(ids.try_next_id(), Some(u64::MAX - 1));
        assert_eq!(ids.try_next_id(), None);
        assert_eq!(ids.try_next_id(), None);
        assert_eq!(ids.peek(), u64::MAX);
    }

    #[test]
    #[should_panic(expected = "person id sequence exhausted")]
    fn next_id_refuses_to_wrap_around() {
        let ids = SequenceIdGenerator::starting_at(u64::MAX);
        ids.next_id();
    }

    #[test]
    fn borrowed_and_shared_generators_advance_the_same_sequence() {
        let ids = Arc::new(SequenceIdGenerator::starting_at(40));
        let shared = Arc::clone(&ids);
        let borrowed = &*ids;

        assert_eq!(shared.next_id(), 40);
        assert_eq!(borrowed.next_id(), 41);
        assert_eq!(ids.peek(), 42);
    }

    #[test]
    fn concurrent_allocation_never_repeats_an_id() {
        let ids = Arc::new(SequenceIdGenerator::new());
        let handles = (0..4)
            .map(|_| {
                let ids = Arc::clone(&ids);
                thread::spawn(move || (0..250).map(|_| ids.next_id()).collect::<Vec<_>>())
            })
            .collect::<Vec<_>>();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().expect("allocation thread should not panic") {
                assert!(seen.insert(id), "id {id} was allocated twice");
            }
        }
        assert_eq!(seen.len(), 1000);
    }
}
