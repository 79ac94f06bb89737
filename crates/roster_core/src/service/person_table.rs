//! Ordered people table with change notifications.
//!
//! # Responsibility
//! - Hold the people currently shown, in display order.
//! - Provide the insert, multi-row delete and restore use-cases.
//! - Tell subscribed views exactly what changed after each mutation.
//!
//! # Invariants
//! - Insertion order is display order.
//! - Multi-row deletes remove rows from the highest index down, so every
//!   index refers to the row's position before the delete started.
//! - Restore always rebuilds the rows from fresh seed records.
//! - Listeners run after the mutation is complete, in subscription order.

use crate::model::id::IdGenerator;
use crate::model::person::Person;
use crate::service::seed::seed_people;
use log::{debug, info, warn};
use std::collections::BTreeSet;

/// Mutation applied to the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableChange {
    /// One row appended at `index`.
    Inserted { index: usize },
    /// Rows removed; positions are the pre-delete indices, highest first.
    Removed { indices: Vec<usize> },
    /// All rows replaced; `len` is the new row count.
    Reset { len: usize },
}

/// Result of [`PersonTable::delete_indices`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// No row positions were supplied; nothing changed.
    NoSelection,
    /// Removed people, ordered by their former position (highest first).
    Deleted { removed: Vec<Person> },
}

/// Handle returned by [`PersonTable::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Callback receiving each change plus the rows after it was applied.
pub type ChangeListener = Box<dyn FnMut(&TableChange, &[Person])>;

/// People table backing the front end's grid.
pub struct PersonTable<G: IdGenerator> {
    ids: G,
    items: Vec<Person>,
    listeners: Vec<(SubscriptionId, ChangeListener)>,
    next_subscription: u64,
}

impl<G: IdGenerator> PersonTable<G> {
    /// Creates an empty table allocating IDs from `ids`.
    pub fn new(ids: G) -> Self {
        Self {
            ids,
            items: Vec::new(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Creates a table pre-populated with the seed rows.
    pub fn with_seed(ids: G) -> Self {
        let items = seed_people(&ids);
        Self {
            items,
            ..Self::new(ids)
        }
    }

    /// ID source used for records created by this table.
    pub fn ids(&self) -> &G {
        &self.ids
    }

    /// Current rows in display order.
    pub fn items(&self) -> &[Person] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Person> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Registers a listener for every subsequent change.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&TableChange, &[Person]) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` when `id` is not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Appends `person` as the last row and returns its index.
    pub fn insert(&mut self, person: Person) -> usize {
        let index = self.items.len();
        debug!(
            "event=row_insert module=table status=ok index={} person_id={}",
            index,
            person.id()
        );
        self.items.push(person);
        self.notify(TableChange::Inserted { index });
        index
    }

    /// Removes the rows at the given positions.
    ///
    /// Duplicate positions count once and positions past the end are
    /// skipped. An empty selection leaves the table untouched.
    pub fn delete_indices(&mut self, indices: &[usize]) -> DeleteOutcome {
        if indices.is_empty() {
            info!("event=rows_delete module=table status=skipped reason=no_selection");
            return DeleteOutcome::NoSelection;
        }

        let selected = indices.iter().copied().collect::<BTreeSet<_>>();
        let mut removed_indices = Vec::with_capacity(selected.len());
        let mut removed = Vec::with_capacity(selected.len());
        for index in selected.into_iter().rev() {
            if index >= self.items.len() {
                warn!(
                    "event=rows_delete module=table status=skipped reason=out_of_range index={} len={}",
                    index,
                    self.items.len()
                );
                continue;
            }
            removed.push(self.items.remove(index));
            removed_indices.push(index);
        }

        info!(
            "event=rows_delete module=table status=ok removed={} remaining={}",
            removed.len(),
            self.items.len()
        );
        if !removed_indices.is_empty() {
            self.notify(TableChange::Removed {
                indices: removed_indices,
            });
        }
        DeleteOutcome::Deleted { removed }
    }

    /// Clears every row and refills the table with fresh seed records.
    pub fn reset_to_seed(&mut self) {
        self.items.clear();
        self.items.extend(seed_people(&self.ids));
        info!(
            "event=rows_restore module=table status=ok len={}",
            self.items.len()
        );
        self.notify(TableChange::Reset {
            len: self.items.len(),
        });
    }

    fn notify(&mut self, change: TableChange) {
        for (_, listener) in &mut self.listeners {
            listener(&change, &self.items);
        }
    }
}
