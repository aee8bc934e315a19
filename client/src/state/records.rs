//! Page-local record collections (badges, criteria, companies).
//!
//! DESIGN
//! ======
//! Pages hold their list in one `RwSignal<RecordList<T>>`. Saving a record
//! with id `0` treats it as new and assigns the next free id; any other id
//! replaces the existing entry in place so list order is stable across edits.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use crate::net::types::{Badge, Company, Criterion};

/// An entity addressable by a numeric id.
pub trait Record: Clone {
    fn id(&self) -> u32;
    fn set_id(&mut self, id: u32);
}

macro_rules! impl_record {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Record for $ty {
                fn id(&self) -> u32 {
                    self.id
                }

                fn set_id(&mut self, id: u32) {
                    self.id = id;
                }
            }
        )*
    };
}

impl_record!(Badge, Criterion, Company);

#[derive(Clone, Debug, PartialEq)]
pub struct RecordList<T> {
    pub items: Vec<T>,
    pub loading: bool,
}

impl<T> Default for RecordList<T> {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true }
    }
}

impl<T: Record> RecordList<T> {
    pub fn load(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
    }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    #[must_use]
    pub fn next_id(&self) -> u32 {
        self.items.iter().map(Record::id).max().unwrap_or(0) + 1
    }

    /// Insert a new record or replace an existing one. Returns the stored id.
    pub fn upsert(&mut self, mut record: T) -> u32 {
        if record.id() != 0 {
            if let Some(slot) = self.items.iter_mut().find(|item| item.id() == record.id()) {
                *slot = record;
                return slot.id();
            }
        } else {
            record.set_id(self.next_id());
        }
        let id = record.id();
        self.items.push(record);
        id
    }

    /// Remove the record with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }
}
