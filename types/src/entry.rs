use std::{fmt, ops::Deref};

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{Id, Result, validation::FieldErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Employee,
    Department,
    Role,
    Attendance,
    LeaveRequest,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Employee => "Employee",
            Self::Department => "Department",
            Self::Role => "Role",
            Self::Attendance => "Attendance record",
            Self::LeaveRequest => "Leave request",
        })
    }
}

/// A record type that can live in a collection.
pub trait Record: Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    const KIND: EntityKind;

    /// Rules that must hold before the record is stored.
    fn validate(&self) -> FieldErrors {
        FieldErrors::default()
    }

    /// Checks that `self` may replace `stored` through a plain update.
    fn check_update(&self, _stored: &Self) -> Result<()> {
        Ok(())
    }
}

/// A stored record together with its id.
///
/// Serializes flat, with the id under `Id`, which is the shape of the seed
/// fixtures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry<T> {
    #[serde(rename = "Id")]
    pub id: Id,
    #[serde(flatten)]
    pub data: T,
}

impl<T> Entry<T> {
    pub fn new(id: Id, data: T) -> Self {
        Self { id, data }
    }

    pub fn into_data(self) -> T {
        self.data
    }
}

impl<T> Deref for Entry<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.data
    }
}

/// Id-keyed patching of a locally cached collection.
pub trait EntryList<T> {
    fn find_id(&self, id: Id) -> Option<&Entry<T>>;

    /// Replaces the entry with the same id, or appends it.
    fn upsert(&mut self, entry: Entry<T>);

    fn remove_id(&mut self, id: Id) -> Option<Entry<T>>;
}

impl<T> EntryList<T> for Vec<Entry<T>> {
    fn find_id(&self, id: Id) -> Option<&Entry<T>> {
        self.iter().find(|entry| entry.id == id)
    }

    fn upsert(&mut self, entry: Entry<T>) {
        match self.iter_mut().find(|existing| existing.id == entry.id) {
            Some(existing) => *existing = entry,
            None => self.push(entry),
        }
    }

    fn remove_id(&mut self, id: Id) -> Option<Entry<T>> {
        let index = self.iter().position(|entry| entry.id == id)?;
        Some(self.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list() -> Vec<Entry<&'static str>> {
        vec![
            Entry::new(Id::new(1), "one"),
            Entry::new(Id::new(2), "two"),
        ]
    }

    #[test]
    fn upsert_replaces_in_place() {
        let mut entries = list();
        entries.upsert(Entry::new(Id::new(1), "uno"));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].data, "uno");
    }

    #[test]
    fn upsert_appends_unknown_ids() {
        let mut entries = list();
        entries.upsert(Entry::new(Id::new(9), "nine"));
        assert_eq!(entries.last().map(|e| e.id), Some(Id::new(9)));
    }

    #[test]
    fn remove_only_touches_matching_id() {
        let mut entries = list();
        assert_eq!(entries.remove_id(Id::new(2)).map(|e| e.data), Some("two"));
        assert!(entries.remove_id(Id::new(2)).is_none());
        assert_eq!(entries.len(), 1);
    }
}
