use std::collections::HashSet;

use tokio::sync::RwLock;
use types::{Entry, EntryList, Error, Id, Record, Result, err};

/// An in-memory collection of records keyed by [`Id`].
///
/// Ids come from a high-water mark: the first insert into an empty table gets
/// 1, every later one gets one more than the largest id the table has held.
/// Deleting the newest record therefore never frees its id.
#[derive(Debug)]
pub struct Table<T> {
    state: RwLock<State<T>>,
}

#[derive(Debug)]
struct State<T> {
    rows: Vec<Entry<T>>,
    last_id: Option<Id>,
}

/// The two sides of an in-place change.
#[derive(Debug, Clone)]
pub struct Replaced<T> {
    pub previous: Entry<T>,
    pub current: Entry<T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            state: RwLock::new(State {
                rows: Vec::new(),
                last_id: None,
            }),
        }
    }
}

impl<T: Record> Table<T> {
    /// Fails if two rows share an id.
    pub fn new(rows: Vec<Entry<T>>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(rows.len());
        if let Some(dup) = rows.iter().find(|row| !seen.insert(row.id)) {
            return Err(err!("duplicate {} id {}", T::KIND, dup.id));
        }

        let last_id = rows.iter().map(|row| row.id).max();
        Ok(Self {
            state: RwLock::new(State { rows, last_id }),
        })
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Snapshot of every row, in insertion order.
    pub async fn all(&self) -> Vec<Entry<T>> {
        self.state.read().await.rows.clone()
    }

    pub async fn get(&self, id: Id) -> Result<Entry<T>> {
        self.state
            .read()
            .await
            .rows
            .find_id(id)
            .cloned()
            .ok_or_else(|| Error::not_found(T::KIND))
    }

    pub async fn filter(&self, mut keep: impl FnMut(&T) -> bool) -> Vec<Entry<T>> {
        self.state
            .read()
            .await
            .rows
            .iter()
            .filter(|row| keep(&row.data))
            .cloned()
            .collect()
    }

    pub async fn insert(&self, data: T) -> Result<Entry<T>> {
        let mut state = self.state.write().await;
        let id = match state.last_id {
            Some(last) => last
                .checked_next()
                .ok_or_else(|| err!("{} ids exhausted", T::KIND))?,
            None => Id::new(1),
        };

        let entry = Entry::new(id, data);
        state.rows.push(entry.clone());
        state.last_id = Some(id);
        Ok(entry)
    }

    pub async fn replace(&self, id: Id, data: T) -> Result<Replaced<T>> {
        self.modify(id, |current| {
            *current = data;
            Ok(())
        })
        .await
    }

    /// Applies `change` to a copy of the row and stores it only if `change`
    /// succeeds.
    pub async fn modify(
        &self,
        id: Id,
        change: impl FnOnce(&mut T) -> Result<()>,
    ) -> Result<Replaced<T>> {
        let mut state = self.state.write().await;
        let row = state
            .rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| Error::not_found(T::KIND))?;

        let mut data = row.data.clone();
        change(&mut data)?;

        let previous = std::mem::replace(row, Entry::new(id, data));
        Ok(Replaced {
            previous,
            current: row.clone(),
        })
    }

    /// Removes the row, handing back what was stored.
    pub async fn remove(&self, id: Id) -> Result<Entry<T>> {
        self.state
            .write()
            .await
            .rows
            .remove_id(id)
            .ok_or_else(|| Error::not_found(T::KIND))
    }
}
