//! Shared table state behind the in-memory store
//!
//! All three tables sit behind one `RwLock`. Every port method takes the lock
//! once, so a uniqueness check and the write that depends on it can never
//! interleave with another writer.

use std::collections::BTreeMap;
use std::sync::Arc;

use campus_domain::{Course, Enrollment, Student};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::info;

/// Rows of one entity type plus its id sequence
///
/// Keys are the assigned ids, so iteration order is insertion order.
#[derive(Debug)]
pub(crate) struct Table<T> {
    pub(crate) rows: BTreeMap<i64, T>,
    last_id: i64,
}

impl<T> Table<T> {
    /// Draw the next value of this table's sequence
    pub(crate) fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    /// Clone every row matching `predicate`, in id order
    pub(crate) fn select(&self, predicate: impl Fn(&T) -> bool) -> Vec<T>
    where
        T: Clone,
    {
        self.rows
            .values()
            .filter(|row| predicate(*row))
            .cloned()
            .collect()
    }

    /// Remove every row matching `predicate`, returning how many went
    pub(crate) fn remove_where(&mut self, predicate: impl Fn(&T) -> bool) -> u64 {
        let before = self.rows.len();
        self.rows.retain(|_, row| !predicate(&*row));
        (before - self.rows.len()) as u64
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub(crate) students: Table<Student>,
    pub(crate) courses: Table<Course>,
    pub(crate) enrollments: Table<Enrollment>,
}

/// In-process implementation of the student, course and enrollment ports
///
/// Cloning is cheap and every clone shares the same tables.
///
/// ## Cascades
///
/// The domain deletes dependent enrollments and then the parent as two
/// calls. Another task may observe the state between the two; no task can
/// observe a half-applied single call.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        info!("Initializing InMemoryStore");
        Self::default()
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().await
    }
}
