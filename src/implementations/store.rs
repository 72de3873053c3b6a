use std::collections::BTreeMap;

use crate::errors::{ RegistryError, RegistryResult };
use crate::models::common::{ RecordId, RecordKind };
use crate::traits::record_store::RecordStore;

/// In-memory record store
#[derive(Debug, Clone)]
pub struct MemoryStore<V> {
    records: BTreeMap<RecordId, V>,
}

impl<V> Default for MemoryStore<V> {
    fn default() -> Self {
        Self { records: BTreeMap::new() }
    }
}

impl<V> RecordStore<V> for MemoryStore<V> {
    fn get(&self, id: RecordId) -> Option<&V> {
        self.records.get(&id)
    }

    fn get_mut(&mut self, id: RecordId) -> Option<&mut V> {
        self.records.get_mut(&id)
    }

    fn insert(&mut self, id: RecordId, value: V) {
        self.records.insert(id, value);
    }

    fn remove(&mut self, id: RecordId) -> Option<V> {
        self.records.remove(&id)
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn entries(&self) -> Vec<(RecordId, &V)> {
        self.records
            .iter()
            .map(|(id, value)| (*id, value))
            .collect()
    }
}

/// One record kind: a store plus the counter that issues its ids.
///
/// The counter only moves forward, so ids freed by `remove` are never handed out again.
#[derive(Debug, Clone)]
pub struct RecordTable<V, S = MemoryStore<V>> {
    kind: RecordKind,
    last_id: RecordId,
    store: S,
    _record: std::marker::PhantomData<V>,
}

impl<V> RecordTable<V, MemoryStore<V>> {
    pub fn new(kind: RecordKind) -> Self {
        Self::with_store(kind, MemoryStore::default())
    }
}

impl<V, S: RecordStore<V>> RecordTable<V, S> {
    pub fn with_store(kind: RecordKind, store: S) -> Self {
        Self {
            kind,
            last_id: 0,
            store,
            _record: std::marker::PhantomData,
        }
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// The most recently issued id, zero before the first insert
    pub fn last_id(&self) -> RecordId {
        self.last_id
    }

    /// Store `value` under the next id and return that id
    pub fn create(&mut self, value: V) -> RecordId {
        self.last_id += 1;
        let id = self.last_id;
        self.store.insert(id, value);
        id
    }

    pub fn get(&self, id: RecordId) -> Option<&V> {
        self.store.get(id)
    }

    pub fn get_mut(&mut self, id: RecordId) -> RegistryResult<&mut V> {
        let kind = self.kind;
        self.store.get_mut(id).ok_or(RegistryError::NotFound { kind, id })
    }

    pub fn remove(&mut self, id: RecordId) -> RegistryResult<V> {
        self.store.remove(id).ok_or(RegistryError::NotFound { kind: self.kind, id })
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn entries(&self) -> Vec<(RecordId, &V)> {
        self.store.entries()
    }
}
