use crate::models::common::RecordId;

/// Abstract key-value mapping from record id to record.
///
/// A store only holds values; id assignment belongs to the table that owns it.
pub trait RecordStore<V> {
    fn get(&self, id: RecordId) -> Option<&V>;

    fn get_mut(&mut self, id: RecordId) -> Option<&mut V>;

    /// Insert or replace the value stored under `id`
    fn insert(&mut self, id: RecordId, value: V);

    fn remove(&mut self, id: RecordId) -> Option<V>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All entries in ascending id order
    fn entries(&self) -> Vec<(RecordId, &V)>;
}
