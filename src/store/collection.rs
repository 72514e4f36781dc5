//! Ordered collection with a per-type id counter.

use crate::models::Record;

/// Records of one type in insertion order, plus the next id to hand out.
///
/// Ids come from a counter that only moves forward, so an id freed by
/// `remove` is never reused.
#[derive(Debug, Clone)]
pub struct Collection<R: Record> {
    items: Vec<R>,
    next_id: u32,
}

impl<R: Record> Default for Collection<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

impl<R: Record> Collection<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from existing records, continuing the counter
    /// after the highest id present.
    pub fn from_records(items: Vec<R>) -> Self {
        let next_id = items.iter().map(Record::id).max().map_or(1, |max| max + 1);
        Self { items, next_id }
    }

    /// The live records in insertion order.
    pub fn list(&self) -> &[R] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.items.iter()
    }

    /// Append a new record built from `draft` and return it.
    pub fn add(&mut self, draft: R::Draft) -> &R {
        let id = self.next_id;
        self.next_id += 1;

        let index = self.items.len();
        self.items.push(R::from_draft(id, draft));
        tracing::debug!(kind = %R::KIND, id, "record added");

        &self.items[index]
    }

    /// Merge `patch` into the record with `id`.
    ///
    /// Returns `false` (and changes nothing) when no such record exists.
    pub fn update(&mut self, id: u32, patch: R::Patch) -> bool {
        match self.items.iter_mut().find(|record| record.id() == id) {
            Some(record) => {
                record.apply(patch);
                tracing::debug!(kind = %R::KIND, id, "record updated");
                true
            }
            None => {
                tracing::debug!(kind = %R::KIND, id, "update ignored: unknown id");
                false
            }
        }
    }

    /// Drop the record with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|record| record.id() != id);
        let removed = self.items.len() != before;

        if removed {
            tracing::debug!(kind = %R::KIND, id, "record removed");
        } else {
            tracing::debug!(kind = %R::KIND, id, "remove ignored: unknown id");
        }
        removed
    }

    pub fn find(&self, id: u32) -> Option<&R> {
        self.items.iter().find(|record| record.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Id the next `add` will assign.
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    pub fn ids(&self) -> Vec<u32> {
        self.items.iter().map(Record::id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Doctor, DoctorDraft, DoctorPatch};

    fn draft(name: &str) -> DoctorDraft {
        DoctorDraft {
            name: name.to_string(),
            specialty: "Cardiology".to_string(),
            contact: "3456789012".to_string(),
        }
    }

    #[test]
    fn test_add_assigns_increasing_ids() {
        let mut doctors: Collection<Doctor> = Collection::new();
        let first = doctors.add(draft("Dr. A")).id;
        let second = doctors.add(draft("Dr. B")).id;
        assert_eq!((first, second), (1, 2));
        assert_eq!(doctors.next_id(), 3);
    }

    #[test]
    fn test_removed_ids_are_not_reused() {
        let mut doctors: Collection<Doctor> = Collection::new();
        doctors.add(draft("Dr. A"));
        let id = doctors.add(draft("Dr. B")).id;
        assert!(doctors.remove(id));
        assert_eq!(doctors.add(draft("Dr. C")).id, 3);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut doctors: Collection<Doctor> = Collection::new();
        doctors.add(draft("Dr. A"));
        let before = doctors.list().to_vec();

        let changed = doctors.update(
            99,
            DoctorPatch {
                name: Some("Dr. Z".into()),
                ..Default::default()
            },
        );

        assert!(!changed);
        assert_eq!(doctors.list(), before.as_slice());
    }

    #[test]
    fn test_remove_keeps_order_of_the_rest() {
        let mut doctors: Collection<Doctor> = Collection::new();
        doctors.add(draft("Dr. A"));
        doctors.add(draft("Dr. B"));
        doctors.add(draft("Dr. C"));
        doctors.remove(2);

        let names: Vec<&str> = doctors.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Dr. A", "Dr. C"]);
    }

    #[test]
    fn test_from_records_continues_counter() {
        let doctors = Collection::from_records(vec![Doctor {
            id: 5,
            name: "Dr. A".into(),
            specialty: "Cardiology".into(),
            contact: "1".into(),
        }]);
        assert_eq!(doctors.next_id(), 6);
    }
}
