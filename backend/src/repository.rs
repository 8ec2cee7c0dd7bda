use std::collections::HashMap;
use std::sync::Mutex;

use shared::models::QuestionObject;

pub type QuestionStore = Mutex<QuestionRepository>;

/// Ordered in-memory collection of question objects.
///
/// Records iterate in insertion order and keep their position across
/// updates. Lookups go through an id -> position index. Id uniqueness on
/// insert and existence on update/delete are caller contracts: callers
/// check `exists`/`find` before mutating.
#[derive(Debug, Default)]
pub struct QuestionRepository {
    records: Vec<QuestionObject>,
    index: HashMap<String, usize>,
}

impl QuestionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the process-wide initial records. A restart always
    /// comes back to exactly this state.
    pub fn seeded() -> Self {
        let mut repo = Self::new();
        repo.insert(QuestionObject {
            id: "1".into(),
            question: "Vim or Emacs?".into(),
            answer_a: "Vim".into(),
            answer_b: "Emacs".into(),
            answer_a_votes: 2,
            answer_b_votes: 3,
        });
        repo.insert(QuestionObject {
            id: "2".into(),
            question: "Weak or strong typing?".into(),
            answer_a: "Weak".into(),
            answer_b: "Strong".into(),
            answer_a_votes: 0,
            answer_b_votes: 100,
        });
        repo
    }

    pub fn exists(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn find(&self, id: &str) -> Option<&QuestionObject> {
        self.index.get(id).map(|&pos| &self.records[pos])
    }

    /// Snapshot of every record in insertion order. Mutating the returned
    /// vector has no effect on the store.
    pub fn all(&self) -> Vec<QuestionObject> {
        self.records.clone()
    }

    /// Appends at the end of the collection. The caller has already
    /// verified `exists(question.id)` is false.
    pub fn insert(&mut self, question: QuestionObject) {
        self.index.insert(question.id.clone(), self.records.len());
        self.records.push(question);
    }

    /// Replaces the record with the same id at its current position. This
    /// is a full replace, not a field merge. No-op when the id is absent;
    /// the caller has already checked `find`.
    pub fn update(&mut self, question: QuestionObject) {
        if let Some(&pos) = self.index.get(&question.id) {
            self.records[pos] = question;
        }
    }

    /// Removes the record with the given id, shifting later records down
    /// one position. The caller has already checked `find`.
    pub fn delete(&mut self, id: &str) {
        if let Some(pos) = self.index.remove(id) {
            self.records.remove(pos);
            for p in self.index.values_mut() {
                if *p > pos {
                    *p -= 1;
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
