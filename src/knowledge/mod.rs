//! Knowledge base and persona repositories
//!
//! The engine never reaches for persisted state directly: repositories are
//! injected, and each dispatch works on snapshots cloned out of them.

pub mod defaults;
pub mod file_store;

pub use defaults::default_entries;
pub use file_store::JsonFileStore;

use crate::error::{FaqbotError, Result};
use crate::types::{EntryId, KnowledgeEntry, NewEntry, Persona};
use std::collections::HashSet;
use std::sync::RwLock;

/// Source of knowledge entries
pub trait KnowledgeRepository: Send + Sync {
    /// Current entries in insertion order
    fn snapshot(&self) -> Result<Vec<KnowledgeEntry>>;

    /// Append a validated entry with a freshly generated id
    fn add(&self, draft: NewEntry) -> Result<KnowledgeEntry>;

    /// Remove an entry; returns whether it existed
    fn remove(&self, id: &EntryId) -> Result<bool>;
}

/// Source of the bot persona
pub trait PersonaStore: Send + Sync {
    fn persona(&self) -> Result<Persona>;

    fn set_persona(&self, persona: Persona) -> Result<()>;
}

/// Check a draft and turn it into an entry
///
/// All three fields are required after trimming. Stored text is trimmed.
pub fn validate_entry(draft: NewEntry) -> Result<KnowledgeEntry> {
    let question = draft.question.trim();
    let answer = draft.answer.trim();
    let category = draft.category.trim();

    for (field, value) in [("question", question), ("answer", answer), ("category", category)] {
        if value.is_empty() {
            return Err(FaqbotError::Validation(format!("{} must not be empty", field)));
        }
    }

    Ok(KnowledgeEntry {
        id: EntryId::generate(),
        question: question.to_string(),
        answer: answer.to_string(),
        category: category.to_string(),
    })
}

pub fn validate_persona(persona: &Persona) -> Result<()> {
    if persona.name.trim().is_empty() {
        return Err(FaqbotError::Validation("persona name must not be empty".to_string()));
    }
    Ok(())
}

/// Reject snapshots with repeated ids
pub fn ensure_unique_ids(entries: &[KnowledgeEntry]) -> Result<()> {
    let mut seen = HashSet::new();
    for entry in entries {
        if !seen.insert(&entry.id) {
            return Err(FaqbotError::KnowledgeBase(format!(
                "duplicate entry id: {}",
                entry.id
            )));
        }
    }
    Ok(())
}

/// Group entries by category for display
///
/// Categories appear in order of first occurrence; entries keep their
/// relative order inside each category.
pub fn group_by_category(entries: &[KnowledgeEntry]) -> Vec<(String, Vec<&KnowledgeEntry>)> {
    let mut groups: Vec<(String, Vec<&KnowledgeEntry>)> = Vec::new();
    for entry in entries {
        match groups.iter_mut().find(|(name, _)| *name == entry.category) {
            Some((_, members)) => members.push(entry),
            None => groups.push((entry.category.clone(), vec![entry])),
        }
    }
    groups
}

/// Volatile repository, used by tests and one-shot runs
#[derive(Debug, Default)]
pub struct InMemoryKnowledgeBase {
    entries: RwLock<Vec<KnowledgeEntry>>,
    persona: RwLock<Persona>,
}

impl InMemoryKnowledgeBase {
    pub fn new(entries: Vec<KnowledgeEntry>, persona: Persona) -> Result<Self> {
        ensure_unique_ids(&entries)?;
        Ok(Self {
            entries: RwLock::new(entries),
            persona: RwLock::new(persona),
        })
    }

    /// Seed entries with the default persona
    pub fn with_defaults() -> Self {
        Self {
            entries: RwLock::new(default_entries()),
            persona: RwLock::new(Persona::default()),
        }
    }
}

fn poisoned<T>(_: T) -> FaqbotError {
    FaqbotError::KnowledgeBase("repository lock poisoned".to_string())
}

impl KnowledgeRepository for InMemoryKnowledgeBase {
    fn snapshot(&self) -> Result<Vec<KnowledgeEntry>> {
        Ok(self.entries.read().map_err(poisoned)?.clone())
    }

    fn add(&self, draft: NewEntry) -> Result<KnowledgeEntry> {
        let entry = validate_entry(draft)?;
        self.entries.write().map_err(poisoned)?.push(entry.clone());
        Ok(entry)
    }

    fn remove(&self, id: &EntryId) -> Result<bool> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        let before = entries.len();
        entries.retain(|e| &e.id != id);
        Ok(entries.len() != before)
    }
}

impl PersonaStore for InMemoryKnowledgeBase {
    fn persona(&self) -> Result<Persona> {
        Ok(self.persona.read().map_err(poisoned)?.clone())
    }

    fn set_persona(&self, persona: Persona) -> Result<()> {
        validate_persona(&persona)?;
        *self.persona.write().map_err(poisoned)? = persona;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(q: &str, a: &str, c: &str) -> NewEntry {
        NewEntry {
            question: q.to_string(),
            answer: a.to_string(),
            category: c.to_string(),
        }
    }

    fn entry(id: &str, question: &str, category: &str) -> KnowledgeEntry {
        KnowledgeEntry {
            id: EntryId::from(id),
            question: question.to_string(),
            answer: "x".to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_add_validates_all_fields() {
        let kb = InMemoryKnowledgeBase::new(vec![], Persona::default()).unwrap();
        for bad in [draft(" ", "a", "c"), draft("q", "", "c"), draft("q", "a", "\t")] {
            assert!(matches!(kb.add(bad), Err(FaqbotError::Validation(_))));
        }
        assert!(kb.snapshot().unwrap().is_empty());
    }

    #[test]
    fn test_add_appends_in_order_with_fresh_ids() {
        let kb = InMemoryKnowledgeBase::new(vec![], Persona::default()).unwrap();
        let a = kb.add(draft("Q1", "A1", "C")).unwrap();
        let b = kb.add(draft(" Q2 ", "A2", "C")).unwrap();

        assert_ne!(a.id, b.id);
        let snapshot = kb.snapshot().unwrap();
        assert_eq!(snapshot, vec![a, b]);
        assert_eq!(snapshot[1].question, "Q2");
    }

    #[test]
    fn test_remove_reports_existence() {
        let kb = InMemoryKnowledgeBase::with_defaults();
        let id = EntryId::from("faq-1");
        assert!(kb.remove(&id).unwrap());
        assert!(!kb.remove(&id).unwrap());
        assert_eq!(kb.snapshot().unwrap().len(), default_entries().len() - 1);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let kb = InMemoryKnowledgeBase::with_defaults();
        let snapshot = kb.snapshot().unwrap();
        kb.add(draft("Q", "A", "C")).unwrap();
        assert_eq!(snapshot.len(), default_entries().len());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut entries = default_entries();
        entries.push(entries[0].clone());
        assert!(matches!(
            InMemoryKnowledgeBase::new(entries, Persona::default()),
            Err(FaqbotError::KnowledgeBase(_))
        ));
    }

    #[test]
    fn test_persona_requires_name() {
        let kb = InMemoryKnowledgeBase::with_defaults();
        let blank = Persona {
            name: "  ".to_string(),
            tone_description: "x".to_string(),
        };
        assert!(kb.set_persona(blank).is_err());
        assert_eq!(kb.persona().unwrap(), Persona::default());
    }

    #[test]
    fn test_group_by_category_first_appearance() {
        let entries = vec![
            entry("1", "a", "Campus"),
            entry("2", "b", "Financeiro"),
            entry("3", "c", "Campus"),
        ];
        let groups = group_by_category(&entries);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Campus");

        let campus_ids: Vec<&str> = groups[0].1.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(campus_ids, vec!["1", "3"]);
        assert_eq!(groups[1].0, "Financeiro");
    }
}
