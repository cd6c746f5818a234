//! JSON file persistence for the knowledge base and persona
//!
//! The whole store is one pretty-printed document. Every mutation rewrites
//! it through a temporary sibling followed by a rename, so a crash never
//! leaves a half-written file behind.

use super::{
    default_entries, ensure_unique_ids, validate_entry, validate_persona, KnowledgeRepository,
    PersonaStore,
};
use crate::error::{FaqbotError, Result};
use crate::types::{EntryId, KnowledgeEntry, NewEntry, Persona};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    entries: Vec<KnowledgeEntry>,
    #[serde(default)]
    persona: Persona,
}

impl Default for StoreDocument {
    fn default() -> Self {
        Self {
            entries: default_entries(),
            persona: Persona::default(),
        }
    }
}

/// Knowledge base and persona backed by a JSON file
pub struct JsonFileStore {
    path: PathBuf,
    state: RwLock<StoreDocument>,
}

impl JsonFileStore {
    /// Open the store at `path`
    ///
    /// A missing file, or one without entries, starts from the seed set.
    /// Nothing is written until the first mutation.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let mut document = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            let document: StoreDocument = serde_json::from_str(&contents)?;
            debug!(
                "Loaded {} knowledge entries from {}",
                document.entries.len(),
                path.display()
            );
            document
        } else {
            debug!("No store at {}, using seed knowledge base", path.display());
            StoreDocument::default()
        };

        if document.entries.is_empty() {
            warn!("Store {} has no entries, reseeding defaults", path.display());
            document.entries = default_entries();
        }
        ensure_unique_ids(&document.entries)?;

        Ok(Self {
            path,
            state: RwLock::new(document),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, document: &StoreDocument) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_string_pretty(document)?)?;
        std::fs::rename(&tmp, &self.path)?;

        debug!("Wrote store to {}", self.path.display());
        Ok(())
    }

    /// Apply `change` to a copy of the document and commit it only once the
    /// file write succeeded.
    fn mutate<T>(&self, change: impl FnOnce(&mut StoreDocument) -> Result<T>) -> Result<T> {
        let mut guard = self
            .state
            .write()
            .map_err(|_| FaqbotError::KnowledgeBase("store lock poisoned".to_string()))?;

        let mut next = guard.clone();
        let out = change(&mut next)?;
        self.persist(&next)?;
        *guard = next;
        Ok(out)
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, StoreDocument>> {
        self.state
            .read()
            .map_err(|_| FaqbotError::KnowledgeBase("store lock poisoned".to_string()))
    }
}

impl KnowledgeRepository for JsonFileStore {
    fn snapshot(&self) -> Result<Vec<KnowledgeEntry>> {
        Ok(self.read()?.entries.clone())
    }

    fn add(&self, draft: NewEntry) -> Result<KnowledgeEntry> {
        let entry = validate_entry(draft)?;
        self.mutate(|doc| {
            doc.entries.push(entry.clone());
            Ok(())
        })?;
        info!("Added knowledge entry {}", entry.id);
        Ok(entry)
    }

    fn remove(&self, id: &EntryId) -> Result<bool> {
        if !self.read()?.entries.iter().any(|e| &e.id == id) {
            return Ok(false);
        }
        self.mutate(|doc| {
            doc.entries.retain(|e| &e.id != id);
            Ok(())
        })?;
        info!("Removed knowledge entry {}", id);
        Ok(true)
    }
}

impl PersonaStore for JsonFileStore {
    fn persona(&self) -> Result<Persona> {
        Ok(self.read()?.persona.clone())
    }

    fn set_persona(&self, persona: Persona) -> Result<()> {
        validate_persona(&persona)?;
        self.mutate(|doc| {
            doc.persona = persona;
            Ok(())
        })?;
        info!("Persona updated");
        Ok(())
    }
}
