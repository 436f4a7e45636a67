//! The content store: owns the live portfolio document and every mutation
//! path over it.
//!
//! One `ContentStore` is constructed per invocation and handed by reference
//! to the command surfaces; nothing else touches persisted storage. Every
//! operation builds the next document, persists it through the store
//! adapter, then swaps it in and notifies subscribers — observers never see
//! an in-memory change that lacks a matching persist call.
//!
//! Operations come in two explicit families instead of one dynamically
//! typed surface: singleton-section replacement (`about`, `contact`) and
//! collection-item operations (`experience`, `projects`, `services`), each
//! typed over its known item shape.

use crate::core::error::FolioError;
use crate::core::schema::{
    self, About, Contact, ExperienceEntry, ExperiencePatch, PortfolioDocument, ProjectEntry,
    ProjectPatch, ServiceEntry, ServicePatch,
};
use crate::core::store::{DOCUMENT_KEY, Store};
use crate::core::{time, validate};
use serde_json::Value as JsonValue;

type Observer = Box<dyn Fn(&PortfolioDocument)>;

/// Collection items carry their identifier themselves; the store assigns it
/// once at add time and never rewrites it afterwards.
trait Identified {
    fn id(&self) -> &str;
    fn assign_id(&mut self, id: String);
}

impl Identified for ExperienceEntry {
    fn id(&self) -> &str {
        &self.id
    }
    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Identified for ProjectEntry {
    fn id(&self) -> &str {
        &self.id
    }
    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Identified for ServiceEntry {
    fn id(&self) -> &str {
        &self.id
    }
    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}

fn append<T: Identified>(items: &mut Vec<T>, mut item: T) -> String {
    let id = time::new_item_id();
    item.assign_id(id.clone());
    items.push(item);
    id
}

fn remove_by_id<T: Identified>(items: &mut Vec<T>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}

/// Remove-and-reinsert. Out-of-range indices are a caller contract
/// violation; they are absorbed (clamped or ignored), never a panic.
fn shift<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= items.len() {
        return false;
    }
    let item = items.remove(from);
    let to = to.min(items.len());
    items.insert(to, item);
    true
}

pub struct ContentStore {
    store: Store,
    document: PortfolioDocument,
    observers: Vec<Observer>,
}

impl ContentStore {
    /// Seed from persisted storage, falling back to the default document on
    /// first run or when the stored entry is unreadable.
    pub fn open(store: Store) -> Self {
        let document = store.read(DOCUMENT_KEY, schema::default_document());
        ContentStore {
            store,
            document,
            observers: Vec::new(),
        }
    }

    /// Read access for the presentation surface.
    pub fn document(&self) -> &PortfolioDocument {
        &self.document
    }

    /// Register an observer, run after every committed mutation.
    pub fn subscribe(&mut self, observer: impl Fn(&PortfolioDocument) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Persist-then-swap-then-notify. Persistence is best-effort (the
    /// adapter logs and swallows failures); the in-memory update always
    /// proceeds.
    fn commit(&mut self, next: PortfolioDocument) {
        self.store.write(DOCUMENT_KEY, &next);
        self.document = next;
        for observer in &self.observers {
            observer(&self.document);
        }
    }

    // ===== Singleton sections: wholesale replacement =====
    //
    // The caller submits the entire new record, not a patch. No shape
    // validation: the editing surface is responsible for building a
    // well-formed section.

    pub fn replace_about(&mut self, about: About) {
        let mut next = self.document.clone();
        next.about = about;
        self.commit(next);
    }

    pub fn replace_contact(&mut self, contact: Contact) {
        let mut next = self.document.clone();
        next.contact = contact;
        self.commit(next);
    }

    // ===== Collection sections: add / update / remove / move =====

    /// Append, assigning a fresh id (any caller-supplied id is replaced).
    /// Returns the assigned id.
    pub fn add_experience(&mut self, entry: ExperienceEntry) -> String {
        let mut next = self.document.clone();
        let id = append(&mut next.experience, entry);
        self.commit(next);
        id
    }

    pub fn add_project(&mut self, entry: ProjectEntry) -> String {
        let mut next = self.document.clone();
        let id = append(&mut next.projects, entry);
        self.commit(next);
        id
    }

    pub fn add_service(&mut self, entry: ServiceEntry) -> String {
        let mut next = self.document.clone();
        let id = append(&mut next.services, entry);
        self.commit(next);
        id
    }

    /// Shallow-merge `patch` onto the entry with `id`. Returns `false`
    /// (nothing persisted) when no entry matches.
    pub fn update_experience(&mut self, id: &str, patch: ExperiencePatch) -> bool {
        let mut next = self.document.clone();
        let Some(entry) = next.experience.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        patch.apply(entry);
        self.commit(next);
        true
    }

    pub fn update_project(&mut self, id: &str, patch: ProjectPatch) -> bool {
        let mut next = self.document.clone();
        let Some(entry) = next.projects.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        patch.apply(entry);
        self.commit(next);
        true
    }

    pub fn update_service(&mut self, id: &str, patch: ServicePatch) -> bool {
        let mut next = self.document.clone();
        let Some(entry) = next.services.iter_mut().find(|s| s.id == id) else {
            return false;
        };
        patch.apply(entry);
        self.commit(next);
        true
    }

    /// Exact-id removal; absent ids are a no-op returning `false`.
    pub fn remove_experience(&mut self, id: &str) -> bool {
        let mut next = self.document.clone();
        if !remove_by_id(&mut next.experience, id) {
            return false;
        }
        self.commit(next);
        true
    }

    pub fn remove_project(&mut self, id: &str) -> bool {
        let mut next = self.document.clone();
        if !remove_by_id(&mut next.projects, id) {
            return false;
        }
        self.commit(next);
        true
    }

    pub fn remove_service(&mut self, id: &str) -> bool {
        let mut next = self.document.clone();
        if !remove_by_id(&mut next.services, id) {
            return false;
        }
        self.commit(next);
        true
    }

    pub fn move_experience(&mut self, from: usize, to: usize) -> bool {
        let mut next = self.document.clone();
        if !shift(&mut next.experience, from, to) {
            return false;
        }
        self.commit(next);
        true
    }

    pub fn move_project(&mut self, from: usize, to: usize) -> bool {
        let mut next = self.document.clone();
        if !shift(&mut next.projects, from, to) {
            return false;
        }
        self.commit(next);
        true
    }

    pub fn move_service(&mut self, from: usize, to: usize) -> bool {
        let mut next = self.document.clone();
        if !shift(&mut next.services, from, to) {
            return false;
        }
        self.commit(next);
        true
    }

    // ===== Whole-document operations =====

    /// Replace the document with a user-supplied candidate. Fails closed:
    /// the current document is untouched unless the candidate passes the
    /// shallow section check and deserializes.
    pub fn import(&mut self, candidate: JsonValue) -> Result<(), FolioError> {
        validate::validate_document(&candidate).map_err(FolioError::ValidationError)?;
        let next: PortfolioDocument = serde_json::from_value(candidate)?;
        self.commit(next);
        Ok(())
    }

    /// Snapshot of the current document. A copy boundary: mutations of the
    /// returned value never reach the store.
    pub fn export(&self) -> PortfolioDocument {
        self.document.clone()
    }

    /// Replace the document with the built-in default and persist it.
    pub fn reset(&mut self) {
        self.commit(schema::default_document());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_moves_first_to_last() {
        let mut items = vec!["a", "b", "c"];
        assert!(shift(&mut items, 0, 2));
        assert_eq!(items, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_shift_absorbs_out_of_range() {
        let mut items = vec!["a", "b"];
        assert!(!shift(&mut items, 5, 0));
        assert_eq!(items, vec!["a", "b"]);
        // Oversized target clamps to the end.
        assert!(shift(&mut items, 0, 99));
        assert_eq!(items, vec!["b", "a"]);
    }

    #[test]
    fn test_remove_by_id_is_exact() {
        let mut items = vec![
            ExperienceEntry {
                id: "1".to_string(),
                ..ExperienceEntry::default()
            },
            ExperienceEntry {
                id: "10".to_string(),
                ..ExperienceEntry::default()
            },
        ];
        assert!(remove_by_id(&mut items, "1"));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "10");
    }
}
