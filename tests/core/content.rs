use folio::core::document::ContentStore;
use folio::core::error::FolioError;
use folio::core::schema::{
    self, ExperienceEntry, ExperiencePatch, ProjectEntry, ProjectPatch, ProjectStatus,
};
use folio::core::store::{DOCUMENT_KEY, Store};
use folio::core::validate;
use std::cell::RefCell;
use std::fs;
use std::rc::Rc;
use tempfile::tempdir;

fn open_store(dir: &std::path::Path) -> ContentStore {
    ContentStore::open(Store::rooted_in(dir))
}

#[test]
fn test_import_export_round_trip_is_identity() {
    let tmp = tempdir().unwrap();
    let mut content = open_store(tmp.path());

    let before = serde_json::to_string(&content.export()).unwrap();
    let candidate = serde_json::to_value(content.export()).unwrap();
    content.import(candidate).unwrap();
    let after = serde_json::to_string(&content.export()).unwrap();

    assert_eq!(before, after);
}

#[test]
fn test_validator_rejects_each_missing_required_section() {
    let full = serde_json::to_value(schema::default_document()).unwrap();
    for section in validate::REQUIRED_SECTIONS {
        let mut candidate = full.clone();
        candidate.as_object_mut().unwrap().remove(section);
        let err = validate::validate_document(&candidate).unwrap_err();
        assert!(
            err.contains(section),
            "reason '{}' should name section '{}'",
            err,
            section
        );
    }
}

#[test]
fn test_missing_services_still_imports() {
    let tmp = tempdir().unwrap();
    let mut content = open_store(tmp.path());

    let mut candidate = serde_json::to_value(schema::default_document()).unwrap();
    candidate.as_object_mut().unwrap().remove("services");
    content.import(candidate).unwrap();
    assert!(content.document().services.is_empty());
}

#[test]
fn test_import_fails_closed() {
    let tmp = tempdir().unwrap();
    let mut content = open_store(tmp.path());
    content.add_project(ProjectEntry {
        title: "Keep me".to_string(),
        ..ProjectEntry::default()
    });
    let before = content.export();

    let mut candidate = serde_json::to_value(&before).unwrap();
    candidate.as_object_mut().unwrap().remove("projects");
    let err = content.import(candidate).unwrap_err();
    match err {
        FolioError::ValidationError(reason) => {
            assert_eq!(reason, "missing required section: projects")
        }
        other => panic!("expected validation error, got {:?}", other),
    }
    assert_eq!(content.export(), before);
}

#[test]
fn test_add_assigns_pairwise_distinct_ids() {
    let tmp = tempdir().unwrap();
    let mut content = open_store(tmp.path());

    let mut ids = Vec::new();
    for i in 0..25 {
        ids.push(content.add_project(ProjectEntry {
            title: format!("Project {}", i),
            ..ProjectEntry::default()
        }));
    }
    let count = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), count);
    assert!(ids.iter().all(|id| !id.is_empty()));
}

#[test]
fn test_add_overrides_caller_supplied_id() {
    let tmp = tempdir().unwrap();
    let mut content = open_store(tmp.path());

    let id = content.add_project(ProjectEntry {
        id: "chosen-by-caller".to_string(),
        ..ProjectEntry::default()
    });
    assert_ne!(id, "chosen-by-caller");
    assert!(content.document().projects.iter().any(|p| p.id == id));
}

#[test]
fn test_update_is_shallow_merge_not_replace() {
    let tmp = tempdir().unwrap();
    let mut content = open_store(tmp.path());

    let id = content.add_experience(ExperienceEntry {
        company: "A".to_string(),
        position: "X".to_string(),
        ..ExperienceEntry::default()
    });
    let updated = content.update_experience(
        &id,
        ExperiencePatch {
            company: Some("B".to_string()),
            ..ExperiencePatch::default()
        },
    );
    assert!(updated);

    let entry = content
        .document()
        .experience
        .iter()
        .find(|e| e.id == id)
        .unwrap();
    assert_eq!(entry.company, "B");
    assert_eq!(entry.position, "X");
    assert_eq!(entry.id, id);
}

#[test]
fn test_update_unknown_id_changes_nothing() {
    let tmp = tempdir().unwrap();
    let mut content = open_store(tmp.path());
    let before = content.export();

    let updated = content.update_project(
        "no-such-id",
        ProjectPatch {
            title: Some("ghost".to_string()),
            ..ProjectPatch::default()
        },
    );
    assert!(!updated);
    assert_eq!(content.export(), before);
}

#[test]
fn test_delete_is_exact_match_and_idempotent() {
    let tmp = tempdir().unwrap();
    let mut content = open_store(tmp.path());
    // Default document ships projects with ids "1".."5".
    assert!(content.remove_project("2"));
    let ids: Vec<String> = content
        .document()
        .projects
        .iter()
        .map(|p| p.id.clone())
        .collect();
    assert!(!ids.contains(&"2".to_string()));

    let before = content.export();
    assert!(!content.remove_project("2"));
    assert_eq!(content.export(), before);
}

#[test]
fn test_reorder_preserves_multiset() {
    let tmp = tempdir().unwrap();
    let mut content = open_store(tmp.path());
    let before: Vec<String> = content
        .document()
        .experience
        .iter()
        .map(|e| e.id.clone())
        .collect();
    assert_eq!(before, vec!["1", "2", "3"]);

    assert!(content.move_experience(0, 2));
    let after: Vec<String> = content
        .document()
        .experience
        .iter()
        .map(|e| e.id.clone())
        .collect();
    assert_eq!(after, vec!["2", "3", "1"]);

    let mut sorted_before = before;
    let mut sorted_after = after;
    sorted_before.sort_unstable();
    sorted_after.sort_unstable();
    assert_eq!(sorted_before, sorted_after);
}

#[test]
fn test_reorder_out_of_range_is_absorbed() {
    let tmp = tempdir().unwrap();
    let mut content = open_store(tmp.path());
    let before = content.export();
    assert!(!content.move_experience(99, 0));
    assert_eq!(content.export(), before);
}

#[test]
fn test_reset_restores_defaults_after_mutations() {
    let tmp = tempdir().unwrap();
    let mut content = open_store(tmp.path());

    content.add_project(ProjectEntry {
        title: "Scratch".to_string(),
        status: ProjectStatus::Beta,
        ..ProjectEntry::default()
    });
    content.remove_experience("1");
    let mut about = content.document().about.clone();
    about.name = "Someone Else".to_string();
    content.replace_about(about);

    content.reset();
    assert_eq!(content.export(), schema::default_document());
}

#[test]
fn test_persistence_survives_reopen() {
    let tmp = tempdir().unwrap();
    let id;
    {
        let mut content = open_store(tmp.path());
        id = content.add_experience(ExperienceEntry {
            company: "Reload Inc".to_string(),
            ..ExperienceEntry::default()
        });
    }
    // Fresh instance over the same root simulates a reload.
    let reopened = open_store(tmp.path());
    let entry = reopened
        .document()
        .experience
        .iter()
        .find(|e| e.id == id)
        .expect("entry should survive reopen");
    assert_eq!(entry.company, "Reload Inc");
}

#[test]
fn test_corrupt_persisted_entry_falls_back_to_default() {
    let tmp = tempdir().unwrap();
    let store = Store::rooted_in(tmp.path());
    fs::create_dir_all(&store.root).unwrap();
    fs::write(store.entry_path(DOCUMENT_KEY), "{{ definitely not json").unwrap();

    let content = ContentStore::open(store);
    assert_eq!(content.export(), schema::default_document());
}

#[test]
fn test_export_is_a_copy_boundary() {
    let tmp = tempdir().unwrap();
    let content = open_store(tmp.path());
    let mut snapshot = content.export();
    snapshot.about.name = "Mutated Snapshot".to_string();
    assert_ne!(content.document().about.name, "Mutated Snapshot");
}

#[test]
fn test_subscribers_observe_committed_state() {
    let tmp = tempdir().unwrap();
    let mut content = open_store(tmp.path());

    let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    content.subscribe(move |doc| {
        sink.borrow_mut().push(doc.about.name.clone());
    });

    let mut about = content.document().about.clone();
    about.name = "First".to_string();
    content.replace_about(about);
    let mut about = content.document().about.clone();
    about.name = "Second".to_string();
    content.replace_about(about);

    assert_eq!(
        *seen.borrow(),
        vec!["First".to_string(), "Second".to_string()]
    );
}

#[test]
fn test_mutations_persist_before_observers_run() {
    let tmp = tempdir().unwrap();
    let store = Store::rooted_in(tmp.path());
    let entry_path = store.entry_path(DOCUMENT_KEY);
    let mut content = ContentStore::open(store);

    let persisted_name: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&persisted_name);
    content.subscribe(move |_| {
        let text = fs::read_to_string(&entry_path).unwrap();
        let doc: folio::core::schema::PortfolioDocument = serde_json::from_str(&text).unwrap();
        *sink.borrow_mut() = Some(doc.about.name);
    });

    let mut about = content.document().about.clone();
    about.name = "Durable".to_string();
    content.replace_about(about);

    assert_eq!(persisted_name.borrow().as_deref(), Some("Durable"));
}
