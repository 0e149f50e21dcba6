//! Integration tests for editor crate

use jsontree_editor::{
    DataType, Document, EditSession, EditorConfig, Mutation, MutationError, MutationOutcome, Path,
    Pipeline,
};
use serde_json::json;

#[test]
fn test_document_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("settings.json");
    std::fs::write(&file, r#"{ "name": "demo", "ports": [80, 443] }"#).unwrap();

    let doc = Document::load(file.clone()).unwrap();
    let session = EditSession::new("test-client", EditorConfig::default());
    let mut pipeline = Pipeline::new(doc, session);

    // Initial depth 1 expands top-level containers
    let paths: Vec<String> = pipeline.nodes().iter().map(|n| n.path.to_string()).collect();
    assert_eq!(paths, vec!["name", "ports", "ports[0]", "ports[1]"]);

    let result = pipeline.apply_mutation(&Mutation::AddElement {
        parent_path: Path::parse("ports"),
        value: json!(8080),
    });
    assert!(result.outcome.is_applied());
    assert_eq!(result.nodes.len(), 5);
    assert!(pipeline.document().is_dirty());

    pipeline.document_mut().save().unwrap();
    let reloaded = Document::load(file).unwrap();
    assert_eq!(reloaded.value()["ports"], json!([80, 443, 8080]));
}

#[test]
fn test_skipped_mutation_keeps_document_clean() {
    let doc = Document::from_source(r#"{ "list": [1] }"#).unwrap();
    let mut pipeline = Pipeline::new(doc, EditSession::new("c", EditorConfig::default()));

    let result = pipeline.apply_mutation(&Mutation::RemoveElement {
        parent_path: Path::parse("list"),
        index: 7,
    });

    assert_eq!(
        result.outcome,
        MutationOutcome::Skipped(MutationError::IndexOutOfRange { index: 7, len: 1 })
    );
    assert!(!pipeline.document().is_dirty());
}

#[test]
fn test_mutation_script_round_trip() {
    let script = r#"[
        { "AddProperty": { "parent_path": "", "key": "tags", "value": [] } },
        { "AddElement": { "parent_path": "tags", "value": "x" } },
        { "AddElement": { "parent_path": "tags" } },
        { "CommitEdit": { "path": "tags[1]", "data_type": "number", "text": "12" } },
        { "MoveUp": { "parent_path": "tags", "index": 1 } }
    ]"#;
    let mutations: Vec<Mutation> = serde_json::from_str(script).unwrap();

    let mut data = json!({});
    let mut session = EditSession::new("script", EditorConfig::default());
    for m in &mutations {
        assert!(session.apply(&mut data, m).is_applied(), "{} should apply", m.name());
    }

    assert_eq!(data, json!({ "tags": [12, "x"] }));
    assert_eq!(session.version(), 5);
    assert!(session.is_expanded(&Path::parse("tags")));
}

#[test]
fn test_leaf_edit_flow() {
    let mut data = json!({ "count": 1, "label": "a", "on": false });
    let mut session = EditSession::new("edit", EditorConfig::default());

    session.commit_edit(&mut data, &Path::parse("count"), DataType::Number, "not a number");
    session.commit_edit(&mut data, &Path::parse("label"), DataType::String, "b");
    session.toggle_boolean(&mut data, &Path::parse("on"));
    session.set_value_at_path(&mut data, &Path::parse("extra"), json!(null));

    assert_eq!(data, json!({ "count": 0, "label": "b", "on": true, "extra": null }));
    assert_eq!(session.get_value_at_path(&data, &Path::parse("label")), Some(&json!("b")));

    let outcome = session.set_value_at_path(&mut data, &Path::root(), json!(1));
    assert_eq!(outcome, MutationOutcome::Skipped(MutationError::RootReplacement));
}
