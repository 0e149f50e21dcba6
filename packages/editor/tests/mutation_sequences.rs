//! Longer mutation sequences
//!
//! After every step, each expanded path must still resolve to a container
//! in the live value.

use jsontree_common::accessor;
use jsontree_editor::{DataType, EditSession, EditorConfig, Path, Value};
use serde_json::json;

fn assert_no_stale_entries(session: &EditSession, data: &Value) {
    for path in session.expansion().iter() {
        let node = accessor::get(data, path);
        assert!(
            node.map(|v| DataType::of(v).is_container()).unwrap_or(false),
            "stale expanded path: {}",
            path
        );
    }
}

#[test]
fn test_remove_move_add_chain() {
    let mut data = json!({
        "rows": [
            { "cells": [1, 2] },
            { "cells": [3] },
            { "cells": [] },
            { "cells": [4, 5, 6] }
        ]
    });
    let mut s = EditSession::new("seq", EditorConfig::default());
    s.expand_all(&data);
    let rows = Path::parse("rows");

    s.remove_element(&mut data, &rows, 0);
    assert_no_stale_entries(&s, &data);

    s.move_element(&mut data, &rows, 2, 0);
    assert_no_stale_entries(&s, &data);
    assert_eq!(data["rows"][0], json!({ "cells": [4, 5, 6] }));

    s.add_element(&mut data, &rows, json!({ "cells": [] }));
    s.remove_node(&mut data, &Path::parse("rows[1].cells"));
    assert_no_stale_entries(&s, &data);

    // Everything that was expanded and still exists stays expanded
    assert!(s.is_expanded(&Path::parse("rows[0]")));
    assert!(s.is_expanded(&Path::parse("rows[0].cells")));
    assert!(s.is_expanded(&Path::parse("rows[1]")));
    assert!(!s.is_expanded(&Path::parse("rows[1].cells")));
    assert!(s.is_expanded(&Path::parse("rows[2].cells")));
}

#[test]
fn test_repeated_removal_from_front() {
    let mut data = json!([[0], [1], [2], [3], [4]]);
    let mut s = EditSession::new("seq", EditorConfig::default());
    s.expand_all(&data);

    for remaining in (0..5).rev() {
        s.remove_element(&mut data, &Path::root(), 0);
        assert_eq!(data.as_array().unwrap().len(), remaining);
        assert_eq!(s.expansion().len(), remaining);
        assert_no_stale_entries(&s, &data);
    }
}

#[test]
fn test_moves_round_trip_expansion() {
    let mut data = json!([{}, {}, {}, {}, {}, {}]);
    let mut s = EditSession::new("seq", EditorConfig::default());
    s.expand(&Path::parse("[0]"));
    s.expand(&Path::parse("[4]"));
    let before = s.expansion().clone();

    s.move_element(&mut data, &Path::root(), 0, 5);
    s.move_element(&mut data, &Path::root(), 5, 0);
    assert_eq!(s.expansion(), &before);

    s.move_down(&mut data, &Path::root(), 4);
    s.move_up(&mut data, &Path::root(), 5);
    assert_eq!(s.expansion(), &before);
}

#[test]
fn test_overwrite_and_set_drop_replaced_subtrees() {
    let mut data = json!({ "a": { "b": {} }, "c": [{}] });
    let mut s = EditSession::new("seq", EditorConfig::default());
    s.expand_all(&data);

    s.add_property(&mut data, &Path::root(), "a", json!("scalar"));
    s.set_value_at_path(&mut data, &Path::parse("c[0]"), json!(0));

    assert_no_stale_entries(&s, &data);
    assert_eq!(s.expansion().to_strings(), vec!["c"]);
}

#[test]
fn test_walk_reflects_mutations() {
    let mut data = json!({ "list": ["x", "y"] });
    let mut s = EditSession::new("seq", EditorConfig::default());
    s.initialize(&data);

    let before = s.walk(&data);
    assert_eq!(before, s.walk(&data));

    s.move_up(&mut data, &Path::parse("list"), 1);
    let after = s.walk(&data);
    let keys: Vec<(String, usize)> = after.iter().map(|n| (n.path.to_string(), n.depth)).collect();
    assert_eq!(
        keys,
        vec![
            ("list".to_string(), 0),
            ("list[0]".to_string(), 1),
            ("list[1]".to_string(), 1)
        ]
    );
    assert!(after[0].is_expanded);
    assert_eq!(after[0].child_count, 2);
}
