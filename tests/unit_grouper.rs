// tests/unit_grouper.rs
use decldup::grouper::group;
use decldup::Declaration;
use serde_json::{json, Value};

fn decl(id: &str, file: &str, shape: Value) -> Declaration {
    Declaration::new(
        format!("{file}#test:{id}"),
        "test",
        shape,
        file,
        id,
    )
}

#[test]
fn n_identical_one_group_singletons_none() {
    let decls = vec![
        decl("a", "a.json", json!({"user": {"id": "string"}})),
        decl("b", "b.json", json!({"user": {"id": "string"}})),
        decl("c", "c.json", json!({"user": {"id": "string"}})),
        decl("d", "d.json", json!({"order": {"total": "number"}})),
        decl("e", "e.json", json!({"tag": "string"})),
    ];

    let groups = group(&decls, 1.0);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].decls.len(), 3);
    assert_eq!(groups[0].similarity, 1.0);
}

#[test]
fn fuzzy_groups_can_overlap() {
    // Three mutually similar distinct shapes produce three pairwise
    // groups; the middle declaration appears in more than one.
    let decls = vec![
        decl("a", "a.json", json!({"a": 1, "b": 2, "c": 3})),
        decl("b", "b.json", json!({"a": 1, "b": 2, "c": 4})),
        decl("c", "c.json", json!({"a": 1, "b": 2, "c": 5})),
    ];

    let groups = group(&decls, 0.5);
    assert_eq!(groups.len(), 3);

    let appearances = groups
        .iter()
        .flat_map(|g| g.decls.iter())
        .filter(|d| d.location.name == "b")
        .count();
    assert!(appearances >= 2);
}

#[test]
fn every_group_has_at_least_two_members() {
    let decls = vec![
        decl("a", "a.json", json!({"x": 1})),
        decl("b", "b.json", json!({"x": 1})),
        decl("c", "c.json", json!({"y": [1, 2, 3]})),
        decl("d", "d.json", json!({"z": null})),
    ];

    for g in group(&decls, 0.3) {
        assert!(g.decls.len() >= 2);
    }
}

#[test]
fn fuzzy_similarity_strictly_below_one() {
    let decls = vec![
        decl("a", "a.json", json!({"a": 1, "b": 2, "c": 3})),
        decl("b", "b.json", json!({"a": 1, "b": 2, "c": 3, "d": 4})),
    ];

    let groups = group(&decls, 0.5);
    assert_eq!(groups.len(), 1);
    assert!(groups[0].similarity > 0.5);
    assert!(groups[0].similarity < 1.0);
}

#[test]
fn empty_input_empty_output() {
    assert!(group(&[], 0.5).is_empty());
    assert!(group(&[], 1.0).is_empty());
}
