//! Script loading and command handler tests

use skilltree_cli::commands::chain::{handle_chain_command, ChainArgs};
use skilltree_cli::commands::query::{handle_query_command, QueryArgs};
use skilltree_cli::commands::replay::{handle_replay_command, ReplayArgs};
use skilltree_cli::{replay, Script};
use skilltree_core::{Identity, NodeId, MAX_CAPACITY_HINT};
use std::io::Write;
use std::path::PathBuf;

const MIDDLE_OF_TREE: &str = r#"
[index]
controller = "common-colony"
capacity_hint = 16

[[insert]]
parent = 0
[[insert]]
parent = 0
[[insert]]
parent = 2
[[insert]]
parent = 0
[[insert]]
parent = 1
[[insert]]
parent = 2
"#;

fn write_script(content: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("skills.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    (dir, path)
}

#[test]
fn load_and_replay_script_file() {
    let (_dir, path) = write_script(MIDDLE_OF_TREE);
    let script = Script::load(&path).unwrap();
    assert_eq!(script.index.capacity_hint, 16);

    let outcome = replay(&script).unwrap();
    assert!(outcome.failures.is_empty());
    assert_eq!(outcome.index.node_count(), 7);
    assert_eq!(outcome.index.descendant_count(NodeId::ROOT).unwrap(), 6);
    assert_eq!(
        outcome.index.get_ancestor_at_distance(NodeId::new(6), 1).unwrap(),
        NodeId::ROOT
    );
}

#[test]
fn missing_script_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = Script::load(&dir.path().join("nope.toml")).unwrap_err();
    assert!(format!("{err:#}").contains("nope.toml"));
}

#[test]
fn unknown_script_keys_are_rejected() {
    let err = Script::from_toml_str("[[insert]]\nparent = 0\nweight = 3").unwrap_err();
    assert!(format!("{err:#}").contains("weight"));
}

#[test]
fn foreign_caller_steps_are_refused() {
    let script = Script::from_toml_str(
        "[[insert]]\nparent = 0\ncaller = \"someone\"\n[[insert]]\nparent = 0",
    )
    .unwrap();
    let outcome = replay(&script).unwrap();
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.created, vec![NodeId::new(1)]);
    assert_eq!(script.index.controller, Identity::new("common-colony"));
}

#[test]
fn command_handlers_run() {
    let (_dir, path) = write_script(MIDDLE_OF_TREE);

    handle_replay_command(ReplayArgs {
        script: path.clone(),
        json: true,
    })
    .unwrap();
    handle_replay_command(ReplayArgs {
        script: path.clone(),
        json: false,
    })
    .unwrap();
    handle_query_command(QueryArgs {
        script: path.clone(),
        node: 6,
        offset: Some(2),
        with: Some(5),
    })
    .unwrap();
    handle_chain_command(ChainArgs {
        length: 9,
        json: false,
    })
    .unwrap();
}

#[test]
fn query_past_root_fails() {
    let (_dir, path) = write_script(MIDDLE_OF_TREE);
    let err = handle_query_command(QueryArgs {
        script: path,
        node: 3,
        offset: Some(3),
        with: None,
    })
    .unwrap_err();
    assert!(format!("{err:#}").contains("3 levels up"));
}

#[test]
fn zero_length_chain_rejected() {
    assert!(handle_chain_command(ChainArgs {
        length: 0,
        json: true,
    })
    .is_err());
}

#[test]
fn oversized_chain_rejected() {
    let err = handle_chain_command(ChainArgs {
        length: u64::MAX,
        json: true,
    })
    .unwrap_err();
    assert!(format!("{err:#}").contains("at most"));
    assert!(handle_chain_command(ChainArgs {
        length: MAX_CAPACITY_HINT as u64 + 1,
        json: true,
    })
    .is_err());
}
