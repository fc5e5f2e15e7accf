//! End-to-end declaration and query behavior.

use mods_lib::{DeclError, QueryError, evaluate_source};

use super::common::TestTree;

const ROOT: &str = r#"
module { name = "a", srcs = { "a.go", "b.go" }, deps = {} }
module { name = "b", srcs = {}, deps = { "a" } }
"#;

#[test]
fn files_of_a_module() {
  let tree = TestTree::new();
  tree.write("MODS", ROOT);
  let ws = tree.eval().unwrap();

  assert_eq!(ws.get_files("MODS", "a").unwrap(), vec!["a.go", "b.go"]);
}

#[test]
fn module_dependencies_are_not_expanded() {
  let tree = TestTree::new();
  tree.write("MODS", ROOT);
  let ws = tree.eval().unwrap();

  assert!(ws.get_files("MODS", "b").unwrap().is_empty());
  assert_eq!(ws.module_deps("MODS", "b").unwrap(), vec!["a"]);
}

#[test]
fn typed_module_references_are_recorded_but_not_followed() {
  let ws = evaluate_source(
    "MODS",
    r#"
      library = rule {
        attrs = { srcs = attr.files(), deps = attr.modules { types = { "lib", "bin" } } },
        type = { "lib" },
      }
      library { name = "base", srcs = { "base.go" } }
      library { name = "net", srcs = { "net.go" }, deps = { "base" } }
    "#,
  )
  .unwrap();

  let net = ws.get_module("MODS", "net").unwrap();
  assert_eq!(net.module_deps["deps"].types, vec!["lib", "bin"]);
  assert_eq!(net.module_deps["deps"].items, vec!["base"]);
  assert_eq!(ws.get_files("MODS", "net").unwrap(), vec!["net.go"]);
}

#[test]
fn last_declaration_wins() {
  let ws = evaluate_source(
    "MODS",
    r#"
      module { name = "a", srcs = { "one.go", "two.go" } }
      module { name = "a", srcs = { "three.go" } }
    "#,
  )
  .unwrap();

  assert_eq!(ws.len(), 1);
  assert_eq!(ws.get_files("MODS", "a").unwrap(), vec!["three.go"]);
}

#[test]
fn several_file_attributes_concatenate_by_attribute_name() {
  let ws = evaluate_source(
    "MODS",
    r#"
      asset = rule { attrs = { srcs = attr.files(), data = attr.files(), embed = attr.files() } }
      asset { name = "site", srcs = { "main.go" }, embed = { "index.html" }, data = { "b.json", "a.json" } }
    "#,
  )
  .unwrap();

  assert_eq!(
    ws.get_files("MODS", "site").unwrap(),
    vec!["b.json", "a.json", "index.html", "main.go"]
  );
}

#[test]
fn unknown_attribute_aborts_whole_evaluation() {
  let err = evaluate_source(
    "MODS",
    r#"
      module { name = "ok", srcs = { "ok.go" } }
      module { name = "bad", hdrs = { "bad.h" } }
    "#,
  )
  .unwrap_err();

  assert_eq!(err.decl_error(), Some(&DeclError::UnknownAttribute { key: "hdrs".to_string() }));
}

#[test]
fn missing_name_aborts_evaluation() {
  let err = evaluate_source("MODS", r#"module { srcs = { "a.go" } }"#).unwrap_err();
  assert_eq!(err.decl_error(), Some(&DeclError::MissingRequiredField));
}

#[test]
fn non_string_item_aborts_evaluation() {
  let err = evaluate_source("MODS", r#"module { name = "a", srcs = { "a.go", true } }"#).unwrap_err();
  assert!(matches!(
    err.decl_error(),
    Some(DeclError::ArgumentType { key, .. }) if key == "srcs"
  ));
}

#[test]
fn unknown_module_is_not_found() {
  let ws = evaluate_source("MODS", ROOT).unwrap();
  assert_eq!(
    ws.get_files("MODS", "zzz").unwrap_err(),
    QueryError::ModuleNotFound {
      file: "MODS".to_string(),
      name: "zzz".to_string(),
    }
  );
  // Identity includes the declaring file.
  assert!(ws.get_files("other/MODS", "a").is_err());
}

#[test]
fn separate_runs_are_isolated() {
  let first = evaluate_source("MODS", r#"module { name = "a", srcs = { "a.go" } }"#).unwrap();
  let second = evaluate_source("MODS", r#"module { name = "b", srcs = { "b.go" } }"#).unwrap();

  assert!(first.get_module("MODS", "b").is_none());
  assert!(second.get_module("MODS", "a").is_none());
}
