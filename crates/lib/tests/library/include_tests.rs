//! Declaring-file identity across included files.

use mods_lib::DeclError;

use super::common::TestTree;

#[test]
fn included_declarations_belong_to_included_file() {
  let tree = TestTree::new();
  tree.write(
    "MODS",
    r#"
      module { name = "app", srcs = { "main.go" }, deps = { "lib/net:net" } }
      include "lib/net/MODS"
    "#,
  );
  tree.write("lib/net/MODS", r#"module { name = "net", srcs = { "net.go" } }"#);

  let ws = tree.eval().unwrap();
  assert_eq!(ws.get_files("lib/net/MODS", "net").unwrap(), vec!["net.go"]);
  assert!(ws.get_module("MODS", "net").is_none());
  assert_eq!(ws.get_files("MODS", "app").unwrap(), vec!["main.go"]);
}

#[test]
fn same_name_in_two_files_gives_two_modules() {
  let tree = TestTree::new();
  tree.write(
    "MODS",
    r#"
      module { name = "util", srcs = { "util.go" } }
      include "sub/MODS"
    "#,
  );
  tree.write("sub/MODS", r#"module { name = "util", srcs = { "sub_util.go" } }"#);

  let ws = tree.eval().unwrap();
  assert_eq!(ws.len(), 2);
  assert_eq!(ws.get_files("MODS", "util").unwrap(), vec!["util.go"]);
  assert_eq!(ws.get_files("sub/MODS", "util").unwrap(), vec!["sub_util.go"]);
}

#[test]
fn declarations_after_include_return_to_outer_file() {
  let tree = TestTree::new();
  tree.write(
    "MODS",
    r#"
      include "sub/MODS"
      module { name = "after", srcs = {} }
    "#,
  );
  tree.write("sub/MODS", r#"module { name = "inner", srcs = {} }"#);

  let ws = tree.eval().unwrap();
  assert!(ws.get_module("MODS", "after").is_some());
  assert!(ws.get_module("sub/MODS", "inner").is_some());
}

#[test]
fn nested_includes_resolve_relative_to_includer() {
  let tree = TestTree::new();
  tree.write("MODS", r#"include "a/MODS""#);
  tree.write("a/MODS", r#"include "b/MODS""#);
  tree.write("a/b/MODS", r#"module { name = "leaf", srcs = { "leaf.go" } }"#);

  let ws = tree.eval().unwrap();
  assert_eq!(ws.get_files("a/b/MODS", "leaf").unwrap(), vec!["leaf.go"]);
}

#[test]
fn rules_defined_in_one_file_are_usable_in_another() {
  let tree = TestTree::new();
  tree.write(
    "MODS",
    r#"
      include "rules/MODS"
      proto { name = "api", protos = { "api.proto" } }
    "#,
  );
  tree.write("rules/MODS", r#"proto = rule { attrs = { protos = attr.files() } }"#);

  let ws = tree.eval().unwrap();
  assert_eq!(ws.get_files("MODS", "api").unwrap(), vec!["api.proto"]);
}

#[test]
fn include_cycle_aborts_evaluation() {
  let tree = TestTree::new();
  tree.write("MODS", r#"include "sub/MODS""#);
  tree.write("sub/MODS", r#"include "../MODS""#);

  let err = tree.eval().unwrap_err();
  assert!(
    matches!(err.decl_error(), Some(DeclError::IncludeCycle { chain }) if chain.len() == 3),
    "got: {}",
    err
  );
}

#[test]
fn error_in_included_file_aborts_evaluation() {
  let tree = TestTree::new();
  tree.write(
    "MODS",
    r#"
      module { name = "ok", srcs = {} }
      include "sub/MODS"
    "#,
  );
  tree.write("sub/MODS", r#"module { name = "" }"#);

  let err = tree.eval().unwrap_err();
  assert_eq!(err.decl_error(), Some(&DeclError::MissingRequiredField));
}

#[test]
fn missing_include_is_an_error() {
  let tree = TestTree::new();
  tree.write("MODS", r#"include "nowhere/MODS""#);

  let err = tree.eval().unwrap_err();
  assert!(err.to_string().contains("cannot resolve"), "got: {}", err);
}

#[test]
fn helper_from_included_file_declares_into_that_file() {
  let tree = TestTree::new();
  tree.write(
    "MODS",
    r#"
      include "sub/MODS"
      go_library("x")
    "#,
  );
  tree.write(
    "sub/MODS",
    r#"
      function go_library(n)
        module { name = n, srcs = { n .. ".go" } }
      end
    "#,
  );

  let ws = tree.eval().unwrap();
  assert_eq!(ws.get_files("sub/MODS", "x").unwrap(), vec!["x.go"]);
  assert!(ws.get_module("MODS", "x").is_none());
}
