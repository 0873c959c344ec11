//! Node catalog walker tests: keypaths, record layout, traversal order.

#[path = "helpers/mod.rs"]
mod helpers;

use yangdoc::extract::node_catalog;

use helpers::module;

#[test]
fn minimal_module_yields_container_and_leaf_records() {
    let m = module(
        r#"module m {
             container top {
               leaf x { type string; description "d"; }
             }
           }"#,
    );
    let records = node_catalog(&m, "m.yang");
    assert_eq!(records.len(), 2, "one container record, one leaf record");

    assert_eq!(
        records[0].lines(),
        [
            "1.Keypath: top",
            "2.Type: container",
            "3.Module: m",
            "4.File: m.yang",
            "5.Description: N/A",
        ]
    );
    assert_eq!(
        records[1].lines(),
        [
            "1.Keypath: top/x",
            "2.Type: leaf (string)",
            "3.Module: m",
            "4.File: m.yang",
            "5.Description: d",
        ]
    );
}

#[test]
fn optional_leaf_fields_are_densely_numbered() {
    let m = module(
        r#"module m {
             leaf x {
               type string;
               units "ms";
               config false;
             }
           }"#,
    );
    let records = node_catalog(&m, "m.yang");
    assert_eq!(
        records[0].lines()[5..],
        ["6.Units: ms", "7.Config: false"],
        "omitted optional fields must leave no numbering gap"
    );
}

#[test]
fn leaf_optional_fields_follow_the_fixed_order() {
    let m = module(
        r#"module m {
             leaf x {
               if-feature ftr;
               when "../on";
               type int8 { range "1..5"; }
               default 2;
               units "s";
               mandatory true;
               config true;
               status current;
             }
           }"#,
    );
    let records = node_catalog(&m, "m.yang");
    assert_eq!(
        records[0].lines()[5..],
        [
            "6.if-feature: ftr",
            "7.when: ../on",
            "8.Default: 2",
            "9.Units: s",
            "10.Range/Length: 1..5",
            "11.Mandatory: true",
            "12.Config: true",
            "13.Status: current",
        ]
    );
}

#[test]
fn enumeration_leaf_gets_a_comma_joined_enum_field() {
    let m = module(
        r#"module m {
             leaf state {
               type enumeration {
                 enum up { value 1; }
                 enum down;
               }
             }
           }"#,
    );
    let records = node_catalog(&m, "m.yang");
    let last = records[0].lines().last().expect("leaf record has lines");
    assert_eq!(last, "6.Enum: up (value=1), down");
}

#[test]
fn list_records_carry_an_unnumbered_key_line() {
    let m = module(
        r#"module m {
             list servers {
               key name;
               description "server table";
               leaf name { type string; }
             }
           }"#,
    );
    let records = node_catalog(&m, "m.yang");
    assert_eq!(
        records[0].lines(),
        [
            "1.Keypath: servers",
            "2.Type: list",
            "3.Module: m",
            "4.File: m.yang",
            "5.Description: server table",
            "Key: name",
        ]
    );
    assert_eq!(records[1].lines()[0], "1.Keypath: servers/name");
}

#[test]
fn keyless_lists_and_leaf_lists_have_no_key_line() {
    let m = module(
        r#"module m {
             leaf-list tags { type string; }
           }"#,
    );
    let records = node_catalog(&m, "m.yang");
    assert_eq!(
        records[0].lines(),
        [
            "1.Keypath: tags",
            "2.Type: leaf-list",
            "3.Module: m",
            "4.File: m.yang",
            "5.Description: N/A",
        ]
    );
}

#[test]
fn rpc_interiors_are_walked_too() {
    // The walker does not special-case RPC subtrees: leaves inside
    // input/output blocks show up in the node catalog. The unnamed
    // input/output statements contribute no path segment.
    let m = module(
        r#"module m {
             rpc restart {
               input { leaf delay { type uint32; } }
               output { leaf status { type string; } }
             }
           }"#,
    );
    let records = node_catalog(&m, "m.yang");
    let keypaths: Vec<&str> = records
        .iter()
        .map(|r| r.lines()[0].trim_start_matches("1.Keypath: "))
        .collect();
    assert_eq!(keypaths, ["restart/delay", "restart/status"]);
}

#[test]
fn choice_and_case_contribute_segments_but_no_records() {
    let m = module(
        r#"module m {
             container c {
               choice transport {
                 case tcp { leaf port { type uint16; } }
               }
             }
           }"#,
    );
    let records = node_catalog(&m, "m.yang");
    let keypaths: Vec<&str> = records
        .iter()
        .map(|r| r.lines()[0].trim_start_matches("1.Keypath: "))
        .collect();
    assert_eq!(keypaths, ["c", "c/transport/tcp/port"]);
}

#[test]
fn traversal_is_depth_first_in_document_order() {
    let m = module(
        r#"module m {
             container a {
               leaf a1 { type string; }
               container b { leaf b1 { type string; } }
               leaf a2 { type string; }
             }
             leaf top { type string; }
           }"#,
    );
    let records = node_catalog(&m, "m.yang");
    let keypaths: Vec<&str> = records
        .iter()
        .map(|r| r.lines()[0].trim_start_matches("1.Keypath: "))
        .collect();
    assert_eq!(keypaths, ["a", "a/a1", "a/b", "a/b/b1", "a/a2", "top"]);
}

#[test]
fn rerunning_the_walker_is_byte_identical() {
    let m = module(
        r#"module m {
             container c { leaf x { type string; } }
             rpc r { input { leaf y { type string; } } }
           }"#,
    );
    let first = node_catalog(&m, "m.yang");
    let second = node_catalog(&m, "m.yang");
    assert_eq!(first, second);
}

#[test]
fn grouping_bodies_do_not_appear_as_node_records() {
    let m = module(
        r#"module m {
             grouping g { leaf hidden { type string; } }
             container c { uses g; }
           }"#,
    );
    let records = node_catalog(&m, "m.yang");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].lines()[0], "1.Keypath: c");
}
