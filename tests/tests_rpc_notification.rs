//! RPC and notification extractor tests.

#[path = "helpers/mod.rs"]
mod helpers;

use yangdoc::extract::{notification_catalog, rpc_catalog};

use helpers::module;

#[test]
fn rpc_record_header_and_sections() {
    let m = module(
        r#"module m {
             rpc restart {
               description "restart the device";
               input { leaf delay { type uint32; description "seconds"; } }
               output { leaf status { type string; } }
             }
           }"#,
    );
    let records = rpc_catalog(&m, "m.yang");
    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].lines(),
        [
            "1.Name: restart",
            "2.Type: RPC",
            "3.Module: m",
            "4.File: m.yang",
            "5.Description: restart the device",
            "6.Input:",
            "  - delay (type: uint32) — seconds",
            "7.Output:",
            "  - status (type: string)",
        ]
    );
}

#[test]
fn missing_description_renders_na() {
    let m = module("module m { rpc ping; }");
    let records = rpc_catalog(&m, "m.yang");
    assert_eq!(records[0].lines()[4], "5.Description: N/A");
}

#[test]
fn absent_input_and_output_omit_their_sections() {
    let m = module("module m { rpc ping; }");
    let records = rpc_catalog(&m, "m.yang");
    assert!(
        records[0].lines().iter().all(|l| !l.contains("Input:")),
        "no input block means no Input section"
    );
    assert!(records[0].lines().iter().all(|l| !l.contains("Output:")));
}

#[test]
fn empty_input_block_gets_a_placeholder() {
    // An empty block is distinct from a missing one: the section header
    // still appears, followed by the placeholder line.
    let m = module("module m { rpc reset { input; output { } } }");
    let records = rpc_catalog(&m, "m.yang");
    assert_eq!(
        records[0].lines()[5..],
        [
            "6.Input:",
            "  - (no input fields)",
            "7.Output:",
            "  - (no output fields)",
        ]
    );
}

#[test]
fn if_feature_shifts_section_numbering() {
    let m = module(
        r#"module m {
             rpc reset { if-feature ftr; input { } }
           }"#,
    );
    let records = rpc_catalog(&m, "m.yang");
    assert_eq!(
        records[0].lines()[5..],
        ["6.if-feature: ftr", "7.Input:", "  - (no input fields)"]
    );
}

#[test]
fn only_module_level_rpcs_are_discovered() {
    let m = module(
        r#"module m {
             rpc top;
             container c { action nested; }
           }"#,
    );
    let records = rpc_catalog(&m, "m.yang");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].lines()[0], "1.Name: top");
}

#[test]
fn rpc_input_expands_groupings() {
    let m = module(
        r#"module m {
             grouping target { leaf host { type string; } }
             rpc connect { input { uses target; } }
           }"#,
    );
    let records = rpc_catalog(&m, "m.yang");
    assert_eq!(
        records[0].lines()[5..],
        [
            "6.Input:",
            "  - uses target (expands to:)",
            "    - host (type: string)",
        ]
    );
}

#[test]
fn notification_record_with_fields() {
    let m = module(
        r#"module m {
             notification link-down {
               description "link lost";
               if-feature ftr;
               leaf if-name { type string; }
             }
           }"#,
    );
    let records = notification_catalog(&m, "m.yang");
    assert_eq!(
        records[0].lines(),
        [
            "1.Name: link-down",
            "2.Type: Notification",
            "3.Module: m",
            "4.File: m.yang",
            "5.Description: link lost",
            "6.if-feature: ftr",
            "7.Fields:",
            "  - if-name (type: string)",
        ]
    );
}

#[test]
fn fieldless_notification_omits_the_fields_section() {
    let m = module("module m { notification heartbeat; }");
    let records = notification_catalog(&m, "m.yang");
    assert_eq!(
        records[0].lines(),
        [
            "1.Name: heartbeat",
            "2.Type: Notification",
            "3.Module: m",
            "4.File: m.yang",
            "5.Description: N/A",
        ]
    );
}

#[test]
fn notification_fields_come_from_its_own_children() {
    let m = module(
        r#"module m {
             grouping alarm { leaf severity { type string; } }
             notification fault { uses alarm; }
           }"#,
    );
    let records = notification_catalog(&m, "m.yang");
    assert_eq!(
        records[0].lines()[5..],
        [
            "6.Fields:",
            "  - uses alarm (expands to:)",
            "    - severity (type: string)",
        ]
    );
}
