//! Node catalog walker: one record per leaf, leaf-list, list, and
//! container, depth-first in document order.

use crate::schema::{Module, Statement, StmtKind};

use super::descriptor::NodeDescriptor;
use super::record::{Record, RecordBuilder};

/// Walk a module's schema tree and collect its node records.
///
/// Keypaths are slash-delimited from the module root, which itself
/// contributes no segment: a top-level node's keypath is its own name.
/// The walk descends every structural child unconditionally, so nodes
/// inside RPC input/output and notification bodies are documented here as
/// well. Nodes of other kinds produce no record but are still descended.
pub fn node_catalog(module: &Module, filename: &str) -> Vec<Record> {
    let mut records = Vec::new();
    for child in module.source.children() {
        walk(child, "", &module.name, filename, &mut records);
    }
    records
}

fn walk(
    node: &Statement,
    parent_path: &str,
    module_name: &str,
    filename: &str,
    records: &mut Vec<Record>,
) {
    // A nameless node cannot carry a keypath; it emits nothing but its
    // descendants are still visited.
    let path = if node.name().is_empty() {
        parent_path.to_string()
    } else if parent_path.is_empty() {
        node.name().to_string()
    } else {
        format!("{parent_path}/{}", node.name())
    };

    if !node.name().is_empty() {
        match node.kind {
            StmtKind::Leaf => records.push(leaf_record(node, &path, module_name, filename)),
            StmtKind::List => {
                records.push(compound_record(node, "list", &path, module_name, filename, true));
            }
            StmtKind::LeafList => {
                records.push(compound_record(
                    node, "leaf-list", &path, module_name, filename, true,
                ));
            }
            StmtKind::Container => {
                records.push(compound_record(
                    node, "container", &path, module_name, filename, false,
                ));
            }
            _ => {}
        }
    }

    for child in node.children() {
        walk(child, &path, module_name, filename, records);
    }
}

fn leaf_record(node: &Statement, path: &str, module_name: &str, filename: &str) -> Record {
    let info = NodeDescriptor::build(node);

    let mut builder = RecordBuilder::new();
    builder
        .field("Keypath", path)
        .field("Type", &format!("leaf ({})", info.type_name.unwrap_or("unknown")))
        .field("Module", module_name)
        .field("File", filename)
        .field("Description", info.description.unwrap_or("N/A"));

    if let Some(feature) = info.if_feature {
        builder.field("if-feature", feature);
    }
    if let Some(when) = info.when {
        builder.field("when", when);
    }
    if let Some(default) = info.default_value {
        builder.field("Default", default);
    }
    if let Some(units) = info.units {
        builder.field("Units", units);
    }
    if let Some(range) = info.range_or_length {
        builder.field("Range/Length", range);
    }
    if let Some(digits) = info.fraction_digits {
        builder.field("Fraction Digits", digits);
    }
    if let Some(mandatory) = info.mandatory {
        builder.field("Mandatory", mandatory);
    }
    if let Some(config) = info.config {
        builder.field("Config", config);
    }
    if let Some(status) = info.status {
        builder.field("Status", status);
    }
    if !info.enums.is_empty() {
        builder.field("Enum", &info.enums.join(", "));
    }

    builder.finish()
}

/// Record for a list, leaf-list, or container.
///
/// Lists and leaf-lists additionally carry an unnumbered `Key:` line when
/// a non-empty `key` substatement exists.
fn compound_record(
    node: &Statement,
    type_label: &str,
    path: &str,
    module_name: &str,
    filename: &str,
    keyed: bool,
) -> Record {
    let description = node.arg_of(StmtKind::Description).unwrap_or("N/A");

    let mut builder = RecordBuilder::new();
    builder
        .field("Keypath", path)
        .field("Type", type_label)
        .field("Module", module_name)
        .field("File", filename)
        .field("Description", description);

    if keyed {
        if let Some(key) = node.arg_of(StmtKind::Key).filter(|k| !k.is_empty()) {
            builder.line(format!("Key: {key}"));
        }
    }

    builder.finish()
}
