//! RPC catalog extractor.

use crate::schema::{GroupingIndex, Module, StmtKind};

use super::record::{Record, RecordBuilder};
use super::structure::render_structure;

/// Build one record per module-level `rpc` statement.
///
/// RPCs nested deeper in the tree are not discovered. An `Input:` /
/// `Output:` section is present exactly when the corresponding block
/// exists on the RPC; a block that exists but renders no fields gets a
/// placeholder line instead of nothing, which keeps the two cases
/// distinguishable in the report.
pub fn rpc_catalog(module: &Module, filename: &str) -> Vec<Record> {
    let groupings = GroupingIndex::collect(&module.source);
    let mut records = Vec::new();

    for rpc in module.source.find_all(StmtKind::Rpc) {
        let description = rpc
            .arg_of(StmtKind::Description)
            .filter(|d| !d.is_empty())
            .unwrap_or("N/A");

        let mut builder = RecordBuilder::new();
        builder
            .field("Name", rpc.name())
            .field("Type", "RPC")
            .field("Module", &module.name)
            .field("File", filename)
            .field("Description", description);

        if let Some(feature) = rpc.arg_of(StmtKind::IfFeature).filter(|f| !f.is_empty()) {
            builder.field("if-feature", feature);
        }

        if let Some(input) = rpc.find_one(StmtKind::Input) {
            let fields = render_structure(input, "  ", &groupings);
            builder.section("Input");
            if fields.is_empty() {
                builder.line("  - (no input fields)");
            } else {
                builder.extend(fields);
            }
        }

        if let Some(output) = rpc.find_one(StmtKind::Output) {
            let fields = render_structure(output, "  ", &groupings);
            builder.section("Output");
            if fields.is_empty() {
                builder.line("  - (no output fields)");
            } else {
                builder.extend(fields);
            }
        }

        records.push(builder.finish());
    }

    records
}
