//! Notification catalog extractor.

use crate::schema::{GroupingIndex, Module, StmtKind};

use super::record::{Record, RecordBuilder};
use super::structure::render_structure;

/// Build one record per module-level `notification` statement.
///
/// The notification's own children are rendered into a `Fields:` section,
/// omitted entirely when the rendering yields no lines.
pub fn notification_catalog(module: &Module, filename: &str) -> Vec<Record> {
    let groupings = GroupingIndex::collect(&module.source);
    let mut records = Vec::new();

    for notification in module.source.find_all(StmtKind::Notification) {
        let description = notification
            .arg_of(StmtKind::Description)
            .filter(|d| !d.is_empty())
            .unwrap_or("N/A");

        let mut builder = RecordBuilder::new();
        builder
            .field("Name", notification.name())
            .field("Type", "Notification")
            .field("Module", &module.name)
            .field("File", filename)
            .field("Description", description);

        if let Some(feature) = notification
            .arg_of(StmtKind::IfFeature)
            .filter(|f| !f.is_empty())
        {
            builder.field("if-feature", feature);
        }

        let fields = render_structure(notification, "  ", &groupings);
        if !fields.is_empty() {
            builder.section("Fields");
            builder.extend(fields);
        }

        records.push(builder.finish());
    }

    records
}
