//! Node descriptor builder: per-leaf attribute summary.

use crate::schema::{Statement, StmtKind};

/// Descriptive attributes of one leaf-like schema node.
///
/// Built fresh per node visit and consumed immediately to render its
/// record. Absent substatements leave their field `None`; there are no
/// error cases here.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NodeDescriptor<'a> {
    /// Declared type name.
    pub type_name: Option<&'a str>,
    /// Rendered enum entries, in document order (empty unless the type is
    /// `enumeration`).
    pub enums: Vec<String>,
    /// Argument of the type's `range` substatement, or of its `length`
    /// substatement when no range exists. Range takes precedence.
    pub range_or_length: Option<&'a str>,
    pub fraction_digits: Option<&'a str>,
    pub when: Option<&'a str>,
    pub units: Option<&'a str>,
    pub mandatory: Option<&'a str>,
    pub config: Option<&'a str>,
    pub status: Option<&'a str>,
    pub default_value: Option<&'a str>,
    pub description: Option<&'a str>,
    pub if_feature: Option<&'a str>,
}

impl<'a> NodeDescriptor<'a> {
    /// Summarize a leaf-like node.
    pub fn build(node: &'a Statement) -> Self {
        let mut descriptor = Self::default();

        if let Some(type_stmt) = node.find_one(StmtKind::Type) {
            descriptor.type_name = type_stmt.arg.as_deref();

            if type_stmt.arg.as_deref() == Some("enumeration") {
                descriptor.enums = type_stmt
                    .find_all(StmtKind::Enum)
                    .map(enum_entry)
                    .collect();
            }

            descriptor.range_or_length = type_stmt
                .arg_of(StmtKind::Range)
                .or_else(|| type_stmt.arg_of(StmtKind::Length));
            descriptor.fraction_digits = type_stmt.arg_of(StmtKind::FractionDigits);
        }

        descriptor.when = node.arg_of(StmtKind::When);
        descriptor.units = node.arg_of(StmtKind::Units);
        descriptor.mandatory = node.arg_of(StmtKind::Mandatory);
        descriptor.config = node.arg_of(StmtKind::Config);
        descriptor.status = node.arg_of(StmtKind::Status);
        descriptor.default_value = node.arg_of(StmtKind::Default);
        descriptor.description = node.arg_of(StmtKind::Description);
        descriptor.if_feature = node.arg_of(StmtKind::IfFeature);

        descriptor
    }
}

/// Render one `enum` substatement.
///
/// `<name> (value=<v>, description=<d>)`, dropping whichever clause is
/// absent; bare `<name>` when neither is present.
fn enum_entry(stmt: &Statement) -> String {
    let name = stmt.name();
    let value = stmt.arg_of(StmtKind::Value).unwrap_or("");
    let description = stmt.arg_of(StmtKind::Description).unwrap_or("");

    match (value.is_empty(), description.is_empty()) {
        (false, false) => format!("{name} (value={value}, description={description})"),
        (false, true) => format!("{name} (value={value})"),
        (true, false) => format!("{name} (description={description})"),
        (true, true) => name.to_string(),
    }
}
