//! Statement kinds — the keyword vocabulary the engine dispatches on.

/// Kind of a YANG statement, derived from its keyword.
///
/// Extension keywords (`prefix:keyword`) and keywords the engine has no
/// rule for map to [`StmtKind::Other`]; the raw keyword text stays
/// available on the statement itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StmtKind {
    // =========================================================================
    // MODULE STRUCTURE
    // =========================================================================
    Module,
    Submodule,
    Namespace,
    Prefix,
    Import,
    Include,
    Revision,
    Organization,
    Contact,
    Feature,

    // =========================================================================
    // DATA DEFINITION
    // =========================================================================
    Container,
    List,
    Leaf,
    LeafList,
    Choice,
    Case,
    Anydata,
    Anyxml,
    Uses,
    Grouping,
    Typedef,

    // =========================================================================
    // OPERATIONS
    // =========================================================================
    Rpc,
    Notification,
    Input,
    Output,
    Action,

    // =========================================================================
    // TYPE SYSTEM
    // =========================================================================
    Type,
    Enum,
    Range,
    Length,
    FractionDigits,
    Value,
    Pattern,

    // =========================================================================
    // NODE PROPERTIES
    // =========================================================================
    Description,
    Reference,
    Default,
    Units,
    Mandatory,
    Config,
    Status,
    Key,
    When,
    IfFeature,
    Must,
    Presence,
    MinElements,
    MaxElements,

    /// Any keyword without a dedicated variant.
    Other,
}

impl StmtKind {
    /// Map a statement keyword to its kind.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "module" => Self::Module,
            "submodule" => Self::Submodule,
            "namespace" => Self::Namespace,
            "prefix" => Self::Prefix,
            "import" => Self::Import,
            "include" => Self::Include,
            "revision" => Self::Revision,
            "organization" => Self::Organization,
            "contact" => Self::Contact,
            "feature" => Self::Feature,
            "container" => Self::Container,
            "list" => Self::List,
            "leaf" => Self::Leaf,
            "leaf-list" => Self::LeafList,
            "choice" => Self::Choice,
            "case" => Self::Case,
            "anydata" => Self::Anydata,
            "anyxml" => Self::Anyxml,
            "uses" => Self::Uses,
            "grouping" => Self::Grouping,
            "typedef" => Self::Typedef,
            "rpc" => Self::Rpc,
            "notification" => Self::Notification,
            "input" => Self::Input,
            "output" => Self::Output,
            "action" => Self::Action,
            "type" => Self::Type,
            "enum" => Self::Enum,
            "range" => Self::Range,
            "length" => Self::Length,
            "fraction-digits" => Self::FractionDigits,
            "value" => Self::Value,
            "pattern" => Self::Pattern,
            "description" => Self::Description,
            "reference" => Self::Reference,
            "default" => Self::Default,
            "units" => Self::Units,
            "mandatory" => Self::Mandatory,
            "config" => Self::Config,
            "status" => Self::Status,
            "key" => Self::Key,
            "when" => Self::When,
            "if-feature" => Self::IfFeature,
            "must" => Self::Must,
            "presence" => Self::Presence,
            "min-elements" => Self::MinElements,
            "max-elements" => Self::MaxElements,
            _ => Self::Other,
        }
    }

    /// Whether statements of this kind belong to the structural child view
    /// the engine traverses ([`super::Statement::children`]).
    ///
    /// Grouping and typedef definitions are deliberately not structural:
    /// their bodies are reachable only through explicit lookup, never
    /// through traversal.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::Container
                | Self::List
                | Self::Leaf
                | Self::LeafList
                | Self::Choice
                | Self::Case
                | Self::Anydata
                | Self::Anyxml
                | Self::Uses
                | Self::Rpc
                | Self::Notification
                | Self::Input
                | Self::Output
                | Self::Action
        )
    }
}
