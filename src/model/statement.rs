//! Data node statements and their keywords.

use super::TypeDoc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Documentation for one data node in the schema tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementDoc {
    /// YANG keyword of this node
    pub kind: StatementKind,
    /// Full schema path, with namespace prefixes (`/oc-if:interfaces/...`)
    pub path: String,
    /// Description statement
    #[serde(default)]
    pub description: Option<String>,
    /// True if this leaf is a key of its enclosing list
    #[serde(default)]
    pub is_key: bool,
    /// Resolved type, for leaf and leaf-list nodes
    #[serde(default)]
    pub type_info: Option<TypeDoc>,
    /// Child data nodes
    #[serde(default)]
    pub children: Vec<StatementDoc>,
}

impl StatementDoc {
    /// Creates a new statement with no type or children.
    pub fn new(kind: StatementKind, path: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            description: None,
            is_key: false,
            type_info: None,
            children: Vec::new(),
        }
    }

    /// Creates a leaf statement with a resolved type.
    pub fn leaf(path: impl Into<String>, type_info: TypeDoc) -> Self {
        Self {
            kind: StatementKind::Leaf,
            path: path.into(),
            description: None,
            is_key: false,
            type_info: Some(type_info),
            children: Vec::new(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks this leaf as a list key.
    pub fn as_key(mut self) -> Self {
        self.is_key = true;
        self
    }

    /// Adds a child data node.
    pub fn push_child(&mut self, child: StatementDoc) {
        self.children.push(child);
    }

    /// Returns the number of nodes in this subtree, including self.
    pub fn subtree_count(&self) -> usize {
        1 + self.children.iter().map(|c| c.subtree_count()).sum::<usize>()
    }
}

/// YANG keywords that appear as data nodes in the documented tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatementKind {
    Module,
    Container,
    List,
    Leaf,
    LeafList,
    Choice,
    Case,
    Uses,
    Rpc,
    Action,
    Notification,
    Input,
    Output,
    Anydata,
    Anyxml,
}

impl StatementKind {
    /// Returns the YANG keyword spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatementKind::Module => "module",
            StatementKind::Container => "container",
            StatementKind::List => "list",
            StatementKind::Leaf => "leaf",
            StatementKind::LeafList => "leaf-list",
            StatementKind::Choice => "choice",
            StatementKind::Case => "case",
            StatementKind::Uses => "uses",
            StatementKind::Rpc => "rpc",
            StatementKind::Action => "action",
            StatementKind::Notification => "notification",
            StatementKind::Input => "input",
            StatementKind::Output => "output",
            StatementKind::Anydata => "anydata",
            StatementKind::Anyxml => "anyxml",
        }
    }

    /// Structural nodes that are documented by their path alone, with no
    /// description or type block.
    pub fn is_path_only(&self) -> bool {
        matches!(
            self,
            StatementKind::Choice
                | StatementKind::Case
                | StatementKind::Uses
                | StatementKind::Input
                | StatementKind::Output
        )
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
