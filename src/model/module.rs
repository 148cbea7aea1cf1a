//! Module-level documentation nodes.

use super::{StatementDoc, TypeDoc};
use serde::{Deserialize, Serialize};

/// Documentation for one YANG module.
///
/// The upstream toolchain has already resolved typedefs, identities and
/// leafrefs; this is the annotated result, ready for rendering. Typedefs
/// and identities keep the order the toolchain emitted them in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModuleDoc {
    /// Module name (document key)
    pub name: String,
    /// Module description statement
    #[serde(default)]
    pub description: Option<String>,
    /// Module namespace URI
    #[serde(default)]
    pub namespace: Option<String>,
    /// Module prefix
    #[serde(default)]
    pub prefix: Option<String>,
    /// Typedefs declared at module level
    #[serde(default)]
    pub typedefs: Vec<Typedef>,
    /// Identities declared in this module (bases and derived alike)
    #[serde(default)]
    pub identities: Vec<Identity>,
    /// Top-level data nodes
    #[serde(default)]
    pub children: Vec<StatementDoc>,
}

impl ModuleDoc {
    /// Creates a new empty module with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Creates a module with a description.
    pub fn with_description(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
            ..Self::default()
        }
    }

    /// Adds a typedef to this module.
    pub fn push_typedef(&mut self, typedef: Typedef) {
        self.typedefs.push(typedef);
    }

    /// Adds an identity to this module.
    pub fn push_identity(&mut self, identity: Identity) {
        self.identities.push(identity);
    }

    /// Adds a top-level data node to this module.
    pub fn push_child(&mut self, child: StatementDoc) {
        self.children.push(child);
    }

    /// Returns the identities that do not derive from another identity.
    pub fn base_identities(&self) -> impl Iterator<Item = &Identity> {
        self.identities.iter().filter(|id| id.is_base())
    }

    /// Returns the identities derived from the given base, in declaration
    /// order.
    pub fn derived_from<'a>(&'a self, base: &'a str) -> impl Iterator<Item = &'a Identity> {
        self.identities
            .iter()
            .filter(move |id| id.base.as_deref() == Some(base))
    }

    /// Returns the total number of data nodes in this module, including
    /// nested ones.
    pub fn statement_count(&self) -> usize {
        self.children.iter().map(|c| c.subtree_count()).sum()
    }
}

/// A resolved typedef.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Typedef {
    /// Typedef name
    pub name: String,
    /// Description statement
    #[serde(default)]
    pub description: Option<String>,
    /// The resolved underlying type
    pub type_info: TypeDoc,
}

impl Typedef {
    /// Creates a new typedef.
    pub fn new(name: impl Into<String>, type_info: TypeDoc) -> Self {
        Self {
            name: name.into(),
            description: None,
            type_info,
        }
    }

    /// Creates a typedef with a description.
    pub fn with_description(
        name: impl Into<String>,
        description: impl Into<String>,
        type_info: TypeDoc,
    ) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
            type_info,
        }
    }
}

/// An identity declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    /// Identity name
    pub name: String,
    /// Description statement
    #[serde(default)]
    pub description: Option<String>,
    /// Base identity this one derives from, if any
    #[serde(default)]
    pub base: Option<String>,
}

impl Identity {
    /// Creates a base identity.
    pub fn base(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
            base: None,
        }
    }

    /// Creates an identity derived from the given base.
    pub fn derived(
        name: impl Into<String>,
        base: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
            base: Some(base.into()),
        }
    }

    /// Returns true if this identity does not derive from another.
    pub fn is_base(&self) -> bool {
        self.base.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn routing_module() -> ModuleDoc {
        let mut module = ModuleDoc::new("example-routing");
        module.push_identity(Identity::base("protocol", "Routing protocol base"));
        module.push_identity(Identity::derived("bgp", "protocol", "Border Gateway Protocol"));
        module.push_identity(Identity::derived("ospf", "protocol", "Open Shortest Path First"));
        module.push_identity(Identity::base("address-family", "Address family base"));
        module
    }

    #[test]
    fn test_base_identities() {
        let module = routing_module();
        let bases: Vec<&str> = module.base_identities().map(|id| id.name.as_str()).collect();
        assert_eq!(bases, vec!["protocol", "address-family"]);
    }

    #[test]
    fn test_derived_from_preserves_order() {
        let module = routing_module();
        let derived: Vec<&str> = module.derived_from("protocol").map(|id| id.name.as_str()).collect();
        assert_eq!(derived, vec!["bgp", "ospf"]);
        assert_eq!(module.derived_from("address-family").count(), 0);
    }

    #[test]
    fn test_is_base() {
        assert!(Identity::base("protocol", "Routing protocol base").is_base());
        assert!(!Identity::derived("bgp", "protocol", "Border Gateway Protocol").is_base());
    }
}
