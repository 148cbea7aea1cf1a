//! Resolved type information attached to leaves and typedefs.

use serde::{Deserialize, Serialize};

/// YANG built-in integer type names.
pub const INTEGER_TYPES: &[&str] = &[
    "int8", "int16", "int32", "int64", "uint8", "uint16", "uint32", "uint64",
];

/// Resolved type of a leaf, leaf-list or typedef.
///
/// The toolchain has already chased typedef chains; `name` is the effective
/// built-in or derived type name and the remaining fields hold whatever the
/// type carries (enum values, restrictions, union members).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeDoc {
    /// Effective type name (`string`, `uint16`, `enumeration`, ...)
    pub name: String,
    /// Values of an enumeration type, in declaration order
    #[serde(default)]
    pub enums: Vec<EnumValue>,
    /// Restrictions carried by the type (pattern, range, length)
    #[serde(default)]
    pub restrictions: Vec<Restriction>,
    /// Base identity, for identityref types
    #[serde(default)]
    pub base: Option<String>,
    /// Target path, for leafref types
    #[serde(default)]
    pub leafref_path: Option<String>,
    /// Member types, for union types
    #[serde(default)]
    pub union_types: Vec<TypeDoc>,
}

impl TypeDoc {
    /// Creates a plain type with no annotations.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Creates an enumeration type from (name, description) pairs.
    pub fn enumeration<I, S, D>(values: I) -> Self
    where
        I: IntoIterator<Item = (S, D)>,
        S: Into<String>,
        D: Into<String>,
    {
        Self {
            name: "enumeration".to_string(),
            enums: values
                .into_iter()
                .map(|(name, desc)| EnumValue::new(name, desc))
                .collect(),
            ..Self::default()
        }
    }

    /// Creates an identityref type with the given base.
    pub fn identityref(base: impl Into<String>) -> Self {
        Self {
            name: "identityref".to_string(),
            base: Some(base.into()),
            ..Self::default()
        }
    }

    /// Creates a leafref type with the given target path.
    pub fn leafref(path: impl Into<String>) -> Self {
        Self {
            name: "leafref".to_string(),
            leafref_path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Creates a union of the given member types.
    pub fn union(members: impl IntoIterator<Item = TypeDoc>) -> Self {
        Self {
            name: "union".to_string(),
            union_types: members.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Adds a restriction.
    pub fn with_restriction(mut self, restriction: Restriction) -> Self {
        self.restrictions.push(restriction);
        self
    }

    /// Returns true if this is one of the YANG built-in integer types.
    pub fn is_integer(&self) -> bool {
        INTEGER_TYPES.contains(&self.name.as_str())
    }

    /// Returns true if this is a union type.
    pub fn is_union(&self) -> bool {
        self.name == "union"
    }

    /// Looks up a restriction of the given kind.
    pub fn restriction(&self, kind: RestrictionKind) -> Option<&Restriction> {
        self.restrictions.iter().find(|r| r.kind() == kind)
    }
}

/// One value of an enumeration type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValue {
    /// Enum value name
    pub name: String,
    /// Description statement
    #[serde(default)]
    pub description: String,
}

impl EnumValue {
    /// Creates a new enum value.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A restriction attached to a type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum Restriction {
    /// Regex pattern on string types
    Pattern(String),
    /// Numeric range on integer and decimal types
    Range(String),
    /// Length bound on string and binary types
    Length(String),
}

impl Restriction {
    /// Returns the restriction kind.
    pub fn kind(&self) -> RestrictionKind {
        match self {
            Restriction::Pattern(_) => RestrictionKind::Pattern,
            Restriction::Range(_) => RestrictionKind::Range,
            Restriction::Length(_) => RestrictionKind::Length,
        }
    }

    /// Returns the label used in rendered restriction tables.
    pub fn label(&self) -> &'static str {
        match self {
            Restriction::Pattern(_) => "pattern",
            Restriction::Range(_) => "range",
            Restriction::Length(_) => "length",
        }
    }

    /// Returns the restriction argument as written in the schema.
    pub fn value(&self) -> &str {
        match self {
            Restriction::Pattern(v) | Restriction::Range(v) | Restriction::Length(v) => v,
        }
    }
}

/// Kind tag for [`Restriction`] lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestrictionKind {
    Pattern,
    Range,
    Length,
}
