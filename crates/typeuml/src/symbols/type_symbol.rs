//! Type symbols
//!
//! A declared class, interface, enum (or anything else the provider reports)
//! together with its members and relationships.

use serde::{Deserialize, Serialize};

use super::{MemberSymbol, TypeRef};
use crate::core::{TypeKind, Visibility};

/// A declared type, as supplied by the symbol provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSymbol {
    /// Qualified display name; also the identity of the type
    pub name: TypeRef,
    #[serde(default)]
    pub kind: TypeKind,
    /// Only meaningful for classes
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    #[serde(default)]
    pub visibility: Visibility,
    /// Members in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<MemberSymbol>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<TypeRef>,
    /// Full transitive set of implemented interfaces, in reported order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<TypeRef>,
    /// Member names of an enum, in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enum_members: Vec<String>,
}

impl TypeSymbol {
    pub fn new(name: impl Into<TypeRef>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            is_abstract: false,
            visibility: Visibility::default(),
            members: Vec::new(),
            base: None,
            interfaces: Vec::new(),
            enum_members: Vec::new(),
        }
    }

    pub fn class(name: impl Into<TypeRef>) -> Self {
        Self::new(name, TypeKind::Class)
    }

    pub fn interface(name: impl Into<TypeRef>) -> Self {
        Self::new(name, TypeKind::Interface)
    }

    pub fn enumeration(name: impl Into<TypeRef>) -> Self {
        Self::new(name, TypeKind::Enum)
    }

    pub fn with_visibility(mut self, v: Visibility) -> Self {
        self.visibility = v;
        self
    }

    pub fn with_abstract(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn with_base(mut self, base: impl Into<TypeRef>) -> Self {
        self.base = Some(base.into());
        self
    }

    pub fn with_interface(mut self, interface: impl Into<TypeRef>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    pub fn with_member(mut self, member: impl Into<MemberSymbol>) -> Self {
        self.members.push(member.into());
        self
    }

    pub fn with_enum_member(mut self, name: impl Into<String>) -> Self {
        self.enum_members.push(name.into());
        self
    }

    /// Check whether `name` appears in this type's transitive interface set
    pub fn implements(&self, name: &str) -> bool {
        self.interfaces.iter().any(|i| i.as_str() == name)
    }
}
