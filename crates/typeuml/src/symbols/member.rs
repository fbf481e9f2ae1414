//! Member symbols
//!
//! Fields, methods and properties of a declared type.

use serde::{Deserialize, Serialize};

use super::TypeRef;
use crate::core::{MethodKind, Visibility};

/// A field declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSymbol {
    pub name: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
}

impl FieldSymbol {
    pub fn new(name: impl Into<String>, type_ref: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::default(),
            type_ref: type_ref.into(),
        }
    }

    pub fn with_visibility(mut self, v: Visibility) -> Self {
        self.visibility = v;
        self
    }
}

/// A method parameter: its type and its name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    pub name: String,
}

impl Parameter {
    pub fn new(type_ref: impl Into<TypeRef>, name: impl Into<String>) -> Self {
        Self {
            type_ref: type_ref.into(),
            name: name.into(),
        }
    }
}

/// A method declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodSymbol {
    pub name: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub method_kind: MethodKind,
    /// `None` means the method returns nothing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<TypeRef>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

impl MethodSymbol {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::default(),
            method_kind: MethodKind::default(),
            return_type: None,
            parameters: Vec::new(),
        }
    }

    pub fn with_visibility(mut self, v: Visibility) -> Self {
        self.visibility = v;
        self
    }

    pub fn with_kind(mut self, kind: MethodKind) -> Self {
        self.method_kind = kind;
        self
    }

    pub fn returning(mut self, t: impl Into<TypeRef>) -> Self {
        self.return_type = Some(t.into());
        self
    }

    pub fn with_parameter(mut self, type_ref: impl Into<TypeRef>, name: impl Into<String>) -> Self {
        self.parameters.push(Parameter::new(type_ref, name));
        self
    }
}

/// Accessor (getter or setter) of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Accessor {
    #[serde(default)]
    pub visibility: Visibility,
}

impl Accessor {
    pub fn new(visibility: Visibility) -> Self {
        Self { visibility }
    }
}

/// A property declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySymbol {
    pub name: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub getter: Option<Accessor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setter: Option<Accessor>,
}

impl PropertySymbol {
    pub fn new(name: impl Into<String>, type_ref: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::default(),
            type_ref: type_ref.into(),
            getter: None,
            setter: None,
        }
    }

    pub fn with_visibility(mut self, v: Visibility) -> Self {
        self.visibility = v;
        self
    }

    pub fn with_getter(mut self, v: Visibility) -> Self {
        self.getter = Some(Accessor::new(v));
        self
    }

    pub fn with_setter(mut self, v: Visibility) -> Self {
        self.setter = Some(Accessor::new(v));
        self
    }
}

/// A member of a declared type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MemberSymbol {
    Field(FieldSymbol),
    Method(MethodSymbol),
    Property(PropertySymbol),
}

impl MemberSymbol {
    pub fn name(&self) -> &str {
        match self {
            MemberSymbol::Field(f) => &f.name,
            MemberSymbol::Method(m) => &m.name,
            MemberSymbol::Property(p) => &p.name,
        }
    }

    pub fn visibility(&self) -> Visibility {
        match self {
            MemberSymbol::Field(f) => f.visibility,
            MemberSymbol::Method(m) => m.visibility,
            MemberSymbol::Property(p) => p.visibility,
        }
    }
}

impl From<FieldSymbol> for MemberSymbol {
    fn from(f: FieldSymbol) -> Self {
        MemberSymbol::Field(f)
    }
}

impl From<MethodSymbol> for MemberSymbol {
    fn from(m: MethodSymbol) -> Self {
        MemberSymbol::Method(m)
    }
}

impl From<PropertySymbol> for MemberSymbol {
    fn from(p: PropertySymbol) -> Self {
        MemberSymbol::Property(p)
    }
}
