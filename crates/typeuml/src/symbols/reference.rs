//! Type references
//!
//! A reference is the display-ready, fully qualified name of a type as the
//! symbol provider rendered it. It is compared and printed verbatim and never
//! re-canonicalized.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Fully qualified, pre-rendered type name (namespace, containing types,
/// type name and generic arguments)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRef(String);

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TypeRef {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for TypeRef {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for TypeRef {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TypeRef {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_verbatim() {
        let r = TypeRef::from("System.Collections.Generic.Dictionary<TKey, TValue>");
        assert_eq!(
            r.to_string(),
            "System.Collections.Generic.Dictionary<TKey, TValue>"
        );
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let r = TypeRef::from("Outer.Inner");
        assert_eq!(serde_json::to_string(&r).unwrap(), "\"Outer.Inner\"");
        let back: TypeRef = serde_json::from_str("\"Outer.Inner\"").unwrap();
        assert_eq!(back, "Outer.Inner");
    }
}
