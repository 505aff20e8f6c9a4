//! Symbol records produced by the host's resolution phase.
//!
//! The host constructs one [`ClassSymbol`] per marked class, hands it to the
//! checker for the duration of one check call, and discards it. Symbols are
//! never mutated after construction. Children carry only a source location,
//! never a back-reference to the owning class, so the graph has no cycles.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::location::SourceLocation;

/// A declared access modifier.
///
/// An empty modifier set on a symbol means the default (package-private)
/// access level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessModifier {
    Public,
    Protected,
    Private,
}

/// Opaque type identity.
///
/// Two types are the same type exactly when their names compare equal; the
/// checker never looks inside.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeName(String);

impl TypeName {
    /// Create a type identity from its name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "type name must not be empty");

        Self(name)
    }

    /// The underlying name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A declared constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorSymbol {
    /// Declared access modifiers; empty means package-private
    pub modifiers: BTreeSet<AccessModifier>,
    /// Where the constructor is declared
    pub location: SourceLocation,
}

impl ConstructorSymbol {
    /// Create a constructor with default (package-private) access.
    #[must_use]
    pub fn new(location: SourceLocation) -> Self {
        Self {
            modifiers: BTreeSet::new(),
            location,
        }
    }

    /// Add a declared modifier.
    #[must_use]
    pub fn with_modifier(mut self, modifier: AccessModifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    /// Whether `private` is among the declared modifiers.
    #[must_use]
    pub fn is_private(&self) -> bool {
        self.modifiers.contains(&AccessModifier::Private)
    }
}

/// A declared method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSymbol {
    /// Simple name, without any owner qualification
    pub name: String,
    /// Declared return type identity
    pub return_type: TypeName,
    /// Declared access modifiers; empty means package-private
    pub modifiers: BTreeSet<AccessModifier>,
    /// Whether the method is declared `static`
    pub is_static: bool,
    /// Where the method is declared
    pub location: SourceLocation,
}

impl MethodSymbol {
    /// Create an instance method with default (package-private) access.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        return_type: TypeName,
        location: SourceLocation,
    ) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "method name must not be empty");

        Self {
            name,
            return_type,
            modifiers: BTreeSet::new(),
            is_static: false,
            location,
        }
    }

    /// Add a declared modifier.
    #[must_use]
    pub fn with_modifier(mut self, modifier: AccessModifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    /// Mark the method as declared `static`.
    #[must_use]
    pub fn static_member(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Whether `private` is among the declared modifiers.
    #[must_use]
    pub fn is_private(&self) -> bool {
        self.modifiers.contains(&AccessModifier::Private)
    }
}

/// A read-only view of one declared class.
///
/// Owns its constructor and method lists in declaration order. The class's
/// own type identity is what accessor return types are compared against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSymbol {
    /// Fully qualified name as the resolver reports it
    pub qualified_name: String,
    /// The class's own type identity
    pub self_type: TypeName,
    /// Anchor of last resort for class-level diagnostics
    pub location: SourceLocation,
    /// Declared constructors, in declaration order
    pub constructors: Vec<ConstructorSymbol>,
    /// Declared methods, in declaration order
    pub methods: Vec<MethodSymbol>,
}

impl ClassSymbol {
    /// Create a class with no declared members.
    ///
    /// The class's own type identity is derived from its qualified name.
    #[must_use]
    pub fn new(qualified_name: impl Into<String>, location: SourceLocation) -> Self {
        let qualified_name = qualified_name.into();
        debug_assert!(!qualified_name.is_empty(), "class name must not be empty");

        let self_type = TypeName::new(qualified_name.clone());
        Self {
            qualified_name,
            self_type,
            location,
            constructors: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Append a declared constructor.
    #[must_use]
    pub fn with_constructor(mut self, constructor: ConstructorSymbol) -> Self {
        self.constructors.push(constructor);
        self
    }

    /// Append a declared method.
    #[must_use]
    pub fn with_method(mut self, method: MethodSymbol) -> Self {
        self.methods.push(method);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(line: u32) -> SourceLocation {
        SourceLocation::new("demo/Registry.src", line, 1)
    }

    #[test]
    fn test_self_type_matches_qualified_name() {
        let class = ClassSymbol::new("demo.Registry", location(1));
        assert_eq!(class.self_type, TypeName::new("demo.Registry"));
    }

    #[test]
    fn test_members_keep_declaration_order() {
        let class = ClassSymbol::new("demo.Registry", location(1))
            .with_method(MethodSymbol::new(
                "first",
                TypeName::new("void"),
                location(2),
            ))
            .with_method(MethodSymbol::new(
                "second",
                TypeName::new("void"),
                location(3),
            ));

        assert_eq!(class.methods[0].name, "first");
        assert_eq!(class.methods[1].name, "second");
    }

    #[test]
    fn test_modifier_set() {
        let constructor = ConstructorSymbol::new(location(2));
        assert!(constructor.modifiers.is_empty());
        assert!(!constructor.is_private());

        let constructor = constructor.with_modifier(AccessModifier::Private);
        assert!(constructor.is_private());
    }

    #[test]
    fn test_static_member_flag() {
        let method = MethodSymbol::new("getInstance", TypeName::new("demo.Registry"), location(4));
        assert!(!method.is_static);

        let method = method.static_member();
        assert!(method.is_static);
    }
}
