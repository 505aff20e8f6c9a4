//! Ready-made class shapes, one per conformance scenario.
//!
//! Positions are small but plausible: the class declaration on line 1, the
//! constructor a couple of lines below, methods after that.

use sv_core::{
    AccessModifier, ClassSymbol, ConstructorSymbol, MethodSymbol, SourceLocation, TypeName,
};

fn location(file: &str, line: u32) -> SourceLocation {
    SourceLocation::new(file, line, 5)
}

/// The canonical well-formed singleton: a private constructor and a public
/// static `getInstance` returning the class's own type.
#[must_use]
pub fn well_formed() -> ClassSymbol {
    let file = "demo/Registry.src";
    let class = ClassSymbol::new("demo.Registry", location(file, 1)).with_constructor(
        ConstructorSymbol::new(location(file, 3)).with_modifier(AccessModifier::Private),
    );
    let accessor = MethodSymbol::new("getInstance", class.self_type.clone(), location(file, 6))
        .with_modifier(AccessModifier::Public)
        .static_member();
    class.with_method(accessor)
}

/// A class whose only constructor is public.
#[must_use]
pub fn public_constructor() -> ClassSymbol {
    let file = "demo/OpenRegistry.src";
    ClassSymbol::new("demo.OpenRegistry", location(file, 1)).with_constructor(
        ConstructorSymbol::new(location(file, 3)).with_modifier(AccessModifier::Public),
    )
}

/// A private constructor and no methods at all.
#[must_use]
pub fn missing_accessor() -> ClassSymbol {
    let file = "demo/SealedBox.src";
    ClassSymbol::new("demo.SealedBox", location(file, 1)).with_constructor(
        ConstructorSymbol::new(location(file, 3)).with_modifier(AccessModifier::Private),
    )
}

/// A `getInstance` returning the class's own type, but declared private.
#[must_use]
pub fn private_accessor() -> ClassSymbol {
    let file = "demo/HiddenRegistry.src";
    let class = ClassSymbol::new("demo.HiddenRegistry", location(file, 1)).with_constructor(
        ConstructorSymbol::new(location(file, 3)).with_modifier(AccessModifier::Private),
    );
    let accessor = MethodSymbol::new("getInstance", class.self_type.clone(), location(file, 6))
        .with_modifier(AccessModifier::Private)
        .static_member();
    class.with_method(accessor)
}

/// A `getInstance` returning the class's own type, public but not static.
#[must_use]
pub fn instance_accessor() -> ClassSymbol {
    let file = "demo/BoundRegistry.src";
    let class = ClassSymbol::new("demo.BoundRegistry", location(file, 1)).with_constructor(
        ConstructorSymbol::new(location(file, 3)).with_modifier(AccessModifier::Private),
    );
    let accessor = MethodSymbol::new("getInstance", class.self_type.clone(), location(file, 6))
        .with_modifier(AccessModifier::Public);
    class.with_method(accessor)
}

/// A well-formed singleton that also declares a private static
/// `getInstance` overload returning an unrelated type. The overload is
/// ignored and the class still conforms.
#[must_use]
pub fn misleading_overload() -> ClassSymbol {
    let file = "demo/AliasRegistry.src";
    let class = ClassSymbol::new("demo.AliasRegistry", location(file, 1)).with_constructor(
        ConstructorSymbol::new(location(file, 3)).with_modifier(AccessModifier::Private),
    );
    let accessor = MethodSymbol::new("getInstance", class.self_type.clone(), location(file, 6))
        .with_modifier(AccessModifier::Public)
        .static_member();
    let overload = MethodSymbol::new("getInstance", TypeName::new("demo.Token"), location(file, 10))
        .with_modifier(AccessModifier::Private)
        .static_member();
    class.with_method(accessor).with_method(overload)
}

/// Methods exist, but none qualifies as a valid accessor: a helper plus a
/// `getInstance` returning an unrelated type.
#[must_use]
pub fn no_qualifying_accessor() -> ClassSymbol {
    let file = "demo/TokenSource.src";
    let class = ClassSymbol::new("demo.TokenSource", location(file, 1)).with_constructor(
        ConstructorSymbol::new(location(file, 3)).with_modifier(AccessModifier::Private),
    );
    let helper = MethodSymbol::new("reset", TypeName::new("void"), location(file, 6))
        .with_modifier(AccessModifier::Public);
    let overload = MethodSymbol::new("getInstance", TypeName::new("demo.Token"), location(file, 9))
        .with_modifier(AccessModifier::Public)
        .static_member();
    class.with_method(helper).with_method(overload)
}
