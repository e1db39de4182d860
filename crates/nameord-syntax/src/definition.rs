//! Definitions handed to the ordering engine.
//!
//! A definition is anything the type-resolution pass computes a type for:
//! a variable binding, an update or compound assignment to a variable, a
//! function, a class, a type-level declaration, an enum or an import. Each
//! variant carries only the syntax its own dependency traversal needs.
//!
//! ## Definition kinds
//!
//! | Kind | Example | Syntax carried |
//! |------|---------|----------------|
//! | Binding | `const x = e` | binding shape |
//! | Update | `x++` | operator |
//! | OpAssign | `x += e` | operator, right-hand side |
//! | Function | `function f() {}` | function syntax, annotation state |
//! | Class | `class C {}` | class syntax, annotation state |
//! | DeclaredClass | `declare class C {}` | declared class syntax |
//! | TypeAlias | `type T = ...` | alias syntax |
//! | OpaqueType | `opaque type T = ...` | opaque syntax |
//! | TypeParam | `<T: Bound>` | type parameter declaration |
//! | Interface | `interface I {}` | interface syntax |
//! | Enum | `enum E {}` | enum syntax |
//! | Import | `import x from 'm'` | import syntax |

use crate::ast::{
    AssignmentOperator, ClassSyntax, DeclaredClassSyntax, Expression, FunctionSyntax, Identifier,
    InterfaceSyntax, Literal, OpaqueTypeSyntax, TypeAliasSyntax, TypeNode, TypeParamDecl,
    UpdateOperator,
};
use nameord_common::Location;
use serde::Serialize;
use std::fmt;

// =============================================================================
// Definition
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    Binding(BindingShape),
    Update {
        operator: UpdateOperator,
    },
    OpAssign {
        operator: AssignmentOperator,
        rhs: Expression,
    },
    Function {
        fully_annotated: bool,
        function: FunctionSyntax,
    },
    Class {
        fully_annotated: bool,
        class: ClassSyntax,
    },
    DeclaredClass(DeclaredClassSyntax),
    TypeAlias(TypeAliasSyntax),
    OpaqueType(OpaqueTypeSyntax),
    TypeParam(TypeParamDecl),
    Interface(InterfaceSyntax),
    Enum(EnumSyntax),
    Import(ImportSyntax),
}

/// Fieldless mirror of [`Definition`] for logging and error payloads.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DefinitionKind {
    Binding,
    Update,
    OpAssign,
    Function,
    Class,
    DeclaredClass,
    TypeAlias,
    OpaqueType,
    TypeParam,
    Interface,
    Enum,
    Import,
}

impl DefinitionKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            DefinitionKind::Binding => "binding",
            DefinitionKind::Update => "update",
            DefinitionKind::OpAssign => "op-assign",
            DefinitionKind::Function => "function",
            DefinitionKind::Class => "class",
            DefinitionKind::DeclaredClass => "declared class",
            DefinitionKind::TypeAlias => "type alias",
            DefinitionKind::OpaqueType => "opaque type",
            DefinitionKind::TypeParam => "type parameter",
            DefinitionKind::Interface => "interface",
            DefinitionKind::Enum => "enum",
            DefinitionKind::Import => "import",
        }
    }
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Definition {
    pub const fn kind(&self) -> DefinitionKind {
        match self {
            Definition::Binding(_) => DefinitionKind::Binding,
            Definition::Update { .. } => DefinitionKind::Update,
            Definition::OpAssign { .. } => DefinitionKind::OpAssign,
            Definition::Function { .. } => DefinitionKind::Function,
            Definition::Class { .. } => DefinitionKind::Class,
            Definition::DeclaredClass(_) => DefinitionKind::DeclaredClass,
            Definition::TypeAlias(_) => DefinitionKind::TypeAlias,
            Definition::OpaqueType(_) => DefinitionKind::OpaqueType,
            Definition::TypeParam(_) => DefinitionKind::TypeParam,
            Definition::Interface(_) => DefinitionKind::Interface,
            Definition::Enum(_) => DefinitionKind::Enum,
            Definition::Import(_) => DefinitionKind::Import,
        }
    }

    /// A function definition whose annotation state is read off its syntax.
    pub fn function(function: FunctionSyntax) -> Self {
        Definition::Function {
            fully_annotated: function.is_fully_annotated(),
            function,
        }
    }

    /// A class definition whose annotation state is read off its syntax.
    pub fn class(class: ClassSyntax) -> Self {
        Definition::Class {
            fully_annotated: class.is_fully_annotated(),
            class,
        }
    }

    pub fn value(expression: Expression) -> Self {
        Definition::Binding(BindingShape::Root(BindingRoot::Value(expression)))
    }

    pub fn annotation(annotation: TypeNode) -> Self {
        Definition::Binding(BindingShape::Root(BindingRoot::Annotation(annotation)))
    }
}

// =============================================================================
// Binding shapes
// =============================================================================

/// How a binding obtains its value: a root, optionally followed by a chain
/// of destructuring selections.
///
/// `const { a: [x = d] } = e` gives `x` the shape
/// `Select(Default(d), Select(Element(0), Select(Property("a"), Root(Value(e)))))`.
#[derive(Clone, Debug, PartialEq)]
pub enum BindingShape {
    Root(BindingRoot),
    Select {
        selector: Selector,
        inner: Box<BindingShape>,
    },
}

impl BindingShape {
    pub fn select(selector: Selector, inner: BindingShape) -> Self {
        BindingShape::Select {
            selector,
            inner: Box::new(inner),
        }
    }

    /// The root the selector chain starts from.
    pub fn root(&self) -> &BindingRoot {
        let mut shape = self;
        loop {
            match shape {
                BindingShape::Root(root) => return root,
                BindingShape::Select { inner, .. } => shape = inner,
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum BindingRoot {
    /// `let x: T` - the type is written down.
    Annotation(TypeNode),
    /// `let x = e`
    Value(Expression),
    /// `for (const x of e)` / `for (const x in e)`
    For(ForKind, Expression),
    /// Unannotated parameter whose type comes from the surrounding context.
    Contextual,
    /// `catch (e)` - bound by the runtime.
    Catch,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ForKind {
    In,
    Of { is_await: bool },
}

#[derive(Clone, Debug, PartialEq)]
pub enum Selector {
    /// `{ [e]: x }`
    Computed(Expression),
    /// `{ a: x = e }` / `[x = e]`
    Default(Expression),
    /// `[, x]`
    Element(usize),
    /// `{ a: x }`
    Property(String),
    /// `{ a, ...x }` - the properties already taken out.
    ObjectRest { used_props: Vec<String> },
    /// `[a, ...x]` - index the rest starts at.
    ArrayRest(usize),
}

// =============================================================================
// Enums and imports
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct EnumSyntax {
    pub loc: Location,
    pub id: Identifier,
    pub members: Vec<EnumMember>,
}

/// Enum members are names with optional literal initializers.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumMember {
    pub id: Identifier,
    pub init: Option<Literal>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ImportKind {
    Value,
    Type,
    Typeof,
}

impl ImportKind {
    pub const fn is_type_only(self) -> bool {
        matches!(self, ImportKind::Type | ImportKind::Typeof)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImportSyntax {
    pub loc: Location,
    pub import_kind: ImportKind,
    pub source: String,
    pub imported: ImportedName,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImportedName {
    Default,
    Namespace,
    /// `import { type a as b }` - `kind` is the per-specifier kind.
    Named {
        remote: String,
        kind: Option<ImportKind>,
    },
}

impl ImportSyntax {
    /// Whether the import binds only a type, either through the declaration
    /// kind or through the specifier's own kind.
    pub fn is_type_only(&self) -> bool {
        self.import_kind.is_type_only()
            || matches!(
                self.imported,
                ImportedName::Named {
                    kind: Some(kind),
                    ..
                } if kind.is_type_only()
            )
    }
}

#[cfg(test)]
#[path = "../tests/definition_tests.rs"]
mod tests;
