//! Type annotation syntax.

use super::Identifier;
use super::expressions::{Literal, PropertyKey};
use nameord_common::Location;

/// A type annotation node.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeNode {
    pub loc: Location,
    pub kind: TypeNodeKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TypeNodeKind {
    // Basic types
    Any,
    Mixed,
    Empty,
    Void,
    Null,
    Number,
    String,
    Boolean,
    Symbol,
    BigInt,
    This,
    Literal(Literal),

    // Named types
    /// `T`, `A.B<C>` - only the head of the name is a type reference.
    Generic(GenericType),
    /// `typeof x`, `typeof A.B` - the head of the name is a *value* reference.
    Typeof {
        target: TypeName,
        type_args: Vec<TypeNode>,
    },

    // Complex types
    Function(Box<FunctionType>),
    Object(ObjectType),
    Union(Vec<TypeNode>),
    Intersection(Vec<TypeNode>),
    Array(Box<TypeNode>),
    Tuple(Vec<TypeNode>),
    Nullable(Box<TypeNode>),
    Keyof(Box<TypeNode>),
    IndexedAccess {
        object: Box<TypeNode>,
        index: Box<TypeNode>,
        optional: bool,
    },
}

/// Possibly qualified type name: `A` or `A.B.C`.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeName {
    Identifier(Identifier),
    Qualified {
        loc: Location,
        qualification: Box<TypeName>,
        member: Identifier,
    },
}

impl TypeName {
    /// The leftmost identifier, the only part of a name that is a reference.
    pub fn head(&self) -> &Identifier {
        match self {
            TypeName::Identifier(id) => id,
            TypeName::Qualified { qualification, .. } => qualification.head(),
        }
    }
}

/// A named type with optional type arguments.
///
/// Used for generic annotations as well as `extends`, `implements` and
/// `mixins` clauses.
#[derive(Clone, Debug, PartialEq)]
pub struct GenericType {
    pub loc: Location,
    pub name: TypeName,
    pub type_args: Vec<TypeNode>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FunctionType {
    pub loc: Location,
    pub type_params: Vec<TypeParamDecl>,
    pub this_param: Option<TypeNode>,
    pub params: Vec<FunctionTypeParam>,
    pub rest: Option<FunctionTypeParam>,
    pub return_type: TypeNode,
}

/// Parameter of a function type. Its name, if any, binds nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionTypeParam {
    pub loc: Location,
    pub name: Option<Identifier>,
    pub annotation: TypeNode,
    pub optional: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectType {
    pub loc: Location,
    pub exact: bool,
    pub properties: Vec<ObjectTypeProperty>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ObjectTypeProperty {
    Property {
        loc: Location,
        key: PropertyKey,
        value: TypeNode,
        optional: bool,
        variance: Option<Variance>,
    },
    Indexer {
        loc: Location,
        name: Option<Identifier>,
        key: TypeNode,
        value: TypeNode,
    },
    CallProperty(FunctionType),
    Spread(TypeNode),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Variance {
    Covariant,
    Contravariant,
}

/// Declaration of a type parameter: `T: Bound = Default`.
///
/// The name is a type binding: it always resolves to this declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeParamDecl {
    pub loc: Location,
    pub name: Identifier,
    pub bound: Option<TypeNode>,
    pub default: Option<TypeNode>,
    pub variance: Option<Variance>,
}

impl TypeNode {
    pub fn new(loc: Location, kind: TypeNodeKind) -> Self {
        Self { loc, kind }
    }

    /// A reference to the type `name` without type arguments.
    pub fn named(loc: Location, name: impl Into<String>) -> Self {
        Self::generic(loc, name, Vec::new())
    }

    pub fn generic(loc: Location, name: impl Into<String>, type_args: Vec<TypeNode>) -> Self {
        Self::new(
            loc,
            TypeNodeKind::Generic(GenericType {
                loc,
                name: TypeName::Identifier(Identifier::new(loc, name)),
                type_args,
            }),
        )
    }

    pub fn number(loc: Location) -> Self {
        Self::new(loc, TypeNodeKind::Number)
    }

    pub fn string(loc: Location) -> Self {
        Self::new(loc, TypeNodeKind::String)
    }

    /// `typeof name`.
    pub fn type_of(loc: Location, name: impl Into<String>) -> Self {
        Self::new(
            loc,
            TypeNodeKind::Typeof {
                target: TypeName::Identifier(Identifier::new(loc, name)),
                type_args: Vec::new(),
            },
        )
    }
}

impl TypeParamDecl {
    pub fn new(name: Identifier) -> Self {
        Self {
            loc: name.loc,
            name,
            bound: None,
            default: None,
            variance: None,
        }
    }

    pub fn with_bound(mut self, bound: TypeNode) -> Self {
        self.bound = Some(bound);
        self
    }

    pub fn with_default(mut self, default: TypeNode) -> Self {
        self.default = Some(default);
        self
    }
}
