//! Type-level declarations.

use super::Identifier;
use super::types::{GenericType, ObjectType, TypeNode, TypeParamDecl};
use nameord_common::Location;

/// `type T<P> = Right`
#[derive(Clone, Debug, PartialEq)]
pub struct TypeAliasSyntax {
    pub loc: Location,
    pub id: Identifier,
    pub type_params: Vec<TypeParamDecl>,
    pub right: TypeNode,
}

/// `opaque type T<P>: Super = Impl`; declared opaque types omit `Impl`.
#[derive(Clone, Debug, PartialEq)]
pub struct OpaqueTypeSyntax {
    pub loc: Location,
    pub id: Identifier,
    pub type_params: Vec<TypeParamDecl>,
    pub supertype: Option<TypeNode>,
    pub impl_type: Option<TypeNode>,
}

/// `interface I<P> extends A, B { ... }`
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceSyntax {
    pub loc: Location,
    pub id: Identifier,
    pub type_params: Vec<TypeParamDecl>,
    pub extends: Vec<GenericType>,
    pub body: ObjectType,
}

/// `declare class C<P> extends S mixins M implements I { ... }`
#[derive(Clone, Debug, PartialEq)]
pub struct DeclaredClassSyntax {
    pub loc: Location,
    pub id: Identifier,
    pub type_params: Vec<TypeParamDecl>,
    pub extends: Option<GenericType>,
    pub mixins: Vec<GenericType>,
    pub implements: Vec<GenericType>,
    pub body: ObjectType,
}
