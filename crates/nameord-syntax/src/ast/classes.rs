//! Class syntax.

use super::Identifier;
use super::expressions::{Expression, PropertyKey};
use super::functions::FunctionSyntax;
use super::statements::Statement;
use super::types::{GenericType, TypeNode, TypeParamDecl, Variance};
use nameord_common::Location;

#[derive(Clone, Debug, PartialEq)]
pub struct ClassSyntax {
    pub loc: Location,
    pub id: Option<Identifier>,
    pub type_params: Vec<TypeParamDecl>,
    pub extends: Option<ClassExtends>,
    pub implements: Vec<GenericType>,
    pub decorators: Vec<Expression>,
    pub body: ClassBody,
}

/// `extends e<Args>` - the superclass is an arbitrary expression.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassExtends {
    pub loc: Location,
    pub expression: Expression,
    pub type_args: Vec<TypeNode>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClassBody {
    pub loc: Location,
    pub members: Vec<ClassMember>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MethodKind {
    Constructor,
    Method,
    Get,
    Set,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ClassMember {
    Method {
        loc: Location,
        key: PropertyKey,
        kind: MethodKind,
        is_static: bool,
        function: FunctionSyntax,
    },
    Property {
        loc: Location,
        key: PropertyKey,
        annotation: Option<TypeNode>,
        value: Option<Expression>,
        is_static: bool,
        variance: Option<Variance>,
    },
    /// `#name: T = v` - the private name is never a reference.
    PrivateField {
        loc: Location,
        key: Identifier,
        annotation: Option<TypeNode>,
        value: Option<Expression>,
        is_static: bool,
    },
    StaticBlock {
        loc: Location,
        body: Vec<Statement>,
    },
}

impl ClassMember {
    /// Whether the member's type is fixed by its annotations alone.
    ///
    /// Static blocks never contribute to the class type and have no
    /// annotation, so they count as unannotated.
    pub fn is_annotated(&self) -> bool {
        match self {
            ClassMember::Method { kind, function, .. } => {
                let returns_implicitly = matches!(kind, MethodKind::Constructor | MethodKind::Set);
                function.has_annotated_signature(returns_implicitly)
            }
            ClassMember::Property { annotation, .. }
            | ClassMember::PrivateField { annotation, .. } => annotation.is_some(),
            ClassMember::StaticBlock { .. } => false,
        }
    }
}

impl ClassSyntax {
    pub fn new(loc: Location, members: Vec<ClassMember>) -> Self {
        Self {
            loc,
            id: None,
            type_params: Vec::new(),
            extends: None,
            implements: Vec::new(),
            decorators: Vec::new(),
            body: ClassBody { loc, members },
        }
    }

    /// Whether every member is annotated (see [`ClassMember::is_annotated`]).
    pub fn is_fully_annotated(&self) -> bool {
        self.body.members.iter().all(|m| match m {
            ClassMember::StaticBlock { .. } => true,
            member => member.is_annotated(),
        })
    }
}
