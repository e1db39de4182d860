//! Owned syntax trees.
//!
//! Every node is a `{ loc, kind }` pair (or a struct with a `loc` field) so
//! that any node the ordering engine records as evidence can be pointed at.
//! Names that are never references (object keys, member names, enum member
//! names, private names) are still `Identifier`s, but the engine reaches them
//! only through the key/member positions of their parent node.

pub mod classes;
pub mod declarations;
pub mod expressions;
pub mod functions;
pub mod patterns;
pub mod statements;
pub mod types;

pub use classes::{ClassBody, ClassExtends, ClassMember, ClassSyntax, MethodKind};
pub use declarations::{DeclaredClassSyntax, InterfaceSyntax, OpaqueTypeSyntax, TypeAliasSyntax};
pub use expressions::{
    Argument, ArrayElement, AssignmentOperator, BinaryOperator, Expression, ExpressionKind,
    Literal, LogicalOperator, MemberProperty, ObjectProperty, PropertyKey, UnaryOperator,
    UpdateOperator,
};
pub use functions::{FunctionBody, FunctionParam, FunctionSyntax, Predicate};
pub use patterns::{ArrayPatternElement, ObjectPatternProperty, Pattern, PatternKind};
pub use statements::{
    CatchClause, ForInit, ForLeft, Statement, StatementKind, SwitchCase, VariableDeclarator,
    VariableKind,
};
pub use types::{
    FunctionType, FunctionTypeParam, GenericType, ObjectType, ObjectTypeProperty, TypeName,
    TypeNode, TypeNodeKind, TypeParamDecl, Variance,
};

use nameord_common::Location;

/// A name together with the location it was written at.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub loc: Location,
    pub name: String,
}

impl Identifier {
    pub fn new(loc: Location, name: impl Into<String>) -> Self {
        Self {
            loc,
            name: name.into(),
        }
    }
}
