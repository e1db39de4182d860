//! Function syntax shared by declarations, expressions, arrows and methods.

use super::Identifier;
use super::expressions::Expression;
use super::patterns::Pattern;
use super::statements::Statement;
use super::types::{TypeNode, TypeParamDecl};
use nameord_common::Location;

#[derive(Clone, Debug, PartialEq)]
pub struct FunctionSyntax {
    pub loc: Location,
    /// The function's own name. It is declared, never read, by the function.
    pub id: Option<Identifier>,
    pub type_params: Vec<TypeParamDecl>,
    pub this_param: Option<TypeNode>,
    pub params: Vec<FunctionParam>,
    pub return_type: Option<TypeNode>,
    pub predicate: Option<Predicate>,
    pub body: FunctionBody,
    pub is_async: bool,
    pub is_generator: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FunctionParam {
    pub loc: Location,
    pub pattern: Pattern,
    pub default: Option<Expression>,
    pub is_rest: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FunctionBody {
    Block(Vec<Statement>),
    /// Concise arrow body: `x => x + 1`.
    Expression(Box<Expression>),
    /// Declared functions have no body.
    None,
}

/// Predicate clause of a function signature.
#[derive(Clone, Debug, PartialEq)]
pub enum Predicate {
    /// `%checks(e)`
    Declared(Expression),
    /// `%checks`
    Inferred,
}

impl FunctionSyntax {
    pub fn new(loc: Location, body: FunctionBody) -> Self {
        Self {
            loc,
            id: None,
            type_params: Vec::new(),
            this_param: None,
            params: Vec::new(),
            return_type: None,
            predicate: None,
            body,
            is_async: false,
            is_generator: false,
        }
    }

    pub fn with_id(mut self, id: Identifier) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_param(mut self, pattern: Pattern) -> Self {
        self.params.push(FunctionParam {
            loc: pattern.loc,
            pattern,
            default: None,
            is_rest: false,
        });
        self
    }

    pub fn with_return_type(mut self, return_type: TypeNode) -> Self {
        self.return_type = Some(return_type);
        self
    }

    pub fn with_type_param(mut self, type_param: TypeParamDecl) -> Self {
        self.type_params.push(type_param);
        self
    }

    /// Whether every parameter and the return position carry annotations.
    ///
    /// `returns_implicitly` exempts the return annotation, for constructors
    /// and setters whose return type is fixed by the language.
    pub fn has_annotated_signature(&self, returns_implicitly: bool) -> bool {
        let params_annotated = self.params.iter().all(|p| p.pattern.annotation().is_some());
        params_annotated && (returns_implicitly || self.return_type.is_some())
    }

    /// Syntactic annotation state of a free-standing function.
    pub fn is_fully_annotated(&self) -> bool {
        self.has_annotated_signature(false)
    }
}
