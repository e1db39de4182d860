//! Statement syntax, as found inside function and class bodies.

use super::Identifier;
use super::classes::ClassSyntax;
use super::declarations::{InterfaceSyntax, TypeAliasSyntax};
use super::expressions::Expression;
use super::functions::FunctionSyntax;
use super::patterns::Pattern;
use nameord_common::Location;

#[derive(Clone, Debug, PartialEq)]
pub struct Statement {
    pub loc: Location,
    pub kind: StatementKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum StatementKind {
    Expression(Expression),
    VariableDeclaration {
        kind: VariableKind,
        declarations: Vec<VariableDeclarator>,
    },
    Return(Option<Expression>),
    If {
        test: Expression,
        consequent: Box<Statement>,
        alternate: Option<Box<Statement>>,
    },
    While {
        test: Expression,
        body: Box<Statement>,
    },
    DoWhile {
        body: Box<Statement>,
        test: Expression,
    },
    For {
        init: Option<ForInit>,
        test: Option<Expression>,
        update: Option<Expression>,
        body: Box<Statement>,
    },
    ForIn {
        left: ForLeft,
        right: Expression,
        body: Box<Statement>,
    },
    ForOf {
        left: ForLeft,
        right: Expression,
        body: Box<Statement>,
        is_await: bool,
    },
    Block(Vec<Statement>),
    Throw(Expression),
    Try {
        block: Vec<Statement>,
        handler: Option<CatchClause>,
        finalizer: Option<Vec<Statement>>,
    },
    Switch {
        discriminant: Expression,
        cases: Vec<SwitchCase>,
    },
    /// Labels are never references.
    Labeled {
        label: Identifier,
        body: Box<Statement>,
    },
    Break(Option<Identifier>),
    Continue(Option<Identifier>),
    FunctionDeclaration(Box<FunctionSyntax>),
    ClassDeclaration(Box<ClassSyntax>),
    TypeAlias(Box<TypeAliasSyntax>),
    Interface(Box<InterfaceSyntax>),
    Empty,
    Debugger,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VariableDeclarator {
    pub loc: Location,
    pub id: Pattern,
    pub init: Option<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ForInit {
    Declaration {
        kind: VariableKind,
        declarations: Vec<VariableDeclarator>,
    },
    Expression(Expression),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ForLeft {
    Declaration { kind: VariableKind, id: Pattern },
    Pattern(Pattern),
}

#[derive(Clone, Debug, PartialEq)]
pub struct CatchClause {
    pub loc: Location,
    pub param: Option<Pattern>,
    pub body: Vec<Statement>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SwitchCase {
    pub loc: Location,
    pub test: Option<Expression>,
    pub consequent: Vec<Statement>,
}

impl Statement {
    pub fn new(loc: Location, kind: StatementKind) -> Self {
        Self { loc, kind }
    }

    pub fn expression(expression: Expression) -> Self {
        Self::new(expression.loc, StatementKind::Expression(expression))
    }

    pub fn ret(loc: Location, argument: Option<Expression>) -> Self {
        Self::new(loc, StatementKind::Return(argument))
    }

    /// `const <id> = <init>;`
    pub fn constant(loc: Location, id: Pattern, init: Expression) -> Self {
        Self::new(
            loc,
            StatementKind::VariableDeclaration {
                kind: VariableKind::Const,
                declarations: vec![VariableDeclarator {
                    loc,
                    id,
                    init: Some(init),
                }],
            },
        )
    }
}
