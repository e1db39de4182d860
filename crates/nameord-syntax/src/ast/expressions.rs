//! Expression syntax.

use super::Identifier;
use super::classes::ClassSyntax;
use super::functions::FunctionSyntax;
use super::patterns::Pattern;
use super::types::TypeNode;
use nameord_common::Location;

/// An expression node.
#[derive(Clone, Debug, PartialEq)]
pub struct Expression {
    pub loc: Location,
    pub kind: ExpressionKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExpressionKind {
    /// A read of a variable: `x`.
    Identifier(Identifier),
    Literal(Literal),
    This,
    Super,
    Array(Vec<ArrayElement>),
    Object(Vec<ObjectProperty>),
    /// `` `a${b}c${d}` `` - only the interpolated expressions matter.
    Template(Vec<Expression>),
    TaggedTemplate {
        tag: Box<Expression>,
        expressions: Vec<Expression>,
    },
    /// `o.p`, `o[e]`, `o.#p`, and their optional-chain forms.
    Member {
        object: Box<Expression>,
        property: MemberProperty,
        optional: bool,
    },
    Call {
        callee: Box<Expression>,
        type_args: Vec<TypeNode>,
        arguments: Vec<Argument>,
        optional: bool,
    },
    New {
        callee: Box<Expression>,
        type_args: Vec<TypeNode>,
        arguments: Vec<Argument>,
    },
    Unary {
        operator: UnaryOperator,
        argument: Box<Expression>,
    },
    Update {
        operator: UpdateOperator,
        prefix: bool,
        argument: Box<Expression>,
    },
    Binary {
        operator: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Logical {
        operator: LogicalOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Conditional {
        test: Box<Expression>,
        consequent: Box<Expression>,
        alternate: Box<Expression>,
    },
    Assignment {
        operator: AssignmentOperator,
        target: Box<Pattern>,
        value: Box<Expression>,
    },
    Sequence(Vec<Expression>),
    /// `(e: T)` and `e as T`.
    TypeCast {
        expression: Box<Expression>,
        annotation: TypeNode,
    },
    Function(Box<FunctionSyntax>),
    ArrowFunction(Box<FunctionSyntax>),
    Class(Box<ClassSyntax>),
    Await(Box<Expression>),
    Yield {
        argument: Option<Box<Expression>>,
        delegate: bool,
    },
    /// Dynamic `import(e)`.
    Import(Box<Expression>),
    /// `new.target`, `import.meta` - neither part is a reference.
    MetaProperty {
        meta: Identifier,
        property: Identifier,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    String(String),
    Number(f64),
    BigInt(String),
    Boolean(bool),
    Null,
    RegExp { pattern: String, flags: String },
}

#[derive(Clone, Debug, PartialEq)]
pub enum ArrayElement {
    Expression(Expression),
    Spread(Expression),
    Hole,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Argument {
    Expression(Expression),
    Spread(Expression),
}

#[derive(Clone, Debug, PartialEq)]
pub enum MemberProperty {
    /// `o.p` - `p` is a member name, not a reference.
    Identifier(Identifier),
    /// `o.#p` - private names are never references.
    PrivateName(Identifier),
    /// `o[e]`
    Computed(Box<Expression>),
}

/// Key of an object literal property, class member or object type property.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyKey {
    Identifier(Identifier),
    Literal(Literal),
    PrivateName(Identifier),
    Computed(Box<Expression>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ObjectProperty {
    /// `k: v`, or `k` when `shorthand` (the value is then the read of `k`).
    Init {
        key: PropertyKey,
        value: Expression,
        shorthand: bool,
    },
    Method {
        key: PropertyKey,
        function: FunctionSyntax,
    },
    Getter {
        key: PropertyKey,
        function: FunctionSyntax,
    },
    Setter {
        key: PropertyKey,
        function: FunctionSyntax,
    },
    Spread(Expression),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Minus,
    Plus,
    Not,
    BitNot,
    Typeof,
    Void,
    Delete,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UpdateOperator {
    Increment,
    Decrement,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Equal,
    NotEqual,
    StrictEqual,
    StrictNotEqual,
    LessThan,
    LessThanEqual,
    GreaterThan,
    GreaterThanEqual,
    LShift,
    RShift,
    RShift3,
    Plus,
    Minus,
    Mult,
    Exp,
    Div,
    Mod,
    BitOr,
    Xor,
    BitAnd,
    In,
    Instanceof,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LogicalOperator {
    And,
    Or,
    NullishCoalesce,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AssignmentOperator {
    Assign,
    PlusAssign,
    MinusAssign,
    MultAssign,
    ExpAssign,
    DivAssign,
    ModAssign,
    LShiftAssign,
    RShiftAssign,
    RShift3Assign,
    BitOrAssign,
    BitXorAssign,
    BitAndAssign,
    NullishAssign,
    AndAssign,
    OrAssign,
}

impl AssignmentOperator {
    /// Whether the operator reads the target before writing it.
    pub const fn is_compound(self) -> bool {
        !matches!(self, AssignmentOperator::Assign)
    }
}

impl Expression {
    pub fn new(loc: Location, kind: ExpressionKind) -> Self {
        Self { loc, kind }
    }

    /// A read of `name` at `loc`.
    pub fn identifier(loc: Location, name: impl Into<String>) -> Self {
        Self::new(loc, ExpressionKind::Identifier(Identifier::new(loc, name)))
    }

    pub fn literal(loc: Location, literal: Literal) -> Self {
        Self::new(loc, ExpressionKind::Literal(literal))
    }

    pub fn number(loc: Location, value: f64) -> Self {
        Self::literal(loc, Literal::Number(value))
    }

    pub fn call(loc: Location, callee: Expression, arguments: Vec<Expression>) -> Self {
        Self::new(
            loc,
            ExpressionKind::Call {
                callee: Box::new(callee),
                type_args: Vec::new(),
                arguments: arguments.into_iter().map(Argument::Expression).collect(),
                optional: false,
            },
        )
    }

    /// `object.name` with a non-computed member name.
    pub fn member(loc: Location, object: Expression, property: Identifier) -> Self {
        Self::new(
            loc,
            ExpressionKind::Member {
                object: Box::new(object),
                property: MemberProperty::Identifier(property),
                optional: false,
            },
        )
    }

    pub fn binary(
        loc: Location,
        operator: BinaryOperator,
        left: Expression,
        right: Expression,
    ) -> Self {
        Self::new(
            loc,
            ExpressionKind::Binary {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            },
        )
    }

    pub fn object(loc: Location, properties: Vec<ObjectProperty>) -> Self {
        Self::new(loc, ExpressionKind::Object(properties))
    }

    pub fn arrow(function: FunctionSyntax) -> Self {
        Self::new(function.loc, ExpressionKind::ArrowFunction(Box::new(function)))
    }
}
