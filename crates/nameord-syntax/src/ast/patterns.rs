//! Binding and assignment patterns.

use super::Identifier;
use super::expressions::{Expression, PropertyKey};
use super::types::TypeNode;
use nameord_common::Location;

#[derive(Clone, Debug, PartialEq)]
pub struct Pattern {
    pub loc: Location,
    pub kind: PatternKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PatternKind {
    /// A binding identifier: `x` in `let x`, `{ a: x }` or `[x]`.
    Identifier {
        name: Identifier,
        annotation: Option<TypeNode>,
        optional: bool,
    },
    Object {
        properties: Vec<ObjectPatternProperty>,
        annotation: Option<TypeNode>,
    },
    /// `None` elements are holes: `[, b]`.
    Array {
        elements: Vec<Option<ArrayPatternElement>>,
        annotation: Option<TypeNode>,
    },
    /// Assignment to a non-binding target such as `o.p = v`.
    Expression(Box<Expression>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ObjectPatternProperty {
    Property {
        key: PropertyKey,
        pattern: Pattern,
        default: Option<Expression>,
        shorthand: bool,
    },
    Rest(Pattern),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ArrayPatternElement {
    Element {
        pattern: Pattern,
        default: Option<Expression>,
    },
    Rest(Pattern),
}

impl Pattern {
    pub fn new(loc: Location, kind: PatternKind) -> Self {
        Self { loc, kind }
    }

    /// An unannotated binding identifier.
    pub fn identifier(loc: Location, name: impl Into<String>) -> Self {
        Self::new(
            loc,
            PatternKind::Identifier {
                name: Identifier::new(loc, name),
                annotation: None,
                optional: false,
            },
        )
    }

    /// A binding identifier with a type annotation.
    pub fn annotated(loc: Location, name: impl Into<String>, annotation: TypeNode) -> Self {
        Self::new(
            loc,
            PatternKind::Identifier {
                name: Identifier::new(loc, name),
                annotation: Some(annotation),
                optional: false,
            },
        )
    }

    /// The annotation written directly on this pattern, if any.
    pub fn annotation(&self) -> Option<&TypeNode> {
        match &self.kind {
            PatternKind::Identifier { annotation, .. }
            | PatternKind::Object { annotation, .. }
            | PatternKind::Array { annotation, .. } => annotation.as_ref(),
            PatternKind::Expression(_) => None,
        }
    }
}
