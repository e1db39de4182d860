//! Refinements: narrowing predicates attached to writes.
//!
//! A refinement is created by a condition such as `if (x instanceof C)` or
//! `if (isFoo(x))`. The write it guards is still the same write, but reading
//! it now also depends on whatever the condition itself reads.
//!
//! | Refinement | Example | Embeds expressions |
//! |------------|---------|--------------------|
//! | `And` / `Or` / `Not` | `a && b`, `!a` | through operands |
//! | `InstanceOf` | `x instanceof C` | `C` |
//! | `Latent` | `isFoo(x)` | `isFoo` |
//! | leaves | `x`, `x == null`, `typeof x === 'string'` | no |

use nameord_syntax::ast::{Expression, Literal};

#[derive(Clone, Debug, PartialEq)]
pub enum Refinement {
    And(Box<Refinement>, Box<Refinement>),
    Or(Box<Refinement>, Box<Refinement>),
    Not(Box<Refinement>),

    /// `x instanceof C` - carries the class expression.
    InstanceOf(Expression),
    /// Call to a type-guard function: `guard(..., x, ...)`.
    Latent {
        guard: Expression,
        argument_index: usize,
    },

    // Leaves
    Truthy,
    Null,
    Undefined,
    /// `x == null`
    Maybe,
    Literal(Literal),
    Primitive(PrimitiveKind),
    ArrayShape,
    FunctionShape,
    ObjectShape,
    PropertyExists(String),
    /// `x.kind === 'a'`
    Sentinel {
        property: String,
        value: Literal,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    String,
    Number,
    BigInt,
    Boolean,
    Symbol,
}

impl Refinement {
    pub fn and(left: Refinement, right: Refinement) -> Self {
        Refinement::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Refinement, right: Refinement) -> Self {
        Refinement::Or(Box::new(left), Box::new(right))
    }

    pub fn not(inner: Refinement) -> Self {
        Refinement::Not(Box::new(inner))
    }

    /// Whether the refinement neither combines others nor embeds expressions.
    pub const fn is_leaf(&self) -> bool {
        !matches!(
            self,
            Refinement::And(..)
                | Refinement::Or(..)
                | Refinement::Not(_)
                | Refinement::InstanceOf(_)
                | Refinement::Latent { .. }
        )
    }
}
