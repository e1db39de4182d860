//! Syntax payloads for the nameord definition ordering engine.
//!
//! Parsing is owned by surrounding tooling. This crate only describes the
//! shape of the syntax a definition carries, as an owned tree in which every
//! potential reference site knows its `Location`:
//! - `ast`: expressions, type annotations, patterns, statements, functions
//!   and classes
//! - `definition`: the closed set of definition kinds handed to the ordering
//!   engine, and the binding shapes describing destructuring chains

pub mod ast;
pub mod definition;

pub use ast::{
    ClassBody, ClassMember, ClassSyntax, Expression, ExpressionKind, FunctionBody, FunctionParam,
    FunctionSyntax, Identifier, Pattern, PatternKind, Statement, StatementKind, TypeNode,
    TypeNodeKind, TypeParamDecl,
};
pub use definition::{
    BindingRoot, BindingShape, Definition, DefinitionKind, EnumMember, EnumSyntax, ForKind, ImportKind,
    ImportSyntax, ImportedName, Selector,
};
