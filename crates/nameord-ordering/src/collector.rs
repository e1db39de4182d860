//! Use collector: finds every definition one piece of syntax depends on.
//!
//! The collector walks syntax owned by a single definition and folds every
//! reference it meets into a [`DependencySet`]. Only a handful of node
//! categories produce edges:
//!
//! | Node | Edge |
//! |------|------|
//! | value reference `x` | providers of each write reaching `x` |
//! | type reference `T` | type providers of each write reaching `T` |
//! | refinement on a reaching write | whatever its embedded expressions read |
//! | binding identifier in a pattern | the binding itself, if registered |
//! | type binding identifier | the binding itself |
//!
//! Everything else is structure to descend through. Object keys, member
//! names, enum member names, private names and labels are never references.
//!
//! Annotated functions and class members contribute their signatures only:
//! the annotation fixes their type, so their bodies are not needed to
//! resolve them.

use crate::dependencies::DependencySet;
use nameord_common::Location;
use nameord_common::limits::{STACK_GROWTH_SIZE, STACK_RED_ZONE};
use nameord_env::{Environment, Refinement};
use nameord_syntax::ast::{
    Argument, ArrayElement, ArrayPatternElement, ClassMember, ClassSyntax, Expression,
    ExpressionKind, ForInit, ForLeft, FunctionBody, FunctionSyntax, FunctionType, GenericType,
    Identifier, MemberProperty, ObjectPatternProperty, ObjectProperty, ObjectType,
    ObjectTypeProperty, Pattern, PatternKind, Predicate, PropertyKey, Statement, StatementKind,
    TypeName, TypeNode, TypeNodeKind, TypeParamDecl, VariableDeclarator,
};
use tracing::trace;

/// Collects dependencies against a read-only environment.
///
/// Every method takes the accumulator by value and returns the extended
/// accumulator, so traversals compose by plain chaining.
pub struct UseCollector<'env, E: Environment + ?Sized> {
    env: &'env E,
}

impl<'env, E: Environment + ?Sized> UseCollector<'env, E> {
    pub fn new(env: &'env E) -> Self {
        Self { env }
    }

    // =========================================================================
    // Reference sites
    // =========================================================================

    /// A read of a variable.
    pub fn value_reference(&self, acc: DependencySet, id: &Identifier) -> DependencySet {
        self.read(acc, id.loc, false)
    }

    /// A reference to a named type.
    pub fn type_reference(&self, acc: DependencySet, id: &Identifier) -> DependencySet {
        self.read(acc, id.loc, true)
    }

    /// Add an edge to every provider of every write reaching `read`.
    pub fn read(&self, acc: DependencySet, read: Location, for_type: bool) -> DependencySet {
        self.env
            .reaching_writes(read)
            .iter()
            .fold(acc, |acc, &write| self.write(acc, write, read, for_type))
    }

    fn write(
        &self,
        acc: DependencySet,
        write: Location,
        read: Location,
        for_type: bool,
    ) -> DependencySet {
        let mut acc = self
            .env
            .providers_of(write, for_type)
            .iter()
            .fold(acc, |acc, &provider| acc.with_edge(provider, read));

        let refinements = self.env.refinements_of(write);
        if refinements.is_empty() || !acc.start_refinements(write) {
            return acc;
        }
        trace!(%write, count = refinements.len(), "exploring refinements");
        refinements
            .iter()
            .fold(acc, |acc, refinement| self.refinement(acc, refinement))
    }

    /// Descend into the expressions a refinement embeds.
    pub fn refinement(&self, acc: DependencySet, refinement: &Refinement) -> DependencySet {
        match refinement {
            Refinement::And(left, right) | Refinement::Or(left, right) => {
                let acc = self.refinement(acc, left);
                self.refinement(acc, right)
            }
            Refinement::Not(inner) => self.refinement(acc, inner),
            Refinement::InstanceOf(class) => self.expression(acc, class),
            Refinement::Latent { guard, .. } => self.expression(acc, guard),
            Refinement::Truthy
            | Refinement::Null
            | Refinement::Undefined
            | Refinement::Maybe
            | Refinement::Literal(_)
            | Refinement::Primitive(_)
            | Refinement::ArrayShape
            | Refinement::FunctionShape
            | Refinement::ObjectShape
            | Refinement::PropertyExists(_)
            | Refinement::Sentinel { .. } => acc,
        }
    }

    /// A binding identifier in a destructuring pattern. Unregistered
    /// declarations (ambiguous or unresolved) are skipped.
    pub fn pattern_identifier(&self, acc: DependencySet, id: &Identifier) -> DependencySet {
        if self.env.is_registered(id.loc) {
            acc.with_edge(id.loc, id.loc)
        } else {
            acc
        }
    }

    /// A type binding identifier; these are always registered.
    pub fn type_binding_identifier(&self, acc: DependencySet, id: &Identifier) -> DependencySet {
        acc.with_edge(id.loc, id.loc)
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    pub fn expression(&self, acc: DependencySet, expr: &Expression) -> DependencySet {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROWTH_SIZE, || {
            self.expression_inner(acc, expr)
        })
    }

    fn expression_inner(&self, acc: DependencySet, expr: &Expression) -> DependencySet {
        match &expr.kind {
            ExpressionKind::Identifier(id) => self.value_reference(acc, id),
            ExpressionKind::Literal(_)
            | ExpressionKind::This
            | ExpressionKind::Super
            | ExpressionKind::MetaProperty { .. } => acc,
            ExpressionKind::Array(elements) => elements.iter().fold(acc, |acc, element| match element {
                ArrayElement::Expression(e) | ArrayElement::Spread(e) => self.expression(acc, e),
                ArrayElement::Hole => acc,
            }),
            ExpressionKind::Object(properties) => properties
                .iter()
                .fold(acc, |acc, property| self.object_property(acc, property)),
            ExpressionKind::Template(expressions) | ExpressionKind::Sequence(expressions) => {
                self.expressions(acc, expressions)
            }
            ExpressionKind::TaggedTemplate { tag, expressions } => {
                let acc = self.expression(acc, tag);
                self.expressions(acc, expressions)
            }
            ExpressionKind::Member {
                object, property, ..
            } => {
                let acc = self.expression(acc, object);
                match property {
                    MemberProperty::Computed(e) => self.expression(acc, e),
                    MemberProperty::Identifier(_) | MemberProperty::PrivateName(_) => acc,
                }
            }
            ExpressionKind::Call {
                callee,
                type_args,
                arguments,
                ..
            }
            | ExpressionKind::New {
                callee,
                type_args,
                arguments,
            } => {
                let acc = self.expression(acc, callee);
                let acc = self.types(acc, type_args);
                self.arguments(acc, arguments)
            }
            ExpressionKind::Unary { argument, .. }
            | ExpressionKind::Update { argument, .. }
            | ExpressionKind::Await(argument)
            | ExpressionKind::Import(argument) => self.expression(acc, argument),
            ExpressionKind::Binary { left, right, .. }
            | ExpressionKind::Logical { left, right, .. } => {
                let acc = self.expression(acc, left);
                self.expression(acc, right)
            }
            ExpressionKind::Conditional {
                test,
                consequent,
                alternate,
            } => {
                let acc = self.expression(acc, test);
                let acc = self.expression(acc, consequent);
                self.expression(acc, alternate)
            }
            ExpressionKind::Assignment {
                operator,
                target,
                value,
            } => {
                // Compound assignments read their target first.
                let acc = match &target.kind {
                    PatternKind::Identifier { name, .. } if operator.is_compound() => {
                        self.value_reference(acc, name)
                    }
                    _ => acc,
                };
                let acc = self.pattern(acc, target);
                self.expression(acc, value)
            }
            ExpressionKind::TypeCast {
                expression,
                annotation,
            } => {
                let acc = self.expression(acc, expression);
                self.type_node(acc, annotation)
            }
            ExpressionKind::Function(function) | ExpressionKind::ArrowFunction(function) => {
                self.function(acc, function, function.is_fully_annotated())
            }
            ExpressionKind::Class(class) => self.class(acc, class, class.is_fully_annotated()),
            ExpressionKind::Yield { argument, .. } => match argument {
                Some(argument) => self.expression(acc, argument),
                None => acc,
            },
        }
    }

    fn expressions(&self, acc: DependencySet, expressions: &[Expression]) -> DependencySet {
        expressions
            .iter()
            .fold(acc, |acc, expr| self.expression(acc, expr))
    }

    fn arguments(&self, acc: DependencySet, arguments: &[Argument]) -> DependencySet {
        arguments.iter().fold(acc, |acc, argument| match argument {
            Argument::Expression(e) | Argument::Spread(e) => self.expression(acc, e),
        })
    }

    fn object_property(&self, acc: DependencySet, property: &ObjectProperty) -> DependencySet {
        match property {
            ObjectProperty::Init { key, value, .. } => {
                let acc = self.property_key(acc, key);
                self.expression(acc, value)
            }
            ObjectProperty::Method { key, function }
            | ObjectProperty::Getter { key, function }
            | ObjectProperty::Setter { key, function } => {
                let acc = self.property_key(acc, key);
                self.function(acc, function, function.is_fully_annotated())
            }
            ObjectProperty::Spread(e) => self.expression(acc, e),
        }
    }

    /// Only computed keys contain references.
    pub fn property_key(&self, acc: DependencySet, key: &PropertyKey) -> DependencySet {
        match key {
            PropertyKey::Computed(e) => self.expression(acc, e),
            PropertyKey::Identifier(_) | PropertyKey::Literal(_) | PropertyKey::PrivateName(_) => {
                acc
            }
        }
    }

    // =========================================================================
    // Types
    // =========================================================================

    pub fn type_node(&self, acc: DependencySet, ty: &TypeNode) -> DependencySet {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROWTH_SIZE, || {
            self.type_node_inner(acc, ty)
        })
    }

    fn type_node_inner(&self, acc: DependencySet, ty: &TypeNode) -> DependencySet {
        match &ty.kind {
            TypeNodeKind::Any
            | TypeNodeKind::Mixed
            | TypeNodeKind::Empty
            | TypeNodeKind::Void
            | TypeNodeKind::Null
            | TypeNodeKind::Number
            | TypeNodeKind::String
            | TypeNodeKind::Boolean
            | TypeNodeKind::Symbol
            | TypeNodeKind::BigInt
            | TypeNodeKind::This
            | TypeNodeKind::Literal(_) => acc,
            TypeNodeKind::Generic(generic) => self.generic_type(acc, generic),
            TypeNodeKind::Typeof { target, type_args } => {
                let acc = self.value_reference(acc, target.head());
                self.types(acc, type_args)
            }
            TypeNodeKind::Function(function) => self.function_type(acc, function),
            TypeNodeKind::Object(object) => self.object_type(acc, object),
            TypeNodeKind::Union(members)
            | TypeNodeKind::Intersection(members)
            | TypeNodeKind::Tuple(members) => self.types(acc, members),
            TypeNodeKind::Array(inner) | TypeNodeKind::Nullable(inner) | TypeNodeKind::Keyof(inner) => {
                self.type_node(acc, inner)
            }
            TypeNodeKind::IndexedAccess { object, index, .. } => {
                let acc = self.type_node(acc, object);
                self.type_node(acc, index)
            }
        }
    }

    pub fn types(&self, acc: DependencySet, types: &[TypeNode]) -> DependencySet {
        types.iter().fold(acc, |acc, ty| self.type_node(acc, ty))
    }

    fn type_name(&self, acc: DependencySet, name: &TypeName) -> DependencySet {
        self.type_reference(acc, name.head())
    }

    pub fn generic_type(&self, acc: DependencySet, generic: &GenericType) -> DependencySet {
        let acc = self.type_name(acc, &generic.name);
        self.types(acc, &generic.type_args)
    }

    pub fn generic_types(&self, acc: DependencySet, generics: &[GenericType]) -> DependencySet {
        generics
            .iter()
            .fold(acc, |acc, generic| self.generic_type(acc, generic))
    }

    fn function_type(&self, acc: DependencySet, function: &FunctionType) -> DependencySet {
        let acc = self.type_params(acc, &function.type_params);
        let acc = self.optional_type(acc, function.this_param.as_ref());
        let acc = function
            .params
            .iter()
            .chain(function.rest.iter())
            .fold(acc, |acc, param| self.type_node(acc, &param.annotation));
        self.type_node(acc, &function.return_type)
    }

    pub fn object_type(&self, acc: DependencySet, object: &ObjectType) -> DependencySet {
        object
            .properties
            .iter()
            .fold(acc, |acc, property| match property {
                ObjectTypeProperty::Property { key, value, .. } => {
                    let acc = self.property_key(acc, key);
                    self.type_node(acc, value)
                }
                ObjectTypeProperty::Indexer { key, value, .. } => {
                    let acc = self.type_node(acc, key);
                    self.type_node(acc, value)
                }
                ObjectTypeProperty::CallProperty(function) => self.function_type(acc, function),
                ObjectTypeProperty::Spread(ty) => self.type_node(acc, ty),
            })
    }

    pub fn optional_type(&self, acc: DependencySet, ty: Option<&TypeNode>) -> DependencySet {
        match ty {
            Some(ty) => self.type_node(acc, ty),
            None => acc,
        }
    }

    /// Type parameter declarations: each name binds itself, then its bound
    /// and default are ordinary types.
    pub fn type_params(&self, acc: DependencySet, params: &[TypeParamDecl]) -> DependencySet {
        params.iter().fold(acc, |acc, param| {
            let acc = self.type_binding_identifier(acc, &param.name);
            let acc = self.optional_type(acc, param.bound.as_ref());
            self.optional_type(acc, param.default.as_ref())
        })
    }

    // =========================================================================
    // Patterns
    // =========================================================================

    pub fn pattern(&self, acc: DependencySet, pattern: &Pattern) -> DependencySet {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROWTH_SIZE, || {
            self.pattern_inner(acc, pattern)
        })
    }

    fn pattern_inner(&self, acc: DependencySet, pattern: &Pattern) -> DependencySet {
        match &pattern.kind {
            PatternKind::Identifier {
                name, annotation, ..
            } => {
                let acc = self.pattern_identifier(acc, name);
                self.optional_type(acc, annotation.as_ref())
            }
            PatternKind::Object {
                properties,
                annotation,
            } => {
                let acc = properties.iter().fold(acc, |acc, property| match property {
                    ObjectPatternProperty::Property {
                        key,
                        pattern,
                        default,
                        ..
                    } => {
                        let acc = self.property_key(acc, key);
                        let acc = self.pattern(acc, pattern);
                        self.optional_expression(acc, default.as_ref())
                    }
                    ObjectPatternProperty::Rest(rest) => self.pattern(acc, rest),
                });
                self.optional_type(acc, annotation.as_ref())
            }
            PatternKind::Array {
                elements,
                annotation,
            } => {
                let acc = elements.iter().flatten().fold(acc, |acc, element| match element {
                    ArrayPatternElement::Element { pattern, default } => {
                        let acc = self.pattern(acc, pattern);
                        self.optional_expression(acc, default.as_ref())
                    }
                    ArrayPatternElement::Rest(rest) => self.pattern(acc, rest),
                });
                self.optional_type(acc, annotation.as_ref())
            }
            PatternKind::Expression(target) => self.expression(acc, target),
        }
    }

    fn optional_expression(&self, acc: DependencySet, expr: Option<&Expression>) -> DependencySet {
        match expr {
            Some(expr) => self.expression(acc, expr),
            None => acc,
        }
    }

    // =========================================================================
    // Statements
    // =========================================================================

    pub fn statements(&self, acc: DependencySet, statements: &[Statement]) -> DependencySet {
        statements
            .iter()
            .fold(acc, |acc, statement| self.statement(acc, statement))
    }

    pub fn statement(&self, acc: DependencySet, statement: &Statement) -> DependencySet {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROWTH_SIZE, || {
            self.statement_inner(acc, statement)
        })
    }

    fn statement_inner(&self, acc: DependencySet, statement: &Statement) -> DependencySet {
        match &statement.kind {
            StatementKind::Expression(e) | StatementKind::Throw(e) => self.expression(acc, e),
            StatementKind::VariableDeclaration { declarations, .. } => {
                self.declarators(acc, declarations)
            }
            StatementKind::Return(argument) => self.optional_expression(acc, argument.as_ref()),
            StatementKind::If {
                test,
                consequent,
                alternate,
            } => {
                let acc = self.expression(acc, test);
                let acc = self.statement(acc, consequent);
                match alternate {
                    Some(alternate) => self.statement(acc, alternate),
                    None => acc,
                }
            }
            StatementKind::While { test, body } | StatementKind::DoWhile { body, test } => {
                let acc = self.expression(acc, test);
                self.statement(acc, body)
            }
            StatementKind::For {
                init,
                test,
                update,
                body,
            } => {
                let acc = match init {
                    Some(ForInit::Declaration { declarations, .. }) => {
                        self.declarators(acc, declarations)
                    }
                    Some(ForInit::Expression(e)) => self.expression(acc, e),
                    None => acc,
                };
                let acc = self.optional_expression(acc, test.as_ref());
                let acc = self.optional_expression(acc, update.as_ref());
                self.statement(acc, body)
            }
            StatementKind::ForIn { left, right, body }
            | StatementKind::ForOf {
                left, right, body, ..
            } => {
                let acc = match left {
                    ForLeft::Declaration { id, .. } | ForLeft::Pattern(id) => self.pattern(acc, id),
                };
                let acc = self.expression(acc, right);
                self.statement(acc, body)
            }
            StatementKind::Block(body) => self.statements(acc, body),
            StatementKind::Try {
                block,
                handler,
                finalizer,
            } => {
                let acc = self.statements(acc, block);
                let acc = match handler {
                    Some(handler) => {
                        let acc = match &handler.param {
                            Some(param) => self.pattern(acc, param),
                            None => acc,
                        };
                        self.statements(acc, &handler.body)
                    }
                    None => acc,
                };
                match finalizer {
                    Some(finalizer) => self.statements(acc, finalizer),
                    None => acc,
                }
            }
            StatementKind::Switch {
                discriminant,
                cases,
            } => {
                let acc = self.expression(acc, discriminant);
                cases.iter().fold(acc, |acc, case| {
                    let acc = self.optional_expression(acc, case.test.as_ref());
                    self.statements(acc, &case.consequent)
                })
            }
            StatementKind::Labeled { body, .. } => self.statement(acc, body),
            StatementKind::FunctionDeclaration(function) => {
                self.function(acc, function, function.is_fully_annotated())
            }
            StatementKind::ClassDeclaration(class) => {
                self.class(acc, class, class.is_fully_annotated())
            }
            StatementKind::TypeAlias(alias) => {
                let acc = self.type_binding_identifier(acc, &alias.id);
                let acc = self.type_params(acc, &alias.type_params);
                self.type_node(acc, &alias.right)
            }
            StatementKind::Interface(interface) => {
                let acc = self.type_binding_identifier(acc, &interface.id);
                let acc = self.type_params(acc, &interface.type_params);
                let acc = self.generic_types(acc, &interface.extends);
                self.object_type(acc, &interface.body)
            }
            StatementKind::Break(_)
            | StatementKind::Continue(_)
            | StatementKind::Empty
            | StatementKind::Debugger => acc,
        }
    }

    fn declarators(&self, acc: DependencySet, declarations: &[VariableDeclarator]) -> DependencySet {
        declarations.iter().fold(acc, |acc, declarator| {
            let acc = self.pattern(acc, &declarator.id);
            self.optional_expression(acc, declarator.init.as_ref())
        })
    }

    // =========================================================================
    // Functions and classes
    // =========================================================================

    /// A function's signature, plus its body unless `fully_annotated`.
    pub fn function(
        &self,
        acc: DependencySet,
        function: &FunctionSyntax,
        fully_annotated: bool,
    ) -> DependencySet {
        let acc = self.function_signature(acc, function);
        if fully_annotated {
            return acc;
        }
        match &function.body {
            FunctionBody::Block(body) => self.statements(acc, body),
            FunctionBody::Expression(body) => self.expression(acc, body),
            FunctionBody::None => acc,
        }
    }

    fn function_signature(&self, acc: DependencySet, function: &FunctionSyntax) -> DependencySet {
        let acc = self.type_params(acc, &function.type_params);
        let acc = self.optional_type(acc, function.this_param.as_ref());
        let acc = function.params.iter().fold(acc, |acc, param| {
            let acc = self.pattern(acc, &param.pattern);
            self.optional_expression(acc, param.default.as_ref())
        });
        let acc = self.optional_type(acc, function.return_type.as_ref());
        match &function.predicate {
            Some(Predicate::Declared(e)) => self.expression(acc, e),
            Some(Predicate::Inferred) | None => acc,
        }
    }

    /// A class. Heritage clauses, decorators and type parameters are always
    /// explored; each member is explored by its own annotation state.
    /// Static blocks only matter while the class is not fully annotated.
    pub fn class(
        &self,
        acc: DependencySet,
        class: &ClassSyntax,
        fully_annotated: bool,
    ) -> DependencySet {
        let acc = self.type_params(acc, &class.type_params);
        let acc = match &class.extends {
            Some(extends) => {
                let acc = self.expression(acc, &extends.expression);
                self.types(acc, &extends.type_args)
            }
            None => acc,
        };
        let acc = self.generic_types(acc, &class.implements);
        let acc = self.expressions(acc, &class.decorators);
        class.body.members.iter().fold(acc, |acc, member| {
            self.class_member(acc, member, fully_annotated)
        })
    }

    fn class_member(
        &self,
        acc: DependencySet,
        member: &ClassMember,
        class_annotated: bool,
    ) -> DependencySet {
        let annotated = member.is_annotated();
        match member {
            ClassMember::Method { key, function, .. } => {
                let acc = self.property_key(acc, key);
                self.function(acc, function, annotated)
            }
            ClassMember::Property {
                key,
                annotation,
                value,
                ..
            } => {
                let acc = self.property_key(acc, key);
                self.member_value(acc, annotation.as_ref(), value.as_ref())
            }
            ClassMember::PrivateField {
                annotation, value, ..
            } => self.member_value(acc, annotation.as_ref(), value.as_ref()),
            ClassMember::StaticBlock { body, .. } if !class_annotated => {
                self.statements(acc, body)
            }
            ClassMember::StaticBlock { .. } => acc,
        }
    }

    fn member_value(
        &self,
        acc: DependencySet,
        annotation: Option<&TypeNode>,
        value: Option<&Expression>,
    ) -> DependencySet {
        match annotation {
            Some(annotation) => self.type_node(acc, annotation),
            None => self.optional_expression(acc, value),
        }
    }
}

#[cfg(test)]
#[path = "../tests/collector_tests.rs"]
mod tests;
