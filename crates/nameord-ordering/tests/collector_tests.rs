use super::*;
use nameord_common::SourceId;
use nameord_env::EnvironmentMap;
use nameord_syntax::ast::{
    AssignmentOperator, BinaryOperator, ClassExtends, Literal, MethodKind, TypeNode,
};

fn loc(offset: u32) -> Location {
    Location::new(SourceId(0), offset, offset + 1)
}

fn read(offset: u32, name: &str) -> Expression {
    Expression::identifier(loc(offset), name)
}

fn collect_expression(env: &EnvironmentMap, expr: &Expression) -> DependencySet {
    UseCollector::new(env).expression(DependencySet::new(), expr)
}

#[test]
fn value_reference_depends_on_providers_of_reaching_writes() {
    let env = EnvironmentMap::new()
        .with_write(loc(10), loc(1))
        .with_write(loc(10), loc(2));
    let deps = collect_expression(&env, &read(10, "x"));

    assert_eq!(deps.targets(), vec![loc(1), loc(2)]);
    assert_eq!(deps.evidence(&loc(1)), Some(&[loc(10)][..]));
    assert_eq!(deps.evidence(&loc(2)), Some(&[loc(10)][..]));
}

#[test]
fn unresolved_reference_adds_nothing() {
    let env = EnvironmentMap::new();
    let deps = collect_expression(&env, &read(10, "x"));
    assert!(deps.is_empty());
}

#[test]
fn type_reference_uses_type_providers() {
    let env = EnvironmentMap::new()
        .with_write(loc(10), loc(1))
        .with_providers(loc(1), false, [loc(2)])
        .with_providers(loc(1), true, [loc(3)]);
    let collector = UseCollector::new(&env);

    let deps = collector.type_node(DependencySet::new(), &TypeNode::named(loc(10), "T"));
    assert_eq!(deps.targets(), vec![loc(3)]);

    let deps = collector.expression(DependencySet::new(), &read(10, "T"));
    assert_eq!(deps.targets(), vec![loc(2)]);
}

#[test]
fn typeof_annotation_is_a_value_reference() {
    let env = EnvironmentMap::new()
        .with_write(loc(10), loc(1))
        .with_providers(loc(1), false, [loc(2)])
        .with_providers(loc(1), true, [loc(3)]);
    let deps = UseCollector::new(&env)
        .type_node(DependencySet::new(), &TypeNode::type_of(loc(10), "x"));
    assert_eq!(deps.targets(), vec![loc(2)]);
}

#[test]
fn only_the_head_of_a_qualified_type_name_is_a_reference() {
    let env = EnvironmentMap::new()
        .with_write(loc(10), loc(1))
        .with_write(loc(11), loc(2));
    let qualified = TypeNode::new(
        loc(12),
        TypeNodeKind::Generic(GenericType {
            loc: loc(12),
            name: TypeName::Qualified {
                loc: loc(12),
                qualification: Box::new(TypeName::Identifier(Identifier::new(loc(10), "A"))),
                member: Identifier::new(loc(11), "B"),
            },
            type_args: Vec::new(),
        }),
    );
    let deps = UseCollector::new(&env).type_node(DependencySet::new(), &qualified);
    assert_eq!(deps.targets(), vec![loc(1)]);
}

#[test]
fn member_names_and_object_keys_are_not_references() {
    // `o.p` and `{ p: 1 }` with a write registered at every name location.
    let env = EnvironmentMap::new()
        .with_write(loc(10), loc(1))
        .with_write(loc(11), loc(2))
        .with_write(loc(12), loc(3));

    let member = Expression::member(loc(13), read(10, "o"), Identifier::new(loc(11), "p"));
    assert_eq!(collect_expression(&env, &member).targets(), vec![loc(1)]);

    let object = Expression::object(
        loc(14),
        vec![ObjectProperty::Init {
            key: PropertyKey::Identifier(Identifier::new(loc(12), "p")),
            value: Expression::number(loc(15), 1.0),
            shorthand: false,
        }],
    );
    assert!(collect_expression(&env, &object).is_empty());
}

#[test]
fn computed_keys_are_references() {
    let env = EnvironmentMap::new()
        .with_write(loc(10), loc(1))
        .with_write(loc(11), loc(2));

    let object = Expression::object(
        loc(14),
        vec![ObjectProperty::Init {
            key: PropertyKey::Computed(Box::new(read(10, "k"))),
            value: Expression::number(loc(15), 1.0),
            shorthand: false,
        }],
    );
    assert_eq!(collect_expression(&env, &object).targets(), vec![loc(1)]);

    let member = Expression::new(
        loc(16),
        ExpressionKind::Member {
            object: Box::new(Expression::new(loc(17), ExpressionKind::This)),
            property: MemberProperty::Computed(Box::new(read(11, "i"))),
            optional: false,
        },
    );
    assert_eq!(collect_expression(&env, &member).targets(), vec![loc(2)]);
}

#[test]
fn private_names_are_not_references() {
    let env = EnvironmentMap::new().with_write(loc(11), loc(2));
    let member = Expression::new(
        loc(16),
        ExpressionKind::Member {
            object: Box::new(Expression::new(loc(17), ExpressionKind::This)),
            property: MemberProperty::PrivateName(Identifier::new(loc(11), "secret")),
            optional: false,
        },
    );
    assert!(collect_expression(&env, &member).is_empty());
}

#[test]
fn annotated_function_skips_its_body() {
    // function f(a: A): R { return y; }
    let env = EnvironmentMap::new()
        .with_write(loc(10), loc(1))
        .with_write(loc(11), loc(2))
        .with_write(loc(12), loc(3));
    let function = FunctionSyntax::new(
        loc(20),
        FunctionBody::Block(vec![Statement::ret(loc(21), Some(read(12, "y")))]),
    )
    .with_param(Pattern::annotated(loc(22), "a", TypeNode::named(loc(10), "A")))
    .with_return_type(TypeNode::named(loc(11), "R"));
    let collector = UseCollector::new(&env);

    let signature_only = collector.function(DependencySet::new(), &function, true);
    assert_eq!(signature_only.targets(), vec![loc(1), loc(2)]);

    let everything = collector.function(DependencySet::new(), &function, false);
    assert_eq!(everything.targets(), vec![loc(1), loc(2), loc(3)]);
}

#[test]
fn nested_arrow_bodies_follow_their_own_annotations() {
    // () => y    and    (): R => y
    let env = EnvironmentMap::new()
        .with_write(loc(10), loc(1))
        .with_write(loc(11), loc(2));
    let unannotated = Expression::arrow(FunctionSyntax::new(
        loc(20),
        FunctionBody::Expression(Box::new(read(10, "y"))),
    ));
    let annotated = Expression::arrow(
        FunctionSyntax::new(loc(21), FunctionBody::Expression(Box::new(read(10, "y"))))
            .with_return_type(TypeNode::named(loc(11), "R")),
    );

    assert_eq!(collect_expression(&env, &unannotated).targets(), vec![loc(1)]);
    assert_eq!(collect_expression(&env, &annotated).targets(), vec![loc(2)]);
}

#[test]
fn declared_predicate_is_part_of_the_signature() {
    let env = EnvironmentMap::new().with_write(loc(10), loc(1));
    let mut function = FunctionSyntax::new(loc(20), FunctionBody::None)
        .with_return_type(TypeNode::new(loc(21), TypeNodeKind::Boolean));
    function.predicate = Some(Predicate::Declared(read(10, "check")));

    let deps = UseCollector::new(&env).function(DependencySet::new(), &function, true);
    assert_eq!(deps.targets(), vec![loc(1)]);
}

fn class_with_members(members: Vec<ClassMember>) -> ClassSyntax {
    ClassSyntax::new(loc(40), members)
}

#[test]
fn annotated_class_property_skips_its_value() {
    // class { p: T = y; q = z; }
    let env = EnvironmentMap::new()
        .with_write(loc(10), loc(1))
        .with_write(loc(11), loc(2))
        .with_write(loc(12), loc(3));
    let class = class_with_members(vec![
        ClassMember::Property {
            loc: loc(41),
            key: PropertyKey::Identifier(Identifier::new(loc(42), "p")),
            annotation: Some(TypeNode::named(loc(10), "T")),
            value: Some(read(11, "y")),
            is_static: false,
            variance: None,
        },
        ClassMember::Property {
            loc: loc(43),
            key: PropertyKey::Identifier(Identifier::new(loc(44), "q")),
            annotation: None,
            value: Some(read(12, "z")),
            is_static: false,
            variance: None,
        },
    ]);

    let deps = UseCollector::new(&env).class(DependencySet::new(), &class, false);
    assert_eq!(deps.targets(), vec![loc(1), loc(3)]);
}

#[test]
fn class_methods_follow_their_own_annotations() {
    // class { constructor(a: A) { y } m() { z } }
    let env = EnvironmentMap::new()
        .with_write(loc(10), loc(1))
        .with_write(loc(11), loc(2))
        .with_write(loc(12), loc(3));
    let constructor = FunctionSyntax::new(
        loc(50),
        FunctionBody::Block(vec![Statement::expression(read(11, "y"))]),
    )
    .with_param(Pattern::annotated(loc(51), "a", TypeNode::named(loc(10), "A")));
    let method = FunctionSyntax::new(
        loc(52),
        FunctionBody::Block(vec![Statement::expression(read(12, "z"))]),
    );
    let class = class_with_members(vec![
        ClassMember::Method {
            loc: loc(53),
            key: PropertyKey::Identifier(Identifier::new(loc(54), "constructor")),
            kind: MethodKind::Constructor,
            is_static: false,
            function: constructor,
        },
        ClassMember::Method {
            loc: loc(55),
            key: PropertyKey::Identifier(Identifier::new(loc(56), "m")),
            kind: MethodKind::Method,
            is_static: false,
            function: method,
        },
    ]);

    let deps = UseCollector::new(&env).class(DependencySet::new(), &class, false);
    assert_eq!(deps.targets(), vec![loc(1), loc(3)]);
}

#[test]
fn class_heritage_and_decorators_are_always_explored() {
    let env = EnvironmentMap::new()
        .with_write(loc(10), loc(1))
        .with_write(loc(11), loc(2))
        .with_write(loc(12), loc(3))
        .with_write(loc(13), loc(4));
    let mut class = class_with_members(Vec::new());
    class.extends = Some(ClassExtends {
        loc: loc(60),
        expression: read(10, "Base"),
        type_args: vec![TypeNode::named(loc(11), "Arg")],
    });
    class.implements = vec![GenericType {
        loc: loc(61),
        name: TypeName::Identifier(Identifier::new(loc(12), "I")),
        type_args: Vec::new(),
    }];
    class.decorators = vec![read(13, "decorate")];

    let deps = UseCollector::new(&env).class(DependencySet::new(), &class, true);
    assert_eq!(deps.targets(), vec![loc(1), loc(2), loc(3), loc(4)]);
}

#[test]
fn static_blocks_are_skipped_for_annotated_classes() {
    let env = EnvironmentMap::new().with_write(loc(10), loc(1));
    let class = class_with_members(vec![ClassMember::StaticBlock {
        loc: loc(41),
        body: vec![Statement::expression(read(10, "y"))],
    }]);
    let collector = UseCollector::new(&env);

    assert!(collector.class(DependencySet::new(), &class, true).is_empty());
    assert_eq!(
        collector.class(DependencySet::new(), &class, false).targets(),
        vec![loc(1)]
    );
}

#[test]
fn pattern_identifiers_depend_on_themselves_only_when_registered() {
    let env = EnvironmentMap::new().register(loc(1));
    let collector = UseCollector::new(&env);

    let registered = collector.pattern(DependencySet::new(), &Pattern::identifier(loc(1), "a"));
    assert_eq!(registered.targets(), vec![loc(1)]);
    assert_eq!(registered.evidence(&loc(1)), Some(&[loc(1)][..]));

    let ambiguous = collector.pattern(DependencySet::new(), &Pattern::identifier(loc(2), "b"));
    assert!(ambiguous.is_empty());
}

#[test]
fn type_parameters_always_depend_on_themselves() {
    let env = EnvironmentMap::new().with_write(loc(10), loc(1));
    let params = vec![
        TypeParamDecl::new(Identifier::new(loc(5), "T"))
            .with_bound(TypeNode::named(loc(10), "Bound")),
    ];
    let deps = UseCollector::new(&env).type_params(DependencySet::new(), &params);
    assert_eq!(deps.targets(), vec![loc(1), loc(5)]);
}

#[test]
fn compound_assignment_reads_its_target() {
    // x += y, where x is an unregistered assignment target
    let env = EnvironmentMap::new()
        .with_write(loc(10), loc(1))
        .with_write(loc(11), loc(2));
    let assign = |operator| {
        Expression::new(
            loc(12),
            ExpressionKind::Assignment {
                operator,
                target: Box::new(Pattern::identifier(loc(10), "x")),
                value: Box::new(read(11, "y")),
            },
        )
    };

    assert_eq!(
        collect_expression(&env, &assign(AssignmentOperator::PlusAssign)).targets(),
        vec![loc(1), loc(2)]
    );
    assert_eq!(
        collect_expression(&env, &assign(AssignmentOperator::Assign)).targets(),
        vec![loc(2)]
    );
}

#[test]
fn refinement_expressions_are_explored() {
    // if (x instanceof C && !isFoo(x)) { ... x ... }
    let env = EnvironmentMap::new()
        .with_write(loc(10), loc(1))
        .with_write(loc(11), loc(2))
        .with_write(loc(12), loc(3))
        .with_refinement(
            loc(1),
            Refinement::and(
                Refinement::InstanceOf(read(11, "C")),
                Refinement::not(Refinement::Latent {
                    guard: read(12, "isFoo"),
                    argument_index: 0,
                }),
            ),
        );
    let deps = collect_expression(&env, &read(10, "x"));

    assert_eq!(deps.targets(), vec![loc(1), loc(2), loc(3)]);
    assert_eq!(deps.evidence(&loc(2)), Some(&[loc(11)][..]));
}

#[test]
fn leaf_refinements_add_nothing() {
    let env = EnvironmentMap::new()
        .with_write(loc(10), loc(1))
        .with_refinement(loc(1), Refinement::Truthy)
        .with_refinement(
            loc(1),
            Refinement::or(Refinement::Null, Refinement::Literal(Literal::Boolean(true))),
        );
    let deps = collect_expression(&env, &read(10, "x"));
    assert_eq!(deps.targets(), vec![loc(1)]);
}

#[test]
fn self_referencing_refinements_terminate() {
    // The guard of `x` reads `x` again through the same write.
    let env = EnvironmentMap::new()
        .with_write(loc(10), loc(1))
        .with_write(loc(11), loc(1))
        .with_refinement(loc(1), Refinement::InstanceOf(read(11, "x")));
    let deps = collect_expression(&env, &read(10, "x"));

    assert_eq!(deps.targets(), vec![loc(1)]);
    assert_eq!(deps.evidence(&loc(1)), Some(&[loc(10), loc(11)][..]));
}

#[test]
fn statements_in_bodies_are_walked() {
    // if (a) { for (const i of b) { c } } else { try { d } catch (e) { f } }
    let env = (1..=6).fold(EnvironmentMap::new(), |env, n| {
        env.with_write(loc(10 + n), loc(n))
    });
    let body = Statement::new(
        loc(30),
        StatementKind::If {
            test: read(11, "a"),
            consequent: Box::new(Statement::new(
                loc(31),
                StatementKind::ForOf {
                    left: ForLeft::Pattern(Pattern::identifier(loc(32), "i")),
                    right: read(12, "b"),
                    body: Box::new(Statement::expression(read(13, "c"))),
                    is_await: false,
                },
            )),
            alternate: Some(Box::new(Statement::new(
                loc(33),
                StatementKind::Try {
                    block: vec![Statement::expression(read(14, "d"))],
                    handler: Some(nameord_syntax::ast::CatchClause {
                        loc: loc(34),
                        param: Some(Pattern::identifier(loc(35), "e")),
                        body: vec![Statement::expression(read(16, "f"))],
                    }),
                    finalizer: None,
                },
            ))),
        },
    );
    let deps = UseCollector::new(&env).statement(DependencySet::new(), &body);
    assert_eq!(deps.targets(), vec![loc(1), loc(2), loc(3), loc(4), loc(6)]);
}

#[test]
fn deeply_nested_expressions_do_not_overflow() {
    let env = EnvironmentMap::new().with_write(loc(0), loc(1));
    let mut expr = read(0, "x");
    for i in 0..20_000 {
        expr = Expression::binary(
            loc(100 + i),
            BinaryOperator::Plus,
            expr,
            Expression::number(loc(100 + i), 1.0),
        );
    }
    let deps = collect_expression(&env, &expr);
    assert_eq!(deps.targets(), vec![loc(1)]);
    // Recursive drop of the tree would itself overflow the test thread.
    std::mem::forget(expr);
}
