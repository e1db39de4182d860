use super::*;
use nameord_common::SourceId;
use nameord_syntax::ast::Expression;

fn loc(offset: u32) -> Location {
    Location::new(SourceId(0), offset, offset + 1)
}

#[test]
fn unknown_locations_yield_empty_answers() {
    let env = EnvironmentMap::new();
    assert!(env.reaching_writes(loc(1)).is_empty());
    assert!(env.providers_of(loc(1), false).is_empty());
    assert!(env.refinements_of(loc(1)).is_empty());
    assert_eq!(env.providers_of_name(loc(1)), ProviderInfo::NONE);
    assert!(!env.is_registered(loc(1)));
}

#[test]
fn writes_provide_themselves_by_default() {
    let env = EnvironmentMap::new().with_write(loc(10), loc(1));
    assert_eq!(env.reaching_writes(loc(10)), &[loc(1)]);
    assert_eq!(env.providers_of(loc(1), false), &[loc(1)]);
    assert_eq!(env.providers_of(loc(1), true), &[loc(1)]);
}

#[test]
fn explicit_providers_override_the_default() {
    let env = EnvironmentMap::new()
        .with_providers(loc(1), true, [loc(2), loc(3)])
        .with_write(loc(10), loc(1));
    assert_eq!(env.providers_of(loc(1), false), &[loc(1)]);
    assert_eq!(env.providers_of(loc(1), true), &[loc(2), loc(3)]);
}

#[test]
fn declared_bindings_are_registered_providers() {
    let env = EnvironmentMap::new()
        .declare(loc(1))
        .with_name_providers(loc(5), [loc(1)]);

    let own = env.providers_of_name(loc(1));
    assert!(own.is_provider);
    assert_eq!(own.candidates, &[loc(1)]);

    let reassignment = env.providers_of_name(loc(5));
    assert!(!reassignment.is_provider);
    assert_eq!(reassignment.candidates, &[loc(1)]);
    assert!(env.is_registered(loc(5)));
}

#[test]
fn refinements_accumulate_per_write() {
    let guard = Refinement::Latent {
        guard: Expression::identifier(loc(7), "isFoo"),
        argument_index: 0,
    };
    let env = EnvironmentMap::new()
        .with_refinement(loc(1), Refinement::Truthy)
        .with_refinement(loc(1), Refinement::not(guard.clone()));

    let refinements = env.refinements_of(loc(1));
    assert_eq!(refinements.len(), 2);
    assert!(refinements[0].is_leaf());
    assert!(!refinements[1].is_leaf());
    assert_eq!(refinements[1], Refinement::Not(Box::new(guard)));
}
