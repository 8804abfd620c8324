#![allow(clippy::unwrap_used, clippy::expect_used)]

use oas_routes::normalise::{
    normalise_middleware, normalise_operation_id, normalise_route, normalise_security,
};
use oas_routes::spec::MiddlewareRegistry;
use oas_routes::{MiddlewareSelector, SecurityRequirement};
use proptest::prelude::*;

fn requirement_strategy() -> impl Strategy<Value = SecurityRequirement> {
    prop::collection::vec(
        (
            "[a-zA-Z,]{1,6}",
            prop::collection::vec("[a-z.,]{1,8}", 0..4),
        ),
        0..3,
    )
    .prop_map(|pairs| pairs.into_iter().collect())
}

proptest! {
    #[test]
    fn route_normalisation_is_idempotent(raw in "[a-z/{}._-]{0,32}") {
        let once = normalise_route(&raw);
        prop_assert_eq!(normalise_route(&once), once.clone());
        prop_assert!(once.starts_with('/'));
        prop_assert!(!once.contains("//"));
        prop_assert!(once == "/" || !once.ends_with('/'));
    }

    #[test]
    fn operation_id_normalisation_is_idempotent(
        id in "[a-z/:_.]{0,24}",
        sep in prop::option::of(prop::sample::select(vec!["/", ".", "::", "__", "_", ""])),
    ) {
        let once = normalise_operation_id(&id, sep);
        prop_assert_eq!(normalise_operation_id(&once, sep), once.clone());
        if let Some(sep) = sep.filter(|s| !s.is_empty() && *s != "_") {
            prop_assert!(!once.contains(sep));
        }
    }

    #[test]
    fn security_tokens_are_unique_and_sorted(
        reqs in prop::collection::vec(requirement_strategy(), 0..4),
    ) {
        let only_commas = |s: &String| s.chars().all(|c| c == ',');
        if let Some(token) = normalise_security(Some(reqs.as_slice())) {
            let parts: Vec<&str> = token.split(',').collect();
            prop_assert!(parts.iter().all(|p| !p.is_empty()));
            let mut sorted = parts.clone();
            sorted.sort_unstable();
            sorted.dedup();
            prop_assert_eq!(parts, sorted);
        } else {
            let all_empty = reqs.iter().flatten().all(|(scheme, scopes)| {
                if scopes.is_empty() {
                    only_commas(scheme)
                } else {
                    scopes.iter().all(only_commas)
                }
            });
            prop_assert!(all_empty);
        }
    }

    #[test]
    fn middleware_never_exceeds_selector(
        names in prop::collection::vec("[a-c]", 0..6),
    ) {
        let registry: MiddlewareRegistry<usize> =
            [("a".to_string(), 1), ("b".to_string(), 2)].into_iter().collect();
        let selector = MiddlewareSelector::List(names.clone());
        let resolved = normalise_middleware(&registry, Some(&selector));
        let known = names.iter().filter(|n| n.as_str() != "c").count();
        prop_assert_eq!(resolved.len(), known);
    }
}

#[test]
fn test_security_ignores_requirement_structure() {
    let and_form: SecurityRequirement = [
        ("oauth".to_string(), vec!["read".to_string()]),
        ("apiKey".to_string(), vec![]),
    ]
    .into_iter()
    .collect();
    let or_form: Vec<SecurityRequirement> = vec![
        [("oauth".to_string(), vec!["read".to_string()])]
            .into_iter()
            .collect(),
        [("apiKey".to_string(), vec![])].into_iter().collect(),
    ];
    assert_eq!(
        normalise_security(Some(std::slice::from_ref(&and_form))),
        normalise_security(Some(or_form.as_slice()))
    );
}
