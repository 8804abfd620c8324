use crate::spec::SecurityRequirement;
use std::collections::BTreeSet;

/// Flatten an operation's security requirements into one comparable token.
///
/// Every scope mentioned anywhere in `requirements` is collected into a set,
/// sorted lexicographically and joined with `,`. A scheme that lists no scopes
/// contributes its own name instead. The OR/AND structure of the list is not
/// preserved.
///
/// A name containing `,` is split at the commas (empty pieces are dropped), so
/// every comma in the output is a separator and the tokens stay unique.
///
/// Returns `None` when `security` is absent, when it is an explicit empty list
/// (the OpenAPI opt-out), and when no requirement names any scheme. The first two
/// are distinct in OpenAPI but collapse to the same output here.
///
/// ```
/// use oas_routes::normalise::normalise_security;
/// use oas_routes::spec::SecurityRequirement;
///
/// let mut req = SecurityRequirement::new();
/// req.insert("example".into(), vec!["identity.email".into(), "admin".into()]);
/// req.insert("bearerAuth".into(), vec![]);
/// assert_eq!(
///     normalise_security(Some(std::slice::from_ref(&req))).as_deref(),
///     Some("admin,bearerAuth,identity.email")
/// );
/// assert_eq!(normalise_security(Some(&[] as &[SecurityRequirement])), None);
/// ```
pub fn normalise_security(requirements: Option<&[SecurityRequirement]>) -> Option<String> {
    let tokens: BTreeSet<&str> = requirements?
        .iter()
        .flat_map(|req| {
            req.iter().flat_map(|(scheme, scopes)| {
                let name = scopes.is_empty().then_some(scheme.as_str());
                name.into_iter().chain(scopes.iter().map(String::as_str))
            })
        })
        .flat_map(|token| token.split(','))
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.is_empty() {
        return None;
    }

    Some(tokens.into_iter().collect::<Vec<_>>().join(","))
}
