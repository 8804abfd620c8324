/// Canonicalise a raw route string.
///
/// Duplicate `/` separators are collapsed, the result always starts with exactly
/// one `/`, and a trailing `/` is dropped unless the route is the root path.
///
/// ```
/// use oas_routes::normalise::normalise_route;
///
/// assert_eq!(normalise_route("/api/v1//test/"), "/api/v1/test");
/// assert_eq!(normalise_route(""), "/");
/// ```
pub fn normalise_route(raw: &str) -> String {
    let mut route = String::with_capacity(raw.len() + 1);
    for segment in raw.split('/').filter(|s| !s.is_empty()) {
        route.push('/');
        route.push_str(segment);
    }
    if route.is_empty() {
        route.push('/');
    }
    route
}

/// Concatenate a base path and a path template, then canonicalise.
///
/// An absent base path behaves as the empty string.
pub fn join_route(base_path: Option<&str>, path: &str) -> String {
    match base_path {
        Some(base) => normalise_route(&format!("{base}{path}")),
        None => normalise_route(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_variants() {
        assert_eq!(normalise_route("/"), "/");
        assert_eq!(normalise_route("//"), "/");
        assert_eq!(normalise_route(""), "/");
    }

    #[test]
    fn test_collapses_and_trims() {
        assert_eq!(normalise_route("api//v1///pets/"), "/api/v1/pets");
        assert_eq!(normalise_route("/pets/{id}"), "/pets/{id}");
    }

    #[test]
    fn test_join_with_base() {
        assert_eq!(join_route(Some("/api/v1"), "/test"), "/api/v1/test");
        assert_eq!(join_route(Some("/api/v1/"), "/test"), "/api/v1/test");
        assert_eq!(join_route(Some("/api/v1"), "/"), "/api/v1");
        assert_eq!(join_route(None, "/ping"), "/ping");
    }

    #[test]
    fn test_idempotent_on_examples() {
        for raw in ["", "/", "a/b", "//a//b//", "/x/{y}/z/"] {
            let once = normalise_route(raw);
            assert_eq!(normalise_route(&once), once);
        }
    }
}
