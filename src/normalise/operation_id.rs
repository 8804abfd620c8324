/// Joiner that replaces the configured separator in operation ids.
pub const OPERATION_ID_JOINER: &str = "_";

/// Rewrite `operation_id`, replacing every occurrence of `separator` with `_`.
///
/// With no separator (or an empty one) the id is returned unchanged. Multi-character
/// separators are replaced until none remain, so the result never contains the
/// separator and a second pass is a no-op.
///
/// ```
/// use oas_routes::normalise::normalise_operation_id;
///
/// assert_eq!(normalise_operation_id("v1/test", Some("/")), "v1_test");
/// assert_eq!(normalise_operation_id("v1/test", None), "v1/test");
/// ```
pub fn normalise_operation_id(operation_id: &str, separator: Option<&str>) -> String {
    let sep = match separator {
        Some(sep) if !sep.is_empty() && sep != OPERATION_ID_JOINER => sep,
        _ => return operation_id.to_string(),
    };

    let mut out = operation_id.replace(sep, OPERATION_ID_JOINER);
    // A longer separator can reappear across a replacement boundary ("___" with "__").
    // Every pass shortens the string, so this terminates.
    while out.contains(sep) {
        out = out.replace(sep, OPERATION_ID_JOINER);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_every_occurrence() {
        assert_eq!(
            normalise_operation_id("api/v1/users/list", Some("/")),
            "api_v1_users_list"
        );
    }

    #[test]
    fn test_separator_absent_from_id() {
        assert_eq!(normalise_operation_id("versions", Some("/")), "versions");
    }

    #[test]
    fn test_empty_or_joiner_separator_is_noop() {
        assert_eq!(normalise_operation_id("a/b", Some("")), "a/b");
        assert_eq!(normalise_operation_id("a_b", Some("_")), "a_b");
    }

    #[test]
    fn test_multi_char_separator_is_idempotent() {
        let once = normalise_operation_id("a____b", Some("__"));
        assert_eq!(once, "a_b");
        assert_eq!(normalise_operation_id(&once, Some("__")), once);

        let once = normalise_operation_id("v1::users::get", Some("::"));
        assert_eq!(once, "v1_users_get");
    }
}
