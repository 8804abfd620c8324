use super::types::{ApiDocument, HttpMethod, Operation, RouteDescriptor};
use crate::normalise::{
    join_route, normalise_middleware, normalise_operation_id, normalise_security,
};
use crate::options::ExtractOptions;
use tracing::{debug, debug_span};

/// Whether `operation` is exempt from base-path prefixing.
///
/// True iff the operation has at least one tag and the first one equals `root_tag`.
pub fn is_root_operation(operation: &Operation, root_tag: &str) -> bool {
    operation.first_tag() == Some(root_tag)
}

/// Build a single descriptor for `operation` mounted at `path`.
pub fn build_descriptor<M: Clone>(
    document: &ApiDocument,
    path: &str,
    method: HttpMethod,
    operation: &Operation,
    options: &ExtractOptions<M>,
) -> RouteDescriptor<M> {
    let base_path = if is_root_operation(operation, &options.root_tag) {
        None
    } else {
        document.base_path.as_deref()
    };

    RouteDescriptor {
        method,
        route: join_route(base_path, path),
        operation_id: operation
            .operation_id
            .as_deref()
            .map(|id| normalise_operation_id(id, options.api_separator())),
        security: normalise_security(operation.security.as_deref()),
        middleware: normalise_middleware(&options.middleware, operation.x_middleware.as_ref()),
    }
}

/// Flatten every operation in `document` into a [`RouteDescriptor`].
///
/// Descriptors follow the document order of `paths`, then [`HttpMethod::ALL`]
/// within each path. Missing operation fields degrade to `None` or an empty list;
/// this function never fails.
///
/// ```
/// use oas_routes::spec::{extract_paths, ApiDocument};
/// use oas_routes::ExtractOptions;
/// use serde_json::json;
///
/// let doc = ApiDocument::from_value(json!({
///     "basePath": "/api/v1",
///     "paths": {
///         "/": { "get": { "tags": ["root"], "operationId": "versions" } },
///         "/test": { "get": { "operationId": "v1/test" } }
///     }
/// }))
/// .unwrap();
///
/// let routes = extract_paths(&doc, &ExtractOptions::<String>::default().with_api_separator("/"));
/// assert_eq!(routes[0].route, "/");
/// assert_eq!(routes[1].route, "/api/v1/test");
/// assert_eq!(routes[1].operation_id.as_deref(), Some("v1_test"));
/// ```
pub fn extract_paths<M: Clone>(
    document: &ApiDocument,
    options: &ExtractOptions<M>,
) -> Vec<RouteDescriptor<M>> {
    let _span = debug_span!("extract_paths", base_path = ?document.base_path).entered();
    let mut routes = Vec::with_capacity(document.operation_count());

    for (path, item) in &document.paths {
        for (method, operation) in item.methods() {
            let descriptor = build_descriptor(document, path, method, operation, options);
            debug!(
                method = %descriptor.method,
                route = %descriptor.route,
                operation_id = ?descriptor.operation_id,
                security = ?descriptor.security,
                "extracted route"
            );
            routes.push(descriptor);
        }
    }

    debug!(count = routes.len(), "route extraction complete");
    routes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{MiddlewareSelector, PathItem};

    fn op(tags: &[&str]) -> Operation {
        Operation {
            tags: Some(tags.iter().map(|t| t.to_string()).collect()),
            ..Operation::default()
        }
    }

    #[test]
    fn test_is_root_operation() {
        assert!(is_root_operation(&op(&["root"]), "root"));
        assert!(is_root_operation(&op(&["root", "misc"]), "root"));
        assert!(!is_root_operation(&op(&["misc", "root"]), "root"));
        assert!(!is_root_operation(&op(&[]), "root"));
        assert!(!is_root_operation(&Operation::default(), "root"));
        assert!(is_root_operation(&op(&["meta"]), "meta"));
    }

    #[test]
    fn test_descriptor_without_base_path() {
        let doc = ApiDocument::default();
        let d = build_descriptor(
            &doc,
            "/pets/",
            HttpMethod::Post,
            &Operation::default(),
            &ExtractOptions::<String>::default(),
        );
        assert_eq!(d.route, "/pets");
        assert_eq!(d.operation_id, None);
        assert_eq!(d.security, None);
        assert!(d.middleware.is_empty());
    }

    #[test]
    fn test_middleware_resolved_per_operation() {
        let item = PathItem {
            get: Some(Operation {
                x_middleware: Some(MiddlewareSelector::Single("auth".into())),
                ..Operation::default()
            }),
            delete: Some(Operation::default()),
            ..PathItem::default()
        };
        let mut doc = ApiDocument::default();
        doc.paths.insert("/things".into(), item);

        let options = ExtractOptions::default().with_middleware("auth", 7u32);
        let routes = extract_paths(&doc, &options);
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].method, HttpMethod::Get);
        assert_eq!(routes[0].middleware, vec![7]);
        assert_eq!(routes[1].method, HttpMethod::Delete);
        assert!(routes[1].middleware.is_empty());
    }
}
