use crate::spec::{MiddlewareRegistry, MiddlewareSelector};
use tracing::warn;

/// Resolve an operation's `x-middleware` selector against the global registry.
///
/// Values are returned in selector order and a name listed twice resolves twice.
/// Names missing from the registry are dropped and logged at `warn` level.
pub fn normalise_middleware<M: Clone>(
    registry: &MiddlewareRegistry<M>,
    selector: Option<&MiddlewareSelector>,
) -> Vec<M> {
    let Some(selector) = selector else {
        return Vec::new();
    };

    selector
        .names()
        .iter()
        .filter_map(|name| match registry.get(name) {
            Some(value) => Some(value.clone()),
            None => {
                warn!(middleware = %name, "unknown middleware referenced by operation, skipping");
                None
            }
        })
        .collect()
}
