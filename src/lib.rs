//! # oas-routes
//!
//! **oas-routes** flattens an OpenAPI 3 / Swagger 2.0 API description into a list of
//! route descriptors: method, canonical route, operation id, security token and
//! resolved middleware. It is the glue between a parsed API document and whatever
//! registers handlers for it.
//!
//! ## Overview
//!
//! - **[`spec`]** - document model, decoding, and the route enumerator
//!   ([`extract_paths`])
//! - **[`normalise`]** - pure normalisers for routes, operation ids, security and
//!   middleware
//! - **[`options`]** - per-call options (separator, root tag, middleware registry)
//! - **[`logging`]** - `tracing` subscriber setup
//! - **[`error`]** - decoding errors
//!
//! ## Pipeline
//!
//! ```text
//! ApiDocument ──► extract_paths ──► for each (path, method):
//!                                     join_route(base_path?, path)
//!                                     normalise_operation_id(id, separator)
//!                                     normalise_security(security)
//!                                     normalise_middleware(registry, x-middleware)
//!                                  ──► Vec<RouteDescriptor>
//! ```
//!
//! Operations whose first tag equals the root tag (default `root`) are mounted
//! without the base path.
//!
//! ## Example
//!
//! ```rust
//! use oas_routes::{extract_paths_from_value, ExtractOptions};
//! use serde_json::json;
//!
//! let api = json!({
//!     "servers": [{ "url": "/api/v1" }],
//!     "paths": {
//!         "/ping": { "get": { "tags": ["root"], "operationId": "ping" } },
//!         "/test": {
//!             "get": {
//!                 "operationId": "v1/test",
//!                 "security": [{ "example": ["identity.basic", "admin"] }]
//!             }
//!         }
//!     }
//! });
//!
//! let options: ExtractOptions = ExtractOptions::default().with_api_separator("/");
//! let routes = extract_paths_from_value(api, &options)?;
//!
//! assert_eq!(routes[0].route, "/ping");
//! assert_eq!(routes[1].route, "/api/v1/test");
//! assert_eq!(routes[1].operation_id.as_deref(), Some("v1_test"));
//! assert_eq!(routes[1].security.as_deref(), Some("admin,identity.basic"));
//! # Ok::<(), oas_routes::ExtractError>(())
//! ```

pub mod error;
pub mod logging;
pub mod normalise;
pub mod options;
pub mod spec;

pub use error::ExtractError;
pub use options::ExtractOptions;
pub use spec::{
    extract_paths, extract_paths_from_value, ApiDocument, HttpMethod, MiddlewareSelector,
    Operation, PathItem, RouteDescriptor, SecurityRequirement,
};
