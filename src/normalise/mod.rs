//! # Normalisers
//!
//! Pure functions that turn the raw fields of an operation into the canonical
//! values stored on a [`RouteDescriptor`](crate::spec::RouteDescriptor):
//!
//! - [`normalise_route`] - canonical absolute route
//! - [`normalise_operation_id`] - separator replacement in operation ids
//! - [`normalise_security`] - flattened, sorted security token
//! - [`normalise_middleware`] - `x-middleware` resolution against a registry

mod middleware;
mod operation_id;
mod route;
mod security;

pub use middleware::normalise_middleware;
pub use operation_id::{normalise_operation_id, OPERATION_ID_JOINER};
pub use route::{join_route, normalise_route};
pub use security::normalise_security;
