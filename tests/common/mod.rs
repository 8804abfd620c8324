#![allow(dead_code)]

use oas_routes::{HttpMethod, RouteDescriptor};
use serde_json::{json, Value};

/// OpenAPI 3 document mirroring a versioned service with root-level endpoints.
pub fn v3_api() -> Value {
    json!({
        "openapi": "3.0.0",
        "servers": [{ "url": "/api/v1" }],
        "paths": {
            "/": {
                "get": {
                    "servers": [{ "url": "/" }],
                    "tags": ["root"],
                    "operationId": "versions"
                }
            },
            "/ping": {
                "get": {
                    "servers": [{ "url": "/" }],
                    "tags": ["root"],
                    "operationId": "ping"
                }
            },
            "/test": {
                "get": {
                    "tags": ["test"],
                    "operationId": "v1/test",
                    "security": [{ "example": ["identity.basic", "identity.email", "admin"] }]
                }
            }
        }
    })
}

/// Same service described as Swagger 2.0.
pub const SWAGGER_YAML: &str = r#"swagger: "2.0"
info:
  title: Test API
  version: "1.0.0"
basePath: /api/v1
paths:
  /:
    get:
      tags: [root]
      operationId: versions
      responses:
        200:
          description: OK
  /test:
    parameters:
      - name: verbose
        in: query
        type: boolean
    get:
      tags: [test]
      operationId: v1/test
      security:
        - example: [identity.basic, identity.email, admin]
      x-middleware: [auth, audit]
      responses:
        200:
          description: OK
    post:
      operationId: v1/test/create
      x-middleware: auth
      responses:
        201:
          description: Created
"#;

pub fn route(
    method: HttpMethod,
    route: &str,
    operation_id: Option<&str>,
    security: Option<&str>,
    middleware: &[&str],
) -> RouteDescriptor {
    RouteDescriptor {
        method,
        route: route.to_string(),
        operation_id: operation_id.map(str::to_string),
        security: security.map(str::to_string),
        middleware: middleware.iter().map(|m| m.to_string()).collect(),
    }
}
