use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// HTTP methods an operation can be attached to, in extraction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
    Trace,
}

impl HttpMethod {
    /// Every method, in the order descriptors are emitted for a single path.
    pub const ALL: [HttpMethod; 8] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
        HttpMethod::Options,
        HttpMethod::Head,
        HttpMethod::Trace,
    ];

    /// Lowercase name as it appears as a path-item key.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
            HttpMethod::Patch => "patch",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Trace => "trace",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for http::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => http::Method::GET,
            HttpMethod::Post => http::Method::POST,
            HttpMethod::Put => http::Method::PUT,
            HttpMethod::Delete => http::Method::DELETE,
            HttpMethod::Patch => http::Method::PATCH,
            HttpMethod::Options => http::Method::OPTIONS,
            HttpMethod::Head => http::Method::HEAD,
            HttpMethod::Trace => http::Method::TRACE,
        }
    }
}

/// One AND-combination of security schemes: scheme name -> required scopes.
pub type SecurityRequirement = IndexMap<String, Vec<String>>;

/// Global middleware registry: middleware name -> middleware value.
pub type MiddlewareRegistry<M> = IndexMap<String, M>;

/// The `x-middleware` extension of an operation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MiddlewareSelector {
    Single(String),
    List(Vec<String>),
}

impl MiddlewareSelector {
    /// Selected middleware names, in declaration order.
    pub fn names(&self) -> &[String] {
        match self {
            MiddlewareSelector::Single(name) => std::slice::from_ref(name),
            MiddlewareSelector::List(names) => names,
        }
    }
}

/// Decode an optional document field, treating a value of the wrong type as absent.
pub(super) fn lenient<'de, D, T>(
    deserializer: D,
    field: &'static str,
) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value) {
        Ok(decoded) => Ok(Some(decoded)),
        Err(e) => {
            warn!(field, error = %e, "ignoring malformed field");
            Ok(None)
        }
    }
}

fn operation_id<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    lenient(d, "operationId")
}

fn tags<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<String>>, D::Error> {
    lenient(d, "tags")
}

fn security<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<Option<Vec<SecurityRequirement>>, D::Error> {
    lenient(d, "security")
}

fn x_middleware<'de, D: Deserializer<'de>>(d: D) -> Result<Option<MiddlewareSelector>, D::Error> {
    lenient(d, "x-middleware")
}

/// A single HTTP-method handler attached to a path template.
///
/// Every field is optional. A field holding a value of the wrong type decodes
/// as `None` (with a warning) instead of failing the whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(default, deserialize_with = "operation_id")]
    pub operation_id: Option<String>,
    #[serde(default, deserialize_with = "tags")]
    pub tags: Option<Vec<String>>,
    /// `None` when the field is absent, `Some(vec![])` for an explicit opt-out.
    #[serde(default, deserialize_with = "security")]
    pub security: Option<Vec<SecurityRequirement>>,
    #[serde(default, rename = "x-middleware", deserialize_with = "x_middleware")]
    pub x_middleware: Option<MiddlewareSelector>,
}

impl Operation {
    /// First tag of the operation, if it has any.
    pub fn first_tag(&self) -> Option<&str> {
        self.tags.as_ref()?.first().map(String::as_str)
    }
}

// null, false, 0 and "" mean "no operation here".
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn operation<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Operation>, D::Error> {
    let value = Value::deserialize(d)?;
    if is_blank(&value) {
        return Ok(None);
    }
    if !value.is_object() {
        warn!(value = %value, "operation is not a mapping, treating it as empty");
        return Ok(Some(Operation::default()));
    }
    Ok(Some(serde_json::from_value(value).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring malformed operation body");
        Operation::default()
    })))
}

/// Operations declared under one path template.
///
/// Keys that are not HTTP methods (`parameters`, `summary`, `servers`, `$ref`,
/// vendor extensions) are ignored when decoding. A method key holding a non-empty
/// value that is not a mapping still counts as an operation with no fields set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PathItem {
    #[serde(default, deserialize_with = "operation")]
    pub get: Option<Operation>,
    #[serde(default, deserialize_with = "operation")]
    pub post: Option<Operation>,
    #[serde(default, deserialize_with = "operation")]
    pub put: Option<Operation>,
    #[serde(default, deserialize_with = "operation")]
    pub delete: Option<Operation>,
    #[serde(default, deserialize_with = "operation")]
    pub patch: Option<Operation>,
    #[serde(default, deserialize_with = "operation")]
    pub options: Option<Operation>,
    #[serde(default, deserialize_with = "operation")]
    pub head: Option<Operation>,
    #[serde(default, deserialize_with = "operation")]
    pub trace: Option<Operation>,
}

impl PathItem {
    pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
        match method {
            HttpMethod::Get => self.get.as_ref(),
            HttpMethod::Post => self.post.as_ref(),
            HttpMethod::Put => self.put.as_ref(),
            HttpMethod::Delete => self.delete.as_ref(),
            HttpMethod::Patch => self.patch.as_ref(),
            HttpMethod::Options => self.options.as_ref(),
            HttpMethod::Head => self.head.as_ref(),
            HttpMethod::Trace => self.trace.as_ref(),
        }
    }

    /// Defined operations in [`HttpMethod::ALL`] order.
    pub fn methods(&self) -> impl Iterator<Item = (HttpMethod, &Operation)> + '_ {
        HttpMethod::ALL
            .into_iter()
            .filter_map(move |m| self.operation(m).map(|op| (m, op)))
    }
}

/// A parsed API description: base path plus path templates in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiDocument {
    pub base_path: Option<String>,
    pub paths: IndexMap<String, PathItem>,
}

impl ApiDocument {
    /// Number of (path, method) pairs with a defined operation.
    pub fn operation_count(&self) -> usize {
        self.paths.values().map(|item| item.methods().count()).sum()
    }
}

/// One flattened route produced by [`extract_paths`](crate::spec::extract_paths).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDescriptor<M = String> {
    pub method: HttpMethod,
    pub route: String,
    pub operation_id: Option<String>,
    pub security: Option<String>,
    pub middleware: Vec<M>,
}
