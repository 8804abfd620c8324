use super::build::extract_paths;
use super::types::{lenient, ApiDocument, PathItem, RouteDescriptor};
use crate::error::ExtractError;
use crate::options::ExtractOptions;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, warn};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDocument {
    #[serde(default, deserialize_with = "base_path")]
    base_path: Option<String>,
    #[serde(default, deserialize_with = "servers")]
    servers: Option<Vec<RawServer>>,
    paths: IndexMap<String, Value>,
}

#[derive(Deserialize)]
struct RawServer {
    #[serde(default)]
    url: String,
}

fn base_path<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    lenient(d, "basePath")
}

fn servers<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<RawServer>>, D::Error> {
    lenient(d, "servers")
}

fn path_item(template: &str, value: Value) -> PathItem {
    if value.is_null() {
        return PathItem::default();
    }
    serde_json::from_value(value).unwrap_or_else(|e| {
        warn!(path = template, error = %e, "path item is not a mapping, skipping it");
        PathItem::default()
    })
}

fn check_shape(value: &Value) -> Result<(), ExtractError> {
    let root = value
        .as_object()
        .ok_or_else(|| ExtractError::invalid_input("document root is not a mapping"))?;
    match root.get("paths") {
        Some(Value::Object(_)) => Ok(()),
        Some(_) => Err(ExtractError::invalid_input("'paths' is not a mapping")),
        None => Err(ExtractError::invalid_input("missing 'paths'")),
    }
}

/// Path component of an OpenAPI 3 server URL, without a trailing `/`.
///
/// Relative URLs (`/api/v1`) are used as-is. Absolute URLs lose their scheme and
/// host. Server URLs with `{variables}` are split by hand because they do not parse
/// as URLs. Returns `None` when the path is empty or `/`.
pub fn server_base_path(url_str: &str) -> Option<String> {
    let path = if url_str.contains('{') {
        strip_authority(url_str)
    } else {
        match url::Url::parse(url_str) {
            Ok(u) if u.cannot_be_a_base() => String::new(),
            Ok(u) => u.path().to_string(),
            Err(_) => strip_authority(url_str),
        }
    };
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn strip_authority(url_str: &str) -> String {
    let without_query = url_str.split(['?', '#']).next().unwrap_or_default();
    match without_query.split_once("://") {
        Some((_, rest)) => rest.find('/').map(|i| rest[i..].to_string()).unwrap_or_default(),
        None => without_query.to_string(),
    }
}

impl ApiDocument {
    /// Decode an already-parsed JSON/YAML document.
    ///
    /// Swagger 2.0 `basePath` takes precedence; otherwise the path of the first
    /// OpenAPI 3 `servers` entry is used.
    ///
    /// Fields of the wrong type below `paths` degrade to absent values and are
    /// reported with a `tracing` warning; sibling routes are unaffected.
    ///
    /// # Errors
    ///
    /// [`ExtractError::InvalidInput`] when the root or `paths` is not a mapping.
    pub fn from_value(value: Value) -> Result<Self, ExtractError> {
        check_shape(&value)?;
        let raw: RawDocument =
            serde_json::from_value(value).map_err(|e| ExtractError::parse("value", e))?;
        let paths: IndexMap<String, PathItem> = raw
            .paths
            .into_iter()
            .map(|(template, item)| {
                let item = path_item(&template, item);
                (template, item)
            })
            .collect();

        let base_path = raw.base_path.filter(|p| !p.is_empty()).or_else(|| {
            raw.servers
                .as_ref()
                .and_then(|servers| servers.first())
                .and_then(|server| server_base_path(&server.url))
        });
        debug!(base_path = ?base_path, paths = paths.len(), "decoded API document");

        Ok(ApiDocument { base_path, paths })
    }

    pub fn from_json_str(content: &str) -> Result<Self, ExtractError> {
        let value: Value =
            serde_json::from_str(content).map_err(|e| ExtractError::parse("json", e))?;
        Self::from_value(value)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ExtractError> {
        // Decoded through serde_yaml::Value so unquoted integer keys (`200:`) survive.
        let yaml: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| ExtractError::parse("yaml", e))?;
        let value = serde_json::to_value(yaml).map_err(|e| ExtractError::parse("yaml", e))?;
        Self::from_value(value)
    }
}

/// Decode `value` and extract its routes in one step.
///
/// Fails fast with [`ExtractError::InvalidInput`] instead of returning an empty
/// list when `paths` is missing or malformed.
pub fn extract_paths_from_value<M: Clone>(
    value: Value,
    options: &ExtractOptions<M>,
) -> Result<Vec<RouteDescriptor<M>>, ExtractError> {
    let document = ApiDocument::from_value(value)?;
    Ok(extract_paths(&document, options))
}
