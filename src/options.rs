//! # Extraction Options
//!
//! Options that control how [`extract_paths`](crate::spec::extract_paths) shapes
//! its output.
//!
//! ## Sources
//!
//! Options can be built three ways:
//! - in code, through [`ExtractOptions::default`] and the `with_*` setters
//! - from a YAML/JSON config section, since the type implements `Deserialize`
//!   (keys `apiSeparator`, `rootTag`, `middleware`)
//! - from the environment, via [`ExtractOptions::from_env`]
//!
//! ## Environment Variables
//!
//! ### `OAS_ROUTES_API_SEPARATOR`
//!
//! Character(s) replaced with `_` in operation ids. Unset or empty disables
//! replacement.
//!
//! ### `OAS_ROUTES_ROOT_TAG`
//!
//! Tag that exempts an operation from base-path prefixing. Default: `root`.
//!
//! ## Example
//!
//! ```rust
//! use oas_routes::ExtractOptions;
//!
//! let options: ExtractOptions = ExtractOptions::default()
//!     .with_api_separator("/")
//!     .with_middleware("auth", "require_auth".to_string());
//! assert_eq!(options.root_tag, "root");
//! ```

use crate::error::ExtractError;
use crate::spec::MiddlewareRegistry;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::env;

/// Tag that marks an operation as base-path exempt when none is configured.
pub const DEFAULT_ROOT_TAG: &str = "root";

pub const ENV_API_SEPARATOR: &str = "OAS_ROUTES_API_SEPARATOR";
pub const ENV_ROOT_TAG: &str = "OAS_ROUTES_ROOT_TAG";

/// Options for a single extraction call.
///
/// `M` is the middleware value type stored in the registry and copied into each
/// [`RouteDescriptor`](crate::spec::RouteDescriptor).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(
    rename_all = "camelCase",
    default,
    bound(deserialize = "M: Deserialize<'de>")
)]
pub struct ExtractOptions<M = String> {
    /// Separator replaced with `_` in operation ids (default: none)
    pub api_separator: Option<String>,
    /// Tag that exempts an operation from the base path (default: `root`)
    pub root_tag: String,
    /// Global middleware registry (default: empty)
    pub middleware: MiddlewareRegistry<M>,
}

impl<M> Default for ExtractOptions<M> {
    fn default() -> Self {
        ExtractOptions {
            api_separator: None,
            root_tag: DEFAULT_ROOT_TAG.to_string(),
            middleware: MiddlewareRegistry::new(),
        }
    }
}

impl<M> ExtractOptions<M> {
    /// Load options from environment variables.
    ///
    /// The middleware registry is always empty; attach entries with
    /// [`with_middleware`](Self::with_middleware).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build options from an arbitrary key lookup using the environment variable names.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let root_tag = lookup(ENV_ROOT_TAG)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_ROOT_TAG.to_string());
        ExtractOptions {
            api_separator: lookup(ENV_API_SEPARATOR).filter(|s| !s.is_empty()),
            root_tag,
            middleware: MiddlewareRegistry::new(),
        }
    }

    pub fn with_api_separator(mut self, separator: impl Into<String>) -> Self {
        self.api_separator = Some(separator.into());
        self
    }

    pub fn with_root_tag(mut self, tag: impl Into<String>) -> Self {
        self.root_tag = tag.into();
        self
    }

    /// Register a middleware value under `name`, replacing any previous entry.
    pub fn with_middleware(mut self, name: impl Into<String>, value: M) -> Self {
        self.middleware.insert(name.into(), value);
        self
    }

    pub fn api_separator(&self) -> Option<&str> {
        self.api_separator.as_deref()
    }
}

impl<M: DeserializeOwned> ExtractOptions<M> {
    /// Decode options from a YAML (or JSON) config section.
    pub fn from_yaml_str(content: &str) -> Result<Self, ExtractError> {
        serde_yaml::from_str(content).map_err(|e| ExtractError::parse("yaml", e))
    }
}
