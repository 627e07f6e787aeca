//! Variable path validation.
//!
//! A variable record stores a path naming the metric it evaluates. A bare
//! path (`get_total_workdays`) must name a catalogue entry. A dotted path
//! (`buying.supplier_scorecard_variable.get_total_workdays`) is resolved
//! through a [`PathResolver`].

use std::collections::{BTreeSet, HashMap};

use once_cell::sync::Lazy;
use thiserror::Error;
use tracing::debug;

use super::Metric;
use crate::errors::ServiceError;

/// Namespace the standard resolver exposes the whole catalogue under.
pub const DEFAULT_NAMESPACE: &str = "buying.supplier_scorecard_variable";

static STANDARD_RESOLVER: Lazy<NamespaceResolver> =
    Lazy::new(|| NamespaceResolver::new().with_namespace(DEFAULT_NAMESPACE, Metric::all()));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathResolutionError {
    #[error("'{0}' is not a dotted path")]
    NotDotted(String),

    #[error("unknown namespace '{0}'")]
    UnknownNamespace(String),

    #[error("namespace '{namespace}' has no attribute '{attribute}'")]
    UnknownAttribute { namespace: String, attribute: String },
}

/// Resolves a dotted path to the metric it names.
pub trait PathResolver: Send + Sync {
    fn resolve(&self, path: &str) -> Result<Metric, PathResolutionError>;
}

/// Registry of dotted namespaces, each exposing a set of metrics by path.
#[derive(Debug, Clone, Default)]
pub struct NamespaceResolver {
    namespaces: HashMap<String, BTreeSet<Metric>>,
}

impl NamespaceResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared resolver with the catalogue under [`DEFAULT_NAMESPACE`].
    pub fn standard() -> &'static NamespaceResolver {
        &STANDARD_RESOLVER
    }

    /// Adds `metrics` to `namespace`, creating it if needed.
    pub fn with_namespace(
        mut self,
        namespace: impl Into<String>,
        metrics: impl IntoIterator<Item = Metric>,
    ) -> Self {
        self.namespaces
            .entry(namespace.into())
            .or_default()
            .extend(metrics);
        self
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.namespaces.keys().map(String::as_str)
    }

    /// Fully qualified path of `metric` under `namespace`.
    pub fn qualified(namespace: &str, metric: Metric) -> String {
        format!("{namespace}.{}", metric.path())
    }
}

impl PathResolver for NamespaceResolver {
    fn resolve(&self, path: &str) -> Result<Metric, PathResolutionError> {
        let (namespace, attribute) = path
            .rsplit_once('.')
            .ok_or_else(|| PathResolutionError::NotDotted(path.to_string()))?;

        let exposed = self
            .namespaces
            .get(namespace)
            .ok_or_else(|| PathResolutionError::UnknownNamespace(namespace.to_string()))?;

        Metric::from_path(attribute)
            .filter(|m| exposed.contains(m))
            .ok_or_else(|| PathResolutionError::UnknownAttribute {
                namespace: namespace.to_string(),
                attribute: attribute.to_string(),
            })
    }
}

/// Returns the metric `path` names.
///
/// Any failure, including resolver errors, is reported as
/// [`ServiceError::UnresolvablePath`] carrying the path as given.
pub fn resolve_path(path: &str, resolver: &dyn PathResolver) -> Result<Metric, ServiceError> {
    if path.contains('.') {
        return resolver.resolve(path).map_err(|e| {
            debug!(path, error = %e, "Dotted variable path did not resolve");
            ServiceError::UnresolvablePath(path.to_string())
        });
    }

    Metric::from_path(path).ok_or_else(|| ServiceError::UnresolvablePath(path.to_string()))
}

/// Checks that `path` names a metric, without returning it.
pub fn validate_path(path: &str, resolver: &dyn PathResolver) -> Result<(), ServiceError> {
    resolve_path(path, resolver).map(|_| ())
}
