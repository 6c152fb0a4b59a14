//! Provider surface: metadata, session configuration, and the value handed
//! to resources and data sources.

use tracing::info;

use crate::config::{self, DeclaredConfig, Environment};
use crate::data_source::TodoDataSource;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::ErrorKind;
use crate::resource::TodoResource;

pub const PROVIDER_TYPE_NAME: &str = "customexample";

/// Name and version reported to the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderMetadata {
    pub type_name: String,
    pub version: String,
}

/// Value the orchestrator passes to a resource or data source at configure time.
///
/// The orchestrator's side is untyped; anything that is not a string ends up
/// in `Unexpected` with a description of what was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderData {
    /// The provider has not been configured yet.
    Absent,
    BaseUrl(String),
    Unexpected(String),
}

impl ProviderData {
    /// Extract the base URL, or a contract diagnostic naming `component`
    /// ("Resource", "Data Source") when the value has the wrong shape.
    pub(crate) fn into_base_url(self, component: &str) -> Result<Option<String>, Diagnostic> {
        match self {
            ProviderData::Absent => Ok(None),
            ProviderData::BaseUrl(url) => Ok(Some(url)),
            ProviderData::Unexpected(found) => Err(Diagnostic::error(
                ErrorKind::Contract,
                format!("Unexpected {component} Configure Type"),
                format!(
                    "Expected string as baseurl, got: {found}. Please report this issue to the \
                     provider developers."
                ),
            )),
        }
    }
}

impl From<serde_json::Value> for ProviderData {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => ProviderData::Absent,
            Value::String(url) => ProviderData::BaseUrl(url),
            Value::Bool(_) => ProviderData::Unexpected("bool".to_string()),
            Value::Number(_) => ProviderData::Unexpected("number".to_string()),
            Value::Array(_) => ProviderData::Unexpected("array".to_string()),
            Value::Object(_) => ProviderData::Unexpected("object".to_string()),
        }
    }
}

/// Entry point the orchestrator talks to once per session.
#[derive(Debug, Clone)]
pub struct Provider {
    version: String,
}

impl Provider {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }

    pub fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            type_name: PROVIDER_TYPE_NAME.to_string(),
            version: self.version.clone(),
        }
    }

    pub fn resource_type_name(&self) -> String {
        format!("{PROVIDER_TYPE_NAME}_add_todo_items")
    }

    pub fn data_source_type_name(&self) -> String {
        format!("{PROVIDER_TYPE_NAME}_todo")
    }

    /// Resolve the session configuration and derive the base URL.
    ///
    /// Username and password are checked for presence only; no session is
    /// established with them.
    pub fn configure<E: Environment + ?Sized>(
        &self,
        declared: &DeclaredConfig,
        env: &E,
    ) -> Result<ProviderData, Diagnostics> {
        let config = config::resolve(declared, env)?;
        info!(baseurl = %config.baseurl(), version = %self.version, "provider configured");
        Ok(ProviderData::BaseUrl(config.baseurl().to_string()))
    }

    pub fn resource(&self) -> TodoResource {
        TodoResource::new()
    }

    pub fn data_source(&self) -> TodoDataSource {
        TodoDataSource::new()
    }
}
