//! Read-only view of the remote todo list.

use tracing::{debug, warn};

use crate::diagnostics::Diagnostics;
use crate::provider::ProviderData;
use crate::store::RemoteStore;
use crate::transport::{Transport, UreqTransport};
use crate::types::TodoList;

/// Observes the remote collection without owning it: there is no create,
/// update or delete, and nothing is kept between reads.
#[derive(Debug)]
pub struct TodoDataSource<T = UreqTransport> {
    store: RemoteStore<T>,
}

impl TodoDataSource<UreqTransport> {
    pub fn new() -> Self {
        Self::with_transport(UreqTransport::new())
    }
}

impl Default for TodoDataSource<UreqTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> TodoDataSource<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            store: RemoteStore::new("", transport),
        }
    }

    pub fn base_url(&self) -> &str {
        self.store.base_url()
    }

    pub fn configure(&mut self, data: ProviderData) -> Result<(), Diagnostics> {
        if let Some(url) = data.into_base_url("Data Source")? {
            debug!(baseurl = %url, "data source configured");
            self.store.set_base_url(&url);
        }
        Ok(())
    }

    pub fn read(&self) -> Result<TodoList, Diagnostics> {
        self.store.fetch().map_err(|err| {
            warn!(error = %err, "todo list read failed");
            err.into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::testing::ScriptedTransport;

    #[test]
    fn read_returns_remote_list() {
        let transport = ScriptedTransport::default().respond(200, r#"["a","b"]"#);
        let mut source = TodoDataSource::with_transport(&transport);
        source
            .configure(ProviderData::BaseUrl("http://api.test/".to_string()))
            .unwrap();

        let todos = source.read().unwrap();

        assert_eq!(todos, TodoList::from_iter(["a", "b"]));
        assert_eq!(transport.requests()[0].path, "http://api.test/get");
    }

    #[test]
    fn read_failure_is_reported_as_decode_error() {
        let transport = ScriptedTransport::default().respond(200, "<html>");
        let mut source = TodoDataSource::with_transport(&transport);
        source
            .configure(ProviderData::BaseUrl("http://api.test".to_string()))
            .unwrap();

        let diags = source.read().unwrap_err();

        let diag = diags.iter().next().unwrap();
        assert_eq!(diag.kind, ErrorKind::Decode);
        assert_eq!(diag.summary, "Unable to read/unmarshal todo list");
    }

    #[test]
    fn unexpected_provider_data_names_data_source() {
        let mut source = TodoDataSource::with_transport(ScriptedTransport::default());

        let diags = source
            .configure(ProviderData::Unexpected("array".to_string()))
            .unwrap_err();

        let diag = diags.iter().next().unwrap();
        assert_eq!(diag.kind, ErrorKind::Contract);
        assert_eq!(diag.summary, "Unexpected Data Source Configure Type");
        assert_eq!(source.base_url(), "");
    }

    #[test]
    fn absent_provider_data_is_a_no_op() {
        let mut source = TodoDataSource::with_transport(ScriptedTransport::default());
        assert!(source.configure(ProviderData::Absent).is_ok());
        assert_eq!(source.base_url(), "");
    }
}
