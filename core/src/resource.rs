//! Resource reconciler: maps declared todo lists onto the remote store.
//!
//! # Design
//! Each operation is exactly one remote call. On success the committed state
//! becomes the list the store sent back, never the list that was declared,
//! since the store may reorder or deduplicate. On failure the call is
//! reported as a diagnostic and the previously committed state stays as it
//! was. There is no internal retry; the orchestrator decides what to do next.

use tracing::{debug, info, warn};

use crate::diagnostics::Diagnostics;
use crate::error::StoreError;
use crate::provider::ProviderData;
use crate::store::RemoteStore;
use crate::transport::{Transport, UreqTransport};
use crate::types::TodoList;

/// Owns one declared todo list and its committed remote state.
#[derive(Debug)]
pub struct TodoResource<T = UreqTransport> {
    store: RemoteStore<T>,
    state: Option<TodoList>,
}

impl TodoResource<UreqTransport> {
    pub fn new() -> Self {
        Self::with_transport(UreqTransport::new())
    }
}

impl Default for TodoResource<UreqTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> TodoResource<T> {
    /// Unconfigured resource; until `configure` supplies a base URL every
    /// remote call targets an empty base and fails at the transport.
    pub fn with_transport(transport: T) -> Self {
        Self {
            store: RemoteStore::new("", transport),
            state: None,
        }
    }

    pub fn base_url(&self) -> &str {
        self.store.base_url()
    }

    /// Last list accepted from the remote store, if any.
    pub fn state(&self) -> Option<&TodoList> {
        self.state.as_ref()
    }

    /// Accept the provider's derived value. `Absent` is a no-op.
    pub fn configure(&mut self, data: ProviderData) -> Result<(), Diagnostics> {
        if let Some(url) = data.into_base_url("Resource")? {
            debug!(baseurl = %url, "resource configured");
            self.store.set_base_url(&url);
        }
        Ok(())
    }

    pub fn create(&mut self, declared: &TodoList) -> Result<TodoList, Diagnostics> {
        debug!(items = declared.len(), "creating todo list");
        let result = self.store.create(declared);
        self.commit("create", result)
    }

    /// Replace the committed state with whatever the store holds now.
    pub fn read(&mut self) -> Result<TodoList, Diagnostics> {
        debug!("reading todo list");
        self.refresh("read")
    }

    pub fn update(&mut self, declared: &TodoList) -> Result<TodoList, Diagnostics> {
        debug!(items = declared.len(), "updating todo list");
        let result = self.store.update(declared);
        self.commit("update", result)
    }

    /// The store's reply to a delete is committed as-is; "deleted" and
    /// "now empty" are indistinguishable in the protocol.
    pub fn delete(&mut self) -> Result<TodoList, Diagnostics> {
        debug!("deleting todo list");
        let result = self.store.delete();
        self.commit("delete", result)
    }

    /// Adopt the collection that already exists remotely.
    pub fn import_state(&mut self) -> Result<TodoList, Diagnostics> {
        debug!("importing todo list");
        self.refresh("import")
    }

    fn refresh(&mut self, action: &'static str) -> Result<TodoList, Diagnostics> {
        let result = self.store.fetch();
        self.commit(action, result)
    }

    fn commit(
        &mut self,
        action: &'static str,
        result: Result<TodoList, StoreError>,
    ) -> Result<TodoList, Diagnostics> {
        match result {
            Ok(list) => {
                info!(action, items = list.len(), "committed todo list");
                self.state = Some(list.clone());
                Ok(list)
            }
            Err(err) => {
                warn!(action, error = %err, "todo list operation failed, keeping previous state");
                Err(err.into())
            }
        }
    }
}
