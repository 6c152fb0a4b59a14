//! Remote store client: request building, one round-trip, response parsing.

use tracing::debug;

use crate::client::TodoClient;
use crate::error::{Operation, StoreError};
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::TodoList;

/// Couples a `TodoClient` with a `Transport`.
///
/// Holds no state besides the base URL, so independent instances can run
/// concurrently without coordination.
#[derive(Debug, Clone)]
pub struct RemoteStore<T = UreqTransport> {
    client: TodoClient,
    transport: T,
}

impl<T: Transport> RemoteStore<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: TodoClient::new(base_url),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    pub fn set_base_url(&mut self, base_url: &str) {
        self.client = TodoClient::new(base_url);
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET {base}/get`.
    pub fn fetch(&self) -> Result<TodoList, StoreError> {
        let response = self.send(Operation::Fetch, self.client.build_fetch())?;
        self.client.parse_fetch(response)
    }

    /// `POST {base}/create` with `items` as the JSON body.
    pub fn create(&self, items: &TodoList) -> Result<TodoList, StoreError> {
        let request = self.client.build_create(items)?;
        let response = self.send(Operation::Create, request)?;
        self.client.parse_create(response)
    }

    /// `PUT {base}/update` with `items` as the JSON body.
    pub fn update(&self, items: &TodoList) -> Result<TodoList, StoreError> {
        let request = self.client.build_update(items)?;
        let response = self.send(Operation::Update, request)?;
        self.client.parse_update(response)
    }

    /// `DELETE {base}/delete`.
    pub fn delete(&self) -> Result<TodoList, StoreError> {
        let response = self.send(Operation::Delete, self.client.build_delete())?;
        self.client.parse_delete(response)
    }

    fn send(&self, operation: Operation, request: HttpRequest) -> Result<HttpResponse, StoreError> {
        debug!(%operation, method = %request.method, url = %request.path, "sending request");
        let response = self
            .transport
            .execute(request)
            .map_err(|e| StoreError::Transport {
                operation,
                message: e.to_string(),
            })?;
        debug!(%operation, status = response.status, "received response");
        Ok(response)
    }
}
