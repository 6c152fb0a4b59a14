//! Stateless HTTP request builder and response parser for the todo store.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Every endpoint exchanges a JSON array of strings; `fetch` accepts any
//! status, the mutating endpoints require exactly 200 and never decode the
//! body of any other response. Every mutating request carries
//! `content-type: application/json`, including the bodiless delete.

use crate::error::{Operation, StoreError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::TodoList;

const STATUS_OK: u16 = 200;

/// Synchronous, stateless client for the todo store.
#[derive(Debug, Clone, Default)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_fetch(&self) -> HttpRequest {
        self.request(Operation::Fetch, HttpMethod::Get, None)
    }

    pub fn build_create(&self, items: &TodoList) -> Result<HttpRequest, StoreError> {
        let body = encode(Operation::Create, items)?;
        Ok(self.request(Operation::Create, HttpMethod::Post, Some(body)))
    }

    pub fn build_update(&self, items: &TodoList) -> Result<HttpRequest, StoreError> {
        let body = encode(Operation::Update, items)?;
        Ok(self.request(Operation::Update, HttpMethod::Put, Some(body)))
    }

    pub fn build_delete(&self) -> HttpRequest {
        self.request(Operation::Delete, HttpMethod::Delete, None)
    }

    /// The fetch endpoint's status is not checked; only the body matters.
    pub fn parse_fetch(&self, response: HttpResponse) -> Result<TodoList, StoreError> {
        decode(Operation::Fetch, &response)
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<TodoList, StoreError> {
        check_status(Operation::Create, &response)?;
        decode(Operation::Create, &response)
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<TodoList, StoreError> {
        check_status(Operation::Update, &response)?;
        decode(Operation::Update, &response)
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<TodoList, StoreError> {
        check_status(Operation::Delete, &response)?;
        decode(Operation::Delete, &response)
    }

    fn request(&self, operation: Operation, method: HttpMethod, body: Option<String>) -> HttpRequest {
        let headers = if method != HttpMethod::Get {
            vec![("content-type".to_string(), "application/json".to_string())]
        } else {
            Vec::new()
        };
        HttpRequest {
            method,
            path: format!("{}{}", self.base_url, operation.endpoint()),
            headers,
            body,
        }
    }
}

fn encode(operation: Operation, items: &TodoList) -> Result<String, StoreError> {
    serde_json::to_string(items).map_err(|e| StoreError::Encode {
        operation,
        message: e.to_string(),
    })
}

fn decode(operation: Operation, response: &HttpResponse) -> Result<TodoList, StoreError> {
    serde_json::from_str(&response.body).map_err(|e| StoreError::Decode {
        operation,
        message: e.to_string(),
    })
}

fn check_status(operation: Operation, response: &HttpResponse) -> Result<(), StoreError> {
    if response.status == STATUS_OK {
        return Ok(());
    }
    Err(StoreError::UnexpectedStatus {
        operation,
        status: response.status,
        body: response.body.clone(),
    })
}
