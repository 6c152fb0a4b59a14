//! Reconciles a declared todo list against a remote HTTP store.
//!
//! # Overview
//! An orchestrator configures a [`Provider`] once per session, hands the
//! resulting [`ProviderData`] to each [`TodoResource`] and
//! [`TodoDataSource`], then drives create/read/update/delete calls. Every
//! call is one HTTP round-trip whose decoded response becomes the new
//! committed state; every failure comes back as [`Diagnostics`].
//!
//! # Design
//! - `TodoClient` builds `HttpRequest` values and parses `HttpResponse`
//!   values without touching the network; a [`Transport`] executes the
//!   round-trip (`UreqTransport` by default, no deadline).
//! - Configuration merges declared values with an injected [`Environment`],
//!   reporting every missing field in one pass.
//! - The remote store is authoritative: declared lists are sent, returned
//!   lists are kept.

pub mod client;
pub mod config;
pub mod data_source;
pub mod diagnostics;
pub mod error;
pub mod http;
pub mod provider;
pub mod resource;
pub mod store;
pub mod transport;
pub mod types;

#[cfg(test)]
mod testing;

pub use client::TodoClient;
pub use config::{resolve, ConfigValue, DeclaredConfig, Environment, MapEnv, ProcessEnv, ProviderConfig};
pub use data_source::TodoDataSource;
pub use diagnostics::{Diagnostic, Diagnostics};
pub use error::{ErrorKind, Operation, StoreError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use provider::{Provider, ProviderData, ProviderMetadata};
pub use resource::TodoResource;
pub use store::RemoteStore;
pub use transport::{Transport, UreqTransport};
pub use types::TodoList;
