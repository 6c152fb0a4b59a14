//! Scripted transport for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;

/// Replays queued outcomes in order and records every request it sees.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    outcomes: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn respond(self, status: u16, body: &str) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    pub(crate) fn fail(self, message: &str) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(Err(TransportError(message.to_string())));
        self
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for ScriptedTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted outcome left")
    }
}
