//! Scripted transport for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::{HttpResponse, Transport};
use crate::retry::RequestError;

/// A request as seen by the transport.
#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Pops one scripted outcome per request; panics when the script runs out.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    script: RefCell<VecDeque<Result<HttpResponse, RequestError>>>,
    requests: RefCell<Vec<RecordedRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u32, headers: &[&str], body: &str) -> Self {
        self.script.borrow_mut().push_back(Ok(HttpResponse {
            status,
            headers: headers.iter().map(|h| h.to_string()).collect(),
            body: body.as_bytes().to_vec(),
        }));
        self
    }

    pub fn respond_bytes(self, status: u32, body: &[u8]) -> Self {
        self.script.borrow_mut().push_back(Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_vec(),
        }));
        self
    }

    pub fn fail(self, err: RequestError) -> Self {
        self.script.borrow_mut().push_back(Err(err));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }
}

impl Transport for ScriptedTransport {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse, RequestError> {
        self.requests.borrow_mut().push(RecordedRequest {
            url: url.to_string(),
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected request to {}", url))
    }
}
