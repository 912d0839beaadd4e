//! Scripted transport for native tests.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use super::api::{ApiClient, RawResponse, Transport, TransportError};

type Reply = Result<RawResponse, TransportError>;

/// Answers each URL from a per-URL script and records every request.
///
/// A script's last reply repeats once the earlier ones are used up. URLs with
/// no script fail as a network error.
#[derive(Default)]
pub struct ScriptedTransport {
    scripts: Mutex<HashMap<String, VecDeque<Reply>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(&self, url: &str, status: u16, body: &str) -> &Self {
        self.push(url, Ok(RawResponse { status, body: body.to_owned() }))
    }

    pub fn fail(&self, url: &str, message: &str) -> &Self {
        self.push(url, Err(TransportError(message.to_owned())))
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn client(self: &Arc<Self>) -> ApiClient {
        ApiClient::new("", Arc::clone(self) as Arc<dyn Transport>)
    }

    fn push(&self, url: &str, reply: Reply) -> &Self {
        self.scripts
            .lock()
            .unwrap()
            .entry(url.to_owned())
            .or_default()
            .push_back(reply);
        self
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        self.calls.lock().unwrap().push(url.to_owned());
        let mut scripts = self.scripts.lock().unwrap();
        let Some(queue) = scripts.get_mut(url) else {
            return Err(TransportError(format!("no script for {url}")));
        };
        if queue.len() > 1 {
            queue.pop_front().unwrap()
        } else {
            queue.front().cloned().unwrap()
        }
    }
}
