/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for tasklist-client tests

use std::sync::Mutex;
use tasklist_client::{ClientConfig, PanelSurface, TasklistClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Build a client pointed at a mock server
pub fn client_for(server: &MockServer) -> TasklistClient {
    TasklistClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init")
}

/// Surface double that records every render and busy transition
#[derive(Debug, Default)]
pub struct RecordingSurface {
    rendered: Mutex<Vec<Vec<String>>>,
    busy_calls: Mutex<Vec<bool>>,
}

#[allow(dead_code)]
impl RecordingSurface {
    /// Lines of the most recent render, if any
    pub fn last_rendered(&self) -> Option<Vec<String>> {
        self.rendered.lock().unwrap().last().cloned()
    }

    /// Total number of renders so far
    pub fn render_count(&self) -> usize {
        self.rendered.lock().unwrap().len()
    }

    /// Every set_busy argument in call order
    pub fn busy_calls(&self) -> Vec<bool> {
        self.busy_calls.lock().unwrap().clone()
    }
}

impl PanelSurface for RecordingSurface {
    fn render(&self, lines: &[String]) {
        self.rendered.lock().unwrap().push(lines.to_vec());
    }

    fn set_busy(&self, busy: bool) {
        self.busy_calls.lock().unwrap().push(busy);
    }
}
