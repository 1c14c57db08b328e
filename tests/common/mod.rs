//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_upstream;

use ghfinder::config::ApiConfig;
use ghfinder::github::{FetchError, GitHubClient, Profile, ProfileSource};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::future::Future;
use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;

pub const TORVALDS_JSON: &str = r#"{
    "login": "torvalds",
    "id": 1024025,
    "name": "Linus Torvalds",
    "followers": 1000,
    "following": 0,
    "public_repos": 5,
    "avatar_url": "https://avatars.githubusercontent.com/u/1024025?v=4",
    "html_url": "https://github.com/torvalds",
    "bio": null,
    "type": "User"
}"#;

pub fn torvalds() -> Profile {
    serde_json::from_str(TORVALDS_JSON).expect("fixture parses")
}

/// Find a port nothing is listening on.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Base URL that refuses connections.
pub fn unreachable_base_url() -> String {
    format!("http://127.0.0.1:{}", free_port())
}

pub fn client_for(base_url: &str) -> GitHubClient {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        connect_timeout_seconds: 2,
        ..ApiConfig::default()
    };
    GitHubClient::new(&config).expect("client builds")
}

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// In-memory `ProfileSource` replaying scripted results and recording
/// every login it was asked for.
pub struct ScriptedSource {
    results: Mutex<VecDeque<Result<Profile, FetchError>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedSource {
    pub fn new(results: Vec<Result<Profile, FetchError>>) -> Self {
        Self {
            results: Mutex::new(results.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

impl ProfileSource for ScriptedSource {
    fn fetch_profile(
        &self,
        login: &str,
    ) -> impl Future<Output = Result<Profile, FetchError>> + Send {
        self.calls.lock().push(login.to_string());
        let result = self
            .results
            .lock()
            .pop_front()
            .unwrap_or(Err(FetchError::Upstream { status: 599 }));
        async move { result }
    }
}
