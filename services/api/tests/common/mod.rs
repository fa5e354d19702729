#![allow(dead_code)]

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::path::PathBuf;
use submissions_api::{app, AppState};
use tempfile::TempDir;

/// Running API instance bound to an ephemeral port, backed by a temp dir.
pub struct TestServer {
    pub base_url: String,
    pub db_file: PathBuf,
    _dir: TempDir,
}

impl TestServer {
    pub async fn spawn() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_file = dir.path().join("db.json");

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Missing local addr");

        let router = app(AppState::new(db_file.clone()));
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Test server failed");
        });

        Self {
            base_url: format!("http://{}", addr),
            db_file,
            _dir: dir,
        }
    }

    pub fn client(&self) -> TestClient {
        TestClient {
            client: Client::new(),
            base_url: self.base_url.clone(),
        }
    }

    /// Raw persisted file contents, `None` if never written.
    pub fn db_contents(&self) -> Option<String> {
        std::fs::read_to_string(&self.db_file).ok()
    }
}

/// Test client wrapper with convenience methods
pub struct TestClient {
    pub client: Client,
    pub base_url: String,
}

impl TestClient {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn ping(&self) -> reqwest::Result<reqwest::Response> {
        self.client.get(self.url("/ping")).send().await
    }

    pub async fn submit(&self, payload: &Value) -> reqwest::Result<reqwest::Response> {
        self.client.post(self.url("/submit")).json(payload).send().await
    }

    pub async fn read_all(&self) -> reqwest::Result<reqwest::Response> {
        self.client.get(self.url("/read_all")).send().await
    }

    pub async fn delete(&self, index: &str) -> reqwest::Result<reqwest::Response> {
        self.client
            .delete(self.url(&format!("/delete/{}", index)))
            .send()
            .await
    }

    pub async fn edit(&self, index: &str, payload: &Value) -> reqwest::Result<reqwest::Response> {
        self.client
            .put(self.url(&format!("/edit/{}", index)))
            .json(payload)
            .send()
            .await
    }

    pub async fn search(&self, email: &str) -> reqwest::Result<reqwest::Response> {
        self.client
            .get(self.url("/search"))
            .query(&[("email", email)])
            .send()
            .await
    }

    /// Submit and expect success
    pub async fn submit_expect_success(&self, payload: &Value) {
        let response = self.submit(payload).await.expect("Failed to send request");
        assert_eq!(
            response.status(),
            StatusCode::OK,
            "Expected 200 OK, got {}: {}",
            response.status(),
            response.text().await.unwrap_or_default()
        );
    }

    /// Read all and expect a JSON array
    pub async fn read_all_expect_success(&self) -> Vec<Value> {
        let response = self.read_all().await.expect("Failed to send request");
        assert_eq!(response.status(), StatusCode::OK);
        response.json().await.expect("Failed to parse JSON response")
    }
}

/// Assert status and `{"error": ...}` body in one go.
pub async fn expect_error(response: reqwest::Response, status: StatusCode, message: &str) {
    assert_eq!(response.status(), status);
    let body: Value = response.json().await.expect("Failed to parse JSON response");
    assert_eq!(body, json!({ "error": message }));
}

pub async fn expect_message(response: reqwest::Response, message: &str) {
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse JSON response");
    assert_eq!(body, json!({ "message": message }));
}

/// Test data generators
pub struct TestData;

impl TestData {
    pub fn ann() -> Value {
        json!({
            "name": "Ann",
            "email": "a@x.com",
            "phone": "555",
            "github_link": "gh/ann",
            "stopwatch_time": "01:23"
        })
    }

    pub fn submission(n: usize) -> Value {
        json!({
            "name": format!("Candidate {}", n),
            "email": format!("candidate{}@example.com", n),
            "phone": format!("+1-555-010{}", n),
            "github_link": format!("https://github.com/candidate{}", n),
            "stopwatch_time": format!("00:{:02}:17", n)
        })
    }

    pub fn unique_email() -> String {
        format!(
            "client_{}@example.com",
            &uuid::Uuid::new_v4().simple().to_string()[..12]
        )
    }

    pub const FIELDS: [&'static str; 5] =
        ["name", "email", "phone", "github_link", "stopwatch_time"];
}
