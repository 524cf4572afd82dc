#![allow(dead_code)]

use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tokio::time::sleep;

pub const API_BASE_URL: &str = "http://localhost:3000";

/// Test client wrapper with convenience methods
pub struct TestClient {
    client: Client,
    base_url: String,
}

impl TestClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: std::env::var("API_BASE_URL").unwrap_or_else(|_| API_BASE_URL.to_string()),
        }
    }

    /// GET a path relative to the API root
    pub async fn get(&self, path: &str, query: &[(&str, &str)]) -> reqwest::Result<reqwest::Response> {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .send()
            .await
    }

    /// GET a path and expect a 200 with a JSON body
    pub async fn get_json(&self, path: &str, query: &[(&str, &str)]) -> Value {
        let response = self.get(path, query).await.expect("Failed to send request");

        assert_eq!(
            response.status(),
            StatusCode::OK,
            "Expected 200 OK for {}, got {}",
            path,
            response.status()
        );

        response.json().await.expect("Failed to parse JSON response")
    }

    /// First project returned by the API, for tests that need seeded data
    pub async fn first_project_id(&self) -> Option<String> {
        let projects = self.get_json("/v1/projects", &[]).await;
        projects
            .as_array()?
            .first()?
            .get("id")?
            .as_str()
            .map(str::to_string)
    }
}

/// Test timing utilities
pub struct TestTiming;

impl TestTiming {
    /// Wait for a condition to be true, with timeout
    pub async fn wait_for_condition<F, Fut>(
        condition: F,
        timeout_seconds: u64,
        check_interval_ms: u64,
    ) -> bool
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = bool>,
    {
        let start = std::time::Instant::now();
        let timeout = Duration::from_secs(timeout_seconds);

        while start.elapsed() < timeout {
            if condition().await {
                return true;
            }
            sleep(Duration::from_millis(check_interval_ms)).await;
        }

        false
    }
}

/// Environment validation utilities
pub struct TestEnvironment;

impl TestEnvironment {
    /// Check if the API server is running
    pub async fn check_api_server() -> bool {
        let client = TestClient::new();
        match client.get("/health", &[]).await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    /// Validate test environment is properly set up
    pub async fn validate_test_environment() {
        assert!(
            TestTiming::wait_for_condition(Self::check_api_server, 30, 500).await,
            "API server is not running on {}. Start it with: cargo run --bin api",
            API_BASE_URL
        );
    }
}
