//! End-to-end checks against a running API backed by a seeded database.
//!
//! Run with `cargo test -p billing-dashboard-api -- --ignored` once the
//! server is up on `API_BASE_URL` (default `http://localhost:3000`).

mod common;

use common::*;
use reqwest::StatusCode;
use serde_json::Value;
use uuid::Uuid;

/// Health endpoint reports the service name
#[tokio::test]
#[ignore = "requires a running API server"]
async fn test_health() {
    TestEnvironment::validate_test_environment().await;

    let client = TestClient::new();
    let body = client.get_json("/health", &[]).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "billing-dashboard-api");
}

/// Unknown projects are 404 with the standard error body
#[tokio::test]
#[ignore = "requires a running API server"]
async fn test_unknown_project_is_not_found() {
    TestEnvironment::validate_test_environment().await;

    let client = TestClient::new();
    let response = client
        .get(&format!("/v1/projects/{}/summary", Uuid::new_v4()), &[])
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"]["status"], 404);
}

/// Status filter returns only matching rows, newest first
#[tokio::test]
#[ignore = "requires a running API server and seeded database"]
async fn test_transaction_status_filter() {
    TestEnvironment::validate_test_environment().await;

    let client = TestClient::new();
    let Some(project_id) = client.first_project_id().await else {
        return;
    };
    let path = format!("/v1/projects/{}/transactions", project_id);

    let succeeded = client.get_json(&path, &[("status", "succeeded")]).await;
    for row in succeeded.as_array().unwrap() {
        assert_eq!(row["status"], "succeeded");
    }

    let all = client.get_json(&path, &[("status", "all")]).await;
    let created: Vec<&str> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["created_at"].as_str().unwrap())
        .collect();
    let mut sorted = created.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(created, sorted, "Transactions should be newest first");
    assert!(all.as_array().unwrap().len() >= succeeded.as_array().unwrap().len());
}

/// Summary revenue matches the sum of the monthly view
#[tokio::test]
#[ignore = "requires a running API server and seeded database"]
async fn test_summary_reconciles_with_monthly_revenue() {
    TestEnvironment::validate_test_environment().await;

    let client = TestClient::new();
    let Some(project_id) = client.first_project_id().await else {
        return;
    };

    let summary = client
        .get_json(&format!("/v1/projects/{}/summary", project_id), &[])
        .await;
    let months = client
        .get_json(&format!("/v1/projects/{}/revenue/monthly", project_id), &[])
        .await;

    let monthly_total: i64 = months
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["total_revenue"].as_i64().unwrap())
        .sum();
    assert_eq!(summary["total_revenue"].as_i64().unwrap(), monthly_total);

    let subscriptions = client
        .get_json(&format!("/v1/projects/{}/subscriptions/summary", project_id), &[])
        .await;
    assert_eq!(summary["mrr"], subscriptions["mrr"]);
}

/// Trend never exceeds 14 buckets and stays inside its window
#[tokio::test]
#[ignore = "requires a running API server and seeded database"]
async fn test_trend_bounds() {
    TestEnvironment::validate_test_environment().await;

    let client = TestClient::new();
    let Some(project_id) = client.first_project_id().await else {
        return;
    };

    let report = client
        .get_json(&format!("/v1/projects/{}/trend", project_id), &[])
        .await;
    let points = report["points"].as_array().unwrap();
    assert!(points.len() <= 14);

    let start = &report["window"]["start"].as_str().unwrap()[..10];
    let end = &report["window"]["end"].as_str().unwrap()[..10];
    for point in points {
        let date = point["date"].as_str().unwrap();
        assert!(date >= start && date <= end, "{date} outside {start}..{end}");
    }
}

/// Summary cards read from one snapshot, so their counts agree
#[tokio::test]
#[ignore = "requires a running API server and seeded database"]
async fn test_summary_cards_are_consistent() {
    TestEnvironment::validate_test_environment().await;

    let client = TestClient::new();
    let Some(project_id) = client.first_project_id().await else {
        return;
    };
    let path = format!("/v1/projects/{}/summary", project_id);

    for _ in 0..5 {
        let summary = client.get_json(&path, &[]).await;
        let total = summary["total_transactions"].as_u64().unwrap();
        let succeeded = summary["successful_transactions"].as_u64().unwrap();
        let failed = summary["failed_transactions"].as_u64().unwrap();
        assert!(succeeded + failed <= total);
        assert_eq!(
            summary["net_revenue"].as_i64().unwrap(),
            summary["total_revenue"].as_i64().unwrap() - summary["total_fees"].as_i64().unwrap()
        );
    }
}
