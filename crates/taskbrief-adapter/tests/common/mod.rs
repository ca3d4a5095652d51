/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for taskbrief-adapter tests

use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Todoist task list fixture: one overdue, one completed today, one undated
#[allow(dead_code)]
pub fn sample_tasks_json() -> serde_json::Value {
    serde_json::json!([
        {
            "id": "1001",
            "content": "Pay rent",
            "is_completed": false,
            "due": { "date": "2024-01-01", "is_recurring": false }
        },
        {
            "id": "1002",
            "content": "Report",
            "is_completed": true,
            "due": { "date": "2024-01-02", "is_recurring": false }
        },
        {
            "id": "1003",
            "content": "Read a book",
            "is_completed": false
        }
    ])
}
