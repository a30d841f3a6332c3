// Shared test helpers for mocking the battle-statistics API.

use httptest::{matchers::request, responders::json_encoded, Expectation, Server};
use serde_json::{json, Value};

/// Mock-server base URL without a trailing slash, suitable for
/// `Config::api_base`.
#[allow(dead_code)] // Used by other test files
pub fn api_base(server: &Server) -> String {
    server.url_str("/").trim_end_matches('/').to_string()
}

/// Expects exactly one GET of `path` answered with a status-200 envelope
/// wrapping `data`.
#[allow(dead_code)] // Used by other test files
pub fn expect_index(server: &Server, path: &'static str, data: Value) {
    server.expect(
        Expectation::matching(request::method_path("GET", path))
            .respond_with(json_encoded(json!({"status": 200, "data": data}))),
    );
}

/// Expects exactly one GET of `path` answered with a status-200 battle
/// envelope.
#[allow(dead_code)] // Used by other test files
pub fn expect_battle_result(
    server: &Server,
    path: &'static str,
    timestamp: i64,
    castles: Value,
    guilds: Value,
) {
    server.expect(
        Expectation::matching(request::method_path("GET", path)).respond_with(json_encoded(
            json!({
                "status": 200,
                "timestamp": timestamp,
                "data": {"castles": castles, "guilds": guilds}
            }),
        )),
    );
}
