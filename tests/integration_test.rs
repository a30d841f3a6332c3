// End-to-end tests: run the full poll against a mock API and inspect the
// artifacts it writes.

mod helpers;

use std::fs;

use httptest::{
    matchers::{matches, request},
    responders::{json_encoded, status_code},
    Expectation, Server,
};
use serde_json::json;

use castle_status::models::{BlockSnapshot, RegionSnapshot, WorldSnapshot};
use castle_status::{run_poll, Config};

use helpers::{api_base, expect_battle_result, expect_index};

/// Config pointed at the mock server, with all delays zeroed so the tests
/// stay fast.
fn test_config(server: &Server, out_dir: &std::path::Path, max_retries: usize) -> Config {
    Config {
        api_base: api_base(server),
        out_dir: out_dir.to_path_buf(),
        concurrency: 2,
        worker_delay_ms: 0,
        inter_mode_pause_ms: 0,
        max_retries,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_local_end_to_end() {
    let server = Server::run();

    // Two eligible JP worlds; one KR world and one ineligible JP world
    // must be filtered out.
    expect_index(
        &server,
        "/worlds",
        json!([
            {"world_id": 1010, "localgvg": true},
            {"world_id": 1003, "localgvg": true},
            {"world_id": 2001, "localgvg": true},
            {"world_id": 1005, "localgvg": false}
        ]),
    );
    expect_battle_result(
        &server,
        "/1010/localgvg/latest",
        1700000100,
        json!([{"CastleId": 5, "GuildId": 77}]),
        json!({"77": "Alpha"}),
    );
    expect_battle_result(
        &server,
        "/1003/localgvg/latest",
        1700000200,
        json!([{"CastleId": 9, "GuildId": 88}]),
        json!({"88": "Bravo"}),
    );
    expect_index(&server, "/wgroups", json!([]));

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&server, dir.path(), 3);

    let report = run_poll(config).await.expect("poll should succeed");
    assert_eq!(report.local_items, 2);
    assert_eq!(report.global_items, 0);

    let body = fs::read_to_string(dir.path().join("local.json")).unwrap();
    let snapshot: RegionSnapshot<WorldSnapshot> = serde_json::from_str(&body).unwrap();

    // Ascending world-id order, regardless of fetch completion order.
    assert_eq!(snapshot.items.len(), 2);
    assert_eq!(snapshot.items[0].wid, 1003);
    assert_eq!(snapshot.items[0].label, "3");
    assert_eq!(snapshot.items[1].wid, 1010);
    assert_eq!(snapshot.items[1].label, "10");

    // Aggregate timestamp is the larger of the two.
    assert_eq!(snapshot.timestamp, 1700000200);

    assert_eq!(snapshot.items[0].castles[&9].guild_name, "Bravo");
    assert_eq!(snapshot.items[1].castles[&5].guild_name, "Alpha");

    // Downstream readers depend on the exact field names.
    let raw: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(raw["items"][0]["castles"]["9"]["guildId"], 88);
    assert_eq!(raw["items"][0]["castles"]["9"]["guildName"], "Bravo");
}

#[tokio::test]
async fn test_global_end_to_end() {
    let server = Server::run();

    expect_index(&server, "/worlds", json!([]));
    // One eligible JP group; a KR group and a non-participating JP group
    // must be filtered out.
    expect_index(
        &server,
        "/wgroups",
        json!([
            {"group_id": 301, "worlds": [1010, 1020], "globalgvg": true},
            {"group_id": 999, "worlds": [2001], "globalgvg": true},
            {"group_id": 302, "worlds": [1030], "globalgvg": false}
        ]),
    );
    // 3 classes x 4 blocks of the one eligible group, all served the same
    // battle result.
    server.expect(
        Expectation::matching(request::path(matches(
            r"^/wg/301/globalgvg/\d/\d/latest$",
        )))
        .times(12)
        .respond_with(json_encoded(json!({
            "status": 200,
            "timestamp": 1700000500,
            "data": {
                "castles": [
                    {"CastleId": 1, "GuildId": 4301},
                    {"CastleId": 2, "GuildId": 555},
                    {"CastleId": 3, "GuildId": 0}
                ],
                "guilds": {"4301": "Crimson"}
            }
        }))),
    );

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&server, dir.path(), 3);

    let report = run_poll(config).await.expect("poll should succeed");
    assert_eq!(report.local_items, 0);
    assert_eq!(report.global_items, 12);

    let body = fs::read_to_string(dir.path().join("global.json")).unwrap();
    let snapshot: RegionSnapshot<BlockSnapshot> = serde_json::from_str(&body).unwrap();
    assert_eq!(snapshot.items.len(), 12);
    assert_eq!(snapshot.timestamp, 1700000500);

    // Class varies slowest, block fastest.
    let keys: Vec<(u8, u8)> = snapshot.items.iter().map(|i| (i.cls, i.blk)).collect();
    let expected: Vec<(u8, u8)> = (1..=3u8)
        .flat_map(|cls| (0..=3u8).map(move |blk| (cls, blk)))
        .collect();
    assert_eq!(keys, expected);

    let first = &snapshot.items[0];
    assert_eq!(first.label, "JP G301 Elite A");
    assert_eq!(first.sn, "JP");
    assert_eq!(first.gid, 301);
    assert_eq!(first.wds, "10, 20");
    assert_eq!(snapshot.items[11].label, "JP G301 Grand Master D");

    // Owner names carry the home-group tag; NPC castles do not.
    assert_eq!(first.castles[&1].guild_name, "Crimson (301)");
    assert_eq!(first.castles[&2].guild_name, "ID:555 (555)");
    assert_eq!(first.castles[&3].guild_name, "NPC");
}

#[tokio::test]
async fn test_index_failure_is_fatal() {
    let server = Server::run();

    // The worlds index never recovers: one request per allowed attempt.
    server.expect(
        Expectation::matching(request::method_path("GET", "/worlds"))
            .times(1)
            .respond_with(status_code(500).body("Internal Server Error")),
    );

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&server, dir.path(), 1);

    let err = run_poll(config).await.expect_err("poll must abort");
    let message = format!("{err:#}");
    assert!(
        message.contains("worlds index unavailable"),
        "unexpected error: {message}"
    );

    // No artifact may exist after a fatal index failure.
    assert!(!dir.path().join("local.json").exists());
    assert!(!dir.path().join("global.json").exists());
}

#[tokio::test]
async fn test_partial_success_still_writes_artifact() {
    let server = Server::run();

    expect_index(
        &server,
        "/worlds",
        json!([
            {"world_id": 1010, "localgvg": true},
            {"world_id": 1020, "localgvg": true}
        ]),
    );
    expect_battle_result(
        &server,
        "/1010/localgvg/latest",
        1700000100,
        json!([{"CastleId": 1, "GuildId": 77}]),
        json!({"77": "Alpha"}),
    );
    // One world stays broken through every allowed attempt.
    server.expect(
        Expectation::matching(request::method_path("GET", "/1020/localgvg/latest"))
            .times(1)
            .respond_with(status_code(503)),
    );
    expect_index(&server, "/wgroups", json!([]));

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&server, dir.path(), 1);

    let report = run_poll(config).await.expect("partial success is success");
    assert_eq!(report.local_items, 1);

    let body = fs::read_to_string(dir.path().join("local.json")).unwrap();
    let snapshot: RegionSnapshot<WorldSnapshot> = serde_json::from_str(&body).unwrap();
    assert_eq!(snapshot.items.len(), 1);
    assert_eq!(snapshot.items[0].wid, 1010);
    assert_eq!(snapshot.timestamp, 1700000100);
}

#[tokio::test]
async fn test_castleless_target_is_skipped_silently() {
    let server = Server::run();

    expect_index(
        &server,
        "/worlds",
        json!([
            {"world_id": 1010, "localgvg": true},
            {"world_id": 1020, "localgvg": true}
        ]),
    );
    expect_battle_result(
        &server,
        "/1010/localgvg/latest",
        1700000100,
        json!([{"CastleId": 1, "GuildId": 77}]),
        json!({"77": "Alpha"}),
    );
    // Status 200 but no castles payload: skipped without retries.
    server.expect(
        Expectation::matching(request::method_path("GET", "/1020/localgvg/latest"))
            .times(1)
            .respond_with(json_encoded(json!({
                "status": 200,
                "timestamp": 1700000300,
                "data": {}
            }))),
    );
    expect_index(&server, "/wgroups", json!([]));

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&server, dir.path(), 3);

    let report = run_poll(config).await.expect("poll should succeed");
    assert_eq!(report.local_items, 1);

    let body = fs::read_to_string(dir.path().join("local.json")).unwrap();
    let snapshot: RegionSnapshot<WorldSnapshot> = serde_json::from_str(&body).unwrap();
    assert_eq!(snapshot.items[0].wid, 1010);
    // The skipped target contributes nothing, not even its timestamp.
    assert_eq!(snapshot.timestamp, 1700000100);
}
