use clap::Parser;
use httpmock::prelude::*;
use meal_max_smoke::{smoke_sequence, CliConfig, HttpTransport, SmokeError, SmokeRunner};
use serde_json::json;
use std::time::Duration;

fn test_runner(server: &MockServer) -> SmokeRunner<HttpTransport, CliConfig> {
    let config = CliConfig {
        base_url: server.url("/api"),
        echo_json: false,
        timeout_seconds: 5,
        config: None,
        verbose: false,
        log_json: false,
    };
    let transport = HttpTransport::new(Duration::from_secs(5)).unwrap();
    SmokeRunner::new(transport, config)
}

fn sample_meal() -> serde_json::Value {
    json!({
        "id": 3,
        "meal": "Beef Bourguignon",
        "cuisine": "French",
        "price": 24.0,
        "difficulty": "HIGH"
    })
}

#[tokio::test]
async fn test_failed_create_stops_before_deletes_and_gets() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/health");
        then.status(200).json_body(json!({"status": "healthy"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/db-check");
        then.status(200)
            .json_body(json!({"database_status": "healthy"}));
    });
    let failing_create = server.mock(|when, then| {
        when.method(POST).path("/api/create-meal");
        then.status(200)
            .json_body(json!({"status": "error", "error": "table missing"}));
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE).path_contains("/api/delete-meal/");
        then.status(200).json_body(json!({"status": "success"}));
    });
    let get_by_id = server.mock(|when, then| {
        when.method(GET).path_contains("/api/get-meal-by-id/");
        then.status(200)
            .json_body(json!({"status": "success", "meal": sample_meal()}));
    });

    let runner = test_runner(&server);
    let err = runner.run(&smoke_sequence()).await.unwrap_err();

    match err {
        SmokeError::CheckFailed { check, reason } => {
            assert_eq!(check, "create meal 'Spaghetti Carbonara'");
            assert!(reason.contains("success"));
        }
        other => panic!("expected CheckFailed, got {:?}", other),
    }

    // the run died on the first create; nothing downstream was touched
    failing_create.assert_hits(1);
    delete.assert_hits(0);
    get_by_id.assert_hits(0);
}

#[tokio::test]
async fn test_battle_500_stops_before_clear_combatants_and_leaderboard() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/health");
        then.status(200).json_body(json!({"status": "healthy"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/db-check");
        then.status(200)
            .json_body(json!({"database_status": "healthy"}));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/create-meal");
        then.status(201).json_body(json!({"status": "success"}));
    });
    server.mock(|when, then| {
        when.method(DELETE).path_contains("/api/delete-meal/");
        then.status(200).json_body(json!({"status": "success"}));
    });
    server.mock(|when, then| {
        when.method(GET).path_contains("/api/get-meal-by-");
        then.status(200)
            .json_body(json!({"status": "success", "meal": sample_meal()}));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/clear-meals");
        then.status(200).json_body(json!({"status": "success"}));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/prep-combatant");
        then.status(200).json_body(json!({"status": "success"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/get-combatants");
        then.status(200)
            .json_body(json!({"status": "success", "combatants": [sample_meal()]}));
    });
    let battle = server.mock(|when, then| {
        when.method(GET).path("/api/battle");
        then.status(500)
            .json_body(json!({"error": "not enough combatants"}));
    });
    let clear_combatants = server.mock(|when, then| {
        when.method(POST).path("/api/clear-combatants");
        then.status(200).json_body(json!({"status": "success"}));
    });
    let leaderboard = server.mock(|when, then| {
        when.method(GET).path("/api/leaderboard");
        then.status(200)
            .json_body(json!({"status": "success", "leaderboard": []}));
    });

    let runner = test_runner(&server);
    let err = runner.run(&smoke_sequence()).await.unwrap_err();

    match err {
        SmokeError::UnexpectedStatus {
            check,
            status,
            body,
        } => {
            assert_eq!(check, "battle");
            assert_eq!(status, 500);
            assert!(body.contains("not enough combatants"));
        }
        other => panic!("expected UnexpectedStatus, got {:?}", other),
    }

    battle.assert_hits(1);
    clear_combatants.assert_hits(0);
    leaderboard.assert_hits(0);
}

#[tokio::test]
async fn test_failed_catalog_clear_does_not_stop_the_run() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/health");
        then.status(200).json_body(json!({"status": "healthy"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/db-check");
        then.status(200)
            .json_body(json!({"database_status": "healthy"}));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/create-meal");
        then.status(201).json_body(json!({"status": "success"}));
    });
    server.mock(|when, then| {
        when.method(DELETE).path_contains("/api/delete-meal/");
        then.status(200).json_body(json!({"status": "success"}));
    });
    server.mock(|when, then| {
        when.method(GET).path_contains("/api/get-meal-by-");
        then.status(200)
            .json_body(json!({"status": "success", "meal": sample_meal()}));
    });
    let failing_clear = server.mock(|when, then| {
        when.method(DELETE).path("/api/clear-meals");
        then.status(500).json_body(json!({"status": "error"}));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/prep-combatant");
        then.status(200).json_body(json!({"status": "success"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/get-combatants");
        then.status(200)
            .json_body(json!({"status": "success", "combatants": []}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/battle");
        then.status(200).json_body(json!({"status": "success"}));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/clear-combatants");
        then.status(200).json_body(json!({"status": "success"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/leaderboard");
        then.status(200)
            .json_body(json!({"status": "success", "leaderboard": []}));
    });

    let runner = test_runner(&server);
    let summary = runner.run(&smoke_sequence()).await.unwrap();

    assert_eq!(summary.checks_run, 24);
    failing_clear.assert_hits(1);
}

#[test]
fn test_unknown_flag_fails_before_any_network_call() {
    let result = CliConfig::try_parse_from(["meal-max-smoke", "--definitely-not-a-flag"]);
    assert!(result.is_err());
}

#[test]
fn test_usage_error_on_stray_positional_argument() {
    let result = CliConfig::try_parse_from(["meal-max-smoke", "extra"]);
    assert!(result.is_err());
}
