//! End-to-end resolution against a mocked completion endpoint: the remote
//! path when it works, the local fallback for every remote failure kind.

use std::sync::Arc;

use httpmock::prelude::*;
use serde_json::json;

use arithmix::db::queries;
use arithmix::resolver::UNRESOLVED_MESSAGE;
use arithmix::{CommandResolver, Database, GroqClient, RemoteFailure, Resolution};

fn resolver_against(server: &MockServer) -> (CommandResolver, Arc<Database>) {
    let db = Arc::new(Database::open_in_memory().expect("in-memory database"));
    let client = GroqClient::new("test-key".to_string(), None, Some(server.base_url()));
    (CommandResolver::new(Some(client), db.clone()), db)
}

fn tool_call_reply(name: &str, arguments: serde_json::Value) -> serde_json::Value {
    json!({
        "choices": [{
            "message": {
                "tool_calls": [{
                    "type": "function",
                    "function": {
                        "name": name,
                        "arguments": arguments.to_string(),
                    }
                }]
            }
        }]
    })
}

#[tokio::test]
async fn remote_tool_call_resolves_the_instruction() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/chat/completions")
            .header("authorization", "Bearer test-key")
            // The instruction is normalized before it is sent.
            .body_contains("What is 4 times 5");
        then.status(200)
            .json_body(tool_call_reply("multiply", json!({"a": 4, "b": 5})));
    });

    let (resolver, db) = resolver_against(&server);
    let resolution = resolver.resolve("What is four times five").await.unwrap();

    mock.assert();
    assert_eq!(resolution.message(), "The product of 4.0 and 5.0 is 20.0.");

    let rows = queries::list_history(&db).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].instruction, "What is four times five");
    assert_eq!(rows[0].result, "The product of 4.0 and 5.0 is 20.0.");
}

#[tokio::test]
async fn operands_bind_in_the_order_the_model_gives() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(200)
            .json_body(tool_call_reply("subtract", json!({"a": 10, "b": 4})));
    });

    let (resolver, _db) = resolver_against(&server);
    let resolution = resolver.resolve("take 4 away from 10").await.unwrap();
    assert_eq!(resolution.message(), "The difference between 10.0 and 4.0 is 6.0.");
}

#[tokio::test]
async fn server_errors_fall_back_to_the_local_parser() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(500).body("internal error");
    });

    let (resolver, db) = resolver_against(&server);
    let resolution = resolver.resolve("multiply 4 and 5").await.unwrap();

    // One remote attempt, no retries.
    mock.assert();
    assert_eq!(resolution.message(), "The product of 4.0 and 5.0 is 20.0.");
    assert_eq!(queries::list_history(&db).unwrap().len(), 1);
}

#[tokio::test]
async fn malformed_payloads_fall_back_to_the_local_parser() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(200).body("<html>gateway</html>");
    });

    let (resolver, _db) = resolver_against(&server);
    let resolution = resolver.resolve("add 2 and 3").await.unwrap();
    assert_eq!(resolution.message(), "The sum of 2.0 and 3.0 is 5.0.");
}

#[tokio::test]
async fn content_only_replies_fall_back_to_the_local_parser() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(200).json_body(json!({
            "choices": [{ "message": { "content": "I cannot run calculations." } }]
        }));
    });

    let (resolver, _db) = resolver_against(&server);
    let resolution = resolver.resolve("subtract 9 and 4").await.unwrap();
    assert_eq!(resolution.message(), "The difference between 9.0 and 4.0 is 5.0.");
}

#[tokio::test]
async fn unknown_function_names_fall_back_to_the_local_parser() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(200)
            .json_body(tool_call_reply("modulo", json!({"a": 10, "b": 4})));
    });

    let (resolver, _db) = resolver_against(&server);
    let resolution = resolver.resolve("divide 10 by 4").await.unwrap();
    assert_eq!(resolution.message(), "The result of dividing 10.0 by 4.0 is 2.5.");
}

#[tokio::test]
async fn unresolvable_input_records_nothing_when_both_layers_fail() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(500).body("internal error");
    });

    let (resolver, db) = resolver_against(&server);
    let resolution = resolver.resolve("tell me a story").await.unwrap();

    assert!(matches!(resolution, Resolution::Unresolved));
    assert_eq!(resolution.message(), UNRESOLVED_MESSAGE);
    assert!(queries::list_history(&db).unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Client failure kinds
// ---------------------------------------------------------------------------

#[tokio::test]
async fn http_error_statuses_surface_as_transport_failures() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(401).body("invalid api key");
    });

    let client = GroqClient::new("bad-key".to_string(), None, Some(server.base_url()));
    let err = client.resolve("add 1 and 2").await.unwrap_err();
    assert!(matches!(err, RemoteFailure::Transport(_)));
}

#[tokio::test]
async fn unreachable_endpoints_surface_as_transport_failures() {
    // Nothing listens on the discard port.
    let client = GroqClient::new(
        "test-key".to_string(),
        None,
        Some("http://127.0.0.1:9".to_string()),
    );
    let err = client.resolve("add 1 and 2").await.unwrap_err();
    assert!(matches!(err, RemoteFailure::Transport(_)));
}
