//! Integration tests for `DiscordClient` and `WebhookClient` using wiremock.

use chrono::{DateTime, Utc};
use recap_discord::{DiscordClient, DiscordError, WebhookClient};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> DiscordClient {
    DiscordClient::with_base_url("test-token", 30, "recap-test/0.1", base_url)
        .expect("client construction should not fail")
}

fn utc(s: &str) -> DateTime<Utc> {
    s.parse().expect("test instant should parse")
}

fn message(id: &str, timestamp: &str) -> serde_json::Value {
    json!({
        "id": id,
        "timestamp": timestamp,
        "embeds": [],
    })
}

#[tokio::test]
async fn get_channel_parses_the_channel_and_sends_bot_auth() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/channels/123"))
        .and(header("authorization", "Bot test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "123",
            "type": 0,
            "name": "wiki-feed",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let channel = test_client(&server.uri())
        .get_channel("123")
        .await
        .expect("should parse channel");

    assert_eq!(channel.id, "123");
    assert_eq!(channel.kind, 0);
    assert_eq!(channel.name.as_deref(), Some("wiki-feed"));
}

#[tokio::test]
async fn resolve_rejects_a_non_text_channel() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/channels/123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "123",
            "type": 2,
        })))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .resolve_text_channel("123")
        .await
        .expect_err("voice channel should be rejected");

    assert!(matches!(
        err,
        DiscordError::NotATextChannel { channel_id, kind: 2 } if channel_id == "123"
    ));
}

#[tokio::test]
async fn resolve_maps_404_to_channel_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/channels/999"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .resolve_text_channel("999")
        .await
        .expect_err("missing channel should be rejected");

    assert!(matches!(
        err,
        DiscordError::ChannelNotFound { channel_id } if channel_id == "999"
    ));
}

#[tokio::test]
async fn fetch_page_requests_the_full_page_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/channels/123/messages"))
        .and(query_param("limit", "100"))
        .and(query_param_is_missing("before"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            message("9", "2024-06-05T12:00:00Z"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let messages = test_client(&server.uri())
        .fetch_messages_page("123", None)
        .await
        .expect("should parse messages");

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].id, "9");
    assert_eq!(messages[0].timestamp, utc("2024-06-05T12:00:00Z"));
}

#[tokio::test]
async fn history_walk_stops_at_the_boundary_batch() {
    let server = MockServer::start().await;
    let since = utc("2024-06-03T00:00:00Z");

    // First page: everything in the window, so the walk continues.
    Mock::given(method("GET"))
        .and(path("/channels/123/messages"))
        .and(query_param_is_missing("before"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            message("9", "2024-06-07T10:00:00Z"),
            message("8", "2024-06-06T10:00:00Z"),
            message("7", "2024-06-05T10:00:00Z"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    // Second page crosses the window boundary; no third request may follow.
    Mock::given(method("GET"))
        .and(path("/channels/123/messages"))
        .and(query_param("before", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            message("6", "2024-06-04T10:00:00Z"),
            message("5", "2024-06-01T10:00:00Z"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let messages = test_client(&server.uri())
        .fetch_history_since("123", since)
        .await
        .expect("walk should succeed");

    let ids: Vec<&str> = messages.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["9", "8", "7", "6"]);
    assert!(messages.iter().all(|m| m.timestamp >= since));
}

#[tokio::test]
async fn history_walk_handles_an_exhausted_channel() {
    let server = MockServer::start().await;

    // Single short page, all in window, then an empty page ends the walk.
    Mock::given(method("GET"))
        .and(path("/channels/123/messages"))
        .and(query_param_is_missing("before"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            message("3", "2024-06-05T10:00:00Z"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/channels/123/messages"))
        .and(query_param("before", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let messages = test_client(&server.uri())
        .fetch_history_since("123", utc("2024-06-03T00:00:00Z"))
        .await
        .expect("walk should succeed");

    assert_eq!(messages.len(), 1);
}

#[tokio::test]
async fn history_walk_propagates_a_page_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/channels/123/messages"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .fetch_history_since("123", utc("2024-06-03T00:00:00Z"))
        .await
        .expect_err("server error should abort the walk");

    assert!(matches!(
        err,
        DiscordError::UnexpectedStatus { status: 500, .. }
    ));
}

#[tokio::test]
async fn message_embeds_expose_author_title_and_description() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/channels/123/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "4",
                "timestamp": "2024-06-05T12:00:00Z",
                "embeds": [
                    {
                        "author": { "name": "Rei" },
                        "title": "Rei edited a page",
                        "description": "line one\nline two",
                    },
                ],
            },
        ])))
        .mount(&server)
        .await;

    let messages = test_client(&server.uri())
        .fetch_messages_page("123", None)
        .await
        .expect("should parse messages");

    let embed = &messages[0].embeds[0];
    assert_eq!(
        embed.author.as_ref().and_then(|a| a.name.as_deref()),
        Some("Rei")
    );
    assert_eq!(embed.title.as_deref(), Some("Rei edited a page"));
    assert_eq!(embed.description.as_deref(), Some("line one\nline two"));
}

#[tokio::test]
async fn webhook_accepts_any_2xx() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/hook"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let webhook = WebhookClient::new(&format!("{}/hook", server.uri()), 30, "recap-test/0.1")
        .expect("client construction should not fail");

    webhook
        .execute(&json!({ "embeds": [] }))
        .await
        .expect("2xx should count as delivered");
}

#[tokio::test]
async fn webhook_reports_a_non_2xx_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/hook"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let webhook = WebhookClient::new(&format!("{}/hook", server.uri()), 30, "recap-test/0.1")
        .expect("client construction should not fail");

    let err = webhook
        .execute(&json!({ "embeds": [] }))
        .await
        .expect_err("4xx should be a delivery failure");

    assert!(matches!(err, DiscordError::WebhookStatus { status: 400 }));
}
