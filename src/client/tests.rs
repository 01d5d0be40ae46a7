use super::mock::MockConnection;
use super::{Client, Connection, UNKNOWN_NAME, WsConnection};
use serde_json::json;
use tokio::sync::mpsc;
use tungstenite::protocol::Message as WsMessage;

#[test]
fn test_client_activity_follows_connection() {
    assert!(!Client::detached().is_active());
    assert!(!Client::new(MockConnection::closed()).is_active());
    assert!(Client::new(MockConnection::open()).is_active());
}

#[test]
fn test_client_activity_is_not_cached() {
    let connection = MockConnection::open();
    let client = Client::new(connection.clone());
    assert!(client.is_active());

    connection.set_open(false);
    assert!(!client.is_active());
}

#[test]
fn test_client_ids_are_unique() {
    let a = Client::detached();
    let b = Client::detached();
    assert!(a.id().starts_with("client-"));
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_client_tags_and_name() {
    let client = Client::new(MockConnection::open());
    assert!(!client.is_tag("tag1"));
    assert_eq!(client.name(), UNKNOWN_NAME);

    client.init_tags(vec!["tag1".to_string(), "tag2".to_string()]);
    assert!(client.is_tag("tag1"));
    assert!(client.is_tag("tag2"));
    assert!(!client.is_tag("tag3"));
    assert_eq!(client.name(), "tag1, tag2");
}

#[test]
fn test_init_tags_replaces_previous_set() {
    let client = Client::detached();
    client.init_tags(vec!["a".to_string(), "b".to_string()]);
    client.init_tags(vec!["c".to_string()]);

    assert_eq!(client.tags(), vec!["c".to_string()]);
    assert!(!client.is_tag("a"));
    assert_eq!(client.name(), "c");
}

#[test]
fn test_init_tags_with_empty_set_keeps_tags() {
    let client = Client::detached();
    client.init_tags(vec!["a".to_string()]);
    client.init_tags(Vec::new());
    assert_eq!(client.name(), "a");
}

#[test]
fn test_tag_match_is_exact() {
    let client = Client::detached();
    client.init_tags(vec!["news".to_string()]);
    assert!(!client.is_tag("new"));
    assert!(!client.is_tag("News"));
}

#[tokio::test]
async fn test_send_string_goes_out_verbatim() {
    let connection = MockConnection::open();
    let client = Client::new(connection.clone());

    client.send(&json!("hello")).await.unwrap();
    client.send(&json!({"a": 1})).await.unwrap();
    client.send(&json!([1, 2])).await.unwrap();

    assert_eq!(connection.sent(), vec!["hello", r#"{"a":1}"#, "[1,2]"]);
}

#[tokio::test]
async fn test_send_to_inactive_client_is_noop() {
    let connection = MockConnection::closed();
    let client = Client::new(connection.clone());

    assert!(client.send(&json!("hello")).await.is_ok());
    assert!(Client::detached().send_text("hello").await.is_ok());
    assert!(connection.sent().is_empty());
}

#[tokio::test]
async fn test_send_failure_is_reported() {
    let client = Client::new(MockConnection::failing());
    assert!(client.send_text("hello").await.is_err());
}

#[tokio::test]
async fn test_ws_connection_forwards_text_frames() {
    let (tx, mut rx) = mpsc::unbounded_channel::<WsMessage>();
    let connection = WsConnection::new(tx);
    assert!(connection.is_open());

    connection.send("pong".to_string()).await.unwrap();
    match rx.try_recv().unwrap() {
        WsMessage::Text(text) => assert_eq!(text.as_str(), "pong"),
        other => panic!("Expected a text message, got {other:?}"),
    }
}

#[test]
fn test_ws_connection_closes_with_writer_or_on_request() {
    let (tx, rx) = mpsc::unbounded_channel::<WsMessage>();
    let connection = WsConnection::new(tx);
    drop(rx);
    assert!(!connection.is_open());

    let (tx, _rx) = mpsc::unbounded_channel::<WsMessage>();
    let client = Client::new(WsConnection::new(tx));
    assert!(client.is_active());
    client.close();
    assert!(!client.is_active());
}
