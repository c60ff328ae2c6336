//! HTTP client tests
//!
//! Each test starts a one-shot HTTP server on a random localhost port that
//! records the request it receives and answers with a canned response.

use evilcorp::remote::{Endpoints, RemoteClient};
use evilcorp::ui::requests::{perform, Request, RequestKind, Response};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// The raw request as seen by the server: head (request line + headers) and body.
struct Captured {
    head: String,
    body: String,
}

/// Serve exactly one request with `status` and `body`; return the base URL
/// and a receiver for the captured request.
async fn serve_once(status: &'static str, body: &'static str) -> (String, oneshot::Receiver<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");

        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        let head_end = loop {
            let n = socket.read(&mut chunk).await.expect("read");
            assert!(n > 0, "client closed before sending headers");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&buf[..head_end]).to_string();
        let content_length = head
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        while buf.len() < head_end + content_length {
            let n = socket.read(&mut chunk).await.expect("read body");
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }
        let request_body = String::from_utf8_lossy(&buf[head_end..]).to_string();

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        socket.shutdown().await.ok();

        let _ = tx.send(Captured {
            head,
            body: request_body,
        });
    });

    (format!("http://{}", addr), rx)
}

fn client_for(base: &str) -> RemoteClient {
    RemoteClient::new(Endpoints {
        backend_url: base.to_string(),
        item_api_url: format!("{}/api/v2/pokemon", base),
    })
    .expect("build client")
}

#[tokio::test]
async fn test_fetch_users_hits_sql_path() {
    let (base, captured) = serve_once(
        "200 OK",
        r#"[{"id":1,"username":"Doofenshmirtz","password":"password","email":"platypush8r@gmail.com"}]"#,
    )
    .await;

    let users = client_for(&base).fetch_users().await.expect("fetch users");
    let captured = captured.await.expect("captured request");

    assert!(captured.head.starts_with("GET /sql/ HTTP/1.1"));
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].cell("username"), "Doofenshmirtz");
    assert_eq!(users[0].cell("id"), "1");
}

#[tokio::test]
async fn test_fetch_users_accepts_id_keyed_object() {
    let (base, _captured) = serve_once(
        "200 OK",
        r#"{"1":{"id":1,"username":"Doofenshmirtz"},"2":{"id":2,"username":"BigFrank"}}"#,
    )
    .await;

    let users = client_for(&base).fetch_users().await.expect("fetch users");
    let names: Vec<String> = users.iter().map(|u| u.cell("username")).collect();
    assert_eq!(names, vec!["Doofenshmirtz", "BigFrank"]);
}

#[tokio::test]
async fn test_fetch_minion_appends_id() {
    let (base, captured) = serve_once(
        "200 OK",
        r#"{"id":132,"name":"ditto","sprites":{"front_default":"https://img/132.png","back_default":"https://img/back/132.png"}}"#,
    )
    .await;

    let minion = client_for(&base).fetch_minion(132).await.expect("fetch minion");
    let captured = captured.await.expect("captured request");

    assert!(captured.head.starts_with("GET /api/v2/pokemon/132 HTTP/1.1"));
    assert_eq!(minion.name, "ditto");
    assert_eq!(
        minion.sprites.back_default.as_deref(),
        Some("https://img/back/132.png")
    );
}

#[tokio::test]
async fn test_send_chat_posts_input() {
    let (base, captured) = serve_once("200 OK", r#"{"response":"Behold!"}"#).await;

    let reply = client_for(&base)
        .send_chat("build a -inator")
        .await
        .expect("send chat");
    let captured = captured.await.expect("captured request");

    assert!(captured.head.starts_with("POST /chat/memory-chat HTTP/1.1"));
    assert!(captured
        .head
        .to_ascii_lowercase()
        .contains("content-type: application/json"));
    let sent: serde_json::Value = serde_json::from_str(&captured.body).expect("json body");
    assert_eq!(sent, serde_json::json!({"input": "build a -inator"}));
    assert_eq!(reply, "Behold!");
}

#[tokio::test]
async fn test_send_chat_accepts_bare_string() {
    let (base, _captured) = serve_once("200 OK", r#""Curse you!""#).await;

    let reply = client_for(&base).send_chat("hi").await.expect("send chat");
    assert_eq!(reply, "Curse you!");
}

#[tokio::test]
async fn test_server_error_is_reported_not_retried() {
    let (base, _captured) = serve_once("500 Internal Server Error", r#"{"detail":"boom"}"#).await;

    // The server accepts one connection only; a retry would hang or fail to connect.
    let err = client_for(&base)
        .fetch_users()
        .await
        .expect_err("500 should fail");
    assert!(format!("{:#}", err).contains("Failed to fetch users"));
}

#[tokio::test]
async fn test_perform_maps_failure_to_kind() {
    let (base, _captured) = serve_once("200 OK", r#"{"name": 5}"#).await;

    let response = perform(&client_for(&base), Request::FetchMinion(1)).await;
    match response {
        Response::Failed { kind, message } => {
            assert_eq!(kind, RequestKind::Minion);
            assert!(message.contains("Failed to decode minion 1"));
        }
        other => panic!("expected failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_perform_users_success() {
    let (base, _captured) = serve_once("200 OK", r#"[{"id":7},{"id":8}]"#).await;

    let response = perform(&client_for(&base), Request::FetchUsers).await;
    match response {
        Response::Users(users) => assert_eq!(users.len(), 2),
        other => panic!("expected users, got {:?}", other),
    }
}
