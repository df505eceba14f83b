// SPDX-License-Identifier: MPL-2.0
//! HTTP-level tests for `ApiClient` against a local canned-response server.

use checkin_board::api::{ApiClient, ApiError, ImageFile, UploadRequest, UserId};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

/// Serves one request with `status` and `body`, returning the API base URL
/// and a handle resolving to the raw request bytes.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<Vec<u8>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept");
        let request = read_request(&mut stream).await;
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        let _ = stream.shutdown().await;
        request
    });

    (format!("http://{addr}/api"), handle)
}

async fn read_request(stream: &mut TcpStream) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = stream.read(&mut chunk).await.expect("read request");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if request_complete(&buf) {
            break;
        }
    }
    buf
}

fn request_complete(buf: &[u8]) -> bool {
    let Some(head_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
        return false;
    };
    let head = String::from_utf8_lossy(&buf[..head_end]).to_ascii_lowercase();
    let body_len = buf.len() - (head_end + 4);

    if let Some(length) = head
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse::<usize>().ok())
    {
        return body_len >= length;
    }
    if head.contains("transfer-encoding: chunked") {
        return buf.ends_with(b"0\r\n\r\n");
    }
    true
}

fn text(request: &[u8]) -> String {
    String::from_utf8_lossy(request).into_owned()
}

fn upload_request() -> UploadRequest {
    UploadRequest {
        user_id: UserId::new("42"),
        image: ImageFile::new("proof.png", PNG_BYTES.to_vec()),
    }
}

#[tokio::test]
async fn fetch_users_parses_list() {
    let (base, server) = serve_once(
        "200 OK",
        r#"[{"id":1,"username":"kim","weekCount":2,"warningCount":1,"thumbUrl":"t/1.jpg","imageUrl":"o/1.jpg"},
            {"id":"u2","username":"lee","weekCount":null}]"#,
    )
    .await;
    let client = ApiClient::new(&base).expect("client");

    let users = client.fetch_users().await.expect("users");
    let request = text(&server.await.expect("server"));

    assert!(request.starts_with("GET /api/users "));
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id.as_str(), "1");
    assert_eq!(users[0].week_count, 2);
    assert_eq!(users[0].image_url.as_deref(), Some("o/1.jpg"));
    assert_eq!(users[1].week_count, 0);
    assert_eq!(users[1].thumb_url, None);
}

#[tokio::test]
async fn fetch_users_rejects_unexpected_shape() {
    let (base, _server) = serve_once("200 OK", r#"{"users": []}"#).await;
    let client = ApiClient::new(&base).expect("client");

    let result = client.fetch_users().await;
    assert!(matches!(result, Err(ApiError::Decode(_))), "{result:?}");
}

#[tokio::test]
async fn fetch_users_reports_status() {
    let (base, _server) = serve_once("503 Service Unavailable", "").await;
    let client = ApiClient::new(&base).expect("client");

    let result = client.fetch_users().await;
    assert!(
        matches!(result, Err(ApiError::Status { status: 503, .. })),
        "{result:?}"
    );
}

#[tokio::test]
async fn upload_sends_multipart_fields() {
    let (base, server) = serve_once("200 OK", "{}").await;
    let client = ApiClient::new(&base).expect("client");

    client.upload(upload_request()).await.expect("accepted");
    let request = text(&server.await.expect("server"));

    assert!(request.starts_with("POST /api/upload "));
    assert!(request
        .to_ascii_lowercase()
        .contains("content-type: multipart/form-data; boundary="));
    assert!(request.contains(r#"name="user_id""#));
    assert!(request.contains("\r\n\r\n42\r\n"));
    assert!(request.contains(r#"name="image"; filename="proof.png""#));
    assert!(request.contains("image/png"));
}

#[tokio::test]
async fn upload_surfaces_server_error_message() {
    let (base, _server) = serve_once("422 Unprocessable Entity", r#"{"error":"duplicate"}"#).await;
    let client = ApiClient::new(&base).expect("client");

    let err = client.upload(upload_request()).await.expect_err("rejected");
    assert_eq!(
        err,
        ApiError::Status {
            status: 422,
            message: Some("duplicate".to_string()),
        }
    );
    assert_eq!(err.server_message(), Some("duplicate"));
}

#[tokio::test]
async fn upload_without_error_body_has_no_message() {
    let (base, _server) = serve_once("500 Internal Server Error", "").await;
    let client = ApiClient::new(&base).expect("client");

    let err = client.upload(upload_request()).await.expect_err("rejected");
    assert_eq!(
        err,
        ApiError::Status {
            status: 500,
            message: None,
        }
    );
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let client = ApiClient::new(&format!("http://{addr}/api")).expect("client");
    let result = client.upload(upload_request()).await;
    assert!(matches!(result, Err(ApiError::Transport(_))), "{result:?}");
}

#[tokio::test]
async fn fetch_bytes_returns_body() {
    let (base, server) = serve_once("200 OK", "raw-bytes").await;
    let client = ApiClient::new(&base).expect("client");

    let bytes = client
        .fetch_bytes(&format!("{base}/thumb/1.jpg"))
        .await
        .expect("bytes");
    let request = text(&server.await.expect("server"));

    assert_eq!(bytes, b"raw-bytes");
    assert!(request.starts_with("GET /api/thumb/1.jpg "));
}
