use classdesk::client::{ApiClient, ClientError};
use classdesk::config::ApiConfig;
use classdesk_session::{MemoryStore, SessionStore, slots};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

/// Serve one canned HTTP response on a loopback port.
///
/// Returns the base URL to point the client at and the handle of the
/// serving thread.
fn serve_once(status_line: &'static str, body: &'static str) -> (String, thread::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = [0u8; 4096];
        let _ = stream.read(&mut request);

        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
    });

    (format!("http://{addr}"), handle)
}

fn client_for(base_url: String, store: Arc<MemoryStore>) -> ApiClient {
    let config = ApiConfig {
        base_url,
        timeout_secs: 5,
    };
    ApiClient::new(&config, store).unwrap()
}

#[tokio::test]
async fn test_get_json_decodes_success_body() {
    let (base_url, server) = serve_once("200 OK", r#"[{"staffNo": "T1"}]"#);
    let store = Arc::new(MemoryStore::new());
    let client = client_for(base_url, store);

    let body = client.get_json("/api/teachers").await.unwrap();
    assert_eq!(body[0]["staffNo"], "T1");

    server.join().unwrap();
}

#[tokio::test]
async fn test_unauthorized_clears_cached_token() {
    let (base_url, server) = serve_once("401 Unauthorized", "");
    let store = Arc::new(MemoryStore::new());
    store.set(slots::AUTH_TOKEN, "\"stale-token\"");
    let client = client_for(base_url, store.clone());

    let err = client.get_json("/api/students").await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));

    // The stale token is gone; the next login starts clean.
    assert_eq!(store.get(slots::AUTH_TOKEN), None);

    server.join().unwrap();
}

#[tokio::test]
async fn test_error_status_maps_to_status_variant() {
    let (base_url, server) = serve_once("500 Internal Server Error", "");
    let store = Arc::new(MemoryStore::new());
    store.set(slots::AUTH_TOKEN, "\"still-good\"");
    let client = client_for(base_url, store.clone());

    let err = client.get_json("/api/parents").await.unwrap_err();
    assert!(matches!(err, ClientError::Status(status) if status.as_u16() == 500));

    // Only a 401 clears the token.
    assert_eq!(store.get(slots::AUTH_TOKEN).as_deref(), Some("\"still-good\""));

    server.join().unwrap();
}
