#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;

use crosscheck_core::types::Sensitive;
use crosscheck_core::{Backend, InvocationFailure};
use crosscheck_engine::config::{BackendConfig, Credentials, TransportConfig};
use crosscheck_engine::HttpBackend;
use serde_json::json;

struct Captured {
    request_line: String,
    headers: Vec<String>,
    body: String,
}

/// Serve exactly one HTTP response and hand back what was received
fn serve_once(status_line: &'static str, reply: &'static str) -> (String, mpsc::Receiver<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        let mut headers = Vec::new();
        let mut content_length = 0usize;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            let line = line.trim_end().to_string();
            if line.is_empty() {
                break;
            }
            if let Some(value) = line.to_ascii_lowercase().strip_prefix("content-length:") {
                content_length = value.trim().parse().unwrap();
            }
            headers.push(line);
        }
        let mut body = vec![0u8; content_length];
        reader.read_exact(&mut body).unwrap();

        let mut stream = stream;
        write!(
            stream,
            "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            reply.len(),
            reply
        )
        .unwrap();
        stream.flush().unwrap();

        tx.send(Captured {
            request_line: request_line.trim_end().to_string(),
            headers,
            body: String::from_utf8(body).unwrap(),
        })
        .unwrap();
    });

    (format!("http://{}", addr), rx)
}

fn backend(base_url: String, credentials: Option<Credentials>) -> HttpBackend {
    HttpBackend::new(
        BackendConfig {
            label: "API".into(),
            base_url,
            append_operation: true,
        },
        &TransportConfig { timeout_secs: 5 },
        credentials,
    )
    .unwrap()
}

#[test]
fn test_posts_json_to_operation_path_with_basic_auth() {
    let (url, received) = serve_once("HTTP/1.1 200 OK", r#"{"responseCd":"0"}"#);
    let credentials = Credentials {
        username: "svc".into(),
        password: Sensitive::new("pw".into()),
    };

    let reply = backend(url, Some(credentials))
        .send("CourtList", &json!({"roomCd": "001"}))
        .unwrap();
    assert_eq!(reply, Some(json!({"responseCd": "0"})));

    let captured = received.recv().unwrap();
    assert_eq!(captured.request_line, "POST /CourtList HTTP/1.1");
    assert!(captured
        .headers
        .iter()
        .any(|h| h.eq_ignore_ascii_case("authorization: Basic c3ZjOnB3")));
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&captured.body).unwrap(),
        json!({"roomCd": "001"})
    );
}

#[test]
fn test_server_error_is_http_status_failure() {
    let (url, _received) = serve_once("HTTP/1.1 500 Internal Server Error", "{}");

    let failure = backend(url, None)
        .send("CodeValues", &json!({}))
        .unwrap_err();
    assert!(matches!(
        failure,
        InvocationFailure::HttpStatus { status: 500, .. }
    ));
}

#[test]
fn test_null_body_is_absent_response() {
    let (url, _received) = serve_once("HTTP/1.1 200 OK", "null");
    let reply = backend(url, None).send("GetDocument", &json!({})).unwrap();
    assert_eq!(reply, None);
}
