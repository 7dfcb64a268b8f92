//! CLI integration tests
//!
//! These run the `crosscheck` binary against throwaway local HTTP servers.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::process::{Command, Output};
use std::thread;

use tempfile::TempDir;

/// Answer every request with the same JSON body until the test process exits
fn serve_forever(body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(stream) = stream else { continue };
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut content_length = 0usize;
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).unwrap_or(0) == 0 {
                    break;
                }
                let line = line.trim_end().to_ascii_lowercase();
                if line.is_empty() {
                    break;
                }
                if let Some(value) = line.strip_prefix("content-length:") {
                    content_length = value.trim().parse().unwrap_or(0);
                }
            }
            let mut request_body = vec![0u8; content_length];
            let _ = reader.read_exact(&mut request_body);

            let mut stream = stream;
            let _ = write!(
                stream,
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            let _ = stream.flush();
        }
    });

    url
}

fn crosscheck(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_crosscheck"))
        .current_dir(dir.path())
        .env_remove("CROSSCHECK_USERNAME")
        .env_remove("CROSSCHECK_PASSWORD")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn run_code_values(dir: &TempDir, left: &str, right: &str) -> Output {
    crosscheck(
        dir,
        &[
            "run",
            "--left-url",
            left,
            "--right-url",
            right,
            "--only",
            "getCodeValues",
            "--delay-ms",
            "0",
            "--log-profile",
            "test",
            "--fail-on-diff",
        ],
    )
}

#[test]
fn test_list_prints_catalog_in_order() {
    let dir = TempDir::new().unwrap();
    let output = crosscheck(&dir, &["list", "--files"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 13);
    assert!(lines[0].contains("CriminalFileContent by mdoc"));
    assert!(lines[9].contains("getCodeValues.txt"));
    assert!(lines[12].contains("getRopReport.csv"));
}

#[test]
fn test_identical_backends_exit_zero_with_empty_report() {
    let dir = TempDir::new().unwrap();
    let url = serve_forever(r#"{"responseCd":"0","codeValues":[]}"#);

    let output = run_code_values(&dir, &url, &url);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("INFO: Diff testing started\n"));
    assert!(stdout.contains("INFO: CodeValues: No Diff Detected\n"));
    assert!(stdout.contains("INFO: Total diffs: 0\n"));

    let report = std::fs::read_to_string(dir.path().join("results/getCodeValues.txt")).unwrap();
    assert_eq!(
        report,
        format!(
            "{rule}\nINFO: CodeValues Completed there are 0 diffs\n{rule}\n",
            rule = "#".repeat(56)
        )
    );
}

#[test]
fn test_differences_exit_two_with_fail_on_diff() {
    let dir = TempDir::new().unwrap();
    let left = serve_forever(r#"{"responseCd":"0"}"#);
    let right = serve_forever(r#"{"responseCd":"1"}"#);

    let output = run_code_values(&dir, &left, &right);

    assert_eq!(output.status.code(), Some(2));
    let report = std::fs::read_to_string(dir.path().join("results/getCodeValues.txt")).unwrap();
    assert!(report.contains("| CodeValuesResponse.responseCd |            0 |           1 |"));
    assert!(report.contains("INFO: CodeValues Completed there are 1 diffs"));
}

#[test]
fn test_missing_backend_url_exits_one() {
    let dir = TempDir::new().unwrap();
    let output = crosscheck(&dir, &["run", "--log-profile", "test"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("backends.left.base_url"), "stderr: {}", stderr);
    assert!(!dir.path().join("results").exists());
}

#[test]
fn test_unknown_category_exits_one() {
    let dir = TempDir::new().unwrap();
    let output = crosscheck(
        &dir,
        &[
            "run",
            "--left-url",
            "http://127.0.0.1:1",
            "--right-url",
            "http://127.0.0.1:2",
            "--only",
            "getEverything",
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown category 'getEverything'"));
}
