//! Shared helpers for pg integration tests

#![allow(dead_code)]

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::thread;

use assert_cmd::Command;

/// Command for the pg binary with logging kept quiet and no proxy in the way
pub fn pg() -> Command {
    let mut cmd = Command::cargo_bin("pg").expect("pg binary should be built");
    cmd.env_remove("RUST_LOG");
    for var in ["HTTP_PROXY", "http_proxy", "HTTPS_PROXY", "https_proxy", "ALL_PROXY", "all_proxy"] {
        cmd.env_remove(var);
    }
    cmd
}

/// Write `content` to `name` under `dir` and return the path
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

/// Serve a single HTTP response on a loopback port
///
/// Returns the URL of `/message.yaml` on that port. The listener answers one
/// request and then shuts down.
pub fn serve_once(status: u16, reason: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Listener has no address");
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: text/yaml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    );

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut reader = BufReader::new(stream.try_clone().expect("Failed to clone stream"));
            let mut line = String::new();
            // Drain the request head
            while reader.read_line(&mut line).map(|n| n > 0).unwrap_or(false) {
                if line == "\r\n" {
                    break;
                }
                line.clear();
            }
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });

    format!("http://{}/message.yaml", addr)
}
