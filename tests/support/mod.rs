//! Scripted HTTP responder for response sequences a declarative mock cannot
//! express (e.g. 429 on a page followed by 200 on the very same page).
//!
//! Serves one scripted response per connection, in order, and records the
//! request target of each so tests can assert the exact page sequence the
//! client walked.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

pub struct ScriptedServer {
    url: String,
    handle: JoinHandle<Vec<String>>,
}

impl ScriptedServer {
    /// Spawn a server that answers with the given `(status, body)` pairs,
    /// one per request, then stops accepting.
    pub fn start(responses: Vec<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind scripted server");
        let url = format!("http://{}", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let mut targets = Vec::new();
            for (status, body) in responses {
                let (mut stream, _) = listener.accept().expect("accept connection");
                targets.push(read_request_target(&mut stream));

                let reason = match status {
                    200 => "OK",
                    429 => "Too Many Requests",
                    _ => "Unknown",
                };
                let response = format!(
                    "HTTP/1.1 {status} {reason}\r\n\
                     content-type: application/json\r\n\
                     content-length: {}\r\n\
                     connection: close\r\n\r\n{body}",
                    body.len()
                );
                stream.write_all(response.as_bytes()).expect("write response");
            }
            targets
        });

        Self { url, handle }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Wait for the whole script to play out and return the request targets
    /// (path + query) in the order they arrived.
    pub fn finish(self) -> Vec<String> {
        self.handle.join().expect("scripted server thread")
    }
}

/// Read one request's head and pull the target out of the request line.
fn read_request_target(stream: &mut std::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = stream.read(&mut chunk).expect("read request");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if buf.windows(4).any(|window| window == b"\r\n\r\n") {
            break;
        }
    }

    let head = String::from_utf8_lossy(&buf);
    head.lines()
        .next()
        .and_then(|line| line.split(' ').nth(1))
        .unwrap_or_default()
        .to_string()
}
