//! Minimal HTTP/1.1 server that plays the auth and users endpoints for
//! integration tests.
//!
//! `/auth` fails with `failure_status` for the first `auth_failures` hits,
//! then answers 200 with the token header. `/users` answers 401 when the
//! checksum header is wrong, fails for the first `users_failures` hits, then
//! answers 200 with `body`.

use sha2::{Digest, Sha256};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone)]
pub struct NocServerOptions {
    pub token: String,
    pub body: String,
    pub auth_failures: usize,
    pub users_failures: usize,
    pub failure_status: u16,
}

impl Default for NocServerOptions {
    fn default() -> Self {
        Self {
            token: "TOK".to_string(),
            body: "42\n17\n9".to_string(),
            auth_failures: 0,
            users_failures: 0,
            failure_status: 503,
        }
    }
}

/// Handle to a running server. Counters include failed hits.
pub struct NocServer {
    pub base_url: String,
    pub auth_hits: Arc<AtomicUsize>,
    pub users_hits: Arc<AtomicUsize>,
}

impl NocServer {
    pub fn auth_hits(&self) -> usize {
        self.auth_hits.load(Ordering::SeqCst)
    }

    pub fn users_hits(&self) -> usize {
        self.users_hits.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread. The server runs until the
/// process exits.
pub fn start(opts: NocServerOptions) -> NocServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let auth_hits = Arc::new(AtomicUsize::new(0));
    let users_hits = Arc::new(AtomicUsize::new(0));
    let state = Arc::new((opts, Arc::clone(&auth_hits), Arc::clone(&users_hits)));
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let state = Arc::clone(&state);
            thread::spawn(move || handle(stream, &state.0, &state.1, &state.2));
        }
    });
    NocServer {
        base_url: format!("http://127.0.0.1:{}", port),
        auth_hits,
        users_hits,
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    opts: &NocServerOptions,
    auth_hits: &AtomicUsize,
    users_hits: &AtomicUsize,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let (path, checksum) = parse_request(request);

    let response = match path {
        "/auth" => {
            let hit = auth_hits.fetch_add(1, Ordering::SeqCst);
            if hit < opts.auth_failures {
                status_only(opts.failure_status)
            } else {
                format!(
                    "HTTP/1.1 200 OK\r\nBadsec-Authentication-Token: {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                    opts.token
                )
            }
        }
        "/users" => {
            let hit = users_hits.fetch_add(1, Ordering::SeqCst);
            let expected = hex::encode(Sha256::digest(format!("{}/users", opts.token)));
            if checksum.as_deref() != Some(expected.as_str()) {
                status_only(401)
            } else if hit < opts.users_failures {
                status_only(opts.failure_status)
            } else {
                format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    opts.body.len(),
                    opts.body
                )
            }
        }
        _ => status_only(404),
    };
    let _ = stream.write_all(response.as_bytes());
}

fn status_only(code: u16) -> String {
    format!(
        "HTTP/1.1 {} Test\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        code
    )
}

/// Returns (path, optional X-Request-Checksum value).
fn parse_request(request: &str) -> (&str, Option<String>) {
    let mut path = "";
    let mut checksum = None;
    for line in request.lines() {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        if path.is_empty() {
            path = line.split_whitespace().nth(1).unwrap_or("/");
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("x-request-checksum") {
                checksum = Some(value.trim().to_string());
            }
        }
    }
    (path, checksum)
}
