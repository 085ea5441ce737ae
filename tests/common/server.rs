//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a single static body on any path, one request per connection.
//! Honors `Range: bytes=N-` with 206/416 responses and can be told to cut
//! responses short, stall them, corrupt them, ignore ranges or omit
//! `Content-Length`.
//! Every request is recorded so tests can assert on what the client sent.

use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// How long a stalled response stays silent before the connection closes.
pub const STALL: Duration = Duration::from_secs(3);

/// When a fault is injected into GET responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    Never,
    /// Only on the first GET.
    Once,
    Always,
}

impl Fault {
    fn applies(self, nth_get: usize) -> bool {
        match self {
            Fault::Never => false,
            Fault::Once => nth_get == 0,
            Fault::Always => true,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ServerOptions {
    /// If false, GET ignores Range and always returns 200 with the full body.
    pub honor_ranges: bool,
    /// If false, responses carry no Content-Length and end at connection close.
    pub send_length: bool,
    /// Send only half of the payload, then close the connection.
    pub short: Fault,
    /// Flip every payload byte.
    pub corrupt: Fault,
    /// Send half of the payload, then hold the connection open without
    /// sending anything for `STALL`.
    pub stall: Fault,
    /// Answer every request with this status and an empty body.
    pub status: Option<u16>,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            honor_ranges: true,
            send_length: true,
            short: Fault::Never,
            corrupt: Fault::Never,
            stall: Fault::Never,
            status: None,
        }
    }
}

/// A request as seen by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub range: Option<String>,
    pub user_agent: Option<String>,
}

pub struct TestServer {
    base: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl TestServer {
    /// Starts a well-behaved server serving `body`.
    pub fn start(body: Vec<u8>) -> Self {
        Self::start_with_options(body, ServerOptions::default())
    }

    /// Starts a server in a background thread. It runs until the process exits.
    pub fn start_with_options(body: Vec<u8>, opts: ServerOptions) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let body = Arc::new(body);
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let body = Arc::clone(&body);
                let log = Arc::clone(&log);
                thread::spawn(move || handle(stream, &body, opts, &log));
            }
        });
        Self {
            base: format!("http://127.0.0.1:{}", port),
            requests,
        }
    }

    /// URL of `filename` on this server.
    pub fn url(&self, filename: &str) -> String {
        format!("{}/{}", self.base, filename)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of GET requests received.
    pub fn gets(&self) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method.eq_ignore_ascii_case("GET"))
            .count()
    }

    /// Range headers of the GET requests, in order.
    pub fn ranges(&self) -> Vec<Option<String>> {
        self.requests()
            .into_iter()
            .filter(|r| r.method.eq_ignore_ascii_case("GET"))
            .map(|r| r.range)
            .collect()
    }
}

/// A URL on a port nothing listens on.
pub fn refused_url(filename: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/{}", port, filename)
}

fn handle(
    mut stream: TcpStream,
    body: &[u8],
    opts: ServerOptions,
    log: &Mutex<Vec<RecordedRequest>>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(5)));

    let Some(head) = read_head(&mut stream) else {
        return;
    };
    let request = parse_request(&head);
    let nth_get = {
        let mut log = log.lock().unwrap();
        let nth = log
            .iter()
            .filter(|r| r.method.eq_ignore_ascii_case("GET"))
            .count();
        log.push(request.clone());
        nth
    };

    if let Some(code) = opts.status {
        let response = format!(
            "HTTP/1.1 {} Test\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            code
        );
        let _ = stream.write_all(response.as_bytes());
        finish(stream);
        return;
    }

    let total = body.len();
    let start = if opts.honor_ranges {
        request.range.as_deref().and_then(range_start)
    } else {
        None
    };

    let (status, content_range, slice) = match start {
        Some(start) if start >= total => {
            let response = format!(
                "HTTP/1.1 416 Range Not Satisfiable\r\nContent-Range: bytes */{}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                total
            );
            let _ = stream.write_all(response.as_bytes());
            finish(stream);
            return;
        }
        Some(start) => (
            "206 Partial Content",
            Some(format!("bytes {}-{}/{}", start, total - 1, total)),
            &body[start..],
        ),
        None => ("200 OK", None, body),
    };

    let mut payload = slice.to_vec();
    if opts.corrupt.applies(nth_get) {
        payload.iter_mut().for_each(|b| *b ^= 0xFF);
    }
    let declared = payload.len();
    if opts.short.applies(nth_get) {
        payload.truncate(declared / 2);
    }

    let mut response = format!("HTTP/1.1 {}\r\n", status);
    if opts.send_length {
        response.push_str(&format!("Content-Length: {}\r\n", declared));
    }
    if let Some(range) = content_range {
        response.push_str(&format!("Content-Range: {}\r\n", range));
    }
    if opts.honor_ranges {
        response.push_str("Accept-Ranges: bytes\r\n");
    }
    response.push_str("Connection: close\r\n\r\n");

    let _ = stream.write_all(response.as_bytes());
    if opts.stall.applies(nth_get) {
        let _ = stream.write_all(&payload[..payload.len() / 2]);
        let _ = stream.flush();
        thread::sleep(STALL);
        finish(stream);
        return;
    }
    let _ = stream.write_all(&payload);
    finish(stream);
}

fn finish(mut stream: TcpStream) {
    let _ = stream.flush();
    let _ = stream.shutdown(Shutdown::Write);
}

/// Reads up to the blank line ending the request head.
fn read_head(stream: &mut TcpStream) -> Option<String> {
    let mut head = Vec::new();
    let mut buf = [0u8; 4096];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return None,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }
    String::from_utf8(head).ok()
}

fn parse_request(head: &str) -> RecordedRequest {
    let mut lines = head.lines();
    let method = lines
        .next()
        .and_then(|line| line.split_whitespace().next())
        .unwrap_or("")
        .to_string();
    let mut range = None;
    let mut user_agent = None;
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            if name.eq_ignore_ascii_case("range") {
                range = Some(value.trim().to_string());
            } else if name.eq_ignore_ascii_case("user-agent") {
                user_agent = Some(value.trim().to_string());
            }
        }
    }
    RecordedRequest {
        method,
        range,
        user_agent,
    }
}

/// Start offset of a `bytes=N-` range.
fn range_start(range: &str) -> Option<usize> {
    range
        .strip_prefix("bytes=")?
        .strip_suffix('-')?
        .trim()
        .parse()
        .ok()
}
