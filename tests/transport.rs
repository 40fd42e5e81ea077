//! End-to-end exchanges with the library driven the way a transport
//! drives it: pull the request body from its source, push response bytes
//! at arbitrary boundaries, signal completion.

use libhttp::http::{Assembler, Error, Method, Request, Transfer};
use libhttp::stream::{MemorySink, MemorySource, Sink, Source};

/// A transport with a canned wire response, delivering it in fixed-size
/// chunks and capturing whatever body it was asked to upload.
struct ScriptedTransport {
    wire_response: Vec<u8>,
    chunk_size: usize,
    uploaded: Vec<u8>,
}

impl ScriptedTransport {
    fn new(wire_response: &[u8], chunk_size: usize) -> Self {
        Self {
            wire_response: wire_response.to_vec(),
            chunk_size,
            uploaded: Vec::new(),
        }
    }

    fn perform<B: Source, S: Sink>(
        &mut self,
        request: &mut Request<B>,
        assembler: &mut Assembler<S>,
    ) -> Result<Transfer, Error> {
        // Upload direction: drain the body source the way a send loop
        // flushes buffers, but only for methods that carry one.
        if request.method().allows_body() {
            let declared = request.body_len().unwrap();
            if let Some(body) = request.body_mut() {
                let mut buf = [0u8; 16];
                loop {
                    let n = body.read(&mut buf).unwrap();
                    if n == 0 {
                        break;
                    }
                    self.uploaded.extend_from_slice(&buf[..n]);
                }
            }
            assert_eq!(self.uploaded.len() as u64, declared);
        }

        // Download direction: push received bytes at this transport's
        // chosen boundary, then signal completion.
        let response_bytes = std::mem::take(&mut self.wire_response);
        for chunk in response_bytes.chunks(self.chunk_size) {
            assembler.push(chunk)?;
        }
        assembler.finish()
    }
}

#[test]
fn get_exchange() {
    let mut request = Request::new(Method::Get, "http://device.local/api/data");
    request.set_header("Host", "device.local").unwrap();
    request.set_timeout_seconds(5);

    let mut transport = ScriptedTransport::new(
        b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 14\r\n\r\n{\"power\":true}",
        7,
    );
    let mut assembler = Assembler::new(MemorySink::<256>::new());
    let outcome = transport.perform(&mut request, &mut assembler).unwrap();

    assert_eq!(outcome, Transfer::Complete);
    let response = assembler.response();
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.header("Content-Type"), Some("application/json"));
    assert_eq!(response.sink().as_slice(), b"{\"power\":true}");
}

#[test]
fn put_exchange_streams_the_body_source() {
    let body = MemorySource::new(b"firmware-image-bytes");
    let mut request = Request::with_body(Method::Put, "http://device.local/fw", body);
    request.set_header("Content-Type", "application/octet-stream").unwrap();

    let mut transport = ScriptedTransport::new(b"HTTP/1.1 200 OK\r\n\r\n", 4);
    let mut assembler = Assembler::new(MemorySink::<64>::new());
    let outcome = transport.perform(&mut request, &mut assembler).unwrap();

    assert_eq!(outcome, Transfer::Complete);
    assert_eq!(transport.uploaded, b"firmware-image-bytes");
}

#[test]
fn get_body_is_ignored_by_the_transport_contract() {
    let body = MemorySource::new(b"should-not-be-sent");
    let mut request = Request::with_body(Method::Get, "http://device.local/x", body);

    let mut transport = ScriptedTransport::new(b"HTTP/1.1 200 OK\r\n\r\n", 8);
    let mut assembler = Assembler::new(MemorySink::<64>::new());
    transport.perform(&mut request, &mut assembler).unwrap();

    assert!(transport.uploaded.is_empty());
}

#[test]
fn server_fault_payload_is_captured_not_sunk() {
    let mut request = Request::new(Method::Delete, "http://device.local/item/7");

    let mut transport = ScriptedTransport::new(
        b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 21\r\n\r\n{\"error\":\"disk full\"}",
        5,
    );
    let mut assembler = Assembler::new(MemorySink::<64>::new());
    let outcome = transport.perform(&mut request, &mut assembler).unwrap();

    assert_eq!(outcome, Transfer::Complete);
    let response = assembler.response();
    assert_eq!(response.status_code(), 500);
    assert_eq!(response.reason_phrase(), "Internal Server Error");
    assert_eq!(response.error_body(), b"{\"error\":\"disk full\"}");
    assert_eq!(response.sink().written(), 0);
}

#[test]
fn head_exchange_has_headers_and_no_body() {
    let mut request = Request::new(Method::Head, "http://device.local/api/data");

    let mut transport = ScriptedTransport::new(
        b"HTTP/1.1 200 OK\r\nContent-Length: 1024\r\n\r\n",
        3,
    );
    let mut assembler = Assembler::new(MemorySink::<2048>::new());
    let outcome = transport.perform(&mut request, &mut assembler).unwrap();

    assert_eq!(outcome, Transfer::Complete);
    let response = assembler.response();
    assert_eq!(response.header("Content-Length"), Some("1024"));
    assert_eq!(response.sink().written(), 0);
}

#[test]
fn connection_lost_mid_headers() {
    let mut request = Request::new(Method::Get, "http://device.local/api/data");

    // The transport dies after one and a half header lines.
    let mut transport =
        ScriptedTransport::new(b"HTTP/1.1 200 OK\r\nContent-Le", 6);
    let mut assembler = Assembler::new(MemorySink::<64>::new());
    let result = transport.perform(&mut request, &mut assembler);

    assert_eq!(result, Err(Error::HeaderIncomplete));
}

/// Live-network counterpart of the scripted exchanges. Run with
/// `cargo test -- --ignored`; the endpoint is overridable through
/// `TEST_HTTP_ADDRESS`.
#[test]
#[ignore = "requires network access"]
fn live_http_get() {
    use dotenvy::dotenv;
    use std::env;
    use std::io::{Read as _, Write as _};
    use std::net::TcpStream;

    dotenv().ok();
    let address = env::var("TEST_HTTP_ADDRESS").unwrap_or("httpbin.org:80".to_string());
    let host = address.split(':').next().unwrap().to_string();

    let mut stream = TcpStream::connect(address.as_str()).expect("Failed to connect to server");
    stream
        .set_read_timeout(Some(std::time::Duration::from_secs(5)))
        .unwrap();

    let request = Request::new(Method::Get, "/get");
    let mut wire = format!(
        "{} {} HTTP/1.1\r\n",
        request.method().as_str(),
        request.url()
    );
    wire.push_str(&format!("Host: {host}\r\nConnection: close\r\n\r\n"));
    stream.write_all(wire.as_bytes()).unwrap();

    let mut assembler = Assembler::new(MemorySink::<8192>::new());
    let mut buf = [0u8; 512];
    loop {
        match stream.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => {
                assembler.push(&buf[..n]).unwrap();
            }
            Err(_) => break,
        }
    }

    let response = assembler.response();
    assert_eq!(response.status_code(), 200);
    assert!(response.headers_complete());
}
