//! # libhttp - transport-agnostic HTTP client core
//!
//! A small HTTP client library for constrained systems. It describes a
//! request as an inert value, and incrementally parses the raw byte stream
//! an external transport delivers back into a structured response. The
//! library never touches the network itself: any engine that can push
//! received bytes — a blocking socket loop, an interrupt-driven modem
//! driver, a test fixture — can drive it.
//!
//! ## Architecture
//!
//! - [`stream`]: `Source`/`Sink` capability traits over interchangeable
//!   backing stores (fixed-capacity memory, growable buffer, file).
//! - [`http`]: the [`Request`](http::Request) descriptor, the incremental
//!   [`Response`](http::Response) parser, and the chunk-boundary
//!   [`Assembler`](http::Assembler) framing layer.
//! - [`codec`]: base64, hex and percent-encoding helpers.
//!
//! ## Parsing a response
//!
//! ```rust
//! use libhttp::http::{Assembler, Transfer};
//! use libhttp::stream::MemorySink;
//!
//! let mut assembler = Assembler::new(MemorySink::<1024>::new());
//!
//! // Bytes arrive in whatever chunks the transport produces.
//! assembler.push(b"HTTP/1.1 200 OK\r\nContent-Le").unwrap();
//! assembler.push(b"ngth: 5\r\n\r\nhello").unwrap();
//!
//! let outcome = assembler.finish().unwrap();
//! assert_eq!(outcome, Transfer::Complete);
//!
//! let response = assembler.response();
//! assert_eq!(response.status_code(), 200);
//! assert_eq!(response.header("Content-Length"), Some("5"));
//! assert_eq!(response.sink().as_slice(), b"hello");
//! ```
//!
//! ## Describing a request
//!
//! ```rust
//! use libhttp::http::{Method, Request};
//! use libhttp::stream::MemorySource;
//!
//! let body = MemorySource::new(b"payload");
//! let mut request = Request::with_body(Method::Put, "http://example.com/item", body);
//! request.set_header("Content-Type", "application/octet-stream").unwrap();
//! request.set_timeout_seconds(30);
//!
//! // The transport reads these out and performs the actual I/O.
//! assert_eq!(request.body_len().unwrap(), 7);
//! ```
//!
//! ## Optional Features
//!
//! - `std`: file-backed and growable stores (default: enabled; disable for
//!   `no_std` targets)
//! - `async`: async mirrors of the stream traits
//! - `defmt`: defmt formatting for error and event types

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

/// Byte-stream abstraction layer: capability traits and backing stores.
///
/// Request bodies are read from a [`stream::Source`]; response bodies are
/// written to a [`stream::Sink`]. Stores own their storage exclusively and
/// are not internally synchronized.
pub mod stream;

/// HTTP request description and incremental response assembly.
pub mod http;

/// Encoding helpers: base64, hex, percent encoding.
pub mod codec;
