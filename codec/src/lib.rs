//! Codec for a minimal HTTP-like text protocol.
//!
//! Messages use `\n` line endings and a single blank line between the
//! header block and the body. [`RequestParser`] turns raw request text into
//! a [`Request`]; [`ResponseSerializer`] turns a [`Response`] back into wire
//! text. Both are pure, synchronous functions over owned data — no I/O, no
//! shared mutable state — so they are safe to call concurrently.
//!
//! The start line is strict: exactly three tokens separated by single
//! spaces. Header values lose at most one leading space; header names are
//! stored verbatim and looked up case-sensitively.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//!
//! use codec::{RequestParser, Response, ResponseSerializer};
//!
//! let message = "GET /index.html HTTP/1.1\nHost: example.com\n\n";
//! let request = RequestParser::parse_request(message).unwrap();
//! assert_eq!(request.method, "GET");
//! assert_eq!(request.path, "/index.html");
//! assert_eq!(request.headers["Host"], "example.com");
//! assert_eq!(request.body, "");
//!
//! let response = Response::new(
//!     "HTTP/1.1".to_string(),
//!     200,
//!     HashMap::new(),
//!     "hello".to_string(),
//! );
//! let text = ResponseSerializer::serialize_response(&response).unwrap();
//! assert_eq!(text, "HTTP/1.1 200 Success\n\nhello");
//! ```

mod error;
mod grammar;
mod serialize;
mod status;
mod types;

pub use error::{ParseError, Result, SerializeError};
pub use grammar::RequestParser;
pub use serialize::ResponseSerializer;
pub use status::reason_phrase;
pub use types::{Request, Response};
