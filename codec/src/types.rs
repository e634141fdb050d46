use std::collections::HashMap;

/// A parsed request message.
///
/// Produced by [`RequestParser::parse_request`](crate::RequestParser::parse_request);
/// the caller owns the value outright. Header names are kept exactly as they
/// appeared on the wire (no trimming, no case folding), so lookups are
/// case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: String,
    pub path: String,
    pub protocol: String,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl Request {
    pub fn new(
        method: String,
        path: String,
        protocol: String,
        headers: HashMap<String, String>,
        body: String,
    ) -> Self {
        Self {
            method,
            path,
            protocol,
            headers,
            body,
        }
    }
}

/// A response message to be serialized.
///
/// Constructed by the caller and passed by reference to
/// [`ResponseSerializer::serialize_response`](crate::ResponseSerializer::serialize_response),
/// which neither mutates nor retains it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub protocol: String,
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl Response {
    pub fn new(
        protocol: String,
        status_code: u16,
        headers: HashMap<String, String>,
        body: String,
    ) -> Self {
        Self {
            protocol,
            status_code,
            headers,
            body,
        }
    }
}
