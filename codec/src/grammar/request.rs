use std::{collections::HashMap, str::FromStr};

use pest::{
    Parser,
    error::InputLocation,
    iterators::{Pair, Pairs},
};
use pest_derive::Parser;
use tracing::trace;

use crate::{
    error::{ParseError, Result},
    types::Request,
};

#[derive(Parser)]
#[grammar = "./grammar/request.pest"]
pub struct RequestParser;

impl RequestParser {
    /// Parses a request message into a [`Request`].
    ///
    /// The input must carry an LF-separated start line of exactly three
    /// space-separated tokens, a header block, and a blank line before the
    /// body. A failure in the start line and a failure in the header block
    /// are reported as distinct [`ParseError`] variants; no partial request
    /// is returned either way.
    pub fn parse_request(input: &str) -> Result<Request> {
        trace!(len = input.len(), "parsing request message");

        let mut pairs =
            Self::parse(Rule::request, input).map_err(|e| classify_error(input, &e))?;

        let request = pairs
            .next()
            .ok_or_else(|| ParseError::InvalidStartLine("empty parse result".to_string()))?;

        Self::build_request(request.into_inner())
    }

    fn build_request(pairs: Pairs<Rule>) -> Result<Request> {
        let mut start_line = None;
        let mut headers = HashMap::new();
        let mut body = String::new();

        for pair in pairs {
            match pair.as_rule() {
                Rule::request_line => start_line = Some(Self::parse_request_line(pair)?),
                Rule::header => {
                    // Later duplicates overwrite earlier ones.
                    let (name, value) = Self::parse_header(pair)?;
                    headers.insert(name, value);
                }
                Rule::body => body = pair.as_str().to_string(),
                _ => continue,
            }
        }

        let (method, path, protocol) = start_line
            .ok_or_else(|| ParseError::InvalidStartLine("missing start line".to_string()))?;

        Ok(Request::new(method, path, protocol, headers, body))
    }

    fn parse_request_line(pair: Pair<Rule>) -> Result<(String, String, String)> {
        let mut inner = pair.into_inner();

        let method = inner
            .next()
            .ok_or_else(|| ParseError::InvalidStartLine("missing method token".to_string()))?;
        let path = inner
            .next()
            .ok_or_else(|| ParseError::InvalidStartLine("missing path token".to_string()))?;
        let protocol = inner
            .next()
            .ok_or_else(|| ParseError::InvalidStartLine("missing protocol token".to_string()))?;

        Ok((
            method.as_str().to_string(),
            path.as_str().to_string(),
            protocol.as_str().to_string(),
        ))
    }

    fn parse_header(pair: Pair<Rule>) -> Result<(String, String)> {
        let mut inner = pair.into_inner();

        let name = inner
            .next()
            .ok_or_else(|| ParseError::InvalidHeaders("missing header name".to_string()))?
            .as_str()
            .to_string();

        // Absent on colon-less lines; the grammar already dropped at most
        // one space after the colon.
        let value = inner
            .next()
            .map(|p| p.as_str().to_string())
            .unwrap_or_default();

        Ok((name, value))
    }
}

// The grammar has no alternations, so pest reports a single failure
// position. A failure at or before the first `\n` of the input (or anywhere
// in input that has no `\n`) can only come from the start line; anything
// past it is a header-block failure.
fn classify_error(input: &str, error: &pest::error::Error<Rule>) -> ParseError {
    let pos = match error.location {
        InputLocation::Pos(pos) => pos,
        InputLocation::Span((start, _)) => start,
    };

    match input.find('\n') {
        Some(newline) if pos > newline => ParseError::InvalidHeaders(error.to_string()),
        _ => ParseError::InvalidStartLine(error.to_string()),
    }
}

impl FromStr for Request {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        RequestParser::parse_request(s)
    }
}
