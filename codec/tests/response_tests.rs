use std::collections::HashMap;

use codec::{Response, ResponseSerializer, reason_phrase};

#[test]
fn test_serialize_success_response() {
    shared::init_test_logging();

    let response = Response::new(
        "HTTP/1.1".to_string(),
        200,
        HashMap::new(),
        "hi".to_string(),
    );

    let text = ResponseSerializer::serialize_response(&response).unwrap();

    assert_eq!(text, "HTTP/1.1 200 Success\n\nhi");
}

#[test]
fn test_serialize_each_known_status_code() {
    shared::init_test_logging();

    for (code, line) in [
        (200, "HTTP/1.1 200 Success\n"),
        (201, "HTTP/1.1 201 Created\n"),
        (404, "HTTP/1.1 404 Not Found\n"),
    ] {
        let response = Response::new("HTTP/1.1".to_string(), code, HashMap::new(), String::new());
        let text = ResponseSerializer::serialize_response(&response).unwrap();

        assert!(text.starts_with(line), "unexpected status line in {text:?}");
    }
}

#[test]
fn test_serialize_unknown_status_code_has_empty_reason() {
    shared::init_test_logging();

    let response = Response::new(
        "HTTP/1.1".to_string(),
        999,
        HashMap::new(),
        "...".to_string(),
    );

    let text = ResponseSerializer::serialize_response(&response).unwrap();

    assert_eq!(text, "HTTP/1.1 999 \n\n...");
}

#[test]
fn test_serialize_headers_order_insensitive() {
    shared::init_test_logging();

    let headers = HashMap::from([
        ("Content-Type".to_string(), "text/plain".to_string()),
        ("Connection".to_string(), "close".to_string()),
        ("X-Empty".to_string(), String::new()),
    ]);
    let response = Response::new("HTTP/1.1".to_string(), 200, headers, "ok".to_string());

    let text = ResponseSerializer::serialize_response(&response).unwrap();

    let (head, body) = text.split_once("\n\n").unwrap();
    assert_eq!(body, "ok");

    let mut lines: Vec<&str> = head.lines().collect();
    assert_eq!(lines.remove(0), "HTTP/1.1 200 Success");
    lines.sort_unstable();
    assert_eq!(
        lines,
        vec!["Connection: close", "Content-Type: text/plain", "X-Empty: "]
    );
}

#[test]
fn test_blank_line_present_even_without_headers_or_body() {
    shared::init_test_logging();

    let response = Response::new("HTTP/1.1".to_string(), 404, HashMap::new(), String::new());

    let text = ResponseSerializer::serialize_response(&response).unwrap();

    assert_eq!(text, "HTTP/1.1 404 Not Found\n\n");
}

#[test]
fn test_reason_phrase_lookup() {
    shared::init_test_logging();

    assert_eq!(reason_phrase(200), "Success");
    assert_eq!(reason_phrase(201), "Created");
    assert_eq!(reason_phrase(404), "Not Found");
    assert_eq!(reason_phrase(302), "");
}
