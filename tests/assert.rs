use std::panic;

use testdiff::{
    assert_content_eq, assert_debug_eq, assert_http_eq, assert_text_eq, assert_values_eq,
    Debugged,
};

fn panic_message(f: impl FnOnce() + panic::UnwindSafe) -> String {
    let err = panic::catch_unwind(f).unwrap_err();
    match err.downcast::<String>() {
        Ok(msg) => *msg,
        Err(err) => err
            .downcast::<&'static str>()
            .map(|msg| msg.to_string())
            .unwrap_or_default(),
    }
}

#[test]
fn test_matching_assertions_pass() {
    assert_text_eq!("hi", "hi");
    assert_text_eq!(String::from("hi"), "hi");
    assert_values_eq!(42, "42");
    assert_debug_eq!(vec![1, 2, 3], [1, 2, 3]);
    assert_content_eq!("  a\n  b", "a\nb");
    assert_http_eq!("HTTP/1.1 204 No Content\r\n", "HTTP/1.1 204 No Content");
    assert_text_eq!("hi", "hi", "never shown {}", 1);
}

#[test]
#[should_panic(expected = "assertion failed: `(actual == expect)`")]
fn test_text_mismatch_fails() {
    assert_text_eq!("hi", "cool");
}

#[test]
fn test_failure_message_contains_report() {
    let msg = panic_message(|| assert_text_eq!("Hello World", "Hello Berlin"));
    let msg = console::strip_ansi_codes(&msg).into_owned();
    assert!(msg.starts_with("assertion failed: `(actual == expect)`\n"));
    assert!(msg.contains("Expect:\nHello Berlin\n"));
    assert!(msg.contains("Actual:\nHello World\n"));
    assert!(msg.contains("Difference:\nHello "));
}

#[test]
fn test_failure_message_with_custom_message() {
    let msg = panic_message(|| assert_values_eq!(Debugged(&Some(1)), Debugged(&None::<i32>), "case {}", 7));
    assert!(msg.starts_with("assertion failed: `(actual == expect)`: case 7\n"));
}

#[test]
#[should_panic(expected = "Difference")]
fn test_debug_mismatch_fails() {
    assert_debug_eq!(vec![1, 2, 3], vec![1, 2, 4]);
}

#[test]
#[should_panic(expected = "Difference")]
fn test_content_mismatch_fails() {
    assert_content_eq!(
        "
        one
        two
        ",
        "one\nthree"
    );
}

#[test]
#[should_panic(expected = "Difference")]
fn test_http_mismatch_fails() {
    assert_http_eq!("HTTP/1.1 200 OK", "HTTP/1.1 404 Not Found");
}

#[cfg(feature = "serde")]
#[test]
fn test_json_assertions() {
    testdiff::assert_json_eq!(serde_json::json!({"a": 1}), serde_json::json!({"a": 1}));
    let msg = panic_message(|| {
        testdiff::assert_json_eq!(
            serde_json::json!({"a": 1, "b": true}),
            serde_json::json!({"a": 2, "b": true})
        )
    });
    let msg = console::strip_ansi_codes(&msg).into_owned();
    assert!(msg.starts_with("assertion failed: `(actual == expect)`\n"));
    assert!(msg.contains("Expect:\n{\n  \"a\": 2,\n  \"b\": true\n}\n"));
}
