use std::rc::Rc;

use console::Style;
use testdiff::{
    compare, compare_content, compare_debug, compare_http, compare_values, diff_http,
    CompareConfig, Debugged,
};

fn red(s: &str) -> String {
    Style::new()
        .black()
        .on_red()
        .force_styling(true)
        .apply_to(s)
        .to_string()
}

fn green(s: &str) -> String {
    Style::new()
        .black()
        .on_green()
        .force_styling(true)
        .apply_to(s)
        .to_string()
}

fn plain(mut config: CompareConfig) -> CompareConfig {
    config.color(false);
    config
}

#[derive(Debug)]
struct C {
    d: String,
}

#[derive(Debug)]
struct A {
    c: Rc<C>,
}

#[derive(Debug)]
struct B;

#[derive(Debug)]
struct Web {
    a: Box<A>,
    b: B,
}

fn web(c: Rc<C>) -> Web {
    Web {
        a: Box::new(A { c }),
        b: B,
    }
}

#[test]
fn test_string_ok() {
    assert_eq!(compare("hi", "hi"), Ok(()));
    assert_eq!(testdiff::diff_string("hi", "hi"), "hi");
}

#[test]
fn test_string_not_ok() {
    let mismatch = CompareConfig::text()
        .color(true)
        .compare("hi", "cool")
        .unwrap_err();
    assert_eq!(mismatch.diff(), format!("{}{}", red("hi"), green("cool")));
    assert_eq!(mismatch.actual(), "hi");
    assert_eq!(mismatch.expect(), "cool");
}

#[test]
fn test_values_of_different_types() {
    let rendered = plain(CompareConfig::text()).diff_values(&3, "hi");
    assert_eq!(rendered, "[-3-]{+hi+}");
    assert!(compare_values(&3, "3").is_ok());
}

#[test]
fn test_deep_ok() {
    let shared = Rc::new(C { d: "D".into() });
    let web1 = web(shared.clone());
    let web2 = web(shared);
    let web3 = web(Rc::new(C { d: "D".into() }));
    assert_eq!(compare_debug(&web1, &web2), Ok(()));
    assert_eq!(compare_debug(&web1, &web3), Ok(()));
    insta::assert_snapshot!(testdiff::diff_debug(&web1, &web3), @r###"
    Web {
        a: A {
            c: C {
                d: "D",
            },
        },
        b: B,
    }
    "###);
}

#[test]
fn test_deep_not_ok() {
    let web1 = web(Rc::new(C { d: "D".into() }));
    let web2 = web(Rc::new(C { d: "F".into() }));
    let mismatch = plain(CompareConfig::debug())
        .compare_values(&Debugged(&web1), &Debugged(&web2))
        .unwrap_err();
    insta::assert_snapshot!(mismatch.diff(), @r###"
    Web {
        a: A {
            c: C {
                d: "[-D-]{+F+}",
            },
        },
        b: B,
    }
    "###);
}

#[test]
fn test_debug_unescapes_nested_strings() {
    let actual = vec!["line one\nline two"];
    let expect = vec!["line one\nline 2"];
    let rendered = plain(CompareConfig::debug())
        .compare_values(&Debugged(&actual), &Debugged(&expect))
        .unwrap_err()
        .into_diff();
    assert!(rendered.contains("\"line one\nline "));
    assert!(!rendered.contains("\\n"));
}

#[test]
fn test_content_ignores_indentation() {
    let actual = "
        first
          second
    ";
    assert_eq!(compare_content(actual, "first\n  second"), Ok(()));
    assert!(compare(actual, "first\n  second").is_err());
}

#[test]
fn test_content_trailing_line_is_an_insertion() {
    let actual = "
        one
        two
        three
        four
    ";
    let expect = "
        one
        two
        three
        four
        five
    ";
    let mismatch = plain(CompareConfig::content())
        .compare(actual, expect)
        .unwrap_err();
    assert_eq!(mismatch.diff(), "one\ntwo\nthree\nfour{+\nfive+}");
}

#[test]
fn test_http_ok() {
    let dump = "
        HTTP/1.1 200 OK
        Connection: close
    ";
    let result = diff_http(dump, dump);
    assert_eq!(result, "HTTP/1.1 200 OK\nConnection: close");
    assert_eq!(result, diff_http(dump, &result));
}

#[test]
fn test_http_crlf_matches_lf() {
    let wire = "HTTP/1.1 200 OK\r\nConnection: close\r\nContent-Type: application/json\r\n\r\n{\"hello\": \"world\"}";
    let literal = r#"
        HTTP/1.1 200 OK
        Connection: close
        Content-Type: application/json

        {"hello": "world"}
    "#;
    assert_eq!(compare_http(wire, literal), Ok(()));
    assert!(compare(wire, literal).is_err());
}

#[test]
fn test_http_not_ok() {
    let actual = "
        HTTP/1.1 200 OK
        Connection: close
    ";
    let expect = "
        HTTP/1.1 404 Not Found
        Connection: close
    ";
    let mismatch = plain(CompareConfig::http())
        .compare(actual, expect)
        .unwrap_err();
    insta::assert_snapshot!(mismatch.diff(), @r###"
    HTTP/1.1 [-200 OK-]{+404 Not Found+}
    Connection: close
    "###);
    assert_eq!(mismatch.actual(), "HTTP/1.1 200 OK\nConnection: close");
    assert_eq!(mismatch.expect(), "HTTP/1.1 404 Not Found\nConnection: close");
}

#[test]
fn test_http_lone_status_line_is_exact() {
    let mismatch = plain(CompareConfig::http())
        .compare("HTTP/1.1 200 OK", "HTTP/1.1 404 Not Found")
        .unwrap_err();
    insta::assert_snapshot!(mismatch.diff(), @"HTTP/1.1 [-2-]{+4+}0[-0-]{+4+} [-OK-]{+Not Found+}");
}

#[test]
fn test_http_status_line_is_exact() {
    let mismatch = plain(CompareConfig::http())
        .compare("HTTP/1.1 200 OK", "HTTP/1.1 400 OK")
        .unwrap_err();
    assert_eq!(mismatch.diff(), "HTTP/1.1 [-2-]{+4+}00 OK");
}

#[test]
fn test_html_blank_line_is_revealed() {
    let actual = "
        HTTP/1.1 200 OK
        Content-Type: text/html

        <html>
        \t<body>Hello Berlin!</body>
        </html>
    ";
    let expect = "
        HTTP/1.1 200 OK
        Content-Type: text/html


        <html>
        \t<body>Hello Berlin!</body>
        </html>
    ";
    let mismatch = plain(CompareConfig::http())
        .compare(actual, expect)
        .unwrap_err();
    assert_eq!(mismatch.diff().matches("{+").count(), 1);
    assert!(mismatch.diff().contains("{+\u{21b5}\n+}"));
    assert!(mismatch.diff().contains("<html>\n\t<body>Hello Berlin!</body>\n</html>"));
}

#[test]
fn test_report_order() {
    let mismatch = compare("hi", "cool").unwrap_err();
    let report = console::strip_ansi_codes(&mismatch.to_string()).into_owned();
    let expect = report.find("Expect:").unwrap();
    let actual = report.find("Actual:").unwrap();
    let difference = report.find("Difference:").unwrap();
    assert!(expect < actual && actual < difference);
}

#[test]
fn test_mismatch_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    compare("same", "same")?;
    let err: Box<dyn std::error::Error> = Box::new(compare("a", "b").unwrap_err());
    assert!(err.to_string().contains("Difference"));
    Ok(())
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, Debug)]
struct Service {
    name: &'static str,
    port: u16,
    tags: Vec<&'static str>,
}

#[cfg(feature = "serde")]
#[test]
fn test_json_ok() {
    let actual = serde_json::json!({"name": "web", "ports": [80, 443]});
    let expect = serde_json::json!({"name": "web", "ports": [80, 443]});
    assert_eq!(testdiff::compare_json(&actual, &expect), Ok(()));

    let service = Service {
        name: "web",
        port: 80,
        tags: vec![],
    };
    let literal = serde_json::json!({"name": "web", "port": 80, "tags": []});
    assert_eq!(testdiff::compare_json(&service, &literal), Ok(()));
}

#[cfg(feature = "serde")]
#[test]
fn test_json_not_ok_is_local_to_field() {
    let actual = Service {
        name: "web",
        port: 8080,
        tags: vec!["a", "b"],
    };
    let expect = Service {
        name: "web",
        port: 9090,
        tags: vec!["a", "b"],
    };
    let mismatch = testdiff::compare_json(&actual, &expect).unwrap_err();
    assert_eq!(
        mismatch.actual(),
        "{\n  \"name\": \"web\",\n  \"port\": 8080,\n  \"tags\": [\n    \"a\",\n    \"b\"\n  ]\n}"
    );
    let spans = testdiff::diff(mismatch.actual(), mismatch.expect(), testdiff::DiffMode::Readable);
    assert!(spans
        .iter()
        .filter(|span| span.is_change())
        .all(|span| span.as_str().chars().all(|c| c.is_ascii_digit())));
    let rendered = plain(CompareConfig::text())
        .compare_values(&testdiff::Serialized(&actual), &testdiff::Serialized(&expect))
        .unwrap_err()
        .into_diff();
    assert!(rendered.starts_with("{\n  \"name\": \"web\",\n  \"port\": "));
    assert!(rendered.ends_with(",\n  \"tags\": [\n    \"a\",\n    \"b\"\n  ]\n}"));
}

#[cfg(feature = "bytes")]
#[test]
fn test_http_bytes_crlf_matches_lf() {
    assert_eq!(
        testdiff::compare_http_bytes(b"HTTP/1.1 200 OK\r\nA: b\r\n", b"HTTP/1.1 200 OK\nA: b"),
        Ok(())
    );
}

#[cfg(feature = "bytes")]
#[test]
fn test_http_bytes_invalid_utf8() {
    let mismatch =
        testdiff::compare_http_bytes(b"HTTP/1.1 200 OK\r\nA: \xff", b"HTTP/1.1 200 OK\nA: b")
            .unwrap_err();
    assert_eq!(mismatch.actual(), "HTTP/1.1 200 OK\nA: \u{fffd}");
    assert_eq!(mismatch.expect(), "HTTP/1.1 200 OK\nA: b");
}
