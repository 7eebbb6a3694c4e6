//! Text normalization applied before diffing.
//!
//! Test literals are usually indented to match the surrounding code and
//! wire dumps frequently disagree on line endings.  The functions in this
//! module strip that kind of noise so that only meaningful differences end
//! up in the diff.
use std::borrow::Cow;

/// Controls how texts are normalized before they are compared.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Normalization {
    /// Compare the texts as given.
    Raw,
    /// Remove the common indentation and trim surrounding whitespace.
    Dedent,
    /// Like [`Normalization::Dedent`] but also treats `\r\n` and `\n` as equal.
    DedentAndCrlf,
}

impl Default for Normalization {
    /// Returns the default normalization ([`Normalization::Raw`]).
    fn default() -> Normalization {
        Normalization::Raw
    }
}

/// Escape sequences folded back into the characters they stand for.
const ESCAPES: &[(char, char)] = &[('n', '\n'), ('t', '\t'), ('r', '\r')];

/// Visible stand-ins for invisible whitespace.
const WHITESPACE_GLYPHS: &[(char, &str)] = &[
    (' ', "\u{b7}"),
    ('\t', "\u{2192}"),
    ('\r', "\u{240d}"),
    ('\n', "\u{21b5}\n"),
];

/// Normalizes `text` according to `normalization`.
///
/// ```rust
/// use testdiff::{normalize, Normalization};
///
/// let text = "\n    GET / HTTP/1.1\r\n    Host: example.com\r\n";
/// assert_eq!(
///     normalize(text, Normalization::DedentAndCrlf),
///     "GET / HTTP/1.1\nHost: example.com"
/// );
/// ```
pub fn normalize(text: &str, normalization: Normalization) -> Cow<'_, str> {
    match normalization {
        Normalization::Raw => Cow::Borrowed(text),
        Normalization::Dedent => Cow::Owned(dedent(text)),
        Normalization::DedentAndCrlf => Cow::Owned(dedent(&text.replace("\r\n", "\n"))),
    }
}

fn is_blank(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}

/// A line of only spaces and tabs, optionally ending in the `\r` of a
/// `\r\n` line break.
fn is_blank_line(line: &str) -> bool {
    line.strip_suffix('\r')
        .unwrap_or(line)
        .chars()
        .all(|c| c == ' ' || c == '\t')
}

fn indentation(line: &str) -> &str {
    let end = line
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(line.len());
    &line[..end]
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .char_indices()
        .zip(b.chars())
        .find(|((_, x), y)| x != y)
        .map(|((idx, _), _)| idx)
        .unwrap_or_else(|| a.len().min(b.len()));
    &a[..len]
}

/// Removes the common leading indentation and trims the result.
///
/// The margin is the longest run of leading spaces and tabs that every
/// non-blank line starts with.  Lines of only spaces and tabs do not take
/// part in finding the margin and come out empty, keeping the `\r` of a
/// `\r\n` line break.  Spaces and tabs are compared literally, a tab never
/// matches a run of spaces.
///
/// ```rust
/// use testdiff::dedent;
///
/// assert_eq!(dedent("\n\t\tfoo\n\t\t  bar\n\t"), "foo\n  bar");
/// ```
pub fn dedent(text: &str) -> String {
    let margin = text
        .split('\n')
        .filter(|line| !is_blank_line(line))
        .map(indentation)
        .fold(None, |margin: Option<&str>, indent| match margin {
            None => Some(indent),
            Some(margin) => Some(common_prefix(margin, indent)),
        })
        .unwrap_or("");

    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| {
            if !is_blank_line(line) {
                &line[margin.len()..]
            } else if line.ends_with('\r') {
                "\r"
            } else {
                ""
            }
        })
        .collect();
    lines.join("\n").trim().to_string()
}

/// Turns the escape sequences `\n`, `\t` and `\r` back into real characters.
///
/// This undoes the escaping `Debug` applies to strings nested inside a
/// value, so that multi-line fields read as multi-line text.  Escaped
/// backslashes are left alone so that `\\n` stays a backslash followed by
/// `n`.
pub fn unescape_whitespace(text: &str) -> Cow<'_, str> {
    if !text.contains('\\') {
        return Cow::Borrowed(text);
    }

    let mut rv = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            rv.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => rv.push_str("\\\\"),
            Some(next) => match ESCAPES.iter().find(|(escape, _)| *escape == next) {
                Some((_, unescaped)) => rv.push(*unescaped),
                None => {
                    rv.push('\\');
                    rv.push(next);
                }
            },
            None => rv.push('\\'),
        }
    }
    Cow::Owned(rv)
}

/// Replaces invisible whitespace with visible glyphs.
///
/// Newlines are shown as `↵` but keep their line break so the layout of
/// the text survives.
pub fn reveal_whitespace(text: &str) -> Cow<'_, str> {
    if !text.contains(|c: char| WHITESPACE_GLYPHS.iter().any(|(ws, _)| *ws == c)) {
        return Cow::Borrowed(text);
    }

    let mut rv = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        match WHITESPACE_GLYPHS.iter().find(|(ws, _)| *ws == c) {
            Some((_, glyph)) => rv.push_str(glyph),
            None => rv.push(c),
        }
    }
    Cow::Owned(rv)
}

/// Returns `true` if `text` is non-empty and consists only of whitespace.
pub(crate) fn is_whitespace_only(text: &str) -> bool {
    !text.is_empty() && is_blank(text)
}

#[test]
fn test_dedent_common_margin() {
    let text = "
        HTTP/1.1 200 OK
        Connection: close

        body
    ";
    assert_eq!(dedent(text), "HTTP/1.1 200 OK\nConnection: close\n\nbody");
}

#[test]
fn test_dedent_keeps_relative_indentation() {
    let text = "
        <html>
            <body/>
        </html>
    ";
    assert_eq!(dedent(text), "<html>\n    <body/>\n</html>");
}

#[test]
fn test_dedent_tabs_and_spaces_are_distinct() {
    assert_eq!(dedent("\tfoo\n    bar"), "foo\n    bar");
    assert_eq!(dedent("  bar\n  \tfoo"), "bar\n\tfoo");
}

#[test]
fn test_dedent_blank_lines_are_ignored() {
    assert_eq!(dedent("    a\n  \n\n    b"), "a\n\n\nb");
    assert_eq!(dedent("   \n\t\n"), "");
    assert_eq!(dedent(""), "");
}

#[test]
fn test_dedent_blank_crlf_lines_keep_line_endings() {
    assert_eq!(dedent("  a\r\n  \r\n  b"), "a\r\n\r\nb");
    assert_eq!(dedent("  a\r\n\r\n  b\r\n"), "a\r\n\r\nb");
    assert_eq!(
        normalize("  a\r\n  \r\n  b", Normalization::DedentAndCrlf),
        "a\n\nb"
    );
}

#[test]
fn test_normalize_modes() {
    let text = "\n    a\r\n    b\r\n";
    assert_eq!(normalize(text, Normalization::Raw), text);
    assert_eq!(normalize(text, Normalization::Dedent), "a\r\nb");
    assert_eq!(normalize(text, Normalization::DedentAndCrlf), "a\nb");
}

#[test]
fn test_unescape_whitespace() {
    assert_eq!(unescape_whitespace("plain"), "plain");
    assert_eq!(unescape_whitespace(r"a\nb\tc\rd"), "a\nb\tc\rd");
    assert_eq!(unescape_whitespace(r"keep \\n and \x"), r"keep \\n and \x");
    assert_eq!(unescape_whitespace("trailing \\"), "trailing \\");
}

#[test]
fn test_reveal_whitespace() {
    assert_eq!(reveal_whitespace("abc"), "abc");
    assert_eq!(reveal_whitespace("a b\tc\r\n"), "a\u{b7}b\u{2192}c\u{240d}\u{21b5}\n");
}
