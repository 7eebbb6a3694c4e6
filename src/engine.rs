//! Character level diffing of two texts.
//!
//! The engine does not implement a diff algorithm itself.  Exact diffs are
//! produced by [`similar`] on characters (or graphemes with the `unicode`
//! feature), readable diffs by [`dissimilar`] which runs the
//! diff-match-patch semantic cleanup over the raw edit script.
//!
//! Either way the result is a list of [`Span`]s: contiguous runs of text
//! tagged with a [`ChangeTag`].  The spans always partition both inputs:
//! joining the deleted and equal spans yields the actual text, joining the
//! inserted and equal spans yields the expected text.
use std::fmt;

use similar::utils::TextDiffRemapper;
use similar::{Algorithm, ChangeTag, TextDiff};

/// Selects how the edit script between two texts is computed.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum DiffMode {
    /// The raw minimal edit script on characters.
    ///
    /// This keeps the exact boundaries of every edit which is what you want
    /// for short tokens such as a status code.
    Exact,
    /// A minimal edit script with small fragments merged into larger,
    /// human readable spans.
    Readable,
    /// [`DiffMode::Exact`] if both texts are a single line, otherwise
    /// [`DiffMode::Readable`].
    Auto,
}

impl Default for DiffMode {
    /// Returns the default mode ([`DiffMode::Readable`]).
    fn default() -> DiffMode {
        DiffMode::Readable
    }
}

impl DiffMode {
    /// Resolves [`DiffMode::Auto`] for the given pair of texts.
    pub fn resolve(self, actual: &str, expect: &str) -> DiffMode {
        match self {
            DiffMode::Auto => {
                if actual.contains('\n') || expect.contains('\n') {
                    DiffMode::Readable
                } else {
                    DiffMode::Exact
                }
            }
            mode => mode,
        }
    }
}

/// A contiguous run of text within a diff.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Ord, PartialOrd)]
pub struct Span<'s> {
    tag: ChangeTag,
    text: &'s str,
}

impl<'s> Span<'s> {
    /// Creates a new span.
    pub fn new(tag: ChangeTag, text: &'s str) -> Span<'s> {
        Span { tag, text }
    }

    /// Returns the change tag.
    pub fn tag(&self) -> ChangeTag {
        self.tag
    }

    /// Returns the text of the span.
    pub fn as_str(&self) -> &'s str {
        self.text
    }

    /// Returns `true` if the span marks a change.
    pub fn is_change(&self) -> bool {
        self.tag != ChangeTag::Equal
    }
}

impl<'s> fmt::Display for Span<'s> {
    /// Stringifies a span with its diff marker (`+`, `-` or a space).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.tag, self.text)
    }
}

/// Diffs `actual` against `expect` with the default algorithm.
///
/// ```rust
/// use testdiff::{diff, ChangeTag, DiffMode, Span};
///
/// assert_eq!(diff("hi", "cool", DiffMode::Exact), vec![
///     Span::new(ChangeTag::Delete, "hi"),
///     Span::new(ChangeTag::Insert, "cool"),
/// ]);
/// ```
pub fn diff<'s>(actual: &'s str, expect: &'s str, mode: DiffMode) -> Vec<Span<'s>> {
    diff_with(actual, expect, mode, Algorithm::default())
}

/// Diffs `actual` against `expect`.
///
/// The `algorithm` is only consulted for [`DiffMode::Exact`], readable
/// diffs always use diff-match-patch.
pub fn diff_with<'s>(
    actual: &'s str,
    expect: &'s str,
    mode: DiffMode,
    algorithm: Algorithm,
) -> Vec<Span<'s>> {
    let mut spans = match mode.resolve(actual, expect) {
        DiffMode::Readable => readable_spans(actual, expect),
        _ => exact_spans(actual, expect, algorithm),
    };
    if spans.is_empty() {
        spans.push(Span::new(ChangeTag::Equal, ""));
    }
    spans
}

#[cfg(not(feature = "unicode"))]
fn tokenize<'old, 'new, 'bufs>(
    algorithm: Algorithm,
    actual: &'old str,
    expect: &'new str,
) -> TextDiff<'old, 'new, 'bufs, str> {
    TextDiff::configure()
        .algorithm(algorithm)
        .diff_chars(actual, expect)
}

#[cfg(feature = "unicode")]
fn tokenize<'old, 'new, 'bufs>(
    algorithm: Algorithm,
    actual: &'old str,
    expect: &'new str,
) -> TextDiff<'old, 'new, 'bufs, str> {
    TextDiff::configure()
        .algorithm(algorithm)
        .diff_graphemes(actual, expect)
}

fn exact_spans<'s>(actual: &'s str, expect: &'s str, algorithm: Algorithm) -> Vec<Span<'s>> {
    let diff = tokenize(algorithm, actual, expect);
    let remapper = TextDiffRemapper::from_text_diff(&diff, actual, expect);
    diff.ops()
        .iter()
        .flat_map(|op| remapper.iter_slices(op))
        .map(|(tag, text)| Span::new(tag, text))
        .collect()
}

fn readable_spans<'s>(actual: &'s str, expect: &'s str) -> Vec<Span<'s>> {
    dissimilar::diff(actual, expect)
        .into_iter()
        .map(|chunk| match chunk {
            dissimilar::Chunk::Equal(text) => Span::new(ChangeTag::Equal, text),
            dissimilar::Chunk::Delete(text) => Span::new(ChangeTag::Delete, text),
            dissimilar::Chunk::Insert(text) => Span::new(ChangeTag::Insert, text),
        })
        .collect()
}

/// Reassembles the actual text from equal and deleted spans.
pub fn actual_text(spans: &[Span<'_>]) -> String {
    spans
        .iter()
        .filter(|span| span.tag() != ChangeTag::Insert)
        .map(Span::as_str)
        .collect()
}

/// Reassembles the expected text from equal and inserted spans.
pub fn expect_text(spans: &[Span<'_>]) -> String {
    spans
        .iter()
        .filter(|span| span.tag() != ChangeTag::Delete)
        .map(Span::as_str)
        .collect()
}

/// Returns a measure of similarity of the two texts in the range `0..=1`.
///
/// A ratio of `1.0` means the two texts are identical, a ratio of `0.0`
/// means they do not share a single character.
pub fn similarity(actual: &str, expect: &str) -> f32 {
    tokenize(Algorithm::default(), actual, expect).ratio()
}

#[test]
fn test_exact_keeps_token_boundaries() {
    let spans = diff("HTTP/1.1 200", "HTTP/1.1 404", DiffMode::Exact);
    assert_eq!(spans.first(), Some(&Span::new(ChangeTag::Equal, "HTTP/1.1 ")));
    assert_eq!(actual_text(&spans), "HTTP/1.1 200");
    assert_eq!(expect_text(&spans), "HTTP/1.1 404");
    assert!(spans
        .iter()
        .filter(|span| span.is_change())
        .all(|span| span.as_str().len() <= 2));
}

#[test]
fn test_readable_replaces_unrelated_texts() {
    assert_eq!(
        diff("hi", "cool", DiffMode::Readable),
        vec![
            Span::new(ChangeTag::Delete, "hi"),
            Span::new(ChangeTag::Insert, "cool"),
        ]
    );
}

#[test]
fn test_equal_texts_yield_single_span() {
    for mode in [DiffMode::Exact, DiffMode::Readable, DiffMode::Auto] {
        assert_eq!(diff("same", "same", mode), vec![Span::new(ChangeTag::Equal, "same")]);
        assert_eq!(diff("", "", mode), vec![Span::new(ChangeTag::Equal, "")]);
    }
}

#[test]
fn test_empty_side_yields_single_change() {
    for mode in [DiffMode::Exact, DiffMode::Readable] {
        assert_eq!(diff("", "new", mode), vec![Span::new(ChangeTag::Insert, "new")]);
        assert_eq!(diff("old", "", mode), vec![Span::new(ChangeTag::Delete, "old")]);
    }
}

#[test]
fn test_auto_mode_resolution() {
    assert_eq!(DiffMode::Auto.resolve("a", "b"), DiffMode::Exact);
    assert_eq!(DiffMode::Auto.resolve("a\nb", "b"), DiffMode::Readable);
    assert_eq!(DiffMode::Exact.resolve("a\nb", "b"), DiffMode::Exact);
}

#[test]
fn test_span_display() {
    let spans = diff("foo bar", "foo baz", DiffMode::Exact);
    let rendered = spans.iter().map(|x| x.to_string()).collect::<Vec<_>>();
    insta::assert_debug_snapshot!(rendered, @r###"
    [
        " foo ba",
        "-r",
        "+z",
    ]
    "###);
}

#[test]
fn test_similarity() {
    assert_eq!(similarity("abcd", "bcde"), 0.75);
    assert_eq!(similarity("", ""), 1.0);
}
