use similar::{Algorithm, ChangeTag};

use crate::engine::{diff_with, DiffMode, Span};
use crate::format::Formattable;
use crate::normalize::{normalize, Normalization};
use crate::outcome::Mismatch;
use crate::render::{Renderer, WhitespaceDisplay};

/// A builder type config for comparisons.
///
/// The free functions in this crate ([`compare`](crate::compare),
/// [`compare_content`](crate::compare_content) and friends) are presets of
/// this config.  Use it directly if you need to tweak a setting:
///
/// ```rust
/// use testdiff::{CompareConfig, DiffMode};
///
/// let result = CompareConfig::content()
///     .mode(DiffMode::Exact)
///     .color(false)
///     .compare("  a\n  b", "a\nc");
/// assert_eq!(result.unwrap_err().diff(), "a\n[-b-]{+c+}");
/// ```
#[derive(Clone, Debug)]
pub struct CompareConfig {
    normalization: Normalization,
    mode: DiffMode,
    algorithm: Algorithm,
    renderer: Renderer,
}

impl Default for CompareConfig {
    fn default() -> CompareConfig {
        CompareConfig {
            normalization: Normalization::default(),
            mode: DiffMode::default(),
            algorithm: Algorithm::default(),
            renderer: Renderer::default(),
        }
    }
}

impl CompareConfig {
    /// Plain text comparison without normalization.
    pub fn text() -> CompareConfig {
        CompareConfig::default()
    }

    /// Comparison of `Debug` output.
    ///
    /// Like [`CompareConfig::text`] but escaped newlines and tabs in
    /// unchanged text are rendered as real whitespace.
    pub fn debug() -> CompareConfig {
        let mut rv = CompareConfig::default();
        rv.unescape(true);
        rv
    }

    /// Comparison of indented text blocks.
    ///
    /// Both sides are dedented and trimmed before they are compared.
    pub fn content() -> CompareConfig {
        let mut rv = CompareConfig::default();
        rv.normalization(Normalization::Dedent);
        rv
    }

    /// Comparison of HTTP message dumps.
    ///
    /// Both sides are dedented and trimmed and `\r\n` line endings are
    /// treated as `\n`.  Single line dumps (such as a lone status line) are
    /// diffed exactly, multi-line dumps readably.
    pub fn http() -> CompareConfig {
        let mut rv = CompareConfig::default();
        rv.normalization(Normalization::DedentAndCrlf)
            .mode(DiffMode::Auto);
        rv
    }

    /// Changes the normalization.
    ///
    /// The default is [`Normalization::Raw`].
    pub fn normalization(&mut self, normalization: Normalization) -> &mut Self {
        self.normalization = normalization;
        self
    }

    /// Changes the diff mode.
    ///
    /// The default is [`DiffMode::Readable`].
    pub fn mode(&mut self, mode: DiffMode) -> &mut Self {
        self.mode = mode;
        self
    }

    /// Changes the algorithm used for exact diffs.
    ///
    /// The default algorithm is [`Algorithm::Myers`].
    pub fn algorithm(&mut self, alg: Algorithm) -> &mut Self {
        self.algorithm = alg;
        self
    }

    /// Enables or disables colored output.
    ///
    /// The default depends on the terminal, see [`console::colors_enabled`].
    pub fn color(&mut self, yes: bool) -> &mut Self {
        self.renderer.color(yes);
        self
    }

    /// Controls the visibility of whitespace in changed spans.
    ///
    /// The default is [`WhitespaceDisplay::Auto`].
    pub fn whitespace(&mut self, display: WhitespaceDisplay) -> &mut Self {
        self.renderer.whitespace(display);
        self
    }

    /// Controls if escaped whitespace in unchanged text is unescaped.
    pub fn unescape(&mut self, yes: bool) -> &mut Self {
        self.renderer.unescape(yes);
        self
    }

    /// Compares two texts.
    ///
    /// Returns `Ok(())` if the texts are equal after normalization,
    /// otherwise a [`Mismatch`] with the rendered diff.
    pub fn compare(&self, actual: &str, expect: &str) -> Result<(), Mismatch> {
        let actual = normalize(actual, self.normalization);
        let expect = normalize(expect, self.normalization);
        let mode = self.mode.resolve(&actual, &expect);
        tracing::trace!(
            ?mode,
            actual_len = actual.len(),
            expect_len = expect.len(),
            "comparing texts"
        );
        if actual == expect {
            return Ok(());
        }

        let diff = {
            let spans = diff_with(&actual, &expect, mode, self.algorithm);
            tracing::debug!(spans = spans.len(), "texts differ");
            self.renderer.render(&spans)
        };
        Err(Mismatch::new(
            actual.into_owned(),
            expect.into_owned(),
            diff,
            self.renderer.is_colored(),
        ))
    }

    /// Formats two values and compares them.
    pub fn compare_values<A, E>(&self, actual: &A, expect: &E) -> Result<(), Mismatch>
    where
        A: Formattable + ?Sized,
        E: Formattable + ?Sized,
    {
        self.compare(&actual.format_value(), &expect.format_value())
    }

    /// Compares two texts and returns the rendered diff.
    ///
    /// If the texts are equal the (normalized) text is returned without any
    /// markers.
    pub fn diff_string(&self, actual: &str, expect: &str) -> String {
        match self.compare(actual, expect) {
            Ok(()) => {
                let text = normalize(actual, self.normalization);
                self.renderer.render(&[Span::new(ChangeTag::Equal, &text)])
            }
            Err(mismatch) => mismatch.into_diff(),
        }
    }

    /// Formats two values and returns the rendered diff.
    pub fn diff_values<A, E>(&self, actual: &A, expect: &E) -> String
    where
        A: Formattable + ?Sized,
        E: Formattable + ?Sized,
    {
        self.diff_string(&actual.format_value(), &expect.format_value())
    }
}

#[cfg(test)]
fn plain(mut config: CompareConfig) -> CompareConfig {
    config.color(false);
    config
}

#[test]
fn test_compare_equal() {
    assert_eq!(plain(CompareConfig::text()).compare("hi", "hi"), Ok(()));
}

#[test]
fn test_compare_keeps_normalized_texts() {
    let mismatch = plain(CompareConfig::content())
        .compare("\n    a\n    b\n", "a\nc")
        .unwrap_err();
    assert_eq!(mismatch.actual(), "a\nb");
    assert_eq!(mismatch.expect(), "a\nc");
    assert_eq!(mismatch.diff(), "a\n[-b-]{+c+}");
}

#[test]
fn test_diff_string_on_match_is_unchanged() {
    let config = plain(CompareConfig::http());
    let dump = "\n    HTTP/1.1 200 OK\n    Connection: close\n";
    let rendered = config.diff_string(dump, dump);
    assert_eq!(rendered, "HTTP/1.1 200 OK\nConnection: close");
    assert_eq!(config.diff_string(dump, &rendered), rendered);
}

#[test]
fn test_exact_algorithm_is_configurable() {
    let mut config = plain(CompareConfig::text());
    config.mode(DiffMode::Exact).algorithm(Algorithm::Patience);
    let mismatch = config.compare("abc", "abd").unwrap_err();
    assert_eq!(mismatch.diff(), "ab[-c-]{+d+}");
}
