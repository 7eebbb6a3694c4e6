//! Rendering diff spans into a single marked-up string.
use std::borrow::Cow;

use console::Style;
use similar::ChangeTag;

use crate::engine::Span;
use crate::normalize::{is_whitespace_only, reveal_whitespace, unescape_whitespace};

/// Plain markers used when color is disabled.
const PLAIN_DELETE: (&str, &str) = ("[-", "-]");
const PLAIN_INSERT: (&str, &str) = ("{+", "+}");

/// Controls whether whitespace in changed spans is made visible.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum WhitespaceDisplay {
    /// Never replace whitespace.
    Never,
    /// Replace whitespace only if every change in the diff is whitespace.
    Auto,
    /// Always replace whitespace in changed spans.
    Always,
}

impl Default for WhitespaceDisplay {
    /// Returns the default display ([`WhitespaceDisplay::Auto`]).
    fn default() -> WhitespaceDisplay {
        WhitespaceDisplay::Auto
    }
}

/// Renders [`Span`]s into a string.
///
/// Equal spans are written as they are, inserted spans are wrapped in a
/// positive marker (black on green) and deleted spans in a negative marker
/// (black on red).  Without color the markers are `{+...+}` and `[-...-]`.
///
/// ```rust
/// use testdiff::{diff, DiffMode, Renderer};
///
/// let spans = diff("hi", "cool", DiffMode::Readable);
/// let renderer = Renderer::new().color(false).clone();
/// assert_eq!(renderer.render(&spans), "[-hi-]{+cool+}");
/// ```
#[derive(Clone, Debug)]
pub struct Renderer {
    color: bool,
    unescape: bool,
    whitespace: WhitespaceDisplay,
}

impl Default for Renderer {
    fn default() -> Renderer {
        Renderer {
            color: console::colors_enabled(),
            unescape: false,
            whitespace: WhitespaceDisplay::default(),
        }
    }
}

impl Renderer {
    /// Creates a renderer with the default settings.
    ///
    /// Color is enabled if the terminal supports it, see
    /// [`console::colors_enabled`].
    pub fn new() -> Renderer {
        Renderer::default()
    }

    /// Enables or disables colored markers.
    pub fn color(&mut self, yes: bool) -> &mut Self {
        self.color = yes;
        self
    }

    /// Turns escaped `\n`, `\t` and `\r` in equal spans back into real
    /// whitespace.
    ///
    /// This is useful when the diffed texts are `Debug` output, where
    /// strings nested in a value have their newlines escaped.  Each equal
    /// span is unescaped on its own, so an escape sequence split by a
    /// change (`a\[-t-]{+n+}b`) is left as it is.
    pub fn unescape(&mut self, yes: bool) -> &mut Self {
        self.unescape = yes;
        self
    }

    /// Controls the visibility of whitespace in changed spans.
    pub fn whitespace(&mut self, display: WhitespaceDisplay) -> &mut Self {
        self.whitespace = display;
        self
    }

    /// Returns `true` if colored markers are used.
    pub fn is_colored(&self) -> bool {
        self.color
    }

    fn reveals_whitespace(&self, spans: &[Span<'_>]) -> bool {
        match self.whitespace {
            WhitespaceDisplay::Never => false,
            WhitespaceDisplay::Always => true,
            WhitespaceDisplay::Auto => {
                let mut changes = spans.iter().filter(|span| span.is_change()).peekable();
                changes.peek().is_some() && changes.all(|span| is_whitespace_only(span.as_str()))
            }
        }
    }

    /// Renders the spans into a single string.
    pub fn render(&self, spans: &[Span<'_>]) -> String {
        let reveal = self.reveals_whitespace(spans);
        let mut rv = String::new();
        for span in spans {
            if span.as_str().is_empty() {
                continue;
            }
            match span.tag() {
                ChangeTag::Equal => {
                    if self.unescape {
                        rv.push_str(&unescape_whitespace(span.as_str()));
                    } else {
                        rv.push_str(span.as_str());
                    }
                }
                tag => {
                    let text = if reveal {
                        reveal_whitespace(span.as_str())
                    } else {
                        Cow::Borrowed(span.as_str())
                    };
                    self.push_marked(&mut rv, tag, &text);
                }
            }
        }
        rv
    }

    fn push_marked(&self, rv: &mut String, tag: ChangeTag, text: &str) {
        if self.color {
            rv.push_str(&change_style(tag).apply_to(text).to_string());
        } else {
            let (open, close) = match tag {
                ChangeTag::Insert => PLAIN_INSERT,
                _ => PLAIN_DELETE,
            };
            rv.push_str(open);
            rv.push_str(text);
            rv.push_str(close);
        }
    }
}

/// Returns the style used to mark a change in colored output.
pub(crate) fn change_style(tag: ChangeTag) -> Style {
    let style = match tag {
        ChangeTag::Insert => Style::new().black().on_green(),
        ChangeTag::Delete => Style::new().black().on_red(),
        ChangeTag::Equal => Style::new(),
    };
    style.force_styling(true)
}

/// Returns the style used for section labels in colored output.
pub(crate) fn label_style() -> Style {
    Style::new().underlined().force_styling(true)
}

#[cfg(test)]
fn plain() -> Renderer {
    Renderer::new().color(false).clone()
}

#[test]
fn test_render_plain_markers() {
    let spans = vec![
        Span::new(ChangeTag::Equal, "HTTP/1.1 "),
        Span::new(ChangeTag::Delete, "2"),
        Span::new(ChangeTag::Insert, "4"),
        Span::new(ChangeTag::Equal, "00"),
    ];
    assert_eq!(plain().render(&spans), "HTTP/1.1 [-2-]{+4+}00");
}

#[test]
fn test_render_colored_markers() {
    let spans = vec![
        Span::new(ChangeTag::Delete, "hi"),
        Span::new(ChangeTag::Insert, "cool"),
    ];
    let rendered = Renderer::new().color(true).render(&spans);
    assert_eq!(
        rendered,
        format!(
            "{}{}",
            change_style(ChangeTag::Delete).apply_to("hi"),
            change_style(ChangeTag::Insert).apply_to("cool"),
        )
    );
    assert_eq!(console::strip_ansi_codes(&rendered), "hicool");
    assert_eq!(rendered.matches("\x1b[0m").count(), 2);
}

#[test]
fn test_render_equal_is_verbatim() {
    let spans = vec![Span::new(ChangeTag::Equal, "a\\nb")];
    assert_eq!(plain().render(&spans), "a\\nb");
    assert_eq!(plain().unescape(true).render(&spans), "a\nb");
}

#[test]
fn test_render_unescape_is_per_span() {
    let spans = vec![
        Span::new(ChangeTag::Equal, "a\\"),
        Span::new(ChangeTag::Delete, "t"),
        Span::new(ChangeTag::Insert, "n"),
        Span::new(ChangeTag::Equal, "b\\n"),
    ];
    assert_eq!(plain().unescape(true).render(&spans), "a\\[-t-]{+n+}b\n");
}

#[test]
fn test_render_skips_empty_spans() {
    let spans = vec![
        Span::new(ChangeTag::Equal, ""),
        Span::new(ChangeTag::Insert, ""),
    ];
    assert_eq!(Renderer::new().color(true).render(&spans), "");
}

#[test]
fn test_render_whitespace_only_changes_are_revealed() {
    let spans = vec![
        Span::new(ChangeTag::Equal, "a"),
        Span::new(ChangeTag::Insert, " \t"),
        Span::new(ChangeTag::Equal, "b"),
    ];
    assert_eq!(plain().render(&spans), "a{+\u{b7}\u{2192}+}b");
    assert_eq!(
        plain().whitespace(WhitespaceDisplay::Never).render(&spans),
        "a{+ \t+}b"
    );

    let mixed = vec![
        Span::new(ChangeTag::Delete, "x "),
        Span::new(ChangeTag::Insert, " "),
    ];
    assert_eq!(plain().render(&mixed), "[-x -]{+ +}");
    assert_eq!(
        plain().whitespace(WhitespaceDisplay::Always).render(&mixed),
        "[-x\u{b7}-]{+\u{b7}+}"
    );
}
