use std::error::Error;
use std::fmt;

use crate::engine::similarity;
use crate::render::label_style;

/// Describes two texts that did not compare equal.
///
/// A mismatch holds the two texts exactly as they were diffed (after
/// normalization) together with the rendered diff.  Its [`Display`]
/// implementation is the failure report: three sections labelled
/// `Expect`, `Actual` and `Difference`, in that order.
///
/// [`Display`]: std::fmt::Display
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Mismatch {
    actual: String,
    expect: String,
    diff: String,
    colored: bool,
}

impl Mismatch {
    pub(crate) fn new(actual: String, expect: String, diff: String, colored: bool) -> Mismatch {
        Mismatch {
            actual,
            expect,
            diff,
            colored,
        }
    }

    /// Returns the actual text.
    pub fn actual(&self) -> &str {
        &self.actual
    }

    /// Returns the expected text.
    pub fn expect(&self) -> &str {
        &self.expect
    }

    /// Returns the rendered diff.
    pub fn diff(&self) -> &str {
        &self.diff
    }

    /// Returns how similar the two texts are in the range `0..=1`.
    ///
    /// See [`similarity`](crate::similarity).
    pub fn similarity(&self) -> f32 {
        similarity(&self.actual, &self.expect)
    }

    /// Consumes the mismatch and returns the rendered diff.
    pub fn into_diff(self) -> String {
        self.diff
    }

    fn write_label(&self, f: &mut fmt::Formatter<'_>, label: &str) -> fmt::Result {
        if self.colored {
            writeln!(f, "{}:", label_style().apply_to(label))
        } else {
            writeln!(f, "{}:", label)
        }
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        self.write_label(f, "Expect")?;
        writeln!(f, "{}", self.expect)?;
        writeln!(f)?;
        self.write_label(f, "Actual")?;
        writeln!(f, "{}", self.actual)?;
        writeln!(f)?;
        self.write_label(f, "Difference")?;
        writeln!(f, "{}", self.diff)
    }
}

impl Error for Mismatch {}

#[test]
fn test_report_sections() {
    let mismatch = Mismatch::new(
        "hi".into(),
        "cool".into(),
        "[-hi-]{+cool+}".into(),
        false,
    );
    assert_eq!(
        mismatch.to_string(),
        "\nExpect:\ncool\n\nActual:\nhi\n\nDifference:\n[-hi-]{+cool+}\n"
    );
}

#[test]
fn test_report_labels_are_underlined() {
    let mismatch = Mismatch::new("a".into(), "b".into(), "x".into(), true);
    let report = mismatch.to_string();
    let expect = report.find(&label_style().apply_to("Expect").to_string());
    let actual = report.find(&label_style().apply_to("Actual").to_string());
    let difference = report.find(&label_style().apply_to("Difference").to_string());
    assert!(expect.is_some() && actual.is_some() && difference.is_some());
    assert!(expect < actual && actual < difference);
    assert_eq!(
        console::strip_ansi_codes(&report),
        "\nExpect:\nb\n\nActual:\na\n\nDifference:\nx\n"
    );
}

#[test]
fn test_mismatch_accessors() {
    let mismatch = Mismatch::new("abcd".into(), "bcde".into(), "diff".into(), false);
    assert_eq!(mismatch.actual(), "abcd");
    assert_eq!(mismatch.expect(), "bcde");
    assert_eq!(mismatch.diff(), "diff");
    assert_eq!(mismatch.similarity(), 0.75);
    assert_eq!(mismatch.into_diff(), "diff");
}
