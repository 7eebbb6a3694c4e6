//! Ready made comparisons.
//!
//! Each function here is a preset of [`CompareConfig`]: they differ in how
//! the inputs are turned into text and normalized before diffing.  The
//! `compare_*` functions return `Ok(())` on a match and a [`Mismatch`]
//! otherwise, the `diff_*` functions return the rendered diff directly.
use std::fmt::Debug;

use crate::config::CompareConfig;
use crate::format::{Debugged, Formattable};
use crate::outcome::Mismatch;

/// Compares two strings as they are.
///
/// ```rust
/// assert!(testdiff::compare("hi", "hi").is_ok());
/// assert!(testdiff::compare("hi", "cool").is_err());
/// ```
pub fn compare(actual: &str, expect: &str) -> Result<(), Mismatch> {
    CompareConfig::text().compare(actual, expect)
}

/// Formats two values and compares the resulting texts.
///
/// ```rust
/// use testdiff::Debugged;
///
/// assert!(testdiff::compare_values(&3, "3").is_ok());
/// assert!(testdiff::compare_values(&Debugged(&[1, 2]), &Debugged(&vec![1, 2])).is_ok());
/// ```
pub fn compare_values<A, E>(actual: &A, expect: &E) -> Result<(), Mismatch>
where
    A: Formattable + ?Sized,
    E: Formattable + ?Sized,
{
    CompareConfig::text().compare_values(actual, expect)
}

/// Compares the `Debug` representations of two values.
///
/// The values are equal if they render the same, which means that values
/// behind different pointers compare equal as long as their contents match.
pub fn compare_debug<A, E>(actual: &A, expect: &E) -> Result<(), Mismatch>
where
    A: Debug + ?Sized,
    E: Debug + ?Sized,
{
    CompareConfig::debug().compare_values(&Debugged(actual), &Debugged(expect))
}

/// Compares two text blocks ignoring their common indentation.
///
/// ```rust
/// let actual = "
///     <h1>
///       Hello
///     </h1>
/// ";
/// assert!(testdiff::compare_content(actual, "<h1>\n  Hello\n</h1>").is_ok());
/// ```
pub fn compare_content<A, E>(actual: &A, expect: &E) -> Result<(), Mismatch>
where
    A: Formattable + ?Sized,
    E: Formattable + ?Sized,
{
    CompareConfig::content().compare_values(actual, expect)
}

/// Compares two HTTP message dumps.
///
/// Both dumps are dedented and trimmed, and `\r\n` is considered equal to
/// `\n` so a dump taken off the wire can be compared with a literal from
/// the source code.
pub fn compare_http(actual: &str, expect: &str) -> Result<(), Mismatch> {
    CompareConfig::http().compare(actual, expect)
}

/// Compares two HTTP message dumps given as raw bytes.
///
/// Invalid utf-8 is replaced before comparing, see
/// [`ByteDump`](crate::ByteDump).
///
/// This requires the `bytes` feature.
#[cfg(feature = "bytes")]
pub fn compare_http_bytes(actual: &[u8], expect: &[u8]) -> Result<(), Mismatch> {
    use crate::format::ByteDump;
    CompareConfig::http().compare_values(&ByteDump(actual), &ByteDump(expect))
}

/// Compares the pretty printed JSON representations of two values.
///
/// This requires the `serde` feature.
#[cfg(feature = "serde")]
pub fn compare_json<A, E>(actual: &A, expect: &E) -> Result<(), Mismatch>
where
    A: serde::Serialize + Debug + ?Sized,
    E: serde::Serialize + Debug + ?Sized,
{
    use crate::format::Serialized;
    CompareConfig::text().compare_values(&Serialized(actual), &Serialized(expect))
}

/// Returns the rendered diff of two strings.
///
/// If the strings are equal the input is returned without markers.
pub fn diff_string(actual: &str, expect: &str) -> String {
    CompareConfig::text().diff_string(actual, expect)
}

/// Returns the rendered diff of two formatted values.
pub fn diff_values<A, E>(actual: &A, expect: &E) -> String
where
    A: Formattable + ?Sized,
    E: Formattable + ?Sized,
{
    CompareConfig::text().diff_values(actual, expect)
}

/// Returns the rendered diff of the `Debug` representations of two values.
pub fn diff_debug<A, E>(actual: &A, expect: &E) -> String
where
    A: Debug + ?Sized,
    E: Debug + ?Sized,
{
    CompareConfig::debug().diff_values(&Debugged(actual), &Debugged(expect))
}

/// Returns the rendered diff of two text blocks ignoring indentation.
pub fn diff_content<A, E>(actual: &A, expect: &E) -> String
where
    A: Formattable + ?Sized,
    E: Formattable + ?Sized,
{
    CompareConfig::content().diff_values(actual, expect)
}

/// Returns the rendered diff of two HTTP message dumps.
pub fn diff_http(actual: &str, expect: &str) -> String {
    CompareConfig::http().diff_string(actual, expect)
}
