//! This crate compares texts and values for tests and renders readable,
//! colorized differences when they do not match.
//!
//! Instead of an opaque "not equal" a failed comparison yields a
//! [`Mismatch`] which carries both texts and a character level diff where
//! deleted text is marked red and inserted text green.  The diffing itself
//! is done by [`similar`] (exact diffs) and [`dissimilar`] (readable diffs
//! with semantic cleanup).
//!
//! The crate is split into a few layers:
//!
//! * [`Formattable`] turns values into text.  Strings pass through, other
//!   values are wrapped in [`Debugged`] (or `Serialized` with the `serde`
//!   feature).
//! * [`normalize`] strips indentation and line ending noise.
//! * [`diff`] computes the [`Span`]s of two texts and [`Renderer`] renders
//!   them.
//! * [`CompareConfig`] ties these together and produces a [`Mismatch`].
//! * The `compare_*` and `diff_*` functions and the `assert_*_eq!` macros
//!   are presets for common kinds of input.
//!
//! # Examples
//!
//! ```rust
//! let mismatch = testdiff::CompareConfig::text()
//!     .color(false)
//!     .compare("Hello World", "Hello Berlin")
//!     .unwrap_err();
//! assert_eq!(mismatch.actual(), "Hello World");
//! assert_eq!(mismatch.expect(), "Hello Berlin");
//! println!("{}", mismatch);
//! ```
//!
//! In tests the assertion macros fail the test with the full report:
//!
//! ```rust
//! use testdiff::assert_content_eq;
//!
//! let rendered = "<ul>\n  <li>one</li>\n</ul>";
//! assert_content_eq!(rendered, "
//!     <ul>
//!       <li>one</li>
//!     </ul>
//! ");
//! ```
//!
//! # Features
//!
//! * `serde`: JSON formatting through [`serde_json`](https://docs.rs/serde_json),
//!   adds `Serialized`, `compare_json` and `assert_json_eq!`.
//! * `bytes`: adds `ByteDump` and `compare_http_bytes` for raw byte dumps.
//! * `unicode`: exact diffs operate on graphemes instead of characters.
//!
//! # Logging
//!
//! Comparisons emit [`tracing`] events (`trace` when a comparison starts,
//! `debug` for mismatches and formatting fallbacks).  Install a subscriber
//! to see them.
mod adapters;
mod assert;
mod config;
mod engine;
mod format;
mod normalize;
mod outcome;
mod render;

pub use similar::{Algorithm, ChangeTag};

pub use self::adapters::*;
pub use self::assert::{assert_outcome, assert_outcome_with};
pub use self::config::CompareConfig;
pub use self::engine::{actual_text, diff, diff_with, expect_text, similarity, DiffMode, Span};
#[cfg(feature = "bytes")]
pub use self::format::ByteDump;
#[cfg(feature = "serde")]
pub use self::format::{try_format_json, Serialized};
pub use self::format::{format_value, try_format_debug, Debugged, FormatError, Formattable};
pub use self::normalize::{dedent, normalize, reveal_whitespace, unescape_whitespace, Normalization};
pub use self::outcome::Mismatch;
pub use self::render::{Renderer, WhitespaceDisplay};
