//! Turning values into comparable text.
//!
//! Everything that is compared ends up as a string first.  The
//! [`Formattable`] trait is the seam for that: strings pass through
//! untouched, primitives use their `Display` form, and arbitrary types are
//! wrapped into one of the adapters in this module.
//!
//! * [`Debugged`] renders any [`Debug`](std::fmt::Debug) value in its
//!   alternate (`{:#?}`) form which spells out nested structure with field
//!   names.
//! * [`Serialized`] renders a value as pretty printed JSON (requires the
//!   `serde` feature).
//! * [`ByteDump`] renders raw bytes as lossily decoded utf-8 (requires the
//!   `bytes` feature).
//!
//! Formatting never fails.  If a value cannot be rendered with full
//! fidelity the adapters degrade to a more generic representation.
use std::borrow::Cow;
use std::fmt::{self, Debug, Write};

/// The error produced when a value cannot be formatted.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The [`Debug`] implementation of the value reported an error.
    #[error("the Debug implementation returned an error")]
    Debug(#[from] fmt::Error),
    /// The value could not be serialized.
    #[cfg(feature = "serde")]
    #[error("failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A value that can be turned into text for comparison.
///
/// Implement this for your own types if neither the `Debug` nor the JSON
/// representation suits them.  The output must be deterministic: formatting
/// equal values has to produce equal text.
pub trait Formattable {
    /// Returns the textual form of the value.
    fn format_value(&self) -> Cow<'_, str>;
}

impl Formattable for str {
    fn format_value(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Formattable for String {
    fn format_value(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl<'a> Formattable for Cow<'a, str> {
    fn format_value(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_ref())
    }
}

impl<T: Formattable + ?Sized> Formattable for Box<T> {
    fn format_value(&self) -> Cow<'_, str> {
        (**self).format_value()
    }
}

impl<'a, T: Formattable + ?Sized> Formattable for &'a T {
    fn format_value(&self) -> Cow<'_, str> {
        (**self).format_value()
    }
}

macro_rules! impl_display_formattable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Formattable for $ty {
                fn format_value(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

impl_display_formattable!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

/// Formats a value.
///
/// ```rust
/// use testdiff::{format_value, Debugged};
///
/// assert_eq!(format_value("hi"), "hi");
/// assert_eq!(format_value(&42), "42");
/// assert_eq!(format_value(&Debugged(&Some("hi"))), "Some(\n    \"hi\",\n)");
/// ```
pub fn format_value<T: Formattable + ?Sized>(value: &T) -> Cow<'_, str> {
    value.format_value()
}

/// Renders a value with its alternate `Debug` representation.
pub fn try_format_debug<T: Debug + ?Sized>(value: &T) -> Result<String, FormatError> {
    let mut buf = String::new();
    buf.write_fmt(format_args!("{:#?}", value))?;
    Ok(buf)
}

/// Renders a value as pretty printed JSON.
#[cfg(feature = "serde")]
pub fn try_format_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, FormatError> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn unformattable<T: ?Sized>() -> String {
    format!("<unformattable {}>", std::any::type_name::<T>())
}

/// Formats the wrapped value through its [`Debug`] implementation.
///
/// The alternate form is used so nested values come out one field per
/// line, which keeps diffs of large structures local to the changed field.
/// Smart pointers such as `Box` or `Rc` format transparently, so two values
/// compare by content and never by identity.
#[derive(Debug)]
pub struct Debugged<'a, T: ?Sized>(pub &'a T);

impl<'a, T: Debug + ?Sized> Formattable for Debugged<'a, T> {
    fn format_value(&self) -> Cow<'_, str> {
        match try_format_debug(self.0) {
            Ok(rv) => Cow::Owned(rv),
            Err(err) => {
                tracing::debug!(error = %err, "falling back to type name");
                Cow::Owned(unformattable::<T>())
            }
        }
    }
}

/// Formats the wrapped value as pretty printed JSON.
///
/// If serialization fails (for instance for maps with non-string keys) the
/// value is formatted through [`Debugged`] instead.
///
/// This requires the `serde` feature.
#[cfg(feature = "serde")]
#[derive(Debug)]
pub struct Serialized<'a, T: ?Sized>(pub &'a T);

#[cfg(feature = "serde")]
impl<'a, T: serde::Serialize + Debug + ?Sized> Formattable for Serialized<'a, T> {
    fn format_value(&self) -> Cow<'_, str> {
        match try_format_json(self.0) {
            Ok(rv) => Cow::Owned(rv),
            Err(err) => {
                tracing::debug!(error = %err, "falling back to debug formatting");
                Debugged(self.0).format_value().into_owned().into()
            }
        }
    }
}

/// Formats raw bytes as text, replacing invalid utf-8 sequences.
///
/// This requires the `bytes` feature.
#[cfg(feature = "bytes")]
#[derive(Debug)]
pub struct ByteDump<'a>(pub &'a [u8]);

#[cfg(feature = "bytes")]
impl<'a> Formattable for ByteDump<'a> {
    fn format_value(&self) -> Cow<'_, str> {
        use bstr::ByteSlice;
        self.0.to_str_lossy()
    }
}

#[test]
fn test_strings_pass_through() {
    assert_eq!(format_value("with \"quotes\"\n"), "with \"quotes\"\n");
    assert_eq!(format_value(&String::from("owned")), "owned");
    assert_eq!(format_value(&Cow::Borrowed("cow")), "cow");
    assert!(matches!(format_value("borrowed"), Cow::Borrowed(_)));
}

#[test]
fn test_primitives_use_display() {
    assert_eq!(format_value(&3), "3");
    assert_eq!(format_value(&true), "true");
    assert_eq!(format_value(&'x'), "x");
    assert_eq!(format_value(&1.5f64), "1.5");
}

#[test]
fn test_debugged_nested_structure() {
    #[derive(Debug)]
    struct Web {
        a: Box<Inner>,
        b: Empty,
    }

    #[derive(Debug)]
    struct Inner {
        c: std::rc::Rc<Leaf>,
    }

    #[derive(Debug)]
    struct Leaf {
        d: String,
    }

    #[derive(Debug)]
    struct Empty;

    let web = Web {
        a: Box::new(Inner {
            c: std::rc::Rc::new(Leaf { d: "D".into() }),
        }),
        b: Empty,
    };
    insta::assert_snapshot!(format_value(&Debugged(&web)), @r###"
    Web {
        a: Inner {
            c: Leaf {
                d: "D",
            },
        },
        b: Empty,
    }
    "###);
}

#[test]
fn test_debugged_degrades_on_error() {
    struct Broken;

    impl Debug for Broken {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    let rendered = format_value(&Debugged(&Broken));
    assert!(rendered.starts_with("<unformattable "));
    assert!(rendered.ends_with("Broken>"));
    assert!(matches!(try_format_debug(&Broken), Err(FormatError::Debug(_))));
}

#[test]
#[cfg(feature = "serde")]
fn test_serialized_pretty_json() {
    #[derive(Debug, serde::Serialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    assert_eq!(
        format_value(&Serialized(&Point { x: 1, y: 2 })),
        "{\n  \"x\": 1,\n  \"y\": 2\n}"
    );
}

#[test]
#[cfg(feature = "serde")]
fn test_serialized_falls_back_to_debug() {
    let mut map = std::collections::BTreeMap::new();
    map.insert(vec![1u8], "non-string key");
    let wrapped = Serialized(&map);
    let rendered = format_value(&wrapped);
    assert_eq!(rendered, format_value(&Debugged(&map)));
    assert!(matches!(try_format_json(&map), Err(FormatError::Serialize(_))));
}

#[test]
#[cfg(feature = "bytes")]
fn test_byte_dump_is_lossy() {
    assert_eq!(format_value(&ByteDump(b"HTTP/1.1 200 OK")), "HTTP/1.1 200 OK");
    assert_eq!(format_value(&ByteDump(b"bad \xff byte")), "bad \u{fffd} byte");
}
