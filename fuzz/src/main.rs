#![allow(clippy::all)]

use afl::fuzz;
use arbitrary::Arbitrary;
use testdiff::{actual_text, expect_text, CompareConfig, DiffMode, Normalization};

#[derive(Arbitrary, Debug)]
enum FuzzMode {
    Exact,
    Readable,
    Auto,
}

#[derive(Arbitrary, Debug)]
enum FuzzNormalization {
    Raw,
    Dedent,
    DedentAndCrlf,
}

#[derive(Arbitrary, Debug)]
struct FuzzOptions {
    mode: FuzzMode,
    normalization: FuzzNormalization,
    color: bool,
    actual: String,
    expect: String,
}

fn main() {
    fuzz!(|data: FuzzOptions| {
        let mode = match data.mode {
            FuzzMode::Exact => DiffMode::Exact,
            FuzzMode::Readable => DiffMode::Readable,
            FuzzMode::Auto => DiffMode::Auto,
        };
        let normalization = match data.normalization {
            FuzzNormalization::Raw => Normalization::Raw,
            FuzzNormalization::Dedent => Normalization::Dedent,
            FuzzNormalization::DedentAndCrlf => Normalization::DedentAndCrlf,
        };

        let spans = testdiff::diff(&data.actual, &data.expect, mode);
        assert_eq!(actual_text(&spans), data.actual);
        assert_eq!(expect_text(&spans), data.expect);

        let mut config = CompareConfig::text();
        config.mode(mode).normalization(normalization).color(data.color);
        assert!(config.compare(&data.actual, &data.actual).is_ok());
        if let Err(mismatch) = config.compare(&data.actual, &data.expect) {
            assert!(!mismatch.diff().is_empty());
        }
    });
}
