use std::num::ParseIntError;

use miette::{miette, LabeledSpan, Report, Severity};

// Loader errors

pub fn load_bad_lit(span: (usize, usize), src: &str, e: ParseIntError) -> Report {
    miette!(
        severity = Severity::Error,
        code = "load::bad_lit",
        help = "each line holds one byte as a binary literal like 10000010",
        labels = vec![LabeledSpan::at(span, "incorrect literal")],
        "Encountered an invalid byte literal: {e}",
    )
    .with_source_code(src.to_string())
}

pub fn load_too_long(span: (usize, usize), src: &str) -> Report {
    miette!(
        severity = Severity::Error,
        code = "load::image_size",
        help = "the LS-8 address space holds 256 bytes",
        labels = vec![LabeledSpan::at(span, "byte does not fit in memory")],
        "Program image does not fit in memory.",
    )
    .with_source_code(src.to_string())
}
