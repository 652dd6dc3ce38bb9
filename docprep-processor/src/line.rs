//! Line tokenizing and classification
//!
//! A line is split on single space characters after its terminator is
//! removed. Runs of spaces produce empty tokens and tabs are not separators,
//! so `"  %%"` and `"\t#include"` are ordinary text. `#include` alone on a
//! line is also text, unless it is the unterminated last line of the input.

/// First token of an include directive.
pub const INCLUDE_TOKEN: &str = "#include";

/// First token of a line that is dropped from the output.
pub const SKIP_TOKEN: &str = "%%";

/// Prefix of editorial comment lines in included files.
pub const COMMENT_PREFIX: &str = "##";

/// How a top-level input line is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `#include` directive. `token` is the second space-delimited field, if any.
    Include { token: Option<&'a str> },
    /// `%%` line, written nowhere.
    Skip,
    /// Anything else, written unchanged.
    Passthrough,
}

/// Split a line into its space-delimited tokens, ignoring the line terminator.
pub fn split_tokens(line: &str) -> impl Iterator<Item = &str> {
    strip_terminator(line).split(' ')
}

/// Classify a line of the top-level input.
pub fn classify(line: &str) -> LineKind<'_> {
    let mut tokens = split_tokens(line);
    match tokens.next() {
        Some(INCLUDE_TOKEN) => match tokens.next() {
            // A terminated `#include` with nothing after it is ordinary text.
            None if line != INCLUDE_TOKEN => LineKind::Passthrough,
            token => LineKind::Include { token },
        },
        Some(SKIP_TOKEN) => LineKind::Skip,
        _ => LineKind::Passthrough,
    }
}

/// Whether a line of an included file is an editorial comment.
pub fn is_editorial_comment(line: &str) -> bool {
    line.starts_with(COMMENT_PREFIX)
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
