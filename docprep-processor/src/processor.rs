//! The line processor
//!
//! `Processor` runs one pass over the input lines in order. Each line is
//! classified (see [`crate::line`]) and either written unchanged, dropped, or
//! replaced by the lines of the file it includes. Included lines are not
//! classified again: only `##` comments are removed from them, so nested
//! `#include` and `%%` lines reach the output as text.
//!
//! Output is written as the pass goes. A failure halfway through leaves the
//! lines produced so far in the output file.
//!
//! # Example
//!
//! ```rust
//! use docprep_processor::Processor;
//!
//! fn main() -> docprep_processor::Result<()> {
//!     let summary = Processor::new().process_file("book.md", "build/book.md")?;
//!     println!("{} includes expanded", summary.includes_expanded);
//!     Ok(())
//! }
//! ```

use crate::directive::include_path;
use crate::error::{ProcessError, Result};
use crate::line::{classify, is_editorial_comment, LineKind};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Counters collected during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Lines written to the output, from the input and from included files.
    pub lines_written: usize,
    /// `%%` lines dropped from the input.
    pub lines_skipped: usize,
    /// `#include` directives replaced by file content.
    pub includes_expanded: usize,
    /// `##` lines dropped from included files.
    pub comments_dropped: usize,
}

/// Read a whole file into lines, each keeping its terminator.
///
/// The last line has no terminator when the file does not end with a
/// newline. `\r\n` endings are kept as they are.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|e| ProcessError::read(path, e))?;
    Ok(source.split_inclusive('\n').map(str::to_string).collect())
}

/// Expands includes and drops editorial lines.
#[derive(Debug, Clone, Default)]
pub struct Processor {
    include_root: Option<PathBuf>,
}

impl Processor {
    /// A processor resolving include paths against the current working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative include paths against `root` instead of the working directory.
    pub fn with_include_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.include_root = Some(root.into());
        self
    }

    /// Where an include path points on disk.
    pub fn resolve(&self, path: &str) -> PathBuf {
        match &self.include_root {
            Some(root) => root.join(path),
            None => PathBuf::from(path),
        }
    }

    /// Process `input` into `output`, creating or truncating `output`.
    ///
    /// The input is read before the output is opened, so a missing input
    /// leaves no output file behind.
    pub fn process_file(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<Summary> {
        let (input, output) = (input.as_ref(), output.as_ref());
        let lines = read_lines(input)?;
        debug!(input = %input.display(), lines = lines.len(), "read input");

        let file = File::create(output).map_err(|e| ProcessError::write(output, e))?;
        let mut writer = BufWriter::new(file);
        let result = self.process_lines(&lines, &mut writer, output);

        // Flush even on failure so earlier lines stay on disk.
        let flushed = writer.flush().map_err(|e| ProcessError::write(output, e));
        let summary = result?;
        flushed?;
        Ok(summary)
    }

    /// Process an in-memory document.
    pub fn process_str(&self, source: &str) -> Result<String> {
        let mut buffer = Vec::with_capacity(source.len());
        self.process_lines(source.split_inclusive('\n'), &mut buffer, Path::new("<memory>"))?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Run the pass over `lines`, writing into `writer`.
    ///
    /// `output` only labels write errors.
    pub fn process_lines<I, S, W>(
        &self,
        lines: I,
        writer: &mut W,
        output: &Path,
    ) -> Result<Summary>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        W: Write,
    {
        let mut summary = Summary::default();
        let mut emit = |line: &str, summary: &mut Summary| -> Result<()> {
            writer
                .write_all(line.as_bytes())
                .map_err(|e| ProcessError::write(output, e))?;
            summary.lines_written += 1;
            Ok(())
        };

        for (index, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            match classify(line) {
                LineKind::Include { token } => {
                    let path = include_path(token).map_err(|source| {
                        ProcessError::MalformedDirective {
                            line: index + 1,
                            source,
                        }
                    })?;
                    let resolved = self.resolve(path);
                    let included = read_lines(&resolved)?;
                    debug!(
                        path = %resolved.display(),
                        line = index + 1,
                        lines = included.len(),
                        "expanding include"
                    );
                    for included_line in &included {
                        if is_editorial_comment(included_line) {
                            summary.comments_dropped += 1;
                        } else {
                            emit(included_line, &mut summary)?;
                        }
                    }
                    summary.includes_expanded += 1;
                }
                LineKind::Skip => {
                    trace!(line = index + 1, "skipping line");
                    summary.lines_skipped += 1;
                }
                LineKind::Passthrough => emit(line, &mut summary)?,
            }
        }

        Ok(summary)
    }
}
