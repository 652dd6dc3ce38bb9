//! # docprep-processor
//!
//! The line processor behind `docprep`: a single top-to-bottom pass over a
//! markdown document that expands include directives and drops editorial
//! lines.
//!
//! Directive syntax
//!
//!     #include "fragments/intro.md"   replaced by the file's lines, minus `##` lines
//!     %% anything                     dropped from the output
//!     ## anything                     dropped, but only inside included files
//!
//! Includes are expanded one level deep. A directive inside an included file
//! is copied to the output as plain text.
//!
//! Module layout
//!
//!     line        tokenizing and classification of a single line
//!     directive   include path extraction
//!     processor   the pass itself, file reading and output writing
//!     error       error types shared by the above

pub mod directive;
pub mod error;
pub mod line;
pub mod processor;

pub use directive::{include_path, DirectiveError};
pub use error::{ProcessError, Result};
pub use line::{classify, is_editorial_comment, split_tokens, LineKind};
pub use processor::{read_lines, Processor, Summary};
