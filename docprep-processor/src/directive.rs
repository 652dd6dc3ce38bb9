//! Include path extraction
//!
//! The path is whatever follows the first double quote of the directive's
//! second token, up to the next double quote. A token such as `"notes.md`
//! with no closing quote still yields `notes.md`. Paths containing spaces
//! cannot be expressed, since the token ends at the first space.

use thiserror::Error;

/// Reasons an include directive yields no path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectiveError {
    #[error("missing path after #include")]
    MissingPath,

    #[error("expected a quoted path, found `{token}`")]
    Unquoted { token: String },
}

/// Extract the include path from the token following `#include`.
pub fn include_path(token: Option<&str>) -> Result<&str, DirectiveError> {
    let token = token.ok_or(DirectiveError::MissingPath)?;
    token
        .split('"')
        .nth(1)
        .ok_or_else(|| DirectiveError::Unquoted {
            token: token.to_string(),
        })
}
