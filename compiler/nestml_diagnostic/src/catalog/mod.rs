//! The catalog façade: violation in, `(code, message)` out.
//!
//! Stateless composition of the code table and the message bodies. Both
//! operations are pure functions; there is nothing to construct, share, or
//! tear down.

use std::fmt;

use nestml_ir::SourcePosition;

use crate::{DiagnosticKind, ErrorCode};

/// A formatted diagnostic: the stable code plus the full message text.
///
/// The message already carries the code prefix (`CODE:` or
/// `CODE line:column:`), so it can be handed to a reporter as is. Only the
/// code is contract; the text after the prefix may be revised.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Stable identifier for the violated rule.
    pub code: ErrorCode,
    /// Full message, prefix included.
    pub message: String,
}

impl Diagnostic {
    /// Split into the `(code, message)` string pair of the output contract.
    pub fn into_parts(self) -> (&'static str, String) {
        (self.code.as_str(), self.message)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Format a violation into its code and message.
///
/// With a position the message reads `CODE line:column: body`; without one it
/// degrades to `CODE: body`. One shape for both cases, so callers can parse
/// the prefix uniformly.
pub fn format(kind: &DiagnosticKind, position: Option<SourcePosition>) -> Diagnostic {
    let code = kind.code();
    let message = match position {
        Some(position) => format!("{code} {position}: {}", kind.body()),
        None => format!("{code}: {}", kind.body()),
    };
    Diagnostic { code, message }
}

/// The stable identifier alone, without building message text.
///
/// For callers (tests, IDE tooling) that match on codes and never show text.
pub fn code_only(kind: &DiagnosticKind) -> &'static str {
    kind.code().as_str()
}
