//! Diagnostics for NESTML context conditions.
//!
//! Checkers detect context-condition violations over the AST and describe
//! them as a [`DiagnosticKind`] value carrying exactly the payload the
//! violation's message needs. This crate turns such a value, plus an optional
//! source position, into a stable machine-readable code and a human-readable
//! message:
//!
//! ```
//! use nestml_diagnostic::{catalog, DiagnosticKind};
//! use nestml_ir::SourcePosition;
//!
//! let kind = DiagnosticKind::AliasMustHaveOneVariable;
//! let diag = catalog::format(&kind, Some(SourcePosition::new(4, 10)));
//! assert_eq!(diag.code.as_str(), "NESTML_ALIAS_HAS_ONE_VAR");
//! ```
//!
//! Codes are a small versioned public API: external tooling matches on the
//! exact strings, so renaming or removing one is a breaking change. Message
//! text is documentation-grade and may be revised freely as long as the
//! `CODE:` / `CODE line:column:` prefix convention holds.
//!
//! The crate never inspects the AST, never decides whether a rule is
//! violated, and never writes to any sink. Every operation is a pure function
//! of its arguments and safe to call concurrently.

pub mod catalog;
mod error_code;
pub mod explain;
mod kind;
mod message;

pub use catalog::Diagnostic;
pub use error_code::ErrorCode;
pub use explain::ErrorDocs;
pub use kind::DiagnosticKind;
