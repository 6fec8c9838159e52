//! Embedded error documentation for `--explain`-style tooling.
//!
//! Each documented code has a markdown file that explains the rule, shows a
//! violating model, and points at the fix. The files are embedded at compile
//! time and looked up via [`ErrorDocs::get`].
//!
//! # Adding New Documentation
//!
//! 1. Create a new file `NESTML_*.md` in this directory
//! 2. Add an entry to the `DOCS` array below

use crate::ErrorCode;

/// Registry of embedded error documentation.
///
/// Coverage is additive: undocumented codes simply return `None`.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Get the documentation for an error code.
    ///
    /// Returns `Some(markdown)` if documentation exists for the code,
    /// `None` otherwise.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    /// Get all documented error codes.
    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|(code, _)| *code)
    }

    /// Check if an error code has documentation.
    pub fn has_docs(code: ErrorCode) -> bool {
        DOCS.iter().any(|(c, _)| *c == code)
    }
}

/// Embedded documentation for each documented error code.
static DOCS: &[(ErrorCode, &str)] = &[
    (
        ErrorCode::AliasMustHaveOneVariable,
        include_str!("NESTML_ALIAS_HAS_ONE_VAR.md"),
    ),
    (
        ErrorCode::AssignmentToAlias,
        include_str!("NESTML_ASSIGNMENT_TO_ALIAS.md"),
    ),
    (
        ErrorCode::ComponentMissingDynamics,
        include_str!("NESTML_COMPONENT_HAS_NO_DYNAMICS.md"),
    ),
    (
        ErrorCode::FunctionReturnsWrongType,
        include_str!("NESTML_FUNCTION_WRONG_RETURN_TYPE.md"),
    ),
    (
        ErrorCode::MultipleOutputs,
        include_str!("NESTML_MULTIPLE_OUTPUTS.md"),
    ),
    (
        ErrorCode::VariableUsedBeforeDeclaration,
        include_str!("NESTML_VARIABLE_USED_BEFORE_DECLARATION.md"),
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_existing_doc() {
        let doc = ErrorDocs::get(ErrorCode::AliasMustHaveOneVariable);
        assert!(doc.is_some_and(|doc| doc.contains("Alias Declares More Than One Variable")));
    }

    #[test]
    fn test_get_undocumented_code() {
        assert!(ErrorDocs::get(ErrorCode::SymbolTableMissing).is_none());
    }

    #[test]
    fn test_has_docs() {
        assert!(ErrorDocs::has_docs(ErrorCode::MultipleOutputs));
        assert!(ErrorDocs::has_docs(ErrorCode::AssignmentToAlias));
        assert!(!ErrorDocs::has_docs(ErrorCode::UnitLiteralNotOne));
    }

    #[test]
    fn test_all_codes_are_known() {
        for code in ErrorDocs::all_codes() {
            assert!(ErrorCode::ALL.contains(&code));
        }
        assert_eq!(ErrorDocs::all_codes().count(), DOCS.len());
    }
}
