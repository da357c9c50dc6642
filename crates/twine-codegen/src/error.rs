//! Emitter errors.
//!
//! Only structural violations of the decorated-AST invariants are errors:
//! they mean the inference pass failed to establish something the emitter
//! relies on, and the whole pass aborts. Deferred (non-monomorphised)
//! functions are not errors; the emitter writes a placeholder comment for
//! them instead.

use std::fmt;

use serde::Serialize;

/// A fatal structural violation in the decorated AST.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum EmitError {
    /// An import reference contains a dot but nothing after the final one.
    MalformedImport(String),
    /// An assignment target that is neither an identifier nor a tuple of
    /// identifiers. Carries the offending node kind.
    InvalidAssignmentTarget(String),
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitError::MalformedImport(import) => {
                write!(f, "cannot parse import reference: {import}")
            }
            EmitError::InvalidAssignmentTarget(kind) => {
                write!(f, "cannot assign to {kind}")
            }
        }
    }
}

impl std::error::Error for EmitError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialises_for_tooling() {
        let err = EmitError::MalformedImport("fmt.".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, "{\"MalformedImport\":\"fmt.\"}");
    }

    #[test]
    fn display_names_the_offender() {
        assert_eq!(
            EmitError::MalformedImport("fmt.".to_string()).to_string(),
            "cannot parse import reference: fmt."
        );
        assert_eq!(
            EmitError::InvalidAssignmentTarget("Call".to_string()).to_string(),
            "cannot assign to Call"
        );
    }
}
