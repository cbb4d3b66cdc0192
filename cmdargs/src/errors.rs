/*!
Errors produced while classifying and parsing.

[`TypeError`] is about how the record was declared, and is the same no matter
what the command line was. [`ParseError`] is about the command line itself.
Both are reported on first occurrence; nothing is accumulated.
*/

use thiserror::Error;

use crate::fields::Expected;

/// A problem with the declaration of an [`Arguments`][crate::Arguments]
/// record: a missing, malformed or clashing name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    #[error("option {} has no long or short name", display_declared(.0))]
    MissingOptionName(Option<String>),

    #[error("operand {} has no name", display_declared(.0))]
    MissingOperandName(Option<String>),

    #[error("invalid short option name {0:?}: must be a single letter")]
    InvalidShortOptionName(String),

    #[error("duplicated option name {0}")]
    DuplicatedOptionName(String),

    #[error("duplicated operand name {0}")]
    DuplicatedOperandName(String),
}

fn display_declared(name: &Option<String>) -> &str {
    name.as_deref().unwrap_or("<anonymous>")
}

/// A problem with the command line being parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid option {0}")]
    InvalidOption(String),

    #[error("invalid operand {0}")]
    InvalidOperand(String),

    #[error("missing or invalid {expected} for option {name}")]
    MissingOption { name: String, expected: Expected },

    #[error("missing or invalid {expected} for operand {name}")]
    MissingOperand { name: String, expected: Expected },
}

/// Everything [`parse`][crate::Arguments::parse] can fail with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Type(#[from] TypeError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
