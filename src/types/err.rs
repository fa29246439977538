//! Error types used in the library.
//!
//! - Parse and symbol errors abandon a single line, and leave a context as it was before the line was read.
//! - Phoneme conflicts are soft when merging into a symbol or a stored consequent, and are returned as part of a report rather than as an error.
//! - An implication whose antecedent contradicts its consequent is rejected outright.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::signed_feature::SignedFeature;

/// The general error type, wrapping the error of some specific part of the library.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Context(ContextError),
    ImplicationDB(ImplicationDBError),
    Parse(ParseError),
    SymbolDB(SymbolDBError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Context(e) => write!(f, "{e}"),
            Self::ImplicationDB(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::SymbolDB(e) => write!(f, "{e}"),
        }
    }
}

/// Errors when accessing a shared context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ContextError {
    /// Some holder of the lock panicked.
    Poisoned,
}

impl From<ContextError> for ErrorKind {
    fn from(e: ContextError) -> Self {
        ErrorKind::Context(e)
    }
}

impl std::fmt::Display for ContextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Poisoned => write!(f, "The shared context is poisoned"),
        }
    }
}

/// Errors in the implication database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ImplicationDBError {
    /// The antecedent of an implication contradicts its consequent.
    SelfContradiction,
}

impl From<ImplicationDBError> for ErrorKind {
    fn from(e: ImplicationDBError) -> Self {
        ErrorKind::ImplicationDB(e)
    }
}

impl std::fmt::Display for ImplicationDBError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SelfContradiction => {
                write!(f, "The antecedent contradicts the consequent")
            }
        }
    }
}

/// Errors during parsing of a line.
///
/// Positions are byte offsets into the line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// A character which may not begin any token.
    IllegalCharacter { position: usize, character: char },

    /// A token was found where it does not belong.
    UnexpectedToken { position: usize, token: String },

    /// The line ended where some further token was required.
    UnexpectedEnd,

    /// The line has no `:`, `=`, `=>`, or `<=`.
    MissingOperator,

    /// A backtick was opened, but the symbol was never closed.
    UnterminatedDereference { position: usize },
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalCharacter {
                position,
                character,
            } => write!(f, "Illegal character '{character}' at {position}"),

            Self::UnexpectedToken { position, token } => {
                write!(f, "Syntax error at {position} on token '{token}'")
            }

            Self::UnexpectedEnd => write!(f, "Unexpected end of line"),

            Self::MissingOperator => write!(f, "Expected one of ':', '=', '=>', or '<='"),

            Self::UnterminatedDereference { position } => {
                write!(f, "Unterminated symbol from {position}")
            }
        }
    }
}

/// Errors regarding the features of a phoneme.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PhonemeError {
    /// The listed signed features contradict the phoneme they were to be merged into.
    Conflict(Vec<SignedFeature>),
}

impl std::fmt::Display for PhonemeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Conflict(features) => {
                let skipped = features
                    .iter()
                    .map(|feature| feature.to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                write!(f, "Inconsistent feature update, skipped: {skipped}")
            }
        }
    }
}

/// Errors in the symbol database.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SymbolDBError {
    /// No symbol with the given name has been defined.
    UnknownSymbol(String),
}

impl From<SymbolDBError> for ErrorKind {
    fn from(e: SymbolDBError) -> Self {
        ErrorKind::SymbolDB(e)
    }
}

impl std::fmt::Display for SymbolDBError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSymbol(name) => write!(f, "No such symbol `{name}`"),
        }
    }
}
