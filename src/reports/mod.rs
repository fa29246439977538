/*!
Reports on the application of an assertion to a context.

A report holds copies of everything changed by an assertion, and so remains valid after further assertions.
Any soft conflict (features skipped during a merge) is noted in the report, rather than returned as an error, as the assertion otherwise applied.

The [Display] implementation of a report is the output of the interactive loop:
- For definitions, `name = [features]` for each updated symbol.
- For implications, the full collection of stored implications.
*/

use crate::{
    db::implication::{write_implications, Implication, ImplicationOk},
    structures::phoneme::Phoneme,
    types::err::{self},
};

/// The state of a symbol after some definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolReport {
    pub name: String,

    /// A copy of the phoneme bound to the symbol.
    pub phoneme: Phoneme,

    /// Features skipped during the definition, if any.
    pub conflict: Option<err::PhonemeError>,
}

/// High-level reports regarding an assertion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Report {
    /// Some symbols were defined.
    Symbols(Vec<SymbolReport>),

    /// An implication was inserted.
    Implications {
        /// The outcome of the insertion.
        outcome: ImplicationOk,

        /// A copy of the stored implications, after the insertion.
        implications: Vec<Implication>,
    },
}

impl Report {
    /// Descriptions of any soft conflict.
    pub fn warnings(&self) -> Vec<String> {
        match self {
            Self::Symbols(symbols) => symbols
                .iter()
                .filter_map(|symbol| {
                    symbol
                        .conflict
                        .as_ref()
                        .map(|conflict| format!("{}: {conflict}", symbol.name))
                })
                .collect(),

            Self::Implications {
                outcome: ImplicationOk::Merged {
                    conflict: Some(conflict),
                    ..
                },
                ..
            } => vec![format!("consequent: {conflict}")],

            Self::Implications {
                outcome: ImplicationOk::Refused { conflict },
                ..
            } => vec![format!("consequent: {conflict}, implication not added")],

            Self::Implications { .. } => Vec::default(),
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Symbols(symbols) => {
                let lines = symbols
                    .iter()
                    .map(|symbol| format!("{} = {}", symbol.name, symbol.phoneme))
                    .collect::<Vec<_>>();
                write!(f, "{}", lines.join("\n"))
            }

            Self::Implications { implications, .. } => write_implications(f, implications),
        }
    }
}
