/*!
The context --- to which lines are read and within which symbols and implications are stored.

Strictly, a [Context] and a [SharedContext].

A context is a value owned by the caller, and so any number of independent sessions may be held at once.
A shared context is a context behind a lock, for use by concurrent callers.

# Example
```rust
# use pyre::config::Config;
# use pyre::context::Context;
let mut the_context = Context::from_config(Config::default());

assert!(the_context.read_line("nasal : m").is_ok());
assert!(the_context.read_line("labial : m").is_ok());

let report = the_context.read_line("`m` => +voice").unwrap().unwrap();
assert_eq!(report.to_string(), "{\n  [+labial +nasal] => [+voice]\n}");

// An empty line has no effect.
assert_eq!(the_context.read_line(""), Ok(None));

// An unknown symbol abandons the line.
assert!(the_context.read_line("`n` => +voice").is_err());
assert_eq!(the_context.implication_db.count(), 1);
```
*/

mod shared;
pub use shared::SharedContext;

use crate::{
    config::Config,
    db::{
        implication::{ImplicationDB, ImplicationOk},
        symbol::SymbolDB,
    },
    language::{parse_line, Assertion},
    misc::log::targets::{self},
    reports::{Report, SymbolReport},
    structures::phoneme::Phoneme,
    types::err::{self},
};

/// A session: the configuration, the symbol database, and the implication database.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// The symbols of the context.
    pub symbol_db: SymbolDB,

    /// The implications of the context.
    pub implication_db: ImplicationDB,
}

impl Default for Context {
    fn default() -> Self {
        Context::from_config(Config::default())
    }
}

impl Context {
    /// A fresh context, with empty databases configured by `config`.
    pub fn from_config(config: Config) -> Self {
        Context {
            symbol_db: SymbolDB::new(&config),
            implication_db: ImplicationDB::new(&config),
            config,
        }
    }

    /// Parses `line` and applies the resulting assertion, if any.
    ///
    /// On error the context is unchanged.
    pub fn read_line(&mut self, line: &str) -> Result<Option<Report>, err::ErrorKind> {
        let assertion = match parse_line(line, &self.symbol_db) {
            Ok(Some(assertion)) => assertion,
            Ok(None) => return Ok(None),
            Err(e) => {
                log::info!(target: targets::CONTEXT, "Line abandoned: {e}");
                return Err(e);
            }
        };
        self.apply(assertion).map(Some)
    }

    /// Applies an assertion to the context.
    pub fn apply(&mut self, assertion: Assertion) -> Result<Report, err::ErrorKind> {
        match assertion {
            Assertion::SymbolsFromList { features, targets } => {
                let reports = targets
                    .into_iter()
                    .map(|name| {
                        let conflict = self.symbol_db.define_from_features(&name, &features).err();
                        self.symbol_report(name, conflict)
                    })
                    .collect();
                Ok(Report::Symbols(reports))
            }

            Assertion::SymbolsFromPhoneme { targets, phoneme } => {
                let reports = targets
                    .into_iter()
                    .map(|name| {
                        let conflict = self.symbol_db.define(&name, &phoneme).err();
                        self.symbol_report(name, conflict)
                    })
                    .collect();
                Ok(Report::Symbols(reports))
            }

            Assertion::Implication {
                left,
                right,
                reversed,
            } => {
                let (antecedent, consequent) = match reversed {
                    true => (right, left),
                    false => (left, right),
                };
                let outcome = self.insert_implication(antecedent, consequent)?;
                Ok(Report::Implications {
                    outcome,
                    implications: self.implication_db.iter().cloned().collect(),
                })
            }
        }
    }

    /// Merges `delta` into the symbol `name`, returning any soft conflict.
    pub fn define_symbol(&mut self, name: &str, delta: &Phoneme) -> Result<(), err::PhonemeError> {
        self.symbol_db.define(name, delta)
    }

    /// A copy of the phoneme bound to the symbol `name`.
    pub fn resolve_symbol(&self, name: &str) -> Result<Phoneme, err::SymbolDBError> {
        self.symbol_db.resolve(name)
    }

    /// Inserts the implication from `antecedent` to `consequent`.
    pub fn insert_implication(
        &mut self,
        antecedent: Phoneme,
        consequent: Phoneme,
    ) -> Result<ImplicationOk, err::ImplicationDBError> {
        let outcome = self.implication_db.insert(antecedent, consequent);
        log::trace!(target: targets::CONTEXT, "Insertion: {outcome:?}");
        outcome
    }

    fn symbol_report(&self, name: String, conflict: Option<err::PhonemeError>) -> SymbolReport {
        SymbolReport {
            phoneme: self.symbol_db.resolve(&name).unwrap_or_default(),
            name,
            conflict,
        }
    }
}
