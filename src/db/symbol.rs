/*!
A database of symbols, each a name bound to a phoneme.

Symbols are created (as the empty phoneme) on first mention, and every later definition merges into the bound phoneme.
Symbols are never deleted, and so a symbol only grows over a session, unless some merge is inconsistent.
In that case the contradicting features are not added, as directed by the [merge policy](crate::config::MergePolicy) of the database.

Phonemes are copied in and out of the database, and so no two symbols (or anything outside the database) share a phoneme.

```rust
# use pyre::config::Config;
# use pyre::db::symbol::SymbolDB;
# use pyre::structures::phoneme::Phoneme;
let mut symbol_db = SymbolDB::new(&Config::default());

assert!(symbol_db.define("m", &Phoneme::from_iter([("nasal", true)])).is_ok());
assert!(symbol_db.define("m", &Phoneme::from_iter([("labial", true)])).is_ok());
assert!(symbol_db.define("m", &Phoneme::from_iter([("nasal", false)])).is_err());

assert_eq!(symbol_db.resolve("m").unwrap().to_string(), "[+labial +nasal]");
```
*/

use std::collections::BTreeMap;

use crate::{
    config::{Config, MergePolicy},
    misc::log::targets::{self},
    structures::{phoneme::Phoneme, signed_feature::SignedFeature},
    types::err::{self},
};

/// The symbol database.
pub struct SymbolDB {
    /// Phonemes, by the name of the symbol they are bound to.
    symbols: BTreeMap<String, Phoneme>,

    /// The policy for inconsistent definitions, derived from the configuration of a context.
    merge_policy: MergePolicy,
}

impl SymbolDB {
    /// A new, empty, [SymbolDB] with a merge policy derived from `config`.
    pub fn new(config: &Config) -> Self {
        SymbolDB {
            symbols: BTreeMap::default(),
            merge_policy: config.merge_policy.value,
        }
    }

    /// A count of defined symbols.
    pub fn count(&self) -> usize {
        self.symbols.len()
    }

    /// Whether `name` has been defined.
    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    /// Merges `delta` into the phoneme bound to `name`, binding `name` to the empty phoneme first if required.
    ///
    /// A conflict is returned if some feature of `delta` contradicts the phoneme.
    /// Even so, the symbol is defined, and any non-conflicting features are added (unless the merge policy is strict).
    pub fn define(&mut self, name: &str, delta: &Phoneme) -> Result<(), err::PhonemeError> {
        let policy = self.merge_policy;
        let result = self.entry(name).merge_by(delta, policy);
        self.note_definition(name, &result);
        result
    }

    /// As [define](SymbolDB::define), though from a raw collection of signed features.
    pub fn define_from_features(
        &mut self,
        name: &str,
        features: &[SignedFeature],
    ) -> Result<(), err::PhonemeError> {
        let policy = self.merge_policy;
        let result = self.entry(name).merge_features_by(features, policy);
        self.note_definition(name, &result);
        result
    }

    /// A copy of the phoneme bound to `name`.
    pub fn resolve(&self, name: &str) -> Result<Phoneme, err::SymbolDBError> {
        match self.symbols.get(name) {
            Some(phoneme) => Ok(phoneme.clone()),
            None => {
                log::info!(target: targets::SYMBOL_DB, "Unknown symbol `{name}`");
                Err(err::SymbolDBError::UnknownSymbol(name.to_owned()))
            }
        }
    }

    /// The symbols of the database, ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Phoneme)> {
        self.symbols
            .iter()
            .map(|(name, phoneme)| (name.as_str(), phoneme))
    }

    fn entry(&mut self, name: &str) -> &mut Phoneme {
        if !self.symbols.contains_key(name) {
            log::trace!(target: targets::SYMBOL_DB, "Fresh symbol `{name}`");
        }
        self.symbols.entry(name.to_owned()).or_default()
    }

    fn note_definition(&self, name: &str, result: &Result<(), err::PhonemeError>) {
        if let Err(e) = result {
            log::warn!(target: targets::SYMBOL_DB, "`{name}`: {e}");
        }
        if let Some(phoneme) = self.symbols.get(name) {
            log::debug!(target: targets::SYMBOL_DB, "`{name}` = {phoneme}");
        }
    }
}
