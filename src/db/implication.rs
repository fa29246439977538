/*!
A database of implications, kept minimal as implications are inserted.

# Dominance

An implication *i* dominates an implication *j* when:
- The antecedent of *i* is ≤ the antecedent of *j*, and so *i* applies whenever *j* applies, and:
- The consequent of *j* is ≤ the consequent of *i*, and so *i* concludes at least as much as *j*.

Any implication dominated by some other implication is redundant.

# Invariants

After every insertion:
- No antecedent contradicts its consequent.
- No stored implication dominates some other stored implication.
- Each antecedent (by value) has exactly one consequent.

# Insertion

On [insertion](ImplicationDB::insert) of an implication *i*:
1. If the antecedent of *i* contradicts its consequent, *i* is rejected.
2. Each stored implication *j* is examined, in order of insertion:
   - If *j* dominates *i*, then *i* is redundant and the database is unchanged.
     In particular, reasserting some stored implication has no effect.
   - If *i* dominates *j*, then *j* is evicted, and examination continues, as *i* may dominate many stored implications.
3. If the antecedent of *i* is the antecedent of some (surviving) stored implication, the consequent of *i* is merged into the consequent of that implication.
   As the merged consequent may be stronger than either consequent, any stored implication the merged implication now dominates is also evicted.
   Otherwise, *i* is stored.

Evictions are only committed once *i* is known to apply.
In particular, if the merge policy is strict and the merge of consequents fails, the insertion is refused and the database is unchanged.

The cost of an insertion is linear in the count of stored implications.
The database is keyed only by antecedent, and no closure of the implications is ever computed.

```rust
# use pyre::config::Config;
# use pyre::db::implication::{ImplicationDB, ImplicationOk};
# use pyre::structures::phoneme::Phoneme;
let mut implication_db = ImplicationDB::new(&Config::default());

let voiced = Phoneme::from_iter([("voice", true)]);
let voiced_labial = Phoneme::from_iter([("voice", true), ("labial", true)]);
let nasal = Phoneme::from_iter([("nasal", true)]);

let _ = implication_db.insert(voiced_labial, nasal.clone());
let result = implication_db.insert(voiced.clone(), nasal.clone());

assert!(matches!(result, Ok(ImplicationOk::Added { evicted }) if evicted.len() == 1));
assert_eq!(implication_db.count(), 1);
assert_eq!(implication_db.consequent_of(&voiced), Some(nasal));
```
*/

use crate::{
    config::{Config, MergePolicy},
    misc::log::targets::{self},
    structures::phoneme::Phoneme,
    types::err::{self},
};

/// An antecedent paired with a consequent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Implication {
    pub antecedent: Phoneme,
    pub consequent: Phoneme,
}

impl Implication {
    pub fn new(antecedent: Phoneme, consequent: Phoneme) -> Self {
        Implication {
            antecedent,
            consequent,
        }
    }

    /// Whether the implication dominates `other`, i.e. the antecedent is no narrower and the consequent no weaker.
    pub fn dominates(&self, other: &Implication) -> bool {
        self.antecedent.is_subset_of(&other.antecedent)
            && other.consequent.is_subset_of(&self.consequent)
    }
}

impl std::fmt::Display for Implication {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} => {}", self.antecedent, self.consequent)
    }
}

/// The ok results of an insertion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImplicationOk {
    /// Some stored implication dominates the implication, and nothing changed.
    Redundant,

    /// The implication was stored, after evicting the implications it dominates.
    Added { evicted: Vec<Implication> },

    /// The consequent of the implication was merged into the consequent stored with the same antecedent, after evicting the implications it dominates.
    ///
    /// If some feature of the consequent contradicted the stored consequent, the conflict is noted.
    Merged {
        evicted: Vec<Implication>,
        conflict: Option<err::PhonemeError>,
    },

    /// The consequent of the implication contradicted the consequent stored with the same antecedent, and as the merge policy is strict nothing changed.
    Refused { conflict: err::PhonemeError },
}

/// The implication database.
pub struct ImplicationDB {
    /// Implications, in order of insertion.
    implications: Vec<Implication>,

    /// The policy for inconsistent merges of consequents, derived from the configuration of a context.
    merge_policy: MergePolicy,
}

impl ImplicationDB {
    /// A new, empty, [ImplicationDB] with a merge policy derived from `config`.
    pub fn new(config: &Config) -> Self {
        ImplicationDB {
            implications: Vec::default(),
            merge_policy: config.merge_policy.value,
        }
    }

    /// A count of stored implications.
    pub fn count(&self) -> usize {
        self.implications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.implications.is_empty()
    }

    /// The stored implications, in order of insertion.
    pub fn iter(&self) -> impl Iterator<Item = &Implication> {
        self.implications.iter()
    }

    /// A copy of the consequent stored with exactly the given antecedent, if any.
    pub fn consequent_of(&self, antecedent: &Phoneme) -> Option<Phoneme> {
        self.implications
            .iter()
            .find(|implication| implication.antecedent == *antecedent)
            .map(|implication| implication.consequent.clone())
    }

    /// Inserts the implication from `antecedent` to `consequent`, maintaining the invariants of the database.
    ///
    /// See the [module](self) documentation for details.
    pub fn insert(
        &mut self,
        antecedent: Phoneme,
        consequent: Phoneme,
    ) -> Result<ImplicationOk, err::ImplicationDBError> {
        if antecedent.contradicts(&consequent) {
            log::info!(target: targets::IMPLICATION_DB, "Rejected {antecedent} => {consequent}");
            return Err(err::ImplicationDBError::SelfContradiction);
        }

        let fresh = Implication::new(antecedent, consequent);

        let mut dominated = Vec::default();
        for (index, stored) in self.implications.iter().enumerate() {
            if stored.dominates(&fresh) {
                log::debug!(target: targets::IMPLICATION_DB, "{fresh} is redundant given {stored}");
                return Ok(ImplicationOk::Redundant);
            }
            if fresh.dominates(stored) {
                dominated.push(index);
            }
        }

        let policy = self.merge_policy;
        let existing = self
            .implications
            .iter()
            .enumerate()
            .find(|(index, stored)| {
                stored.antecedent == fresh.antecedent && !dominated.contains(index)
            })
            .map(|(index, _)| index);

        match existing {
            Some(index) => {
                let mut consequent = self.implications[index].consequent.clone();
                let conflict = consequent.merge_by(&fresh.consequent, policy).err();

                if let (MergePolicy::Strict, Some(conflict)) = (policy, &conflict) {
                    log::warn!(target: targets::IMPLICATION_DB, "Refused {fresh}: {conflict}");
                    return Ok(ImplicationOk::Refused {
                        conflict: conflict.clone(),
                    });
                }
                if let Some(e) = &conflict {
                    log::warn!(target: targets::IMPLICATION_DB, "Merge into {}: {e}", self.implications[index]);
                }

                let shift = dominated.iter().filter(|evicted| **evicted < index).count();
                let mut evicted = self.evict_indices(dominated, &fresh);

                let index = index - shift;
                self.implications[index].consequent = consequent;
                let merged = self.implications[index].clone();
                log::debug!(target: targets::IMPLICATION_DB, "Merged to {merged}");

                // The merged consequent may be stronger than either consequent alone.
                self.evict_dominated_by(&merged, &mut evicted);

                Ok(ImplicationOk::Merged { evicted, conflict })
            }

            None => {
                let evicted = self.evict_indices(dominated, &fresh);
                log::debug!(target: targets::IMPLICATION_DB, "Added {fresh}");
                self.implications.push(fresh);
                Ok(ImplicationOk::Added { evicted })
            }
        }
    }

    /// Removes the stored implications at `indices`, each dominated by `dominant`.
    ///
    /// Indices must be ascending.
    fn evict_indices(&mut self, indices: Vec<usize>, dominant: &Implication) -> Vec<Implication> {
        // Removal from the back keeps the remaining indices valid.
        let mut evicted = Vec::with_capacity(indices.len());
        for index in indices.into_iter().rev() {
            let stored = self.implications.remove(index);
            log::debug!(target: targets::IMPLICATION_DB, "Evicted {stored} given {dominant}");
            evicted.push(stored);
        }
        evicted.reverse();
        evicted
    }

    /// Removes every stored implication dominated by `dominant`, other than `dominant` itself.
    fn evict_dominated_by(&mut self, dominant: &Implication, evicted: &mut Vec<Implication>) {
        let mut index = 0;
        while index < self.implications.len() {
            let stored = &self.implications[index];
            if stored != dominant && dominant.dominates(stored) {
                let stored = self.implications.remove(index);
                log::debug!(target: targets::IMPLICATION_DB, "Evicted {stored} given {dominant}");
                evicted.push(stored);
            } else {
                index += 1;
            }
        }
    }
}

impl std::fmt::Display for ImplicationDB {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_implications(f, &self.implications)
    }
}

/// Writes implications one per line within braces, or `{}` if there are none.
pub(crate) fn write_implications(
    f: &mut std::fmt::Formatter<'_>,
    implications: &[Implication],
) -> std::fmt::Result {
    if implications.is_empty() {
        return write!(f, "{{}}");
    }
    writeln!(f, "{{")?;
    for implication in implications {
        writeln!(f, "  {implication}")?;
    }
    write!(f, "}}")
}
