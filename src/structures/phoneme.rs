/*!
Phonemes, aka. partial maps from features to signs.

A phoneme is a set of signed features, with at most one sign for each feature.
Features absent from a phoneme are unspecified (for example, the place of articulation of the Japanese moraic n), and unspecified is never a third sign.

# Order

Phonemes are partially ordered by ≤, where *A* ≤ *B* just in case every feature of *A* appears in *B* with the same sign.
So, *B* entails everything *A* states, and perhaps more.

```rust
# use pyre::structures::phoneme::Phoneme;
let voiced = Phoneme::from_iter([("voice", true)]);
let m = Phoneme::from_iter([("voice", true), ("nasal", true), ("labial", true)]);

assert!(voiced.is_subset_of(&m));
assert!(!m.is_subset_of(&voiced));
assert!(Phoneme::default().is_subset_of(&voiced));
```

Phonemes also derive [Ord], by their sorted signed features, so they may be used as keys.
This total order is unrelated to ≤.

# Merging

A merge unions the signed features of some other phoneme (or some raw collection of signed features) into a phoneme.
If some feature is opposite-signed in the two, the merge is inconsistent, and the conflicting features are reported as a [PhonemeError::Conflict](err::PhonemeError::Conflict).
There are two policies for an inconsistent merge:
- [merge](Phoneme::merge) skips the conflicting features and applies the rest.
- [try_merge](Phoneme::try_merge) applies nothing.

In either case the features of the receiver are never changed by a merge, only added to.

```rust
# use pyre::structures::phoneme::Phoneme;
let mut m = Phoneme::from_iter([("nasal", true)]);
assert!(m.merge(&Phoneme::from_iter([("labial", true)])).is_ok());

let conflict = Phoneme::from_iter([("nasal", false), ("voice", true)]);
assert!(m.merge(&conflict).is_err());
assert_eq!(m.to_string(), "[+labial +nasal +voice]");
```
*/

use std::collections::BTreeMap;

use crate::{
    config::MergePolicy,
    structures::{feature::Feature, signed_feature::SignedFeature},
    types::err::{self},
};

/// A partial map from features to signs.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Phoneme {
    features: BTreeMap<Feature, bool>,
}

impl Phoneme {
    /// The sign of `feature`, if specified.
    pub fn sign_of(&self, feature: &str) -> Option<bool> {
        self.features.get(feature).copied()
    }

    /// A count of specified features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether no feature is specified.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// The signed features of the phoneme, ordered by feature.
    pub fn signed_features(&self) -> impl Iterator<Item = SignedFeature> + '_ {
        self.features
            .iter()
            .map(|(feature, sign)| SignedFeature::new(feature.as_str(), *sign))
    }

    /// Sets the sign of a feature, returning the previous sign (if any).
    pub fn insert(&mut self, signed_feature: SignedFeature) -> Option<bool> {
        let (feature, sign) = signed_feature.into_parts();
        self.features.insert(feature, sign)
    }

    /// Whether some feature appears in both phonemes with opposite signs.
    ///
    /// Symmetric.
    pub fn contradicts(&self, other: &Phoneme) -> bool {
        let (small, large) = match self.len() <= other.len() {
            true => (self, other),
            false => (other, self),
        };
        small
            .features
            .iter()
            .any(|(feature, sign)| matches!(large.sign_of(feature), Some(s) if s != *sign))
    }

    /// Whether some member of a raw collection of signed features has the opposite sign in the phoneme.
    pub fn contradicts_features(&self, features: &[SignedFeature]) -> bool {
        features
            .iter()
            .any(|sf| matches!(self.sign_of(sf.feature()), Some(s) if s != sf.sign()))
    }

    /// The signed features of `other` which contradict the phoneme.
    pub fn conflicts_with(&self, other: &Phoneme) -> Vec<SignedFeature> {
        other
            .signed_features()
            .filter(|sf| matches!(self.sign_of(sf.feature()), Some(s) if s != sf.sign()))
            .collect()
    }

    /// The members of a raw collection of signed features which contradict the phoneme.
    pub fn conflicts_with_features(&self, features: &[SignedFeature]) -> Vec<SignedFeature> {
        features
            .iter()
            .filter(|sf| matches!(self.sign_of(sf.feature()), Some(s) if s != sf.sign()))
            .cloned()
            .collect()
    }

    /// The ≤ relation: whether every feature of the phoneme appears in `other` with the same sign.
    pub fn is_subset_of(&self, other: &Phoneme) -> bool {
        self.len() <= other.len()
            && self
                .features
                .iter()
                .all(|(feature, sign)| other.sign_of(feature) == Some(*sign))
    }

    /// Whether every feature of the phoneme appears in a raw collection of signed features with the same sign.
    pub fn is_subset_of_features(&self, features: &[SignedFeature]) -> bool {
        self.features.iter().all(|(feature, sign)| {
            features
                .iter()
                .any(|sf| sf.feature() == feature && sf.sign() == *sign)
        })
    }

    /// Unions the features of `other` into the phoneme, skipping any feature which contradicts the phoneme.
    ///
    /// If any feature was skipped, the skipped features are returned as a conflict.
    pub fn merge(&mut self, other: &Phoneme) -> Result<(), err::PhonemeError> {
        let conflicts = self.conflicts_with(other);
        for (feature, sign) in &other.features {
            self.features.entry(feature.clone()).or_insert(*sign);
        }
        match conflicts.is_empty() {
            true => Ok(()),
            false => Err(err::PhonemeError::Conflict(conflicts)),
        }
    }

    /// Unions the features of `other` into the phoneme, unless some feature contradicts the phoneme.
    pub fn try_merge(&mut self, other: &Phoneme) -> Result<(), err::PhonemeError> {
        if self.contradicts(other) {
            return Err(err::PhonemeError::Conflict(self.conflicts_with(other)));
        }
        self.overwrite(other);
        Ok(())
    }

    /// Adds a raw collection of signed features to the phoneme, skipping any which contradict the phoneme.
    ///
    /// Members are added in order, so a member contradicting an earlier member of the collection is also skipped.
    pub fn merge_features(&mut self, features: &[SignedFeature]) -> Result<(), err::PhonemeError> {
        let mut conflicts = Vec::default();
        for sf in features {
            match self.sign_of(sf.feature()) {
                Some(sign) if sign != sf.sign() => conflicts.push(sf.clone()),
                Some(_) => {}
                None => {
                    self.insert(sf.clone());
                }
            }
        }
        match conflicts.is_empty() {
            true => Ok(()),
            false => Err(err::PhonemeError::Conflict(conflicts)),
        }
    }

    /// Adds a raw collection of signed features to the phoneme, unless some member would be skipped by [merge_features](Phoneme::merge_features).
    pub fn try_merge_features(
        &mut self,
        features: &[SignedFeature],
    ) -> Result<(), err::PhonemeError> {
        let mut candidate = self.clone();
        candidate.merge_features(features)?;
        *self = candidate;
        Ok(())
    }

    /// Merges `other` into the phoneme, as directed by `policy`.
    pub fn merge_by(&mut self, other: &Phoneme, policy: MergePolicy) -> Result<(), err::PhonemeError> {
        match policy {
            MergePolicy::Skip => self.merge(other),
            MergePolicy::Strict => self.try_merge(other),
        }
    }

    /// Merges a raw collection of signed features into the phoneme, as directed by `policy`.
    pub fn merge_features_by(
        &mut self,
        features: &[SignedFeature],
        policy: MergePolicy,
    ) -> Result<(), err::PhonemeError> {
        match policy {
            MergePolicy::Skip => self.merge_features(features),
            MergePolicy::Strict => self.try_merge_features(features),
        }
    }

    /// Unions the features of `other` into the phoneme, with the signs of `other` taking precedence.
    pub fn overwrite(&mut self, other: &Phoneme) {
        for (feature, sign) in &other.features {
            self.features.insert(feature.clone(), *sign);
        }
    }
}

impl<S: Into<SignedFeature>> FromIterator<S> for Phoneme {
    /// A phoneme from some signed features, where later signs overwrite earlier signs.
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut phoneme = Phoneme::default();
        for sf in iter {
            phoneme.insert(sf.into());
        }
        phoneme
    }
}

impl std::fmt::Display for Phoneme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let signed = self
            .signed_features()
            .map(|sf| sf.to_string())
            .collect::<Vec<_>>();
        write!(f, "[{}]", signed.join(" "))
    }
}
