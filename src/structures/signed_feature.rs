//! Signed features are features paired with a (boolean) sign.
//!
//! A sign of `true` is written `+` and a sign of `false` is written `-`.
//!
//! ```rust
//! # use pyre::structures::signed_feature::SignedFeature;
//! let voiced = SignedFeature::new("voice", true);
//!
//! assert!(voiced.sign());
//! assert_eq!(voiced.feature(), "voice");
//! assert_eq!(voiced.negate().to_string(), "-voice");
//! ```
//!
//! Signed features are ordered by feature and then sign, with (the Rust default) `false` before `true`.
//! A collection of signed features which has not been committed to a [Phoneme](crate::structures::phoneme::Phoneme) is called 'raw', and may contain both signs of some feature.

use super::feature::Feature;

/// A feature paired with a sign.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SignedFeature {
    /// The feature.
    feature: Feature,

    /// The sign of the feature.
    sign: bool,
}

impl SignedFeature {
    /// A signed feature, from a feature and a sign.
    pub fn new(feature: impl Into<Feature>, sign: bool) -> Self {
        SignedFeature {
            feature: feature.into(),
            sign,
        }
    }

    /// The signed feature with the same feature and the opposite sign.
    pub fn negate(&self) -> Self {
        SignedFeature {
            feature: self.feature.clone(),
            sign: !self.sign,
        }
    }

    /// The feature.
    pub fn feature(&self) -> &str {
        &self.feature
    }

    /// The sign.
    pub fn sign(&self) -> bool {
        self.sign
    }

    /// Decomposes the signed feature to a (feature, sign) pair.
    pub fn into_parts(self) -> (Feature, bool) {
        (self.feature, self.sign)
    }
}

impl std::fmt::Display for SignedFeature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.sign {
            true => write!(f, "+{}", self.feature),
            false => write!(f, "-{}", self.feature),
        }
    }
}

impl From<(&str, bool)> for SignedFeature {
    fn from((feature, sign): (&str, bool)) -> Self {
        SignedFeature::new(feature, sign)
    }
}
