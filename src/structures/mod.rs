//! Key structures: features, signed features, and phonemes.
//!
//! # Other structures without an implementation.
//!
//! ## Implications
//!
//! An implication is a pair of phonemes, an antecedent and a consequent, read as: any phoneme at least as specific as the antecedent also satisfies the consequent.
//! Implications are only ever stored, and so are defined alongside the [implication database](crate::db::implication).
//!
//! ## Symbols
//!
//! A symbol is a name bound to a phoneme, such as `m` bound to `[+labial +nasal +voice]`.
//! As with implications, symbols only exist in a [database](crate::db::symbol).

pub mod feature;
pub mod phoneme;
pub mod signed_feature;
