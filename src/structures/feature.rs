/*!
(The representation of) a feature.

A feature is a binary articulatory property, such as `voice` or `nasal`, identified by name.
No domain of features is declared: any name read is a feature.

Feature names are strings of ASCII alphanumerics together with `.`, `_`, and `'`.
Examples: `voice`, `ATR`, `c.g.`, `high'`.

```rust
# use pyre::structures::feature::{is_feature_name, Feature};
let feature: Feature = "voice".to_string();
assert!(is_feature_name(&feature));
assert!(!is_feature_name("+voice"));
```

The same names are used for symbols, as the two are only distinguished by where they appear in a line.
*/

/// A feature, by name.
pub type Feature = String;

/// Whether `c` may appear in the name of a feature (or symbol).
pub fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '\'')
}

/// Whether `name` is a non-empty string of name characters.
pub fn is_feature_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_name_char)
}
