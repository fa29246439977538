/*!
The rule language, in which each line is a single assertion.

# Grammar

```text
line       := (empty) | list ':' names | names '=' expression | expression '=>' expression | expression '<=' expression
list       := signed+
expression := (signed | '`' name '`')+
signed     := name | '+' name | '-' name
names      := name+
```

- A bare name in a list or expression is a positive feature.
- `` `m` `` is the phoneme bound to the symbol `m`, which must already be defined.
- Within an expression later terms take precedence, so `` `m` -voice `` is a devoiced `m`.
- `#` begins a comment, which runs to the end of the line.

# Examples

| Line | Assertion |
|------|-----------|
| `nasal voice : m n` | merge `[+nasal +voice]` into the symbols `m` and `n`. |
| `` p = `b` -voice `` | merge `` `b` `` with `voice` negated into `p`. |
| `+nasal => +voice` | nasals are voiced. |
| `+voice <= +nasal` | the same implication, written as its converse. |

```rust
# use pyre::config::Config;
# use pyre::db::symbol::SymbolDB;
# use pyre::language::{parse_line, Assertion};
let symbol_db = SymbolDB::new(&Config::default());

let assertion = parse_line("+voice <= +nasal", &symbol_db).unwrap().unwrap();
let Assertion::Implication { left, right, reversed } = assertion else {
    panic!("not an implication")
};
assert!(reversed);
assert_eq!(left.to_string(), "[+voice]");
assert_eq!(right.to_string(), "[+nasal]");
```

Parsing is all-or-nothing for a line.
A syntax error or an unknown symbol results in an error, and no assertion.
*/

pub mod lexer;
mod parser;
pub use parser::parse_line;

use crate::structures::{phoneme::Phoneme, signed_feature::SignedFeature};

/// An assertion, as parsed from a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Assertion {
    /// Merge a raw collection of signed features into each of the target symbols.
    SymbolsFromList {
        features: Vec<SignedFeature>,
        targets: Vec<String>,
    },

    /// Merge a phoneme into each of the target symbols.
    SymbolsFromPhoneme {
        targets: Vec<String>,
        phoneme: Phoneme,
    },

    /// An implication, from left to right, or from right to left if reversed.
    Implication {
        left: Phoneme,
        right: Phoneme,
        reversed: bool,
    },
}
