//! Parsing of lexed lines into assertions.

use crate::{
    db::symbol::SymbolDB,
    misc::log::targets::{self},
    structures::{phoneme::Phoneme, signed_feature::SignedFeature},
    types::err::{self},
};

use super::{
    lexer::{lex, Lexeme, Token},
    Assertion,
};

/// Parses `line` to an assertion, resolving any dereferenced symbol through `symbol_db`.
///
/// Returns `None` if the line contains no tokens.
pub fn parse_line(line: &str, symbol_db: &SymbolDB) -> Result<Option<Assertion>, err::ErrorKind> {
    let lexemes = lex(line)?;
    if lexemes.is_empty() {
        return Ok(None);
    }

    let mut operators = lexemes
        .iter()
        .enumerate()
        .filter(|(_, lexeme)| lexeme.token.is_operator());

    let (split, operator) = match operators.next() {
        Some(found) => found,
        None => return Err(err::ParseError::MissingOperator.into()),
    };

    if let Some((_, extra)) = operators.next() {
        return Err(extra.unexpected().into());
    }

    let left = &lexemes[..split];
    let right = &lexemes[split + 1..];

    if left.is_empty() {
        return Err(operator.unexpected().into());
    }
    if right.is_empty() {
        return Err(err::ParseError::UnexpectedEnd.into());
    }

    let assertion = match operator.token {
        Token::Colon => Assertion::SymbolsFromList {
            features: signed_features(left, Some(operator))?,
            targets: names(right)?,
        },

        Token::Equals => Assertion::SymbolsFromPhoneme {
            targets: names(left)?,
            phoneme: expression(right, None, symbol_db)?,
        },

        Token::RightArrow | Token::LeftArrow => Assertion::Implication {
            left: expression(left, Some(operator), symbol_db)?,
            right: expression(right, None, symbol_db)?,
            reversed: operator.token == Token::LeftArrow,
        },

        _ => return Err(operator.unexpected().into()),
    };

    log::trace!(target: targets::PARSE, "{line:?} parsed to {assertion:?}");
    Ok(Some(assertion))
}

/// A term of an expression, prior to resolution of symbols.
enum Term {
    Signed(SignedFeature),
    Dereference(String),
}

/// Splits a side of a line into terms.
///
/// `boundary` is the lexeme following the side, if any, and is used to report a sign without a feature.
fn terms(side: &[Lexeme], boundary: Option<&Lexeme>) -> Result<Vec<Term>, err::ParseError> {
    let mut terms = Vec::with_capacity(side.len());
    let mut lexemes = side.iter().peekable();

    while let Some(lexeme) = lexemes.next() {
        let term = match &lexeme.token {
            Token::Name(name) => Term::Signed(SignedFeature::new(name.as_str(), true)),

            Token::Dereference(name) => Term::Dereference(name.clone()),

            Token::Plus | Token::Minus => {
                let sign = lexeme.token == Token::Plus;
                match lexemes.next() {
                    Some(Lexeme {
                        token: Token::Name(name),
                        ..
                    }) => Term::Signed(SignedFeature::new(name.as_str(), sign)),

                    Some(other) => return Err(other.unexpected()),

                    None => match boundary {
                        Some(next) => return Err(next.unexpected()),
                        None => return Err(err::ParseError::UnexpectedEnd),
                    },
                }
            }

            _ => return Err(lexeme.unexpected()),
        };
        terms.push(term);
    }

    Ok(terms)
}

/// A raw collection of signed features, with no dereferences permitted.
fn signed_features(
    side: &[Lexeme],
    boundary: Option<&Lexeme>,
) -> Result<Vec<SignedFeature>, err::ParseError> {
    if let Some(lexeme) = side
        .iter()
        .find(|lexeme| matches!(lexeme.token, Token::Dereference(_)))
    {
        return Err(lexeme.unexpected());
    }

    let features = terms(side, boundary)?
        .into_iter()
        .filter_map(|term| match term {
            Term::Signed(sf) => Some(sf),
            Term::Dereference(_) => None,
        })
        .collect();
    Ok(features)
}

/// A phoneme built from the terms of `side`, where later terms take precedence over earlier terms.
fn expression(
    side: &[Lexeme],
    boundary: Option<&Lexeme>,
    symbol_db: &SymbolDB,
) -> Result<Phoneme, err::ErrorKind> {
    let mut phoneme = Phoneme::default();
    for term in terms(side, boundary)? {
        match term {
            Term::Signed(sf) => {
                phoneme.insert(sf);
            }
            Term::Dereference(name) => phoneme.overwrite(&symbol_db.resolve(&name)?),
        }
    }
    Ok(phoneme)
}

/// Distinct symbol names, in order of first occurrence.
fn names(side: &[Lexeme]) -> Result<Vec<String>, err::ParseError> {
    let mut names: Vec<String> = Vec::with_capacity(side.len());
    for lexeme in side {
        match &lexeme.token {
            Token::Name(name) => {
                if !names.contains(name) {
                    names.push(name.clone());
                }
            }
            _ => return Err(lexeme.unexpected()),
        }
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn phoneme(features: &[(&str, bool)]) -> Phoneme {
        features.iter().copied().collect()
    }

    fn parse(line: &str) -> Result<Option<Assertion>, err::ErrorKind> {
        parse_line(line, &SymbolDB::new(&Config::default()))
    }

    #[test]
    fn empty_lines() {
        assert_eq!(parse(""), Ok(None));
        assert_eq!(parse("   \t"), Ok(None));
        assert_eq!(parse("# a comment"), Ok(None));
    }

    #[test]
    fn list_definition() {
        assert_eq!(
            parse("nasal -syllabic : m n m"),
            Ok(Some(Assertion::SymbolsFromList {
                features: vec![
                    SignedFeature::new("nasal", true),
                    SignedFeature::new("syllabic", false)
                ],
                targets: vec!["m".to_string(), "n".to_string()],
            }))
        );
    }

    #[test]
    fn phoneme_definition() {
        assert_eq!(
            parse("p b = +labial -continuant"),
            Ok(Some(Assertion::SymbolsFromPhoneme {
                targets: vec!["p".to_string(), "b".to_string()],
                phoneme: phoneme(&[("labial", true), ("continuant", false)]),
            }))
        );
    }

    #[test]
    fn later_terms_take_precedence() {
        assert_eq!(
            parse("x = +voice -voice"),
            Ok(Some(Assertion::SymbolsFromPhoneme {
                targets: vec!["x".to_string()],
                phoneme: phoneme(&[("voice", false)]),
            }))
        );
    }

    #[test]
    fn implications() {
        assert_eq!(
            parse("nasal => +voice"),
            Ok(Some(Assertion::Implication {
                left: phoneme(&[("nasal", true)]),
                right: phoneme(&[("voice", true)]),
                reversed: false,
            }))
        );
        assert_eq!(
            parse("+voice <= nasal"),
            Ok(Some(Assertion::Implication {
                left: phoneme(&[("voice", true)]),
                right: phoneme(&[("nasal", true)]),
                reversed: true,
            }))
        );
    }

    #[test]
    fn dereference() {
        let mut symbol_db = SymbolDB::new(&Config::default());
        let _ = symbol_db.define("m", &phoneme(&[("nasal", true), ("labial", true)]));

        assert_eq!(
            parse_line("`m` => +voice", &symbol_db),
            Ok(Some(Assertion::Implication {
                left: phoneme(&[("nasal", true), ("labial", true)]),
                right: phoneme(&[("voice", true)]),
                reversed: false,
            }))
        );

        assert_eq!(
            parse_line("x = `n`", &symbol_db),
            Err(err::ErrorKind::SymbolDB(err::SymbolDBError::UnknownSymbol(
                "n".to_string()
            )))
        );
    }

    #[test]
    fn syntax_errors() {
        assert_eq!(
            parse("voice nasal"),
            Err(err::ErrorKind::Parse(err::ParseError::MissingOperator))
        );

        assert_eq!(
            parse("a => b => c"),
            Err(err::ErrorKind::Parse(err::ParseError::UnexpectedToken {
                position: 7,
                token: "=>".to_string()
            }))
        );

        assert_eq!(
            parse("m ="),
            Err(err::ErrorKind::Parse(err::ParseError::UnexpectedEnd))
        );

        assert_eq!(
            parse(": m"),
            Err(err::ErrorKind::Parse(err::ParseError::UnexpectedToken {
                position: 0,
                token: ":".to_string()
            }))
        );

        assert_eq!(
            parse("+voice - : m"),
            Err(err::ErrorKind::Parse(err::ParseError::UnexpectedToken {
                position: 9,
                token: ":".to_string()
            }))
        );

        assert_eq!(
            parse("+m = voice"),
            Err(err::ErrorKind::Parse(err::ParseError::UnexpectedToken {
                position: 0,
                token: "+".to_string()
            }))
        );

        assert_eq!(
            parse("voice : +m"),
            Err(err::ErrorKind::Parse(err::ParseError::UnexpectedToken {
                position: 8,
                token: "+".to_string()
            }))
        );
    }
}
