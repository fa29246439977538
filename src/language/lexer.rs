//! Lexing of a line into tokens.

use crate::{
    structures::feature::{is_feature_name, is_name_char},
    types::err::{self},
};

/// The tokens of a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// A feature or symbol name.
    Name(String),

    /// `+`
    Plus,

    /// `-`
    Minus,

    /// A symbol name between backticks.
    Dereference(String),

    /// `:`
    Colon,

    /// `=`
    Equals,

    /// `=>`
    RightArrow,

    /// `<=`
    LeftArrow,
}

impl Token {
    /// Whether the token separates the two sides of a line.
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            Self::Colon | Self::Equals | Self::RightArrow | Self::LeftArrow
        )
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Dereference(name) => write!(f, "`{name}`"),
            Self::Colon => write!(f, ":"),
            Self::Equals => write!(f, "="),
            Self::RightArrow => write!(f, "=>"),
            Self::LeftArrow => write!(f, "<="),
        }
    }
}

/// A token, with the byte offset of its first character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexeme {
    pub token: Token,
    pub position: usize,
}

impl Lexeme {
    /// A parse error noting the lexeme is out of place.
    pub fn unexpected(&self) -> err::ParseError {
        err::ParseError::UnexpectedToken {
            position: self.position,
            token: self.token.to_string(),
        }
    }
}

/// Lexes `line`, ignoring whitespace and anything following a `#`.
pub fn lex(line: &str) -> Result<Vec<Lexeme>, err::ParseError> {
    let mut lexemes = Vec::default();
    let mut chars = line.char_indices().peekable();

    while let Some((position, character)) = chars.next() {
        let token = match character {
            '#' => break,

            c if c.is_whitespace() => continue,

            '+' => Token::Plus,

            '-' => Token::Minus,

            ':' => Token::Colon,

            '=' => match chars.peek() {
                Some((_, '>')) => {
                    chars.next();
                    Token::RightArrow
                }
                _ => Token::Equals,
            },

            '<' => match chars.peek() {
                Some((_, '=')) => {
                    chars.next();
                    Token::LeftArrow
                }
                _ => return Err(err::ParseError::IllegalCharacter { position, character }),
            },

            '`' => {
                let mut name = String::default();
                let mut closed = false;
                for (inner_position, inner) in chars.by_ref() {
                    match inner {
                        '`' => {
                            closed = true;
                            break;
                        }
                        c if is_name_char(c) => name.push(c),
                        c => {
                            return Err(err::ParseError::IllegalCharacter {
                                position: inner_position,
                                character: c,
                            })
                        }
                    }
                }
                if !closed {
                    return Err(err::ParseError::UnterminatedDereference { position });
                }
                if !is_feature_name(&name) {
                    return Err(err::ParseError::UnexpectedToken {
                        position,
                        token: "``".to_string(),
                    });
                }
                Token::Dereference(name)
            }

            c if is_name_char(c) => {
                let mut name = String::from(c);
                while let Some((_, next)) = chars.peek() {
                    match is_name_char(*next) {
                        true => {
                            name.push(*next);
                            chars.next();
                        }
                        false => break,
                    }
                }
                Token::Name(name)
            }

            _ => return Err(err::ParseError::IllegalCharacter { position, character }),
        };

        lexemes.push(Lexeme { token, position });
    }

    Ok(lexemes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(line: &str) -> Vec<Token> {
        lex(line)
            .unwrap()
            .into_iter()
            .map(|lexeme| lexeme.token)
            .collect()
    }

    #[test]
    fn arrows() {
        assert_eq!(
            tokens("a=>b<=c=d"),
            vec![
                Token::Name("a".to_string()),
                Token::RightArrow,
                Token::Name("b".to_string()),
                Token::LeftArrow,
                Token::Name("c".to_string()),
                Token::Equals,
                Token::Name("d".to_string()),
            ]
        );
    }

    #[test]
    fn signs_and_names() {
        assert_eq!(
            tokens("+voice -c.g. high'"),
            vec![
                Token::Plus,
                Token::Name("voice".to_string()),
                Token::Minus,
                Token::Name("c.g.".to_string()),
                Token::Name("high'".to_string()),
            ]
        );
    }

    #[test]
    fn dereference() {
        assert_eq!(tokens("`m` # note"), vec![Token::Dereference("m".to_string())]);
        assert_eq!(
            lex("x = `m"),
            Err(err::ParseError::UnterminatedDereference { position: 4 })
        );
    }

    #[test]
    fn illegal_character() {
        assert_eq!(
            lex("m = +voice ?"),
            Err(err::ParseError::IllegalCharacter {
                position: 11,
                character: '?'
            })
        );
        assert!(lex("a < b").is_err());
    }

    #[test]
    fn positions() {
        let lexemes = lex("  m : n").unwrap();
        let positions = lexemes.iter().map(|l| l.position).collect::<Vec<_>>();
        assert_eq!(positions, vec![2, 4, 6]);
    }
}
