//! Tokenizer for free-form coordinate strings
//!
//! Splits text such as `40°26'46"N 79°58'56"W` or `40.4461, -79.9822`
//! into numbers, unit marks, hemisphere letters and group separators.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::errors::{CoordError, CoordResult};

/// Explicit sign written in front of a number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Unsigned,
    Plus,
    Minus,
}

/// Angle unit mark following a number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Unit {
    Degrees,
    Minutes,
    Seconds,
}

/// Hemisphere indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Whether this letter marks a latitude (N/S) rather than a longitude
    pub fn is_latitude(&self) -> bool {
        matches!(self, Hemisphere::North | Hemisphere::South)
    }

    /// Whether values in this hemisphere are negative
    pub fn is_negative(&self) -> bool {
        matches!(self, Hemisphere::South | Hemisphere::West)
    }

    fn from_word(word: &str) -> Option<Self> {
        match word.to_uppercase().as_str() {
            "N" | "NORTH" => Some(Hemisphere::North),
            "S" | "SOUTH" => Some(Hemisphere::South),
            "E" | "EAST" => Some(Hemisphere::East),
            "W" | "WEST" => Some(Hemisphere::West),
            _ => None,
        }
    }
}

/// A lexical token of a free-form coordinate string
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Unsigned decimal text (digits with at most one point) and its sign
    Number { text: String, sign: Sign },
    Unit(Unit),
    Hemisphere(Hemisphere),
    /// `,` `;` or `/` between the two angles
    Separator,
}

/// Split a free-form coordinate string into tokens
pub fn tokenize(input: &str) -> CoordResult<Vec<Token>> {
    let mut chars = input.char_indices().peekable();
    let mut tokens = Vec::new();

    while let Some(&(pos, c)) = chars.peek() {
        match c {
            c if c.is_whitespace() || c == ':' => {
                chars.next();
            },
            '+' | '-' | '\u{2212}' => {
                chars.next();
                let sign = if c == '+' { Sign::Plus } else { Sign::Minus };
                match chars.peek() {
                    Some(&(_, d)) if d.is_ascii_digit() || d == '.' => {
                        let text = read_number(&mut chars)?;
                        tokens.push(Token::Number { text, sign });
                    },
                    _ => return Err(malformed(format!("sign at position {} is not followed by a number", pos))),
                }
            },
            c if c.is_ascii_digit() || c == '.' => {
                let text = read_number(&mut chars)?;
                tokens.push(Token::Number { text, sign: Sign::Unsigned });
            },
            '°' | 'º' | '˚' => {
                chars.next();
                tokens.push(Token::Unit(Unit::Degrees));
            },
            '\'' | '′' | '’' | '‘' => {
                chars.next();
                // Two apostrophes are a common stand-in for the seconds mark
                if c == '\'' && matches!(chars.peek(), Some(&(_, '\''))) {
                    chars.next();
                    tokens.push(Token::Unit(Unit::Seconds));
                } else {
                    tokens.push(Token::Unit(Unit::Minutes));
                }
            },
            '"' | '″' | '”' | '“' => {
                chars.next();
                tokens.push(Token::Unit(Unit::Seconds));
            },
            ',' | ';' | '/' => {
                chars.next();
                tokens.push(Token::Separator);
            },
            c if c.is_alphabetic() => {
                let mut word = String::new();
                while let Some(&(_, l)) = chars.peek() {
                    if !l.is_alphabetic() {
                        break;
                    }
                    word.push(l);
                    chars.next();
                }
                let hemisphere = Hemisphere::from_word(&word)
                    .ok_or_else(|| malformed(format!("unexpected word '{}'", word)))?;
                tokens.push(Token::Hemisphere(hemisphere));
            },
            other => return Err(malformed(format!("unexpected character '{}' at position {}", other, pos))),
        }
    }

    Ok(tokens)
}

fn read_number(chars: &mut Peekable<CharIndices<'_>>) -> CoordResult<String> {
    let mut text = String::new();
    let mut seen_point = false;

    while let Some(&(_, c)) = chars.peek() {
        if c.is_ascii_digit() {
            text.push(c);
        } else if c == '.' && !seen_point {
            seen_point = true;
            text.push(c);
        } else {
            break;
        }
        chars.next();
    }

    if !text.chars().any(|c| c.is_ascii_digit()) {
        return Err(malformed(format!("'{}' is not a number", text)));
    }
    Ok(text)
}

fn malformed(msg: String) -> CoordError {
    CoordError::MalformedCoordinateString(msg)
}
