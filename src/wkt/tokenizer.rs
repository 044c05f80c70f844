//! WKT lexer

use crate::errors::{CoordError, CoordResult};

/// A lexical token of WKT text
#[derive(Debug, Clone, PartialEq)]
pub enum WktToken {
    /// Keyword such as `POINT` or `EMPTY`, as written
    Word(String),
    Number(f64),
    LeftParen,
    RightParen,
    Comma,
}

/// Split WKT text into tokens; whitespace is insignificant
pub fn tokenize(input: &str) -> CoordResult<Vec<WktToken>> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            c if c.is_whitespace() => i += 1,
            '(' => {
                tokens.push(WktToken::LeftParen);
                i += 1;
            },
            ')' => {
                tokens.push(WktToken::RightParen);
                i += 1;
            },
            ',' => {
                tokens.push(WktToken::Comma);
                i += 1;
            },
            c if c.is_ascii_alphabetic() => {
                let start = i;
                while i < chars.len() && chars[i].is_ascii_alphabetic() {
                    i += 1;
                }
                tokens.push(WktToken::Word(chars[start..i].iter().collect()));
            },
            c if c.is_ascii_digit() || matches!(c, '-' | '+' | '.') => {
                let start = i;
                i += 1;
                while i < chars.len() {
                    let d = chars[i];
                    let exponent_sign = matches!(d, '-' | '+') && matches!(chars[i - 1], 'e' | 'E');
                    if d.is_ascii_digit() || matches!(d, '.' | 'e' | 'E') || exponent_sign {
                        i += 1;
                    } else {
                        break;
                    }
                }
                let text: String = chars[start..i].iter().collect();
                let value = text.parse::<f64>()
                    .map_err(|_| CoordError::MalformedWkt(format!("invalid number '{}'", text)))?;
                if !value.is_finite() {
                    return Err(CoordError::MalformedWkt(format!("number '{}' is not finite", text)));
                }
                tokens.push(WktToken::Number(value));
            },
            other => {
                return Err(CoordError::MalformedWkt(format!("unexpected character '{}'", other)));
            },
        }
    }

    Ok(tokens)
}
