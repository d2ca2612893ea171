//! Reading coefficients from the text a user typed in.

use crate::kind::{EquationKind, UnknownKind};
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    ops::Range,
};

/// Parse a list of coefficients separated by whitespace and/or commas.
///
/// ```rust
/// let got = cramer::parse_coefficients("1, -2.5 3e2").unwrap();
/// assert_eq!(got, vec![1.0, -2.5, 300.0]);
/// ```
pub fn parse_coefficients(src: &str) -> Result<Vec<f64>, ParseError> {
    let mut coefficients = Vec::new();

    for (text, span) in Fields::new(src) {
        match text.parse::<f64>() {
            Ok(value) => coefficients.push(value),
            Err(_) => {
                return Err(ParseError::InvalidNumber {
                    text: text.to_string(),
                    span,
                })
            },
        }
    }

    if coefficients.is_empty() {
        Err(ParseError::Empty)
    } else {
        Ok(coefficients)
    }
}

/// Parse a whole request, the kind of equation followed by its coefficients
/// (e.g. `"2  1 0 3  0 1 5"`).
///
/// Only the text is checked here, the number of coefficients is left to
/// [`crate::solve()`].
pub fn parse_request(
    src: &str,
) -> Result<(EquationKind, Vec<f64>), RequestError> {
    let src = src.trim_start();
    let split = src.find(is_separator).unwrap_or(src.len());
    let (kind, rest) = src.split_at(split);

    let kind: EquationKind = kind.parse()?;
    let coefficients = parse_coefficients(rest)?;

    Ok((kind, coefficients))
}

/// Possible errors that may occur while parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// There weren't any coefficients.
    Empty,
    InvalidNumber {
        text: String,
        span: Range<usize>,
    },
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "No coefficients were provided"),
            ParseError::InvalidNumber { text, span } => write!(
                f,
                "\"{}\" at {}..{} is not a number",
                text, span.start, span.end
            ),
        }
    }
}

impl Error for ParseError {}

/// Errors from [`parse_request()`].
#[derive(Debug, Clone, PartialEq)]
pub enum RequestError {
    Kind(UnknownKind),
    Coefficients(ParseError),
}

impl From<UnknownKind> for RequestError {
    fn from(e: UnknownKind) -> Self { RequestError::Kind(e) }
}

impl From<ParseError> for RequestError {
    fn from(e: ParseError) -> Self { RequestError::Coefficients(e) }
}

impl Display for RequestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::Kind(_) => write!(f, "Unknown equation kind"),
            RequestError::Coefficients(_) => {
                write!(f, "Unable to read the coefficients")
            },
        }
    }
}

impl Error for RequestError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RequestError::Kind(inner) => Some(inner),
            RequestError::Coefficients(inner) => Some(inner),
        }
    }
}

fn is_separator(c: char) -> bool { c.is_whitespace() || c == ',' }

/// An iterator over the non-empty fields in a string, and where they are.
#[derive(Debug, Clone, PartialEq)]
struct Fields<'a> {
    src: &'a str,
    cursor: usize,
}

impl<'a> Fields<'a> {
    fn new(src: &'a str) -> Self { Fields { src, cursor: 0 } }

    fn rest(&self) -> &'a str { &self.src[self.cursor..] }

    fn peek(&self) -> Option<char> { self.rest().chars().next() }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.cursor += c.len_utf8();
        Some(c)
    }

    fn take_while<P>(&mut self, mut predicate: P) -> Range<usize>
    where
        P: FnMut(char) -> bool,
    {
        let start = self.cursor;

        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }

            self.advance();
        }

        start..self.cursor
    }
}

impl<'a> Iterator for Fields<'a> {
    type Item = (&'a str, Range<usize>);

    fn next(&mut self) -> Option<Self::Item> {
        self.take_while(is_separator);

        let span = self.take_while(|c| !is_separator(c));

        if span.start == span.end {
            None
        } else {
            Some((&self.src[span.clone()], span))
        }
    }
}
