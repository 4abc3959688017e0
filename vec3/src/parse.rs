//! Text parsing for the `(x,y,z)` format.
//!
//! # Grammar
//! ```text
//! vector := ws '(' ws number ws ',' ws number ws ',' ws number ws ')'
//! ws     := { Unicode White_Space }
//! number := one or more characters other than whitespace, '(', ',', ')'
//!           accepted by T::from_str
//! ```
//!
//! The reader walks the states open-paren, x, comma, y, comma, z,
//! close-paren in order and stops at the first mismatch. Nothing is written
//! to a destination vector unless all seven steps succeed.

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::vector::Vec3;

/// One of the three components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    X,
    Y,
    Z,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::X => f.write_str("x"),
            Component::Y => f.write_str("y"),
            Component::Z => f.write_str("z"),
        }
    }
}

/// What the reader was looking for when it stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    OpenParen,
    Number(Component),
    Comma,
    CloseParen,
}

impl Expected {
    fn delimiter(&self) -> Option<char> {
        match self {
            Expected::OpenParen => Some('('),
            Expected::Comma => Some(','),
            Expected::CloseParen => Some(')'),
            Expected::Number(_) => None,
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::OpenParen => f.write_str("'('"),
            Expected::Number(c) => write!(f, "{} component", c),
            Expected::Comma => f.write_str("','"),
            Expected::CloseParen => f.write_str("')'"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input ran out.
    UnexpectedEnd { expected: Expected },
    /// A character that cannot start the expected token.
    UnexpectedChar { expected: Expected, found: char },
    /// A number token `T::from_str` refused.
    InvalidNumber { component: Component, token: String },
    /// Non-whitespace after the closing parenthesis (whole-string parse only).
    TrailingInput { found: char },
}

/// Error type for vector parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVec3Error {
    kind: ParseErrorKind,
    offset: usize,
}

impl ParseVec3Error {
    fn new(kind: ParseErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// Byte offset into the input where the failing token starts.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl fmt::Display for ParseVec3Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::UnexpectedEnd { expected } => {
                write!(f, "unexpected end of input at byte {}, expected {}", self.offset, expected)
            }
            ParseErrorKind::UnexpectedChar { expected, found } => {
                write!(f, "expected {} at byte {}, found {:?}", expected, self.offset, found)
            }
            ParseErrorKind::InvalidNumber { component, token } => {
                write!(f, "invalid {} component {:?} at byte {}", component, token, self.offset)
            }
            ParseErrorKind::TrailingInput { found } => {
                write!(f, "unexpected {:?} after vector at byte {}", found, self.offset)
            }
        }
    }
}

impl std::error::Error for ParseVec3Error {}

/// Byte cursor over the input.
struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn skip_ws(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn expect(&mut self, expected: Expected) -> Result<(), ParseVec3Error> {
        self.skip_ws();
        match (self.peek(), expected.delimiter()) {
            (Some(c), Some(d)) if c == d => {
                self.pos += c.len_utf8();
                Ok(())
            }
            (Some(found), _) => Err(ParseVec3Error::new(
                ParseErrorKind::UnexpectedChar { expected, found },
                self.pos,
            )),
            (None, _) => Err(ParseVec3Error::new(
                ParseErrorKind::UnexpectedEnd { expected },
                self.pos,
            )),
        }
    }

    fn number<T: FromStr>(&mut self, component: Component) -> Result<T, ParseVec3Error> {
        self.skip_ws();
        let start = self.pos;
        let rest = self.rest();
        let len = rest
            .find(|c: char| c.is_whitespace() || matches!(c, '(' | ',' | ')'))
            .unwrap_or(rest.len());

        if len == 0 {
            let expected = Expected::Number(component);
            let kind = match self.peek() {
                Some(found) => ParseErrorKind::UnexpectedChar { expected, found },
                None => ParseErrorKind::UnexpectedEnd { expected },
            };
            return Err(ParseVec3Error::new(kind, start));
        }

        let token = &rest[..len];
        let value = token.parse::<T>().map_err(|_| {
            ParseVec3Error::new(
                ParseErrorKind::InvalidNumber {
                    component,
                    token: token.to_string(),
                },
                start,
            )
        })?;
        self.pos += len;
        Ok(value)
    }
}

fn read_triple<T: FromStr>(cur: &mut Cursor<'_>) -> Result<Vec3<T>, ParseVec3Error> {
    cur.expect(Expected::OpenParen)?;
    let x = cur.number(Component::X)?;
    cur.expect(Expected::Comma)?;
    let y = cur.number(Component::Y)?;
    cur.expect(Expected::Comma)?;
    let z = cur.number(Component::Z)?;
    cur.expect(Expected::CloseParen)?;
    Ok(Vec3::new(x, y, z))
}

impl<T: FromStr> Vec3<T> {
    /// Reads one vector from the front of `src` and returns it with the
    /// unread remainder, so several vectors can be read from one buffer.
    ///
    /// # Examples
    /// ```
    /// use vec3::Vec3;
    ///
    /// let (v, rest) = Vec3::<i32>::parse_prefix(" (1,2,3) (4,5,6)").unwrap();
    /// assert_eq!(v, Vec3::new(1, 2, 3));
    /// assert_eq!(rest, " (4,5,6)");
    /// ```
    pub fn parse_prefix(src: &str) -> Result<(Self, &str), ParseVec3Error> {
        let mut cur = Cursor::new(src);
        match read_triple(&mut cur) {
            Ok(v) => Ok((v, cur.rest())),
            Err(err) => {
                trace!(%err, input = src, "rejected vector text");
                Err(err)
            }
        }
    }

    /// Reads one vector from the front of `input` into `self`.
    ///
    /// On success `self` is overwritten and `input` advanced past the
    /// closing parenthesis. On failure neither is touched.
    pub fn read_from(&mut self, input: &mut &str) -> Result<(), ParseVec3Error> {
        let (v, rest) = Self::parse_prefix(*input)?;
        *self = v;
        *input = rest;
        Ok(())
    }
}

impl<T: FromStr> FromStr for Vec3<T> {
    type Err = ParseVec3Error;

    /// Parses a whole string. Trailing whitespace is allowed, anything else
    /// after the `)` is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (v, rest) = Self::parse_prefix(s)?;
        let tail = rest.trim_start();
        match tail.chars().next() {
            None => Ok(v),
            Some(found) => Err(ParseVec3Error::new(
                ParseErrorKind::TrailingInput { found },
                s.len() - tail.len(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(s: &str) -> ParseErrorKind {
        s.parse::<Vec3<f64>>().unwrap_err().kind().clone()
    }

    // =============================================================================
    // Accepted input
    // =============================================================================

    #[test]
    fn parses_compact_form() {
        let v: Vec3<f64> = "(1.0,2.0,3.0)".parse().unwrap();
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn whitespace_before_every_token() {
        let v: Vec3<f64> = "( 1, 2, 3 )".parse().unwrap();
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));

        let v: Vec3<f64> = "\t\n (\t-1 ,\n2e3 , 0.5\r\n)".parse().unwrap();
        assert_eq!(v, Vec3::new(-1.0, 2000.0, 0.5));
    }

    #[test]
    fn unicode_whitespace_is_whitespace() {
        let v: Vec3<i32> = "\u{3000}(\u{a0}1,2,3)".parse().unwrap();
        assert_eq!(v, Vec3::new(1, 2, 3));
    }

    #[test]
    fn trailing_whitespace_is_allowed() {
        let v: Vec3<i32> = "(1,2,3)  \n".parse().unwrap();
        assert_eq!(v, Vec3::new(1, 2, 3));
    }

    #[test]
    fn special_float_tokens() {
        let v: Vec3<f64> = "(inf,-inf,NaN)".parse().unwrap();
        assert_eq!(v.x(), f64::INFINITY);
        assert_eq!(v.y(), f64::NEG_INFINITY);
        assert!(v.z().is_nan());
    }

    #[test]
    fn integer_element_type() {
        let v: Vec3<u8> = "(0,128,255)".parse().unwrap();
        assert_eq!(v, Vec3::new(0, 128, 255));
    }

    // =============================================================================
    // Rejected input
    // =============================================================================

    #[test]
    fn empty_input() {
        assert_eq!(
            kind_of(""),
            ParseErrorKind::UnexpectedEnd {
                expected: Expected::OpenParen
            }
        );
        assert_eq!(
            kind_of("   "),
            ParseErrorKind::UnexpectedEnd {
                expected: Expected::OpenParen
            }
        );
    }

    #[test]
    fn missing_component() {
        let err = "(1.0,2.0)".parse::<Vec3<f64>>().unwrap_err();
        assert_eq!(
            err.kind(),
            &ParseErrorKind::UnexpectedChar {
                expected: Expected::Comma,
                found: ')'
            }
        );
        assert_eq!(err.offset(), 8);
    }

    #[test]
    fn non_numeric_tokens() {
        let err = "(a,b,c)".parse::<Vec3<f64>>().unwrap_err();
        assert_eq!(
            err.kind(),
            &ParseErrorKind::InvalidNumber {
                component: Component::X,
                token: "a".to_string()
            }
        );
        assert_eq!(err.offset(), 1);
    }

    #[test]
    fn whitespace_inside_a_number_splits_it() {
        assert_eq!(
            kind_of("(1 2,3,4)"),
            ParseErrorKind::UnexpectedChar {
                expected: Expected::Comma,
                found: '2'
            }
        );
        assert!(matches!(
            kind_of("(1,- 2,3)"),
            ParseErrorKind::InvalidNumber {
                component: Component::Y,
                ..
            }
        ));
    }

    #[test]
    fn empty_component() {
        assert_eq!(
            kind_of("(1,,3)"),
            ParseErrorKind::UnexpectedChar {
                expected: Expected::Number(Component::Y),
                found: ','
            }
        );
        assert_eq!(
            kind_of("(1,2,"),
            ParseErrorKind::UnexpectedEnd {
                expected: Expected::Number(Component::Z)
            }
        );
    }

    #[test]
    fn unclosed_and_wrong_brackets() {
        assert_eq!(
            kind_of("(1,2,3"),
            ParseErrorKind::UnexpectedEnd {
                expected: Expected::CloseParen
            }
        );
        assert_eq!(
            kind_of("[1,2,3]"),
            ParseErrorKind::UnexpectedChar {
                expected: Expected::OpenParen,
                found: '['
            }
        );
    }

    #[test]
    fn integer_out_of_range() {
        let err = "(0,256,0)".parse::<Vec3<u8>>().unwrap_err();
        assert!(matches!(
            err.kind(),
            ParseErrorKind::InvalidNumber {
                component: Component::Y,
                ..
            }
        ));
    }

    #[test]
    fn trailing_garbage() {
        let err = "(1,2,3) x".parse::<Vec3<f64>>().unwrap_err();
        assert_eq!(err.kind(), &ParseErrorKind::TrailingInput { found: 'x' });
        assert_eq!(err.offset(), 8);
    }

    #[test]
    fn error_messages() {
        let err = "(1.0,2.0)".parse::<Vec3<f64>>().unwrap_err();
        assert_eq!(err.to_string(), "expected ',' at byte 8, found ')'");

        let err = "(a,b,c)".parse::<Vec3<f64>>().unwrap_err();
        assert_eq!(err.to_string(), "invalid x component \"a\" at byte 1");

        let err = "".parse::<Vec3<f64>>().unwrap_err();
        assert_eq!(err.to_string(), "unexpected end of input at byte 0, expected '('");
    }

    // =============================================================================
    // Stream-style reads
    // =============================================================================

    #[test]
    fn read_from_commits_only_on_success() {
        let mut v = Vec3::new(9.0, 9.0, 9.0);

        for bad in ["", "(1.0,2.0)", "(a,b,c)", "(1,2,3"] {
            let mut input = bad;
            assert!(v.read_from(&mut input).is_err());
            assert_eq!(v, Vec3::new(9.0, 9.0, 9.0));
            assert_eq!(input, bad);
        }

        let mut input = "(1,2,3)(4,5,6)";
        v.read_from(&mut input).unwrap();
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(input, "(4,5,6)");

        v.read_from(&mut input).unwrap();
        assert_eq!(v, Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(input, "");
    }

    #[test]
    fn parse_prefix_leaves_the_rest() {
        let (v, rest) = Vec3::<f32>::parse_prefix("(1,2,3), tail").unwrap();
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(rest, ", tail");
    }

    #[test]
    fn display_output_parses_back() {
        let v = Vec3::new(0.1, -1e-300, 12345.678);
        let back: Vec3<f64> = v.to_string().parse().unwrap();
        assert_eq!(back, v);
    }
}
