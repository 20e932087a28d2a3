//! Symbolic rule strings.
//!
//! A rule string such as `"RL"` or `"L2NNL1L2L1"` is split into turn tokens.
//! The cell value selects the token that governs a visit:
//! `tokens[cell % tokens.len()]`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The classic two-symbol grammar used when a rule string is empty.
pub const DEFAULT_RULE: &str = "RL";

/// A turn instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// Quarter turn left. Also written `L1`.
    L,
    /// Quarter turn right. Also written `R1`.
    R,
    /// Half turn (left twice).
    L2,
    /// Half turn (right twice).
    R2,
    /// Face up the Z axis in 3D; half turn in 2D.
    U,
    /// Face down the Z axis in 3D; half turn in 2D.
    D,
    /// No turn.
    N,
}

impl Token {
    /// Whether this token leaves the X/Y plane in 3D.
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Token::U | Token::D)
    }

    /// Canonical spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Token::L => "L",
            Token::R => "R",
            Token::L2 => "L2",
            Token::R2 => "R2",
            Token::U => "U",
            Token::D => "D",
            Token::N => "N",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered token sequence; its length is the number of cell symbols.
///
/// Never empty. Serialized as its rule string and deserialized through
/// [`SymbolicGrammar::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SymbolicGrammar {
    tokens: Vec<Token>,
}

impl SymbolicGrammar {
    /// Parse a rule string.
    ///
    /// `L1`, `L2`, `R1` and `R2` are matched before the single letters. Any
    /// other character becomes `N`. A string that is empty after trimming
    /// falls back to [`DEFAULT_RULE`].
    pub fn parse(rule: &str) -> Self {
        let rule = rule.trim();
        if rule.is_empty() {
            log::warn!("empty rule string, falling back to {}", DEFAULT_RULE);
            return Self::parse(DEFAULT_RULE);
        }

        let bytes = rule.as_bytes();
        let mut tokens = Vec::with_capacity(bytes.len());
        let mut i = 0;

        while i < bytes.len() {
            let next = bytes.get(i + 1).copied();
            let (token, width) = match (bytes[i], next) {
                (b'L', Some(b'1')) => (Token::L, 2),
                (b'L', Some(b'2')) => (Token::L2, 2),
                (b'R', Some(b'1')) => (Token::R, 2),
                (b'R', Some(b'2')) => (Token::R2, 2),
                (b'L', _) => (Token::L, 1),
                (b'R', _) => (Token::R, 1),
                (b'U', _) => (Token::U, 1),
                (b'D', _) => (Token::D, 1),
                (b'N', _) => (Token::N, 1),
                _ => (Token::N, utf8_width(bytes[i])),
            };
            tokens.push(token);
            i += width;
        }

        SymbolicGrammar { tokens }
    }

    /// Build a grammar directly from tokens. An empty list yields the default.
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        if tokens.is_empty() {
            return Self::parse(DEFAULT_RULE);
        }
        SymbolicGrammar { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of cell symbols the grammar cycles through.
    #[inline]
    pub fn cardinality(&self) -> usize {
        self.tokens.len()
    }

    /// True if any token is U or D.
    pub fn has_vertical(&self) -> bool {
        self.tokens.iter().any(|t| t.is_vertical())
    }

    /// Token governing a visit to a cell holding `cell`.
    #[inline]
    pub fn token_for(&self, cell: u8) -> Token {
        self.tokens[cell as usize % self.tokens.len()]
    }
}

impl fmt::Display for SymbolicGrammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            f.write_str(token.as_str())?;
        }
        Ok(())
    }
}

impl From<String> for SymbolicGrammar {
    fn from(rule: String) -> Self {
        SymbolicGrammar::parse(&rule)
    }
}

impl From<SymbolicGrammar> for String {
    fn from(grammar: SymbolicGrammar) -> Self {
        grammar.to_string()
    }
}

/// Byte length of the UTF-8 sequence starting with `lead`, so that a single
/// unrecognized character maps to exactly one `N`.
#[inline]
fn utf8_width(lead: u8) -> usize {
    match lead {
        0xF0..=0xFF => 4,
        0xE0..=0xEF => 3,
        0xC0..=0xDF => 2,
        _ => 1,
    }
}
