use std::num::IntErrorKind;

use crate::{CompileError, SourceLocation, Token, TokenKind};

/// A single `NAME = NUMBER` line, before any validation against the rest of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    pub mnemonic: String,
    pub value: u64,
    pub location: SourceLocation,
}

impl ParsedEntry {
    pub fn new(mnemonic: impl Into<String>, value: u64, location: SourceLocation) -> Self {
        Self { mnemonic: mnemonic.into(), value, location }
    }
}

/// Converts a stream of [Token]s into [ParsedEntry]s, one per non-blank line.
pub struct Parser<'t> {
    tokens: &'t [Token],

    /// Largest value of the opcode field, reported when a literal doesn't even fit in 64 bits.
    max_value: u64,
}

impl<'t> Parser<'t> {
    pub fn from_tokens(tokens: &'t [Token], max_value: u64) -> Self {
        Self { tokens, max_value }
    }

    pub fn parse(&mut self) -> Result<Vec<ParsedEntry>, Vec<CompileError>> {
        let mut entries = vec![];
        let mut errors = vec![];

        for line in self.tokens.split(|t| t.kind == TokenKind::Newline) {
            // Blank lines (and comment-only lines, which are blank by now) are skipped
            if line.is_empty() {
                continue;
            }

            match self.parse_line(line) {
                Ok(entry) => entries.push(entry),
                Err(e) => errors.push(e),
            }
        }

        if errors.is_empty() {
            Ok(entries)
        } else {
            Err(errors)
        }
    }

    fn parse_line(&self, line: &[Token]) -> Result<ParsedEntry, CompileError> {
        let location = line[0].location;
        let malformed = |reason: String| CompileError::MalformedEntry { location, reason };

        let equals_count = line.iter().filter(|t| t.kind == TokenKind::Equals).count();
        match equals_count {
            0 => return Err(malformed("expected `=` between mnemonic and opcode value".to_string())),
            1 => (),
            n => return Err(malformed(format!("expected exactly one `=`, found {n}"))),
        }

        match line {
            [
                Token { kind: TokenKind::Atom(mnemonic), .. },
                Token { kind: TokenKind::Equals, .. },
                Token { kind: TokenKind::Atom(literal), .. },
            ] => {
                let value = parse_literal(literal).map_err(|e| match e {
                    LiteralError::Overflow => CompileError::ValueOutOfRange {
                        location,
                        mnemonic: mnemonic.clone(),
                        literal: literal.clone(),
                        max: self.max_value,
                    },
                    LiteralError::Invalid(reason) => malformed(reason),
                })?;
                Ok(ParsedEntry::new(mnemonic.clone(), value, location))
            }

            [Token { kind: TokenKind::Equals, .. }, ..] =>
                Err(malformed("expected mnemonic before `=`".to_string())),
            [.., Token { kind: TokenKind::Equals, .. }] =>
                Err(malformed("expected opcode value after `=`".to_string())),

            _ => {
                let found = line.iter()
                    .map(|t| t.describe())
                    .collect::<Vec<_>>()
                    .join(" ");
                Err(malformed(format!("expected `<mnemonic> = <value>`, found {found}")))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum LiteralError {
    /// The digits were fine, but the number doesn't fit in 64 bits.
    Overflow,

    Invalid(String),
}

/// Parses a non-negative integer literal: decimal, or `0x`/`0b`/`0o` prefixed.
fn parse_literal(literal: &str) -> Result<u64, LiteralError> {
    let lower = literal.to_ascii_lowercase();
    let (numeral, radix) =
        if let Some(n) = lower.strip_prefix("0x") {
            (n, 16)
        } else if let Some(n) = lower.strip_prefix("0b") {
            (n, 2)
        } else if let Some(n) = lower.strip_prefix("0o") {
            (n, 8)
        } else {
            (lower.as_str(), 10)
        };

    // `from_str_radix` accepts a leading `+`, which isn't part of our syntax
    if numeral.is_empty() || !numeral.chars().all(|c| c.is_digit(radix)) {
        return Err(LiteralError::Invalid(format!("'{literal}' is not a non-negative integer literal")));
    }

    u64::from_str_radix(numeral, radix).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => LiteralError::Overflow,
        _ => LiteralError::Invalid(format!("integer parse error: {e}")),
    })
}
