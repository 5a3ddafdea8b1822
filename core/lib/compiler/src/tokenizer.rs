use std::{iter::Peekable, str::Chars};

use crate::SourceLocation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, location: SourceLocation) -> Self {
        Self { kind, location }
    }

    pub fn describe(&self) -> String {
        self.kind.describe()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A mnemonic or an integer literal.
    Atom(String),

    Equals,
    Newline,
}

impl TokenKind {
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Atom(a) => format!("'{a}'"),
            TokenKind::Equals => "'='".to_string(),
            TokenKind::Newline => "end of line".to_string(),
        }
    }
}

/// Converts lines of an opcode specification into [Token]s.
///
/// This never fails. Anything which isn't whitespace, `=` or a comment ends up in an atom, and
/// the parser decides whether that atom makes sense where it appears.
pub struct Tokenizer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    col: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(chars: Peekable<Chars<'a>>) -> Self {
        Self { chars, line: 1, col: 1 }
    }

    pub fn from_str(string: &'a str) -> Tokenizer<'a> {
        Self::new(string.chars().peekable())
    }

    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = vec![];
        while let Some(t) = self.tokenize_one() {
            tokens.push(t);
        }
        tokens
    }

    pub fn tokenize_one(&mut self) -> Option<Token> {
        self.skip_blanks();

        let location = self.location();
        match *self.chars.peek()? {
            '\n' => {
                self.advance();
                Some(Token::new(TokenKind::Newline, location))
            }

            '=' => {
                self.advance();
                Some(Token::new(TokenKind::Equals, location))
            }

            _ => Some(Token::new(TokenKind::Atom(self.read_atom()), location)),
        }
    }

    /// Skips whitespace (other than newlines) and comments, leaving the next significant
    /// character to be peeked.
    fn skip_blanks(&mut self) {
        let mut in_comment = false;
        while let Some(&c) = self.chars.peek() {
            match c {
                '\n' => break,
                ';' => in_comment = true,
                c if in_comment || c.is_whitespace() => (),
                _ => break,
            }
            self.advance();
        }
    }

    fn read_atom(&mut self) -> String {
        let mut buffer = String::new();
        while let Some(c) = self.chars.peek() {
            if Self::is_valid_atom_char(*c) {
                buffer.push(*c);
                self.advance();
            } else {
                break;
            }
        }
        buffer
    }

    fn is_valid_atom_char(c: char) -> bool {
        !c.is_whitespace() && c != '=' && c != ';'
    }

    fn advance(&mut self) {
        if let Some(c) = self.chars.next() {
            if c == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
    }

    fn location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.col)
    }
}
