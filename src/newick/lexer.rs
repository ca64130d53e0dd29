//! Tokenization of normalized Newick records.

use crate::parser::parse_error::{DEFAULT_CONTEXT_LENGTH, ParseError, ParseErrorKind};

// =#========================================================================#=
// TOKEN
// =#========================================================================#=

/// One token of a normalized Newick record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// `(` - opens a group of children
    Open,
    /// `)` - closes a group
    Close,
    /// `,` - separates siblings
    Comma,
    /// `;` - ends the record
    Semicolon,
    /// A `"`-delimited span: a quoted label, or a branch-length span
    /// (wrapped by the normalizer, starting with `:`)
    Quoted(String),
    /// A bare label fragment, with underscores already turned into spaces
    Fragment(String),
}

// =#========================================================================#=
// LEXER
// =#========================================================================#=

/// Lexer over one normalized record.
///
/// Works on chars so multi-byte labels survive; positions and error
/// context refer to char offsets into the normalized text.
pub(crate) struct Lexer {
    chars: Vec<char>,
    pos: usize,
}

impl Lexer {
    pub(crate) fn new(text: &str) -> Lexer {
        Lexer {
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    /// Returns the next token, or `None` at the end of the record.
    ///
    /// # Errors
    /// [Format](ParseErrorKind::Format) on an unterminated comment or
    /// quoted span.
    pub(crate) fn next_token(&mut self) -> Result<Option<Token>, ParseError> {
        self.skip_whitespace_and_comments()?;

        let Some(ch) = self.peek() else {
            return Ok(None);
        };
        let token = match ch {
            '(' => {
                self.pos += 1;
                Token::Open
            }
            ')' => {
                self.pos += 1;
                Token::Close
            }
            ',' => {
                self.pos += 1;
                Token::Comma
            }
            ';' => {
                self.pos += 1;
                Token::Semicolon
            }
            '"' => Token::Quoted(self.take_quoted()?),
            _ => Token::Fragment(self.take_fragment()),
        };
        Ok(Some(token))
    }

    /// Char offset of the next unread char.
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// Builds a [Format](ParseErrorKind::Format) error at the current
    /// position.
    pub(crate) fn format_error(&self, message: &str) -> ParseError {
        ParseError::new(
            ParseErrorKind::Format(message.to_string()),
            self.position(),
            self.context(),
        )
    }

    /// Builds an [UnbalancedStructure](ParseErrorKind::UnbalancedStructure)
    /// error at the current position.
    pub(crate) fn unbalanced_error(&self, message: &str) -> ParseError {
        ParseError::new(
            ParseErrorKind::UnbalancedStructure(message.to_string()),
            self.position(),
            self.context(),
        )
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn at_comment_start(&self) -> bool {
        self.chars.get(self.pos) == Some(&'/') && self.chars.get(self.pos + 1) == Some(&'*')
    }

    /// Upcoming text for error reports, capped at [DEFAULT_CONTEXT_LENGTH].
    fn context(&self) -> String {
        let end = (self.pos + DEFAULT_CONTEXT_LENGTH).min(self.chars.len());
        self.chars[self.pos..end].iter().collect()
    }

    fn skip_whitespace_and_comments(&mut self) -> Result<(), ParseError> {
        loop {
            while self.peek().is_some_and(|ch| ch.is_whitespace()) {
                self.pos += 1;
            }
            if !self.at_comment_start() {
                return Ok(());
            }

            let start = self.pos;
            self.pos += 2;
            loop {
                if self.chars.get(self.pos) == Some(&'*')
                    && self.chars.get(self.pos + 1) == Some(&'/')
                {
                    self.pos += 2;
                    break;
                }
                if self.pos >= self.chars.len() {
                    self.pos = start;
                    return Err(self.format_error("unterminated comment"));
                }
                self.pos += 1;
            }
        }
    }

    fn take_quoted(&mut self) -> Result<String, ParseError> {
        let start = self.pos;
        self.pos += 1; // opening delimiter

        let mut text = String::new();
        loop {
            match self.peek() {
                Some('"') => {
                    self.pos += 1;
                    return Ok(text);
                }
                Some(ch) => {
                    text.push(ch);
                    self.pos += 1;
                }
                None => {
                    self.pos = start;
                    return Err(self.format_error("unterminated quoted label"));
                }
            }
        }
    }

    fn take_fragment(&mut self) -> String {
        let mut text = String::new();
        while let Some(ch) = self.peek() {
            if matches!(ch, '(' | ')' | ',' | ';' | '"')
                || ch.is_whitespace()
                || self.at_comment_start()
            {
                break;
            }
            text.push(if ch == '_' { ' ' } else { ch });
            self.pos += 1;
        }
        text
    }
}

// =#========================================================================#=
// TESTS - LEXER
// =#========================================================================#=
