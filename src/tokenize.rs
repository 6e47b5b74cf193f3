use crate::classify::{classify, CharClass};

pub use crate::classify::Symbol;

/// A lexical unit. Text-carrying variants hold the raw characters exactly as
/// they appeared in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A maximal run of whitespace
    Space(String),
    /// A structural character
    Symbol(Symbol),
    /// A decimal digit run with an optional leading sign, not yet converted
    Integer(String),
    /// A string including both surrounding quotes, escapes left in place
    String(String),
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// No input left
    Eof,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenizeError {
    #[error("sign without any digits")]
    SignWithoutDigits,
    #[error("invalid literal, expected `{expected}`")]
    InvalidLiteral { expected: &'static str },
    #[error("unterminated string")]
    UnterminatedString,
    #[error("invalid escape sequence at `{0}`")]
    InvalidEscape(char),
    #[error("unexpected character `{0}`")]
    UnexpectedChar(char),
}

/// Produces one token per call over an in-memory character buffer.
///
/// The first error is sticky: every later call returns it again without
/// touching the input.
pub struct Tokenizer {
    chars: Vec<char>,
    index: usize,
    failed: Option<TokenizeError>,
}

impl Tokenizer {
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            index: 0,
            failed: None,
        }
    }

    /// Number of characters in the input.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn next_token(&mut self) -> Result<Token, TokenizeError> {
        if let Some(err) = &self.failed {
            return Err(err.clone());
        }

        let result = self.make_token();
        if let Err(err) = &result {
            self.failed = Some(err.clone());
        }
        result
    }

    fn remaining(&self) -> usize {
        self.chars.len() - self.index
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    fn make_token(&mut self) -> Result<Token, TokenizeError> {
        let ch = match self.peek() {
            Some(ch) => ch,
            None => return Ok(Token::Eof),
        };

        match classify(ch) {
            CharClass::Space => Ok(Token::Space(self.take_while(CharClass::Space))),
            CharClass::Symbol(symbol) => {
                self.index += 1;
                Ok(Token::Symbol(symbol))
            }
            CharClass::Sign | CharClass::Digit => self.tokenize_integer(),
            _ => match ch {
                't' => self.tokenize_literal("true", Token::True),
                'f' => self.tokenize_literal("false", Token::False),
                'n' => self.tokenize_literal("null", Token::Null),
                '"' => self.tokenize_string(),
                _ => Err(TokenizeError::UnexpectedChar(ch)),
            },
        }
    }

    fn take_while(&mut self, class: CharClass) -> String {
        let mut text = String::new();
        while let Some(ch) = self.peek() {
            if classify(ch) != class {
                break;
            }
            text.push(ch);
            self.index += 1;
        }
        text
    }

    fn tokenize_integer(&mut self) -> Result<Token, TokenizeError> {
        let mut unparsed = String::new();
        if let Some(first) = self.peek() {
            unparsed.push(first);
            self.index += 1;
        }
        unparsed.push_str(&self.take_while(CharClass::Digit));

        if unparsed == "+" || unparsed == "-" {
            return Err(TokenizeError::SignWithoutDigits);
        }
        Ok(Token::Integer(unparsed))
    }

    fn tokenize_literal(
        &mut self,
        expected: &'static str,
        token: Token,
    ) -> Result<Token, TokenizeError> {
        let len = expected.chars().count();
        if self.remaining() < len {
            return Err(TokenizeError::InvalidLiteral { expected });
        }

        let end = self.index + len;
        if !self.chars[self.index..end].iter().copied().eq(expected.chars()) {
            return Err(TokenizeError::InvalidLiteral { expected });
        }
        self.index = end;
        Ok(token)
    }

    fn tokenize_string(&mut self) -> Result<Token, TokenizeError> {
        if self.remaining() < 2 {
            return Err(TokenizeError::UnterminatedString);
        }

        // opening quote
        let mut raw = String::from('"');
        self.index += 1;

        loop {
            let ch = self.peek().ok_or(TokenizeError::UnterminatedString)?;
            raw.push(ch);
            self.index += 1;

            match ch {
                '"' => return Ok(Token::String(raw)),
                '\\' => self.scan_escape(&mut raw)?,
                _ => {}
            }
        }
    }

    /// Consumes the body of an escape sequence whose backslash has already
    /// been taken. `\uXXXX` is validated but kept verbatim.
    fn scan_escape(&mut self, raw: &mut String) -> Result<(), TokenizeError> {
        let ch = self.peek().ok_or(TokenizeError::UnterminatedString)?;
        match ch {
            '"' | '\\' | 'b' | 'f' | 'n' | 'r' | 't' => {
                raw.push(ch);
                self.index += 1;
                Ok(())
            }
            'u' => {
                raw.push(ch);
                self.index += 1;
                if self.remaining() < 4 {
                    return Err(TokenizeError::InvalidEscape(ch));
                }
                for _ in 0..4 {
                    let digit = self.chars[self.index];
                    if !classify(digit).is_hex() {
                        return Err(TokenizeError::InvalidEscape(digit));
                    }
                    raw.push(digit);
                    self.index += 1;
                }
                Ok(())
            }
            _ => Err(TokenizeError::InvalidEscape(ch)),
        }
    }
}

/// Runs a tokenizer to the end of `input`, collecting every token before
/// `Eof` (whitespace included).
pub fn tokenize(input: &str) -> Result<Vec<Token>, TokenizeError> {
    let mut tokenizer = Tokenizer::new(input);
    let mut tokens = Vec::new();

    loop {
        match tokenizer.next_token()? {
            Token::Eof => break,
            token => tokens.push(token),
        }
    }

    Ok(tokens)
}
