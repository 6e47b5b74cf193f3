use std::collections::HashMap;

use crate::limits::{LimitError, Limits};
use crate::tokenize::{Symbol, Token, TokenizeError, Tokenizer};
use crate::Value;

/// Parses `input` into a value tree, or returns `None` if it is malformed.
pub fn parse(input: &str) -> Option<Value> {
    try_parse(input).ok()
}

/// Like [`parse`], but reports what kind of problem was found.
pub fn try_parse(input: &str) -> Result<Value, ParseError> {
    parse_with_limits(input, Limits::default())
}

pub fn parse_with_limits(input: &str, limits: Limits) -> Result<Value, ParseError> {
    let result = Parser::new(input, limits).and_then(Parser::run);
    if let Err(err) = &result {
        log::debug!("rejected JSON input: {}", err);
    }
    result
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
    #[error(transparent)]
    Structure(#[from] StructureError),
    #[error(transparent)]
    Limit(#[from] LimitError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructureError {
    /// The entries before a `,` or `}` are not `"key" : value`
    #[error("object member is not of the form `\"key\": value`")]
    MalformedMember,
    /// The entry before a `,` or `]` is not a value
    #[error("array element is not a value")]
    MalformedElement,
    #[error("`{0}` does not close an open container")]
    UnexpectedClose(Symbol),
    #[error("integer `{0}` is out of range")]
    IntegerOutOfRange(String),
    #[error("input holds no value")]
    EmptyInput,
    #[error("input holds {0} values instead of one")]
    TrailingEntries(usize),
    #[error("unclosed or stray `{0}`")]
    UnreducedToken(Symbol),
}

/// Either a finished value or a structural token still waiting for its
/// closing counterpart.
#[derive(Debug, Clone, PartialEq)]
enum StackEntry {
    Value(Value),
    Token(Symbol),
}

/// Working stack of the parser. The top is the most recently shifted entry.
#[derive(Debug, Default)]
struct Stack {
    entries: Vec<StackEntry>,
}

impl Stack {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn push(&mut self, entry: StackEntry) {
        self.entries.push(entry);
    }

    fn pop(&mut self) -> Option<StackEntry> {
        self.entries.pop()
    }

    fn top_symbol(&self) -> Option<Symbol> {
        match self.entries.last() {
            Some(StackEntry::Token(symbol)) => Some(*symbol),
            _ => None,
        }
    }

    /// Removes `[key, :, value, marker]` from the top and returns the member.
    fn take_member(&mut self) -> Result<(String, Value), StructureError> {
        let [key, colon, value, _marker] = self
            .take::<4>()
            .ok_or(StructureError::MalformedMember)?;
        match (key, colon, value) {
            (
                StackEntry::Value(Value::String(key)),
                StackEntry::Token(Symbol::Colon),
                StackEntry::Value(value),
            ) => Ok((key, value)),
            _ => Err(StructureError::MalformedMember),
        }
    }

    /// Removes `[value, marker]` from the top and returns the value.
    fn take_element(&mut self) -> Result<Value, StructureError> {
        match self.take::<2>() {
            Some([StackEntry::Value(value), _marker]) => Ok(value),
            _ => Err(StructureError::MalformedElement),
        }
    }

    /// Pops the top `N` entries, bottom-most first.
    fn take<const N: usize>(&mut self) -> Option<[StackEntry; N]> {
        let at = self.entries.len().checked_sub(N)?;
        self.entries.split_off(at).try_into().ok()
    }
}

struct Parser {
    tokenizer: Tokenizer,
    stack: Stack,
    limits: Limits,
    depth: usize,
}

impl Parser {
    fn new(input: &str, limits: Limits) -> Result<Self, ParseError> {
        // counted before the tokenizer copies the input into its buffer
        let len = input.chars().count();
        if len > limits.max_input_len {
            return Err(LimitError::InputTooLarge {
                len,
                max: limits.max_input_len,
            }
            .into());
        }

        Ok(Self {
            tokenizer: Tokenizer::new(input),
            stack: Stack::default(),
            limits,
            depth: 0,
        })
    }

    fn run(mut self) -> Result<Value, ParseError> {
        loop {
            let entry = match self.tokenizer.next_token()? {
                Token::Eof => break,
                Token::Space(_) => continue,
                Token::Integer(text) => StackEntry::Value(parse_integer(text)?),
                Token::String(raw) => StackEntry::Value(Value::String(strip_quotes(&raw))),
                Token::True => StackEntry::Value(Value::Boolean(true)),
                Token::False => StackEntry::Value(Value::Boolean(false)),
                Token::Null => StackEntry::Value(Value::Null),
                Token::Symbol(symbol) => StackEntry::Token(symbol),
            };
            self.shift(entry)?;
        }

        self.finish()
    }

    fn shift(&mut self, entry: StackEntry) -> Result<(), ParseError> {
        log::trace!("shift {:?}", entry);

        let symbol = match &entry {
            StackEntry::Token(symbol) => Some(*symbol),
            StackEntry::Value(_) => None,
        };
        self.stack.push(entry);

        match symbol {
            Some(Symbol::LeftBrace | Symbol::LeftBracket) => self.open()?,
            Some(Symbol::RightBrace) => self.reduce_object()?,
            Some(Symbol::RightBracket) => self.reduce_array()?,
            _ => {}
        }
        Ok(())
    }

    fn open(&mut self) -> Result<(), LimitError> {
        self.depth += 1;
        if self.depth > self.limits.max_depth {
            return Err(LimitError::NestingTooDeep {
                max: self.limits.max_depth,
            });
        }
        Ok(())
    }

    fn close(&mut self, value: Value) {
        self.stack.pop();
        self.depth = self.depth.saturating_sub(1);
        log::trace!("reduce {}", value.kind());
        self.stack.push(StackEntry::Value(value));
    }

    /// Folds members into an object until the matching `{` is on top.
    /// Members are met last-first, so an existing key already holds the
    /// later value and is kept.
    fn reduce_object(&mut self) -> Result<(), StructureError> {
        let mut map = HashMap::new();
        loop {
            match self.stack.top_symbol() {
                Some(Symbol::LeftBrace) => {
                    self.close(Value::Object(map));
                    return Ok(());
                }
                Some(Symbol::Comma | Symbol::RightBrace) => {
                    let (key, value) = self.stack.take_member()?;
                    map.entry(key).or_insert(value);
                }
                _ => return Err(StructureError::UnexpectedClose(Symbol::RightBrace)),
            }
        }
    }

    /// Folds elements into an array until the matching `[` is on top.
    fn reduce_array(&mut self) -> Result<(), StructureError> {
        let mut elements = Vec::new();
        loop {
            match self.stack.top_symbol() {
                Some(Symbol::LeftBracket) => {
                    // collected last-first
                    elements.reverse();
                    self.close(Value::Array(elements));
                    return Ok(());
                }
                Some(Symbol::Comma | Symbol::RightBracket) => {
                    elements.push(self.stack.take_element()?);
                }
                _ => return Err(StructureError::UnexpectedClose(Symbol::RightBracket)),
            }
        }
    }

    fn finish(mut self) -> Result<Value, ParseError> {
        let value = match self.stack.len() {
            0 => Err(StructureError::EmptyInput),
            1 => match self.stack.pop() {
                Some(StackEntry::Value(value)) => Ok(value),
                Some(StackEntry::Token(symbol)) => Err(StructureError::UnreducedToken(symbol)),
                None => Err(StructureError::EmptyInput),
            },
            n => Err(StructureError::TrailingEntries(n)),
        }?;
        Ok(value)
    }
}

fn parse_integer(text: String) -> Result<Value, StructureError> {
    match text.parse::<i64>() {
        Ok(number) => Ok(Value::Integer(number)),
        Err(_) => Err(StructureError::IntegerOutOfRange(text)),
    }
}

/// Drops the first and last character of a raw string token. Escapes stay
/// as they are.
fn strip_quotes(raw: &str) -> String {
    let mut chars = raw.chars();
    chars.next();
    chars.next_back();
    chars.as_str().to_owned()
}
