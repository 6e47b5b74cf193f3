use std::fmt;

/// One of the six structural characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `:`
    Colon,
    /// `,`
    Comma,
}

impl Symbol {
    pub fn as_char(self) -> char {
        match self {
            Symbol::LeftBrace => '{',
            Symbol::RightBrace => '}',
            Symbol::LeftBracket => '[',
            Symbol::RightBracket => ']',
            Symbol::Colon => ':',
            Symbol::Comma => ',',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The lexical class of a single input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// space, tab, line feed or carriage return
    Space,
    /// `+` or `-`
    Sign,
    /// `0` through `9`
    Digit,
    /// `a` through `f`, either case. Decimal digits are `Digit`, not `HexDigit`.
    HexDigit,
    /// one of `{ } [ ] : ,`
    Symbol(Symbol),
    Other,
}

impl CharClass {
    /// Whether the character can appear in the body of a `\u` escape.
    pub fn is_hex(self) -> bool {
        matches!(self, CharClass::Digit | CharClass::HexDigit)
    }
}

pub fn classify(c: char) -> CharClass {
    match c {
        ' ' | '\t' | '\n' | '\r' => CharClass::Space,
        '+' | '-' => CharClass::Sign,
        '0'..='9' => CharClass::Digit,
        'a'..='f' | 'A'..='F' => CharClass::HexDigit,
        '{' => CharClass::Symbol(Symbol::LeftBrace),
        '}' => CharClass::Symbol(Symbol::RightBrace),
        '[' => CharClass::Symbol(Symbol::LeftBracket),
        ']' => CharClass::Symbol(Symbol::RightBracket),
        ':' => CharClass::Symbol(Symbol::Colon),
        ',' => CharClass::Symbol(Symbol::Comma),
        _ => CharClass::Other,
    }
}
