//! Token kinds and the `Token` record produced by the lexer and consumed by
//! the parser.

use serde::Serialize;
use std::fmt::{self, Display};

/// A `(filename, line, column)` triple attached to every token and AST node.
///
/// Immutable after creation; AST nodes copy the location of the token that
/// starts the construct they represent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    pub filename: String,
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(filename: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            filename: filename.into(),
            line,
            column,
        }
    }
}

impl Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.filename, self.line, self.column)
    }
}

/// Discriminant for every kind of token the lexer emits.
///
/// Keyword types (`vec, byte, short, int, long, char, str, float, double`)
/// collapse into a single [`TokenKind::Type`]; the lexeme carries which one
/// was actually written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    // Keywords
    If,
    Else,
    Loop,
    For,
    Match,
    Import,
    Struct,
    Union,
    Enum,
    Type,
    Var,
    Let,
    Fn,
    Main,
    Return,
    Void,
    Break,
    Continue,
    Case,

    // Literals
    IntLiteral,
    FloatLiteral,
    CharLiteral,
    BoolLiteral,
    HexLiteral,
    OctalLiteral,
    BinaryLiteral,
    StringLiteral,

    // Identifiers / classification
    Identifier,
    Keyword,
    Whitespace,
    Newline,

    // Punctuation
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Semicolon,
    Colon,
    Comma,
    Dot,
    Ellipsis,
    Quote,
    DoubleQuote,
    Underscore,

    // Operators
    Plus,
    PlusPlus,
    Minus,
    MinusMinus,
    Star,
    StarStar,
    Slash,
    Percent,

    Assign,
    EqEq,
    NotEq,
    Less,
    LessEq,
    Greater,
    GreaterEq,

    AndAnd,
    OrOr,
    Not,
    Amp,
    Pipe,
    Shl,
    Shr,

    PlusAssign,
    MinusAssign,
    StarAssign,
    SlashAssign,
    PercentAssign,
    AmpAssign,

    Arrow,

    Eof,
    Error,
    Unknown,
}

impl TokenKind {
    /// Whether this kind denotes a reserved word rather than punctuation,
    /// a literal, or an identifier.
    pub fn is_keyword(self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            If | Else
                | Loop
                | For
                | Match
                | Import
                | Struct
                | Union
                | Enum
                | Type
                | Var
                | Let
                | Fn
                | Main
                | Return
                | Void
                | Break
                | Continue
                | Case
        )
    }
}

/// A lexical unit: a kind, the source text it came from, and its starting
/// location. Tokens are produced by the lexer, consumed by the parser, and
/// never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            location,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) at {}", self.kind, self.lexeme, self.location)
    }
}

/// Looks up the keyword table, returning the matching [`TokenKind`] for
/// reserved words (including the collapsed `Type` keywords) or `None` for a
/// plain identifier.
pub fn keyword_kind(word: &str) -> Option<TokenKind> {
    use TokenKind::*;
    Some(match word {
        "if" => If,
        "else" => Else,
        "loop" => Loop,
        "for" => For,
        "match" => Match,
        "import" => Import,
        "struct" => Struct,
        "union" => Union,
        "enum" => Enum,
        "vec" | "byte" | "short" | "int" | "long" | "char" | "str" | "float" | "double" => Type,
        "var" => Var,
        "let" => Let,
        "fn" => Fn,
        "main" => Main,
        "return" => Return,
        "void" => Void,
        "break" => Break,
        "continue" => Continue,
        "case" => Case,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_type_keywords() {
        for word in ["vec", "byte", "short", "int", "long", "char", "str", "float", "double"] {
            assert_eq!(keyword_kind(word), Some(TokenKind::Type));
        }
    }

    #[test]
    fn recognises_control_keywords() {
        assert_eq!(keyword_kind("loop"), Some(TokenKind::Loop));
        assert_eq!(keyword_kind("match"), Some(TokenKind::Match));
        assert_eq!(keyword_kind("notakeyword"), None);
    }

    #[test]
    fn location_display_is_filename_line_column() {
        let loc = SourceLocation::new("main.pn", 3, 7);
        assert_eq!(loc.to_string(), "main.pn:3:7");
    }
}
