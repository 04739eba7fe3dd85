//! The hand-written scanner: turns a loaded source buffer into a
//! token sequence with accurate `(line, column)`. The lexer owns the byte
//! buffer once constructed and exposes a single operation — run to
//! completion, appending into a token vector — rather than incremental
//! re-entrancy.

use log::{debug, trace};

use crate::error::LexError;
use crate::token::{keyword_kind, SourceLocation, Token, TokenKind};

const BOM: char = '\u{feff}';

/// Scans one source buffer to completion. Not reusable across files: build
/// a fresh `Lexer` per [`crate::CompilationUnit`].
pub struct Lexer {
    filename: String,
    bytes: Vec<u8>,
    pos: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Strips a leading UTF-8 BOM if present, so BOM-prefixed source files
    /// lex the same as files without one.
    pub fn new(filename: impl Into<String>, source: impl Into<String>) -> Self {
        let mut source = source.into();
        if source.starts_with(BOM) {
            source = source.trim_start_matches(BOM).to_string();
        }
        Self {
            filename: filename.into(),
            bytes: source.into_bytes(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    fn here(&self) -> SourceLocation {
        SourceLocation::new(self.filename.clone(), self.line, self.column)
    }

    /// Consumes and returns the current byte, updating `(line, column)`.
    fn advance(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        if byte == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(byte)
    }

    /// Runs the scanner to completion, returning the token sequence
    /// (terminated by a trailing [`TokenKind::Eof`]) or the first fatal
    /// lexical error encountered.
    pub fn lex(mut self) -> Result<Vec<Token>, LexError> {
        debug!("lexing '{}' ({} bytes)", self.filename, self.bytes.len());
        let mut tokens = Vec::new();

        while !self.at_end() {
            if let Some(token) = self.scan_one()? {
                tokens.push(token);
            }
        }

        tokens.push(Token::new(TokenKind::Eof, "", self.here()));
        trace!("produced {} tokens for '{}'", tokens.len(), self.filename);
        Ok(tokens)
    }

    /// Scans a single token, or `None` for bytes that are consumed without
    /// producing one (whitespace other than `\n`, comments).
    fn scan_one(&mut self) -> Result<Option<Token>, LexError> {
        let start = self.here();
        let byte = self.peek().expect("scan_one called at end of input");

        match byte {
            b'\n' => {
                self.advance();
                Ok(Some(Token::new(TokenKind::Newline, "\n", start)))
            }
            b' ' | b'\t' | b'\r' => {
                self.advance();
                Ok(None)
            }
            b'/' if self.peek_at(1) == Some(b'/') => {
                self.skip_line_comment();
                Ok(None)
            }
            b'/' if self.peek_at(1) == Some(b'*') => {
                self.skip_block_comment(start)?;
                Ok(None)
            }
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => Ok(Some(self.scan_identifier(start))),
            b'0'..=b'9' => Ok(Some(self.scan_number(start))),
            b'"' => Ok(Some(self.scan_string(start)?)),
            b'\'' => Ok(Some(self.scan_char(start)?)),
            _ => Ok(self.scan_operator(start)),
        }
    }

    fn skip_line_comment(&mut self) {
        while let Some(b) = self.peek() {
            if b == b'\n' {
                break;
            }
            self.advance();
        }
    }

    fn skip_block_comment(&mut self, start: SourceLocation) -> Result<(), LexError> {
        self.advance(); // '/'
        self.advance(); // '*'
        loop {
            match (self.peek(), self.peek_at(1)) {
                (Some(b'*'), Some(b'/')) => {
                    self.advance();
                    self.advance();
                    return Ok(());
                }
                (Some(_), _) => {
                    self.advance();
                }
                (None, _) => {
                    return Err(LexError::new("unterminated block comment", start));
                }
            }
        }
    }

    fn scan_identifier(&mut self, start: SourceLocation) -> Token {
        let mut lexeme = String::new();
        while let Some(b) = self.peek() {
            if b.is_ascii_alphanumeric() || b == b'_' {
                lexeme.push(b as char);
                self.advance();
            } else {
                break;
            }
        }

        if lexeme == "_" {
            return Token::new(TokenKind::Underscore, lexeme, start);
        }

        match keyword_kind(&lexeme) {
            Some(kind) => Token::new(kind, lexeme, start),
            None => Token::new(TokenKind::Identifier, lexeme, start),
        }
    }

    fn scan_number(&mut self, start: SourceLocation) -> Token {
        if self.peek() == Some(b'0') {
            match self.peek_at(1) {
                Some(b'b') | Some(b'B') => return self.scan_radix(2, TokenKind::BinaryLiteral),
                Some(b'o') | Some(b'O') => return self.scan_radix(8, TokenKind::OctalLiteral),
                Some(b'x') | Some(b'X') => return self.scan_radix(16, TokenKind::HexLiteral),
                _ => {}
            }
        }

        let mut lexeme = String::new();
        while let Some(b) = self.peek() {
            if b.is_ascii_digit() {
                lexeme.push(b as char);
                self.advance();
            } else {
                break;
            }
        }

        // A single '.' inside a run of decimal digits promotes to a float,
        // but only if a digit actually follows the dot.
        if self.peek() == Some(b'.') && matches!(self.peek_at(1), Some(b'0'..=b'9')) {
            lexeme.push('.');
            self.advance();
            while let Some(b) = self.peek() {
                if b.is_ascii_digit() {
                    lexeme.push(b as char);
                    self.advance();
                } else {
                    break;
                }
            }
            return Token::new(TokenKind::FloatLiteral, lexeme, start);
        }

        Token::new(TokenKind::IntLiteral, lexeme, start)
    }

    /// Scans `0b`/`0o`/`0x` prefixed literals. The prefix bytes are
    /// consumed but not retained in the lexeme (`0xFF` lexes to a
    /// `HexLiteral` with lexeme `"FF"`); the token's location is taken
    /// *after* the prefix is consumed, so it points at the first digit of
    /// the stripped lexeme and the byte-offset round-trip property holds
    /// for these three kinds too.
    fn scan_radix(&mut self, radix: u32, kind: TokenKind) -> Token {
        self.advance(); // '0'
        self.advance(); // 'b'/'o'/'x'
        let start = self.here();

        let mut lexeme = String::new();
        while let Some(b) = self.peek() {
            let ch = b as char;
            if ch.is_digit(radix) {
                lexeme.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        Token::new(kind, lexeme, start)
    }

    /// `"` ... `"`. Escapes are preserved verbatim (backslash and escaped
    /// character both kept) in the lexeme at this layer; decoding is a
    /// later pass's concern.
    fn scan_string(&mut self, start: SourceLocation) -> Result<Token, LexError> {
        self.advance(); // opening quote
        let mut lexeme = String::new();

        loop {
            match self.peek() {
                None => return Err(LexError::new("unterminated string literal", start)),
                Some(b'"') => {
                    self.advance();
                    break;
                }
                Some(b'\\') => {
                    lexeme.push('\\');
                    self.advance();
                    match self.advance() {
                        Some(escaped) => lexeme.push(escaped as char),
                        None => return Err(LexError::new("unterminated string literal", start)),
                    }
                }
                Some(b) => {
                    lexeme.push(b as char);
                    self.advance();
                }
            }
        }

        Ok(Token::new(TokenKind::StringLiteral, lexeme, start))
    }

    /// `'` ... `'`. Exactly one source character, or `\` followed by one
    /// escaped character. The backslash prefix is discarded from the
    /// lexeme (see DESIGN.md's note on escape preservation).
    fn scan_char(&mut self, start: SourceLocation) -> Result<Token, LexError> {
        self.advance(); // opening quote

        let ch = match self.peek() {
            None => return Err(LexError::new("unterminated char literal", start)),
            Some(b'\\') => {
                self.advance();
                match self.advance() {
                    Some(escaped) => escaped as char,
                    None => return Err(LexError::new("unterminated char literal", start)),
                }
            }
            Some(b) => {
                self.advance();
                b as char
            }
        };

        match self.peek() {
            Some(b'\'') => {
                self.advance();
                Ok(Token::new(TokenKind::CharLiteral, ch.to_string(), start))
            }
            _ => Err(LexError::new("unterminated char literal", start)),
        }
    }

    /// Two- and three-character operators take priority over their
    /// one-character prefixes; an unmatched byte is silently skipped (a
    /// documented limitation, not an error).
    fn scan_operator(&mut self, start: SourceLocation) -> Option<Token> {
        use TokenKind::*;

        if self.peek() == Some(b'.') && self.peek_at(1) == Some(b'.') && self.peek_at(2) == Some(b'.') {
            self.advance();
            self.advance();
            self.advance();
            return Some(Token::new(Ellipsis, "...", start));
        }

        let two = match (self.peek(), self.peek_at(1)) {
            (Some(b'='), Some(b'=')) => Some(EqEq),
            (Some(b'!'), Some(b'=')) => Some(NotEq),
            (Some(b'<'), Some(b'=')) => Some(LessEq),
            (Some(b'>'), Some(b'=')) => Some(GreaterEq),
            (Some(b'<'), Some(b'<')) => Some(Shl),
            (Some(b'>'), Some(b'>')) => Some(Shr),
            (Some(b'&'), Some(b'&')) => Some(AndAnd),
            (Some(b'|'), Some(b'|')) => Some(OrOr),
            (Some(b'+'), Some(b'=')) => Some(PlusAssign),
            (Some(b'-'), Some(b'=')) => Some(MinusAssign),
            (Some(b'*'), Some(b'=')) => Some(StarAssign),
            (Some(b'/'), Some(b'=')) => Some(SlashAssign),
            (Some(b'%'), Some(b'=')) => Some(PercentAssign),
            (Some(b'&'), Some(b'=')) => Some(AmpAssign),
            (Some(b'+'), Some(b'+')) => Some(PlusPlus),
            (Some(b'-'), Some(b'-')) => Some(MinusMinus),
            (Some(b'*'), Some(b'*')) => Some(StarStar),
            (Some(b'-'), Some(b'>')) => Some(Arrow),
            (Some(b'='), Some(b'>')) => Some(Arrow),
            _ => None,
        };

        if let Some(kind) = two {
            let lexeme: String = [self.peek().unwrap() as char, self.peek_at(1).unwrap() as char]
                .iter()
                .collect();
            self.advance();
            self.advance();
            return Some(Token::new(kind, lexeme, start));
        }

        let single = match self.peek()? {
            b'+' => Some(Plus),
            b'-' => Some(Minus),
            b'*' => Some(Star),
            b'/' => Some(Slash),
            b'%' => Some(Percent),
            b'=' => Some(Assign),
            b'<' => Some(Less),
            b'>' => Some(Greater),
            b'!' => Some(Not),
            b'&' => Some(Amp),
            b'|' => Some(Pipe),
            b'(' => Some(LParen),
            b')' => Some(RParen),
            b'[' => Some(LBracket),
            b']' => Some(RBracket),
            b'{' => Some(LBrace),
            b'}' => Some(RBrace),
            b';' => Some(Semicolon),
            b':' => Some(Colon),
            b',' => Some(Comma),
            b'.' => Some(Dot),
            _ => None,
        };

        match single {
            Some(kind) => {
                let lexeme = (self.peek().unwrap() as char).to_string();
                self.advance();
                Some(Token::new(kind, lexeme, start))
            }
            None => {
                trace!(
                    "skipping unknown byte {:?} at {start}",
                    self.peek().map(|b| b as char)
                );
                self.advance();
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        Lexer::new("t.pn", src)
            .lex()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    fn lex(src: &str) -> Vec<Token> {
        Lexer::new("t.pn", src).lex().unwrap()
    }

    #[test]
    fn numeric_prefixes_select_kind() {
        let cases = [
            ("0b1010", TokenKind::BinaryLiteral, "1010"),
            ("0o755", TokenKind::OctalLiteral, "755"),
            ("0xFF", TokenKind::HexLiteral, "FF"),
            ("3.14", TokenKind::FloatLiteral, "3.14"),
            ("42", TokenKind::IntLiteral, "42"),
        ];
        for (src, kind, lexeme) in cases {
            let tokens = lex(src);
            assert_eq!(tokens[0].kind, kind, "{src}");
            assert_eq!(tokens[0].lexeme, lexeme, "{src}");
        }
    }

    #[test]
    fn dot_without_trailing_digit_stays_separate() {
        // "1." has no digit after the dot: should NOT promote to a float.
        let tokens = lex("1.x");
        assert_eq!(tokens[0].kind, TokenKind::IntLiteral);
        assert_eq!(tokens[0].lexeme, "1");
        assert_eq!(tokens[1].kind, TokenKind::Dot);
        assert_eq!(tokens[2].kind, TokenKind::Identifier);
    }

    #[test]
    fn newline_count_matches_source_excluding_comments() {
        let src = "var x = 1\n// comment\nvar y = 2\n/* block\ncomment */\nvar z = 3\n";
        let newline_count = kinds(src)
            .iter()
            .filter(|k| **k == TokenKind::Newline)
            .count();
        // three statement-terminating newlines are outside comments;
        // the comments themselves (including the one embedded newline
        // inside the block comment) contribute none.
        assert_eq!(newline_count, 3);
    }

    #[test]
    fn two_char_operators_take_priority_over_prefix() {
        assert_eq!(
            kinds("a == b"),
            vec![
                TokenKind::Identifier,
                TokenKind::EqEq,
                TokenKind::Identifier,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn fat_and_thin_arrows_collapse_to_one_kind() {
        assert_eq!(kinds("->")[0], TokenKind::Arrow);
        assert_eq!(kinds("=>")[0], TokenKind::Arrow);
    }

    #[test]
    fn string_literal_strips_quotes_but_keeps_escapes() {
        let tokens = lex(r#""a\"b""#);
        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[0].lexeme, r#"a\"b"#);
    }

    #[test]
    fn char_literal_drops_backslash_but_keeps_escaped_char() {
        let tokens = lex(r"'\n'");
        assert_eq!(tokens[0].kind, TokenKind::CharLiteral);
        assert_eq!(tokens[0].lexeme, "n");
    }

    #[test]
    fn unterminated_string_is_fatal() {
        let err = Lexer::new("t.pn", "\"oops").lex().unwrap_err();
        assert!(err.message.contains("unterminated string"));
    }

    #[test]
    fn unterminated_block_comment_is_fatal() {
        let err = Lexer::new("t.pn", "/* never closes").lex().unwrap_err();
        assert!(err.message.contains("unterminated block comment"));
    }

    #[test]
    fn unknown_bytes_are_skipped_not_errors() {
        let tokens = lex("a @ b");
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn round_trip_for_non_quoted_tokens() {
        let src = "var x = 1 0xFF 0o755 0b1010";
        for token in lex(src) {
            if matches!(token.kind, TokenKind::StringLiteral | TokenKind::CharLiteral | TokenKind::Eof) {
                continue;
            }
            let col = token.location.column - 1;
            let slice = &src[col..col + token.lexeme.len()];
            assert_eq!(slice, token.lexeme, "{:?}", token.kind);
        }
    }

    #[test]
    fn bom_is_stripped() {
        let src = format!("{BOM}var x = 1");
        let tokens = lex(&src);
        assert_eq!(tokens[0].kind, TokenKind::Var);
        assert_eq!(tokens[0].location.column, 1);
    }
}
