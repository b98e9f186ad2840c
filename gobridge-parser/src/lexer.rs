//! Go tokenizer with automatic semicolon insertion.

use thiserror::Error;

use crate::token::{LiteralKind, Span, Token, TokenKind};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unterminated string literal")]
    UnterminatedString { span: Span },
    #[error("unterminated raw string literal")]
    UnterminatedRawString { span: Span },
    #[error("unterminated rune literal")]
    UnterminatedRune { span: Span },
    #[error("unterminated block comment")]
    UnterminatedComment { span: Span },
    #[error("unexpected character `{ch}`")]
    UnexpectedCharacter { ch: char, span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            Self::UnterminatedString { span }
            | Self::UnterminatedRawString { span }
            | Self::UnterminatedRune { span }
            | Self::UnterminatedComment { span }
            | Self::UnexpectedCharacter { span, .. } => *span,
        }
    }
}

/// Operators ordered longest first so the first match wins.
const OPERATORS: &[&str] = &[
    "<<=", ">>=", "&^=", "...", "&&", "||", "<-", "++", "--", "==", "!=", "<=", ">=", ":=", "+=",
    "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<", ">>", "&^", "+", "-", "*", "/", "%", "&", "|",
    "^", "<", ">", "=", "!", "(", ")", "[", "]", "{", "}", ",", ";", ".", ":", "~",
];

/// Tokenize Go source. The returned stream always ends with [`TokenKind::Eof`].
pub fn tokenize(src: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(src).run()
}

struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<Token>, LexError> {
        while let Some(c) = self.peek() {
            let start = self.pos;
            match c {
                '\n' => {
                    self.insert_semicolon(start);
                    self.bump();
                }
                ' ' | '\t' | '\r' => {
                    self.bump();
                }
                '/' if self.peek_at(1) == Some('/') => self.line_comment(),
                '/' if self.peek_at(1) == Some('*') => self.block_comment()?,
                '"' => self.string()?,
                '`' => self.raw_string()?,
                '\'' => self.rune()?,
                c if c.is_ascii_digit() => self.number(),
                '.' if self.peek_at(1).is_some_and(|n| n.is_ascii_digit()) => self.number(),
                c if is_ident_start(c) => self.ident(),
                _ => self.operator()?,
            }
        }
        self.insert_semicolon(self.pos);
        let end = Span::new(self.pos, self.pos);
        self.tokens.push(Token::new(TokenKind::Eof, end));
        Ok(self.tokens)
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek_at(&self, n: usize) -> Option<char> {
        self.src[self.pos..].chars().nth(n)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn push(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token::new(kind, Span::new(start, self.pos)));
    }

    /// Emit a semicolon at `at` if the previous token may end a statement.
    fn insert_semicolon(&mut self, at: usize) {
        let ends_line = self
            .tokens
            .last()
            .is_some_and(|token| token.kind.ends_line());
        if ends_line {
            self.tokens
                .push(Token::new(TokenKind::Semicolon, Span::new(at, at)));
        }
    }

    fn line_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.bump();
        }
    }

    fn block_comment(&mut self) -> Result<(), LexError> {
        let start = self.pos;
        self.pos += 2;
        match self.src[self.pos..].find("*/") {
            Some(offset) => {
                let body = &self.src[self.pos..self.pos + offset];
                self.pos += offset + 2;
                if body.contains('\n') {
                    self.insert_semicolon(start);
                }
                Ok(())
            }
            None => Err(LexError::UnterminatedComment {
                span: Span::new(start, self.src.len()),
            }),
        }
    }

    fn string(&mut self) -> Result<(), LexError> {
        let start = self.pos;
        self.bump();
        loop {
            match self.bump() {
                Some('"') => break,
                Some('\\') => {
                    self.bump();
                }
                Some('\n') | None => {
                    return Err(LexError::UnterminatedString {
                        span: Span::new(start, self.pos),
                    });
                }
                Some(_) => {}
            }
        }
        self.push(TokenKind::Literal(LiteralKind::String), start);
        Ok(())
    }

    fn raw_string(&mut self) -> Result<(), LexError> {
        let start = self.pos;
        self.bump();
        match self.src[self.pos..].find('`') {
            Some(offset) => {
                self.pos += offset + 1;
                self.push(TokenKind::Literal(LiteralKind::RawString), start);
                Ok(())
            }
            None => Err(LexError::UnterminatedRawString {
                span: Span::new(start, self.src.len()),
            }),
        }
    }

    fn rune(&mut self) -> Result<(), LexError> {
        let start = self.pos;
        self.bump();
        loop {
            match self.bump() {
                Some('\'') => break,
                Some('\\') => {
                    self.bump();
                }
                Some('\n') | None => {
                    return Err(LexError::UnterminatedRune {
                        span: Span::new(start, self.pos),
                    });
                }
                Some(_) => {}
            }
        }
        self.push(TokenKind::Literal(LiteralKind::Rune), start);
        Ok(())
    }

    fn number(&mut self) {
        let start = self.pos;
        let hex = self.src[start..].starts_with("0x") || self.src[start..].starts_with("0X");
        let mut prev = '\0';
        while let Some(c) = self.peek() {
            let exponent_sign = (c == '+' || c == '-')
                && (matches!(prev, 'p' | 'P') || (!hex && matches!(prev, 'e' | 'E')));
            if c.is_ascii_alphanumeric() || c == '_' || c == '.' || exponent_sign {
                prev = c;
                self.bump();
            } else {
                break;
            }
        }
        self.push(TokenKind::Literal(LiteralKind::Number), start);
    }

    fn ident(&mut self) {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.bump();
            } else {
                break;
            }
        }
        let word = &self.src[start..self.pos];
        let kind = TokenKind::keyword(word).unwrap_or_else(|| TokenKind::Ident(word.to_string()));
        self.push(kind, start);
    }

    fn operator(&mut self) -> Result<(), LexError> {
        let start = self.pos;
        let rest = &self.src[start..];
        let Some(op) = OPERATORS.iter().find(|op| rest.starts_with(**op)) else {
            let ch = self.peek().unwrap_or('\0');
            return Err(LexError::UnexpectedCharacter {
                ch,
                span: Span::new(start, start + ch.len_utf8()),
            });
        };
        self.pos += op.len();
        let kind = match *op {
            "(" => TokenKind::LParen,
            ")" => TokenKind::RParen,
            "{" => TokenKind::LBrace,
            "}" => TokenKind::RBrace,
            "[" => TokenKind::LBracket,
            "]" => TokenKind::RBracket,
            "," => TokenKind::Comma,
            "." => TokenKind::Dot,
            "..." => TokenKind::Ellipsis,
            ";" => TokenKind::Semicolon,
            "*" => TokenKind::Star,
            "<-" => TokenKind::Arrow,
            "++" => TokenKind::Inc,
            "--" => TokenKind::Dec,
            _ => TokenKind::Operator,
        };
        self.push(kind, start);
        Ok(())
    }
}

fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        tokenize(src)
            .unwrap()
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    fn ident(name: &str) -> TokenKind {
        TokenKind::Ident(name.to_string())
    }

    #[test]
    fn test_package_clause() {
        assert_eq!(
            kinds("package hello\n"),
            vec![
                TokenKind::Package,
                ident("hello"),
                TokenKind::Semicolon,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_semicolon_inserted_at_end_of_input() {
        assert_eq!(
            kinds("return"),
            vec![TokenKind::Return, TokenKind::Semicolon, TokenKind::Eof]
        );
    }

    #[test]
    fn test_no_semicolon_after_open_brace() {
        assert_eq!(
            kinds("func F() {\n}\n"),
            vec![
                TokenKind::Func,
                ident("F"),
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::Semicolon,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_eq!(
            kinds("// doc\nx /* inline */ y"),
            vec![ident("x"), ident("y"), TokenKind::Semicolon, TokenKind::Eof]
        );
    }

    #[test]
    fn test_multiline_block_comment_acts_as_newline() {
        assert_eq!(
            kinds("x /*\n*/ y"),
            vec![
                ident("x"),
                TokenKind::Semicolon,
                ident("y"),
                TokenKind::Semicolon,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_literals() {
        assert_eq!(
            kinds(r#""a\"b" `raw
string` 'x' 0x1F 1.5e-3"#),
            vec![
                TokenKind::Literal(LiteralKind::String),
                TokenKind::Literal(LiteralKind::RawString),
                TokenKind::Literal(LiteralKind::Rune),
                TokenKind::Literal(LiteralKind::Number),
                TokenKind::Literal(LiteralKind::Number),
                TokenKind::Semicolon,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_type_operators() {
        assert_eq!(
            kinds("*T ...int <-chan"),
            vec![
                TokenKind::Star,
                ident("T"),
                TokenKind::Ellipsis,
                ident("int"),
                TokenKind::Arrow,
                TokenKind::Chan,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_unicode_identifier() {
        assert_eq!(
            kinds("Größe"),
            vec![ident("Größe"), TokenKind::Semicolon, TokenKind::Eof]
        );
    }

    #[test]
    fn test_unterminated_string() {
        let err = tokenize("\"abc\n").unwrap_err();
        assert!(matches!(err, LexError::UnterminatedString { .. }));
        assert_eq!(err.span().start, 0);
    }

    #[test]
    fn test_unterminated_comment() {
        let err = tokenize("x /* never closed").unwrap_err();
        assert!(matches!(err, LexError::UnterminatedComment { .. }));
    }

    #[test]
    fn test_unexpected_character() {
        let err = tokenize("x @ y").unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedCharacter {
                ch: '@',
                span: Span::new(2, 3)
            }
        );
    }
}
