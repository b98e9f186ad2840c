use std::fmt;

use miette::SourceSpan;

/// Byte range of a token or node in its source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Number,
    Rune,
    String,
    RawString,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Ident(String),
    Literal(LiteralKind),

    // Keywords the parser inspects
    Package,
    Import,
    Func,
    Type,
    Var,
    Const,
    Struct,
    Interface,
    Map,
    Chan,
    Break,
    Continue,
    Fallthrough,
    Return,
    /// case, default, defer, else, for, go, goto, if, range, select, switch
    Keyword,

    // Delimiters
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Dot,
    Ellipsis,
    /// Explicit `;` or one inserted at a line end.
    Semicolon,

    // Operators with a role in type syntax
    Star,
    Arrow,
    Inc,
    Dec,
    /// Any other operator
    Operator,

    Eof,
}

impl TokenKind {
    /// Keyword for `word`, or `None` if it is an identifier.
    pub fn keyword(word: &str) -> Option<Self> {
        let kind = match word {
            "package" => Self::Package,
            "import" => Self::Import,
            "func" => Self::Func,
            "type" => Self::Type,
            "var" => Self::Var,
            "const" => Self::Const,
            "struct" => Self::Struct,
            "interface" => Self::Interface,
            "map" => Self::Map,
            "chan" => Self::Chan,
            "break" => Self::Break,
            "continue" => Self::Continue,
            "fallthrough" => Self::Fallthrough,
            "return" => Self::Return,
            "case" | "default" | "defer" | "else" | "for" | "go" | "goto" | "if" | "range"
            | "select" | "switch" => Self::Keyword,
            _ => return None,
        };
        Some(kind)
    }

    /// Whether a newline after this token ends the statement.
    pub fn ends_line(&self) -> bool {
        matches!(
            self,
            Self::Ident(_)
                | Self::Literal(_)
                | Self::Break
                | Self::Continue
                | Self::Fallthrough
                | Self::Return
                | Self::Inc
                | Self::Dec
                | Self::RParen
                | Self::RBracket
                | Self::RBrace
        )
    }

    pub fn is_opener(&self) -> bool {
        matches!(self, Self::LParen | Self::LBrace | Self::LBracket)
    }

    pub fn is_closer(&self) -> bool {
        matches!(self, Self::RParen | Self::RBrace | Self::RBracket)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(name) => write!(f, "identifier `{name}`"),
            Self::Literal(_) => f.write_str("literal"),
            Self::Package => f.write_str("`package`"),
            Self::Import => f.write_str("`import`"),
            Self::Func => f.write_str("`func`"),
            Self::Type => f.write_str("`type`"),
            Self::Var => f.write_str("`var`"),
            Self::Const => f.write_str("`const`"),
            Self::Struct => f.write_str("`struct`"),
            Self::Interface => f.write_str("`interface`"),
            Self::Map => f.write_str("`map`"),
            Self::Chan => f.write_str("`chan`"),
            Self::Break => f.write_str("`break`"),
            Self::Continue => f.write_str("`continue`"),
            Self::Fallthrough => f.write_str("`fallthrough`"),
            Self::Return => f.write_str("`return`"),
            Self::Keyword => f.write_str("keyword"),
            Self::LParen => f.write_str("`(`"),
            Self::RParen => f.write_str("`)`"),
            Self::LBrace => f.write_str("`{`"),
            Self::RBrace => f.write_str("`}`"),
            Self::LBracket => f.write_str("`[`"),
            Self::RBracket => f.write_str("`]`"),
            Self::Comma => f.write_str("`,`"),
            Self::Dot => f.write_str("`.`"),
            Self::Ellipsis => f.write_str("`...`"),
            Self::Semicolon => f.write_str("`;` or newline"),
            Self::Star => f.write_str("`*`"),
            Self::Arrow => f.write_str("`<-`"),
            Self::Inc => f.write_str("`++`"),
            Self::Dec => f.write_str("`--`"),
            Self::Operator => f.write_str("operator"),
            Self::Eof => f.write_str("end of file"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}
