//! Recursive-descent parser for Go top-level declarations.

use thiserror::Error;

use crate::{
    ast::{ChanDir, Field, FuncDecl, SourceFile, TypeExpr},
    lexer::{LexError, tokenize},
    token::{LiteralKind, Span, Token, TokenKind},
};

/// A lexical or syntax error at a byte span of the input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct SyntaxError {
    pub message: String,
    pub span: Span,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}

impl From<LexError> for SyntaxError {
    fn from(err: LexError) -> Self {
        Self::new(err.to_string(), err.span())
    }
}

/// Parse one Go source file.
pub fn parse_source(src: &str) -> Result<SourceFile, SyntaxError> {
    let tokens = tokenize(src)?;
    Parser::new(tokens).parse_file()
}

/// One comma-separated entry of a parameter list before grouping is resolved.
enum ParamEntry {
    /// A lone identifier: a name if the list is named, a type otherwise.
    Bare(String, Span),
    Named(String, TypeExpr),
    Type(TypeExpr),
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    // =========================================================================
    // Token cursor
    // =========================================================================

    fn peek(&self) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[self.pos.min(last)]
    }

    fn peek_kind(&self) -> &TokenKind {
        &self.peek().kind
    }

    fn nth_kind(&self, n: usize) -> &TokenKind {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + n).min(last)].kind
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        token
    }

    fn at(&self, kind: &TokenKind) -> bool {
        self.peek_kind() == kind
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.at(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, SyntaxError> {
        if self.at(&kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(&kind.to_string()))
        }
    }

    fn expect_ident(&mut self) -> Result<(String, Span), SyntaxError> {
        match self.peek_kind().clone() {
            TokenKind::Ident(name) => {
                let token = self.advance();
                Ok((name, token.span))
            }
            _ => Err(self.unexpected("identifier")),
        }
    }

    fn unexpected(&self, expected: &str) -> SyntaxError {
        let token = self.peek();
        SyntaxError::new(
            format!("expected {expected}, found {}", token.kind),
            token.span,
        )
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    fn parse_file(mut self) -> Result<SourceFile, SyntaxError> {
        while self.eat(&TokenKind::Semicolon) {}
        self.expect(TokenKind::Package)?;
        let (package, _) = self.expect_ident()?;
        self.expect_terminator()?;

        let mut funcs = Vec::new();
        loop {
            match self.peek_kind().clone() {
                TokenKind::Eof => break,
                TokenKind::Semicolon => {
                    self.advance();
                }
                TokenKind::Import => self.skip_import_decl()?,
                TokenKind::Func => funcs.push(self.parse_func_decl()?),
                TokenKind::Type | TokenKind::Var | TokenKind::Const => self.skip_decl()?,
                _ => return Err(self.unexpected("declaration")),
            }
        }

        Ok(SourceFile { package, funcs })
    }

    /// A declaration ends at `;` (explicit or inserted) or at end of file.
    fn expect_terminator(&mut self) -> Result<(), SyntaxError> {
        if self.eat(&TokenKind::Semicolon) || self.at(&TokenKind::Eof) {
            Ok(())
        } else {
            Err(self.unexpected("`;` or newline"))
        }
    }

    fn skip_import_decl(&mut self) -> Result<(), SyntaxError> {
        self.expect(TokenKind::Import)?;
        if self.eat(&TokenKind::LParen) {
            while !self.eat(&TokenKind::RParen) {
                if self.eat(&TokenKind::Semicolon) {
                    continue;
                }
                self.skip_import_spec()?;
                if !self.at(&TokenKind::RParen) {
                    self.expect_terminator()?;
                }
            }
        } else {
            self.skip_import_spec()?;
        }
        self.expect_terminator()
    }

    /// An optional name or `.` followed by the quoted import path.
    fn skip_import_spec(&mut self) -> Result<(), SyntaxError> {
        if matches!(self.peek_kind(), TokenKind::Ident(_) | TokenKind::Dot) {
            self.advance();
        }
        match self.peek_kind() {
            TokenKind::Literal(LiteralKind::String | LiteralKind::RawString) => {
                self.advance();
                Ok(())
            }
            _ => Err(self.unexpected("import path")),
        }
    }

    fn parse_func_decl(&mut self) -> Result<FuncDecl, SyntaxError> {
        let start = self.expect(TokenKind::Func)?.span.start;

        let receiver = if self.at(&TokenKind::LParen) {
            let mut fields = self.parse_parameters()?;
            if fields.is_empty() {
                return Err(SyntaxError::new(
                    "method has no receiver",
                    Span::new(start, self.peek().span.start),
                ));
            }
            Some(fields.remove(0))
        } else {
            None
        };

        let (name, _) = self.expect_ident()?;

        let generic = self.at(&TokenKind::LBracket);
        if generic {
            self.skip_balanced()?;
        }

        let params = self.parse_parameters()?;
        let results = self.parse_results()?;

        if self.at(&TokenKind::LBrace) {
            self.skip_balanced()?;
        }
        self.expect_terminator()?;

        Ok(FuncDecl {
            name,
            receiver,
            generic,
            params,
            results,
        })
    }

    /// Skip a `type`, `var` or `const` declaration.
    fn skip_decl(&mut self) -> Result<(), SyntaxError> {
        self.advance();
        loop {
            match self.peek_kind().clone() {
                TokenKind::Semicolon => {
                    self.advance();
                    return Ok(());
                }
                TokenKind::Eof => return Ok(()),
                kind if kind.is_opener() => self.skip_balanced()?,
                kind if kind.is_closer() => return Err(self.unexpected("declaration")),
                _ => {
                    self.advance();
                }
            }
        }
    }

    /// Skip from an opening delimiter to its matching close, inclusive.
    fn skip_balanced(&mut self) -> Result<(), SyntaxError> {
        let open = self.advance();
        let mut depth = 1usize;
        while depth > 0 {
            let token = self.advance();
            match token.kind {
                TokenKind::Eof => {
                    return Err(SyntaxError::new(
                        format!("unclosed {}", open.kind),
                        open.span,
                    ));
                }
                ref kind if kind.is_opener() => depth += 1,
                ref kind if kind.is_closer() => depth -= 1,
                _ => {}
            }
        }
        Ok(())
    }

    // =========================================================================
    // Signatures
    // =========================================================================

    fn parse_results(&mut self) -> Result<Vec<Field>, SyntaxError> {
        if self.at(&TokenKind::LParen) {
            return self.parse_parameters();
        }
        if self.starts_type() {
            return Ok(vec![Field::unnamed(self.parse_type()?)]);
        }
        Ok(Vec::new())
    }

    fn parse_parameters(&mut self) -> Result<Vec<Field>, SyntaxError> {
        let open = self.expect(TokenKind::LParen)?.span;
        let mut entries = Vec::new();
        while !self.at(&TokenKind::RParen) {
            entries.push(self.parse_param_entry()?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        let close = self.expect(TokenKind::RParen)?.span;
        group_parameters(entries, Span::new(open.start, close.end))
    }

    fn parse_param_entry(&mut self) -> Result<ParamEntry, SyntaxError> {
        if let TokenKind::Ident(name) = self.peek_kind().clone() {
            match self.nth_kind(1).clone() {
                TokenKind::Dot => {}
                TokenKind::Comma | TokenKind::RParen => {
                    let token = self.advance();
                    return Ok(ParamEntry::Bare(name, token.span));
                }
                TokenKind::Ellipsis => {
                    self.advance();
                    self.advance();
                    let ty = TypeExpr::Variadic(Box::new(self.parse_type()?));
                    return Ok(ParamEntry::Named(name, ty));
                }
                _ => {
                    self.advance();
                    return Ok(ParamEntry::Named(name, self.parse_type()?));
                }
            }
        }
        if self.eat(&TokenKind::Ellipsis) {
            return Ok(ParamEntry::Type(TypeExpr::Variadic(Box::new(
                self.parse_type()?,
            ))));
        }
        Ok(ParamEntry::Type(self.parse_type()?))
    }

    fn starts_type(&self) -> bool {
        matches!(
            self.peek_kind(),
            TokenKind::Ident(_)
                | TokenKind::Star
                | TokenKind::LBracket
                | TokenKind::LParen
                | TokenKind::Map
                | TokenKind::Chan
                | TokenKind::Arrow
                | TokenKind::Func
                | TokenKind::Struct
                | TokenKind::Interface
        )
    }

    fn parse_type(&mut self) -> Result<TypeExpr, SyntaxError> {
        match self.peek_kind().clone() {
            TokenKind::Ident(name) => {
                self.advance();
                let ty = if self.eat(&TokenKind::Dot) {
                    let (member, _) = self.expect_ident()?;
                    TypeExpr::Qualified {
                        package: name,
                        name: member,
                    }
                } else {
                    TypeExpr::Named(name)
                };
                if self.at(&TokenKind::LBracket) {
                    let args = self.parse_type_args()?;
                    return Ok(TypeExpr::Generic {
                        base: Box::new(ty),
                        args,
                    });
                }
                Ok(ty)
            }
            TokenKind::Star => {
                self.advance();
                Ok(TypeExpr::Pointer(Box::new(self.parse_type()?)))
            }
            TokenKind::LBracket => {
                if matches!(self.nth_kind(1), TokenKind::RBracket) {
                    self.advance();
                    self.advance();
                    Ok(TypeExpr::Slice(Box::new(self.parse_type()?)))
                } else {
                    self.skip_balanced()?;
                    Ok(TypeExpr::Array(Box::new(self.parse_type()?)))
                }
            }
            TokenKind::Map => {
                self.advance();
                self.expect(TokenKind::LBracket)?;
                let key = self.parse_type()?;
                self.expect(TokenKind::RBracket)?;
                let value = self.parse_type()?;
                Ok(TypeExpr::Map {
                    key: Box::new(key),
                    value: Box::new(value),
                })
            }
            TokenKind::Chan => {
                self.advance();
                let dir = if self.eat(&TokenKind::Arrow) {
                    ChanDir::Send
                } else {
                    ChanDir::Both
                };
                Ok(TypeExpr::Chan {
                    dir,
                    elem: Box::new(self.parse_type()?),
                })
            }
            TokenKind::Arrow => {
                self.advance();
                self.expect(TokenKind::Chan)?;
                Ok(TypeExpr::Chan {
                    dir: ChanDir::Recv,
                    elem: Box::new(self.parse_type()?),
                })
            }
            TokenKind::Func => {
                self.advance();
                let params = self.parse_parameters()?;
                let results = self.parse_results()?;
                Ok(TypeExpr::Func { params, results })
            }
            TokenKind::Struct => {
                self.advance();
                self.expect_block()?;
                Ok(TypeExpr::Struct)
            }
            TokenKind::Interface => {
                self.advance();
                self.expect_block()?;
                Ok(TypeExpr::Interface)
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_type()?;
                self.expect(TokenKind::RParen)?;
                Ok(TypeExpr::Paren(Box::new(inner)))
            }
            _ => Err(self.unexpected("type")),
        }
    }

    fn expect_block(&mut self) -> Result<(), SyntaxError> {
        if self.at(&TokenKind::LBrace) {
            self.skip_balanced()
        } else {
            Err(self.unexpected("`{`"))
        }
    }

    fn parse_type_args(&mut self) -> Result<Vec<TypeExpr>, SyntaxError> {
        self.expect(TokenKind::LBracket)?;
        let mut args = Vec::new();
        while !self.at(&TokenKind::RBracket) {
            args.push(self.parse_type()?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RBracket)?;
        Ok(args)
    }
}

/// Resolve Go's parameter grouping.
///
/// If any entry carries both a name and a type, every entry is named and bare
/// identifiers take the type of the next typed entry (`a, b int`). Otherwise
/// every entry is an unnamed type.
fn group_parameters(entries: Vec<ParamEntry>, list: Span) -> Result<Vec<Field>, SyntaxError> {
    let named = entries.iter().any(|e| matches!(e, ParamEntry::Named(..)));
    if !named {
        return Ok(entries
            .into_iter()
            .filter_map(|entry| match entry {
                ParamEntry::Bare(name, _) => Some(Field::unnamed(TypeExpr::Named(name))),
                ParamEntry::Type(ty) => Some(Field::unnamed(ty)),
                ParamEntry::Named(..) => None,
            })
            .collect());
    }

    let mixed = |span: Span| SyntaxError::new("mixed named and unnamed parameters", span);
    let mut fields = Vec::new();
    let mut pending: Vec<String> = Vec::new();
    let mut last_bare = None;
    for entry in entries {
        match entry {
            ParamEntry::Bare(name, span) => {
                pending.push(name);
                last_bare = Some(span);
            }
            ParamEntry::Named(name, ty) => {
                pending.push(name);
                fields.push(Field {
                    names: std::mem::take(&mut pending),
                    ty,
                });
                last_bare = None;
            }
            ParamEntry::Type(_) => return Err(mixed(list)),
        }
    }
    if let Some(span) = last_bare {
        return Err(mixed(span));
    }
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> SourceFile {
        parse_source(src).unwrap()
    }

    fn named(name: &str) -> TypeExpr {
        TypeExpr::Named(name.to_string())
    }

    fn only_func(src: &str) -> FuncDecl {
        let mut file = parse(src);
        assert_eq!(file.funcs.len(), 1);
        file.funcs.remove(0)
    }

    #[test]
    fn test_imports_are_skipped() {
        let file = parse(
            r#"package hello

import "fmt"
import (
	"strings"
	str "strconv"
	. "math"
)

func Greet() {}
"#,
        );

        assert_eq!(file.package, "hello");
        let names: Vec<_> = file.funcs.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Greet"]);
    }

    #[test]
    fn test_import_without_path() {
        let err = parse_source("package p
import fmt
").unwrap_err();
        assert_eq!(err.message, "expected import path, found `;` or newline");
    }

    #[test]
    fn test_simple_function() {
        let func = only_func(
            "package hello\n\nfunc Greet(name string) string {\n\treturn \"Hello, \" + name\n}\n",
        );

        assert_eq!(func.name, "Greet");
        assert!(!func.is_method());
        assert_eq!(
            func.params,
            vec![Field {
                names: vec!["name".into()],
                ty: named("string")
            }]
        );
        assert_eq!(func.results, vec![Field::unnamed(named("string"))]);
    }

    #[test]
    fn test_grouped_parameter_names() {
        let func = only_func("package p\nfunc Add(a, b int, label string) {}\n");

        assert_eq!(func.params.len(), 2);
        assert_eq!(func.params[0].names, vec!["a", "b"]);
        assert_eq!(func.params[0].ty, named("int"));
        assert_eq!(func.params[1].names, vec!["label"]);
    }

    #[test]
    fn test_unnamed_parameters() {
        let func = only_func("package p\nfunc F(int, string) {}\n");

        assert_eq!(
            func.params,
            vec![Field::unnamed(named("int")), Field::unnamed(named("string"))]
        );
    }

    #[test]
    fn test_multiple_results() {
        let func = only_func("package p\nfunc Div(a, b int) (q int, err error) {\n\treturn\n}\n");

        assert_eq!(func.results.len(), 2);
        assert_eq!(func.results[0].names, vec!["q"]);
        assert_eq!(func.results[1].ty, named("error"));
    }

    #[test]
    fn test_composite_types() {
        let func = only_func(
            "package p\nfunc F(a []string, b *int, c map[string]int, d [4]byte, e chan<- int, f <-chan int, g func(int) error, h time.Duration, i ...string) {}\n",
        );

        let types: Vec<_> = func.params.iter().map(|f| f.ty.clone()).collect();
        assert_eq!(types[0], TypeExpr::Slice(Box::new(named("string"))));
        assert_eq!(types[1], TypeExpr::Pointer(Box::new(named("int"))));
        assert!(matches!(types[2], TypeExpr::Map { .. }));
        assert_eq!(types[3], TypeExpr::Array(Box::new(named("byte"))));
        assert!(matches!(
            types[4],
            TypeExpr::Chan {
                dir: ChanDir::Send,
                ..
            }
        ));
        assert!(matches!(
            types[5],
            TypeExpr::Chan {
                dir: ChanDir::Recv,
                ..
            }
        ));
        assert!(matches!(types[6], TypeExpr::Func { .. }));
        assert_eq!(
            types[7],
            TypeExpr::Qualified {
                package: "time".into(),
                name: "Duration".into()
            }
        );
        assert_eq!(types[8], TypeExpr::Variadic(Box::new(named("string"))));
    }

    #[test]
    fn test_method_receiver() {
        let func = only_func("package p\nfunc (c *Counter) Inc() int { c.n++; return c.n }\n");

        assert!(func.is_method());
        assert_eq!(func.name, "Inc");
        assert_eq!(func.receiver.unwrap().names, vec!["c"]);
    }

    #[test]
    fn test_generic_function() {
        let func = only_func(
            "package p\nfunc Map[T any, U any](xs []T, f func(T) U) []U { return nil }\n",
        );

        assert!(func.generic);
        assert_eq!(func.params.len(), 2);
        assert_eq!(func.results, vec![Field::unnamed(TypeExpr::Slice(Box::new(named("U"))))]);
    }

    #[test]
    fn test_other_declarations_are_skipped() {
        let file = parse(
            r#"package p

type Point struct {
	X, Y int
}

var handler = func() {
	println("not a top-level func")
}

const (
	A = iota
	B
)

func Exported() {}
"#,
        );

        let names: Vec<_> = file.funcs.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Exported"]);
    }

    #[test]
    fn test_function_without_body() {
        let func = only_func("package p\nfunc now() int64\n");

        assert_eq!(func.name, "now");
        assert_eq!(func.results, vec![Field::unnamed(named("int64"))]);
    }

    #[test]
    fn test_missing_package_clause() {
        let err = parse_source("func F() {}\n").unwrap_err();
        assert_eq!(err.message, "expected `package`, found `func`");
    }

    #[test]
    fn test_unclosed_body() {
        let err = parse_source("package p\nfunc F() {\n").unwrap_err();
        assert_eq!(err.message, "unclosed `{`");
    }

    #[test]
    fn test_mixed_parameters_rejected() {
        let err = parse_source("package p\nfunc F(a int, string) {}\n").unwrap_err();
        assert_eq!(err.message, "mixed named and unnamed parameters");
    }

    #[test]
    fn test_lex_error_becomes_syntax_error() {
        let err = parse_source("package p\nvar s = \"open\n").unwrap_err();
        assert_eq!(err.message, "unterminated string literal");
        assert_eq!(err.span.start, 18);
    }
}
