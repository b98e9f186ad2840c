//! Syntax tree for the top-level declarations of a Go source file.
//!
//! Only what the extractor needs is kept: the package clause and function
//! signatures. Imports, bodies and other declarations are checked for shape
//! and skipped by the parser.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub package: String,
    pub funcs: Vec<FuncDecl>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    pub name: String,
    /// Present for methods.
    pub receiver: Option<Field>,
    /// Declares type parameters.
    pub generic: bool,
    pub params: Vec<Field>,
    pub results: Vec<Field>,
}

impl FuncDecl {
    pub fn is_method(&self) -> bool {
        self.receiver.is_some()
    }
}

/// One entry of a parameter or result list.
///
/// `names` is empty for unnamed entries and holds every name of a grouped
/// declaration such as `a, b int`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub names: Vec<String>,
    pub ty: TypeExpr,
}

impl Field {
    pub fn unnamed(ty: TypeExpr) -> Self {
        Self {
            names: Vec::new(),
            ty,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanDir {
    Both,
    Send,
    Recv,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    Named(String),
    Qualified {
        package: String,
        name: String,
    },
    Pointer(Box<TypeExpr>),
    Slice(Box<TypeExpr>),
    Array(Box<TypeExpr>),
    Map {
        key: Box<TypeExpr>,
        value: Box<TypeExpr>,
    },
    Chan {
        dir: ChanDir,
        elem: Box<TypeExpr>,
    },
    Func {
        params: Vec<Field>,
        results: Vec<Field>,
    },
    Struct,
    Interface,
    Generic {
        base: Box<TypeExpr>,
        args: Vec<TypeExpr>,
    },
    Paren(Box<TypeExpr>),
    /// `...T`, only valid as the last parameter.
    Variadic(Box<TypeExpr>),
}

impl TypeExpr {
    /// The identifier of a simple named type; `None` for every composite shape.
    pub fn simple_name(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            _ => None,
        }
    }
}
