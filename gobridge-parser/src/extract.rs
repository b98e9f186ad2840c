//! Reduce a parsed source file to its exported callables.

use gobridge_core::{Callable, Declaration, Parameter};
use tracing::debug;

use crate::ast::{Field, FuncDecl, SourceFile};

/// Name-based exportedness predicate of a source language.
pub trait Visibility {
    fn is_exported(&self, name: &str) -> bool;
}

/// Go visibility: a name is exported when it starts with an uppercase letter.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoVisibility;

impl Visibility for GoVisibility {
    fn is_exported(&self, name: &str) -> bool {
        name.chars().next().is_some_and(char::is_uppercase)
    }
}

/// Walks a [`SourceFile`] and records every exported package-level function.
///
/// Shapes the model cannot hold degrade silently:
/// - parameters whose type is not a simple named type are omitted;
/// - only the first result is kept, and a composite first result leaves an
///   untyped return slot;
/// - methods are skipped, as are unexported functions;
/// - generic functions are kept, but their type parameters are not bound.
#[derive(Debug, Clone, Default)]
pub struct Extractor<V = GoVisibility> {
    visibility: V,
}

impl Extractor<GoVisibility> {
    pub fn go() -> Self {
        Self::new(GoVisibility)
    }
}

impl<V: Visibility> Extractor<V> {
    pub fn new(visibility: V) -> Self {
        Self { visibility }
    }

    pub fn extract(&self, file: &SourceFile, package_name: &str) -> Declaration {
        let mut declaration = Declaration::new(package_name);
        for func in &file.funcs {
            if func.is_method() {
                debug!(package = package_name, function = %func.name, "skipping method");
                continue;
            }
            if !self.visibility.is_exported(&func.name) {
                debug!(package = package_name, function = %func.name, "function not exported");
                continue;
            }
            if func.generic {
                debug!(
                    package = package_name,
                    function = %func.name,
                    "type parameters are not bound"
                );
            }
            declaration.push(callable(func), return_slot(func));
        }
        declaration
    }
}

fn callable(func: &FuncDecl) -> Callable {
    let mut callable = Callable::new(&func.name);
    for field in &func.params {
        let Some(type_name) = field.ty.simple_name() else {
            debug!(
                function = %func.name,
                names = ?field.names,
                "omitting parameter with unsupported type"
            );
            continue;
        };
        if field.names.is_empty() {
            debug!(
                function = %func.name,
                type_name,
                "parameter has no name and cannot be forwarded"
            );
            callable.parameters.push(Parameter::new("", type_name));
        }
        for name in &field.names {
            callable.parameters.push(Parameter::new(name, type_name));
        }
    }
    callable
}

/// The first declared result only; further results are dropped.
fn return_slot(func: &FuncDecl) -> Parameter {
    let Some(Field { names, ty }) = func.results.first() else {
        return Parameter::empty();
    };
    if func.results.len() > 1 || names.len() > 1 {
        debug!(function = %func.name, "keeping only the first result");
    }
    let name = names.first().cloned().unwrap_or_default();
    let type_name = ty.simple_name().unwrap_or_default();
    Parameter::new(name, type_name)
}
