//! Go source front end for the gobridge generator.
//!
//! The crate tokenizes and parses the top-level declarations of Go files,
//! then reduces each file to a [`gobridge_core::Declaration`] holding its
//! exported functions.
//!
//! # Module Organization
//!
//! - [`lexer`] / [`token`] - tokenization with automatic semicolon insertion
//! - [`parser`] / [`ast`] - top-level declarations and function signatures
//! - [`extract`] - exportedness filter and declaration extraction
//! - [`package`] - package directory discovery and GOPATH lookup

pub mod ast;
mod error;
pub mod extract;
pub mod lexer;
pub mod package;
pub mod parser;
pub mod token;

pub use error::{Error, Result};
pub use extract::{Extractor, GoVisibility, Visibility};
pub use package::{
    ParsedFile, ParsedPackage, extract_package, is_test_file, locate_package, package_dir,
    parse_file, parse_package_dir,
};
pub use parser::{SyntaxError, parse_source};
