//! Streaming Java source writer.

use std::{
    fmt,
    fs::File,
    path::{Path, PathBuf},
};

use gobridge_core::{append_synced, create_file};

use crate::{
    error::{EmitError, Result},
    indent::{IndentState, LineMode},
};

/// One `Type name` entry of a Java parameter list.
///
/// An empty type renders the bare name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaParam {
    pub ty: String,
    pub name: String,
}

impl JavaParam {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for JavaParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ty.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{} {}", self.ty, self.name)
        }
    }
}

fn param_list(params: &[JavaParam]) -> String {
    params
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn class_modifier(keyword: &str, name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => format!(" {keyword} {name}"),
        _ => String::new(),
    }
}

/// Writes one Java file line by line, indenting from brace structure.
///
/// Every line is persisted before the write returns. The writer must be
/// [opened](JavaWriter::open) before writing and [closed](JavaWriter::close)
/// afterwards; dropping it also releases the file.
///
/// # Example
///
/// ```no_run
/// use gobridge_codegen_java::JavaWriter;
///
/// # fn main() -> gobridge_codegen_java::Result<()> {
/// let mut writer = JavaWriter::new("out/Example.java");
/// writer.open()?;
/// writer.write_class_header("Example", None, None)?;
/// writer.write_return_literal("Example")?;
/// writer.write_close()?;
/// writer.close()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct JavaWriter {
    path: PathBuf,
    file: Option<File>,
    indent: IndentState,
}

impl JavaWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: None,
            indent: IndentState::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Retarget the writer. Fails while a file is open.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        if self.is_open() {
            return Err(EmitError::AlreadyOpen {
                path: self.path.clone(),
            });
        }
        self.path = path.into();
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    /// Current block depth.
    pub fn depth(&self) -> usize {
        self.indent.depth()
    }

    /// Create the target file and its parent directories, truncating any
    /// existing file.
    pub fn open(&mut self) -> Result<()> {
        if self.is_open() {
            return Err(EmitError::AlreadyOpen {
                path: self.path.clone(),
            });
        }
        let file = create_file(&self.path).map_err(|source| EmitError::Create {
            path: self.path.clone(),
            source,
        })?;
        self.file = Some(file);
        self.indent = IndentState::new();
        Ok(())
    }

    /// Flush and release the file.
    pub fn close(&mut self) -> Result<()> {
        let file = self.file.take().ok_or_else(|| EmitError::NotOpen {
            path: self.path.clone(),
        })?;
        file.sync_all().map_err(|source| EmitError::Write {
            path: self.path.clone(),
            source,
        })
    }

    // =========================================================================
    // Semantic writes
    // =========================================================================

    pub fn write_package(&mut self, package: &str) -> Result<()> {
        self.write_flat(&format!("package {package};"))
    }

    pub fn write_import(&mut self, import: &str) -> Result<()> {
        self.write_flat(&format!("import {import};"))
    }

    pub fn write_class_header(
        &mut self,
        name: &str,
        extends: Option<&str>,
        implements: Option<&str>,
    ) -> Result<()> {
        let line = format!(
            "public class {name}{}{} {{",
            class_modifier("extends", extends),
            class_modifier("implements", implements)
        );
        self.write_line(&line, LineMode::Stepping)
    }

    pub fn write_constructor_header(&mut self, class: &str, params: &[JavaParam]) -> Result<()> {
        let line = format!("public {class}({}) {{", param_list(params));
        self.write_line(&line, LineMode::Stepping)
    }

    pub fn write_super(&mut self, arg: &str) -> Result<()> {
        self.write_line(&format!("super({arg});"), LineMode::Stepping)
    }

    pub fn write_annotation(&mut self, name: &str) -> Result<()> {
        self.write_line(&format!("@{name}"), LineMode::Level)
    }

    pub fn write_method_header(
        &mut self,
        return_type: &str,
        name: &str,
        params: &[JavaParam],
    ) -> Result<()> {
        let line = format!("public {return_type} {name}({}) {{", param_list(params));
        self.write_line(&line, LineMode::Stepping)
    }

    /// A method-body statement; the terminating `;` is appended.
    pub fn write_statement(&mut self, body: &str) -> Result<()> {
        self.write_line(&format!("{body};"), LineMode::Level)
    }

    pub fn write_try(&mut self) -> Result<()> {
        self.write_line("try {", LineMode::Stepping)
    }

    /// Close the open `try` with a catch of `Exception e` running `body`.
    pub fn write_catch(&mut self, body: &str) -> Result<()> {
        self.write_line("} catch(Exception e) {", LineMode::Stepping)?;
        self.write_line(&format!("{body};"), LineMode::Stepping)?;
        self.write_line("}", LineMode::Level)
    }

    pub fn write_return(&mut self, expr: &str) -> Result<()> {
        self.write_line(&format!("return {expr};"), LineMode::Stepping)
    }

    /// `return "text";`
    pub fn write_return_literal(&mut self, text: &str) -> Result<()> {
        self.write_return(&format!("\"{text}\""))
    }

    pub fn write_blank(&mut self, count: usize) -> Result<()> {
        self.append(&"\n".repeat(count))
    }

    pub fn write_close(&mut self) -> Result<()> {
        self.write_line("}", LineMode::Stepping)
    }

    // =========================================================================
    // Line primitives
    // =========================================================================

    fn write_line(&mut self, line: &str, mode: LineMode) -> Result<()> {
        let depth = self.indent.enter(line);
        let result = self.write_flat(&format!("{}{line}", IndentState::prefix(depth)));
        self.indent.settle(line, mode);
        result
    }

    /// Write without indentation or state changes.
    fn write_flat(&mut self, line: &str) -> Result<()> {
        self.append(&format!("{line}\n"))
    }

    fn append(&mut self, text: &str) -> Result<()> {
        let file = self.file.as_mut().ok_or_else(|| EmitError::NotOpen {
            path: self.path.clone(),
        })?;
        append_synced(file, text.as_bytes()).map_err(|source| EmitError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
