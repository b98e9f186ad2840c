//! React Native Java bridge generator for the gobridge generator.
//!
//! For every valid [`Declaration`] two files are written below the configured
//! output root, in the package `{root}.bridge.{package}`:
//!
//! - `{Name}Module.java` wraps each exported function in a `@ReactMethod`
//!   that resolves or rejects a `Promise`.
//! - `{Name}Package.java` registers the module with React Native.
//!
//! Files are streamed line by line through [`JavaWriter`], which infers
//! indentation from braces (see [`indent`]).

mod config;
mod error;
pub mod indent;
mod lifecycle;
mod module_builder;
pub mod naming;
mod package_builder;
mod writer;

use std::path::PathBuf;

use gobridge_core::Declaration;
use tracing::debug;

pub use config::{BridgeConfig, DEFAULT_CONTEXT_PARAM, DEFAULT_OUTPUT_ROOT, DEFAULT_PACKAGE_ROOT};
pub use error::{EmitError, Result};
pub use indent::{IndentState, LineMode, Pending};
pub use lifecycle::BuildState;
pub use module_builder::ModuleBuilder;
pub use package_builder::PackageBuilder;
pub use writer::{JavaParam, JavaWriter};

/// Paths of the two files generated for one declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBridge {
    pub module: PathBuf,
    pub package: PathBuf,
}

/// Build both bridge files for `decl`.
///
/// Returns `None` without touching the filesystem when the declaration is
/// not valid. Both builders are closed on every path.
pub fn generate_bridge(
    decl: &Declaration,
    config: &BridgeConfig,
) -> Result<Option<GeneratedBridge>> {
    if !decl.is_valid() {
        debug!(package = %decl.package_name, "skipping declaration without exported functions");
        return Ok(None);
    }

    let mut module = ModuleBuilder::new(config.clone());
    let built = module.build(decl);
    let module_path = finish(built, module.close())?;

    let mut package = PackageBuilder::new(config.clone());
    let built = package.build(decl);
    let package_path = finish(built, package.close())?;

    Ok(Some(GeneratedBridge {
        module: module_path,
        package: package_path,
    }))
}

/// The build error wins over the close error.
fn finish<T>(built: Result<T>, closed: Result<()>) -> Result<T> {
    let value = built?;
    closed?;
    Ok(value)
}
