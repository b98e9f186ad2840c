//! Names and paths derived from a Go package name.

use std::path::{Path, PathBuf};

use gobridge_core::to_lower_title_case;

/// Extension of every generated file.
pub const JAVA_EXTENSION: &str = "java";

/// Java package of the bridge classes: `{root}.bridge.{package}`.
///
/// An empty root yields `bridge.{package}`.
pub fn bridge_package(root: &str, package_name: &str) -> String {
    let package = package_name.to_lowercase();
    if root.is_empty() {
        format!("bridge.{package}")
    } else {
        format!("{root}.bridge.{package}")
    }
}

/// Directory path of a dotted Java package (`com.acme` -> `com/acme`).
pub fn package_path(java_package: &str) -> PathBuf {
    java_package
        .split('.')
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Class-name stem for a Go package (`hello` -> `Hello`).
pub fn type_name(package_name: &str) -> String {
    to_lower_title_case(package_name)
}

pub fn module_class(package_name: &str) -> String {
    format!("{}Module", type_name(package_name))
}

pub fn package_class(package_name: &str) -> String {
    format!("{}Package", type_name(package_name))
}

/// Import of the gomobile-generated class (`hello` -> `hello.Hello`).
pub fn go_import(package_name: &str) -> String {
    format!("{}.{}", package_name.to_lowercase(), type_name(package_name))
}

/// Java method name of an exported Go function (`Greet` -> `greet`).
pub fn method_name(callable: &str) -> String {
    callable.to_lowercase()
}

/// `{output}/{package path}/{class}.java`
pub fn java_file_path(output: &Path, java_package: &str, class: &str) -> PathBuf {
    output
        .join(package_path(java_package))
        .join(class)
        .with_extension(JAVA_EXTENSION)
}
