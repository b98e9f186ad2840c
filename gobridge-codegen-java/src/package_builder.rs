//! `{Name}Package.java`: the `ReactPackage` registering the bridge module.

use std::path::{Path, PathBuf};

use gobridge_core::Declaration;
use tracing::info;

use crate::{
    config::BridgeConfig,
    error::Result,
    lifecycle::{BridgeFile, BuildState},
    naming,
    writer::{JavaParam, JavaWriter},
};

const PACKAGE_IMPORTS: &[&str] = &[
    "com.facebook.react.ReactPackage",
    "com.facebook.react.bridge.JavaScriptModule",
    "com.facebook.react.bridge.NativeModule",
    "com.facebook.react.bridge.ReactApplicationContext",
    "com.facebook.react.uimanager.ViewManager",
    "java.util.ArrayList",
    "java.util.Collections",
    "java.util.List",
];

const PACKAGE_INTERFACE: &str = "ReactPackage";
const CONTEXT_TYPE: &str = "ReactApplicationContext";
const EMPTY_LIST: &str = "Collections.emptyList()";

/// Builds the package class for one [`Declaration`].
#[derive(Debug)]
pub struct PackageBuilder {
    config: BridgeConfig,
    file: BridgeFile,
}

impl PackageBuilder {
    pub fn new(config: BridgeConfig) -> Self {
        Self {
            config,
            file: BridgeFile::new(),
        }
    }

    pub fn state(&self) -> BuildState {
        self.file.state()
    }

    pub fn path(&self) -> Option<&Path> {
        self.file.path()
    }

    pub fn target_path(&self, package_name: &str) -> PathBuf {
        naming::java_file_path(
            &self.config.output_root,
            &naming::bridge_package(&self.config.package_root, package_name),
            &naming::package_class(package_name),
        )
    }

    /// Create the package file and write the whole class.
    ///
    /// The builder must be [closed](Self::close) afterwards, also on error.
    pub fn build(&mut self, decl: &Declaration) -> Result<PathBuf> {
        let path = self.target_path(&decl.package_name);
        self.file.begin(path.clone())?;
        info!(path = %path.display(), "creating bridge package");

        let Self { config, file } = self;
        let w = file.writer()?;
        let package = &decl.package_name;
        let context = [JavaParam::new(CONTEXT_TYPE, config.context_param.as_str())];

        w.write_package(&naming::bridge_package(&config.package_root, package))?;
        w.write_blank(1)?;
        for import in PACKAGE_IMPORTS {
            w.write_import(import)?;
        }
        w.write_blank(1)?;

        w.write_class_header(&naming::package_class(package), None, Some(PACKAGE_INTERFACE))?;
        w.write_blank(1)?;

        override_header(w, "List<NativeModule>", "createNativeModules", &context)?;
        w.write_statement("List<NativeModule> modules = new ArrayList<>()")?;
        w.write_statement(&format!(
            "modules.add(new {}({}))",
            naming::module_class(package),
            config.context_param
        ))?;
        close_with_return(w, "modules")?;

        override_header(w, "List<Class<? extends JavaScriptModule>>", "createJSModules", &[])?;
        close_with_return(w, EMPTY_LIST)?;

        override_header(w, "List<ViewManager>", "createViewManagers", &context)?;
        close_with_return(w, EMPTY_LIST)?;

        w.write_close()?;
        Ok(path)
    }

    pub fn close(&mut self) -> Result<()> {
        self.file.close()
    }
}

fn override_header(
    w: &mut JavaWriter,
    return_type: &str,
    name: &str,
    params: &[JavaParam],
) -> Result<()> {
    w.write_annotation("Override")?;
    w.write_method_header(return_type, name, params)
}

fn close_with_return(w: &mut JavaWriter, expr: &str) -> Result<()> {
    w.write_return(expr)?;
    w.write_close()?;
    w.write_blank(1)
}
