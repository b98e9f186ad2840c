//! `{Name}Module.java`: a React Native native module wrapping each exported
//! Go function in a promise-returning `@ReactMethod`.

use std::path::{Path, PathBuf};

use gobridge_core::{Callable, Declaration, JavaTypeMapper, Parameter, TypeMapper};
use tracing::info;

use crate::{
    config::BridgeConfig,
    error::Result,
    lifecycle::{BridgeFile, BuildState},
    naming,
    writer::{JavaParam, JavaWriter},
};

const MODULE_IMPORTS: &[&str] = &[
    "com.facebook.react.bridge.ReactApplicationContext",
    "com.facebook.react.bridge.Promise",
    "com.facebook.react.bridge.ReactContextBaseJavaModule",
    "com.facebook.react.bridge.ReactMethod",
];

const BASE_CLASS: &str = "ReactContextBaseJavaModule";
const CONTEXT_TYPE: &str = "ReactApplicationContext";
const RETURN_BINDING: &str = "returnParam1";

/// Builds the module class for one [`Declaration`].
#[derive(Debug)]
pub struct ModuleBuilder<M = JavaTypeMapper> {
    config: BridgeConfig,
    mapper: M,
    file: BridgeFile,
}

impl ModuleBuilder {
    pub fn new(config: BridgeConfig) -> Self {
        Self::with_mapper(config, JavaTypeMapper)
    }
}

impl<M: TypeMapper> ModuleBuilder<M> {
    pub fn with_mapper(config: BridgeConfig, mapper: M) -> Self {
        Self {
            config,
            mapper,
            file: BridgeFile::new(),
        }
    }

    pub fn state(&self) -> BuildState {
        self.file.state()
    }

    /// Path of the file being built, once [`build`](Self::build) has started.
    pub fn path(&self) -> Option<&Path> {
        self.file.path()
    }

    /// Output path for `package_name` under this builder's configuration.
    pub fn target_path(&self, package_name: &str) -> PathBuf {
        naming::java_file_path(
            &self.config.output_root,
            &naming::bridge_package(&self.config.package_root, package_name),
            &naming::module_class(package_name),
        )
    }

    /// Create the module file and write the whole class.
    ///
    /// The builder must be [closed](Self::close) afterwards, also on error.
    pub fn build(&mut self, decl: &Declaration) -> Result<PathBuf> {
        let path = self.target_path(&decl.package_name);
        self.file.begin(path.clone())?;
        info!(path = %path.display(), "creating bridge module");

        let Self {
            config,
            mapper,
            file,
        } = self;
        let w = file.writer()?;
        let package = &decl.package_name;
        let class = naming::module_class(package);

        w.write_package(&naming::bridge_package(&config.package_root, package))?;
        w.write_blank(1)?;
        for import in MODULE_IMPORTS {
            w.write_import(import)?;
        }
        w.write_import(&naming::go_import(package))?;
        w.write_blank(1)?;

        w.write_class_header(&class, Some(BASE_CLASS), None)?;
        w.write_blank(1)?;
        write_constructor(w, &class, &config.context_param)?;
        write_get_name(w, &class)?;

        let target = naming::type_name(package);
        for (callable, ret) in decl.entries() {
            write_react_method(w, &*mapper, &target, callable, ret)?;
        }

        w.write_close()?;
        Ok(path)
    }

    pub fn close(&mut self) -> Result<()> {
        self.file.close()
    }
}

fn write_constructor(w: &mut JavaWriter, class: &str, context: &str) -> Result<()> {
    w.write_constructor_header(class, &[JavaParam::new(CONTEXT_TYPE, context)])?;
    w.write_super(context)?;
    w.write_close()?;
    w.write_blank(1)
}

fn write_get_name(w: &mut JavaWriter, class: &str) -> Result<()> {
    w.write_annotation("Override")?;
    w.write_method_header("String", "getName", &[])?;
    w.write_return_literal(class)?;
    w.write_close()?;
    w.write_blank(1)
}

fn write_react_method<M: TypeMapper>(
    w: &mut JavaWriter,
    mapper: &M,
    target: &str,
    callable: &Callable,
    ret: &Parameter,
) -> Result<()> {
    let method = naming::method_name(&callable.name);
    let mut params: Vec<JavaParam> = callable
        .parameters
        .iter()
        .map(|p| JavaParam::new(mapper.map_type(&p.type_name), p.name.as_str()))
        .collect();
    params.push(JavaParam::new("Promise", "promise"));

    let args = callable
        .parameters
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let call = format!("{target}.{method}({args})");
    // Only a mapped result gets a local binding; anything else is a bare call.
    let return_type = Some(ret)
        .filter(|ret| ret.has_type())
        .map(|ret| mapper.map_type(&ret.type_name))
        .filter(|java| !java.is_empty());

    w.write_annotation("ReactMethod")?;
    w.write_method_header("void", &method, &params)?;
    w.write_try()?;
    match return_type {
        Some(java) => {
            w.write_statement(&format!("{java} {RETURN_BINDING} = {call}"))?;
            w.write_statement(&format!("promise.resolve({RETURN_BINDING})"))?;
        }
        None => w.write_statement(&call)?,
    }
    w.write_catch("promise.reject(\"Error\", e)")?;
    w.write_close()?;
    w.write_blank(1)
}
