use std::path::PathBuf;

/// Default source root of an Android React Native app.
pub const DEFAULT_OUTPUT_ROOT: &str = "app/src/main/java";
pub const DEFAULT_PACKAGE_ROOT: &str = "com.reactgohybrid";
pub const DEFAULT_CONTEXT_PARAM: &str = "reactContext";

/// Settings shared by the module and package builders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Directory the Java package tree is written below.
    pub output_root: PathBuf,
    /// Dotted Java package the `bridge` package is nested in. May be empty.
    pub package_root: String,
    /// Name of the constructor-injected `ReactApplicationContext`.
    pub context_param: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            package_root: DEFAULT_PACKAGE_ROOT.to_string(),
            context_param: DEFAULT_CONTEXT_PARAM.to_string(),
        }
    }
}

impl BridgeConfig {
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
            ..Self::default()
        }
    }

    pub fn with_package_root(mut self, root: impl Into<String>) -> Self {
        self.package_root = root.into();
        self
    }

    pub fn with_context_param(mut self, name: impl Into<String>) -> Self {
        self.context_param = name.into();
        self
    }
}
