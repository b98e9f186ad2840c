//! `gobridge.toml` loading and command-line overrides.

use std::{
    fs,
    path::{Path, PathBuf},
};

use gobridge_codegen_java::{
    BridgeConfig, DEFAULT_CONTEXT_PARAM, DEFAULT_OUTPUT_ROOT, DEFAULT_PACKAGE_ROOT,
};
use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_FILE: &str = "gobridge.toml";

/// Package bridged when neither the config file nor the command line names one.
pub const DEFAULT_SOURCE_PACKAGE: &str = "golang.org/x/mobile/example/bind/hello";

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read '{}'", .path.display())]
    #[diagnostic(code(gobridge::config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {name}")]
    #[diagnostic(code(gobridge::config::parse))]
    Parse {
        name: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

/// Contents of `gobridge.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GobridgeToml {
    pub bridge: BridgeSection,
    pub source: SourceSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BridgeSection {
    pub output: PathBuf,
    pub package_root: String,
    pub context_param: String,
}

impl Default for BridgeSection {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            package_root: DEFAULT_PACKAGE_ROOT.to_string(),
            context_param: DEFAULT_CONTEXT_PARAM.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceSection {
    /// Go import paths, resolved below `$GOPATH/src`.
    pub packages: Vec<String>,
    /// A package directory read directly instead of `packages`.
    pub dir: Option<PathBuf>,
}

impl Default for SourceSection {
    fn default() -> Self {
        Self {
            packages: vec![DEFAULT_SOURCE_PACKAGE.to_string()],
            dir: None,
        }
    }
}

impl GobridgeToml {
    pub fn parse(src: &str, name: &str) -> Result<Self, Box<ConfigError>> {
        toml::from_str(src).map_err(|source: toml::de::Error| {
            Box::new(ConfigError::Parse {
                name: name.to_string(),
                span: source.span().map(SourceSpan::from),
                src: NamedSource::new(name, src.to_string()),
                source,
            })
        })
    }

    pub fn open(path: &Path) -> Result<Self, Box<ConfigError>> {
        let src = fs::read_to_string(path).map_err(|source| {
            Box::new(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        })?;
        Self::parse(&src, &path.display().to_string())
    }

    /// Load an explicitly named file, or `./gobridge.toml` when present, or
    /// the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, Box<ConfigError>> {
        match explicit {
            Some(path) => Self::open(path),
            None if Path::new(CONFIG_FILE).is_file() => Self::open(Path::new(CONFIG_FILE)),
            None => Ok(Self::default()),
        }
    }
}

/// Where the Go sources of one run come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageSource {
    /// An import path located through `GOPATH`.
    ImportPath(String),
    /// A package directory.
    Dir(PathBuf),
}

impl PackageSource {
    pub fn label(&self) -> String {
        match self {
            Self::ImportPath(path) => path.clone(),
            Self::Dir(dir) => dir.display().to_string(),
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub packages: Vec<String>,
    pub output: Option<PathBuf>,
    pub package_root: Option<String>,
    pub source_dir: Option<PathBuf>,
}

/// Fully resolved settings of one `generate` run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub bridge: BridgeConfig,
    pub sources: Vec<PackageSource>,
}

impl Settings {
    pub fn resolve(file: GobridgeToml, overrides: Overrides) -> Self {
        let GobridgeToml { bridge, source } = file;
        let config = BridgeConfig::new(overrides.output.unwrap_or(bridge.output))
            .with_package_root(overrides.package_root.unwrap_or(bridge.package_root))
            .with_context_param(bridge.context_param);

        // Flags first, then the file; within each, a directory beats import paths.
        let sources = if let Some(dir) = overrides.source_dir {
            vec![PackageSource::Dir(dir)]
        } else if !overrides.packages.is_empty() {
            overrides
                .packages
                .into_iter()
                .map(PackageSource::ImportPath)
                .collect()
        } else if let Some(dir) = source.dir {
            vec![PackageSource::Dir(dir)]
        } else {
            source
                .packages
                .into_iter()
                .map(PackageSource::ImportPath)
                .collect()
        };

        Self {
            bridge: config,
            sources,
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::resolve(GobridgeToml::default(), Overrides::default());

        assert_eq!(settings.bridge, BridgeConfig::default());
        assert_eq!(
            settings.sources,
            vec![PackageSource::ImportPath(DEFAULT_SOURCE_PACKAGE.to_string())]
        );
    }

    #[test]
    fn test_parse_partial_file() {
        let file = GobridgeToml::parse(
            r#"
            [bridge]
            package_root = "com.acme"

            [source]
            packages = ["example.com/greeter"]
            "#,
            "gobridge.toml",
        )
        .unwrap();

        assert_eq!(file.bridge.package_root, "com.acme");
        assert_eq!(file.bridge.output, PathBuf::from(DEFAULT_OUTPUT_ROOT));
        assert_eq!(file.bridge.context_param, DEFAULT_CONTEXT_PARAM);
        assert_eq!(file.source.packages, vec!["example.com/greeter"]);
    }

    #[test]
    fn test_parse_error_has_span() {
        let err = GobridgeToml::parse("[bridge]\nout put = 1\n", "gobridge.toml").unwrap_err();

        match *err {
            ConfigError::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(GobridgeToml::parse("[bridge]\noutputs = \"x\"\n", "gobridge.toml").is_err());
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = GobridgeToml::parse(
            r#"
            [bridge]
            output = "android/java"
            package_root = "com.acme"
            context_param = "ctx"
            "#,
            "gobridge.toml",
        )
        .unwrap();
        let overrides = Overrides {
            packages: vec!["example.com/a".into(), "example.com/b".into()],
            output: Some(PathBuf::from("out")),
            package_root: Some(String::new()),
            source_dir: None,
        };

        let settings = Settings::resolve(file, overrides);

        assert_eq!(settings.bridge.output_root, PathBuf::from("out"));
        assert_eq!(settings.bridge.package_root, "");
        assert_eq!(settings.bridge.context_param, "ctx");
        assert_eq!(settings.sources.len(), 2);
    }

    #[test]
    fn test_source_dir_wins() {
        let overrides = Overrides {
            packages: vec!["example.com/a".into()],
            source_dir: Some(PathBuf::from("go/hello")),
            ..Overrides::default()
        };

        let settings = Settings::resolve(GobridgeToml::default(), overrides);

        assert_eq!(
            settings.sources,
            vec![PackageSource::Dir(PathBuf::from("go/hello"))]
        );
    }

    #[test]
    fn test_cli_packages_beat_file_dir() {
        let file = GobridgeToml::parse("[source]\ndir = \"go/hello\"\n", "gobridge.toml").unwrap();
        let overrides = Overrides {
            packages: vec!["example.com/a".into()],
            ..Overrides::default()
        };

        let settings = Settings::resolve(file, overrides);

        assert_eq!(
            settings.sources,
            vec![PackageSource::ImportPath("example.com/a".into())]
        );
    }

    #[test]
    fn test_file_dir_beats_file_packages() {
        let file = GobridgeToml::parse(
            "[source]\npackages = [\"example.com/a\"]\ndir = \"go/hello\"\n",
            "gobridge.toml",
        )
        .unwrap();

        let settings = Settings::resolve(file, Overrides::default());

        assert_eq!(
            settings.sources,
            vec![PackageSource::Dir(PathBuf::from("go/hello"))]
        );
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();

        let err = GobridgeToml::open(&temp.path().join(CONFIG_FILE)).unwrap_err();

        assert!(matches!(*err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_open_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "[source]\ndir = \"go/hello\"\n").unwrap();

        let file = GobridgeToml::load(Some(&path)).unwrap();

        assert_eq!(file.source.dir, Some(PathBuf::from("go/hello")));
    }
}
