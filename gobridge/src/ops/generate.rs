//! Generate operation: extract every package and build its bridge files.

use gobridge_codegen_java::{BridgeConfig, GeneratedBridge, generate_bridge};
use gobridge_parser::{Extractor, extract_package};
use tracing::{debug, error, warn};

use super::{PackageError, package_dir};
use crate::{
    config::{PackageSource, Settings},
    reports::{GenerateReport, PackageOutcome},
};

/// Execute the generate operation.
///
/// A failing package is recorded in the report and the run moves on.
pub fn generate(settings: &Settings) -> GenerateReport {
    let packages = settings
        .sources
        .iter()
        .map(|source| {
            let label = source.label();
            let result = generate_package(source, &settings.bridge);
            if let Err(err) = &result {
                error!(package = %label, "{err}");
            }
            PackageOutcome { label, result }
        })
        .collect();

    GenerateReport {
        output_root: settings.bridge.output_root.clone(),
        packages,
    }
}

fn generate_package(
    source: &PackageSource,
    config: &BridgeConfig,
) -> Result<Vec<GeneratedBridge>, PackageError> {
    let dir = package_dir(source)?;
    debug!(dir = %dir.display(), "extracting package");
    let declarations = extract_package(&dir, &Extractor::go())?;

    let mut bridges = Vec::new();
    for decl in &declarations {
        let Some(bridge) = generate_bridge(decl, config)? else {
            continue;
        };
        // Every file of a package targets the same two paths.
        if bridges.contains(&bridge) {
            warn!(
                module = %bridge.module.display(),
                "bridge overwritten by a later file of the package"
            );
        } else {
            bridges.push(bridge);
        }
    }
    Ok(bridges)
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use tempfile::TempDir;

    use super::*;

    const HELLO_GO: &str = "package hello\n\nfunc Greet(name string) string { return name }\n";

    fn settings(out: &TempDir, sources: Vec<PackageSource>) -> Settings {
        Settings {
            bridge: BridgeConfig::new(out.path()),
            sources,
        }
    }

    #[test]
    fn test_generate_from_dir() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::write(src.path().join("hello.go"), HELLO_GO).unwrap();

        let report = generate(&settings(
            &out,
            vec![PackageSource::Dir(src.path().to_path_buf())],
        ));

        assert_eq!(report.generated_files(), 2);
        assert_eq!(report.failed_packages(), 0);
        assert!(
            out.path()
                .join("com/reactgohybrid/bridge/hello/HelloModule.java")
                .is_file()
        );
    }

    #[test]
    fn test_failure_does_not_stop_run() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::write(src.path().join("hello.go"), HELLO_GO).unwrap();
        let missing = PathBuf::from(src.path()).join("missing");

        let report = generate(&settings(
            &out,
            vec![
                PackageSource::Dir(missing),
                PackageSource::Dir(src.path().to_path_buf()),
            ],
        ));

        assert_eq!(report.failed_packages(), 1);
        assert!(report.packages[0].result.is_err());
        assert_eq!(report.generated_files(), 2);
    }

    #[test]
    fn test_files_of_one_package_share_a_bridge() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::write(src.path().join("a.go"), HELLO_GO).unwrap();
        fs::write(
            src.path().join("b.go"),
            "package hello\n\nfunc Count() int { return 0 }\n",
        )
        .unwrap();

        let report = generate(&settings(
            &out,
            vec![PackageSource::Dir(src.path().to_path_buf())],
        ));

        assert_eq!(report.generated_files(), 2);
        let module = fs::read_to_string(
            out.path()
                .join("com/reactgohybrid/bridge/hello/HelloModule.java"),
        )
        .unwrap();
        assert!(module.contains("public void count(Promise promise)"));
        assert!(!module.contains("greet"));
    }

    #[test]
    fn test_package_without_exports_generates_nothing() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::write(src.path().join("quiet.go"), "package quiet\n\nfunc hidden() {}\n").unwrap();

        let report = generate(&settings(
            &out,
            vec![PackageSource::Dir(src.path().to_path_buf())],
        ));

        assert_eq!(report.failed_packages(), 0);
        assert_eq!(report.generated_files(), 0);
    }
}
