//! Inspect command report data structures.

use gobridge_core::{Declaration, Parameter};

use super::output::{Output, Report};

/// The declarations extracted from one package.
#[derive(Debug)]
pub struct InspectReport {
    pub label: String,
    pub declarations: Vec<Declaration>,
}

fn signature(name: &str, params: &[Parameter], ret: &str) -> String {
    let params = params
        .iter()
        .map(|p| format!("{} {}", p.name, p.type_name))
        .collect::<Vec<_>>()
        .join(", ");
    if ret.is_empty() {
        format!("{name}({params})")
    } else {
        format!("{name}({params}) {ret}")
    }
}

impl Report for InspectReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Package", &self.label);
        for decl in &self.declarations {
            out.newline();
            out.section(&decl.package_name);
            for (callable, ret) in decl.entries() {
                out.list_item(&signature(
                    &callable.name,
                    &callable.parameters,
                    &ret.type_name,
                ));
            }
            if !decl.is_valid() {
                out.warning(&format!("{}: nothing to bridge", decl.package_name));
            }
        }
    }
}
