//! Go source renderer for the generated `assert` / `expect` packages.

use crate::mode::ReportingStyle;
use crate::model::{Declaration, FunctionSignature, GeneratedUnit};
use crate::parser;
use anyhow::Result;

pub const DEFAULT_MODULE: &str = "github.com/quiteclose/goatly";

const SEPARATOR: &str =
    "///////////////////////////////////////////////////////////////////////////////";

/// Renders wrappers for one reporting style.
pub struct GoRenderer<'a> {
    style: ReportingStyle,
    /// Go module path hosting `internal/unless` and `pkg/run`
    module: &'a str,
}

impl<'a> GoRenderer<'a> {
    pub fn new(style: ReportingStyle, module: &'a str) -> Self {
        GoRenderer { style, module }
    }

    /// Build the whole output file. Declarations are sorted by raw line
    /// before rendering; any malformed line fails the whole unit.
    pub fn render(&self, mut declarations: Vec<Declaration>) -> Result<GeneratedUnit> {
        declarations.sort();

        let functions = declarations
            .iter()
            .map(|decl| -> Result<String> {
                let sig = parser::parse_signature(&decl.line)?;
                Ok(self.render_function(&sig, &decl.comment))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(GeneratedUnit {
            header: self.render_header(),
            functions,
        })
    }

    fn render_header(&self) -> String {
        let package = self.style.package_name();
        let call = self.style.testing_call();
        let category = self.style.error_category();
        let module = self.module;

        let lines = [
            "// Re-implementation of the internal/unless package generated by declare".to_string(),
            format!("// Each function calling {call} with an {category} message if the"),
            "// condition is not met.".to_string(),
            format!("package {package}"),
            String::new(),
            "import (".to_string(),
            "\t\"regexp\"".to_string(),
            "\t\"testing\"".to_string(),
            String::new(),
            format!("\t\"{module}/internal/unless\""),
            format!("\t\"{module}/pkg/run\""),
            ")".to_string(),
            String::new(),
            SEPARATOR.to_string(),
        ];
        lines.join("\n")
    }

    /// One wrapper block. Starts with `\n` so joined blocks are separated by
    /// a blank line.
    fn render_function(&self, sig: &FunctionSignature, comment: &str) -> String {
        let call = self.style.testing_call();
        let category = self.style.error_category();
        let comment = comment.replace("call the callback", &format!("call {call}"));
        let name = &sig.name;
        let params = sig.parameter_list();
        let args = sig.parameter_names();

        format!(
            "\n{comment}func {name}(t *testing.T, {params}, message string) bool {{\n\
             \treturn unless.{name}({args}, func(s string) {{\n\
             \t\t{call}(\"{category}: %s\\n%s\", message, s)\n\
             \t}})\n\
             }}"
        )
    }
}
