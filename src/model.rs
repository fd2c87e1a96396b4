//! Data model for scanned declarations and generated output.

use std::fmt;

/// A declaration line paired with the comment block that preceded it.
///
/// Field order matters: the derived `Ord` sorts by the raw line first and
/// only falls back to the comment for identical lines.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Declaration {
    /// Trimmed `func ...` line
    pub line: String,
    /// Raw comment lines, each terminated by `\n`; empty when none preceded
    pub comment: String,
}

/// One `name type` token of a parameter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    /// Everything after the first space; `None` for grouped names like `a` in `a, b int`
    pub type_expr: Option<String>,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.type_expr {
            Some(ref ty) => write!(f, "{} {}", self.name, ty),
            None => f.write_str(&self.name),
        }
    }
}

/// A parsed conditional function, minus its trailing callback parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    pub name: String,
    pub parameters: Vec<Parameter>,
}

impl FunctionSignature {
    /// Parameter list as written in the source, e.g. `a, b interface{}`.
    pub fn parameter_list(&self) -> String {
        self.parameters
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Bare names for the delegating call, e.g. `a, b`.
    pub fn parameter_names(&self) -> String {
        self.parameters
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// The rendered output file: header plus one block per function.
#[derive(Debug)]
pub struct GeneratedUnit {
    pub header: String,
    pub functions: Vec<String>,
}

impl GeneratedUnit {
    /// Final file contents without the trailing newline added on write.
    pub fn to_text(&self) -> String {
        let mut parts = Vec::with_capacity(self.functions.len() + 1);
        parts.push(self.header.as_str());
        parts.extend(self.functions.iter().map(String::as_str));
        parts.join("\n")
    }
}
