//! Declaration line parser.
//!
//! Accepts exactly one shape:
//!
//! ```text
//! func <Name>(<arg1> <type1>, <arg2> <type2>, ..., callback func(string)) {
//! ```
//!
//! The name runs up to the first `(`; the parameter list runs from there to
//! the first `, callback func`. The list is split on `, ` and the first word
//! of each token is its bare name. No type checking is done.

use crate::model::{FunctionSignature, Parameter};
use anyhow::{bail, Result};
use regex::Regex;
use std::sync::LazyLock;

static RE_SIGNATURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^func (?P<name>[^(]*)\((?P<params>.*?), callback func").unwrap()
});

/// Parse a trimmed `func` line into its name and non-callback parameters.
pub fn parse_signature(line: &str) -> Result<FunctionSignature> {
    let Some(caps) = RE_SIGNATURE.captures(line) else {
        bail!("malformed declaration (expected `func Name(..., callback func(string))`): {line}");
    };

    let parameters = caps["params"].split(", ").map(parse_parameter).collect();

    Ok(FunctionSignature {
        name: caps["name"].to_string(),
        parameters,
    })
}

fn parse_parameter(token: &str) -> Parameter {
    match token.split_once(' ') {
        Some((name, ty)) => Parameter {
            name: name.to_string(),
            type_expr: Some(ty.to_string()),
        },
        None => Parameter {
            name: token.to_string(),
            type_expr: None,
        },
    }
}
