//! declare — generate `assert` / `expect` test helpers from an `unless` package.
//!
//! Reads the hand-written conditional functions of `internal/unless` (each
//! one takes a trailing `callback func(string)`) and writes a Go package in
//! which every function has a wrapper taking `*testing.T` and reporting the
//! failure through `t.Fatalf` (assert) or `t.Errorf` (expect):
//!
//! ```text
//! declare assert internal/unless pkg/declare/assert
//! ```

mod mode;
mod model;
mod parser;
mod render;
mod scanner;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use mode::ReportingStyle;
use render::GoRenderer;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

/// Source files read from the unless package when `--input` is not given.
const DEFAULT_INPUTS: &[&str] = &["unless.go", "run.go"];

#[derive(Parser)]
#[command(
    name = "declare",
    version,
    about = "Generate assert/expect test helpers from an unless package"
)]
struct Cli {
    /// Package to generate
    #[arg(value_enum)]
    mode: ReportingStyle,

    /// Directory of the unless package
    source_dir: PathBuf,

    /// Directory the generated <MODE>.go is written to
    target_dir: PathBuf,

    /// Go module path used for the generated imports
    #[arg(long, default_value = render::DEFAULT_MODULE)]
    module: String,

    /// Source file inside SOURCE_DIR (repeatable, default: unless.go, run.go)
    #[arg(short = 'i', long = "input")]
    inputs: Vec<String>,
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            eprint!("{e}");
            println!("{}", usage());
            process::exit(1);
        }
    };

    let inputs: Vec<&str> = if cli.inputs.is_empty() {
        DEFAULT_INPUTS.to_vec()
    } else {
        cli.inputs.iter().map(String::as_str).collect()
    };
    let sources = read_sources(&cli.source_dir, &inputs)?;

    let output = generate(cli.mode, &cli.module, &sources)?;

    fs::create_dir_all(&cli.target_dir).with_context(|| {
        format!("failed to create target directory: {}", cli.target_dir.display())
    })?;
    let out_path = cli.target_dir.join(cli.mode.file_name());
    fs::write(&out_path, output)
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    Ok(())
}

/// Usage document printed on any invocation error.
fn usage() -> String {
    let mut text = String::from(
        "Usage: declare <PACKAGE> <UNLESS PACKAGE PATH> <DECLARE PACKAGE PATH>\n\
         \n\
         Reads the conditional functions of an internal/unless package and writes\n\
         <DECLARE PACKAGE PATH>/<PACKAGE>.go, where <PACKAGE> is one of:\n\n",
    );
    for style in ReportingStyle::value_variants() {
        text.push_str(&format!(
            "    *   {:<8}{} ({})\n",
            style.package_name(),
            style.description(),
            style.testing_call()
        ));
    }
    text.push_str(
        "\nOptions:\n\
         \x20   --module <PATH>   Go module path for imports\n\
         \x20   -i, --input <FILE>  Source file inside the unless package (repeatable)",
    );
    text
}

/// Read every input file up front; a missing file aborts before anything is written.
fn read_sources(dir: &Path, names: &[&str]) -> Result<Vec<(PathBuf, String)>> {
    names
        .iter()
        .map(|name| -> Result<(PathBuf, String)> {
            let path = dir.join(name);
            let content = fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok((path, content))
        })
        .collect()
}

/// Core pipeline: scan → sort → parse → render. Returns the file contents
/// including the trailing newline.
fn generate(style: ReportingStyle, module: &str, sources: &[(PathBuf, String)]) -> Result<String> {
    let mut declarations = Vec::new();
    for (path, content) in sources {
        let before = declarations.len();
        declarations.extend(scanner::scan(content));
        if declarations.len() == before {
            eprintln!("warning: no declarations found in {}", path.display());
        }
    }

    let unit = GoRenderer::new(style, module).render(declarations)?;
    let mut text = unit.to_text();
    text.push('\n');
    Ok(text)
}
