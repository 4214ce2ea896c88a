//! Driver logic for the `cexpr` binary
//!
//! Kept out of `main.rs` so it can be exercised without spawning a process.

use anyhow::{bail, Context, Result};
use cexpr_common::{ErrorReporter, SymbolKind, SymbolTable};
use cexpr_frontend::{format_expression, Frontend, ParserConfig};
use log::info;
use std::fs;
use std::path::Path;

/// How a parsed expression is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Prefix notation, e.g. `(+ a (* b c))`
    Tree,
    /// The AST as pretty-printed JSON
    Json,
}

/// Names to declare in the global scope before parsing
#[derive(Debug, Clone, Default)]
pub struct Declarations {
    pub variables: Vec<String>,
    pub functions: Vec<String>,
    pub typedefs: Vec<String>,
}

impl Declarations {
    pub fn to_symbol_table(&self) -> SymbolTable {
        let mut symbols = SymbolTable::new();
        let groups = [
            (&self.variables, SymbolKind::Variable),
            (&self.functions, SymbolKind::Function),
            (&self.typedefs, SymbolKind::Type),
        ];

        for (names, kind) in groups {
            for name in names {
                symbols.declare(name, kind);
            }
        }

        symbols
    }
}

pub struct ParseOutcome {
    pub output: String,
    pub reporter: ErrorReporter,
}

/// Read the expression from the command line or from a file. A file also
/// names the source locations.
pub fn read_source(
    expr: Option<String>,
    file: Option<&Path>,
    config: &mut ParserConfig,
) -> Result<String> {
    match (expr, file) {
        (Some(_), Some(_)) => bail!("pass either an expression or --file, not both"),
        (Some(expr), None) => Ok(expr),
        (None, Some(path)) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("Failed to read '{}'", path.display()))?;
            config.filename = path.display().to_string();
            Ok(source)
        }
        (None, None) => bail!("no expression given; pass EXPR or --file"),
    }
}

/// Parse one expression and render it. Parse diagnostics end up in the
/// returned reporter; only lexer and output failures are errors here.
pub fn run_parse(
    source: &str,
    declarations: &Declarations,
    config: ParserConfig,
    format: OutputFormat,
) -> Result<ParseOutcome> {
    let symbols = declarations.to_symbol_table();
    info!("parsing with {} declared symbols, max depth {}", symbols.len(), config.max_depth);

    let parsed = Frontend::parse_expression_source_with_config(source, &symbols, config)?;

    let mut reporter = ErrorReporter::new();
    parsed.report_to(&mut reporter);

    let output = match format {
        OutputFormat::Tree => format_expression(&parsed.expression),
        OutputFormat::Json => serde_json::to_string_pretty(&parsed.expression)
            .context("Failed to serialize expression")?,
    };

    Ok(ParseOutcome { output, reporter })
}

/// One line per token: location, kind and source text
pub fn run_tokens(source: &str) -> Result<String> {
    let tokens = Frontend::tokenize_source(source)?;

    let lines: Vec<String> = tokens
        .iter()
        .map(|token| format!("{}\t{:?}\t{:?}", token.span.start, token.token_type, token.text))
        .collect();

    Ok(lines.join("\n"))
}
