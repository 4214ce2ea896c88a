//! cexpr driver
//!
//! Command-line front end for the expression parser: dumps the token stream
//! or the parsed expression tree along with any diagnostics.

use anyhow::{ensure, Result};
use cexpr_driver::{read_source, run_parse, run_tokens, Declarations, OutputFormat};
use cexpr_frontend::ParserConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cexpr")]
#[command(about = "C expression parser")]
#[command(version = "0.1.0")]
struct Cli {
    /// Verbose output (debug-level logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one expression and print its tree
    Parse {
        /// Expression source text
        expr: Option<String>,

        /// Read the expression from a file instead
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Declare a variable
        #[arg(long = "var", value_name = "NAME")]
        vars: Vec<String>,

        /// Declare a function
        #[arg(long = "func", value_name = "NAME")]
        funcs: Vec<String>,

        /// Declare a typedef name
        #[arg(long = "typedef", value_name = "NAME")]
        typedefs: Vec<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "tree")]
        format: OutputFormat,

        /// Parser configuration file (JSON)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Maximum nesting depth, overriding the configuration
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// Print the token stream
    Tokens {
        /// Expression source text
        expr: Option<String>,

        /// Read the expression from a file instead
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::Parse { expr, file, vars, funcs, typedefs, format, config, max_depth } => {
            let mut config = match config {
                Some(path) => ParserConfig::load(&path)?,
                None => ParserConfig::default(),
            };
            if let Some(max_depth) = max_depth {
                ensure!(max_depth > 0, "--max-depth must be at least 1");
                config = config.with_max_depth(max_depth);
            }

            let source = read_source(expr, file.as_deref(), &mut config)?;
            let declarations = Declarations {
                variables: vars,
                functions: funcs,
                typedefs,
            };

            let outcome = run_parse(&source, &declarations, config, format)?;
            println!("{}", outcome.output);

            if outcome.reporter.has_errors() {
                outcome.reporter.print_diagnostics();
                eprintln!("{}", outcome.reporter.summary());
                std::process::exit(1);
            }
        }
        Commands::Tokens { expr, file } => {
            let source = read_source(expr, file.as_deref(), &mut ParserConfig::default())?;
            println!("{}", run_tokens(&source)?);
        }
    }

    Ok(())
}
