//!
//! pointcut CLI - Inspect pointcut expressions
//!
//! - pointcut parse <EXPR>: Print the parsed AST
//! - pointcut tokens <EXPR>: Print the lexeme stream
//! - pointcut check <FILE>: Parse every rule in a file, one per line
//!

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::{debug, info};

use pointcut::config::{Config, OutputFormat, parse_level};
use pointcut::{DiagnosticReporter, Error, Pointcut, parse_pointcut, tokenize};

#[derive(Parser)]
#[command(name = "pointcut")]
#[command(author, version, about = "Pointcut expression inspector", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to ./pointcut.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a pointcut and print its AST
    Parse {
        /// The pointcut expression
        expr: String,

        /// Output format (overrides the config file)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print the lexemes of a pointcut
    Tokens {
        /// The pointcut expression
        expr: String,
    },

    /// Parse every non-blank, non-comment line of a file
    Check {
        /// File with one pointcut per line
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match Config::discover(cli.config.as_deref(), Path::new(".")) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    let level = cli.log_level.as_deref().unwrap_or(&config.log.level);
    let level = match parse_level(level) {
        Ok(level) => level,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_max_level(level)
        .init();

    debug!(?config, "configuration loaded");

    let ok = match cli.command {
        Commands::Parse { expr, format } => {
            parse_expr(&expr, format.unwrap_or(config.output.format))
        }
        Commands::Tokens { expr } => print_tokens(&expr),
        Commands::Check { file } => check_file(&file),
    };

    if !ok {
        std::process::exit(1);
    }
}

fn parse_expr(expr: &str, format: OutputFormat) -> bool {
    match parse_pointcut(expr) {
        Ok(pointcut) => print_pointcut(&pointcut, format),
        Err(e) => {
            DiagnosticReporter::new("<expr>", expr).report(&e);
            false
        }
    }
}

fn print_pointcut(pointcut: &Pointcut, format: OutputFormat) -> bool {
    match format {
        OutputFormat::Text => println!("{:?}: {}", pointcut.kind(), pointcut),
        OutputFormat::Debug => println!("{:#?}", pointcut),
        OutputFormat::Json => match serde_json::to_string_pretty(pointcut) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing AST: {}", e);
                return false;
            }
        },
    }
    true
}

fn print_tokens(expr: &str) -> bool {
    let lexemes = match tokenize(expr) {
        Ok(lexemes) => lexemes,
        Err(e) => {
            DiagnosticReporter::new("<expr>", expr).report(&e);
            return false;
        }
    };

    for lexeme in &lexemes {
        println!(
            "{:>3}..{:<3} {:<20} {:?}",
            lexeme.span.start,
            lexeme.span.end,
            lexeme.kind().to_string(),
            expr.get(lexeme.span.start as usize..lexeme.span.end as usize)
                .unwrap_or_default()
        );
    }
    true
}

fn check_file(path: &Path) -> bool {
    let content = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading file: {}", e);
            return false;
        }
    };

    let file_name = path.display().to_string();
    let mut checked = 0;
    let mut failed = 0;

    for (index, line) in content.lines().enumerate() {
        let rule = line.trim();
        if rule.is_empty() || rule.starts_with("//") {
            continue;
        }

        checked += 1;
        if let Err(e) = check_rule(rule) {
            failed += 1;
            let name = format!("{}:{}", file_name, index + 1);
            DiagnosticReporter::new(&name, rule).report(&e);
        }
    }

    info!(checked, failed, "check finished");

    if failed > 0 {
        eprintln!("{} of {} pointcuts in {} failed", failed, checked, file_name);
        false
    } else {
        println!("{} pointcuts in {} parsed", checked, file_name);
        true
    }
}

fn check_rule(rule: &str) -> Result<Pointcut, Error> {
    let pointcut = parse_pointcut(rule)?;
    debug!(kind = ?pointcut.kind(), rendered = %pointcut, "parsed");
    Ok(pointcut)
}
