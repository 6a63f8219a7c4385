//! sqlfront CLI
//!
//! Parses one SQL statement and prints its parse tree, or its tokens, as
//! JSON.

use std::io::Read;

use anyhow::Context;
use clap::Parser as ClapParser;
use serde::Serialize;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use sqlfront_core::{Dialect, Parser, ParserConfig, DEFAULT_LOOKAHEAD};

/// Parse a SQL statement and print the parse tree as JSON.
#[derive(ClapParser)]
#[command(name = "sqlfront")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQL dialect (ansi, mysql).
    #[arg(short, long, env = "SQLFRONT_DIALECT", default_value = "ansi")]
    dialect: String,

    /// Depth of the lexer's token push-back window.
    #[arg(long, default_value_t = DEFAULT_LOOKAHEAD)]
    lookahead: usize,

    /// Print the token stream instead of the parse tree.
    #[arg(long)]
    tokens: bool,

    /// Print JSON on a single line.
    #[arg(long)]
    compact: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// The statement to parse. Read from stdin when omitted.
    sql: Option<String>,
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> anyhow::Result<()> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{json}");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let dialect = Dialect::by_name(&cli.dialect)?;
    let parser = Parser::with_config(
        dialect,
        ParserConfig {
            lookahead: cli.lookahead,
        },
    );

    let sql = match cli.sql {
        Some(sql) => sql,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read statement from stdin")?;
            buf
        }
    };
    debug!(dialect = dialect.name(), "read {} bytes of SQL", sql.len());

    if cli.tokens {
        return print_json(&parser.tokenize(&sql), cli.compact);
    }

    let statement = parser.parse(&sql)?;
    print_json(&statement, cli.compact)
}
